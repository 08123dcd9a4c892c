/// Errors raised while building a [`crate::GeometryIndex`].
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum GeometryError {
    /// The height function returned a negative height.
    #[error("item {index} has negative height {height}")]
    NegativeHeight { index: usize, height: f64 },
    /// The height function returned NaN or an infinite height.
    #[error("item {index} has a non-finite height")]
    NonFiniteHeight { index: usize },
}

impl GeometryError {
    /// Index of the offending item.
    pub fn index(&self) -> usize {
        match *self {
            Self::NegativeHeight { index, .. } | Self::NonFiniteHeight { index } => index,
        }
    }
}
