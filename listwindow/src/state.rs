/// A lightweight, serializable snapshot of the measured viewport.
///
/// Both dimensions are `0.0` until the size provider reports a measurement.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewportState {
    pub width: f64,
    pub height: f64,
}

impl ViewportState {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}
