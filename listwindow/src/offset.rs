use crate::GeometryIndex;

/// Largest scroll offset that still keeps content under the whole viewport.
///
/// `max(0, total_height - viewport_height)`; `0.0` when the content fits.
pub fn max_offset<K>(viewport_height: f64, index: &GeometryIndex<K>) -> f64 {
    (index.total_height() - viewport_height).max(0.0)
}

/// Clamps `offset` into `[0, max_offset(viewport_height, index)]`.
pub fn clamp_offset<K>(offset: f64, viewport_height: f64, index: &GeometryIndex<K>) -> f64 {
    clamp_to_max(offset, max_offset(viewport_height, index))
}

pub(crate) fn clamp_to_max(offset: f64, max: f64) -> f64 {
    offset.max(0.0).min(max)
}
