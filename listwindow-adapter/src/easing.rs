/// Time-remapping curves for scroll animations.
///
/// Every curve maps `[0, 1]` onto `[0, 1]`, is monotonically non-decreasing and satisfies
/// `sample(0) == 0` and `sample(1) == 1`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    Linear,
    SmoothStep,
    EaseInOutCubic,
    #[default]
    EaseInOutQuint,
}

impl Easing {
    /// Samples the curve at normalized time `t`. Values outside `[0, 1]` are clamped.
    pub fn sample(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::SmoothStep => t * t * (3.0 - 2.0 * t),
            Self::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - (u * u * u) / 2.0
                }
            }
            Self::EaseInOutQuint => {
                if t < 0.5 {
                    16.0 * t * t * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - (u * u * u * u * u) / 2.0
                }
            }
        }
    }
}
