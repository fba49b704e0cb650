//! Settings for the adaptive reference integrator

use bon::Builder;

use crate::Float;

#[derive(Builder, Clone, Debug, PartialEq)]
/// Settings for [`dopri5`](crate::methods::dp::dopri5).
///
/// Optional fields fall back to the defaults listed on each field, which suit
/// most smooth problems.
pub struct Settings {
    /// Relative tolerance for the local error estimate. Default: `1e-10`.
    #[builder(default = 1e-10)]
    pub rtol: Float,
    /// Absolute tolerance for the local error estimate. Default: `1e-10`.
    #[builder(default = 1e-10)]
    pub atol: Float,
    /// The rounding unit, typically machine epsilon. Default: `2.3e-16`.
    pub uround: Option<Float>,
    /// Safety factor in step-size prediction. Default: `0.9`.
    pub safety_factor: Option<Float>,
    /// Parameter for step size selection where scale_min <= hnew/hold <= scale_max.
    /// Default: `0.2`.
    pub scale_min: Option<Float>,
    /// Parameter for step size selection where scale_min <= hnew/hold <= scale_max.
    /// Default: `10.0`.
    pub scale_max: Option<Float>,
    /// Beta factor for stabilized step size control. Positive values of Beta
    /// ( <= 0.04 ) make the step size control more stable. Default: `0.04`.
    pub beta: Option<Float>,
    /// Maximal step size. Default: the length of the interval.
    pub hmax: Option<Float>,
    /// Initial step size. None will result in an initial guess
    /// provided by [`hinit`](crate::methods::hinit).
    pub h0: Option<Float>,
    /// Maximum number of allowed steps. Default: `100_000`.
    pub nmax: Option<usize>,
    /// Number of accepted steps between stiffness tests. Default: `1000`.
    pub nstiff: Option<usize>,
}

impl Default for Settings {
    fn default() -> Self {
        Self::builder().build()
    }
}
