//! User defined callback hook executed after each accepted step.

use crate::{Float, core::interpolate::Interpolate};

/// Return flags for [`SolOut`].
///
/// - `Continue`: proceed with integration as normal.
/// - `Interrupt`: stop integration and return control to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlFlag {
    Continue,
    Interrupt,
}

/// Callback hook executed once before the first step and after every accepted step.
///
/// The arguments are:
/// - `xold`: the left end of the last accepted step (equal to `x` on the initial call),
/// - `x`: the abscissa after the accepted step,
/// - `y`: the solution at `x`,
/// - `interpolator`: dense output covering `[xold, x]`, absent on the initial call.
pub trait SolOut {
    fn solout<I: Interpolate>(
        &mut self,
        xold: Float,
        x: Float,
        y: Float,
        interpolator: Option<&I>,
    ) -> ControlFlag;
}
