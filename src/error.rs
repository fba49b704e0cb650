//! Errors for problem setup and solver contracts

use crate::Float;

/// Errors returned by the grid builder, the integrators and the reference adapter.
///
/// Numeric degeneracy (a right-hand side evaluating to NaN or infinity) is not
/// an error: it propagates through the trajectories as data.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The run configuration was rejected before any computation started.
    #[error("invalid configuration: {0}")]
    Configuration(#[from] ConfigurationError),

    /// A reference solver returned a trajectory that is not aligned with the grid.
    #[error("reference trajectory has {found} points but the grid has {expected}")]
    ContractViolation { expected: usize, found: usize },
}

/// Validation failures for a [`Problem`](crate::Problem) or DOPRI5 [`Settings`](crate::Settings).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("step size h has invalid sign or magnitude (got {0})")]
    InvalidStepSize(Float),
    #[error("interval bound must be finite (got {0})")]
    NonFiniteBound(Float),
    #[error("initial value must be finite (got {0})")]
    NonFiniteInitialValue(Float),
    #[error("grid needs {steps} steps but nmax is {nmax}")]
    GridTooLarge { steps: Float, nmax: usize },
    #[error("nmax must be positive (got {0})")]
    NMaxMustBePositive(usize),
    #[error("nstiff must be positive (got {0})")]
    NStiffMustBePositive(usize),
    #[error("uround must be in (1e-35, 1.0) (got {0})")]
    URoundOutOfRange(Float),
    #[error("safety_factor must be in (1e-4, 1.0) (got {0})")]
    SafetyFactorOutOfRange(Float),
    #[error("beta must be <= 0.2 (got {0})")]
    BetaTooLarge(Float),
    #[error("tolerances must be positive (got rtol = {rtol}, atol = {atol})")]
    NonPositiveTolerance { rtol: Float, atol: Float },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configuration_errors_convert_with_question_mark() {
        fn check() -> Result<(), Error> {
            let validated: Result<(), ConfigurationError> =
                Err(ConfigurationError::InvalidStepSize(0.0));
            validated?;
            Ok(())
        }

        assert_eq!(
            check(),
            Err(Error::Configuration(ConfigurationError::InvalidStepSize(0.0)))
        );
    }

    #[test]
    fn messages_name_the_offending_value() {
        let err = Error::ContractViolation {
            expected: 11,
            found: 10,
        };
        assert_eq!(
            err.to_string(),
            "reference trajectory has 10 points but the grid has 11"
        );

        let err = Error::from(ConfigurationError::BetaTooLarge(0.5));
        assert_eq!(err.to_string(), "invalid configuration: beta must be <= 0.2 (got 0.5)");
    }
}
