//! DOPRI5 - Dormand–Prince 5(4) explicit Runge–Kutta integrator
//!
//! Reference
//! - E. Hairer, S. P. Nørsett, and G. Wanner, "Solving Ordinary Differential
//!   Equations I. Nonstiff Problems", 2nd ed., Springer (1993).
//!

use log::warn;

use crate::{
    Float,
    core::{
        interpolate::Interpolate,
        ode::ODE,
        solout::{ControlFlag, SolOut},
        status::Status,
    },
    error::{ConfigurationError, Error},
    methods::{hinit::hinit, result::IntegrationResult, settings::Settings},
};

/// Dormand–Prince DOPRI5, an explicit embedded Runge–Kutta 5(4) solver with
/// adaptive step-size control and dense output.
///
/// Integrates the scalar problem `y' = f(y, x)` from `x` to `xend`, advancing
/// `y` in-place. The local error of every step is kept below
/// `atol + rtol * |y|`; steps are accepted or rejected accordingly and the
/// step size is adapted with Lund stabilisation (`beta`).
///
/// When `solout` is provided it is called once before the first step and after
/// every accepted step, together with a 4th-order dense output covering the
/// step, which is how solutions are sampled at arbitrary abscissae.
///
/// # Errors
///
/// Returns [`Error::Configuration`] when a setting is out of range. Running
/// out of steps, step size underflow and stiffness are not errors: they are
/// reported through [`IntegrationResult::status`].
pub fn dopri5<F, S>(
    f: &F,
    mut x: Float,
    xend: Float,
    y: &mut Float,
    settings: &Settings,
    mut solout: Option<&mut S>,
) -> Result<IntegrationResult, Error>
where
    F: ODE + ?Sized,
    S: SolOut,
{
    // --- Input Validation ---
    let (rtol, atol) = (settings.rtol, settings.atol);
    if !(rtol >= 0.0 && atol >= 0.0 && rtol + atol > 0.0) {
        return Err(ConfigurationError::NonPositiveTolerance { rtol, atol }.into());
    }

    // Rounding Unit
    let uround = match settings.uround {
        Some(u) => {
            if u <= 1e-35 || u >= 1.0 {
                return Err(ConfigurationError::URoundOutOfRange(u).into());
            }
            u
        }
        None => 2.3e-16,
    };

    // Safety Factor
    let safety_factor = match settings.safety_factor {
        Some(f) => {
            if f >= 1.0 || f <= 1e-4 {
                return Err(ConfigurationError::SafetyFactorOutOfRange(f).into());
            }
            f
        }
        None => 0.9,
    };

    // Parameters for step size selection
    let facc1 = settings.scale_min.map_or(5.0, |f| 1.0 / f);
    let facc2 = settings.scale_max.map_or(1.0 / 10.0, |f| 1.0 / f);

    // Beta for step control stabilization
    let beta = match settings.beta {
        Some(b) => {
            if b > 0.2 {
                return Err(ConfigurationError::BetaTooLarge(b).into());
            }
            b.max(0.0)
        }
        None => 0.04,
    };

    // Maximum step size
    let hmax = settings.hmax.map_or((xend - x).abs(), Float::abs);

    // Maximum Number of Steps
    let nmax = match settings.nmax {
        Some(0) => return Err(ConfigurationError::NMaxMustBePositive(0).into()),
        Some(n) => n,
        None => 100_000,
    };

    // Number of steps before performing a stiffness test
    let nstiff = match settings.nstiff {
        Some(0) => return Err(ConfigurationError::NStiffMustBePositive(0).into()),
        Some(n) => n,
        None => 1000,
    };

    // --- Declarations ---
    let posneg = if xend >= x { 1.0 } else { -1.0 };
    let expo1 = 0.2 - beta * 0.75;
    let mut facold: Float = 1e-4;
    let mut last = false;
    let mut reject = false;
    let mut nonstiff = 0;
    let mut iasti = 0;
    let mut hlamb: Float = 0.0;
    let mut nfev = 0;
    let mut nstep = 0;
    let mut naccpt = 0;
    let mut nrejct = 0;

    // --- Initializations ---
    let mut k1 = f.ode(*y, x);
    nfev += 1;
    let mut h = match settings.h0 {
        Some(h0) => h0.abs() * posneg,
        None => {
            nfev += 1;
            hinit(f, x, *y, posneg, k1, 5, hmax, rtol, atol)
        }
    };

    // Initial SolOut call
    let interrupted = solout
        .as_mut()
        .is_some_and(|s| s.solout::<DenseOutput>(x, x, *y, None) == ControlFlag::Interrupt);

    let status = if interrupted {
        Status::Interrupted
    } else if x == xend {
        Status::Success
    } else {
        // --- Main integration loop ---
        loop {
            // Check for maximum number of steps
            if nstep >= nmax {
                break Status::NeedLargerNMax;
            }

            // Check for underflow due to machine rounding
            if !h.is_finite() || 0.1 * h.abs() <= x.abs() * uround {
                break Status::StepSizeTooSmall;
            }

            // Adjust last step to land on xend
            if (x + 1.01 * h - xend) * posneg > 0.0 {
                h = xend - x;
                last = true;
            }

            nstep += 1;

            // Stages 2 to 5
            let k2 = f.ode(*y + h * A21 * k1, x + C2 * h);
            let k3 = f.ode(*y + h * (A31 * k1 + A32 * k2), x + C3 * h);
            let k4 = f.ode(*y + h * (A41 * k1 + A42 * k2 + A43 * k3), x + C4 * h);
            let k5 = f.ode(
                *y + h * (A51 * k1 + A52 * k2 + A53 * k3 + A54 * k4),
                x + C5 * h,
            );

            // Stage 6 (ysti)
            let ysti = *y + h * (A61 * k1 + A62 * k2 + A63 * k3 + A64 * k4 + A65 * k5);
            let xph = x + h;
            let k6 = f.ode(ysti, xph);

            // Final stage, first same as last
            let y1 = *y + h * (A71 * k1 + A73 * k3 + A74 * k4 + A75 * k5 + A76 * k6);
            let k7 = f.ode(y1, xph);
            nfev += 6;

            // Error estimation
            let errest = h * (E1 * k1 + E3 * k3 + E4 * k4 + E5 * k5 + E6 * k6 + E7 * k7);
            let sk = atol + rtol * y.abs().max(y1.abs());
            let err = (errest / sk).abs();

            // Computation of hnew
            let fac11 = err.powf(expo1);
            // Lund-Stabilization
            let fac = fac11 / facold.powf(beta);
            // We require facc2 <= hnew/h <= facc1
            let fac = facc2.max(facc1.min(fac / safety_factor));
            let mut hnew = h / fac;

            if err <= 1.0 {
                // Step accepted
                facold = err.max(1.0e-4);
                naccpt += 1;

                // Stiffness detection
                if naccpt % nstiff == 0 || iasti > 0 {
                    let stnum = (k7 - k6) * (k7 - k6);
                    let stden = (y1 - ysti) * (y1 - ysti);
                    if stden > 0.0 {
                        hlamb = h.abs() * (stnum / stden).sqrt();
                    }
                    if hlamb > 3.25 {
                        nonstiff = 0;
                        iasti += 1;
                        if iasti == 15 {
                            break Status::ProbablyStiff;
                        }
                    } else {
                        nonstiff += 1;
                        if nonstiff == 6 {
                            iasti = 0;
                        }
                    }
                }

                // Prepare dense output
                let dense = solout.is_some().then(|| {
                    let ydiff = y1 - *y;
                    let bspl = h * k1 - ydiff;
                    DenseOutput {
                        cont: [
                            *y,
                            ydiff,
                            bspl,
                            -h * k7 + ydiff - bspl,
                            h * (D1 * k1 + D3 * k3 + D4 * k4 + D5 * k5 + D6 * k6 + D7 * k7),
                        ],
                        xold: x,
                        h,
                    }
                });

                // Update state variables
                k1 = k7;
                *y = y1;
                let xold = x;
                x = if last { xend } else { xph };

                if let Some(s) = solout.as_mut() {
                    if s.solout(xold, x, *y, dense.as_ref()) == ControlFlag::Interrupt {
                        break Status::Interrupted;
                    }
                }

                // Normal exit
                if last {
                    h = hnew;
                    break Status::Success;
                }

                // Check for step size limits
                if hnew.abs() > hmax {
                    hnew = posneg * hmax;
                }

                // Prevent oscillations due to previous rejected step
                if reject {
                    hnew = posneg * hnew.abs().min(h.abs());
                    reject = false;
                }
            } else {
                // Step rejected
                hnew = h / facc1.min(fac11 / safety_factor);
                reject = true;
                if naccpt >= 1 {
                    nrejct += 1;
                }
                last = false;
            }
            h = hnew;
        }
    };

    if !status.is_success() {
        warn!("DOPRI5 stopped at x = {x} before reaching {xend}: {status:?}");
    }

    Ok(IntegrationResult {
        x,
        y: *y,
        h,
        nfev,
        nstep,
        naccpt,
        nrejct,
        status,
    })
}

/// Continuous output function for DOPRI5
pub fn contdp5(xi: Float, cont: &[Float; 5], xold: Float, h: Float) -> Float {
    let theta = (xi - xold) / h;
    let theta1 = 1.0 - theta;
    cont[0] + theta * (cont[1] + theta1 * (cont[2] + theta * (cont[3] + theta1 * cont[4])))
}

/// Dense output of one accepted DOPRI5 step.
#[derive(Clone, Debug, PartialEq)]
pub struct DenseOutput {
    cont: [Float; 5],
    xold: Float,
    h: Float,
}

impl Interpolate for DenseOutput {
    fn interpolate(&self, xi: Float) -> Float {
        contdp5(xi, &self.cont, self.xold, self.h)
    }
}

// DOPRI5 Butcher tableau coefficients
const C2: Float = 0.2;
const C3: Float = 0.3;
const C4: Float = 0.8;
const C5: Float = 8.0 / 9.0;

const A21: Float = 0.2;
const A31: Float = 3.0 / 40.0;
const A32: Float = 9.0 / 40.0;
const A41: Float = 44.0 / 45.0;
const A42: Float = -56.0 / 15.0;
const A43: Float = 32.0 / 9.0;
const A51: Float = 19372.0 / 6561.0;
const A52: Float = -25360.0 / 2187.0;
const A53: Float = 64448.0 / 6561.0;
const A54: Float = -212.0 / 729.0;
const A61: Float = 9017.0 / 3168.0;
const A62: Float = -355.0 / 33.0;
const A63: Float = 46732.0 / 5247.0;
const A64: Float = 49.0 / 176.0;
const A65: Float = -5103.0 / 18656.0;
const A71: Float = 35.0 / 384.0;
const A73: Float = 500.0 / 1113.0;
const A74: Float = 125.0 / 192.0;
const A75: Float = -2187.0 / 6784.0;
const A76: Float = 11.0 / 84.0;

const E1: Float = 71.0 / 57600.0;
const E3: Float = -71.0 / 16695.0;
const E4: Float = 71.0 / 1920.0;
const E5: Float = -17253.0 / 339200.0;
const E6: Float = 22.0 / 525.0;
const E7: Float = -1.0 / 40.0;

const D1: Float = -12715105075.0 / 11282082432.0;
const D3: Float = 87487479700.0 / 32700410799.0;
const D4: Float = -10690763975.0 / 1880347072.0;
const D5: Float = 701980252875.0 / 199316789632.0;
const D6: Float = -1453857185.0 / 822651844.0;
const D7: Float = 69997945.0 / 29380423.0;
