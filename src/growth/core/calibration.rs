//! Economic calibration — the immutable scalar parameters of the model.
//!
//! Purpose
//! -------
//! Hold the five economic scalars of the deterministic neoclassical growth
//! model in one validated, read-only bundle: discount factor β, depreciation
//! rate δ, risk aversion σ, technology level A, and capital share α. Every
//! pluggable primitive receives this bundle alongside its numeric arguments,
//! so implementations can be swapped without re-plumbing parameters.
//!
//! Invariants & assumptions
//! ------------------------
//! - β ∈ (0, 1): the Bellman operator is a contraction only for β < 1, and
//!   β <= 0 makes the continuation value meaningless.
//! - δ ∈ [0, 1]: fraction of capital lost per period.
//! - σ >= 0: CRRA curvature; σ = 1 selects log utility.
//! - A > 0 and α ∈ (0, 1): Cobb-Douglas-style technologies need positive
//!   productivity and an interior capital share.
//! - All fields finite. Construction rejects anything else with
//!   [`VFIError::InvalidCalibration`]; downstream code assumes validity.
//!
//! Conventions
//! -----------
//! - The struct is plain data with public fields; it is created once by the
//!   caller and shared read-only through solving.
use crate::growth::errors::{VFIError, VFIResult};

/// Validated scalar parameters of the growth model.
///
/// Created once via [`Calibration::new`]; read-only through solving. The
/// solver itself only consumes `discount` — the remaining scalars are
/// interpreted by the [`GrowthTechnology`](crate::growth::core::technology::GrowthTechnology)
/// implementation supplied by the caller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Calibration {
    /// Discount factor β, strictly inside (0, 1).
    pub discount: f64,
    /// Depreciation rate δ in [0, 1].
    pub depreciation: f64,
    /// Risk-aversion (CRRA curvature) σ >= 0; σ = 1 is log utility.
    pub risk_aversion: f64,
    /// Technology level A > 0.
    pub technology_level: f64,
    /// Capital share α, strictly inside (0, 1).
    pub capital_share: f64,
}

impl Calibration {
    /// Construct a validated [`Calibration`].
    ///
    /// # Arguments
    /// - `discount`: β, finite and strictly inside (0, 1).
    /// - `depreciation`: δ, finite and inside [0, 1].
    /// - `risk_aversion`: σ, finite and >= 0.
    /// - `technology_level`: A, finite and > 0.
    /// - `capital_share`: α, finite and strictly inside (0, 1).
    ///
    /// # Errors
    /// - [`VFIError::InvalidCalibration`] naming the offending field when any
    ///   constraint is violated. The first violation encountered is reported.
    pub fn new(
        discount: f64, depreciation: f64, risk_aversion: f64, technology_level: f64,
        capital_share: f64,
    ) -> VFIResult<Self> {
        if !discount.is_finite() || discount <= 0.0 || discount >= 1.0 {
            return Err(VFIError::InvalidCalibration {
                name: "discount",
                value: discount,
                reason: "Discount factor must be finite and strictly inside (0, 1).",
            });
        }
        if !depreciation.is_finite() || !(0.0..=1.0).contains(&depreciation) {
            return Err(VFIError::InvalidCalibration {
                name: "depreciation",
                value: depreciation,
                reason: "Depreciation rate must be finite and inside [0, 1].",
            });
        }
        if !risk_aversion.is_finite() || risk_aversion < 0.0 {
            return Err(VFIError::InvalidCalibration {
                name: "risk_aversion",
                value: risk_aversion,
                reason: "Risk aversion must be finite and >= 0.",
            });
        }
        if !technology_level.is_finite() || technology_level <= 0.0 {
            return Err(VFIError::InvalidCalibration {
                name: "technology_level",
                value: technology_level,
                reason: "Technology level must be finite and > 0.",
            });
        }
        if !capital_share.is_finite() || capital_share <= 0.0 || capital_share >= 1.0 {
            return Err(VFIError::InvalidCalibration {
                name: "capital_share",
                value: capital_share,
                reason: "Capital share must be finite and strictly inside (0, 1).",
            });
        }
        Ok(Calibration { discount, depreciation, risk_aversion, technology_level, capital_share })
    }
}
