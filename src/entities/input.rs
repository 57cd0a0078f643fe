//! Validated inputs for the category boundary calculators
//!
//! Each input runs all of its checks once, in its constructor. A value that
//! exists is valid, so the calculators never re-validate.

use serde::{Deserialize, Serialize};

use crate::core::error::AssemblyError;
use crate::core::probability::Probability;

/// Signaling and lower boundary standards of an assessment section
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AssessmentSectionCategoriesInput {
    signaling_standard: Probability,
    lower_boundary_standard: Probability,
}

impl AssessmentSectionCategoriesInput {
    /// Validate that the signaling standard does not exceed the lower boundary standard
    pub fn new(
        signaling_standard: Probability,
        lower_boundary_standard: Probability,
    ) -> Result<Self, AssemblyError> {
        if signaling_standard > lower_boundary_standard {
            return Err(AssemblyError::SignalingStandardAboveLowerBoundaryStandard);
        }
        Ok(Self {
            signaling_standard,
            lower_boundary_standard,
        })
    }

    pub fn signaling_standard(&self) -> Probability {
        self.signaling_standard
    }

    pub fn lower_boundary_standard(&self) -> Probability {
        self.lower_boundary_standard
    }
}

/// Standards plus the share of the failure probability budget of one mechanism
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FailureMechanismCategoriesInput {
    #[serde(flatten)]
    standards: AssessmentSectionCategoriesInput,
    probability_distribution_factor: f64,
}

impl FailureMechanismCategoriesInput {
    pub fn new(
        signaling_standard: Probability,
        lower_boundary_standard: Probability,
        probability_distribution_factor: f64,
    ) -> Result<Self, AssemblyError> {
        let standards =
            AssessmentSectionCategoriesInput::new(signaling_standard, lower_boundary_standard)?;
        Probability::new(probability_distribution_factor)
            .map_err(AssemblyError::invalid_probability_distribution_factor)?;
        Ok(Self {
            standards,
            probability_distribution_factor,
        })
    }

    pub fn signaling_standard(&self) -> Probability {
        self.standards.signaling_standard
    }

    pub fn lower_boundary_standard(&self) -> Probability {
        self.standards.lower_boundary_standard
    }

    /// Fraction in `[0, 1]` of the section budget allotted to this mechanism
    pub fn probability_distribution_factor(&self) -> f64 {
        self.probability_distribution_factor
    }
}

/// Mechanism input plus the length-effect factor of its sections
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FailureMechanismSectionCategoriesInput {
    #[serde(flatten)]
    mechanism: FailureMechanismCategoriesInput,
    n_value: f64,
}

impl FailureMechanismSectionCategoriesInput {
    pub fn new(
        signaling_standard: Probability,
        lower_boundary_standard: Probability,
        probability_distribution_factor: f64,
        n_value: f64,
    ) -> Result<Self, AssemblyError> {
        let mechanism = FailureMechanismCategoriesInput::new(
            signaling_standard,
            lower_boundary_standard,
            probability_distribution_factor,
        )?;
        let n_value = validate_n_value(n_value)?;
        Ok(Self { mechanism, n_value })
    }

    pub fn signaling_standard(&self) -> Probability {
        self.mechanism.signaling_standard()
    }

    pub fn lower_boundary_standard(&self) -> Probability {
        self.mechanism.lower_boundary_standard()
    }

    pub fn probability_distribution_factor(&self) -> f64 {
        self.mechanism.probability_distribution_factor
    }

    /// Length-effect factor, at least 1
    pub fn n_value(&self) -> f64 {
        self.n_value
    }
}

/// Check that a length-effect factor is a number of at least one
pub fn validate_n_value(n_value: f64) -> Result<f64, AssemblyError> {
    if n_value.is_nan() {
        return Err(AssemblyError::invalid_n_value(AssemblyError::ValueMayNotBeNaN));
    }
    if n_value < 1.0 {
        return Err(AssemblyError::invalid_n_value(AssemblyError::ValueBelowOne));
    }
    Ok(n_value)
}

// Deserialization goes through the validating constructors.

#[derive(Deserialize)]
struct RawSectionInput {
    signaling_standard: Probability,
    lower_boundary_standard: Probability,
    #[serde(default)]
    probability_distribution_factor: Option<f64>,
    #[serde(default)]
    n_value: Option<f64>,
}

impl<'de> Deserialize<'de> for AssessmentSectionCategoriesInput {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawSectionInput::deserialize(deserializer)?;
        Self::new(raw.signaling_standard, raw.lower_boundary_standard)
            .map_err(serde::de::Error::custom)
    }
}

impl<'de> Deserialize<'de> for FailureMechanismCategoriesInput {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawSectionInput::deserialize(deserializer)?;
        let factor = raw
            .probability_distribution_factor
            .ok_or_else(|| serde::de::Error::missing_field("probability_distribution_factor"))?;
        Self::new(raw.signaling_standard, raw.lower_boundary_standard, factor)
            .map_err(serde::de::Error::custom)
    }
}

impl<'de> Deserialize<'de> for FailureMechanismSectionCategoriesInput {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawSectionInput::deserialize(deserializer)?;
        let factor = raw
            .probability_distribution_factor
            .ok_or_else(|| serde::de::Error::missing_field("probability_distribution_factor"))?;
        let n_value = raw
            .n_value
            .ok_or_else(|| serde::de::Error::missing_field("n_value"))?;
        Self::new(
            raw.signaling_standard,
            raw.lower_boundary_standard,
            factor,
            n_value,
        )
        .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(value: f64) -> Probability {
        Probability::new(value).unwrap()
    }

    #[test]
    fn test_signaling_above_lower_boundary() {
        let result = AssessmentSectionCategoriesInput::new(p(1.0 / 1000.0), p(1.0 / 3000.0));
        assert_eq!(
            result,
            Err(AssemblyError::SignalingStandardAboveLowerBoundaryStandard)
        );
    }

    #[test]
    fn test_equal_standards_are_valid() {
        assert!(AssessmentSectionCategoriesInput::new(p(0.001), p(0.001)).is_ok());
    }

    #[test]
    fn test_probability_distribution_factor_chains_cause() {
        let err = FailureMechanismCategoriesInput::new(p(0.0001), p(0.001), 1.5).unwrap_err();
        assert_eq!(
            err,
            AssemblyError::invalid_probability_distribution_factor(AssemblyError::ValueAboveOne)
        );

        let err = FailureMechanismCategoriesInput::new(p(0.0001), p(0.001), -0.5).unwrap_err();
        assert_eq!(err.root_cause(), &AssemblyError::ValueBelowZero);

        let err = FailureMechanismCategoriesInput::new(p(0.0001), p(0.001), f64::NAN).unwrap_err();
        assert_eq!(err.root_cause(), &AssemblyError::ValueMayNotBeNaN);
    }

    #[test]
    fn test_n_value_validation() {
        let err =
            FailureMechanismSectionCategoriesInput::new(p(0.0001), p(0.001), 0.5, 0.9).unwrap_err();
        assert_eq!(
            err,
            AssemblyError::invalid_n_value(AssemblyError::ValueBelowOne)
        );

        let err = FailureMechanismSectionCategoriesInput::new(p(0.0001), p(0.001), 0.5, f64::NAN)
            .unwrap_err();
        assert_eq!(
            err,
            AssemblyError::invalid_n_value(AssemblyError::ValueMayNotBeNaN)
        );

        let input =
            FailureMechanismSectionCategoriesInput::new(p(0.0001), p(0.001), 0.5, 1.0).unwrap();
        assert_eq!(input.n_value(), 1.0);
    }

    #[test]
    fn test_standards_checked_before_factors() {
        let err =
            FailureMechanismSectionCategoriesInput::new(p(0.01), p(0.001), 2.0, 0.0).unwrap_err();
        assert_eq!(err, AssemblyError::SignalingStandardAboveLowerBoundaryStandard);
    }

    #[test]
    fn test_deserialize_validates_standards() {
        let input: AssessmentSectionCategoriesInput =
            serde_yml::from_str("signaling_standard: 0.0001\nlower_boundary_standard: 0.001\n")
                .unwrap();
        assert_eq!(input.signaling_standard(), 0.0001);

        let result = serde_yml::from_str::<AssessmentSectionCategoriesInput>(
            "signaling_standard: 0.01\nlower_boundary_standard: 0.001\n",
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_section_input_requires_n_value() {
        let input: FailureMechanismSectionCategoriesInput = serde_yml::from_str(
            "signaling_standard: 0.0001\nlower_boundary_standard: 0.001\nprobability_distribution_factor: 0.24\nn_value: 3.0\n",
        )
        .unwrap();
        assert_eq!(input.n_value(), 3.0);
        assert_eq!(input.probability_distribution_factor(), 0.24);

        let result = serde_yml::from_str::<FailureMechanismSectionCategoriesInput>(
            "signaling_standard: 0.0001\nlower_boundary_standard: 0.001\nprobability_distribution_factor: 0.24\n",
        );
        assert!(result.is_err());
    }
}
