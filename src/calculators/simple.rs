//! Simple assessment calculator
//!
//! Maps the qualitative outcome of a simple assessment onto a section category.
//! No numeric input is involved.

use tracing::debug;

use crate::core::error::AssemblyError;
use crate::core::output::CalculationOutput;
use crate::core::probability::Probability;
use crate::entities::assessment_result::{
    FailureMechanismSectionAssemblyResult, SimpleAssessmentResult,
    SimpleAssessmentValidityOnlyResult,
};
use crate::entities::category_group::FailureMechanismSectionCategoryGroup;

/// Simple assessment of a direct failure mechanism
///
/// | result                  | category | probability |
/// |-------------------------|----------|-------------|
/// | `None`                  | `None`   | -           |
/// | `NotApplicable`         | NVT      | 0           |
/// | `ProbabilityNegligible` | Iv       | 0           |
/// | `AssessFurther`         | VIIv     | -           |
pub fn calculate_simple_assessment(
    result: SimpleAssessmentResult,
) -> Result<CalculationOutput<FailureMechanismSectionAssemblyResult>, AssemblyError> {
    let assembly = match result {
        SimpleAssessmentResult::None => {
            FailureMechanismSectionAssemblyResult::qualitative(FailureMechanismSectionCategoryGroup::None)
        }
        SimpleAssessmentResult::NotApplicable => FailureMechanismSectionAssemblyResult::new(
            FailureMechanismSectionCategoryGroup::NotApplicable,
            Some(Probability::ZERO),
        ),
        SimpleAssessmentResult::ProbabilityNegligible => FailureMechanismSectionAssemblyResult::new(
            FailureMechanismSectionCategoryGroup::Iv,
            Some(Probability::ZERO),
        ),
        SimpleAssessmentResult::AssessFurther => {
            FailureMechanismSectionAssemblyResult::qualitative(FailureMechanismSectionCategoryGroup::VIIv)
        }
    };
    debug!(?result, category = %assembly.category_group, "Simple assessment");
    Ok(CalculationOutput::new(assembly))
}

/// Simple assessment of a direct failure mechanism that only checks relevance
pub fn calculate_simple_assessment_validity_only(
    result: SimpleAssessmentValidityOnlyResult,
) -> Result<CalculationOutput<FailureMechanismSectionAssemblyResult>, AssemblyError> {
    let assembly = match result {
        SimpleAssessmentValidityOnlyResult::None => {
            FailureMechanismSectionAssemblyResult::qualitative(FailureMechanismSectionCategoryGroup::None)
        }
        SimpleAssessmentValidityOnlyResult::NotApplicable => {
            FailureMechanismSectionAssemblyResult::new(
                FailureMechanismSectionCategoryGroup::NotApplicable,
                Some(Probability::ZERO),
            )
        }
        SimpleAssessmentValidityOnlyResult::Applicable => {
            FailureMechanismSectionAssemblyResult::qualitative(FailureMechanismSectionCategoryGroup::VIIv)
        }
    };
    debug!(?result, category = %assembly.category_group, "Simple assessment (validity only)");
    Ok(CalculationOutput::new(assembly))
}

/// Simple assessment of an indirect failure mechanism. Not implemented.
pub fn calculate_simple_assessment_indirect(
    _result: SimpleAssessmentResult,
) -> Result<CalculationOutput<FailureMechanismSectionAssemblyResult>, AssemblyError> {
    Err(AssemblyError::NotImplemented(
        "simple assessment of indirect failure mechanisms",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn simple(result: SimpleAssessmentResult) -> FailureMechanismSectionAssemblyResult {
        calculate_simple_assessment(result).unwrap().result
    }

    #[test]
    fn test_not_applicable() {
        let result = simple(SimpleAssessmentResult::NotApplicable);
        assert_eq!(result.category_group, FailureMechanismSectionCategoryGroup::NotApplicable);
        assert_eq!(result.probability, Some(Probability::ZERO));
    }

    #[test]
    fn test_probability_negligible_is_best_category() {
        let result = simple(SimpleAssessmentResult::ProbabilityNegligible);
        assert_eq!(result.category_group, FailureMechanismSectionCategoryGroup::Iv);
        assert_eq!(result.probability, Some(Probability::ZERO));
    }

    #[test]
    fn test_assess_further_is_no_judgement() {
        let result = simple(SimpleAssessmentResult::AssessFurther);
        assert_eq!(result.category_group, FailureMechanismSectionCategoryGroup::VIIv);
        assert_eq!(result.probability, None);
    }

    #[test]
    fn test_none_is_absent_result() {
        let result = simple(SimpleAssessmentResult::None);
        assert_eq!(result.category_group, FailureMechanismSectionCategoryGroup::None);
        assert_eq!(result.probability, None);
    }

    #[test]
    fn test_validity_only() {
        let assemble = |r| {
            calculate_simple_assessment_validity_only(r)
                .unwrap()
                .result
                .category_group
        };
        assert_eq!(
            assemble(SimpleAssessmentValidityOnlyResult::NotApplicable),
            FailureMechanismSectionCategoryGroup::NotApplicable
        );
        assert_eq!(
            assemble(SimpleAssessmentValidityOnlyResult::Applicable),
            FailureMechanismSectionCategoryGroup::VIIv
        );
        assert_eq!(
            assemble(SimpleAssessmentValidityOnlyResult::None),
            FailureMechanismSectionCategoryGroup::None
        );
    }

    #[test]
    fn test_indirect_is_not_implemented() {
        let err = calculate_simple_assessment_indirect(SimpleAssessmentResult::AssessFurther)
            .unwrap_err();
        assert!(err.is_not_implemented());
    }
}
