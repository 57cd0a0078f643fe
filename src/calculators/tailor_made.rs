//! Tailor-made assessment calculator

use tracing::debug;

use crate::calculators::detailed::{
    calculate_detailed_assessment_from_probability,
    calculate_detailed_assessment_from_probability_with_length_effect,
};
use crate::core::error::AssemblyError;
use crate::core::output::CalculationOutput;
use crate::core::probability::Probability;
use crate::entities::assessment_result::{
    FailureMechanismSectionAssemblyResult, TailorMadeAssessmentResult,
    TailorMadeCategoryGroupResult, TailorMadeProbabilityCalculationResult,
};
use crate::entities::category::CategoriesList;
use crate::entities::category_group::FailureMechanismSectionCategoryGroup;
use crate::entities::input::validate_n_value;

/// Tailor-made assessment from a qualitative verdict
///
/// Negligible probability maps to Iv, sufficient to IIv, insufficient to Vv
/// and not assessed to VIIv.
pub fn calculate_tailor_made_assessment(
    result: TailorMadeAssessmentResult,
) -> Result<CalculationOutput<FailureMechanismSectionAssemblyResult>, AssemblyError> {
    let assembly = match result {
        TailorMadeAssessmentResult::None => {
            FailureMechanismSectionAssemblyResult::qualitative(FailureMechanismSectionCategoryGroup::None)
        }
        TailorMadeAssessmentResult::ProbabilityNegligible => negligible(),
        TailorMadeAssessmentResult::Sufficient => {
            FailureMechanismSectionAssemblyResult::qualitative(FailureMechanismSectionCategoryGroup::IIv)
        }
        TailorMadeAssessmentResult::Insufficient => {
            FailureMechanismSectionAssemblyResult::qualitative(FailureMechanismSectionCategoryGroup::Vv)
        }
        TailorMadeAssessmentResult::NotAssessed => not_assessed(),
    };
    debug!(?result, category = %assembly.category_group, "Tailor-made assessment");
    Ok(CalculationOutput::new(assembly))
}

/// Tailor-made assessment from a probability result
pub fn calculate_tailor_made_assessment_from_probability(
    result: TailorMadeProbabilityCalculationResult,
    categories: &CategoriesList<FailureMechanismSectionCategoryGroup>,
) -> Result<CalculationOutput<FailureMechanismSectionAssemblyResult>, AssemblyError> {
    match result {
        TailorMadeProbabilityCalculationResult::ProbabilityNegligible => {
            Ok(CalculationOutput::new(negligible()))
        }
        TailorMadeProbabilityCalculationResult::NotAssessed => {
            Ok(CalculationOutput::new(not_assessed()))
        }
        TailorMadeProbabilityCalculationResult::Probability(probability) => {
            calculate_detailed_assessment_from_probability(probability, categories)
        }
    }
}

/// Tailor-made assessment from a probability result, scaled by the
/// length-effect factor like the detailed assessment
pub fn calculate_tailor_made_assessment_from_probability_with_length_effect(
    result: TailorMadeProbabilityCalculationResult,
    categories: &CategoriesList<FailureMechanismSectionCategoryGroup>,
    n_value: f64,
) -> Result<CalculationOutput<FailureMechanismSectionAssemblyResult>, AssemblyError> {
    let n_value = validate_n_value(n_value)?;
    match result {
        TailorMadeProbabilityCalculationResult::ProbabilityNegligible => {
            Ok(CalculationOutput::new(negligible()))
        }
        TailorMadeProbabilityCalculationResult::NotAssessed => {
            Ok(CalculationOutput::new(not_assessed()))
        }
        TailorMadeProbabilityCalculationResult::Probability(probability) => {
            calculate_detailed_assessment_from_probability_with_length_effect(
                probability,
                categories,
                n_value,
            )
        }
    }
}

/// Tailor-made assessment given directly as a category.
///
/// FV collapses onto Iv and NGO onto VIIv. The `None` sentinel, which is also
/// where unknown integer codes land, falls back to VIIv instead of failing.
pub fn calculate_tailor_made_assessment_from_category(
    result: TailorMadeCategoryGroupResult,
) -> Result<CalculationOutput<FailureMechanismSectionAssemblyResult>, AssemblyError> {
    let group = match result {
        TailorMadeCategoryGroupResult::FV | TailorMadeCategoryGroupResult::Iv => {
            FailureMechanismSectionCategoryGroup::Iv
        }
        TailorMadeCategoryGroupResult::IIv => FailureMechanismSectionCategoryGroup::IIv,
        TailorMadeCategoryGroupResult::IIIv => FailureMechanismSectionCategoryGroup::IIIv,
        TailorMadeCategoryGroupResult::IVv => FailureMechanismSectionCategoryGroup::IVv,
        TailorMadeCategoryGroupResult::Vv => FailureMechanismSectionCategoryGroup::Vv,
        TailorMadeCategoryGroupResult::VIv => FailureMechanismSectionCategoryGroup::VIv,
        TailorMadeCategoryGroupResult::VIIv
        | TailorMadeCategoryGroupResult::NGO
        | TailorMadeCategoryGroupResult::None => FailureMechanismSectionCategoryGroup::VIIv,
    };
    debug!(?result, category = %group, "Tailor-made assessment from category");
    Ok(CalculationOutput::new(
        FailureMechanismSectionAssemblyResult::qualitative(group),
    ))
}

/// Tailor-made assessment of an indirect failure mechanism. Not implemented.
pub fn calculate_tailor_made_assessment_indirect(
    _result: TailorMadeAssessmentResult,
) -> Result<CalculationOutput<FailureMechanismSectionAssemblyResult>, AssemblyError> {
    Err(AssemblyError::NotImplemented(
        "tailor-made assessment of indirect failure mechanisms",
    ))
}

fn negligible() -> FailureMechanismSectionAssemblyResult {
    FailureMechanismSectionAssemblyResult::new(
        FailureMechanismSectionCategoryGroup::Iv,
        Some(Probability::ZERO),
    )
}

fn not_assessed() -> FailureMechanismSectionAssemblyResult {
    FailureMechanismSectionAssemblyResult::qualitative(FailureMechanismSectionCategoryGroup::VIIv)
}
