//! Detailed assessment calculator
//!
//! Three independent entry points:
//! - a qualitative verdict (V / VN / NGO),
//! - a calculated failure probability looked up in a section category table,
//!   optionally scaled by the length-effect factor,
//! - a verdict per category boundary, reduced by a precedence scan.

use tracing::{debug, warn};

use crate::core::error::AssemblyError;
use crate::core::output::{CalculationOutput, WarningMessage};
use crate::core::probability::Probability;
use crate::entities::assessment_result::{
    DetailedAssessmentResult, DetailedCalculationResult, DetailedCategoryBoundariesResult,
    FailureMechanismSectionAssemblyResult,
};
use crate::entities::category::CategoriesList;
use crate::entities::category_group::FailureMechanismSectionCategoryGroup;
use crate::entities::input::validate_n_value;

/// Detailed assessment from a qualitative verdict
///
/// Sufficient maps to IIv, insufficient to Vv, not assessed to VIIv.
pub fn calculate_detailed_assessment(
    result: DetailedAssessmentResult,
) -> Result<CalculationOutput<FailureMechanismSectionAssemblyResult>, AssemblyError> {
    let group = match result {
        DetailedAssessmentResult::None => FailureMechanismSectionCategoryGroup::None,
        DetailedAssessmentResult::Sufficient => FailureMechanismSectionCategoryGroup::IIv,
        DetailedAssessmentResult::Insufficient => FailureMechanismSectionCategoryGroup::Vv,
        DetailedAssessmentResult::NotAssessed => FailureMechanismSectionCategoryGroup::VIIv,
    };
    debug!(?result, category = %group, "Detailed assessment");
    Ok(CalculationOutput::new(
        FailureMechanismSectionAssemblyResult::qualitative(group),
    ))
}

/// Detailed assessment from a calculated failure probability
pub fn calculate_detailed_assessment_from_probability(
    probability: Probability,
    categories: &CategoriesList<FailureMechanismSectionCategoryGroup>,
) -> Result<CalculationOutput<FailureMechanismSectionAssemblyResult>, AssemblyError> {
    let category = categories.find(probability)?;
    debug!(
        probability = probability.value(),
        category = %category.group(),
        "Detailed assessment from probability"
    );
    Ok(CalculationOutput::new(FailureMechanismSectionAssemblyResult::new(
        category.group(),
        Some(probability),
    )))
}

/// Detailed assessment from a cross-section probability scaled to the section.
///
/// The section probability is `min(1, p * n_value)` and determines the
/// category. When `p * n_value` exceeds one a
/// [`WarningMessage::CorrectedProbability`] is attached.
pub fn calculate_detailed_assessment_from_probability_with_length_effect(
    probability: Probability,
    categories: &CategoriesList<FailureMechanismSectionCategoryGroup>,
    n_value: f64,
) -> Result<CalculationOutput<FailureMechanismSectionAssemblyResult>, AssemblyError> {
    let n_value = validate_n_value(n_value)?;
    if categories.is_empty() {
        return Err(AssemblyError::EmptyCategoryTable);
    }

    let (section_probability, warnings) = scale_by_length_effect(probability, n_value)?;
    let category = categories.find(section_probability)?;
    debug!(
        probability = probability.value(),
        n_value,
        section_probability = section_probability.value(),
        category = %category.group(),
        "Detailed assessment from probability with length effect"
    );
    Ok(CalculationOutput::with_warnings(
        FailureMechanismSectionAssemblyResult::new(category.group(), Some(section_probability)),
        warnings,
    ))
}

/// `min(1, p * n_value)`, with a warning when the cap applies
pub(crate) fn scale_by_length_effect(
    probability: Probability,
    n_value: f64,
) -> Result<(Probability, Vec<WarningMessage>), AssemblyError> {
    // 0 * inf is NaN, and zero stays zero for any N
    if probability == Probability::ZERO {
        return Ok((Probability::ZERO, Vec::new()));
    }
    let (scaled, corrected) = Probability::capped_to_one(probability * n_value)?;
    if corrected {
        warn!(
            probability = probability.value(),
            n_value, "Section probability exceeds one, corrected to one"
        );
        return Ok((scaled, vec![WarningMessage::CorrectedProbability]));
    }
    Ok((scaled, Vec::new()))
}

/// Detailed assessment from a verdict per category boundary.
///
/// Boundaries are scanned from the strictest (I-II) to the least strict
/// (V-VI). The first sufficient boundary determines the result: the category
/// on the far side of that boundary. Without any sufficient boundary, an
/// insufficient V-VI boundary yields VIv and anything else VIIv.
///
/// A sufficient boundary followed by an insufficient, less strict boundary
/// is contradictory and fails with
/// [`AssemblyError::ImpossibleResultCombination`].
pub fn calculate_detailed_assessment_per_category_boundary(
    results: &DetailedCategoryBoundariesResult,
) -> Result<CalculationOutput<FailureMechanismSectionAssemblyResult>, AssemblyError> {
    let boundaries = results.in_order();
    // Categories on the far side of each boundary, strictest boundary first
    const FAR_SIDE: [FailureMechanismSectionCategoryGroup; 5] = [
        FailureMechanismSectionCategoryGroup::IIv,
        FailureMechanismSectionCategoryGroup::IIIv,
        FailureMechanismSectionCategoryGroup::IVv,
        FailureMechanismSectionCategoryGroup::Vv,
        FailureMechanismSectionCategoryGroup::VIv,
    ];

    let first_sufficient = boundaries
        .iter()
        .position(|r| *r == DetailedCalculationResult::Sufficient);

    let group = match first_sufficient {
        Some(index) => {
            if boundaries[index + 1..].contains(&DetailedCalculationResult::Insufficient) {
                return Err(AssemblyError::ImpossibleResultCombination);
            }
            FAR_SIDE[index]
        }
        None if results.v_to_vi == DetailedCalculationResult::Insufficient => {
            FailureMechanismSectionCategoryGroup::VIv
        }
        None => FailureMechanismSectionCategoryGroup::VIIv,
    };

    debug!(?boundaries, category = %group, "Detailed assessment per category boundary");
    Ok(CalculationOutput::new(
        FailureMechanismSectionAssemblyResult::qualitative(group),
    ))
}

/// Detailed assessment of an indirect failure mechanism. Not implemented.
pub fn calculate_detailed_assessment_indirect(
    _result: DetailedAssessmentResult,
) -> Result<CalculationOutput<FailureMechanismSectionAssemblyResult>, AssemblyError> {
    Err(AssemblyError::NotImplemented(
        "detailed assessment of indirect failure mechanisms",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculators::categories::calculate_failure_mechanism_section_categories;
    use crate::entities::input::FailureMechanismSectionCategoriesInput;
    use crate::entities::assessment_result::DetailedCalculationResult::{
        Insufficient, NotAssessed, Sufficient,
    };

    fn p(value: f64) -> Probability {
        Probability::new(value).unwrap()
    }

    fn section_categories() -> CategoriesList<FailureMechanismSectionCategoryGroup> {
        let input =
            FailureMechanismSectionCategoriesInput::new(p(1.0 / 3000.0), p(1.0 / 1000.0), 0.5, 2.5)
                .unwrap();
        calculate_failure_mechanism_section_categories(&input)
            .unwrap()
            .result
    }

    fn per_boundary(
        results: [DetailedCalculationResult; 5],
    ) -> Result<FailureMechanismSectionCategoryGroup, AssemblyError> {
        let input = DetailedCategoryBoundariesResult::new(
            results[0], results[1], results[2], results[3], results[4],
        );
        calculate_detailed_assessment_per_category_boundary(&input)
            .map(|output| output.result.category_group)
    }

    #[test]
    fn test_qualitative_results() {
        let group = |r| calculate_detailed_assessment(r).unwrap().result.category_group;
        assert_eq!(
            group(DetailedAssessmentResult::Sufficient),
            FailureMechanismSectionCategoryGroup::IIv
        );
        assert_eq!(
            group(DetailedAssessmentResult::Insufficient),
            FailureMechanismSectionCategoryGroup::Vv
        );
        assert_eq!(
            group(DetailedAssessmentResult::NotAssessed),
            FailureMechanismSectionCategoryGroup::VIIv
        );
        assert_eq!(
            group(DetailedAssessmentResult::None),
            FailureMechanismSectionCategoryGroup::None
        );
    }

    #[test]
    fn test_from_probability() {
        let categories = section_categories();
        // IIIv spans [0.5/3000/2.5, 0.5/1000/2.5]
        let output =
            calculate_detailed_assessment_from_probability(p(1.0 / 10000.0), &categories).unwrap();
        assert_eq!(output.result.category_group, FailureMechanismSectionCategoryGroup::IIIv);
        assert_eq!(output.result.probability, Some(p(1.0 / 10000.0)));
        assert!(output.warnings.is_empty());
    }

    #[test]
    fn test_from_probability_on_shared_boundary() {
        let categories = section_categories();
        let boundary = p(0.5 * (1.0 / 1000.0) / 2.5);
        let output = calculate_detailed_assessment_from_probability(boundary, &categories).unwrap();
        assert_eq!(output.result.category_group, FailureMechanismSectionCategoryGroup::IIIv);
    }

    #[test]
    fn test_from_probability_empty_table() {
        let empty = CategoriesList::new(vec![]);
        assert_eq!(
            calculate_detailed_assessment_from_probability(p(0.1), &empty).unwrap_err(),
            AssemblyError::EmptyCategoryTable
        );
        assert_eq!(
            calculate_detailed_assessment_from_probability_with_length_effect(p(0.1), &empty, 2.0)
                .unwrap_err(),
            AssemblyError::EmptyCategoryTable
        );
    }

    #[test]
    fn test_with_length_effect_scales_probability() {
        let categories = section_categories();
        let output = calculate_detailed_assessment_from_probability_with_length_effect(
            p(1.0 / 100000.0),
            &categories,
            10.0,
        )
        .unwrap();
        assert_eq!(output.result.probability, Some(p(1.0 / 10000.0)));
        assert_eq!(output.result.category_group, FailureMechanismSectionCategoryGroup::IIIv);
        assert!(output.warnings.is_empty());
    }

    #[test]
    fn test_with_length_effect_corrects_to_one() {
        let categories = section_categories();
        let output = calculate_detailed_assessment_from_probability_with_length_effect(
            p(0.5),
            &categories,
            3.0,
        )
        .unwrap();
        assert_eq!(output.result.probability, Some(Probability::ONE));
        assert_eq!(output.result.category_group, FailureMechanismSectionCategoryGroup::VIv);
        assert_eq!(output.warnings, vec![WarningMessage::CorrectedProbability]);
    }

    #[test]
    fn test_with_length_effect_unbounded_n_value() {
        let categories = section_categories();
        let output = calculate_detailed_assessment_from_probability_with_length_effect(
            Probability::ZERO,
            &categories,
            f64::INFINITY,
        )
        .unwrap();
        assert_eq!(output.result.probability, Some(Probability::ZERO));
        assert_eq!(output.result.category_group, FailureMechanismSectionCategoryGroup::Iv);
        assert!(output.warnings.is_empty());

        let output = calculate_detailed_assessment_from_probability_with_length_effect(
            p(1e-9),
            &categories,
            f64::INFINITY,
        )
        .unwrap();
        assert_eq!(output.result.probability, Some(Probability::ONE));
        assert_eq!(output.warnings, vec![WarningMessage::CorrectedProbability]);
    }

    #[test]
    fn test_with_length_effect_rejects_invalid_n_value() {
        let categories = section_categories();
        let err = calculate_detailed_assessment_from_probability_with_length_effect(
            p(0.1),
            &categories,
            0.5,
        )
        .unwrap_err();
        assert_eq!(err, AssemblyError::invalid_n_value(AssemblyError::ValueBelowOne));
    }

    #[test]
    fn test_per_boundary_first_sufficient_wins() {
        assert_eq!(
            per_boundary([Insufficient, Sufficient, NotAssessed, NotAssessed, NotAssessed]),
            Ok(FailureMechanismSectionCategoryGroup::IIIv)
        );
        assert_eq!(
            per_boundary([Sufficient, Sufficient, Sufficient, Sufficient, Sufficient]),
            Ok(FailureMechanismSectionCategoryGroup::IIv)
        );
        assert_eq!(
            per_boundary([NotAssessed, NotAssessed, NotAssessed, NotAssessed, Sufficient]),
            Ok(FailureMechanismSectionCategoryGroup::VIv)
        );
    }

    #[test]
    fn test_per_boundary_without_sufficient() {
        assert_eq!(
            per_boundary([Insufficient; 5]),
            Ok(FailureMechanismSectionCategoryGroup::VIv)
        );
        assert_eq!(
            per_boundary([NotAssessed; 5]),
            Ok(FailureMechanismSectionCategoryGroup::VIIv)
        );
        assert_eq!(
            per_boundary([Insufficient, Insufficient, NotAssessed, NotAssessed, NotAssessed]),
            Ok(FailureMechanismSectionCategoryGroup::VIIv)
        );
    }

    #[test]
    fn test_per_boundary_impossible_combination() {
        assert_eq!(
            per_boundary([Sufficient, Insufficient, NotAssessed, NotAssessed, NotAssessed]),
            Err(AssemblyError::ImpossibleResultCombination)
        );
        assert_eq!(
            per_boundary([NotAssessed, Sufficient, NotAssessed, NotAssessed, Insufficient]),
            Err(AssemblyError::ImpossibleResultCombination)
        );
    }

    #[test]
    fn test_indirect_is_not_implemented() {
        assert!(calculate_detailed_assessment_indirect(DetailedAssessmentResult::Sufficient)
            .unwrap_err()
            .is_not_implemented());
    }
}
