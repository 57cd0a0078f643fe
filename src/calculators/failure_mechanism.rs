//! Assembly beyond a single section
//!
//! Section results of one failure mechanism are reduced to a mechanism
//! category, and a total failure probability is graded on the assessment
//! section scale.

use tracing::debug;

use crate::core::error::AssemblyError;
use crate::core::output::CalculationOutput;
use crate::core::probability::Probability;
use crate::entities::assessment_result::{
    FailureMechanismAssemblyResult, FailureMechanismSectionAssemblyResult,
};
use crate::entities::category::CategoriesList;
use crate::entities::category_group::{
    AssessmentSectionCategoryGroup, CategoryGroup, FailureMechanismCategoryGroup,
    FailureMechanismSectionCategoryGroup,
};
use crate::entities::input::validate_n_value;

/// Failure-mechanism category from the combined categories of its sections.
///
/// Not applicable sections are skipped and the worst remaining category wins.
/// A single section without a result leaves the mechanism without one.
pub fn calculate_failure_mechanism_assembly(
    sections: &[FailureMechanismSectionCategoryGroup],
) -> Result<CalculationOutput<FailureMechanismCategoryGroup>, AssemblyError> {
    let group = worst_group(sections.iter().copied());
    debug!(sections = sections.len(), category = %group, "Failure mechanism assembly");
    Ok(CalculationOutput::new(group))
}

/// Failure-mechanism category and probability from section results.
///
/// When every relevant section carries a decisive category and a probability,
/// the mechanism probability is `min(N * max(p), 1 - prod(1 - p))` and is
/// looked up in `categories`. Otherwise the category-only rule is applied and
/// no probability is reported.
pub fn calculate_failure_mechanism_assembly_with_probability(
    sections: &[FailureMechanismSectionAssemblyResult],
    categories: &CategoriesList<FailureMechanismCategoryGroup>,
    n_value: f64,
) -> Result<CalculationOutput<FailureMechanismAssemblyResult>, AssemblyError> {
    let n_value = validate_n_value(n_value)?;

    let relevant: Vec<_> = sections
        .iter()
        .filter(|s| s.category_group != FailureMechanismSectionCategoryGroup::NotApplicable)
        .collect();

    let probabilities: Option<Vec<Probability>> = relevant
        .iter()
        .map(|s| {
            if s.category_group.is_decisive() {
                s.probability
            } else {
                None
            }
        })
        .collect();

    let probabilities = match probabilities {
        Some(p) if !p.is_empty() => p,
        _ => {
            let group = worst_group(sections.iter().map(|s| s.category_group));
            debug!(category = %group, "Failure mechanism assembly without probability");
            return Ok(CalculationOutput::new(
                FailureMechanismAssemblyResult::qualitative(group),
            ));
        }
    };

    let probability = combine_probabilities(&probabilities, n_value)?;
    let category = categories.find(probability)?;
    debug!(
        sections = probabilities.len(),
        probability = probability.value(),
        category = %category.group(),
        "Failure mechanism assembly with probability"
    );
    Ok(CalculationOutput::new(FailureMechanismAssemblyResult::new(
        category.group(),
        Some(probability),
    )))
}

/// Grade a total failure probability on the assessment section scale
pub fn calculate_assessment_section_grade(
    probability: Probability,
    categories: &CategoriesList<AssessmentSectionCategoryGroup>,
) -> Result<CalculationOutput<AssessmentSectionCategoryGroup>, AssemblyError> {
    let category = categories.find(probability)?;
    debug!(probability = probability.value(), grade = %category.group(), "Assessment section grade");
    Ok(CalculationOutput::new(category.group()))
}

fn worst_group(
    sections: impl Iterator<Item = FailureMechanismSectionCategoryGroup>,
) -> FailureMechanismCategoryGroup {
    let mut worst: Option<FailureMechanismCategoryGroup> = None;
    for section in sections {
        let group = section.to_failure_mechanism_group();
        match group {
            FailureMechanismCategoryGroup::NotApplicable => {}
            FailureMechanismCategoryGroup::None => return FailureMechanismCategoryGroup::None,
            _ => {
                if worst.map_or(true, |w| group.rank() > w.rank()) {
                    worst = Some(group);
                }
            }
        }
    }
    worst.unwrap_or(FailureMechanismCategoryGroup::NotApplicable)
}

/// Upper bound `N * max(p)` against the independent-sections bound `1 - prod(1 - p)`
fn combine_probabilities(
    probabilities: &[Probability],
    n_value: f64,
) -> Result<Probability, AssemblyError> {
    let max = probabilities
        .iter()
        .map(|p| p.value())
        .fold(0.0_f64, f64::max);
    let independent = 1.0 - probabilities.iter().map(|p| p.complement().value()).product::<f64>();
    let (probability, _) = Probability::capped_to_one((max * n_value).min(independent))?;
    Ok(probability)
}
