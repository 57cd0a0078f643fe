//! Combined assessment calculator
//!
//! Reduces the simple, detailed and tailor-made results of one section to a
//! single category. A decisive tailor-made result overrides a decisive
//! detailed result, which overrides a decisive simple result. Without any
//! decisive phase the section is "no judgement yet" (VIIv) if any phase said
//! so, and not applicable otherwise.

use tracing::debug;

use crate::core::error::AssemblyError;
use crate::core::output::CalculationOutput;
use crate::entities::assessment_result::FailureMechanismSectionAssemblyResult;
use crate::entities::category_group::FailureMechanismSectionCategoryGroup;

/// Phase that determined a combined result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Decided(usize),
    NoJudgement,
    NotApplicable,
}

/// Apply the precedence rule to groups ordered tailor-made, detailed, simple
fn select(by_precedence: [FailureMechanismSectionCategoryGroup; 3]) -> Outcome {
    if let Some(index) = by_precedence.iter().position(|g| g.is_decisive()) {
        return Outcome::Decided(index);
    }
    if by_precedence.contains(&FailureMechanismSectionCategoryGroup::VIIv) {
        Outcome::NoJudgement
    } else {
        Outcome::NotApplicable
    }
}

/// Combine the category groups of the three assessment phases
pub fn calculate_combined_assessment(
    simple: FailureMechanismSectionCategoryGroup,
    detailed: FailureMechanismSectionCategoryGroup,
    tailor_made: FailureMechanismSectionCategoryGroup,
) -> Result<CalculationOutput<FailureMechanismSectionCategoryGroup>, AssemblyError> {
    let by_precedence = [tailor_made, detailed, simple];
    let group = match select(by_precedence) {
        Outcome::Decided(index) => by_precedence[index],
        Outcome::NoJudgement => FailureMechanismSectionCategoryGroup::VIIv,
        Outcome::NotApplicable => FailureMechanismSectionCategoryGroup::NotApplicable,
    };
    debug!(%simple, %detailed, %tailor_made, combined = %group, "Combined assessment");
    Ok(CalculationOutput::new(group))
}

/// Combine phase results that carry a probability.
///
/// An absent phase counts as not applicable. The winning phase's probability
/// is kept; the fallback outcomes carry none.
pub fn calculate_combined_assessment_with_probability(
    simple: Option<&FailureMechanismSectionAssemblyResult>,
    detailed: Option<&FailureMechanismSectionAssemblyResult>,
    tailor_made: Option<&FailureMechanismSectionAssemblyResult>,
) -> Result<CalculationOutput<FailureMechanismSectionAssemblyResult>, AssemblyError> {
    let by_precedence = [tailor_made, detailed, simple];
    let groups = by_precedence.map(|result| {
        result.map_or(FailureMechanismSectionCategoryGroup::NotApplicable, |r| {
            r.category_group
        })
    });

    let combined = match select(groups) {
        Outcome::Decided(index) => match by_precedence[index] {
            Some(result) => *result,
            None => FailureMechanismSectionAssemblyResult::qualitative(groups[index]),
        },
        Outcome::NoJudgement => FailureMechanismSectionAssemblyResult::qualitative(
            FailureMechanismSectionCategoryGroup::VIIv,
        ),
        Outcome::NotApplicable => FailureMechanismSectionAssemblyResult::qualitative(
            FailureMechanismSectionCategoryGroup::NotApplicable,
        ),
    };
    debug!(
        combined = %combined.category_group,
        probability = combined.probability.map(|p| p.value()),
        "Combined assessment with probability"
    );
    Ok(CalculationOutput::new(combined))
}
