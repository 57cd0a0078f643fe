//! Category boundary calculator
//!
//! Derives the probability intervals of each category group from the
//! regulatory standards of an assessment section. With signaling standard
//! `s`, lower boundary standard `L`, probability distribution factor `k` and
//! length-effect factor `N`:
//!
//! | level             | boundaries                                          |
//! |-------------------|-----------------------------------------------------|
//! | assessment section | `0, s/30, s, L, 30L, 1`                            |
//! | failure mechanism  | `0, ks/30, ks, kL, L, 30L, 1`                      |
//! | mechanism section  | `0, ks/30N, ks/N, kL/N, L, 30L, 1`                 |
//! | geotechnical section | as mechanism with `k` replaced by `min(1, 10k/N)` |
//!
//! The `30L` boundary is capped at one so that the last category stays
//! well-formed for large lower boundary standards.

use tracing::{debug, warn};

use crate::core::error::AssemblyError;
use crate::core::output::{CalculationOutput, WarningMessage};
use crate::core::probability::Probability;
use crate::entities::category::{CategoriesList, Category};
use crate::entities::category_group::{
    AssessmentSectionCategoryGroup, CategoryGroup, FailureMechanismCategoryGroup,
    FailureMechanismSectionCategoryGroup,
};
use crate::entities::input::{
    AssessmentSectionCategoriesInput, FailureMechanismCategoriesInput,
    FailureMechanismSectionCategoriesInput,
};

/// Factor applied to the lower boundary and signaling standards for the outer categories
const OUTER_CATEGORY_FACTOR: f64 = 30.0;

/// Numerator of the geotechnical length-effect factor `10k / N`
const GEOTECHNIC_FACTOR_NUMERATOR: f64 = 10.0;

/// Categories A+ through D of an assessment section
pub fn calculate_assessment_section_categories(
    input: &AssessmentSectionCategoriesInput,
) -> Result<CalculationOutput<CategoriesList<AssessmentSectionCategoryGroup>>, AssemblyError> {
    let s = input.signaling_standard().value();
    let l = input.lower_boundary_standard().value();

    let table = build_table(&[
        0.0,
        s / OUTER_CATEGORY_FACTOR,
        s,
        l,
        l * OUTER_CATEGORY_FACTOR,
        1.0,
    ])?;
    debug!(signaling = s, lower_boundary = l, "Calculated assessment section categories");
    Ok(CalculationOutput::new(table))
}

/// Categories It through VIt of a failure mechanism
pub fn calculate_failure_mechanism_categories(
    input: &FailureMechanismCategoriesInput,
) -> Result<CalculationOutput<CategoriesList<FailureMechanismCategoryGroup>>, AssemblyError> {
    let table = mechanism_table(
        input.signaling_standard(),
        input.lower_boundary_standard(),
        input.probability_distribution_factor(),
    )?;
    debug!(
        factor = input.probability_distribution_factor(),
        "Calculated failure mechanism categories"
    );
    Ok(CalculationOutput::new(table))
}

/// Categories Iv through VIv of a failure-mechanism section
pub fn calculate_failure_mechanism_section_categories(
    input: &FailureMechanismSectionCategoriesInput,
) -> Result<CalculationOutput<CategoriesList<FailureMechanismSectionCategoryGroup>>, AssemblyError>
{
    let s = input.signaling_standard().value();
    let l = input.lower_boundary_standard().value();
    let k = input.probability_distribution_factor();
    let n = input.n_value();

    let table = build_table(&[
        0.0,
        k * s / OUTER_CATEGORY_FACTOR / n,
        k * s / n,
        k * l / n,
        l,
        l * OUTER_CATEGORY_FACTOR,
        1.0,
    ])?;
    debug!(factor = k, n_value = n, "Calculated failure mechanism section categories");
    Ok(CalculationOutput::new(table))
}

/// Categories Iv through VIv for a geotechnical failure-mechanism section.
///
/// The effective factor `10k / N` is corrected to one when it exceeds one, in
/// which case a [`WarningMessage::CorrectedLengthEffectFactor`] is attached.
pub fn calculate_geotechnic_failure_mechanism_section_categories(
    input: &FailureMechanismSectionCategoriesInput,
) -> Result<CalculationOutput<CategoriesList<FailureMechanismSectionCategoryGroup>>, AssemblyError>
{
    let (factor, corrected) = geotechnic_factor(
        input.probability_distribution_factor(),
        input.n_value(),
    );

    let mut warnings = Vec::new();
    if corrected {
        warn!(
            factor = input.probability_distribution_factor(),
            n_value = input.n_value(),
            "Geotechnical length-effect factor exceeds one, corrected to one"
        );
        warnings.push(WarningMessage::CorrectedLengthEffectFactor);
    }

    let table = mechanism_table(
        input.signaling_standard(),
        input.lower_boundary_standard(),
        factor,
    )?;
    debug!(factor, corrected, "Calculated geotechnical failure mechanism section categories");
    Ok(CalculationOutput::with_warnings(table, warnings))
}

/// Effective geotechnical factor `min(1, 10k / N)` and whether it was corrected
pub fn geotechnic_factor(probability_distribution_factor: f64, n_value: f64) -> (f64, bool) {
    let factor = probability_distribution_factor * GEOTECHNIC_FACTOR_NUMERATOR / n_value;
    if factor > 1.0 {
        (1.0, true)
    } else {
        (factor, false)
    }
}

/// Six-category table `0, ks/30, ks, kL, L, 30L, 1` for any six-tier vocabulary
fn mechanism_table<G: CategoryGroup>(
    signaling_standard: Probability,
    lower_boundary_standard: Probability,
    factor: f64,
) -> Result<CategoriesList<G>, AssemblyError> {
    let s = signaling_standard.value();
    let l = lower_boundary_standard.value();
    build_table(&[
        0.0,
        factor * s / OUTER_CATEGORY_FACTOR,
        factor * s,
        factor * l,
        l,
        l * OUTER_CATEGORY_FACTOR,
        1.0,
    ])
}

/// Pair consecutive boundaries with the probability groups of `G`, best first
fn build_table<G: CategoryGroup>(boundaries: &[f64]) -> Result<CategoriesList<G>, AssemblyError> {
    let boundaries = boundaries
        .iter()
        .map(|&b| Probability::capped_to_one(b).map(|(p, _)| p))
        .collect::<Result<Vec<_>, _>>()?;

    let categories = G::probability_groups()
        .iter()
        .zip(boundaries.windows(2))
        .map(|(&group, pair)| Category::new(group, pair[0], pair[1]))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CategoriesList::new(categories))
}
