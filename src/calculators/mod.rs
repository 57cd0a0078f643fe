//! Assembly calculators
//!
//! Every calculator returns `Result<CalculationOutput<T>, AssemblyError>`:
//! fatal problems in the `Err` branch, non-fatal corrections as warnings next
//! to the result.

pub mod categories;
pub mod combined;
pub mod detailed;
pub mod failure_mechanism;
pub mod simple;
pub mod tailor_made;

pub use categories::{
    calculate_assessment_section_categories, calculate_failure_mechanism_categories,
    calculate_failure_mechanism_section_categories,
    calculate_geotechnic_failure_mechanism_section_categories,
};
pub use combined::{calculate_combined_assessment, calculate_combined_assessment_with_probability};
pub use detailed::{
    calculate_detailed_assessment, calculate_detailed_assessment_from_probability,
    calculate_detailed_assessment_from_probability_with_length_effect,
    calculate_detailed_assessment_indirect, calculate_detailed_assessment_per_category_boundary,
};
pub use failure_mechanism::{
    calculate_assessment_section_grade, calculate_failure_mechanism_assembly,
    calculate_failure_mechanism_assembly_with_probability,
};
pub use simple::{
    calculate_simple_assessment, calculate_simple_assessment_indirect,
    calculate_simple_assessment_validity_only,
};
pub use tailor_made::{
    calculate_tailor_made_assessment, calculate_tailor_made_assessment_from_category,
    calculate_tailor_made_assessment_from_probability,
    calculate_tailor_made_assessment_from_probability_with_length_effect,
    calculate_tailor_made_assessment_indirect,
};
