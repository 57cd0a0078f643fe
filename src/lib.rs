//! Assembly kernel for flood-defense safety assessments
//!
//! Derives probability category tables from the regulatory standards of an
//! assessment section, turns the outcome of the simple, detailed and
//! tailor-made assessments of a failure-mechanism section into a category,
//! combines those into one section verdict, and aggregates sections into a
//! failure-mechanism verdict.
//!
//! ```
//! use assembly::calculators::{
//!     calculate_detailed_assessment_from_probability,
//!     calculate_failure_mechanism_section_categories,
//! };
//! use assembly::entities::{FailureMechanismSectionCategoriesInput, FailureMechanismSectionCategoryGroup};
//! use assembly::Probability;
//!
//! # fn main() -> Result<(), assembly::AssemblyError> {
//! let input = FailureMechanismSectionCategoriesInput::new(
//!     Probability::new(1.0 / 3000.0)?,
//!     Probability::new(1.0 / 1000.0)?,
//!     0.5,
//!     2.5,
//! )?;
//! let table = calculate_failure_mechanism_section_categories(&input)?.result;
//! let output = calculate_detailed_assessment_from_probability(Probability::new(0.01)?, &table)?;
//! assert_eq!(output.result.category_group, FailureMechanismSectionCategoryGroup::Vv);
//! # Ok(())
//! # }
//! ```

pub mod calculators;
pub mod core;
pub mod entities;
pub mod yaml;

pub use crate::core::{AssemblyError, CalculationOutput, Config, Probability, WarningMessage};
