//! Entity type definitions
//!
//! **Category tables:**
//! - [`CategoryGroup`] - Ordinal tiers at each aggregation level
//! - [`Category`] / [`CategoriesList`] - Probability intervals per group, best first
//!
//! **Inputs:**
//! - [`AssessmentSectionCategoriesInput`] - Signaling and lower boundary standards
//! - [`FailureMechanismCategoriesInput`] - Adds the probability distribution factor
//! - [`FailureMechanismSectionCategoriesInput`] - Adds the length-effect factor
//!
//! **Assessment results:**
//! - Simple, detailed and tailor-made verdict vocabularies
//! - [`CategoryAssemblyResult`] - A category group with an optional probability

pub mod assessment_result;
pub mod category;
pub mod category_group;
pub mod input;

pub use assessment_result::{
    CategoryAssemblyResult, DetailedAssessmentResult, DetailedCalculationResult,
    DetailedCategoryBoundariesResult, FailureMechanismAssemblyResult,
    FailureMechanismSectionAssemblyResult, SimpleAssessmentResult,
    SimpleAssessmentValidityOnlyResult, TailorMadeAssessmentResult, TailorMadeCategoryGroupResult,
    TailorMadeProbabilityCalculationResult, TailorMadeProbabilityResultKind,
};
pub use category::{
    AssessmentSectionCategory, CategoriesList, Category, FailureMechanismCategory,
    FailureMechanismSectionCategory,
};
pub use category_group::{
    AssessmentSectionCategoryGroup, CategoryGroup, FailureMechanismCategoryGroup,
    FailureMechanismSectionCategoryGroup,
};
pub use input::{
    AssessmentSectionCategoriesInput, FailureMechanismCategoriesInput,
    FailureMechanismSectionCategoriesInput,
};
