//! Categories and category tables
//!
//! A [`Category`] pairs a group with the closed probability interval
//! `[lower_boundary, upper_boundary]`. A [`CategoriesList`] is the ordered
//! table produced by the boundary calculators, best category first.

use serde::{Deserialize, Serialize};

use crate::core::error::AssemblyError;
use crate::core::probability::Probability;
use crate::entities::category_group::{
    AssessmentSectionCategoryGroup, CategoryGroup, FailureMechanismCategoryGroup,
    FailureMechanismSectionCategoryGroup,
};

/// A category group with its probability interval
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Category<G> {
    group: G,
    lower_boundary: Probability,
    upper_boundary: Probability,
}

impl<G: CategoryGroup> Category<G> {
    /// Create a category, rejecting a lower boundary above the upper boundary
    pub fn new(
        group: G,
        lower_boundary: Probability,
        upper_boundary: Probability,
    ) -> Result<Self, AssemblyError> {
        if lower_boundary > upper_boundary {
            return Err(AssemblyError::LowerBoundaryAboveUpperBoundary);
        }
        Ok(Self {
            group,
            lower_boundary,
            upper_boundary,
        })
    }

    pub fn group(&self) -> G {
        self.group
    }

    /// Lowest probability belonging to this category
    pub fn lower_boundary(&self) -> Probability {
        self.lower_boundary
    }

    /// Highest probability belonging to this category
    pub fn upper_boundary(&self) -> Probability {
        self.upper_boundary
    }

    /// Whether the probability lies within the interval, both ends inclusive
    pub fn encloses(&self, probability: Probability) -> bool {
        probability >= self.lower_boundary && probability <= self.upper_boundary
    }
}

#[derive(Deserialize)]
struct RawCategory<G> {
    group: G,
    lower_boundary: Probability,
    upper_boundary: Probability,
}

// Deserialization goes through the validating constructor.
impl<'de, G> Deserialize<'de> for Category<G>
where
    G: CategoryGroup + Deserialize<'de>,
{
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawCategory::<G>::deserialize(deserializer)?;
        Self::new(raw.group, raw.lower_boundary, raw.upper_boundary)
            .map_err(serde::de::Error::custom)
    }
}

/// Category for an assessment section (A+ .. D)
pub type AssessmentSectionCategory = Category<AssessmentSectionCategoryGroup>;

/// Category for a failure mechanism (It .. VIt)
pub type FailureMechanismCategory = Category<FailureMechanismCategoryGroup>;

/// Category for a failure-mechanism section (Iv .. VIv)
pub type FailureMechanismSectionCategory = Category<FailureMechanismSectionCategoryGroup>;

/// Ordered table of categories, best category first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent, bound(deserialize = "G: CategoryGroup + Deserialize<'de>"))]
pub struct CategoriesList<G> {
    categories: Vec<Category<G>>,
}

impl<G: CategoryGroup> CategoriesList<G> {
    /// Create a table from categories ordered best first
    pub fn new(categories: Vec<Category<G>>) -> Self {
        Self { categories }
    }

    /// The first category enclosing the probability.
    ///
    /// The search is linear from the best category, so a probability equal
    /// to a shared boundary resolves to the earlier category.
    pub fn find(&self, probability: Probability) -> Result<&Category<G>, AssemblyError> {
        if self.categories.is_empty() {
            return Err(AssemblyError::EmptyCategoryTable);
        }
        self.categories
            .iter()
            .find(|category| category.encloses(probability))
            .ok_or(AssemblyError::NoMatchingCategory)
    }

    /// The category for a group, if the table has one
    pub fn get(&self, group: G) -> Option<&Category<G>> {
        self.categories.iter().find(|c| c.group == group)
    }

    /// Whether the table starts at 0, ends at 1 and has no gaps
    pub fn is_contiguous(&self) -> bool {
        let (Some(first), Some(last)) = (self.categories.first(), self.categories.last()) else {
            return false;
        };
        first.lower_boundary == Probability::ZERO
            && last.upper_boundary == Probability::ONE
            && self
                .categories
                .windows(2)
                .all(|pair| pair[0].upper_boundary == pair[1].lower_boundary)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Category<G>> {
        self.categories.iter()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Boundaries in order: the first lower boundary, then each upper boundary
    pub fn boundaries(&self) -> Vec<Probability> {
        self.categories
            .first()
            .map(|c| c.lower_boundary)
            .into_iter()
            .chain(self.categories.iter().map(|c| c.upper_boundary))
            .collect()
    }
}

impl<'a, G> IntoIterator for &'a CategoriesList<G> {
    type Item = &'a Category<G>;
    type IntoIter = std::slice::Iter<'a, Category<G>>;

    fn into_iter(self) -> Self::IntoIter {
        self.categories.iter()
    }
}
