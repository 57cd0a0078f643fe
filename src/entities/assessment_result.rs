//! Qualitative and quantitative results of the three assessment phases
//!
//! Each phase has a closed vocabulary. Callers holding integer codes from an
//! external source convert through `TryFrom<i32>`, which is where an
//! out-of-range discriminant is rejected. The tailor-made category vocabulary
//! is the exception: its conversion is infallible and maps unknown codes to
//! its `None` sentinel.

use serde::{Deserialize, Serialize};

use crate::core::error::AssemblyError;
use crate::core::probability::Probability;
use crate::entities::category_group::{
    CategoryGroup, FailureMechanismCategoryGroup, FailureMechanismSectionCategoryGroup,
};

/// Implements `TryFrom<i32>` over the listed `code => variant` pairs
macro_rules! impl_try_from_code {
    ($ty:ident { $($code:literal => $variant:ident),+ $(,)? }) => {
        impl TryFrom<i32> for $ty {
            type Error = AssemblyError;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                match value {
                    $($code => Ok($ty::$variant),)+
                    _ => Err(AssemblyError::InvalidEnumValue {
                        name: stringify!($ty),
                        value,
                    }),
                }
            }
        }
    };
}

/// Result of a simple assessment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SimpleAssessmentResult {
    /// No result yet
    None,
    /// The mechanism does not apply to the section (NVT)
    NotApplicable,
    /// The failure probability is negligible (FV)
    ProbabilityNegligible,
    /// A detailed assessment is required
    AssessFurther,
}

impl_try_from_code!(SimpleAssessmentResult {
    1 => None,
    2 => NotApplicable,
    3 => ProbabilityNegligible,
    4 => AssessFurther,
});

/// Result of a simple assessment that only checks relevance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SimpleAssessmentValidityOnlyResult {
    /// No result yet
    None,
    /// The mechanism does not apply to the section (NVT)
    NotApplicable,
    /// The mechanism applies and needs further assessment
    Applicable,
}

impl_try_from_code!(SimpleAssessmentValidityOnlyResult {
    1 => None,
    2 => NotApplicable,
    3 => Applicable,
});

/// Qualitative result of a detailed assessment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetailedAssessmentResult {
    /// No result yet
    None,
    /// The section satisfies the norm (V)
    Sufficient,
    /// The section does not satisfy the norm (VN)
    Insufficient,
    /// Not assessed yet (NGO)
    NotAssessed,
}

impl_try_from_code!(DetailedAssessmentResult {
    1 => None,
    2 => Sufficient,
    3 => Insufficient,
    4 => NotAssessed,
});

/// Qualitative result for a single category boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetailedCalculationResult {
    /// The boundary is satisfied (V)
    Sufficient,
    /// The boundary is not satisfied (VN)
    Insufficient,
    /// No judgement yet (NGO)
    NotAssessed,
}

impl_try_from_code!(DetailedCalculationResult {
    1 => Sufficient,
    2 => Insufficient,
    3 => NotAssessed,
});

/// Results of a detailed assessment per category boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailedCategoryBoundariesResult {
    /// Boundary between Iv and IIv (strictest)
    pub i_to_ii: DetailedCalculationResult,
    /// Boundary between IIv and IIIv
    pub ii_to_iii: DetailedCalculationResult,
    /// Boundary between IIIv and IVv
    pub iii_to_iv: DetailedCalculationResult,
    /// Boundary between IVv and Vv
    pub iv_to_v: DetailedCalculationResult,
    /// Boundary between Vv and VIv (least strict)
    pub v_to_vi: DetailedCalculationResult,
}

impl DetailedCategoryBoundariesResult {
    pub fn new(
        i_to_ii: DetailedCalculationResult,
        ii_to_iii: DetailedCalculationResult,
        iii_to_iv: DetailedCalculationResult,
        iv_to_v: DetailedCalculationResult,
        v_to_vi: DetailedCalculationResult,
    ) -> Self {
        Self {
            i_to_ii,
            ii_to_iii,
            iii_to_iv,
            iv_to_v,
            v_to_vi,
        }
    }

    /// Boundary results from strictest (I-II) to least strict (V-VI)
    pub fn in_order(&self) -> [DetailedCalculationResult; 5] {
        [
            self.i_to_ii,
            self.ii_to_iii,
            self.iii_to_iv,
            self.iv_to_v,
            self.v_to_vi,
        ]
    }
}

/// Qualitative result of a tailor-made assessment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TailorMadeAssessmentResult {
    /// No result yet
    None,
    /// The failure probability is negligible (FV)
    ProbabilityNegligible,
    /// The section satisfies the norm (V)
    Sufficient,
    /// The section does not satisfy the norm (VN)
    Insufficient,
    /// Not assessed yet (NGO)
    NotAssessed,
}

impl_try_from_code!(TailorMadeAssessmentResult {
    1 => None,
    2 => ProbabilityNegligible,
    3 => Sufficient,
    4 => Insufficient,
    5 => NotAssessed,
});

/// Discriminant of [`TailorMadeProbabilityCalculationResult`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TailorMadeProbabilityResultKind {
    ProbabilityNegligible,
    NotAssessed,
    Probability,
}

impl_try_from_code!(TailorMadeProbabilityResultKind {
    1 => ProbabilityNegligible,
    2 => NotAssessed,
    3 => Probability,
});

/// Tailor-made assessment result that either is a qualitative sentinel or
/// carries a calculated probability
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TailorMadeProbabilityCalculationResult {
    /// The failure probability is negligible (FV)
    ProbabilityNegligible,
    /// Not assessed yet (NGO)
    NotAssessed,
    /// A calculated failure probability
    Probability(Probability),
}

impl TailorMadeProbabilityCalculationResult {
    /// Build from a discriminant and an optional probability value.
    ///
    /// The probability must be present exactly when the discriminant is
    /// [`TailorMadeProbabilityResultKind::Probability`].
    pub fn from_parts(
        kind: TailorMadeProbabilityResultKind,
        probability: Option<f64>,
    ) -> Result<Self, AssemblyError> {
        match (kind, probability) {
            (TailorMadeProbabilityResultKind::Probability, Some(value)) => {
                Ok(Self::Probability(Probability::new(value)?))
            }
            (TailorMadeProbabilityResultKind::Probability, None) => {
                Err(AssemblyError::ProbabilityMissing)
            }
            (_, Some(_)) => Err(AssemblyError::ProbabilityNotExpected),
            (TailorMadeProbabilityResultKind::ProbabilityNegligible, None) => {
                Ok(Self::ProbabilityNegligible)
            }
            (TailorMadeProbabilityResultKind::NotAssessed, None) => Ok(Self::NotAssessed),
        }
    }

    pub fn kind(&self) -> TailorMadeProbabilityResultKind {
        match self {
            Self::ProbabilityNegligible => TailorMadeProbabilityResultKind::ProbabilityNegligible,
            Self::NotAssessed => TailorMadeProbabilityResultKind::NotAssessed,
            Self::Probability(_) => TailorMadeProbabilityResultKind::Probability,
        }
    }
}

/// Category given directly as the result of a tailor-made assessment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TailorMadeCategoryGroupResult {
    /// No result yet, also the landing place for unknown codes
    None,
    /// The failure probability is negligible
    FV,
    Iv,
    IIv,
    IIIv,
    IVv,
    Vv,
    VIv,
    VIIv,
    /// Not assessed yet
    NGO,
}

impl From<i32> for TailorMadeCategoryGroupResult {
    fn from(value: i32) -> Self {
        match value {
            1 => Self::FV,
            2 => Self::Iv,
            3 => Self::IIv,
            4 => Self::IIIv,
            5 => Self::IVv,
            6 => Self::Vv,
            7 => Self::VIv,
            8 => Self::VIIv,
            9 => Self::NGO,
            _ => Self::None,
        }
    }
}

/// A category group together with the failure probability it was derived from.
///
/// The probability is absent when the group came from a qualitative path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryAssemblyResult<G> {
    /// Resulting category group
    pub category_group: G,

    /// Estimated probability of failure
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub probability: Option<Probability>,
}

impl<G: CategoryGroup> CategoryAssemblyResult<G> {
    pub fn new(category_group: G, probability: Option<Probability>) -> Self {
        Self {
            category_group,
            probability,
        }
    }

    /// Result without an estimated probability
    pub fn qualitative(category_group: G) -> Self {
        Self::new(category_group, None)
    }
}

/// Assembly result of a failure-mechanism section
pub type FailureMechanismSectionAssemblyResult =
    CategoryAssemblyResult<FailureMechanismSectionCategoryGroup>;

/// Assembly result of a failure mechanism
pub type FailureMechanismAssemblyResult = CategoryAssemblyResult<FailureMechanismCategoryGroup>;
