//! Category group vocabularies for the three aggregation levels
//!
//! - [`AssessmentSectionCategoryGroup`] - A+ through D for a whole assessment section
//! - [`FailureMechanismCategoryGroup`] - It through VIIt for one failure mechanism
//! - [`FailureMechanismSectionCategoryGroup`] - Iv through VIIv for one section of a mechanism
//!
//! The mechanism and section vocabularies order their ordinal groups from best
//! (I) to worst (VII, "no judgement yet") and add the `NotApplicable` and
//! `None` sentinels, which carry no rank.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An ordinal tier that a category table assigns probability intervals to
pub trait CategoryGroup: Copy + Eq + fmt::Debug + fmt::Display + 'static {
    /// Groups that own a probability interval, best first
    fn probability_groups() -> &'static [Self];

    /// Position from best (0) to worst, `None` for sentinels
    fn rank(&self) -> Option<u8>;
}

/// Category groups for an assessment section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssessmentSectionCategoryGroup {
    APlus,
    A,
    B,
    C,
    D,
}

impl fmt::Display for AssessmentSectionCategoryGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssessmentSectionCategoryGroup::APlus => write!(f, "A+"),
            AssessmentSectionCategoryGroup::A => write!(f, "A"),
            AssessmentSectionCategoryGroup::B => write!(f, "B"),
            AssessmentSectionCategoryGroup::C => write!(f, "C"),
            AssessmentSectionCategoryGroup::D => write!(f, "D"),
        }
    }
}

impl CategoryGroup for AssessmentSectionCategoryGroup {
    fn probability_groups() -> &'static [Self] {
        &[
            AssessmentSectionCategoryGroup::APlus,
            AssessmentSectionCategoryGroup::A,
            AssessmentSectionCategoryGroup::B,
            AssessmentSectionCategoryGroup::C,
            AssessmentSectionCategoryGroup::D,
        ]
    }

    fn rank(&self) -> Option<u8> {
        Some(match self {
            AssessmentSectionCategoryGroup::APlus => 0,
            AssessmentSectionCategoryGroup::A => 1,
            AssessmentSectionCategoryGroup::B => 2,
            AssessmentSectionCategoryGroup::C => 3,
            AssessmentSectionCategoryGroup::D => 4,
        })
    }
}

/// Category groups for a failure mechanism
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FailureMechanismCategoryGroup {
    /// The mechanism is not relevant for this assessment section
    NotApplicable,
    /// No result available yet
    None,
    It,
    IIt,
    IIIt,
    IVt,
    Vt,
    VIt,
    /// No judgement yet
    VIIt,
}

impl fmt::Display for FailureMechanismCategoryGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureMechanismCategoryGroup::NotApplicable => write!(f, "NVT"),
            FailureMechanismCategoryGroup::None => write!(f, "-"),
            FailureMechanismCategoryGroup::It => write!(f, "It"),
            FailureMechanismCategoryGroup::IIt => write!(f, "IIt"),
            FailureMechanismCategoryGroup::IIIt => write!(f, "IIIt"),
            FailureMechanismCategoryGroup::IVt => write!(f, "IVt"),
            FailureMechanismCategoryGroup::Vt => write!(f, "Vt"),
            FailureMechanismCategoryGroup::VIt => write!(f, "VIt"),
            FailureMechanismCategoryGroup::VIIt => write!(f, "VIIt"),
        }
    }
}

impl CategoryGroup for FailureMechanismCategoryGroup {
    fn probability_groups() -> &'static [Self] {
        &[
            FailureMechanismCategoryGroup::It,
            FailureMechanismCategoryGroup::IIt,
            FailureMechanismCategoryGroup::IIIt,
            FailureMechanismCategoryGroup::IVt,
            FailureMechanismCategoryGroup::Vt,
            FailureMechanismCategoryGroup::VIt,
        ]
    }

    fn rank(&self) -> Option<u8> {
        match self {
            FailureMechanismCategoryGroup::NotApplicable | FailureMechanismCategoryGroup::None => {
                None
            }
            FailureMechanismCategoryGroup::It => Some(0),
            FailureMechanismCategoryGroup::IIt => Some(1),
            FailureMechanismCategoryGroup::IIIt => Some(2),
            FailureMechanismCategoryGroup::IVt => Some(3),
            FailureMechanismCategoryGroup::Vt => Some(4),
            FailureMechanismCategoryGroup::VIt => Some(5),
            FailureMechanismCategoryGroup::VIIt => Some(6),
        }
    }
}

/// Category groups for one section of a failure mechanism
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FailureMechanismSectionCategoryGroup {
    /// The mechanism is not relevant for this section
    NotApplicable,
    /// No result available yet
    None,
    Iv,
    IIv,
    IIIv,
    IVv,
    Vv,
    VIv,
    /// No judgement yet
    VIIv,
}

impl FailureMechanismSectionCategoryGroup {
    /// Whether this group settles the section, i.e. is neither "no judgement
    /// yet" nor one of the sentinels
    pub fn is_decisive(&self) -> bool {
        !matches!(
            self,
            FailureMechanismSectionCategoryGroup::NotApplicable
                | FailureMechanismSectionCategoryGroup::None
                | FailureMechanismSectionCategoryGroup::VIIv
        )
    }

    /// The same tier in the failure-mechanism vocabulary
    pub fn to_failure_mechanism_group(self) -> FailureMechanismCategoryGroup {
        match self {
            FailureMechanismSectionCategoryGroup::NotApplicable => {
                FailureMechanismCategoryGroup::NotApplicable
            }
            FailureMechanismSectionCategoryGroup::None => FailureMechanismCategoryGroup::None,
            FailureMechanismSectionCategoryGroup::Iv => FailureMechanismCategoryGroup::It,
            FailureMechanismSectionCategoryGroup::IIv => FailureMechanismCategoryGroup::IIt,
            FailureMechanismSectionCategoryGroup::IIIv => FailureMechanismCategoryGroup::IIIt,
            FailureMechanismSectionCategoryGroup::IVv => FailureMechanismCategoryGroup::IVt,
            FailureMechanismSectionCategoryGroup::Vv => FailureMechanismCategoryGroup::Vt,
            FailureMechanismSectionCategoryGroup::VIv => FailureMechanismCategoryGroup::VIt,
            FailureMechanismSectionCategoryGroup::VIIv => FailureMechanismCategoryGroup::VIIt,
        }
    }
}

impl fmt::Display for FailureMechanismSectionCategoryGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureMechanismSectionCategoryGroup::NotApplicable => write!(f, "NVT"),
            FailureMechanismSectionCategoryGroup::None => write!(f, "-"),
            FailureMechanismSectionCategoryGroup::Iv => write!(f, "Iv"),
            FailureMechanismSectionCategoryGroup::IIv => write!(f, "IIv"),
            FailureMechanismSectionCategoryGroup::IIIv => write!(f, "IIIv"),
            FailureMechanismSectionCategoryGroup::IVv => write!(f, "IVv"),
            FailureMechanismSectionCategoryGroup::Vv => write!(f, "Vv"),
            FailureMechanismSectionCategoryGroup::VIv => write!(f, "VIv"),
            FailureMechanismSectionCategoryGroup::VIIv => write!(f, "VIIv"),
        }
    }
}

impl CategoryGroup for FailureMechanismSectionCategoryGroup {
    fn probability_groups() -> &'static [Self] {
        &[
            FailureMechanismSectionCategoryGroup::Iv,
            FailureMechanismSectionCategoryGroup::IIv,
            FailureMechanismSectionCategoryGroup::IIIv,
            FailureMechanismSectionCategoryGroup::IVv,
            FailureMechanismSectionCategoryGroup::Vv,
            FailureMechanismSectionCategoryGroup::VIv,
        ]
    }

    fn rank(&self) -> Option<u8> {
        match self {
            FailureMechanismSectionCategoryGroup::NotApplicable
            | FailureMechanismSectionCategoryGroup::None => None,
            FailureMechanismSectionCategoryGroup::Iv => Some(0),
            FailureMechanismSectionCategoryGroup::IIv => Some(1),
            FailureMechanismSectionCategoryGroup::IIIv => Some(2),
            FailureMechanismSectionCategoryGroup::IVv => Some(3),
            FailureMechanismSectionCategoryGroup::Vv => Some(4),
            FailureMechanismSectionCategoryGroup::VIv => Some(5),
            FailureMechanismSectionCategoryGroup::VIIv => Some(6),
        }
    }
}
