//! Assembly errors with diagnostic codes

use miette::Diagnostic;
use thiserror::Error;

/// Fatal errors raised by input validation and by the calculators.
///
/// Validation kinds surface from the constructors of input values. Computation
/// kinds surface as the `Err` branch of a calculator result. Wrapping kinds
/// keep their root cause reachable through [`std::error::Error::source`].
#[derive(Debug, Clone, PartialEq, Error, Diagnostic)]
pub enum AssemblyError {
    #[error("Value may not be NaN")]
    #[diagnostic(code(assembly::value::nan))]
    ValueMayNotBeNaN,

    #[error("Value may not be below zero")]
    #[diagnostic(code(assembly::value::below_zero))]
    ValueBelowZero,

    #[error("Value may not exceed one")]
    #[diagnostic(code(assembly::value::above_one))]
    ValueAboveOne,

    #[error("Value may not be below one")]
    #[diagnostic(code(assembly::value::below_one))]
    ValueBelowOne,

    #[error("Signaling standard exceeds the lower boundary standard")]
    #[diagnostic(
        code(assembly::input::signaling_above_lower_boundary),
        help("The signaling standard must be at most the lower boundary standard, e.g. 1/3000 and 1/1000")
    )]
    SignalingStandardAboveLowerBoundaryStandard,

    #[error("Invalid probability distribution factor")]
    #[diagnostic(
        code(assembly::input::probability_distribution_factor),
        help("The probability distribution factor must lie in [0, 1]")
    )]
    InvalidProbabilityDistributionFactor(#[source] Box<AssemblyError>),

    #[error("Invalid N-value")]
    #[diagnostic(
        code(assembly::input::n_value),
        help("The length-effect factor (N-value) must be at least 1")
    )]
    InvalidNValue(#[source] Box<AssemblyError>),

    #[error("Lower boundary of a category exceeds its upper boundary")]
    #[diagnostic(code(assembly::category::inverted_boundaries))]
    LowerBoundaryAboveUpperBoundary,

    #[error("No category encloses the given probability")]
    #[diagnostic(code(assembly::calculation::no_matching_category))]
    NoMatchingCategory,

    #[error("Input is null or empty")]
    #[diagnostic(
        code(assembly::calculation::empty_category_table),
        help("Calculate a category table first and pass it to the calculator")
    )]
    EmptyCategoryTable,

    #[error("Impossible combination of results per category boundary")]
    #[diagnostic(
        code(assembly::calculation::impossible_result_combination),
        help("A boundary cannot be approved while a less strict boundary is not approved")
    )]
    ImpossibleResultCombination,

    #[error("Invalid enumeration value {value} for {name}")]
    #[diagnostic(code(assembly::input::invalid_enum_value))]
    InvalidEnumValue { name: &'static str, value: i32 },

    #[error("A probability value is required for this result type")]
    #[diagnostic(code(assembly::input::probability_missing))]
    ProbabilityMissing,

    #[error("A probability value is not allowed for this result type")]
    #[diagnostic(code(assembly::input::probability_not_expected))]
    ProbabilityNotExpected,

    #[error("Not implemented: {0}")]
    #[diagnostic(code(assembly::not_implemented))]
    NotImplemented(&'static str),
}

impl AssemblyError {
    /// Wrap a value error as an invalid probability distribution factor
    pub fn invalid_probability_distribution_factor(cause: AssemblyError) -> Self {
        AssemblyError::InvalidProbabilityDistributionFactor(Box::new(cause))
    }

    /// Wrap a value error as an invalid N-value
    pub fn invalid_n_value(cause: AssemblyError) -> Self {
        AssemblyError::InvalidNValue(Box::new(cause))
    }

    /// The innermost cause of this error (itself when not chained)
    pub fn root_cause(&self) -> &AssemblyError {
        match self {
            AssemblyError::InvalidProbabilityDistributionFactor(inner)
            | AssemblyError::InvalidNValue(inner) => inner.root_cause(),
            other => other,
        }
    }

    /// Whether this error marks a deliberately unimplemented path
    pub fn is_not_implemented(&self) -> bool {
        matches!(self, AssemblyError::NotImplemented(_))
    }
}
