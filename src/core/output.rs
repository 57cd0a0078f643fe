//! Calculation output envelope and non-fatal warnings

use serde::{Deserialize, Serialize};

/// Non-fatal remarks attached to a successful calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningMessage {
    /// A probability scaled by the length-effect factor exceeded one and was set to one
    CorrectedProbability,
    /// The geotechnical length-effect factor exceeded one and was set to one
    CorrectedLengthEffectFactor,
}

impl std::fmt::Display for WarningMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WarningMessage::CorrectedProbability => {
                write!(f, "Probability exceeded one and was corrected to one")
            }
            WarningMessage::CorrectedLengthEffectFactor => {
                write!(f, "Length-effect factor exceeded one and was corrected to one")
            }
        }
    }
}

/// A successful calculation result together with its warnings.
///
/// Fatal errors travel in the `Err` branch of the surrounding `Result`, so a
/// value and an error never coexist.
#[must_use = "calculation warnings are advisory and should be inspected"]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationOutput<T> {
    /// The calculated value
    pub result: T,

    /// Warnings in the order they were raised
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<WarningMessage>,
}

impl<T> CalculationOutput<T> {
    /// Output without warnings
    pub fn new(result: T) -> Self {
        Self {
            result,
            warnings: Vec::new(),
        }
    }

    /// Output with the given warnings
    pub fn with_warnings(result: T, warnings: Vec<WarningMessage>) -> Self {
        Self { result, warnings }
    }

    /// Whether any warning was raised
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Transform the value, keeping the warnings
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> CalculationOutput<U> {
        CalculationOutput {
            result: f(self.result),
            warnings: self.warnings,
        }
    }

    /// Split into value and warnings
    pub fn into_parts(self) -> (T, Vec<WarningMessage>) {
        (self.result, self.warnings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_keeps_warnings() {
        let output = CalculationOutput::with_warnings(2, vec![WarningMessage::CorrectedProbability]);
        let mapped = output.map(|v| v * 10);
        assert_eq!(mapped.result, 20);
        assert_eq!(mapped.warnings, vec![WarningMessage::CorrectedProbability]);
    }

    #[test]
    fn test_new_has_no_warnings() {
        let output = CalculationOutput::new("ok");
        assert!(!output.has_warnings());
        let (value, warnings) = output.into_parts();
        assert_eq!(value, "ok");
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_serializes_warnings_snake_case() {
        let output =
            CalculationOutput::with_warnings(1, vec![WarningMessage::CorrectedLengthEffectFactor]);
        let json = serde_json::to_string(&output).unwrap();
        assert_eq!(json, r#"{"result":1,"warnings":["corrected_length_effect_factor"]}"#);

        let json = serde_json::to_string(&CalculationOutput::new(1)).unwrap();
        assert_eq!(json, r#"{"result":1}"#);
    }
}
