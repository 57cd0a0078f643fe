//! Configuration management with layered hierarchy
//!
//! Holds the regulatory inputs of an assessment section (its standards and the
//! parameters of its failure mechanisms) so callers don't pass them by hand.

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

use crate::core::error::AssemblyError;
use crate::core::probability::Probability;
use crate::entities::input::{
    AssessmentSectionCategoriesInput, FailureMechanismCategoriesInput,
    FailureMechanismSectionCategoriesInput,
};
use crate::yaml::YamlSyntaxError;

const SIGNALING_STANDARD_VAR: &str = "ASSEMBLY_SIGNALING_STANDARD";
const LOWER_BOUNDARY_STANDARD_VAR: &str = "ASSEMBLY_LOWER_BOUNDARY_STANDARD";

/// Errors from reading configuration or building inputs from it
#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Syntax(#[from] YamlSyntaxError),

    #[error("Failed to read {path}")]
    #[diagnostic(code(assembly::config::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Missing configuration field `{0}`")]
    #[diagnostic(
        code(assembly::config::missing_field),
        help("Set it in the global or project config.yaml")
    )]
    MissingField(String),

    #[error("Unknown failure mechanism `{0}`")]
    #[diagnostic(
        code(assembly::config::unknown_mechanism),
        help("Add it under failure_mechanisms in config.yaml")
    )]
    UnknownMechanism(String),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Invalid(#[from] AssemblyError),
}

/// Assessment configuration with layered hierarchy
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Signaling standard of the assessment section
    pub signaling_standard: Option<f64>,

    /// Lower boundary standard of the assessment section
    pub lower_boundary_standard: Option<f64>,

    /// Failure mechanism parameters by name
    pub failure_mechanisms: BTreeMap<String, MechanismConfig>,
}

/// Parameters of one failure mechanism
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MechanismConfig {
    pub probability_distribution_factor: Option<f64>,
    pub n_value: Option<f64>,
}

impl MechanismConfig {
    fn merge(&mut self, other: MechanismConfig) {
        if other.probability_distribution_factor.is_some() {
            self.probability_distribution_factor = other.probability_distribution_factor;
        }
        if other.n_value.is_some() {
            self.n_value = other.n_value;
        }
    }
}

impl Config {
    /// Load configuration from all sources, merging in priority order
    pub fn load(project_file: Option<&Path>) -> Self {
        // 1. Built-in defaults (empty)
        let mut config = Config::default();

        // 2. Global user config (~/.config/assembly-kernel/config.yaml)
        if let Some(global_path) = Self::global_config_path() {
            config.merge_layer(&global_path);
        }

        // 3. Project config
        if let Some(path) = project_file {
            config.merge_layer(path);
        }

        // 4. Environment variables
        config.apply_env(|name| std::env::var(name).ok());

        config
    }

    /// Parse a configuration document, rejecting unknown keys
    pub fn from_yaml(source: &str, filename: &str) -> Result<Self, ConfigError> {
        serde_yml::from_str(source)
            .map_err(|e| YamlSyntaxError::from_serde_error(&e, source, filename).into())
    }

    /// Read and parse a configuration file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&contents, &path.display().to_string())
    }

    /// Get the path to the global config file
    pub fn global_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "assembly-kernel")
            .map(|dirs| dirs.config_dir().join("config.yaml"))
    }

    /// Merge another config into this one (other takes precedence)
    pub fn merge(&mut self, other: Config) {
        if other.signaling_standard.is_some() {
            self.signaling_standard = other.signaling_standard;
        }
        if other.lower_boundary_standard.is_some() {
            self.lower_boundary_standard = other.lower_boundary_standard;
        }
        for (name, mechanism) in other.failure_mechanisms {
            self.failure_mechanisms
                .entry(name)
                .or_default()
                .merge(mechanism);
        }
    }

    fn merge_layer(&mut self, path: &Path) {
        if !path.exists() {
            return;
        }
        match Self::from_file(path) {
            Ok(layer) => {
                debug!(path = %path.display(), "Loaded configuration layer");
                self.merge(layer);
            }
            Err(e) => warn!(path = %path.display(), error = %e, "Skipping configuration layer"),
        }
    }

    fn apply_env(&mut self, var: impl Fn(&str) -> Option<String>) {
        for (name, field) in [
            (SIGNALING_STANDARD_VAR, &mut self.signaling_standard),
            (LOWER_BOUNDARY_STANDARD_VAR, &mut self.lower_boundary_standard),
        ] {
            if let Some(raw) = var(name) {
                match raw.trim().parse::<f64>() {
                    Ok(value) => *field = Some(value),
                    Err(_) => warn!(variable = name, value = %raw, "Ignoring non-numeric value"),
                }
            }
        }
    }

    fn standards(&self) -> Result<(Probability, Probability), ConfigError> {
        let signaling = self
            .signaling_standard
            .ok_or_else(|| ConfigError::MissingField("signaling_standard".to_string()))?;
        let lower_boundary = self
            .lower_boundary_standard
            .ok_or_else(|| ConfigError::MissingField("lower_boundary_standard".to_string()))?;
        Ok((Probability::new(signaling)?, Probability::new(lower_boundary)?))
    }

    fn mechanism(&self, name: &str) -> Result<&MechanismConfig, ConfigError> {
        self.failure_mechanisms
            .get(name)
            .ok_or_else(|| ConfigError::UnknownMechanism(name.to_string()))
    }

    /// Validated input for the assessment section categories
    pub fn assessment_section_input(&self) -> Result<AssessmentSectionCategoriesInput, ConfigError> {
        let (signaling, lower_boundary) = self.standards()?;
        Ok(AssessmentSectionCategoriesInput::new(signaling, lower_boundary)?)
    }

    /// Validated input for the categories of the named failure mechanism
    pub fn failure_mechanism_input(
        &self,
        name: &str,
    ) -> Result<FailureMechanismCategoriesInput, ConfigError> {
        let (signaling, lower_boundary) = self.standards()?;
        let factor = self.mechanism(name)?.probability_distribution_factor.ok_or_else(|| {
            ConfigError::MissingField(format!(
                "failure_mechanisms.{name}.probability_distribution_factor"
            ))
        })?;
        Ok(FailureMechanismCategoriesInput::new(
            signaling,
            lower_boundary,
            factor,
        )?)
    }

    /// Validated input for the section categories of the named failure mechanism
    pub fn failure_mechanism_section_input(
        &self,
        name: &str,
    ) -> Result<FailureMechanismSectionCategoriesInput, ConfigError> {
        let mechanism = self.failure_mechanism_input(name)?;
        let n_value = self.mechanism(name)?.n_value.ok_or_else(|| {
            ConfigError::MissingField(format!("failure_mechanisms.{name}.n_value"))
        })?;
        Ok(FailureMechanismSectionCategoriesInput::new(
            mechanism.signaling_standard(),
            mechanism.lower_boundary_standard(),
            mechanism.probability_distribution_factor(),
            n_value,
        )?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
signaling_standard: 0.0003333333333333333
lower_boundary_standard: 0.001
failure_mechanisms:
  piping:
    probability_distribution_factor: 0.24
    n_value: 4.0
  macro_stability_inwards:
    probability_distribution_factor: 0.04
"#;

    #[test]
    fn test_from_yaml() {
        let config = Config::from_yaml(SAMPLE, "config.yaml").unwrap();
        assert_eq!(config.lower_boundary_standard, Some(0.001));
        assert_eq!(config.failure_mechanisms.len(), 2);
        assert_eq!(config.failure_mechanisms["piping"].n_value, Some(4.0));
    }

    #[test]
    fn test_unknown_key_is_reported() {
        let err = Config::from_yaml("signalling_standard: 0.001\n", "config.yaml").unwrap_err();
        match err {
            ConfigError::Syntax(diagnostic) => {
                assert!(diagnostic.message().contains("unknown field"));
                assert!(diagnostic.help_text().is_some());
            }
            other => panic!("expected a syntax error, got {other:?}"),
        }
    }

    #[test]
    fn test_syntax_error_reports_through_diagnostic() {
        let err = Config::from_yaml("signalling_standard: 0.001\n", "config.yaml").unwrap_err();
        let code = Diagnostic::code(&err).map(|c| c.to_string());
        assert_eq!(code.as_deref(), Some("assembly::config::yaml"));
        let help = Diagnostic::help(&err).map(|h| h.to_string()).unwrap();
        assert!(help.contains("signaling_standard"));
        assert!(Diagnostic::source_code(&err).is_some());
    }

    #[test]
    fn test_merge_prefers_later_layer() {
        let mut base = Config::from_yaml(SAMPLE, "global.yaml").unwrap();
        let project = Config::from_yaml(
            "lower_boundary_standard: 0.003\nfailure_mechanisms:\n  piping:\n    n_value: 2.0\n",
            "project.yaml",
        )
        .unwrap();
        base.merge(project);

        assert_eq!(base.lower_boundary_standard, Some(0.003));
        assert_eq!(base.signaling_standard, Some(0.0003333333333333333));
        let piping = &base.failure_mechanisms["piping"];
        assert_eq!(piping.n_value, Some(2.0));
        assert_eq!(piping.probability_distribution_factor, Some(0.24));
    }

    #[test]
    fn test_env_overrides() {
        let mut config = Config::from_yaml(SAMPLE, "config.yaml").unwrap();
        config.apply_env(|name| match name {
            SIGNALING_STANDARD_VAR => Some("0.0001".to_string()),
            LOWER_BOUNDARY_STANDARD_VAR => Some("not a number".to_string()),
            _ => None,
        });
        assert_eq!(config.signaling_standard, Some(0.0001));
        assert_eq!(config.lower_boundary_standard, Some(0.001));
    }

    #[test]
    fn test_input_builders() {
        let config = Config::from_yaml(SAMPLE, "config.yaml").unwrap();
        let section = config.failure_mechanism_section_input("piping").unwrap();
        assert_eq!(section.n_value(), 4.0);
        assert_eq!(section.probability_distribution_factor(), 0.24);
        assert!(config.assessment_section_input().is_ok());

        assert!(matches!(
            config.failure_mechanism_section_input("macro_stability_inwards"),
            Err(ConfigError::MissingField(field)) if field.ends_with("n_value")
        ));
        assert!(matches!(
            config.failure_mechanism_input("overtopping"),
            Err(ConfigError::UnknownMechanism(_))
        ));
        assert!(matches!(
            Config::default().assessment_section_input(),
            Err(ConfigError::MissingField(_))
        ));
    }

    #[test]
    fn test_invalid_values_surface_as_assembly_errors() {
        let config = Config::from_yaml(
            "signaling_standard: 0.01\nlower_boundary_standard: 0.001\n",
            "config.yaml",
        )
        .unwrap();
        assert!(matches!(
            config.assessment_section_input(),
            Err(ConfigError::Invalid(
                AssemblyError::SignalingStandardAboveLowerBoundaryStandard
            ))
        ));
    }
}
