//! Core module - fundamental types and utilities

pub mod config;
pub mod error;
pub mod output;
pub mod probability;

pub use config::{Config, ConfigError, MechanismConfig};
pub use error::AssemblyError;
pub use output::{CalculationOutput, WarningMessage};
pub use probability::Probability;
