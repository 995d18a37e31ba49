use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::models::ScoringParams;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    #[serde(default)]
    pub catalog: CatalogSettings,
    #[serde(default)]
    pub contact: ContactSettings,
    #[serde(default)]
    pub analysis: AnalysisSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogSettings {
    /// Path to a TOML catalog file; the built-in seed catalog is used
    /// when absent
    pub path: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContactSettings {
    #[serde(default = "default_phone_number")]
    pub phone_number: String,
}

impl Default for ContactSettings {
    fn default() -> Self {
        Self {
            phone_number: default_phone_number(),
        }
    }
}

fn default_phone_number() -> String {
    "557592812153".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisSettings {
    /// Cosmetic "processing" delay applied in the analyze handler, in
    /// milliseconds. Purely a UX affordance; the engine never waits.
    #[serde(default)]
    pub processing_delay_ms: u64,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            processing_delay_ms: 0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScoringSettings {
    #[serde(default = "default_reference_price")]
    pub reference_price: f64,
    #[serde(default = "default_strong_entry_ratio")]
    pub strong_entry_ratio: f64,
    #[serde(default = "default_thin_entry_ratio")]
    pub thin_entry_ratio: f64,
    #[serde(default = "default_buy_threshold")]
    pub buy_threshold: u8,
    #[serde(default = "default_rent_threshold")]
    pub rent_threshold: u8,
    #[serde(default = "default_rent_budget_factor")]
    pub rent_budget_factor: f64,
    #[serde(default = "default_purchase_budget_multiplier")]
    pub purchase_budget_multiplier: f64,
    #[serde(default = "default_max_recommendations")]
    pub max_recommendations: usize,
}

impl Default for ScoringSettings {
    fn default() -> Self {
        Self {
            reference_price: default_reference_price(),
            strong_entry_ratio: default_strong_entry_ratio(),
            thin_entry_ratio: default_thin_entry_ratio(),
            buy_threshold: default_buy_threshold(),
            rent_threshold: default_rent_threshold(),
            rent_budget_factor: default_rent_budget_factor(),
            purchase_budget_multiplier: default_purchase_budget_multiplier(),
            max_recommendations: default_max_recommendations(),
        }
    }
}

impl ScoringSettings {
    pub fn to_params(&self) -> ScoringParams {
        ScoringParams {
            reference_price: self.reference_price,
            strong_entry_ratio: self.strong_entry_ratio,
            thin_entry_ratio: self.thin_entry_ratio,
            buy_threshold: self.buy_threshold,
            rent_threshold: self.rent_threshold,
            rent_budget_factor: self.rent_budget_factor,
            purchase_budget_multiplier: self.purchase_budget_multiplier,
            max_recommendations: self.max_recommendations,
        }
    }
}

fn default_reference_price() -> f64 { 500_000.0 }
fn default_strong_entry_ratio() -> f64 { 0.4 }
fn default_thin_entry_ratio() -> f64 { 0.05 }
fn default_buy_threshold() -> u8 { 65 }
fn default_rent_threshold() -> u8 { 40 }
fn default_rent_budget_factor() -> f64 { 1.2 }
fn default_purchase_budget_multiplier() -> f64 { 200.0 }
fn default_max_recommendations() -> usize { 3 }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Environment variables (prefixed with MORADA__)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Add default config file
            .add_source(File::with_name("config/default").required(false))
            // Add local config file (for development overrides)
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables (prefixed with MORADA__)
            // e.g., MORADA__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("MORADA")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("MORADA")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}
