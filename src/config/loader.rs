//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading a company's
//! statutory configuration from YAML files.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{EngineError, EngineResult};
use crate::models::{LabourWelfareFundRule, ProfessionalTaxRule, StatutoryRuleSet};

use super::types::{
    CompanyConfig, CompanyMetadata, LabourWelfareFundConfig, ProfessionalTaxConfig,
    StatutoryConfig, state_key,
};

/// Loads and provides access to a company's statutory configuration.
///
/// # Directory Structure
///
/// ```text
/// config/acme_pune/
/// ├── company.yaml               # Company metadata
/// ├── statutory.yaml             # EPF, ESI and bonus rules
/// ├── professional_tax.yaml      # PT slabs per state
/// └── labour_welfare_fund.yaml   # LWF contributions per state
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_components::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/acme_pune").unwrap();
/// let rules = loader.rule_set();
/// println!("{} has EPF: {}", loader.company().name, rules.epf.is_some());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: CompanyConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML or a malformed slab table
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<CompanyMetadata>(&path.join("company.yaml"))?;
        let statutory = Self::load_yaml::<StatutoryConfig>(&path.join("statutory.yaml"))?;
        let professional_tax =
            Self::load_yaml::<ProfessionalTaxConfig>(&path.join("professional_tax.yaml"))?;
        let labour_welfare_fund =
            Self::load_yaml::<LabourWelfareFundConfig>(&path.join("labour_welfare_fund.yaml"))?;

        info!(
            path = %path.display(),
            company = %metadata.name,
            pt_rules = professional_tax.professional_tax.len(),
            lwf_rules = labour_welfare_fund.labour_welfare_fund.len(),
            "Loaded statutory configuration"
        );

        let config = CompanyConfig::new(
            metadata,
            statutory,
            professional_tax.professional_tax,
            labour_welfare_fund.labour_welfare_fund,
        );

        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();
        debug!(path = %path_str, "Reading configuration file");

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying company configuration.
    pub fn config(&self) -> &CompanyConfig {
        &self.config
    }

    /// Returns the company metadata.
    pub fn company(&self) -> &CompanyMetadata {
        self.config.company()
    }

    /// Returns the statutory rules for the company's own state.
    pub fn rule_set(&self) -> StatutoryRuleSet {
        self.config.rule_set_for_state(&self.config.company().state)
    }

    /// Returns the statutory rules for an employee working in `state`.
    pub fn rule_set_for_state(&self, state: &str) -> StatutoryRuleSet {
        self.config.rule_set_for_state(state)
    }

    /// Gets the professional tax rule for a state.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use payroll_components::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/acme_pune")?;
    /// let pt = loader.professional_tax("Maharashtra")?;
    /// println!("{} slabs", pt.gross_salary_range.len());
    /// # Ok::<(), payroll_components::error::EngineError>(())
    /// ```
    pub fn professional_tax(&self, state: &str) -> EngineResult<&ProfessionalTaxRule> {
        self.config
            .professional_tax()
            .get(&state_key(state))
            .ok_or_else(|| EngineError::RuleNotFound {
                kind: "professional_tax".to_string(),
                key: state.to_string(),
            })
    }

    /// Gets the labour welfare fund rule for a state.
    pub fn labour_welfare_fund(&self, state: &str) -> EngineResult<&LabourWelfareFundRule> {
        self.config
            .labour_welfare_fund()
            .get(&state_key(state))
            .ok_or_else(|| EngineError::RuleNotFound {
                kind: "labour_welfare_fund".to_string(),
                key: state.to_string(),
            })
    }
}
