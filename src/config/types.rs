//! Configuration types for company statutory settings.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use std::collections::HashMap;

use serde::Deserialize;

use crate::models::{
    EpfRule, EsiRule, LabourWelfareFundRule, ProfessionalTaxRule, StatutoryBonusRule,
    StatutoryRuleSet,
};

/// Metadata about the company the configuration belongs to.
#[derive(Debug, Clone, Deserialize)]
pub struct CompanyMetadata {
    /// The company's display name.
    pub name: String,
    /// The Indian state the company's primary location is in.
    pub state: String,
    /// The city of the primary location.
    #[serde(default)]
    pub city: Option<String>,
}

/// Company-wide statutory rules from statutory.yaml.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatutoryConfig {
    /// EPF rule, if the company is EPF-registered.
    #[serde(default)]
    pub epf: Option<EpfRule>,
    /// ESI rule, if the company is ESI-registered.
    #[serde(default)]
    pub esi: Option<EsiRule>,
    /// Statutory bonus rule, if enabled.
    #[serde(default)]
    pub bonus: Option<StatutoryBonusRule>,
}

/// Professional tax configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct ProfessionalTaxConfig {
    /// One rule per state.
    #[serde(default)]
    pub professional_tax: Vec<ProfessionalTaxRule>,
}

/// Labour welfare fund configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct LabourWelfareFundConfig {
    /// One rule per state.
    #[serde(default)]
    pub labour_welfare_fund: Vec<LabourWelfareFundRule>,
}

pub(crate) fn state_key(state: &str) -> String {
    state.trim().to_lowercase()
}

/// The complete statutory configuration of one company.
///
/// State-specific rules are indexed by normalized state name.
#[derive(Debug, Clone)]
pub struct CompanyConfig {
    metadata: CompanyMetadata,
    statutory: StatutoryConfig,
    professional_tax: HashMap<String, ProfessionalTaxRule>,
    labour_welfare_fund: HashMap<String, LabourWelfareFundRule>,
}

impl CompanyConfig {
    /// Creates a new CompanyConfig from its component parts.
    ///
    /// If two rules are configured for the same state, the later one wins.
    pub fn new(
        metadata: CompanyMetadata,
        statutory: StatutoryConfig,
        professional_tax: Vec<ProfessionalTaxRule>,
        labour_welfare_fund: Vec<LabourWelfareFundRule>,
    ) -> Self {
        Self {
            metadata,
            statutory,
            professional_tax: professional_tax
                .into_iter()
                .map(|rule| (state_key(&rule.state), rule))
                .collect(),
            labour_welfare_fund: labour_welfare_fund
                .into_iter()
                .map(|rule| (state_key(&rule.state), rule))
                .collect(),
        }
    }

    /// Returns the company metadata.
    pub fn company(&self) -> &CompanyMetadata {
        &self.metadata
    }

    /// Returns the company-wide statutory rules.
    pub fn statutory(&self) -> &StatutoryConfig {
        &self.statutory
    }

    /// Returns the professional tax rules by normalized state name.
    pub fn professional_tax(&self) -> &HashMap<String, ProfessionalTaxRule> {
        &self.professional_tax
    }

    /// Returns the labour welfare fund rules by normalized state name.
    pub fn labour_welfare_fund(&self) -> &HashMap<String, LabourWelfareFundRule> {
        &self.labour_welfare_fund
    }

    /// Assembles the statutory rules that apply to an employee in `state`.
    ///
    /// States without a PT or LWF rule simply have no such component.
    pub fn rule_set_for_state(&self, state: &str) -> StatutoryRuleSet {
        let key = state_key(state);
        StatutoryRuleSet {
            epf: self.statutory.epf.clone(),
            esi: self.statutory.esi.clone(),
            pt: self.professional_tax.get(&key).cloned(),
            lwf: self.labour_welfare_fund.get(&key).cloned(),
            bonus: self.statutory.bonus.clone(),
        }
    }
}
