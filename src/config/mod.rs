//! Configuration loading for company statutory settings.
//!
//! This module loads a company's EPF, ESI, bonus, professional tax and
//! labour welfare fund rules from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use payroll_components::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/acme_pune").unwrap();
//! println!("Loaded company: {}", config.company().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    CompanyConfig, CompanyMetadata, LabourWelfareFundConfig, ProfessionalTaxConfig,
    StatutoryConfig,
};
