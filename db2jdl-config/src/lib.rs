//! db2jdl-config: validated settings for exporting a database schema to JDL
//!
//! This crate turns raw configuration values (TOML file, `DB2JDL_*`
//! environment variables, or code) into an immutable [`ApplicationSettings`]
//! that the export pipeline reads. Building the settings:
//!
//! - validates the undefined-type handling strategy against the closed set in
//!   [`UndefinedTypeHandling`] and fails on anything else,
//! - defaults `add_table_name_jdl` to `false`,
//! - loads the grouped reserved-keyword resource and flattens it; an unusable
//!   resource produces an empty keyword list instead of an error.
//!
//! # Loading from a file
//!
//! ```toml
//! database_to_export = "shop"
//! database_object_prefix = ["t_"]
//! undefined_type_handling = "SKIP"
//! ignored_table_names = ["flyway_schema_history"]
//! reserved_keywords = "classpath:reserved_keywords.json"
//!
//! [export]
//! path = "shop.jdl"
//! type = "jdl"
//! ```
//!
//! ```rust,ignore
//! let settings = db2jdl_config::ApplicationSettings::load(Some(Path::new("db2jdl.toml")))?;
//! ```
//!
//! # Programmatic Configuration
//!
//! ```rust,ignore
//! let settings = db2jdl_config::SettingsBuilder::new("shop")
//!     .undefined_type_handling("ERROR")
//!     .export("shop.jdl", "jdl")
//!     .build()?;
//! ```
//!
//! # CLI Usage
//!
//! ```bash
//! db2jdl-config --config db2jdl.toml show
//! ```

pub mod config;
pub mod error;
pub mod keywords;

use std::path::Path;

pub use config::{ApplicationSettings, ExportSettings, RawSettings, UndefinedTypeHandling};
pub use error::{ConfigError, Result};

/// Builder pattern for assembling settings in code
pub struct SettingsBuilder {
    raw: RawSettings,
}

impl SettingsBuilder {
    /// Create a new builder for the given database
    pub fn new(database_to_export: impl Into<String>) -> Self {
        Self {
            raw: RawSettings {
                database_to_export: database_to_export.into(),
                ..Default::default()
            },
        }
    }

    /// Start from already loaded raw values
    pub fn from_raw(raw: RawSettings) -> Self {
        Self { raw }
    }

    /// Set the prefixes stripped from database object names
    pub fn database_object_prefixes(mut self, prefixes: &[&str]) -> Self {
        self.raw.database_object_prefix = prefixes.iter().map(|p| p.to_string()).collect();
        self
    }

    /// Write table names into the generated JDL
    pub fn add_table_name_to_jdl(mut self, enabled: bool) -> Self {
        self.raw.add_table_name_jdl = Some(enabled);
        self
    }

    /// Set the undefined-type handling strategy by name (validated on build)
    pub fn undefined_type_handling(mut self, name: &str) -> Self {
        self.raw.undefined_type_handling = Some(name.to_string());
        self
    }

    /// Set tables to exclude from the export
    pub fn ignored_table_names(mut self, tables: &[&str]) -> Self {
        self.raw.ignored_table_names = tables.iter().map(|t| t.to_string()).collect();
        self
    }

    /// Set the export destination and format
    pub fn export(mut self, path: impl AsRef<Path>, format: &str) -> Self {
        self.raw.export = ExportSettings::new(path.as_ref(), format);
        self
    }

    /// Set the reserved-keyword resource locator
    pub fn reserved_keywords(mut self, locator: &str) -> Self {
        self.raw.reserved_keywords = locator.to_string();
        self
    }

    /// Validate and build the settings
    pub fn build(self) -> Result<ApplicationSettings> {
        ApplicationSettings::from_raw(self.raw)
    }
}
