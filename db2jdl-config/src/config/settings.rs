//! Validated, immutable settings consumed by the export pipeline

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::defaults;
use super::handling::UndefinedTypeHandling;
use super::raw::RawSettings;
use crate::error::Result;
use crate::keywords;

/// Destination and format of the generated output
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportSettings {
    path: PathBuf,
    #[serde(rename = "type")]
    format: String,
}

impl ExportSettings {
    pub fn new(path: impl Into<PathBuf>, format: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            format: format.into(),
        }
    }

    /// Where the output is written
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Output format identifier (the `type` key)
    pub fn format(&self) -> &str {
        &self.format
    }
}

/// Settings for one export run
///
/// Built once through [`ApplicationSettings::from_raw`]; there is no way to
/// change a field afterwards. Reconfiguring means building a new instance.
///
/// Fields are private and every accessor returns a shared reference or a
/// `Copy` value, so callers only ever mutate their own clones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApplicationSettings {
    database_to_export: String,
    database_object_prefixes: Vec<String>,
    add_table_name_to_jdl: bool,
    undefined_type_handling: UndefinedTypeHandling,
    ignored_table_names: Vec<String>,
    reserved_keywords: Vec<String>,
    export: ExportSettings,
}

impl ApplicationSettings {
    /// Validate raw input and derive the reserved-keyword list
    ///
    /// Fails only when the undefined-type handling strategy does not name a
    /// declared member. An unusable keyword resource yields an empty list.
    pub fn from_raw(raw: RawSettings) -> Result<Self> {
        let undefined_type_handling =
            UndefinedTypeHandling::from_raw(raw.undefined_type_handling.as_deref())?;
        let add_table_name_to_jdl = raw
            .add_table_name_jdl
            .unwrap_or(defaults::ADD_TABLE_NAME_JDL);

        debug!(
            "Building settings for database {:?} (undefined types: {}, table names in JDL: {})",
            raw.database_to_export, undefined_type_handling, add_table_name_to_jdl
        );

        let reserved_keywords = keywords::load_reserved_keywords(&raw.reserved_keywords);
        debug!(
            "Loaded {} reserved keywords from {}",
            reserved_keywords.len(),
            raw.reserved_keywords
        );

        Ok(Self {
            database_to_export: raw.database_to_export,
            database_object_prefixes: raw.database_object_prefix,
            add_table_name_to_jdl,
            undefined_type_handling,
            ignored_table_names: raw.ignored_table_names,
            reserved_keywords,
            export: raw.export,
        })
    }

    /// Load from a config file and `DB2JDL_*` environment variables, then validate
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let settings = Self::from_raw(RawSettings::load(config_path)?)?;
        info!(
            "Settings loaded: database={}, export={} ({})",
            settings.database_to_export,
            settings.export.path.display(),
            settings.export.format
        );
        Ok(settings)
    }

    /// Load from a TOML file only, then validate
    pub fn from_file(path: &Path) -> Result<Self> {
        Self::from_raw(RawSettings::from_file(path)?)
    }

    pub fn database_to_export(&self) -> &str {
        &self.database_to_export
    }

    /// Prefixes stripped from database object names, in configured order
    pub fn database_object_prefixes(&self) -> &[String] {
        &self.database_object_prefixes
    }

    pub fn add_table_name_to_jdl(&self) -> bool {
        self.add_table_name_to_jdl
    }

    pub fn undefined_type_handling(&self) -> UndefinedTypeHandling {
        self.undefined_type_handling
    }

    pub fn ignored_table_names(&self) -> &[String] {
        &self.ignored_table_names
    }

    pub fn export(&self) -> &ExportSettings {
        &self.export
    }

    /// Flattened reserved keywords, possibly empty
    pub fn reserved_keywords(&self) -> &[String] {
        &self.reserved_keywords
    }

    /// Whether a table is excluded from the export (exact match)
    pub fn is_table_ignored(&self, table_name: &str) -> bool {
        self.ignored_table_names.iter().any(|t| t == table_name)
    }

    /// Remove the first configured prefix that `name` starts with
    pub fn strip_object_prefix<'a>(&self, name: &'a str) -> &'a str {
        self.database_object_prefixes
            .iter()
            .find_map(|prefix| name.strip_prefix(prefix.as_str()))
            .unwrap_or(name)
    }

    /// Whether `word` collides with a reserved keyword, ignoring ASCII case
    pub fn is_reserved_keyword(&self, word: &str) -> bool {
        self.reserved_keywords
            .iter()
            .any(|k| k.eq_ignore_ascii_case(word))
    }
}
