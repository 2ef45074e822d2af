//! Raw configuration input, as supplied by files and environment variables

use config::{Config, Environment, File, Source};
use serde::Deserialize;
use std::path::Path;

use super::defaults;
use super::settings::ExportSettings;
use crate::error::{ConfigError, Result};

/// Unvalidated configuration values
///
/// Keys are snake_case; the camelCase spellings used by older config files
/// are accepted as aliases.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawSettings {
    /// Database schema to export
    #[serde(default, alias = "databaseToExport")]
    pub database_to_export: String,

    /// Prefixes stripped from database object names
    #[serde(default, alias = "databaseObjectPrefix")]
    pub database_object_prefix: Vec<String>,

    /// Whether table names are written into the JDL (absent means false)
    #[serde(default, alias = "addTableNameJdl")]
    pub add_table_name_jdl: Option<bool>,

    /// Name of the undefined-type handling strategy
    #[serde(default, alias = "undefinedTypeHandling")]
    pub undefined_type_handling: Option<String>,

    /// Tables excluded from the export
    #[serde(default, alias = "ignoredTableNames")]
    pub ignored_table_names: Vec<String>,

    /// Export destination and format
    pub export: ExportSettings,

    /// Locator of the reserved-keyword resource
    #[serde(default = "default_reserved_keywords", alias = "reservedKeywords")]
    pub reserved_keywords: String,

    /// Log level (trace, debug, info, warn, error)
    /// Can be overridden by RUST_LOG env var
    #[serde(default, alias = "logLevel")]
    pub log_level: Option<String>,
}

fn default_reserved_keywords() -> String {
    defaults::RESERVED_KEYWORDS.to_string()
}

impl Default for RawSettings {
    fn default() -> Self {
        Self {
            database_to_export: String::new(),
            database_object_prefix: Vec::new(),
            add_table_name_jdl: None,
            undefined_type_handling: None,
            ignored_table_names: Vec::new(),
            export: ExportSettings::default(),
            reserved_keywords: default_reserved_keywords(),
            log_level: None,
        }
    }
}

impl RawSettings {
    /// Parse raw settings from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Load raw settings from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| {
            ConfigError::ParseError(format!(
                "Failed to parse config file {}: {}",
                path.display(),
                e
            ))
        })
    }

    /// Load raw settings using config-rs (file + environment variables)
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        Self::load_with_env(config_path, environment())
    }

    fn load_with_env(config_path: Option<&Path>, env: Environment) -> Result<Self> {
        // Load from config file if specified, else try default locations
        let file = match config_path {
            Some(path) => File::from(path),
            None => File::with_name(defaults::CONFIG_FILE_NAME).required(false),
        };
        let file_values = Config::builder().add_source(file).build()?.collect()?;

        // File values sit under their canonical keys so the environment can replace them
        let mut builder = Config::builder();
        for (key, value) in file_values {
            builder = builder.set_default(canonical_key(&key), value)?;
        }

        // Override with environment variables (DB2JDL_*)
        builder = builder.add_source(env);

        let raw: RawSettings = builder.build()?.try_deserialize()?;
        Ok(raw)
    }
}

/// camelCase spellings accepted in config files, with their canonical keys
const KEY_ALIASES: &[(&str, &str)] = &[
    ("databaseToExport", "database_to_export"),
    ("databaseObjectPrefix", "database_object_prefix"),
    ("addTableNameJdl", "add_table_name_jdl"),
    ("undefinedTypeHandling", "undefined_type_handling"),
    ("ignoredTableNames", "ignored_table_names"),
    ("reservedKeywords", "reserved_keywords"),
    ("logLevel", "log_level"),
];

fn canonical_key(key: &str) -> &str {
    KEY_ALIASES
        .iter()
        .find(|(alias, _)| *alias == key)
        .map(|(_, canonical)| *canonical)
        .unwrap_or(key)
}

/// Environment source: `DB2JDL_DATABASE_TO_EXPORT`, `DB2JDL_EXPORT__PATH`,
/// comma-separated lists
fn environment() -> Environment {
    Environment::with_prefix(defaults::ENV_PREFIX)
        .prefix_separator("_")
        .separator(defaults::ENV_NESTED_SEPARATOR)
        .list_separator(defaults::ENV_LIST_SEPARATOR)
        .with_list_parse_key("database_object_prefix")
        .with_list_parse_key("ignored_table_names")
        .try_parsing(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn empty_env() -> Environment {
        environment().source(Some(HashMap::new()))
    }

    #[test]
    fn test_from_toml_str() {
        let raw = RawSettings::from_toml_str(
            r#"
            database_to_export = "shop"
            database_object_prefix = ["t_", "v_"]
            undefined_type_handling = "SKIP"
            ignored_table_names = ["flyway_schema_history"]

            [export]
            path = "out/shop.jdl"
            type = "jdl"
            "#,
        )
        .unwrap();

        assert_eq!(raw.database_to_export, "shop");
        assert_eq!(raw.database_object_prefix, vec!["t_", "v_"]);
        assert_eq!(raw.add_table_name_jdl, None);
        assert_eq!(raw.undefined_type_handling.as_deref(), Some("SKIP"));
        assert_eq!(raw.ignored_table_names, vec!["flyway_schema_history"]);
        assert_eq!(raw.export.path(), Path::new("out/shop.jdl"));
        assert_eq!(raw.export.format(), "jdl");
        assert_eq!(raw.reserved_keywords, defaults::RESERVED_KEYWORDS);
    }

    #[test]
    fn test_camel_case_aliases() {
        let raw = RawSettings::from_toml_str(
            r#"
            databaseToExport = "shop"
            databaseObjectPrefix = ["t_"]
            addTableNameJdl = true
            undefinedTypeHandling = "ERROR"
            ignoredTableNames = ["audit"]
            reservedKeywords = "file:keywords.json"

            [export]
            path = "shop.jdl"
            type = "jdl"
            "#,
        )
        .unwrap();

        assert_eq!(raw.database_to_export, "shop");
        assert_eq!(raw.add_table_name_jdl, Some(true));
        assert_eq!(raw.undefined_type_handling.as_deref(), Some("ERROR"));
        assert_eq!(raw.reserved_keywords, "file:keywords.json");
    }

    #[test]
    fn test_export_is_required() {
        let err = RawSettings::from_toml_str(r#"database_to_export = "shop""#).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "database_to_export = \"crm\"\nlog_level = \"debug\"\n[export]\npath = \"crm.jdl\"\ntype = \"jdl\""
        )
        .unwrap();

        let raw = RawSettings::from_file(file.path()).unwrap();
        assert_eq!(raw.database_to_export, "crm");
        assert_eq!(raw.log_level, Some("debug".to_string()));
    }

    #[test]
    fn test_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = RawSettings::from_file(&dir.path().join("db2jdl.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::IoError(_)));
    }

    #[test]
    fn test_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("db2jdl.toml");
        std::fs::write(
            &path,
            "database_to_export = \"crm\"\nadd_table_name_jdl = false\nundefined_type_handling = \"UNSUPPORTED\"\n[export]\npath = \"crm.jdl\"\ntype = \"jdl\"\n",
        )
        .unwrap();

        let raw = RawSettings::load_with_env(Some(&path), empty_env()).unwrap();
        assert_eq!(raw.database_to_export, "crm");
        assert_eq!(raw.add_table_name_jdl, Some(false));
        assert_eq!(raw.undefined_type_handling.as_deref(), Some("UNSUPPORTED"));
        assert_eq!(raw.export.path(), Path::new("crm.jdl"));
    }

    #[test]
    fn test_load_env_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("db2jdl.toml");
        std::fs::write(
            &path,
            "database_to_export = \"crm\"\nundefined_type_handling = \"SKIP\"\n[export]\npath = \"crm.jdl\"\ntype = \"jdl\"\n",
        )
        .unwrap();

        let env = environment().source(Some(HashMap::from([
            ("DB2JDL_DATABASE_TO_EXPORT".to_string(), "billing".to_string()),
            ("DB2JDL_ADD_TABLE_NAME_JDL".to_string(), "true".to_string()),
            ("DB2JDL_IGNORED_TABLE_NAMES".to_string(), "audit,outbox".to_string()),
            ("DB2JDL_EXPORT__PATH".to_string(), "billing.jdl".to_string()),
        ])));

        let raw = RawSettings::load_with_env(Some(&path), env).unwrap();
        assert_eq!(raw.database_to_export, "billing");
        assert_eq!(raw.add_table_name_jdl, Some(true));
        assert_eq!(raw.ignored_table_names, vec!["audit", "outbox"]);
        assert_eq!(raw.export.path(), Path::new("billing.jdl"));
        assert_eq!(raw.export.format(), "jdl");
        assert_eq!(raw.undefined_type_handling.as_deref(), Some("SKIP"));
    }

    #[test]
    fn test_env_overrides_camel_case_file_key() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("db2jdl.toml");
        std::fs::write(
            &path,
            "databaseToExport = \"shop\"\naddTableNameJdl = true\nundefinedTypeHandling = \"SKIP\"\n[export]\npath = \"shop.jdl\"\ntype = \"jdl\"\n",
        )
        .unwrap();

        let env = environment().source(Some(HashMap::from([(
            "DB2JDL_DATABASE_TO_EXPORT".to_string(),
            "billing".to_string(),
        )])));

        let raw = RawSettings::load_with_env(Some(&path), env).unwrap();
        assert_eq!(raw.database_to_export, "billing");
        assert_eq!(raw.add_table_name_jdl, Some(true));
        assert_eq!(raw.undefined_type_handling.as_deref(), Some("SKIP"));
        assert_eq!(raw.export.path(), Path::new("shop.jdl"));
    }

    #[test]
    fn test_canonical_key() {
        assert_eq!(canonical_key("databaseToExport"), "database_to_export");
        assert_eq!(canonical_key("database_to_export"), "database_to_export");
        assert_eq!(canonical_key("export"), "export");
    }
}
