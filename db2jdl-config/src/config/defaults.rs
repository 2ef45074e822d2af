//! Default configuration values - single source of truth

/// Default reserved-keyword resource (bundled with the crate)
pub const RESERVED_KEYWORDS: &str = "classpath:reserved_keywords.json";

/// Whether table names are written into the JDL when the flag is absent
pub const ADD_TABLE_NAME_JDL: bool = false;

/// Base name of the optional config file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "db2jdl";

/// Prefix of environment variables overriding file values
pub const ENV_PREFIX: &str = "DB2JDL";

/// Separator for nested keys in environment variables (`DB2JDL_EXPORT__PATH`)
pub const ENV_NESTED_SEPARATOR: &str = "__";

/// Separator for list values in environment variables
pub const ENV_LIST_SEPARATOR: &str = ",";
