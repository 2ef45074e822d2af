//! Strategy for database column types that have no JDL mapping

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::ConfigError;

/// How the export pipeline treats a column whose type cannot be mapped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum UndefinedTypeHandling {
    /// Keep the column with a placeholder type
    #[serde(rename = "UNSUPPORTED")]
    Unsupported,
    /// Drop the column from the exported entity
    #[serde(rename = "SKIP")]
    Skip,
    /// Abort the export
    #[serde(rename = "ERROR")]
    Error,
}

impl UndefinedTypeHandling {
    /// Every declared member, in declaration order
    pub const ALL: [UndefinedTypeHandling; 3] = [
        UndefinedTypeHandling::Unsupported,
        UndefinedTypeHandling::Skip,
        UndefinedTypeHandling::Error,
    ];

    /// The exact name accepted in configuration input
    pub fn name(self) -> &'static str {
        match self {
            UndefinedTypeHandling::Unsupported => "UNSUPPORTED",
            UndefinedTypeHandling::Skip => "SKIP",
            UndefinedTypeHandling::Error => "ERROR",
        }
    }

    fn expected_names() -> String {
        Self::ALL
            .iter()
            .map(|h| h.name())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Resolve an optional raw value; a missing value is as invalid as an unknown one
    pub(crate) fn from_raw(raw: Option<&str>) -> Result<Self, ConfigError> {
        match raw {
            Some(name) => name.parse(),
            None => Err(ConfigError::InvalidConfiguration {
                key: "undefined_type_handling",
                value: "null".to_string(),
                expected: Self::expected_names(),
            }),
        }
    }
}

impl FromStr for UndefinedTypeHandling {
    type Err = ConfigError;

    /// Case-sensitive match against the declared names
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|h| h.name() == s)
            .ok_or_else(|| ConfigError::InvalidConfiguration {
                key: "undefined_type_handling",
                value: s.to_string(),
                expected: Self::expected_names(),
            })
    }
}

impl fmt::Display for UndefinedTypeHandling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_declared_names() {
        for handling in UndefinedTypeHandling::ALL {
            let parsed: UndefinedTypeHandling = handling.name().parse().unwrap();
            assert_eq!(parsed, handling);
        }
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        for name in ["skip", "Skip", "error", "Unsupported", " SKIP", "SKIP "] {
            let err = name.parse::<UndefinedTypeHandling>().unwrap_err();
            assert!(
                matches!(err, ConfigError::InvalidConfiguration { .. }),
                "{name:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_parse_empty_and_null() {
        assert!(matches!(
            "".parse::<UndefinedTypeHandling>(),
            Err(ConfigError::InvalidConfiguration { .. })
        ));
        assert!(matches!(
            UndefinedTypeHandling::from_raw(None),
            Err(ConfigError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_error_lists_expected_names() {
        let err = "IGNORE".parse::<UndefinedTypeHandling>().unwrap_err();
        let message = err.to_string();
        assert!(message.contains("IGNORE"));
        assert!(message.contains("UNSUPPORTED, SKIP, ERROR"));
    }

    #[test]
    fn test_display_matches_name() {
        assert_eq!(UndefinedTypeHandling::Skip.to_string(), "SKIP");
    }
}
