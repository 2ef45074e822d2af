//! Resolution of keyword resource locators

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use thiserror::Error;

/// Prefix selecting a resource bundled into the crate
pub const CLASSPATH_PREFIX: &str = "classpath:";

/// Prefix selecting an explicit filesystem path
pub const FILE_PREFIX: &str = "file:";

/// Resources compiled into the crate, addressed as `classpath:<name>`
const BUNDLED: &[(&str, &str)] = &[(
    "reserved_keywords.json",
    include_str!("../../resources/reserved_keywords.json"),
)];

/// Reasons a keyword resource could not be turned into keyword groups
#[derive(Error, Debug)]
pub enum ResourceUnavailable {
    #[error("keyword resource not found: {0}")]
    NotFound(String),

    #[error("failed to read keyword resource {locator}: {source}")]
    Io {
        locator: String,
        #[source]
        source: io::Error,
    },

    #[error("keyword resource {locator} is not a mapping of keyword lists: {source}")]
    Parse {
        locator: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Where a keyword resource lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceLocator {
    /// A resource bundled into the crate
    Bundled(String),
    /// A file on disk
    File(PathBuf),
}

impl ResourceLocator {
    /// Interpret a locator string
    ///
    /// `classpath:name` (leading slashes ignored) selects a bundled resource,
    /// `file:path` and anything else is a filesystem path.
    pub fn parse(locator: &str) -> Self {
        let locator = locator.trim();
        if let Some(name) = locator.strip_prefix(CLASSPATH_PREFIX) {
            ResourceLocator::Bundled(name.trim_start_matches('/').to_string())
        } else if let Some(path) = locator.strip_prefix(FILE_PREFIX) {
            ResourceLocator::File(PathBuf::from(path))
        } else {
            ResourceLocator::File(PathBuf::from(locator))
        }
    }

    /// Open the resource for line-oriented reading
    pub fn open(&self) -> Result<Box<dyn BufRead>, ResourceUnavailable> {
        match self {
            ResourceLocator::Bundled(name) => BUNDLED
                .iter()
                .find(|(bundled, _)| *bundled == name.as_str())
                .map(|(_, content)| Box::new(content.as_bytes()) as Box<dyn BufRead>)
                .ok_or_else(|| ResourceUnavailable::NotFound(self.to_string())),
            ResourceLocator::File(path) => match File::open(path) {
                Ok(file) => Ok(Box::new(BufReader::new(file))),
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    Err(ResourceUnavailable::NotFound(self.to_string()))
                }
                Err(e) => Err(ResourceUnavailable::Io {
                    locator: self.to_string(),
                    source: e,
                }),
            },
        }
    }
}

impl fmt::Display for ResourceLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceLocator::Bundled(name) => write!(f, "{}{}", CLASSPATH_PREFIX, name),
            ResourceLocator::File(path) => write!(f, "{}", path.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_classpath() {
        assert_eq!(
            ResourceLocator::parse("classpath:reserved_keywords.json"),
            ResourceLocator::Bundled("reserved_keywords.json".into())
        );
        assert_eq!(
            ResourceLocator::parse("classpath:/reserved_keywords.json"),
            ResourceLocator::Bundled("reserved_keywords.json".into())
        );
    }

    #[test]
    fn test_parse_file_paths() {
        assert_eq!(
            ResourceLocator::parse("file:/etc/keywords.json"),
            ResourceLocator::File(PathBuf::from("/etc/keywords.json"))
        );
        assert_eq!(
            ResourceLocator::parse("conf/keywords.json"),
            ResourceLocator::File(PathBuf::from("conf/keywords.json"))
        );
    }

    #[test]
    fn test_open_unknown_bundled_resource() {
        let locator = ResourceLocator::parse("classpath:missing.json");
        assert!(matches!(
            locator.open(),
            Err(ResourceUnavailable::NotFound(ref l)) if l == "classpath:missing.json"
        ));
    }

    #[test]
    fn test_open_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let locator = ResourceLocator::File(dir.path().join("nope.json"));
        assert!(matches!(
            locator.open(),
            Err(ResourceUnavailable::NotFound(_))
        ));
    }
}
