//! Loading and flattening of grouped reserved-keyword lists

use std::io::{self, BufRead};

use serde_json::{Map, Value};
use tracing::{debug, warn};

use super::locator::{ResourceLocator, ResourceUnavailable};

/// Keyword lists keyed by group name, in document order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordGroups {
    groups: Vec<(String, Vec<String>)>,
}

impl KeywordGroups {
    /// Group names and their keywords, in document order
    pub fn groups(&self) -> &[(String, Vec<String>)] {
        &self.groups
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// All keywords, group by group, keeping the order within each group
    pub fn flatten(self) -> Vec<String> {
        self.groups
            .into_iter()
            .flat_map(|(_, words)| words)
            .collect()
    }
}

/// Read every line and join them with a single space
pub fn join_lines<R: BufRead>(reader: R) -> io::Result<String> {
    let lines = reader.lines().collect::<io::Result<Vec<_>>>()?;
    Ok(lines.join(" "))
}

/// Parse `{ "group": ["word", ...], ... }`
pub fn parse_groups(text: &str) -> Result<KeywordGroups, serde_json::Error> {
    let object: Map<String, Value> = serde_json::from_str(text)?;

    let mut groups = Vec::with_capacity(object.len());
    for (name, words) in object {
        let words: Vec<String> = serde_json::from_value(words)?;
        groups.push((name, words));
    }

    Ok(KeywordGroups { groups })
}

/// Read and parse a keyword resource, reporting why it is unusable
pub fn try_load_groups(locator: &ResourceLocator) -> Result<KeywordGroups, ResourceUnavailable> {
    let reader = locator.open()?;
    let text = join_lines(reader).map_err(|source| ResourceUnavailable::Io {
        locator: locator.to_string(),
        source,
    })?;
    parse_groups(&text).map_err(|source| ResourceUnavailable::Parse {
        locator: locator.to_string(),
        source,
    })
}

/// Load keyword groups, substituting an empty mapping when the resource is unusable
pub fn load_groups(locator: &str) -> KeywordGroups {
    let locator = ResourceLocator::parse(locator);
    match try_load_groups(&locator) {
        Ok(groups) => {
            debug!(
                "Loaded {} keyword groups from {}",
                groups.groups().len(),
                locator
            );
            groups
        }
        Err(ResourceUnavailable::NotFound(locator)) => {
            warn!(
                "Reserved keyword resource {} not found, continuing without reserved keywords",
                locator
            );
            KeywordGroups::default()
        }
        Err(e) => {
            warn!("{}, continuing without reserved keywords", e);
            KeywordGroups::default()
        }
    }
}

/// Load the flattened reserved-keyword list for a locator; never fails
pub fn load_reserved_keywords(locator: &str) -> Vec<String> {
    load_groups(locator).flatten()
}
