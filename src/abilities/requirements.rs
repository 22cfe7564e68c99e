//! Attribute requirements
//!
//! Requirement tokens come from static tables. Each token is an OR-group
//! written with slashes (`Slashing/Piercing`); every group must be met.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// AND of OR-groups
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Requirements {
    groups: Vec<Vec<String>>,
}

impl Requirements {
    /// Parse raw tokens. A token with no usable alternative is kept as one
    /// literal requirement so it can only match exactly.
    pub fn parse<S: AsRef<str>>(tokens: &[S]) -> Self {
        let groups = tokens
            .iter()
            .map(|token| parse_group(token.as_ref()))
            .collect();
        Self { groups }
    }

    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn groups(&self) -> &[Vec<String>] {
        &self.groups
    }

    pub fn is_met_by(&self, attributes: &BTreeSet<String>) -> bool {
        self.groups
            .iter()
            .all(|group| group.iter().any(|attribute| attributes.contains(attribute)))
    }

    /// Back to slash tokens
    pub fn tokens(&self) -> Vec<String> {
        self.groups.iter().map(|group| group.join("/")).collect()
    }
}

fn parse_group(token: &str) -> Vec<String> {
    let alternatives: Vec<String> = token
        .split('/')
        .map(str::trim)
        .filter(|alternative| !alternative.is_empty())
        .map(String::from)
        .collect();

    if alternatives.is_empty() {
        log::warn!("Malformed attribute requirement {:?}, treating as literal", token);
        return vec![token.to_string()];
    }
    alternatives
}
