//! Raw inputs: plays, the play catalog, and customer invoices.
//!
//! Field names follow the JSON the box office exports (`playID`, `type`), but
//! parsing itself belongs to the caller.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use playbill_core::{StatementError, StatementResult};

/// A play in the repertoire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Play {
    pub name: String,
    /// Open-ended genre identifier; pricing recognizes a fixed subset.
    #[serde(rename = "type")]
    pub genre: String,
}

impl Play {
    pub fn new(name: impl Into<String>, genre: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            genre: genre.into(),
        }
    }
}

/// Play id -> play lookup. Owned by the caller; the pipeline only reads it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayCatalog(BTreeMap<String, Play>);

impl PlayCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_play(mut self, play_id: impl Into<String>, play: Play) -> Self {
        self.insert(play_id, play);
        self
    }

    pub fn insert(&mut self, play_id: impl Into<String>, play: Play) {
        self.0.insert(play_id.into(), play);
    }

    pub fn get(&self, play_id: &str) -> Option<&Play> {
        self.0.get(play_id)
    }

    /// Resolve a play id, failing with `MissingPlay` when it is absent.
    pub fn resolve(&self, play_id: &str) -> StatementResult<&Play> {
        self.get(play_id)
            .ok_or_else(|| StatementError::missing_play(play_id))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Play)> {
        self.0.iter().map(|(id, play)| (id.as_str(), play))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, Play)> for PlayCatalog {
    fn from_iter<I: IntoIterator<Item = (String, Play)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// One performance on an invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Performance {
    #[serde(rename = "playID")]
    pub play_id: String,
    pub audience: u32,
}

impl Performance {
    pub fn new(play_id: impl Into<String>, audience: u32) -> Self {
        Self {
            play_id: play_id.into(),
            audience,
        }
    }
}

/// A customer's invoice. Performance order is preserved through rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    pub customer: String,
    pub performances: Vec<Performance>,
}

impl Invoice {
    pub fn new(customer: impl Into<String>, performances: Vec<Performance>) -> Self {
        Self {
            customer: customer.into(),
            performances,
        }
    }
}
