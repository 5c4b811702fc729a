//! External lookup tables consumed by the pipeline.
//!
//! Two narrow interfaces: [`NameLinks`] maps exact street/neighborhood
//! display names to external identifiers (absent entries fall back to
//! minted slugs), and [`PointIndex`] maps location-point identifiers to
//! well-known-text point geometries (absence there is fatal).

use std::collections::HashMap;
use std::io::Read;

use serde::{Deserialize, Serialize};

/// Exact display name to external-link URI (the `name2adamlink` table).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NameLinks(HashMap<String, String>);

impl NameLinks {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a name → URI mapping.
    pub fn insert(&mut self, name: impl Into<String>, uri: impl Into<String>) {
        self.0.insert(name.into(), uri.into());
    }

    /// Looks up the external URI for an exact display name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Loads the table from a JSON object (`{"name": "uri", ...}`).
    ///
    /// # Errors
    ///
    /// Returns the underlying JSON error on malformed input.
    pub fn from_json_reader(reader: impl Read) -> Result<Self, serde_json::Error> {
        serde_json::from_reader(reader)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Location-point identifier to WKT point (the `point2wkt` table).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PointIndex(HashMap<String, String>);

impl PointIndex {
    /// Creates an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a point → WKT mapping.
    pub fn insert(&mut self, point: impl Into<String>, wkt: impl Into<String>) {
        self.0.insert(point.into(), wkt.into());
    }

    /// Looks up the WKT text for a location point.
    #[must_use]
    pub fn wkt(&self, point: &str) -> Option<&str> {
        self.0.get(point).map(String::as_str)
    }

    /// Loads the index from a JSON object (`{"point": "POINT (x y)", ...}`).
    ///
    /// # Errors
    ///
    /// Returns the underlying JSON error on malformed input.
    pub fn from_json_reader(reader: impl Read) -> Result<Self, serde_json::Error> {
        serde_json::from_reader(reader)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if the index has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
