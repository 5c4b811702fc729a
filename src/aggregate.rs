//! The record aggregator: rows in, [`Concordance`] out.
//!
//! Each input row is folded into a nested structure keyed by canonical
//! label and year. The canonical label is the single-space join of the
//! year's populated identifying fields in fixed order; two rows group
//! together for a year iff those fields are identical after
//! stringification. The literal tokens `BUURT` (1853) and `SECTIE` (1832)
//! are prepended so a neighborhood-only label can never collide with a
//! street label that happens to share its text.

use std::collections::BTreeMap;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::lookup::NameLinks;
use crate::record::{RawObservation, Year};

/// A display name plus its optional external link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedLink {
    /// Display name as it appears in the source data.
    pub naam: String,
    /// External-link URI from the name table, when an exact-name hit exists.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub adamlink: Option<String>,
}

impl NamedLink {
    fn resolve(naam: &str, links: &NameLinks) -> Self {
        Self {
            naam: naam.to_string(),
            adamlink: links.get(naam).map(str::to_string),
        }
    }
}

/// Street-year attributes (1943 and 1909).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StraatAttrs {
    /// Street name and optional external link.
    pub straat: NamedLink,
    /// House number (free text in 1943, stringified integer in 1909).
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub huisnummer: Option<String>,
    /// House-number suffix.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub huisnummertoevoeging: Option<String>,
}

/// 1876 attributes: a street observed within a neighborhood.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuurtStraatAttrs {
    /// Street name and optional external link.
    pub straat: NamedLink,
    /// Neighborhood name and optional external link, when present.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub buurt: Option<NamedLink>,
    /// House number.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub huisnummer: Option<String>,
    /// House-number suffix.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub huisnummertoevoeging: Option<String>,
}

/// 1853 attributes: neighborhood with neighborhood number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuurtAttrs {
    /// Neighborhood name and optional external link.
    pub buurt: NamedLink,
    /// Neighborhood number.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub buurtnummer: Option<i64>,
    /// Neighborhood-number suffix.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub buurtnummertoevoeging: Option<String>,
}

/// 1832 attributes: cadastral section and parcel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerceelAttrs {
    /// Section code.
    pub sectie: String,
    /// Parcel number.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub perceelnummer: Option<i64>,
    /// Parcel-number suffix.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub perceelnummertoevoeging: Option<String>,
}

/// Attributes recorded for one (label, year) pair.
///
/// One variant per historical year, carrying only that year's valid
/// fields; omitted fields are typed `Option`s, never missing keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum YearAttrs {
    /// 1832 section/parcel attributes.
    #[serde(rename = "1832")]
    Y1832(PerceelAttrs),
    /// 1853 neighborhood attributes.
    #[serde(rename = "1853")]
    Y1853(BuurtAttrs),
    /// 1876 street-in-neighborhood attributes.
    #[serde(rename = "1876")]
    Y1876(BuurtStraatAttrs),
    /// 1909 street attributes.
    #[serde(rename = "1909")]
    Y1909(StraatAttrs),
    /// 1943 street attributes.
    #[serde(rename = "1943")]
    Y1943(StraatAttrs),
}

/// One year's slot under a canonical label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearEntry {
    /// Scalar attributes for this (label, year) pair.
    #[serde(flatten)]
    pub attrs: YearAttrs,
    /// Distinct location points observed for this pair, in first-seen order.
    pub geometry: Vec<String>,
}

/// The aggregated address record: label → year → attributes.
///
/// Insertion-ordered by label (first observation wins the position), so
/// iteration, and everything downstream of it, is deterministic for a
/// given row order. Serializable as an intermediate artifact.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Concordance {
    records: IndexMap<String, BTreeMap<Year, YearEntry>>,
}

impl Concordance {
    /// Creates an empty concordance.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct canonical labels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True if no labels have been folded in.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The year slots for a canonical label.
    #[must_use]
    pub fn get(&self, label: &str) -> Option<&BTreeMap<Year, YearEntry>> {
        self.records.get(label)
    }

    /// Iterates labels in first-seen order, years ascending within each.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeMap<Year, YearEntry>)> {
        self.records.iter().map(|(label, years)| (label.as_str(), years))
    }

    /// Sets the attributes for (label, year) and records the location point.
    ///
    /// Attributes overwrite any previous value for the pair (within one
    /// year a label is populated identically by every contributing row, so
    /// last-write-wins is a no-op in practice). The point is appended only
    /// if not already present, preserving first-seen order.
    pub fn fold(&mut self, label: String, year: Year, attrs: YearAttrs, locatiepunt: &str) {
        let years = self.records.entry(label).or_default();
        match years.entry(year) {
            std::collections::btree_map::Entry::Vacant(slot) => {
                slot.insert(YearEntry {
                    attrs,
                    geometry: vec![locatiepunt.to_string()],
                });
            }
            std::collections::btree_map::Entry::Occupied(mut slot) => {
                let entry = slot.get_mut();
                entry.attrs = attrs;
                if !entry.geometry.iter().any(|p| p == locatiepunt) {
                    entry.geometry.push(locatiepunt.to_string());
                }
            }
        }
    }
}

/// Joins the present, non-empty parts with single spaces.
fn join_present(parts: &[Option<String>]) -> String {
    parts
        .iter()
        .flatten()
        .filter(|s| !s.is_empty())
        .cloned()
        .collect::<Vec<_>>()
        .join(" ")
}

/// A primary field counts only when present and non-empty.
fn primary(field: Option<&String>) -> Option<&str> {
    field.map(String::as_str).filter(|s| !s.is_empty())
}

/// Folds raw observations into a [`Concordance`].
///
/// For each row and each year: skip the year when its primary identifying
/// field is absent (street for 1943/1909/1876, neighborhood for 1853,
/// section for 1832); otherwise build the canonical label, resolve
/// external links for names, and record the row's location point. No I/O,
/// no failures: a missing field silently contributes nothing.
pub fn aggregate<'a>(
    rows: impl IntoIterator<Item = &'a RawObservation>,
    links: &NameLinks,
) -> Concordance {
    let mut concordance = Concordance::new();
    for row in rows {
        fold_row(&mut concordance, row, links);
    }
    concordance
}

fn fold_row(concordance: &mut Concordance, row: &RawObservation, links: &NameLinks) {
    let point = row.locatiepunt.as_str();

    if let Some(straat) = primary(row.straat_1943.as_ref()) {
        let label = join_present(&[
            Some(straat.to_string()),
            row.huisnummer_1943.clone(),
            row.huisnummertoevoeging_1943.clone(),
        ]);
        let attrs = YearAttrs::Y1943(StraatAttrs {
            straat: NamedLink::resolve(straat, links),
            huisnummer: row.huisnummer_1943.clone(),
            huisnummertoevoeging: row.huisnummertoevoeging_1943.clone(),
        });
        concordance.fold(label, Year::Y1943, attrs, point);
    }

    if let Some(straat) = primary(row.straat_1909.as_ref()) {
        let label = join_present(&[
            Some(straat.to_string()),
            row.huisnummer_1909.map(|n| n.to_string()),
            row.huisnummertoevoeging_1909.clone(),
        ]);
        let attrs = YearAttrs::Y1909(StraatAttrs {
            straat: NamedLink::resolve(straat, links),
            huisnummer: row.huisnummer_1909.map(|n| n.to_string()),
            huisnummertoevoeging: row.huisnummertoevoeging_1909.clone(),
        });
        concordance.fold(label, Year::Y1909, attrs, point);
    }

    if let Some(straat) = primary(row.straat_1876.as_ref()) {
        let label = join_present(&[
            row.buurt_1876.clone(),
            Some(straat.to_string()),
            row.huisnummer_1876.map(|n| n.to_string()),
            row.huisnummertoevoeging_1876.clone(),
        ]);
        let attrs = YearAttrs::Y1876(BuurtStraatAttrs {
            straat: NamedLink::resolve(straat, links),
            buurt: primary(row.buurt_1876.as_ref()).map(|b| NamedLink::resolve(b, links)),
            huisnummer: row.huisnummer_1876.map(|n| n.to_string()),
            huisnummertoevoeging: row.huisnummertoevoeging_1876.clone(),
        });
        concordance.fold(label, Year::Y1876, attrs, point);
    }

    if let Some(buurt) = primary(row.buurt_1853.as_ref()) {
        let label = join_present(&[
            Some("BUURT".to_string()),
            Some(buurt.to_string()),
            row.buurtnummer_1853.map(|n| n.to_string()),
            row.buurtnummertoevoeging_1853.clone(),
        ]);
        let attrs = YearAttrs::Y1853(BuurtAttrs {
            buurt: NamedLink::resolve(buurt, links),
            buurtnummer: row.buurtnummer_1853,
            buurtnummertoevoeging: row.buurtnummertoevoeging_1853.clone(),
        });
        concordance.fold(label, Year::Y1853, attrs, point);
    }

    if let Some(sectie) = primary(row.sectie_1832.as_ref()) {
        let label = join_present(&[
            Some("SECTIE".to_string()),
            Some(sectie.to_string()),
            row.perceelnummer_1832.map(|n| n.to_string()),
            row.perceelnummertoevoeging_1832.clone(),
        ]);
        let attrs = YearAttrs::Y1832(PerceelAttrs {
            sectie: sectie.to_string(),
            perceelnummer: row.perceelnummer_1832,
            perceelnummertoevoeging: row.perceelnummertoevoeging_1832.clone(),
        });
        concordance.fold(label, Year::Y1832, attrs, point);
    }
}
