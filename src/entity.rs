//! Typed graph nodes.
//!
//! Every node carries its deterministic identifier and a human-readable
//! label; relationships are stored as [`Iri`] references, never embedded
//! nodes, so the relationship shape of the graph is explicit.

use serde::{Deserialize, Serialize};

use crate::namespace::Iri;
use crate::temporal::TemporalBounds;

/// A canonical address: one physical address merged across census years.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    /// Minted identifier (slug plus the hyphen-joined year set).
    pub id: Iri,
    /// Display label with the year span, e.g. `"Kalverstraat 10 (1876-1943)"`.
    pub label: String,
    /// Preferred label without the span, prefix tokens stripped.
    pub pref_label: String,
    /// Coarse lifespan derived from the aggregated year set.
    pub bounds: TemporalBounds,

    /// Street reference (1943/1909/1876 projection, last year wins).
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub straat: Option<Iri>,
    /// House number; a present suffix overwrites it (observed source behavior).
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub huisnummer: Option<String>,
    /// Neighborhood reference (1876/1853 projection).
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub buurt: Option<Iri>,
    /// Neighborhood number (1853 only); suffix overwrites, as above.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub buurtnummer: Option<String>,
    /// Parcel reference (1832 projection).
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub perceel: Option<Iri>,
    /// The merged geometry owned by this address.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub geometry: Option<Iri>,
}

/// A street, minted or externally linked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Street {
    /// External-link URI when the name table has an exact hit, else minted.
    pub id: Iri,
    /// Street display name.
    pub label: String,
}

/// A neighborhood, minted or externally linked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Neighborhood {
    /// External-link URI when the name table has an exact hit, else minted.
    pub id: Iri,
    /// Neighborhood display name.
    pub label: String,
}

/// An 1832 cadastral section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Minted identifier (slug of the section code).
    pub id: Iri,
    /// Section code.
    pub label: String,
}

/// An 1832 cadastral parcel within a section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parcel {
    /// Minted identifier (slug of section, number, and suffix).
    pub id: Iri,
    /// Space-joined label of the present parts.
    pub label: String,
    /// The section this parcel belongs to.
    pub sectie: Iri,
    /// Parcel number.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub perceelnummer: Option<i64>,
    /// Parcel-number suffix.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub perceelnummertoevoeging: Option<String>,
}

/// A house location: one node per location point.
///
/// Houses are shared: several addresses may be backed by the same point,
/// and an address may be backed by several points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct House {
    /// Identifier minted from the location-point id under the place namespace.
    pub id: Iri,
    /// Addresses this house belongs to, in link order, deduplicated.
    pub adres: Vec<Iri>,
}

/// The merged geometry backing one address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeometryNode {
    /// Identifier minted from the hyphen-joined sorted point list.
    pub id: Iri,
    /// WKT text: a single `POINT` or a `MULTIPOINT` aggregate.
    pub wkt: String,
    /// The backing location points, in aggregation order.
    pub points: Vec<String>,
}
