//! IRI namespaces and the [`Iri`] newtype.
//!
//! All minted identifiers live under the HisGIS locatiepunten resolver
//! namespaces; vocabulary constants cover the handful of external terms the
//! graph serializer emits.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Base namespace for the locatiepunten dataset.
pub const LP: &str = "https://resolver.clariah.org/hisgis/lp/";
/// Ontology terms (classes and properties).
pub const LP_ONT: &str = "https://resolver.clariah.org/hisgis/lp/ontology/";
/// Merged geometries.
pub const LP_GEO: &str = "https://resolver.clariah.org/hisgis/lp/geometry/";
/// House locations (one per location point).
pub const LP_PLACE: &str = "https://resolver.clariah.org/hisgis/lp/place/";
/// Canonical addresses.
pub const LP_ADRES: &str = "https://resolver.clariah.org/hisgis/lp/adres/";
/// Minted streets (used when no external link exists).
pub const LP_STRAAT: &str = "https://resolver.clariah.org/hisgis/lp/straat/";
/// Minted neighborhoods.
pub const LP_BUURT: &str = "https://resolver.clariah.org/hisgis/lp/buurt/";
/// Minted parcels.
pub const LP_PERCEEL: &str = "https://resolver.clariah.org/hisgis/lp/perceel/";
/// Minted cadastral sections.
pub const LP_SECTIE: &str = "https://resolver.clariah.org/hisgis/lp/sectie/";

/// `rdf:type`.
pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
/// `rdfs:label`.
pub const RDFS_LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";
/// `skos:prefLabel`.
pub const SKOS_PREF_LABEL: &str = "http://www.w3.org/2004/02/skos/core#prefLabel";
/// `owl:equivalentClass`.
pub const OWL_EQUIVALENT_CLASS: &str = "http://www.w3.org/2002/07/owl#equivalentClass";
/// `xsd:date` datatype.
pub const XSD_DATE: &str = "http://www.w3.org/2001/XMLSchema#date";
/// `xsd:integer` datatype.
pub const XSD_INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";
/// Semanticweb SEM event vocabulary.
pub const SEM: &str = "http://semanticweb.cs.vu.nl/2009/11/sem/";
/// schema.org.
pub const SCHEMA_ORG: &str = "http://schema.org/";
/// GeoSPARQL vocabulary.
pub const GEO: &str = "http://www.opengis.net/ont/geosparql#";
/// Histograph vocabulary.
pub const HG: &str = "http://rdf.histograph.io/";

/// A resolved identifier: either a minted IRI under one of the `LP`
/// namespaces or an external link taken verbatim from the name table.
///
/// `Iri`s are opaque, comparable, and hashable; identifier stability is
/// contractual, so the inner string is never normalized after construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Iri(String);

impl Iri {
    /// Wraps an absolute IRI string.
    #[must_use]
    pub fn new(iri: impl Into<String>) -> Self {
        Self(iri.into())
    }

    /// The IRI as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Iri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Iri {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Iri {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Mints an IRI by appending a local name to a namespace.
#[must_use]
pub fn term(namespace: &str, local: &str) -> Iri {
    Iri::new(format!("{namespace}{local}"))
}
