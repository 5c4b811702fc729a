//! Entity resolution and graph building.
//!
//! The [`Resolver`] owns the identity memo for exactly one pass: a mapping
//! from identity tuple to minted address identifier, populated at most once
//! per distinct tuple. It is an explicit service object, never a global, so
//! independent runs cannot leak state into each other. Re-running over the
//! same concordance yields an identical graph.

use std::collections::{BTreeMap, HashMap};

use crate::aggregate::{Concordance, NamedLink, PerceelAttrs, YearAttrs, YearEntry};
use crate::entity::{Address, GeometryNode, Neighborhood, Parcel, Section, Street};
use crate::error::ResolveError;
use crate::geometry::{merge_points, PointLookup};
use crate::graph::Graph;
use crate::namespace::{term, Iri, LP_ADRES, LP_BUURT, LP_GEO, LP_PERCEEL, LP_PLACE, LP_SECTIE, LP_STRAAT};
use crate::record::Year;
use crate::slug::{mint_slug, slugify, strip_display_prefix, strip_slug_prefix};
use crate::temporal::{span_label, TemporalBounds};

/// The identity tuple of an address: matching tuples must resolve to the
/// same entity, differing tuples must not.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct AddressKey {
    /// Slugified canonical label, prefix tokens included.
    label: String,
    /// Ascending year set.
    years: Vec<Year>,
    /// Union of location points across years, in aggregation order.
    points: Vec<String>,
}

/// Memoized identity resolution over one concordance.
#[derive(Debug, Default)]
pub struct Resolver {
    memo: HashMap<AddressKey, Iri>,
    minted: HashMap<Iri, AddressKey>,
}

impl Resolver {
    /// Creates a resolver with an empty memo.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves the concordance into a typed graph.
    ///
    /// # Errors
    ///
    /// Fails on the first missing or malformed point-table entry and on
    /// any identity collision; partial output is never returned.
    pub fn resolve(
        &mut self,
        concordance: &Concordance,
        points: &impl PointLookup,
    ) -> Result<Graph, ResolveError> {
        let mut graph = Graph::new();
        for (label, years_map) in concordance.iter() {
            self.resolve_label(label, years_map, points, &mut graph)?;
        }
        Ok(graph)
    }

    fn resolve_label(
        &mut self,
        label: &str,
        years_map: &BTreeMap<Year, YearEntry>,
        points: &impl PointLookup,
        graph: &mut Graph,
    ) -> Result<(), ResolveError> {
        let years: Vec<Year> = years_map.keys().copied().collect();
        let (Some(&min_year), Some(&max_year)) = (years.first(), years.last()) else {
            // A label cannot exist without at least one year slot
            return Ok(());
        };

        // Union of per-year point lists, ascending year order, first seen wins
        let mut all_points: Vec<String> = Vec::new();
        for entry in years_map.values() {
            for point in &entry.geometry {
                if !all_points.contains(point) {
                    all_points.push(point.clone());
                }
            }
        }

        let wkt = merge_points(&all_points, points, label)?;

        let address_iri =
            self.address_iri(label, &years, min_year, max_year, &all_points, graph)?;

        for point in &all_points {
            graph.link_house(term(LP_PLACE, point), address_iri.clone());
        }

        let mut sorted_points = all_points.clone();
        sorted_points.sort();
        let geometry_iri = term(LP_GEO, &sorted_points.join("-"));
        graph.insert_geometry(GeometryNode {
            id: geometry_iri.clone(),
            wkt,
            points: all_points,
        });
        if let Some(address) = graph.address_mut(&address_iri) {
            address.geometry = Some(geometry_iri);
        }

        for entry in years_map.values() {
            Self::project_year(&entry.attrs, &address_iri, graph)?;
        }
        Ok(())
    }

    /// Returns the memoized address identifier for the identity tuple,
    /// minting the entity on first sight. The memo is the sole
    /// deduplication mechanism.
    fn address_iri(
        &mut self,
        label: &str,
        years: &[Year],
        min_year: Year,
        max_year: Year,
        all_points: &[String],
        graph: &mut Graph,
    ) -> Result<Iri, ResolveError> {
        let key = AddressKey {
            label: slugify(label),
            years: years.to_vec(),
            points: all_points.to_vec(),
        };
        if let Some(iri) = self.memo.get(&key) {
            return Ok(iri.clone());
        }

        let year_suffix = years
            .iter()
            .map(Year::to_string)
            .collect::<Vec<_>>()
            .join("-");
        let local = format!("{}-{year_suffix}", strip_slug_prefix(&key.label));
        let iri = term(LP_ADRES, &local);

        if let Some(holder) = self.minted.get(&iri) {
            // Same IRI from a different tuple: refuse to merge
            return Err(ResolveError::IdentityCollision {
                iri,
                existing: holder.label.clone(),
                incoming: key.label,
            });
        }

        let display = strip_display_prefix(label);
        graph.insert_address(Address {
            id: iri.clone(),
            label: span_label(&display, min_year, max_year),
            pref_label: display,
            bounds: TemporalBounds::from_span(min_year, max_year),
            straat: None,
            huisnummer: None,
            buurt: None,
            buurtnummer: None,
            perceel: None,
            geometry: None,
        })?;

        self.minted.insert(iri.clone(), key.clone());
        self.memo.insert(key, iri.clone());
        Ok(iri)
    }

    /// Projects one year's attributes onto the address and emits the
    /// related entities. Later years overwrite earlier ones (ascending
    /// iteration order makes the overwrite deterministic).
    fn project_year(
        attrs: &YearAttrs,
        address_iri: &Iri,
        graph: &mut Graph,
    ) -> Result<(), ResolveError> {
        match attrs {
            YearAttrs::Y1943(a) | YearAttrs::Y1909(a) => {
                Self::project_street(
                    &a.straat,
                    a.huisnummer.as_deref(),
                    a.huisnummertoevoeging.as_deref(),
                    address_iri,
                    graph,
                )?;
            }
            YearAttrs::Y1876(a) => {
                Self::project_street(
                    &a.straat,
                    a.huisnummer.as_deref(),
                    a.huisnummertoevoeging.as_deref(),
                    address_iri,
                    graph,
                )?;
                if let Some(buurt) = &a.buurt {
                    Self::project_neighborhood(buurt, address_iri, graph)?;
                }
            }
            YearAttrs::Y1853(a) => {
                Self::project_neighborhood(&a.buurt, address_iri, graph)?;
                if let Some(address) = graph.address_mut(address_iri) {
                    if let Some(nummer) = a.buurtnummer {
                        address.buurtnummer = Some(nummer.to_string());
                    }
                    // Observed source behavior: the suffix replaces the number
                    if let Some(toevoeging) = &a.buurtnummertoevoeging {
                        address.buurtnummer = Some(toevoeging.clone());
                    }
                }
            }
            YearAttrs::Y1832(a) => {
                Self::project_parcel(a, address_iri, graph)?;
            }
        }
        Ok(())
    }

    fn project_street(
        straat: &NamedLink,
        huisnummer: Option<&str>,
        toevoeging: Option<&str>,
        address_iri: &Iri,
        graph: &mut Graph,
    ) -> Result<(), ResolveError> {
        // Two-tier resolution: exact external link first, minted slug otherwise
        let street_iri = match &straat.adamlink {
            Some(uri) => Iri::new(uri.clone()),
            None => term(LP_STRAAT, &slugify(&straat.naam)),
        };
        graph.insert_street(Street {
            id: street_iri.clone(),
            label: straat.naam.clone(),
        })?;

        if let Some(address) = graph.address_mut(address_iri) {
            address.straat = Some(street_iri);
            if let Some(nummer) = huisnummer {
                address.huisnummer = Some(nummer.to_string());
            }
            // Observed source behavior: the suffix replaces the number
            if let Some(toevoeging) = toevoeging {
                address.huisnummer = Some(toevoeging.to_string());
            }
        }
        Ok(())
    }

    fn project_neighborhood(
        buurt: &NamedLink,
        address_iri: &Iri,
        graph: &mut Graph,
    ) -> Result<(), ResolveError> {
        let buurt_iri = match &buurt.adamlink {
            Some(uri) => Iri::new(uri.clone()),
            None => term(LP_BUURT, &slugify(&buurt.naam)),
        };
        graph.insert_neighborhood(Neighborhood {
            id: buurt_iri.clone(),
            label: buurt.naam.clone(),
        })?;

        if let Some(address) = graph.address_mut(address_iri) {
            address.buurt = Some(buurt_iri);
        }
        Ok(())
    }

    fn project_parcel(
        attrs: &PerceelAttrs,
        address_iri: &Iri,
        graph: &mut Graph,
    ) -> Result<(), ResolveError> {
        let section_iri = term(LP_SECTIE, &slugify(&attrs.sectie));
        graph.insert_section(Section {
            id: section_iri.clone(),
            label: attrs.sectie.clone(),
        })?;

        let nummer = attrs.perceelnummer.map(|n| n.to_string());
        let parts: Vec<&str> = [
            Some(attrs.sectie.as_str()),
            nummer.as_deref(),
            attrs.perceelnummertoevoeging.as_deref(),
        ]
        .into_iter()
        .flatten()
        .collect();

        let parcel_iri = term(LP_PERCEEL, &mint_slug(parts.iter().copied()));
        graph.insert_parcel(Parcel {
            id: parcel_iri.clone(),
            label: parts.join(" "),
            sectie: section_iri,
            perceelnummer: attrs.perceelnummer,
            perceelnummertoevoeging: attrs.perceelnummertoevoeging.clone(),
        })?;

        if let Some(address) = graph.address_mut(address_iri) {
            address.perceel = Some(parcel_iri);
        }
        Ok(())
    }
}
