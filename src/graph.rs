//! The typed output graph.
//!
//! Nodes are stored per kind in insertion-ordered maps keyed by identifier,
//! so iteration order, and any serialization derived from it, is a pure
//! function of the input. Inserting a node whose identifier is already
//! taken by *different* content is an identity collision and fails hard;
//! re-inserting identical content is a no-op.

use indexmap::IndexMap;
use serde::Serialize;

use crate::entity::{Address, GeometryNode, House, Neighborhood, Parcel, Section, Street};
use crate::error::ResolveError;
use crate::namespace::Iri;

/// The resolved linked-data graph.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Graph {
    /// Canonical addresses by identifier.
    pub addresses: IndexMap<Iri, Address>,
    /// Streets by identifier.
    pub streets: IndexMap<Iri, Street>,
    /// Neighborhoods by identifier.
    pub neighborhoods: IndexMap<Iri, Neighborhood>,
    /// Cadastral sections by identifier.
    pub sections: IndexMap<Iri, Section>,
    /// Cadastral parcels by identifier.
    pub parcels: IndexMap<Iri, Parcel>,
    /// House locations by identifier.
    pub houses: IndexMap<Iri, House>,
    /// Merged geometries by identifier.
    pub geometries: IndexMap<Iri, GeometryNode>,
}

impl Graph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Total node count across all kinds.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.addresses.len()
            + self.streets.len()
            + self.neighborhoods.len()
            + self.sections.len()
            + self.parcels.len()
            + self.houses.len()
            + self.geometries.len()
    }

    /// True if the graph has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.node_count() == 0
    }

    /// Inserts an address node. The resolver's memo guarantees the slot is
    /// free; an occupied slot means two identity tuples minted one IRI.
    pub(crate) fn insert_address(&mut self, address: Address) -> Result<(), ResolveError> {
        if let Some(existing) = self.addresses.get(&address.id) {
            return Err(ResolveError::IdentityCollision {
                iri: address.id.clone(),
                existing: existing.pref_label.clone(),
                incoming: address.pref_label,
            });
        }
        self.addresses.insert(address.id.clone(), address);
        Ok(())
    }

    pub(crate) fn address_mut(&mut self, id: &Iri) -> Option<&mut Address> {
        self.addresses.get_mut(id)
    }

    /// Inserts or revisits a street node.
    pub(crate) fn insert_street(&mut self, street: Street) -> Result<(), ResolveError> {
        match self.streets.get(&street.id) {
            None => {
                self.streets.insert(street.id.clone(), street);
                Ok(())
            }
            Some(existing) if existing.label == street.label => Ok(()),
            Some(existing) => Err(ResolveError::IdentityCollision {
                iri: street.id.clone(),
                existing: existing.label.clone(),
                incoming: street.label,
            }),
        }
    }

    /// Inserts or revisits a neighborhood node.
    pub(crate) fn insert_neighborhood(
        &mut self,
        neighborhood: Neighborhood,
    ) -> Result<(), ResolveError> {
        match self.neighborhoods.get(&neighborhood.id) {
            None => {
                self.neighborhoods.insert(neighborhood.id.clone(), neighborhood);
                Ok(())
            }
            Some(existing) if existing.label == neighborhood.label => Ok(()),
            Some(existing) => Err(ResolveError::IdentityCollision {
                iri: neighborhood.id.clone(),
                existing: existing.label.clone(),
                incoming: neighborhood.label,
            }),
        }
    }

    /// Inserts or revisits a section node.
    pub(crate) fn insert_section(&mut self, section: Section) -> Result<(), ResolveError> {
        match self.sections.get(&section.id) {
            None => {
                self.sections.insert(section.id.clone(), section);
                Ok(())
            }
            Some(existing) if existing.label == section.label => Ok(()),
            Some(existing) => Err(ResolveError::IdentityCollision {
                iri: section.id.clone(),
                existing: existing.label.clone(),
                incoming: section.label,
            }),
        }
    }

    /// Inserts or revisits a parcel node.
    pub(crate) fn insert_parcel(&mut self, parcel: Parcel) -> Result<(), ResolveError> {
        match self.parcels.get(&parcel.id) {
            None => {
                self.parcels.insert(parcel.id.clone(), parcel);
                Ok(())
            }
            Some(existing) if *existing == parcel => Ok(()),
            Some(existing) => Err(ResolveError::IdentityCollision {
                iri: parcel.id.clone(),
                existing: existing.label.clone(),
                incoming: parcel.label,
            }),
        }
    }

    /// Links a house location to an address, creating the house on first
    /// sight. Houses accumulate address links, deduplicated, in link order.
    pub(crate) fn link_house(&mut self, id: Iri, address: Iri) {
        let house = self.houses.entry(id.clone()).or_insert_with(|| House {
            id,
            adres: Vec::new(),
        });
        if !house.adres.contains(&address) {
            house.adres.push(address);
        }
    }

    /// Inserts a geometry node, reusing an existing node for the same
    /// identifier (same point set) rather than overwriting it.
    pub(crate) fn insert_geometry(&mut self, geometry: GeometryNode) {
        self.geometries.entry(geometry.id.clone()).or_insert(geometry);
    }
}
