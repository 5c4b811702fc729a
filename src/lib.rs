//! # Concordans - Historical Address Concordance to Linked Data
//!
//! Concordans converts the Amsterdam cadastral/address concordance spanning
//! the census years 1832, 1853, 1876, 1909, and 1943 into a unified,
//! deduplicated linked-data graph. Each physical address across time is
//! merged into one canonical entity with year-specific attributes,
//! aggregated geometry, and temporal bounds.
//!
//! ## Core Concepts
//!
//! - **Canonical label**: per-year grouping key joined from an observation's
//!   populated identifying fields
//! - **Concordance**: the aggregated structure, label -> year -> attributes
//!   plus the distinct location points seen for that pair
//! - **Resolver**: memoized identity minting; at most one entity per
//!   distinct identity tuple, deterministic human-readable IRIs
//! - **Graph**: typed Address, Street, Neighborhood, Section, Parcel,
//!   House, and Geometry nodes with stable relationships
//!
//! ## Usage
//!
//! ```rust,ignore
//! use concordans::{aggregate, NameLinks, PointIndex, RawObservation, Resolver};
//!
//! let rows: Vec<RawObservation> = load_rows()?;
//! let links = NameLinks::new();
//! let points = PointIndex::new();
//!
//! let concordance = aggregate(&rows, &links);
//! let graph = Resolver::new().resolve(&concordance, &points)?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod aggregate;
pub mod entity;
pub mod error;
pub mod geometry;
pub mod graph;
pub mod lookup;
pub mod namespace;
pub mod ntriples;
pub mod pipeline;
pub mod record;
pub mod resolve;
pub mod slug;
pub mod temporal;

// Re-export primary types at crate root for convenience
pub use aggregate::{aggregate, Concordance, NamedLink, YearAttrs, YearEntry};
pub use entity::{Address, GeometryNode, House, Neighborhood, Parcel, Section, Street};
pub use error::{PipelineError, PipelineResult, ResolveError};
pub use geometry::{merge_points, PointLookup};
pub use graph::Graph;
pub use lookup::{NameLinks, PointIndex};
pub use namespace::Iri;
pub use record::{RawObservation, Year};
pub use resolve::Resolver;
pub use slug::slugify;
pub use temporal::TemporalBounds;
