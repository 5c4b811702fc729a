//! Error types for the concordance pipeline.
//!
//! All errors are strongly typed using thiserror. Aggregation itself cannot
//! fail (missing fields simply contribute nothing); everything fatal lives
//! in resolution, plus an adapter-level wrapper for I/O and JSON.

use thiserror::Error;

use crate::namespace::Iri;

/// Fatal failures during entity resolution.
///
/// Non-fatal conditions (a row missing a year's primary field, an absent
/// optional attribute) never surface here; they are absorbed by
/// construction. Anything that does surface aborts the run.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// A location point referenced by an address has no WKT entry.
    #[error("no WKT entry for location point '{point}' (address label '{label}')")]
    MissingGeometryLookup {
        /// The offending location-point identifier.
        point: String,
        /// The canonical label of the affected address.
        label: String,
    },

    /// A location point's WKT entry could not be parsed.
    #[error("location point '{point}' has malformed WKT: {reason}")]
    InvalidWkt {
        /// The offending location-point identifier.
        point: String,
        /// Parser diagnostic.
        reason: String,
    },

    /// An address label reached resolution without any location points.
    ///
    /// Cannot happen for a concordance built by [`crate::aggregate`], which
    /// records at least the folding row's own point; guards hand-built input.
    #[error("address label '{label}' has no location points")]
    EmptyGeometry {
        /// The canonical label of the affected address.
        label: String,
    },

    /// Two distinct identity tuples minted the same identifier.
    ///
    /// This is an invariant violation, never a merge: silently merging
    /// distinct logical entities would corrupt the dataset.
    #[error("identity collision on <{iri}>: '{existing}' and '{incoming}' resolve to the same identifier")]
    IdentityCollision {
        /// The contested identifier.
        iri: Iri,
        /// Identity already holding the identifier.
        existing: String,
        /// Identity that attempted to mint it again.
        incoming: String,
    },
}

/// Top-level error type for whole-pipeline runs (adapters included).
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Entity resolution failed.
    #[error("resolution failed: {0}")]
    Resolve(#[from] ResolveError),

    /// Reading or writing a file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A JSON adapter failed to parse or serialize.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;
