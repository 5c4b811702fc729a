//! End-to-end pipeline composition and artifact persistence.
//!
//! Two components, data flowing strictly left to right: rows are folded
//! into a [`Concordance`], the concordance resolves into a [`Graph`]. The
//! concordance is independently persistable as a JSON intermediate.

use std::io::{Read, Write};

use crate::aggregate::{aggregate, Concordance};
use crate::error::PipelineResult;
use crate::graph::Graph;
use crate::lookup::{NameLinks, PointIndex};
use crate::record::RawObservation;
use crate::resolve::Resolver;

/// Runs the full pipeline: aggregate, then resolve.
///
/// The resolver (and its identity memo) lives exactly as long as the call,
/// so repeated runs over the same input are independent and identical.
///
/// # Errors
///
/// Fails on the first fatal resolution error (missing or malformed point
/// lookup, identity collision); no partial graph is returned.
pub fn run(
    rows: &[RawObservation],
    links: &NameLinks,
    points: &PointIndex,
) -> PipelineResult<Graph> {
    let concordance = aggregate(rows, links);
    let graph = Resolver::new().resolve(&concordance, points)?;
    Ok(graph)
}

/// Loads raw observations from a JSON array.
///
/// # Errors
///
/// Returns a JSON error on malformed input.
pub fn read_rows(reader: impl Read) -> PipelineResult<Vec<RawObservation>> {
    Ok(serde_json::from_reader(reader)?)
}

/// Persists the aggregated concordance as pretty-printed JSON.
///
/// # Errors
///
/// Returns a JSON or I/O error from the underlying writer.
pub fn write_concordance(writer: impl Write, concordance: &Concordance) -> PipelineResult<()> {
    Ok(serde_json::to_writer_pretty(writer, concordance)?)
}

/// Loads a previously persisted concordance.
///
/// # Errors
///
/// Returns a JSON error on malformed input.
pub fn read_concordance(reader: impl Read) -> PipelineResult<Concordance> {
    Ok(serde_json::from_reader(reader)?)
}
