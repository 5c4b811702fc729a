//! N-Triples serialization of the resolved graph.
//!
//! Line-based, append-only output: one triple per line, literals escaped
//! per the N-Triples grammar. The serializer walks the graph's
//! insertion-ordered maps, so the byte output is a pure function of the
//! input data.

use std::io::{self, Write};

use crate::entity::{Address, GeometryNode, House, Parcel};
use crate::graph::Graph;
use crate::namespace::{
    Iri, GEO, HG, LP_ONT, OWL_EQUIVALENT_CLASS, RDFS_LABEL, RDF_TYPE, SCHEMA_ORG, SEM,
    SKOS_PREF_LABEL, XSD_DATE, XSD_INTEGER,
};

/// Writes the whole graph as N-Triples.
///
/// # Errors
///
/// Propagates any I/O error from the underlying writer.
pub fn write_graph<W: Write>(writer: &mut W, graph: &Graph) -> io::Result<()> {
    write_ontology(writer)?;

    for address in graph.addresses.values() {
        write_address(writer, address)?;
    }
    for street in graph.streets.values() {
        write_typed_labeled(writer, &street.id, "Straat", &street.label)?;
    }
    for neighborhood in graph.neighborhoods.values() {
        write_typed_labeled(writer, &neighborhood.id, "Buurt", &neighborhood.label)?;
    }
    for section in graph.sections.values() {
        write_typed_labeled(writer, &section.id, "Sectie", &section.label)?;
    }
    for parcel in graph.parcels.values() {
        write_parcel(writer, parcel)?;
    }
    for house in graph.houses.values() {
        write_house(writer, house)?;
    }
    for geometry in graph.geometries.values() {
        write_geometry(writer, geometry)?;
    }
    Ok(())
}

/// Fixed alignment triples tying the local ontology to external vocabularies.
fn write_ontology<W: Write>(writer: &mut W) -> io::Result<()> {
    triple_iri(
        writer,
        &format!("{LP_ONT}Adres"),
        OWL_EQUIVALENT_CLASS,
        &format!("{SCHEMA_ORG}PostalAddress"),
    )?;
    triple_iri(
        writer,
        &format!("{LP_ONT}Straat"),
        OWL_EQUIVALENT_CLASS,
        &format!("{HG}Street"),
    )?;
    triple_iri(
        writer,
        &format!("{LP_ONT}Buurt"),
        OWL_EQUIVALENT_CLASS,
        &format!("{HG}Neighbourhood"),
    )
}

fn write_address<W: Write>(writer: &mut W, address: &Address) -> io::Result<()> {
    let s = address.id.as_str();
    triple_iri(writer, s, RDF_TYPE, &format!("{LP_ONT}Adres"))?;
    triple_literal(writer, s, RDFS_LABEL, &address.label, None)?;
    triple_literal(writer, s, SKOS_PREF_LABEL, &address.pref_label, None)?;
    triple_literal(
        writer,
        s,
        &format!("{SEM}hasLatestBeginTimeStamp"),
        &address.bounds.latest_begin.to_string(),
        Some(XSD_DATE),
    )?;
    triple_literal(
        writer,
        s,
        &format!("{SEM}hasEarliestEndTimeStamp"),
        &address.bounds.earliest_end.to_string(),
        Some(XSD_DATE),
    )?;

    if let Some(straat) = &address.straat {
        triple_iri(writer, s, &format!("{LP_ONT}straat"), straat.as_str())?;
    }
    if let Some(huisnummer) = &address.huisnummer {
        triple_literal(writer, s, &format!("{LP_ONT}huisnummer"), huisnummer, None)?;
    }
    if let Some(buurt) = &address.buurt {
        triple_iri(writer, s, &format!("{LP_ONT}buurt"), buurt.as_str())?;
    }
    if let Some(buurtnummer) = &address.buurtnummer {
        triple_literal(writer, s, &format!("{LP_ONT}buurtnummer"), buurtnummer, None)?;
    }
    if let Some(perceel) = &address.perceel {
        triple_iri(writer, s, &format!("{LP_ONT}perceel"), perceel.as_str())?;
    }
    if let Some(geometry) = &address.geometry {
        triple_iri(writer, s, &format!("{GEO}hasGeometry"), geometry.as_str())?;
    }
    Ok(())
}

fn write_typed_labeled<W: Write>(
    writer: &mut W,
    id: &Iri,
    class: &str,
    label: &str,
) -> io::Result<()> {
    triple_iri(writer, id.as_str(), RDF_TYPE, &format!("{LP_ONT}{class}"))?;
    triple_literal(writer, id.as_str(), RDFS_LABEL, label, None)
}

fn write_parcel<W: Write>(writer: &mut W, parcel: &Parcel) -> io::Result<()> {
    let s = parcel.id.as_str();
    triple_iri(writer, s, RDF_TYPE, &format!("{LP_ONT}Perceel"))?;
    triple_literal(writer, s, RDFS_LABEL, &parcel.label, None)?;
    triple_iri(writer, s, &format!("{LP_ONT}sectie"), parcel.sectie.as_str())?;
    if let Some(nummer) = parcel.perceelnummer {
        triple_literal(
            writer,
            s,
            &format!("{LP_ONT}perceelnummer"),
            &nummer.to_string(),
            Some(XSD_INTEGER),
        )?;
    }
    if let Some(toevoeging) = &parcel.perceelnummertoevoeging {
        triple_literal(
            writer,
            s,
            &format!("{LP_ONT}perceelnummertoevoeging"),
            toevoeging,
            None,
        )?;
    }
    Ok(())
}

fn write_house<W: Write>(writer: &mut W, house: &House) -> io::Result<()> {
    let s = house.id.as_str();
    triple_iri(writer, s, RDF_TYPE, &format!("{LP_ONT}Huis"))?;
    for address in &house.adres {
        triple_iri(writer, s, &format!("{LP_ONT}adres"), address.as_str())?;
    }
    Ok(())
}

fn write_geometry<W: Write>(writer: &mut W, geometry: &GeometryNode) -> io::Result<()> {
    let s = geometry.id.as_str();
    triple_iri(writer, s, RDF_TYPE, &format!("{GEO}Geometry"))?;
    triple_literal(
        writer,
        s,
        &format!("{GEO}asWKT"),
        &geometry.wkt,
        Some(&format!("{GEO}wktLiteral")),
    )?;
    for point in &geometry.points {
        triple_literal(writer, s, RDFS_LABEL, point, None)?;
    }
    Ok(())
}

fn triple_iri<W: Write>(writer: &mut W, s: &str, p: &str, o: &str) -> io::Result<()> {
    writeln!(writer, "<{s}> <{p}> <{o}> .")
}

fn triple_literal<W: Write>(
    writer: &mut W,
    s: &str,
    p: &str,
    text: &str,
    datatype: Option<&str>,
) -> io::Result<()> {
    match datatype {
        Some(dt) => writeln!(writer, "<{s}> <{p}> \"{}\"^^<{dt}> .", escape_literal(text)),
        None => writeln!(writer, "<{s}> <{p}> \"{}\" .", escape_literal(text)),
    }
}

/// Escapes a literal per the N-Triples grammar.
fn escape_literal(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            other => out.push(other),
        }
    }
    out
}
