//! End-to-end pipeline scenarios: determinism, grouping, temporal bounds,
//! and failure behavior over the full aggregate-then-resolve path.

use chrono::NaiveDate;
use concordans::pipeline::run;
use concordans::{aggregate, ntriples, NameLinks, PointIndex, RawObservation, Resolver};

fn points() -> PointIndex {
    let mut index = PointIndex::new();
    index.insert("P1", "POINT (4.89 52.37)");
    index.insert("P2", "POINT (4.90 52.38)");
    index.insert("P3", "POINT (4.91 52.39)");
    index
}

fn row_1943(point: &str, straat: &str, nummer: &str) -> RawObservation {
    let mut row = RawObservation::new(point);
    row.straat_1943 = Some(straat.to_string());
    row.huisnummer_1943 = Some(nummer.to_string());
    row
}

#[test]
fn kalverstraat_rows_merge_into_one_address() {
    let rows = vec![
        row_1943("P1", "Kalverstraat", "10"),
        row_1943("P2", "Kalverstraat", "10"),
    ];

    let concordance = aggregate(&rows, &NameLinks::new());
    let entry = &concordance.get("Kalverstraat 10").unwrap()[&concordans::Year::Y1943];
    assert_eq!(entry.geometry, vec!["P1".to_string(), "P2".to_string()]);

    let graph = run(&rows, &NameLinks::new(), &points()).unwrap();
    assert_eq!(graph.addresses.len(), 1);
    assert_eq!(graph.streets.len(), 1);

    let address = graph.addresses.values().next().unwrap();
    let geometry = &graph.geometries[address.geometry.as_ref().unwrap()];
    assert!(geometry.wkt.starts_with("MULTIPOINT"));

    let street = graph.streets.values().next().unwrap();
    assert_eq!(street.label, "Kalverstraat");
}

#[test]
fn jordaan_identifier_drops_buurt_prefix() {
    let mut row = RawObservation::new("P1");
    row.buurt_1853 = Some("Jordaan".to_string());
    row.buurtnummer_1853 = Some(5);

    let graph = run(&[row], &NameLinks::new(), &points()).unwrap();
    let address = graph.addresses.values().next().unwrap();

    assert!(!address.id.as_str().contains("buurt-"));
    assert!(address.id.as_str().ends_with("/adres/jordaan-5-1853"));
    assert_eq!(address.label, "Jordaan 5 (1853)");
}

#[test]
fn double_run_yields_byte_identical_output() {
    let mut rows = vec![
        row_1943("P1", "Kalverstraat", "10"),
        row_1943("P2", "Kalverstraat", "10"),
    ];
    let mut multi_year = RawObservation::new("P3");
    multi_year.sectie_1832 = Some("G".to_string());
    multi_year.perceelnummer_1832 = Some(123);
    multi_year.buurt_1853 = Some("Jordaan".to_string());
    multi_year.buurtnummer_1853 = Some(5);
    rows.push(multi_year);

    let serialize = || {
        let graph = run(&rows, &NameLinks::new(), &points()).unwrap();
        let mut out = Vec::new();
        ntriples::write_graph(&mut out, &graph).unwrap();
        out
    };

    assert_eq!(serialize(), serialize());
}

#[test]
fn identifiers_stable_under_row_reordering() {
    let rows = vec![
        row_1943("P1", "Kalverstraat", "10"),
        row_1943("P2", "Kalverstraat", "10"),
        row_1943("P3", "Damrak", "1"),
    ];
    let mut reversed = rows.clone();
    reversed.reverse();

    let forward = run(&rows, &NameLinks::new(), &points()).unwrap();
    let backward = run(&reversed, &NameLinks::new(), &points()).unwrap();

    let mut forward_ids: Vec<_> =
        forward.addresses.keys().map(|iri| iri.as_str().to_string()).collect();
    let mut backward_ids: Vec<_> =
        backward.addresses.keys().map(|iri| iri.as_str().to_string()).collect();
    forward_ids.sort();
    backward_ids.sort();
    assert_eq!(forward_ids, backward_ids);

    // Geometry identifiers sort their point lists, so they also agree
    let mut forward_geo: Vec<_> =
        forward.geometries.keys().map(|iri| iri.as_str().to_string()).collect();
    let mut backward_geo: Vec<_> =
        backward.geometries.keys().map(|iri| iri.as_str().to_string()).collect();
    forward_geo.sort();
    backward_geo.sort();
    assert_eq!(forward_geo, backward_geo);
}

#[test]
fn single_year_temporal_bounds_coincide() {
    let mut row = RawObservation::new("P1");
    row.buurt_1876 = Some("YY".to_string());
    row.straat_1876 = Some("Lindengracht".to_string());
    row.huisnummer_1876 = Some(12);

    let graph = run(&[row], &NameLinks::new(), &points()).unwrap();
    let address = graph.addresses.values().next().unwrap();

    let jan1_1876 = NaiveDate::from_ymd_opt(1876, 1, 1).unwrap();
    assert_eq!(address.bounds.latest_begin, jan1_1876);
    assert_eq!(address.bounds.earliest_end, jan1_1876);
}

#[test]
fn multi_year_temporal_bounds_use_min_and_max() {
    // One label observed in 1909 and 1943 (same street and number text)
    let mut row = RawObservation::new("P1");
    row.straat_1943 = Some("Rokin".to_string());
    row.huisnummer_1943 = Some("1".to_string());
    row.straat_1909 = Some("Rokin".to_string());
    row.huisnummer_1909 = Some(1);

    let graph = run(&[row], &NameLinks::new(), &points()).unwrap();
    let address = graph.addresses.values().next().unwrap();

    assert_eq!(address.bounds.latest_begin, NaiveDate::from_ymd_opt(1909, 1, 1).unwrap());
    assert_eq!(address.bounds.earliest_end, NaiveDate::from_ymd_opt(1943, 1, 1).unwrap());
    assert_eq!(address.label, "Rokin 1 (1909-1943)");
}

#[test]
fn missing_point_lookup_aborts_the_run() {
    let rows = vec![
        row_1943("P1", "Kalverstraat", "10"),
        row_1943("MISSING", "Damrak", "1"),
    ];

    let err = run(&rows, &NameLinks::new(), &points()).unwrap_err();
    let message = format!("{err}");
    assert!(message.contains("MISSING"));
    assert!(message.contains("Damrak 1"));
}

#[test]
fn resolver_memo_is_run_scoped() {
    // Two independent resolvers over the same concordance agree exactly
    let rows = vec![row_1943("P1", "Kalverstraat", "10")];
    let concordance = aggregate(&rows, &NameLinks::new());

    let first = Resolver::new().resolve(&concordance, &points()).unwrap();
    let second = Resolver::new().resolve(&concordance, &points()).unwrap();

    let first_ids: Vec<_> = first.addresses.keys().collect();
    let second_ids: Vec<_> = second.addresses.keys().collect();
    assert_eq!(first_ids, second_ids);
}

#[test]
fn external_links_take_precedence_over_minting() {
    let mut links = NameLinks::new();
    links.insert("Kalverstraat", "https://adamlink.nl/geo/street/kalverstraat/123");

    let graph = run(&[row_1943("P1", "Kalverstraat", "10")], &links, &points()).unwrap();
    let street = graph.streets.values().next().unwrap();
    assert_eq!(street.id.as_str(), "https://adamlink.nl/geo/street/kalverstraat/123");

    // Without the link the street gets a minted slug
    let graph = run(&[row_1943("P1", "Kalverstraat", "10")], &NameLinks::new(), &points()).unwrap();
    let street = graph.streets.values().next().unwrap();
    assert_eq!(
        street.id.as_str(),
        "https://resolver.clariah.org/hisgis/lp/straat/kalverstraat"
    );
}

#[test]
fn full_history_address_links_every_entity_kind() {
    // A single location observed in all five years under one set of labels
    let mut row = RawObservation::new("P1");
    row.straat_1943 = Some("Nes".to_string());
    row.huisnummer_1943 = Some("21".to_string());
    row.straat_1909 = Some("Nes".to_string());
    row.huisnummer_1909 = Some(21);
    row.buurt_1876 = Some("D".to_string());
    row.straat_1876 = Some("Nes".to_string());
    row.huisnummer_1876 = Some(21);
    row.buurt_1853 = Some("D".to_string());
    row.buurtnummer_1853 = Some(21);
    row.sectie_1832 = Some("G".to_string());
    row.perceelnummer_1832 = Some(4242);

    let graph = run(&[row], &NameLinks::new(), &points()).unwrap();

    // Distinct labels per year family: 1943/1909 share "Nes 21", 1876 adds
    // the buurt context, 1853 and 1832 have prefix tokens
    assert_eq!(graph.addresses.len(), 4);
    assert_eq!(graph.streets.len(), 1);
    assert_eq!(graph.neighborhoods.len(), 1);
    assert_eq!(graph.sections.len(), 1);
    assert_eq!(graph.parcels.len(), 1);
    // One shared house, all four addresses attached
    assert_eq!(graph.houses.len(), 1);
    assert_eq!(graph.houses.values().next().unwrap().adres.len(), 4);

    let nes = graph
        .addresses
        .values()
        .find(|a| a.label == "Nes 21 (1909-1943)")
        .expect("merged 1909/1943 address");
    assert!(nes.straat.is_some());
    assert!(nes.perceel.is_none());

    let parcel_address = graph
        .addresses
        .values()
        .find(|a| a.perceel.is_some())
        .expect("1832 address with parcel");
    assert_eq!(parcel_address.pref_label, "G 4242");
}
