//! Adapter round-trips: JSON inputs and the persisted intermediate
//! concordance, exercised through real files.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};

use concordans::pipeline::{read_concordance, read_rows, write_concordance};
use concordans::{aggregate, NameLinks, PointIndex, Year};

#[test]
fn rows_load_from_source_column_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rows.json");

    let mut file = File::create(&path).unwrap();
    write!(
        file,
        r#"[
            {{"locatiepunt": "P1", "1943_straat": "Kalverstraat", "1943_huisnummer": "10"}},
            {{"locatiepunt": "P2", "1853_buurt": "Jordaan", "1853_buurtnummer": 5,
              "1853_buurtnummertoevoeging": "a"}}
        ]"#
    )
    .unwrap();

    let rows = read_rows(BufReader::new(File::open(&path).unwrap())).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].straat_1943.as_deref(), Some("Kalverstraat"));
    assert_eq!(rows[1].buurtnummertoevoeging_1853.as_deref(), Some("a"));
}

#[test]
fn concordance_survives_file_roundtrip() {
    let mut row = concordans::RawObservation::new("P1");
    row.straat_1943 = Some("Kalverstraat".to_string());
    row.huisnummer_1943 = Some("10".to_string());
    row.sectie_1832 = Some("G".to_string());
    row.perceelnummer_1832 = Some(123);
    let concordance = aggregate(&[row], &NameLinks::new());

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("concordans.json");

    write_concordance(BufWriter::new(File::create(&path).unwrap()), &concordance).unwrap();
    let back = read_concordance(BufReader::new(File::open(&path).unwrap())).unwrap();

    assert_eq!(concordance, back);
    let years = back.get("Kalverstraat 10").unwrap();
    assert!(years.contains_key(&Year::Y1943));
}

#[test]
fn point_table_loads_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("point2wkt.json");

    let mut file = File::create(&path).unwrap();
    write!(file, r#"{{"P1": "POINT (4.89 52.37)"}}"#).unwrap();

    let points = PointIndex::from_json_reader(BufReader::new(File::open(&path).unwrap())).unwrap();
    assert_eq!(points.wkt("P1"), Some("POINT (4.89 52.37)"));
}
