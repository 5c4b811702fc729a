//! Input rows and the fixed set of census years.
//!
//! A [`RawObservation`] is one row of the source concordance: per-year
//! optional fields plus a single location-point identifier. Missing values
//! are `None`, never an empty string, so absence is unambiguous.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The five historical census years covered by the concordance.
///
/// The set is closed: no other record sources exist. Ordering follows
/// chronology, so sorted containers iterate years in ascending order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Year {
    /// Cadastral year 1832 (sections and parcels).
    #[serde(rename = "1832")]
    Y1832,
    /// Census year 1853 (neighborhoods and neighborhood numbers).
    #[serde(rename = "1853")]
    Y1853,
    /// Census year 1876 (streets with neighborhood context).
    #[serde(rename = "1876")]
    Y1876,
    /// Census year 1909 (streets and house numbers).
    #[serde(rename = "1909")]
    Y1909,
    /// Census year 1943 (streets and house numbers).
    #[serde(rename = "1943")]
    Y1943,
}

impl Year {
    /// All years in ascending chronological order.
    pub const ALL: [Self; 5] = [Self::Y1832, Self::Y1853, Self::Y1876, Self::Y1909, Self::Y1943];

    /// The calendar year as a number.
    #[must_use]
    pub const fn as_u16(self) -> u16 {
        match self {
            Self::Y1832 => 1832,
            Self::Y1853 => 1853,
            Self::Y1876 => 1876,
            Self::Y1909 => 1909,
            Self::Y1943 => 1943,
        }
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u16())
    }
}

/// One cadastral record from the source concordance.
///
/// Field names mirror the source spreadsheet columns, so a JSON export of
/// the spreadsheet deserializes directly. Every field except the location
/// point is optional; a year whose primary identifying field is absent
/// contributes nothing for that year.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawObservation {
    /// Location-point identifier shared by all years of this row.
    pub locatiepunt: String,

    /// 1943 street name.
    #[serde(rename = "1943_straat", skip_serializing_if = "Option::is_none", default)]
    pub straat_1943: Option<String>,
    /// 1943 house number. Free text in the source data.
    #[serde(rename = "1943_huisnummer", skip_serializing_if = "Option::is_none", default)]
    pub huisnummer_1943: Option<String>,
    /// 1943 house-number suffix.
    #[serde(
        rename = "1943_huisnummertoevoeging",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub huisnummertoevoeging_1943: Option<String>,

    /// 1909 street name.
    #[serde(rename = "1909_straat", skip_serializing_if = "Option::is_none", default)]
    pub straat_1909: Option<String>,
    /// 1909 house number.
    #[serde(rename = "1909_huisnummer", skip_serializing_if = "Option::is_none", default)]
    pub huisnummer_1909: Option<i64>,
    /// 1909 house-number suffix.
    #[serde(
        rename = "1909_huisnummertoevoeging",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub huisnummertoevoeging_1909: Option<String>,

    /// 1876 neighborhood name (context for the 1876 street label).
    #[serde(rename = "1876_buurt", skip_serializing_if = "Option::is_none", default)]
    pub buurt_1876: Option<String>,
    /// 1876 street name.
    #[serde(rename = "1876_straat", skip_serializing_if = "Option::is_none", default)]
    pub straat_1876: Option<String>,
    /// 1876 house number.
    #[serde(rename = "1876_huisnummer", skip_serializing_if = "Option::is_none", default)]
    pub huisnummer_1876: Option<i64>,
    /// 1876 house-number suffix.
    #[serde(
        rename = "1876_huisnummertoevoeging",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub huisnummertoevoeging_1876: Option<String>,

    /// 1853 neighborhood name.
    #[serde(rename = "1853_buurt", skip_serializing_if = "Option::is_none", default)]
    pub buurt_1853: Option<String>,
    /// 1853 neighborhood number.
    #[serde(rename = "1853_buurtnummer", skip_serializing_if = "Option::is_none", default)]
    pub buurtnummer_1853: Option<i64>,
    /// 1853 neighborhood-number suffix.
    #[serde(
        rename = "1853_buurtnummertoevoeging",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub buurtnummertoevoeging_1853: Option<String>,

    /// 1832 cadastral section code.
    #[serde(rename = "1832_sectie", skip_serializing_if = "Option::is_none", default)]
    pub sectie_1832: Option<String>,
    /// 1832 parcel number.
    #[serde(rename = "1832_perceelnummer", skip_serializing_if = "Option::is_none", default)]
    pub perceelnummer_1832: Option<i64>,
    /// 1832 parcel-number suffix.
    #[serde(
        rename = "1832_perceelnummertoevoeging",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub perceelnummertoevoeging_1832: Option<String>,
}

impl RawObservation {
    /// Creates an empty observation for the given location point.
    #[must_use]
    pub fn new(locatiepunt: impl Into<String>) -> Self {
        Self {
            locatiepunt: locatiepunt.into(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_ordering_is_chronological() {
        let mut years = vec![Year::Y1943, Year::Y1832, Year::Y1876];
        years.sort();
        assert_eq!(years, vec![Year::Y1832, Year::Y1876, Year::Y1943]);
    }

    #[test]
    fn test_year_display() {
        assert_eq!(format!("{}", Year::Y1832), "1832");
        assert_eq!(format!("{}", Year::Y1943), "1943");
    }

    #[test]
    fn test_year_all_ascending() {
        let mut sorted = Year::ALL;
        sorted.sort();
        assert_eq!(sorted, Year::ALL);
    }

    #[test]
    fn test_observation_deserializes_source_columns() {
        let json = r#"{
            "locatiepunt": "P1",
            "1943_straat": "Kalverstraat",
            "1943_huisnummer": "10",
            "1853_buurt": "Jordaan",
            "1853_buurtnummer": 5
        }"#;
        let row: RawObservation = serde_json::from_str(json).unwrap();
        assert_eq!(row.locatiepunt, "P1");
        assert_eq!(row.straat_1943.as_deref(), Some("Kalverstraat"));
        assert_eq!(row.huisnummer_1943.as_deref(), Some("10"));
        assert_eq!(row.buurt_1853.as_deref(), Some("Jordaan"));
        assert_eq!(row.buurtnummer_1853, Some(5));
        assert!(row.straat_1909.is_none());
    }

    #[test]
    fn test_observation_roundtrip() {
        let mut row = RawObservation::new("P42");
        row.straat_1909 = Some("Damrak".to_string());
        row.huisnummer_1909 = Some(7);

        let json = serde_json::to_string(&row).unwrap();
        let back: RawObservation = serde_json::from_str(&json).unwrap();
        assert_eq!(row, back);
        // Absent fields are omitted entirely, not serialized as null
        assert!(!json.contains("1832_sectie"));
    }
}
