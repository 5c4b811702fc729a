//! Temporal bounds derived from the years an address appears in.
//!
//! The concordance only knows census years, so bounds are coarse: an
//! address existed no later than January 1st of its earliest year and at
//! least until January 1st of its latest year (min/max over the aggregated
//! year set, not first/last observed).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::record::Year;

/// Earliest/latest knowledge about an address's lifespan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemporalBounds {
    /// The address existed by this date (Jan 1 of the earliest year).
    pub latest_begin: NaiveDate,
    /// The address still existed on this date (Jan 1 of the latest year).
    pub earliest_end: NaiveDate,
}

impl TemporalBounds {
    /// Derives bounds from the earliest and latest year of an address.
    #[must_use]
    pub fn from_span(min: Year, max: Year) -> Self {
        Self {
            latest_begin: jan1(min),
            earliest_end: jan1(max),
        }
    }

    /// Derives bounds from a year slice, min/max over the set.
    ///
    /// Returns `None` for an empty slice; an address without years has no
    /// temporal extent.
    #[must_use]
    pub fn from_years(years: &[Year]) -> Option<Self> {
        let min = years.iter().min()?;
        let max = years.iter().max()?;
        Some(Self::from_span(*min, *max))
    }
}

fn jan1(year: Year) -> NaiveDate {
    // Jan 1 exists for every calendar year in the fixed set
    NaiveDate::from_ymd_opt(i32::from(year.as_u16()), 1, 1).expect("January 1st is a valid date")
}

/// Human-readable span label: `"{name} (1853)"` or `"{name} (1832-1943)"`.
#[must_use]
pub fn span_label(name: &str, min: Year, max: Year) -> String {
    if min == max {
        format!("{name} ({min})")
    } else {
        format!("{name} ({min}-{max})")
    }
}
