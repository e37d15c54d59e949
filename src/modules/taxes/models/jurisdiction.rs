// Canadian provincial/territorial sales tax table.
//
// A jurisdiction either charges HST alone, or GST with an optional PST.
// The table is built once on first use and never written afterwards.

use std::collections::BTreeMap;
use std::fmt;

use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{AppError, Result};

/// Supported two-letter province and territory codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Jurisdiction {
    AB,
    BC,
    MB,
    NB,
    NL,
    NS,
    NT,
    NU,
    ON,
    PE,
    QC,
    SK,
    YT,
}

impl Jurisdiction {
    /// Every supported jurisdiction, ordered by code
    pub const ALL: [Jurisdiction; 13] = [
        Jurisdiction::AB,
        Jurisdiction::BC,
        Jurisdiction::MB,
        Jurisdiction::NB,
        Jurisdiction::NL,
        Jurisdiction::NS,
        Jurisdiction::NT,
        Jurisdiction::NU,
        Jurisdiction::ON,
        Jurisdiction::PE,
        Jurisdiction::QC,
        Jurisdiction::SK,
        Jurisdiction::YT,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Jurisdiction::AB => "AB",
            Jurisdiction::BC => "BC",
            Jurisdiction::MB => "MB",
            Jurisdiction::NB => "NB",
            Jurisdiction::NL => "NL",
            Jurisdiction::NS => "NS",
            Jurisdiction::NT => "NT",
            Jurisdiction::NU => "NU",
            Jurisdiction::ON => "ON",
            Jurisdiction::PE => "PE",
            Jurisdiction::QC => "QC",
            Jurisdiction::SK => "SK",
            Jurisdiction::YT => "YT",
        }
    }

    /// Rates for this jurisdiction
    pub fn rates(&self) -> Result<&'static JurisdictionRate> {
        RATE_TABLE
            .get(self)
            .ok_or_else(|| AppError::unknown_jurisdiction(self.as_str()))
    }
}

impl fmt::Display for Jurisdiction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Jurisdiction {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        Jurisdiction::ALL
            .iter()
            .copied()
            .find(|j| j.as_str() == s)
            .ok_or_else(|| {
                tracing::warn!(code = %s, "Rejected unknown jurisdiction code");
                AppError::unknown_jurisdiction(s)
            })
    }
}


/// Tax composition of one jurisdiction. Rates are fractions (0.13 = 13%).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct JurisdictionRate {
    pub code: Jurisdiction,
    pub name: &'static str,
    pub gst_rate: Decimal,
    pub pst_rate: Decimal,
    pub hst_rate: Decimal,
}

impl JurisdictionRate {
    const fn new(
        code: Jurisdiction,
        name: &'static str,
        gst_rate: Decimal,
        pst_rate: Decimal,
        hst_rate: Decimal,
    ) -> Self {
        Self {
            code,
            name,
            gst_rate,
            pst_rate,
            hst_rate,
        }
    }

    /// Published combined rate
    pub fn total_rate(&self) -> Decimal {
        self.gst_rate + self.pst_rate + self.hst_rate
    }

    /// Whether the harmonized regime applies
    pub fn uses_hst(&self) -> bool {
        self.hst_rate > Decimal::ZERO
    }
}

const ZERO: Decimal = Decimal::ZERO;
const GST: Decimal = Decimal::from_parts(5, 0, 0, false, 2);

const RATES: [JurisdictionRate; 13] = [
    JurisdictionRate::new(Jurisdiction::AB, "Alberta", GST, ZERO, ZERO),
    JurisdictionRate::new(
        Jurisdiction::BC,
        "British Columbia",
        GST,
        Decimal::from_parts(7, 0, 0, false, 2),
        ZERO,
    ),
    JurisdictionRate::new(
        Jurisdiction::MB,
        "Manitoba",
        GST,
        Decimal::from_parts(7, 0, 0, false, 2),
        ZERO,
    ),
    JurisdictionRate::new(
        Jurisdiction::NB,
        "New Brunswick",
        ZERO,
        ZERO,
        Decimal::from_parts(15, 0, 0, false, 2),
    ),
    JurisdictionRate::new(
        Jurisdiction::NL,
        "Newfoundland and Labrador",
        ZERO,
        ZERO,
        Decimal::from_parts(15, 0, 0, false, 2),
    ),
    JurisdictionRate::new(
        Jurisdiction::NS,
        "Nova Scotia",
        ZERO,
        ZERO,
        Decimal::from_parts(15, 0, 0, false, 2),
    ),
    JurisdictionRate::new(Jurisdiction::NT, "Northwest Territories", GST, ZERO, ZERO),
    JurisdictionRate::new(Jurisdiction::NU, "Nunavut", GST, ZERO, ZERO),
    JurisdictionRate::new(
        Jurisdiction::ON,
        "Ontario",
        ZERO,
        ZERO,
        Decimal::from_parts(13, 0, 0, false, 2),
    ),
    JurisdictionRate::new(
        Jurisdiction::PE,
        "Prince Edward Island",
        ZERO,
        ZERO,
        Decimal::from_parts(15, 0, 0, false, 2),
    ),
    JurisdictionRate::new(
        Jurisdiction::QC,
        "Quebec",
        GST,
        Decimal::from_parts(9975, 0, 0, false, 5),
        ZERO,
    ),
    JurisdictionRate::new(
        Jurisdiction::SK,
        "Saskatchewan",
        GST,
        Decimal::from_parts(6, 0, 0, false, 2),
        ZERO,
    ),
    JurisdictionRate::new(Jurisdiction::YT, "Yukon", GST, ZERO, ZERO),
];

static RATE_TABLE: Lazy<BTreeMap<Jurisdiction, JurisdictionRate>> =
    Lazy::new(|| RATES.iter().map(|rate| (rate.code, *rate)).collect());

/// Look up a jurisdiction by its two-letter code.
///
/// Unknown codes are an error; there is no fallback rate.
pub fn lookup(code: &str) -> Result<&'static JurisdictionRate> {
    code.parse::<Jurisdiction>()?.rates()
}

/// The full table, ordered by code
pub fn all_rates() -> impl Iterator<Item = &'static JurisdictionRate> {
    RATE_TABLE.values()
}
