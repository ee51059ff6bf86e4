//! Wire shapes shared by the HTTP adapters.
//!
//! The API returns related records either as a bare identifier or as a
//! populated object carrying `_id`, and dates either as `YYYY-MM-DD` or as a
//! full RFC 3339 timestamp. These helpers absorb both shapes.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Deserializer, de::Error as _};

/// Related record, sent as an identifier or as a populated object.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub(crate) enum Reference {
    /// Bare identifier.
    Id(String),
    /// Populated document.
    Populated {
        /// Identifier of the populated document.
        #[serde(rename = "_id")]
        id: String,
    },
}

impl Reference {
    /// Returns the referenced identifier.
    pub(crate) fn into_id(self) -> String {
        match self {
            Self::Id(id) | Self::Populated { id } => id,
        }
    }
}

/// Status sent as its bare code or as a populated status document.
///
/// Each collection names the code field differently (`nom_statut_tch` for
/// tasks, `nom_statut_cmd` for orders, `nom_statut` for order lines).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub(crate) enum StatusWire {
    /// Bare status code.
    Code(String),
    /// Populated status document.
    Document {
        /// Status code carried by the document.
        #[serde(alias = "nom_statut_tch", alias = "nom_statut_cmd")]
        nom_statut: String,
    },
}

impl StatusWire {
    /// Returns the status code, whatever the shape it arrived in.
    pub(crate) fn into_code(self) -> String {
        match self {
            Self::Code(code) | Self::Document { nom_statut: code } => code,
        }
    }
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok().or_else(|| {
        DateTime::parse_from_rfc3339(raw)
            .ok()
            .map(|timestamp| timestamp.with_timezone(&Utc).date_naive())
    })
}

/// Deserializes a date given as `YYYY-MM-DD` or as an RFC 3339 timestamp.
pub(crate) fn date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_date(&raw).ok_or_else(|| D::Error::custom(format!("invalid date '{raw}'")))
}

/// Deserializes a timestamp given as RFC 3339 or as a bare `YYYY-MM-DD`
/// date, the latter read as midnight UTC.
pub(crate) fn timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    DateTime::parse_from_rfc3339(raw.trim())
        .map(|parsed| parsed.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
                .ok()
                .map(|date| date.and_time(NaiveTime::MIN).and_utc())
        })
        .ok_or_else(|| D::Error::custom(format!("invalid timestamp '{raw}'")))
}

/// Optional variant of [`date`]; `null`, a missing field and `""` are `None`.
pub(crate) fn optional_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => parse_date(value)
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("invalid date '{value}'"))),
    }
}
