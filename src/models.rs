use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Common and official names of a country.
///
/// Both fields default to empty strings because field-filtered queries
/// (`?fields=...`) return partial objects.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Name {
    #[serde(default)]
    pub common: String,
    #[serde(default)]
    pub official: String,
}

/// One currency as the API describes it: display name plus optional symbol.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Currency {
    pub name: String,
    pub symbol: Option<String>,
}

/// Male/female demonym pair for one language tag (usually `eng`).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Demonym {
    #[serde(default)]
    pub f: String,
    #[serde(default)]
    pub m: String,
}

/// Flag image references.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Flags {
    #[serde(default)]
    pub png: String,
    pub svg: Option<String>,
    pub alt: Option<String>,
}

/// External map links.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Maps {
    #[serde(default)]
    pub google_maps: String,
    #[serde(default)]
    pub open_street_maps: String,
}

/// One country record from the REST Countries v3.1 API.
///
/// Every field carries a default so the same type deserializes both full
/// records (`/region/...`, `/name/...`) and the partial objects the
/// field-filtered endpoint returns. Mapping-valued fields use `BTreeMap`,
/// so "the first currency/language" is well defined: iteration order is
/// ascending by code, independent of the provider's JSON key order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Country {
    #[serde(default)]
    pub name: Name,
    #[serde(default)]
    pub region: String,
    pub subregion: Option<String>,
    #[serde(default)]
    pub population: u64,
    /// Surface area in km².
    pub area: Option<f64>,
    #[serde(default)]
    pub capital: Vec<String>,
    #[serde(default)]
    pub currencies: BTreeMap<String, Currency>,
    /// Language code (e.g. `fra`) to display name (e.g. `French`).
    #[serde(default)]
    pub languages: BTreeMap<String, String>,
    #[serde(default)]
    pub timezones: Vec<String>,
    /// `[latitude, longitude]`; empty when the record carries no coordinates.
    #[serde(default)]
    pub latlng: Vec<f64>,
    #[serde(default)]
    pub flags: Flags,
    #[serde(default)]
    pub maps: Maps,
    /// Language tag (e.g. `eng`) to demonym pair.
    #[serde(default)]
    pub demonyms: BTreeMap<String, Demonym>,
}

impl Country {
    /// English demonym pair, if the record carries one.
    pub fn demonym_eng(&self) -> Option<&Demonym> {
        self.demonyms.get("eng")
    }
}
