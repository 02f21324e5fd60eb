//! The static location dataset.
//!
//! Records are read once from JSON and never mutated. Slugs must be unique;
//! coordinates are parsed leniently so that one damaged record does not
//! prevent loading the rest.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};
use tracing::info;

use crate::error::{Error, Result};
use crate::geo;
use crate::types::{Coordinate, NamedLocation, NearbyLocation, NearbyQuery};

pub const BUNDLED_LOCATIONS: &str = include_str!("../data/locations.json");

#[derive(Deserialize)]
#[serde(untagged)]
enum RawDegrees {
    Number(f64),
    Text(String),
    Other(IgnoredAny),
}

pub(crate) fn missing_degrees() -> f64 {
    f64::NAN
}

/// Accepts numbers and numeric strings; anything else becomes NaN.
pub(crate) fn lenient_degrees<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = match Option::<RawDegrees>::deserialize(deserializer)? {
        Some(RawDegrees::Number(n)) => n,
        Some(RawDegrees::Text(s)) => s.trim().parse().unwrap_or(f64::NAN),
        Some(RawDegrees::Other(_)) | None => f64::NAN,
    };
    Ok(value)
}

fn fold_latin(c: char) -> Option<&'static str> {
    let folded = match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' | 'ă' | 'ą' => "a",
        'æ' => "ae",
        'ç' | 'ć' | 'č' => "c",
        'ď' | 'đ' | 'ð' => "d",
        'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ė' | 'ę' | 'ě' => "e",
        'ğ' => "g",
        'ì' | 'í' | 'î' | 'ï' | 'ī' | 'ı' => "i",
        'ł' => "l",
        'ñ' | 'ń' | 'ň' => "n",
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' | 'ő' => "o",
        'œ' => "oe",
        'ř' => "r",
        'ś' | 'š' | 'ş' | 'ș' => "s",
        'ß' => "ss",
        'ť' | 'ţ' | 'ț' => "t",
        'þ' => "th",
        'ù' | 'ú' | 'û' | 'ü' | 'ū' | 'ů' | 'ű' => "u",
        'ý' | 'ÿ' => "y",
        'ź' | 'ż' | 'ž' => "z",
        _ => return None,
    };
    Some(folded)
}

/// URL-safe identifier: `"São Paulo"` → `"sao-paulo"`, `"St. John's"` → `"st-johns"`.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_separator = false;
    for c in text.to_lowercase().chars() {
        let piece = if c.is_ascii_alphanumeric() {
            None
        } else if let Some(folded) = fold_latin(c) {
            Some(folded)
        } else {
            if c.is_whitespace() || matches!(c, '-' | '_' | '/') {
                pending_separator = true;
            }
            continue;
        };
        if pending_separator && !slug.is_empty() {
            slug.push('-');
        }
        pending_separator = false;
        match piece {
            Some(folded) => slug.push_str(folded),
            None => slug.push(c),
        }
    }
    slug
}

#[derive(Debug, Clone, Default)]
pub struct LocationDataset {
    locations: Vec<NamedLocation>,
    by_slug: HashMap<String, usize>,
}

impl LocationDataset {
    pub fn new(locations: Vec<NamedLocation>) -> Result<Self> {
        let mut by_slug = HashMap::with_capacity(locations.len());
        for (idx, location) in locations.iter().enumerate() {
            if by_slug.insert(location.slug.clone(), idx).is_some() {
                return Err(Error::DuplicateSlug {
                    slug: location.slug.clone(),
                });
            }
        }
        Ok(Self { locations, by_slug })
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let locations: Vec<NamedLocation> = serde_json::from_str(json)?;
        let dataset = Self::new(locations)?;
        info!(locations = dataset.len(), "loaded location dataset");
        Ok(dataset)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let locations: Vec<NamedLocation> = serde_json::from_reader(reader)?;
        let dataset = Self::new(locations)?;
        info!(locations = dataset.len(), "loaded location dataset");
        Ok(dataset)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        Self::from_reader(BufReader::new(file))
    }

    /// The dataset compiled into the crate.
    pub fn bundled() -> Result<Self> {
        Self::from_json_str(BUNDLED_LOCATIONS)
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    pub fn locations(&self) -> &[NamedLocation] {
        &self.locations
    }

    pub fn iter(&self) -> impl Iterator<Item = &NamedLocation> {
        self.locations.iter()
    }

    pub fn get(&self, slug: &str) -> Option<&NamedLocation> {
        self.by_slug.get(slug).map(|&idx| &self.locations[idx])
    }

    pub fn in_country<'a>(&'a self, country: &'a str) -> impl Iterator<Item = &'a NamedLocation> {
        self.locations
            .iter()
            .filter(move |l| l.country.as_deref() == Some(country))
    }

    pub fn in_region<'a>(&'a self, region: &'a str) -> impl Iterator<Item = &'a NamedLocation> {
        self.locations
            .iter()
            .filter(move |l| l.region.as_deref() == Some(region))
    }

    pub fn nearest(&self, origin: Coordinate) -> Option<NearbyLocation<'_>> {
        geo::find_nearest(origin, &self.locations)
    }

    pub fn nearby(&self, origin: Coordinate, query: &NearbyQuery) -> Vec<NearbyLocation<'_>> {
        geo::find_nearby(origin, &self.locations, query)
    }

    /// Neighbours of the location `slug`, never including itself.
    pub fn nearby_to(&self, slug: &str, query: &NearbyQuery) -> Vec<NearbyLocation<'_>> {
        let Some(origin) = self.get(slug).and_then(NamedLocation::coordinate) else {
            return Vec::new();
        };
        let mut results = geo::find_nearby(
            origin,
            &self.locations,
            &NearbyQuery {
                limit: query.limit.saturating_add(1),
                ..query.clone()
            },
        );
        results.retain(|n| n.location.slug != slug);
        results.truncate(query.limit);
        results
    }
}
