use chrono_tz::{Africa, America, Asia, Atlantic, Australia, Europe, Pacific, Tz};

use crate::types::NamedLocation;

pub const DEFAULT_TIMEZONE: Tz = Tz::UTC;

// Primary zone per US state (name, postal code); split states use their majority zone.
const US_STATE_ZONES: &[(&str, &str, Tz)] = &[
    ("Alabama", "AL", America::Chicago),
    ("Alaska", "AK", America::Anchorage),
    ("Arizona", "AZ", America::Phoenix),
    ("Arkansas", "AR", America::Chicago),
    ("California", "CA", America::Los_Angeles),
    ("Colorado", "CO", America::Denver),
    ("Connecticut", "CT", America::New_York),
    ("Delaware", "DE", America::New_York),
    ("District of Columbia", "DC", America::New_York),
    ("Florida", "FL", America::New_York),
    ("Georgia", "GA", America::New_York),
    ("Hawaii", "HI", Pacific::Honolulu),
    ("Idaho", "ID", America::Boise),
    ("Illinois", "IL", America::Chicago),
    ("Indiana", "IN", America::Indiana::Indianapolis),
    ("Iowa", "IA", America::Chicago),
    ("Kansas", "KS", America::Chicago),
    ("Kentucky", "KY", America::New_York),
    ("Louisiana", "LA", America::Chicago),
    ("Maine", "ME", America::New_York),
    ("Maryland", "MD", America::New_York),
    ("Massachusetts", "MA", America::New_York),
    ("Michigan", "MI", America::Detroit),
    ("Minnesota", "MN", America::Chicago),
    ("Mississippi", "MS", America::Chicago),
    ("Missouri", "MO", America::Chicago),
    ("Montana", "MT", America::Denver),
    ("Nebraska", "NE", America::Chicago),
    ("Nevada", "NV", America::Los_Angeles),
    ("New Hampshire", "NH", America::New_York),
    ("New Jersey", "NJ", America::New_York),
    ("New Mexico", "NM", America::Denver),
    ("New York", "NY", America::New_York),
    ("North Carolina", "NC", America::New_York),
    ("North Dakota", "ND", America::Chicago),
    ("Ohio", "OH", America::New_York),
    ("Oklahoma", "OK", America::Chicago),
    ("Oregon", "OR", America::Los_Angeles),
    ("Pennsylvania", "PA", America::New_York),
    ("Rhode Island", "RI", America::New_York),
    ("South Carolina", "SC", America::New_York),
    ("South Dakota", "SD", America::Chicago),
    ("Tennessee", "TN", America::Chicago),
    ("Texas", "TX", America::Chicago),
    ("Utah", "UT", America::Denver),
    ("Vermont", "VT", America::New_York),
    ("Virginia", "VA", America::New_York),
    ("Washington", "WA", America::Los_Angeles),
    ("West Virginia", "WV", America::New_York),
    ("Wisconsin", "WI", America::Chicago),
    ("Wyoming", "WY", America::Denver),
];

const COUNTRY_ZONES: &[(&str, Tz)] = &[
    ("United Kingdom", Europe::London),
    ("France", Europe::Paris),
    ("Germany", Europe::Berlin),
    ("Italy", Europe::Rome),
    ("Spain", Europe::Madrid),
    ("Netherlands", Europe::Amsterdam),
    ("Belgium", Europe::Brussels),
    ("Switzerland", Europe::Zurich),
    ("Austria", Europe::Vienna),
    ("Sweden", Europe::Stockholm),
    ("Norway", Europe::Oslo),
    ("Denmark", Europe::Copenhagen),
    ("Finland", Europe::Helsinki),
    ("Iceland", Atlantic::Reykjavik),
    ("Poland", Europe::Warsaw),
    ("Czech Republic", Europe::Prague),
    ("Greece", Europe::Athens),
    ("Portugal", Europe::Lisbon),
    ("Ireland", Europe::Dublin),
    ("Romania", Europe::Bucharest),
    ("Hungary", Europe::Budapest),
    ("Russia", Europe::Moscow),
    ("Turkey", Europe::Istanbul),
    ("Japan", Asia::Tokyo),
    ("China", Asia::Shanghai),
    ("India", Asia::Kolkata),
    ("South Korea", Asia::Seoul),
    ("Thailand", Asia::Bangkok),
    ("Singapore", Asia::Singapore),
    ("Malaysia", Asia::Kuala_Lumpur),
    ("Indonesia", Asia::Jakarta),
    ("Philippines", Asia::Manila),
    ("Vietnam", Asia::Ho_Chi_Minh),
    ("Australia", Australia::Sydney),
    ("New Zealand", Pacific::Auckland),
    ("Canada", America::Toronto),
    ("Mexico", America::Mexico_City),
    ("Brazil", America::Sao_Paulo),
    ("Argentina", America::Argentina::Buenos_Aires),
    ("Chile", America::Santiago),
    ("Colombia", America::Bogota),
    ("Peru", America::Lima),
    ("South Africa", Africa::Johannesburg),
    ("Egypt", Africa::Cairo),
    ("Morocco", Africa::Casablanca),
    ("Kenya", Africa::Nairobi),
    ("United Arab Emirates", Asia::Dubai),
    ("Saudi Arabia", Asia::Riyadh),
    ("Israel", Asia::Jerusalem),
    ("Lebanon", Asia::Beirut),
    ("Jordan", Asia::Amman),
];

fn state_zone(region: &str) -> Option<Tz> {
    let region = region.trim();
    US_STATE_ZONES
        .iter()
        .find(|(name, code, _)| {
            name.eq_ignore_ascii_case(region) || code.eq_ignore_ascii_case(region)
        })
        .map(|&(_, _, tz)| tz)
}

fn country_zone(country: &str) -> Option<Tz> {
    let country = country.trim();
    COUNTRY_ZONES
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(country))
        .map(|&(_, tz)| tz)
}

fn is_united_states(country: &str) -> bool {
    ["United States", "United States of America", "USA", "US"]
        .iter()
        .any(|name| name.eq_ignore_ascii_case(country.trim()))
}

/// US state (full name or postal code) first, then country, then UTC.
///
/// The state table is only consulted when the country is absent or the US.
pub fn timezone_for_region(region: Option<&str>, country: Option<&str>) -> Tz {
    region
        .filter(|_| country.map_or(true, is_united_states))
        .and_then(state_zone)
        .or_else(|| country.and_then(country_zone))
        .unwrap_or(DEFAULT_TIMEZONE)
}

/// Display zone for a location; an explicit IANA id on the record wins.
pub fn timezone_for(location: &NamedLocation) -> Tz {
    location
        .timezone
        .as_deref()
        .and_then(|id| id.parse::<Tz>().ok())
        .unwrap_or_else(|| {
            timezone_for_region(location.region.as_deref(), location.country.as_deref())
        })
}
