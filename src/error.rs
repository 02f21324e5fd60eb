use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid latitude {value}° (must be between -90° and +90°)")]
    InvalidLatitude { value: f64 },

    #[error("invalid longitude {value}° (must be between -180° and +180°)")]
    InvalidLongitude { value: f64 },

    #[error("invalid calendar month {year}-{month:02}")]
    InvalidMonth { year: i32, month: u32 },

    #[error("duplicate location slug `{slug}`")]
    DuplicateSlug { slug: String },

    #[error("solar position calculation failed: {0}")]
    Ephemeris(#[from] solar_positioning::Error),

    #[error("failed to parse location dataset: {0}")]
    Dataset(#[from] serde_json::Error),

    #[error("failed to read location dataset: {0}")]
    Io(#[from] std::io::Error),
}
