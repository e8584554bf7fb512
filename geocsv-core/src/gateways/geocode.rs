use thiserror::Error;

pub trait GeoCodingGateway {
    /// Forward geocoding of a free-text address.
    ///
    /// Returns `Ok(None)` if the provider did not find the address.
    fn resolve_address_lat_lng(&self, query: &str) -> Result<Option<(f64, f64)>, GeocodingError>;
}

#[derive(Debug, Error)]
pub enum GeocodingError {
    #[error("HTTP status {status}: {message}")]
    Status { status: u16, message: String },
    #[error("Request rejected: {0}")]
    Rejected(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
