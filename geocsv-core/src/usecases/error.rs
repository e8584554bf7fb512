use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(
        "No geocoding provider found: set one of GOOGLE_API_KEY, MAPBOX_API_KEY, \
         OPENCAGE_API_KEY, MAPTILER_API_KEY or GEOAPIFY_API_KEY"
    )]
    NoProvider,
    #[error("Missing required column '{0}'")]
    MissingColumn(String),
}
