use crate::gateways::geocode::{GeoCodingGateway, GeocodingError};
use std::{collections::HashMap, env, fmt};

/// A supported geocoding service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Provider {
    Google,
    Mapbox,
    OpenCage,
    MapTiler,
    Geoapify,
}

impl Provider {
    /// All providers, most preferred first.
    pub const PRIORITY: [Provider; 5] = [
        Provider::Google,
        Provider::Mapbox,
        Provider::OpenCage,
        Provider::MapTiler,
        Provider::Geoapify,
    ];

    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Google => "Google Maps",
            Self::Mapbox => "MapBox",
            Self::OpenCage => "OpenCage",
            Self::MapTiler => "MapTiler",
            Self::Geoapify => "Geoapify",
        }
    }

    pub const fn service_id(self) -> &'static str {
        match self {
            Self::Google => "googlev3",
            Self::Mapbox => "mapbox",
            Self::OpenCage => "opencage",
            Self::MapTiler => "maptiler",
            Self::Geoapify => "geoapify",
        }
    }

    /// Name of the environment variable holding the API key.
    pub const fn env_var(self) -> &'static str {
        match self {
            Self::Google => "GOOGLE_API_KEY",
            Self::Mapbox => "MAPBOX_API_KEY",
            Self::OpenCage => "OPENCAGE_API_KEY",
            Self::MapTiler => "MAPTILER_API_KEY",
            Self::Geoapify => "GEOAPIFY_API_KEY",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// API keys by provider.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials(HashMap<Provider, String>);

impl Credentials {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Provider::PRIORITY
            .into_iter()
            .filter_map(|p| lookup(p.env_var()).map(|key| (p, key)))
            .collect()
    }

    pub fn insert<S: Into<String>>(&mut self, provider: Provider, api_key: S) {
        self.0.insert(provider, api_key.into());
    }

    /// The API key of `provider`, empty keys count as missing.
    pub fn api_key(&self, provider: Provider) -> Option<&str> {
        self.0
            .get(&provider)
            .map(String::as_str)
            .filter(|key| !key.is_empty())
    }

    /// The first provider in [`Provider::PRIORITY`] order that has an API key.
    pub fn first_available(&self) -> Option<(Provider, &str)> {
        Provider::PRIORITY
            .into_iter()
            .find_map(|p| self.api_key(p).map(|key| (p, key)))
    }
}

impl FromIterator<(Provider, String)> for Credentials {
    fn from_iter<I: IntoIterator<Item = (Provider, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

// Never print the keys.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let available: Vec<_> = Provider::PRIORITY
            .into_iter()
            .filter(|p| self.api_key(*p).is_some())
            .collect();
        f.debug_tuple("Credentials").field(&available).finish()
    }
}

/// The geocoding provider used for a whole run.
pub struct ProviderChoice {
    provider: Provider,
    gateway: Box<dyn GeoCodingGateway>,
}

impl ProviderChoice {
    pub fn new(provider: Provider, gateway: Box<dyn GeoCodingGateway>) -> Self {
        Self { provider, gateway }
    }

    pub fn provider(&self) -> Provider {
        self.provider
    }

    pub fn display_name(&self) -> &'static str {
        self.provider.display_name()
    }

    pub fn service_id(&self) -> &'static str {
        self.provider.service_id()
    }
}

impl GeoCodingGateway for ProviderChoice {
    fn resolve_address_lat_lng(&self, query: &str) -> Result<Option<(f64, f64)>, GeocodingError> {
        self.gateway.resolve_address_lat_lng(query)
    }
}

impl fmt::Debug for ProviderChoice {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("ProviderChoice")
            .field("provider", &self.provider)
            .finish_non_exhaustive()
    }
}
