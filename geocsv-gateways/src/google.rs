use crate::http::get_json;
use geocsv_core::gateways::geocode::{GeoCodingGateway, GeocodingError};
use reqwest::blocking::Client;
use serde::Deserialize;
use url::Url;

const DEFAULT_API_URL: &str = "https://maps.googleapis.com/maps/api/geocode/json";

/// Google Maps Geocoding API
#[derive(Debug, Clone)]
pub struct Google {
    api_key: String,
    api_url: String,
    client: Client,
}

impl Google {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            api_url: DEFAULT_API_URL.to_string(),
            client: Client::new(),
        }
    }

    pub fn with_api_url(mut self, api_url: String) -> Self {
        self.api_url = api_url;
        self
    }

    fn request_url(&self, query: &str) -> anyhow::Result<Url> {
        let url = Url::parse_with_params(
            &self.api_url,
            &[("address", query), ("key", self.api_key.as_str())],
        )?;
        Ok(url)
    }
}

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    status: String,
    #[serde(default)]
    results: Vec<GeocodeResult>,
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    geometry: Geometry,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    location: LatLng,
}

#[derive(Debug, Deserialize)]
struct LatLng {
    lat: f64,
    lng: f64,
}

fn first_location(res: GeocodeResponse) -> Result<Option<(f64, f64)>, GeocodingError> {
    let GeocodeResponse {
        status,
        results,
        error_message,
    } = res;
    match status.as_str() {
        "OK" => Ok(results
            .first()
            .map(|r| (r.geometry.location.lat, r.geometry.location.lng))),
        "ZERO_RESULTS" => Ok(None),
        _ => {
            let msg = match error_message {
                Some(msg) => format!("{status}: {msg}"),
                None => status,
            };
            Err(GeocodingError::Rejected(msg))
        }
    }
}

impl GeoCodingGateway for Google {
    fn resolve_address_lat_lng(&self, query: &str) -> Result<Option<(f64, f64)>, GeocodingError> {
        let url = self.request_url(query)?;
        let res: GeocodeResponse = get_json(&self.client, url)?;
        first_location(res)
    }
}
