use crate::http::get_json;
use geocsv_core::gateways::geocode::{GeoCodingGateway, GeocodingError};
use reqwest::blocking::Client;
use serde::Deserialize;
use url::Url;

const DEFAULT_API_URL: &str = "https://api.opencagedata.com/geocode/v1/json";

/// OpenCage forward geocoding
#[derive(Debug, Clone)]
pub struct OpenCage {
    api_key: String,
    api_url: String,
    client: Client,
}

impl OpenCage {
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
            &[
                ("q", query),
                ("key", self.api_key.as_str()),
                ("limit", "1"),
                ("no_annotations", "1"),
            ],
        )?;
        Ok(url)
    }
}

#[derive(Debug, Deserialize)]
struct ForwardResponse {
    #[serde(default)]
    results: Vec<ForwardResult>,
}

#[derive(Debug, Deserialize)]
struct ForwardResult {
    geometry: Geometry,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    lat: f64,
    lng: f64,
}

impl GeoCodingGateway for OpenCage {
    fn resolve_address_lat_lng(&self, query: &str) -> Result<Option<(f64, f64)>, GeocodingError> {
        let url = self.request_url(query)?;
        let res: ForwardResponse = get_json(&self.client, url)?;
        let point = res.results.first().map(|r| (r.geometry.lat, r.geometry.lng));
        log::debug!("Resolved address location '{}': {:?}", query, point);
        Ok(point)
    }
}
