use crate::http::get_json;
use geocsv_core::gateways::geocode::{GeoCodingGateway, GeocodingError};
use reqwest::blocking::Client;
use serde::Deserialize;
use url::Url;

const DEFAULT_API_URL: &str = "https://api.geoapify.com/v1/geocode/search";

#[derive(Debug, Clone)]
pub struct Geoapify {
    api_key: String,
    api_url: String,
    client: Client,
}

impl Geoapify {
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
                ("text", query),
                ("apiKey", self.api_key.as_str()),
                ("format", "json"),
                ("limit", "1"),
            ],
        )?;
        Ok(url)
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<SearchResult>,
}

#[derive(Debug, Deserialize)]
struct SearchResult {
    lat: f64,
    lon: f64,
}

impl GeoCodingGateway for Geoapify {
    fn resolve_address_lat_lng(&self, query: &str) -> Result<Option<(f64, f64)>, GeocodingError> {
        let url = self.request_url(query)?;
        let res: SearchResponse = get_json(&self.client, url)?;
        Ok(res.results.first().map(|r| (r.lat, r.lon)))
    }
}
