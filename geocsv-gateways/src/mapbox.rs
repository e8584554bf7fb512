use crate::http::{get_json, url_with_json_path, FeatureCollection};
use geocsv_core::gateways::geocode::{GeoCodingGateway, GeocodingError};
use reqwest::blocking::Client;
use url::Url;

const DEFAULT_API_URL: &str = "https://api.mapbox.com/geocoding/v5/mapbox.places";

/// Mapbox Geocoding API (v5)
#[derive(Debug, Clone)]
pub struct Mapbox {
    access_token: String,
    api_url: String,
    client: Client,
}

impl Mapbox {
    pub fn new(access_token: String) -> Self {
        Self {
            access_token,
            api_url: DEFAULT_API_URL.to_string(),
            client: Client::new(),
        }
    }

    pub fn with_api_url(mut self, api_url: String) -> Self {
        self.api_url = api_url;
        self
    }

    fn request_url(&self, query: &str) -> anyhow::Result<Url> {
        let mut url = url_with_json_path(&self.api_url, query)?;
        url.query_pairs_mut()
            .append_pair("access_token", &self.access_token)
            .append_pair("limit", "1");
        Ok(url)
    }
}

impl GeoCodingGateway for Mapbox {
    fn resolve_address_lat_lng(&self, query: &str) -> Result<Option<(f64, f64)>, GeocodingError> {
        let url = self.request_url(query)?;
        let res: FeatureCollection = get_json(&self.client, url)?;
        Ok(res.first_lat_lng())
    }
}
