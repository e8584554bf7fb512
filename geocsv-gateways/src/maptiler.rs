use crate::http::{get_json, url_with_json_path, FeatureCollection};
use geocsv_core::gateways::geocode::{GeoCodingGateway, GeocodingError};
use reqwest::blocking::Client;
use url::Url;

const DEFAULT_API_URL: &str = "https://api.maptiler.com/geocoding";

#[derive(Debug, Clone)]
pub struct MapTiler {
    api_key: String,
    api_url: String,
    client: Client,
}

impl MapTiler {
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
        let mut url = url_with_json_path(&self.api_url, query)?;
        url.query_pairs_mut()
            .append_pair("key", &self.api_key)
            .append_pair("limit", "1");
        Ok(url)
    }
}

impl GeoCodingGateway for MapTiler {
    fn resolve_address_lat_lng(&self, query: &str) -> Result<Option<(f64, f64)>, GeocodingError> {
        let url = self.request_url(query)?;
        let res: FeatureCollection = get_json(&self.client, url)?;
        Ok(res.first_lat_lng())
    }
}
