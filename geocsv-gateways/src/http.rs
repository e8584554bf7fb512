use anyhow::bail;
use geocsv_core::gateways::geocode::GeocodingError;
use reqwest::blocking::Client;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::{de::DeserializeOwned, Deserialize};
use url::Url;

#[derive(Debug, Deserialize)]
struct JsonError {
    #[serde(alias = "error_message")]
    message: String,
}

/// Sends a GET request and parses the JSON body of a successful response.
pub(crate) fn get_json<T>(client: &Client, url: Url) -> Result<T, GeocodingError>
where
    T: DeserializeOwned,
{
    // The query string contains the API key.
    log::debug!("GET {}{}", url.origin().ascii_serialization(), url.path());
    let response = client
        .get(url)
        .send()
        .map_err(|err| anyhow::Error::from(err.without_url()))?;
    let status = response.status();
    if status.is_success() {
        let body: T = response
            .json()
            .map_err(|err| anyhow::Error::from(err.without_url()))?;
        return Ok(body);
    }
    let body = response.text().unwrap_or_default();
    Err(GeocodingError::Status {
        status: status.as_u16(),
        message: error_message(body),
    })
}

fn error_message(body: String) -> String {
    match serde_json::from_str::<JsonError>(&body) {
        Ok(JsonError { message }) => message,
        Err(_) => body,
    }
}

/// Appends `<query>.json` as the last path segment of `base`.
///
/// All non-alphanumeric characters of the query are encoded,
/// a `;` would otherwise start a batch request.
pub(crate) fn url_with_json_path(base: &str, query: &str) -> anyhow::Result<Url> {
    let mut url = Url::parse(base)?;
    if url.cannot_be_a_base() {
        bail!("Cannot append a path segment to '{base}'");
    }
    let encoded_query = utf8_percent_encode(query, NON_ALPHANUMERIC);
    let path = format!("{}/{encoded_query}.json", url.path().trim_end_matches('/'));
    url.set_path(&path);
    Ok(url)
}

/// GeoJSON answer of Mapbox and MapTiler.
#[derive(Debug, Deserialize)]
pub(crate) struct FeatureCollection {
    #[serde(default)]
    pub features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Feature {
    /// `[lng, lat]`
    pub center: [f64; 2],
}

impl FeatureCollection {
    pub fn first_lat_lng(&self) -> Option<(f64, f64)> {
        self.features.first().map(|f| {
            let [lng, lat] = f.center;
            (lat, lng)
        })
    }
}
