use serde::Deserialize;
use std::path::PathBuf;

const DEFAULT_CONFIG_FILE: &str = include_str!("geocsv.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub csv: Option<Csv>,
    pub columns: Option<Columns>,
}

impl Default for Config {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG_FILE).expect("Default configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Csv {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub delimiter: Option<String>,
}

impl Default for Csv {
    fn default() -> Self {
        Config::default().csv.expect("CSV configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Columns {
    pub name: Option<String>,
    pub address: Option<String>,
    pub postcode: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
}

impl Default for Columns {
    fn default() -> Self {
        Config::default().columns.expect("Columns configuration")
    }
}
