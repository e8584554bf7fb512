use anyhow::{anyhow, Context as _, Result};
use geocsv_core::usecases::ColumnNames;
use std::{
    env, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "geocsv.toml";

const ENV_NAME_INPUT_CSV: &str = "INPUT_CSV";
const ENV_NAME_OUTPUT_CSV: &str = "OUTPUT_CSV";

#[derive(Debug, Clone)]
pub struct Config {
    pub csv: Csv,
    pub columns: ColumnNames,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Csv {
    pub input: PathBuf,
    pub output: PathBuf,
    pub delimiter: u8,
}

impl Config {
    /// Loads the configuration file (if any) on top of the built-in defaults
    /// and applies the `INPUT_CSV` and `OUTPUT_CSV` environment variables.
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let raw_config = match file_path {
            Some(file_path) => {
                let file_path = file_path.as_ref();
                let cfg_string = fs::read_to_string(file_path).with_context(|| {
                    format!("Unable to read configuration file {}", file_path.display())
                })?;
                toml::from_str(&cfg_string)?
            }
            None => match fs::read_to_string(DEFAULT_CONFIG_FILE_NAME) {
                Ok(cfg_string) => {
                    log::info!("Load configuration from {DEFAULT_CONFIG_FILE_NAME}");
                    toml::from_str(&cfg_string)?
                }
                Err(err) if err.kind() == ErrorKind::NotFound => {
                    log::debug!("{DEFAULT_CONFIG_FILE_NAME} not found => load default configuration");
                    raw::Config::default()
                }
                Err(err) => return Err(err.into()),
            },
        };
        let mut cfg = Self::try_from(raw_config)?;
        cfg.apply_env(|name| env::var(name).ok());
        Ok(cfg)
    }

    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(input) = lookup(ENV_NAME_INPUT_CSV) {
            self.csv.input = input.into();
        }
        if let Some(output) = lookup(ENV_NAME_OUTPUT_CSV) {
            self.csv.output = output.into();
        }
    }
}

/// A delimiter has to be exactly one ASCII character.
pub fn parse_delimiter(delimiter: &str) -> Result<u8> {
    match delimiter.as_bytes() {
        [b] if b.is_ascii() => Ok(*b),
        _ => Err(anyhow!(
            "Invalid delimiter '{delimiter}': a single ASCII character is required"
        )),
    }
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config { csv, columns } = from;

        let defaults = raw::Csv::default();
        let raw::Csv {
            input,
            output,
            delimiter,
        } = csv.unwrap_or_default();
        let input = input
            .or(defaults.input)
            .ok_or_else(|| anyhow!("Missing input file"))?;
        let output = output
            .or(defaults.output)
            .ok_or_else(|| anyhow!("Missing output file"))?;
        let delimiter = delimiter
            .or(defaults.delimiter)
            .ok_or_else(|| anyhow!("Missing delimiter"))?;
        let delimiter = parse_delimiter(&delimiter)?;
        let csv = Csv {
            input,
            output,
            delimiter,
        };

        let defaults = ColumnNames::default();
        let raw::Columns {
            name,
            address,
            postcode,
            city,
            country,
            latitude,
            longitude,
        } = columns.unwrap_or_default();
        let columns = ColumnNames {
            name: name.unwrap_or(defaults.name),
            address: address.unwrap_or(defaults.address),
            postcode: postcode.unwrap_or(defaults.postcode),
            city: city.unwrap_or(defaults.city),
            country: country.unwrap_or(defaults.country),
            latitude: latitude.unwrap_or(defaults.latitude),
            longitude: longitude.unwrap_or(defaults.longitude),
        };

        Ok(Self { csv, columns })
    }
}
