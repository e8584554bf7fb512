use crate::{
    config::{self, Config},
    flows,
};
use anyhow::Result;
use clap::Parser;
use geocsv_core::provider::Credentials;
use std::path::PathBuf;

/// Add latitude and longitude to the addresses of a CSV file.
///
/// The geocoding provider is chosen by the first API key found in
/// GOOGLE_API_KEY, MAPBOX_API_KEY, OPENCAGE_API_KEY, MAPTILER_API_KEY
/// and GEOAPIFY_API_KEY.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Configuration file (default: geocsv.toml if it exists)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Input CSV file [env: INPUT_CSV]
    #[arg(long, short, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output CSV file [env: OUTPUT_CSV]
    #[arg(long, short, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Field delimiter of input and output
    #[arg(long, short, value_name = "CHAR")]
    delimiter: Option<String>,
}

impl Args {
    fn apply(self, cfg: &mut Config) -> Result<()> {
        let Self {
            input,
            output,
            delimiter,
            ..
        } = self;
        if let Some(input) = input {
            cfg.csv.input = input;
        }
        if let Some(output) = output {
            cfg.csv.output = output;
        }
        if let Some(delimiter) = delimiter {
            cfg.csv.delimiter = config::parse_delimiter(&delimiter)?;
        }
        Ok(())
    }
}

pub fn run() -> Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();
    let mut cfg = Config::try_load_from_file_or_default(args.config.as_ref())?;
    args.apply(&mut cfg)?;
    let credentials = Credentials::from_env();
    log::debug!("Available credentials: {:?}", credentials);
    flows::geocode_csv_file(&cfg, &credentials)?;
    Ok(())
}
