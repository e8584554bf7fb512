use crate::{adapters::csv, config::Config};
use anyhow::{Context as _, Result};
use geocsv_core::{
    provider::{Credentials, ProviderChoice},
    usecases::{self, EnrichmentSummary},
};

/// Selects the provider and geocodes the configured input file.
///
/// Fails with [`usecases::Error::NoProvider`] before touching any file
/// if no API key is available.
pub fn geocode_csv_file(cfg: &Config, credentials: &Credentials) -> Result<EnrichmentSummary> {
    let provider = geocsv_gateways::select_geocoding_gateway(credentials)
        .ok_or(usecases::Error::NoProvider)?;
    enrich_csv_file(cfg, &provider)
}

pub fn enrich_csv_file(cfg: &Config, provider: &ProviderChoice) -> Result<EnrichmentSummary> {
    let input = &cfg.csv.input;
    let output = &cfg.csv.output;
    let delimiter = cfg.csv.delimiter;

    let mut table = csv::read_table_from_file(input, delimiter)
        .with_context(|| format!("Unable to read input file {}", input.display()))?;
    let columns = usecases::resolve_columns(&mut table, &cfg.columns)
        .with_context(|| format!("Invalid input file {}", input.display()))?;

    log::info!(
        "Geocoding {} records of {} with {}",
        table.len(),
        input.display(),
        provider.display_name()
    );
    let summary = usecases::enrich_table(provider, &columns, &mut table);

    csv::write_table_to_file(output, delimiter, &table)
        .with_context(|| format!("Unable to write output file {}", output.display()))?;
    log::info!("Geocoded data saved to {}", output.display());
    log::info!(
        "{} of {} records resolved ({} without result, {} failed)",
        summary.resolved,
        summary.total,
        summary.unresolved,
        summary.failed
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Csv;
    use geocsv_core::{
        gateways::geocode::{GeoCodingGateway, GeocodingError},
        provider::Provider,
        usecases::ColumnNames,
    };
    use std::{fs, path::Path};
    use tempfile::tempdir;

    /// Fails for queries starting with `fail`, finds nothing for `unknown`.
    struct DummyGeoGW;

    impl GeoCodingGateway for DummyGeoGW {
        fn resolve_address_lat_lng(
            &self,
            query: &str,
        ) -> Result<Option<(f64, f64)>, GeocodingError> {
            if query.starts_with("fail") {
                return Err(GeocodingError::Rejected("OVER_DAILY_LIMIT".into()));
            }
            if query.starts_with("unknown") {
                return Ok(None);
            }
            Ok(Some((48.858_370_123_456, 2.294_481_987_654)))
        }
    }

    fn dummy_provider() -> ProviderChoice {
        ProviderChoice::new(Provider::Google, Box::new(DummyGeoGW))
    }

    fn config(input: &Path, output: &Path) -> Config {
        Config {
            csv: Csv {
                input: input.to_owned(),
                output: output.to_owned(),
                delimiter: b';',
            },
            columns: ColumnNames::default(),
        }
    }

    #[test]
    fn enrich_file() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("input.csv");
        let output = dir.path().join("output.csv");
        fs::write(
            &input,
            "id;name;address;postcode;city;country\n\
             1;Tour Eiffel;Champ de Mars;75007;Paris;France\n\
             2;fail;x;;y;z\n\
             3;unknown;;;;\n",
        )
        .unwrap();

        let summary = enrich_csv_file(&config(&input, &output), &dummy_provider()).unwrap();

        assert_eq!(summary.total, 3);
        assert_eq!(summary.resolved, 1);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.unresolved, 1);
        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "id;name;address;postcode;city;country;latitude;longitude\n\
             1;Tour Eiffel;Champ de Mars;75007;Paris;France;48.8583701;2.294482\n\
             2;fail;x;;y;z;;\n\
             3;unknown;;;;;;\n"
        );

        // Reading the output again yields the very same coordinates.
        let table = csv::read_table_from_file(&output, b';').unwrap();
        assert_eq!(table.records()[0].get(6), Some("48.8583701"));
        assert_eq!(table.records()[0].get(7), Some("2.294482"));
    }

    #[test]
    fn keep_existing_coordinates() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("input.csv");
        let output = dir.path().join("output.csv");
        fs::write(
            &input,
            "name;latitude;address;postcode;city;country;longitude\n\
             unknown;1.25;a;b;c;d;3.5\n",
        )
        .unwrap();

        enrich_csv_file(&config(&input, &output), &dummy_provider()).unwrap();

        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "name;latitude;address;postcode;city;country;longitude\n\
             unknown;1.25;a;b;c;d;3.5\n"
        );
    }

    #[test]
    fn fill_missing_trailing_cells() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("input.csv");
        let output = dir.path().join("output.csv");
        fs::write(
            &input,
            "name;address;postcode;city;country;latitude;longitude\n\
             Tour Eiffel;Champ de Mars;75007;Paris;France\n\
             unknown;a;b;c;d\n",
        )
        .unwrap();

        let summary = enrich_csv_file(&config(&input, &output), &dummy_provider()).unwrap();

        assert_eq!(summary.total, 2);
        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "name;address;postcode;city;country;latitude;longitude\n\
             Tour Eiffel;Champ de Mars;75007;Paris;France;48.8583701;2.294482\n\
             unknown;a;b;c;d;;\n"
        );
    }

    #[test]
    fn fail_without_provider_before_reading_input() {
        let dir = tempdir().unwrap();
        let cfg = config(
            &dir.path().join("does-not-exist.csv"),
            &dir.path().join("output.csv"),
        );
        let err = geocode_csv_file(&cfg, &Credentials::default()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<usecases::Error>(),
            Some(usecases::Error::NoProvider)
        ));
        assert!(!cfg.csv.output.exists());
    }

    #[test]
    fn fail_on_missing_input_file() {
        let dir = tempdir().unwrap();
        let cfg = config(
            &dir.path().join("does-not-exist.csv"),
            &dir.path().join("output.csv"),
        );
        let err = enrich_csv_file(&cfg, &dummy_provider()).unwrap_err();
        assert!(err.to_string().starts_with("Unable to read input file"));
        assert!(!cfg.csv.output.exists());
    }

    #[test]
    fn fail_on_missing_column() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("input.csv");
        let output = dir.path().join("output.csv");
        fs::write(&input, "name;address;city;country\na;b;c;d\n").unwrap();

        let err = enrich_csv_file(&config(&input, &output), &dummy_provider()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<usecases::Error>(),
            Some(usecases::Error::MissingColumn(c)) if c == "postcode"
        ));
        assert!(!output.exists());
    }

    #[test]
    fn fail_on_unwritable_output() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("input.csv");
        fs::write(&input, "name;address;postcode;city;country\na;b;c;d;e\n").unwrap();
        let output = dir.path().join("no-such-dir").join("output.csv");

        let err = enrich_csv_file(&config(&input, &output), &dummy_provider()).unwrap_err();
        assert!(err.to_string().starts_with("Unable to write output file"));
    }
}
