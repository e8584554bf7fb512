use super::{prelude::*, AddressColumns};
use itertools::Itertools;

/// Stand-in for missing address fields in the query string.
pub const MISSING_FIELD_PLACEHOLDER: &str = "nan";

/// What happened to a single record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    Resolved(Coordinates),
    Unresolved,
    Failed,
}

/// Builds the free-text query sent to the provider.
///
/// Missing fields are not skipped, they contribute [`MISSING_FIELD_PLACEHOLDER`].
pub fn address_to_forward_query_string(addr: &Address) -> String {
    addr.parts()
        .into_iter()
        .map(|part| part.unwrap_or(MISSING_FIELD_PLACEHOLDER))
        .join(" ")
}

/// Geocodes a single record and stores the rounded coordinates.
///
/// Provider errors are logged and never abort the caller.
pub fn enrich_record(
    provider: &ProviderChoice,
    columns: &AddressColumns,
    record: &mut Record,
) -> Outcome {
    let addr = columns.address_of(record);
    let query = address_to_forward_query_string(&addr);
    match provider.resolve_address_lat_lng(&query) {
        Ok(Some(lat_lng)) => {
            let pos = Coordinates::from(lat_lng).rounded();
            record.set(columns.latitude, pos.lat.to_string());
            record.set(columns.longitude, pos.lng.to_string());
            log::info!(
                "(Provider: {}) | {} ➡️ Latitude: {}, Longitude: {}",
                provider.display_name(),
                query,
                pos.lat,
                pos.lng
            );
            Outcome::Resolved(pos)
        }
        Ok(None) => {
            log::info!(
                "(Provider: {}) | No location found for '{}'",
                provider.display_name(),
                query
            );
            Outcome::Unresolved
        }
        Err(err) => {
            log::error!("Failed to geocode address '{}': {}", query, err);
            Outcome::Failed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::{
        resolve_columns,
        tests::{table, FailingGeoGW, FixedGeoGW, NoResultGeoGW, RecordingGeoGW},
        ColumnNames,
    };

    #[test]
    fn query_string_of_complete_address() {
        let addr = Address {
            name: Some("Louvre".into()),
            address: Some("Rue de Rivoli".into()),
            postcode: Some("75001".into()),
            city: Some("Paris".into()),
            country: Some("France".into()),
        };
        assert_eq!(
            address_to_forward_query_string(&addr),
            "Louvre Rue de Rivoli 75001 Paris France"
        );
    }

    #[test]
    fn query_string_keeps_placeholder_for_missing_fields() {
        let addr = Address {
            address: Some("Rue de Rivoli".into()),
            city: Some("Paris".into()),
            ..Default::default()
        };
        assert_eq!(
            address_to_forward_query_string(&addr),
            "nan Rue de Rivoli nan Paris nan"
        );
        assert_eq!(
            address_to_forward_query_string(&Address::default()),
            "nan nan nan nan nan"
        );
    }

    #[test]
    fn store_rounded_coordinates() {
        let provider = FixedGeoGW::choice(48.861_110_987_654, 2.335_833_333_33);
        let mut t = table(&[["Louvre", "Rue de Rivoli", "75001", "Paris", "France"]]);
        let cols = resolve_columns(&mut t, &ColumnNames::default()).unwrap();
        let before: Vec<String> = t.records()[0].values()[..5].to_vec();

        let record = t.records_mut().next().unwrap();
        let outcome = enrich_record(&provider, &cols, record);

        assert_eq!(
            outcome,
            Outcome::Resolved(Coordinates::new(48.861_111, 2.335_833_3))
        );
        let r = &t.records()[0];
        assert_eq!(r.get(cols.latitude), Some("48.861111"));
        assert_eq!(r.get(cols.longitude), Some("2.3358333"));
        assert_eq!(r.values()[..5], before[..]);
    }

    #[test]
    fn overwrite_existing_coordinates() {
        let provider = FixedGeoGW::choice(52.5, 13.4);
        let mut t = crate::entities::Table::new([
            "name", "address", "postcode", "city", "country", "latitude", "longitude",
        ]);
        t.push(
            ["Reichstag", "Platz der Republik 1", "11011", "Berlin", "DE", "0", "0"]
                .into_iter()
                .collect(),
        );
        let cols = resolve_columns(&mut t, &ColumnNames::default()).unwrap();
        let record = t.records_mut().next().unwrap();
        enrich_record(&provider, &cols, record);
        assert_eq!(t.records()[0].values()[5..], ["52.5", "13.4"]);
    }

    #[test]
    fn keep_previous_coordinates_without_result() {
        let provider = NoResultGeoGW::choice();
        let mut t = crate::entities::Table::new([
            "name", "address", "postcode", "city", "country", "latitude", "longitude",
        ]);
        t.push(["a", "b", "c", "d", "e", "1.5", ""].into_iter().collect());
        let cols = resolve_columns(&mut t, &ColumnNames::default()).unwrap();
        let record = t.records_mut().next().unwrap();
        assert_eq!(enrich_record(&provider, &cols, record), Outcome::Unresolved);
        assert_eq!(t.records()[0].get(cols.latitude), Some("1.5"));
        assert_eq!(t.records()[0].get(cols.longitude), Some(""));
    }

    #[test]
    fn provider_error_is_contained() {
        let provider = FailingGeoGW::choice();
        let mut t = table(&[["a", "b", "c", "d", "e"]]);
        let cols = resolve_columns(&mut t, &ColumnNames::default()).unwrap();
        let record = t.records_mut().next().unwrap();
        assert_eq!(enrich_record(&provider, &cols, record), Outcome::Failed);
        assert_eq!(t.records()[0].get(cols.latitude), Some(""));
    }

    #[test]
    fn provider_receives_query_with_placeholders() {
        let (provider, queries) = RecordingGeoGW::choice();
        let mut t = table(&[["", "Rue de Rivoli", "75001", "Paris", ""]]);
        let cols = resolve_columns(&mut t, &ColumnNames::default()).unwrap();
        let record = t.records_mut().next().unwrap();
        enrich_record(&provider, &cols, record);
        assert_eq!(
            *queries.borrow(),
            ["nan Rue de Rivoli 75001 Paris nan".to_string()]
        );
    }
}
