//! Geocoding provider clients.

use geocsv_core::{
    gateways::geocode::GeoCodingGateway,
    provider::{Credentials, Provider, ProviderChoice},
};

pub mod geoapify;
pub mod google;
pub mod mapbox;
pub mod maptiler;
pub mod opencage;

mod http;

/// Creates the client of `provider`.
///
/// No network requests are made here.
pub fn geocoding_gateway(provider: Provider, api_key: String) -> Box<dyn GeoCodingGateway> {
    match provider {
        Provider::Google => Box::new(google::Google::new(api_key)),
        Provider::Mapbox => Box::new(mapbox::Mapbox::new(api_key)),
        Provider::OpenCage => Box::new(opencage::OpenCage::new(api_key)),
        Provider::MapTiler => Box::new(maptiler::MapTiler::new(api_key)),
        Provider::Geoapify => Box::new(geoapify::Geoapify::new(api_key)),
    }
}

/// Picks the first provider with an API key.
pub fn select_geocoding_gateway(credentials: &Credentials) -> Option<ProviderChoice> {
    let Some((provider, api_key)) = credentials.first_available() else {
        log::warn!("No geocoding API key found");
        return None;
    };
    log::info!("Use {} geocoding gateway", provider);
    let gateway = geocoding_gateway(provider, api_key.to_owned());
    Some(ProviderChoice::new(provider, gateway))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_nothing_without_credentials() {
        assert!(select_geocoding_gateway(&Credentials::default()).is_none());
    }

    #[test]
    fn select_by_priority() {
        let mut creds = Credentials::default();
        creds.insert(Provider::Geoapify, "g");
        let choice = select_geocoding_gateway(&creds).unwrap();
        assert_eq!(choice.provider(), Provider::Geoapify);
        assert_eq!(choice.display_name(), "Geoapify");

        creds.insert(Provider::OpenCage, "oc");
        let choice = select_geocoding_gateway(&creds).unwrap();
        assert_eq!(choice.provider(), Provider::OpenCage);
        assert_eq!(choice.service_id(), "opencage");
    }
}
