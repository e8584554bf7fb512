mod enrich_record;
mod enrich_table;
mod error;
mod resolve_columns;


pub use self::{enrich_record::*, enrich_table::*, error::Error, resolve_columns::*};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{entities::*, gateways::geocode::GeoCodingGateway, provider::ProviderChoice};
}
