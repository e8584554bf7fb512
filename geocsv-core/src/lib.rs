pub mod gateways;
pub mod provider;
pub mod usecases;

pub mod entities {
    pub use geocsv_entities::{address::*, geo::*, table::*};
}
