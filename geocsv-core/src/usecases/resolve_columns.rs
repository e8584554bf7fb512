use super::prelude::*;

/// Column names of the address and coordinate fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnNames {
    pub name: String,
    pub address: String,
    pub postcode: String,
    pub city: String,
    pub country: String,
    pub latitude: String,
    pub longitude: String,
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            name: "name".into(),
            address: "address".into(),
            postcode: "postcode".into(),
            city: "city".into(),
            country: "country".into(),
            latitude: "latitude".into(),
            longitude: "longitude".into(),
        }
    }
}

/// Column indices of a concrete table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressColumns {
    pub name: usize,
    pub address: usize,
    pub postcode: usize,
    pub city: usize,
    pub country: usize,
    pub latitude: usize,
    pub longitude: usize,
}

impl AddressColumns {
    pub fn address_of(&self, record: &Record) -> Address {
        let field = |index| record.value(index).map(ToString::to_string);
        Address {
            name: field(self.name),
            address: field(self.address),
            postcode: field(self.postcode),
            city: field(self.city),
            country: field(self.country),
        }
    }
}

/// Looks up the address columns and makes sure the coordinate columns exist.
///
/// Missing coordinate columns are appended (latitude first), all other
/// columns are left untouched.
pub fn resolve_columns(table: &mut Table, names: &ColumnNames) -> Result<AddressColumns> {
    let required = |name: &str| {
        table
            .column_index(name)
            .ok_or_else(|| Error::MissingColumn(name.to_owned()))
    };
    let name = required(&names.name)?;
    let address = required(&names.address)?;
    let postcode = required(&names.postcode)?;
    let city = required(&names.city)?;
    let country = required(&names.country)?;
    let latitude = table.ensure_column(&names.latitude);
    let longitude = table.ensure_column(&names.longitude);
    Ok(AddressColumns {
        name,
        address,
        postcode,
        city,
        country,
        latitude,
        longitude,
    })
}
