#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Address {
    pub name     : Option<String>,
    pub address  : Option<String>,
    pub postcode : Option<String>,
    pub city     : Option<String>,
    pub country  : Option<String>,
}

impl Address {
    pub fn is_empty(&self) -> bool {
        self.parts().iter().all(Option::is_none)
    }

    /// The address fields in query order.
    pub fn parts(&self) -> [Option<&str>; 5] {
        [
            self.name.as_deref(),
            self.address.as_deref(),
            self.postcode.as_deref(),
            self.city.as_deref(),
            self.country.as_deref(),
        ]
    }
}
