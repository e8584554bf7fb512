use std::fmt;

/// Number of fractional digits kept for latitude and longitude.
pub const COORDINATE_PRECISION: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Both components rounded to [`COORDINATE_PRECISION`] digits.
    pub fn rounded(self) -> Self {
        Self {
            lat: round_to_precision(self.lat, COORDINATE_PRECISION),
            lng: round_to_precision(self.lng, COORDINATE_PRECISION),
        }
    }
}

impl From<(f64, f64)> for Coordinates {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self::new(lat, lng)
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.lat, self.lng)
    }
}

/// Rounds `value` to `digits` fractional digits.
///
/// Decimal formatting works on the exact binary value, scaling by a power
/// of ten would introduce a second rounding step.
pub fn round_to_precision(value: f64, digits: usize) -> f64 {
    format!("{value:.digits$}").parse().unwrap_or(value)
}
