//! Nominatim-compatible search response types.
//!
//! `GET /search?format=json` answers with a JSON array of places. Nominatim
//! itself encodes `lat`/`lon` as strings; some compatible providers send
//! numbers, so both are accepted.

use ohana_core::Coordinates;
use serde::Deserialize;

use crate::error::GeocodeError;

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Degrees {
    Text(String),
    Number(f64),
}

impl Degrees {
    fn value(&self) -> Option<f64> {
        match self {
            Self::Text(s) => s.trim().parse().ok(),
            Self::Number(n) => Some(*n),
        }
    }

    fn raw(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::Number(n) => n.to_string(),
        }
    }
}

/// One entry of the search response array.
#[derive(Debug, Clone, Deserialize)]
pub struct Place {
    pub lat: Degrees,
    pub lon: Degrees,
    #[serde(default)]
    pub display_name: Option<String>,
}

impl Place {
    /// # Errors
    ///
    /// Returns [`GeocodeError::InvalidCoordinate`] when either component is
    /// not a number or the point is outside WGS84 bounds.
    pub fn coordinates(&self) -> Result<Coordinates, GeocodeError> {
        let invalid = || GeocodeError::InvalidCoordinate {
            lat: self.lat.raw(),
            lon: self.lon.raw(),
        };

        let (Some(lat), Some(lon)) = (self.lat.value(), self.lon.value()) else {
            return Err(invalid());
        };

        let coords = Coordinates::new(lat, lon);
        if coords.is_valid() {
            Ok(coords)
        } else {
            Err(invalid())
        }
    }
}
