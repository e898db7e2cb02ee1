use serde::Deserialize;

/// Represents an airport with its name, IATA code and geographical position.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Airport {
    pub name: String,
    pub code: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Airport {
    pub fn new(name: String, code: String, latitude: f64, longitude: f64) -> Self {
        Airport {
            name,
            code,
            latitude,
            longitude,
        }
    }
}
