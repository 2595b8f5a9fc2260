//! Trail coordinates value object

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Latitude/longitude pair where a trail video was recorded
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    latitude: f64,
    longitude: f64,
}

impl Coordinates {
    /// Create coordinates with range validation
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, DomainError> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(DomainError::InvalidCoordinates);
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Latitude in degrees
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Link that opens the trail location on a map
    #[must_use]
    pub fn map_link(&self) -> String {
        format!(
            "https://www.google.com/maps?q={:.6},{:.6}",
            self.latitude, self.longitude
        )
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_coordinates() {
        let c = Coordinates::new(49.2827, -123.1207).unwrap();
        assert!((c.latitude() - 49.2827).abs() < f64::EPSILON);
        assert!((c.longitude() + 123.1207).abs() < f64::EPSILON);
    }

    #[test]
    fn boundaries_are_inclusive() {
        assert!(Coordinates::new(90.0, 180.0).is_ok());
        assert!(Coordinates::new(-90.0, -180.0).is_ok());
    }

    #[test]
    fn out_of_range_is_rejected() {
        assert_eq!(
            Coordinates::new(90.5, 0.0),
            Err(DomainError::InvalidCoordinates)
        );
        assert_eq!(
            Coordinates::new(0.0, -180.5),
            Err(DomainError::InvalidCoordinates)
        );
        assert!(Coordinates::new(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn display_uses_six_decimals() {
        let c = Coordinates::new(49.5, -123.25).unwrap();
        assert_eq!(c.to_string(), "49.500000, -123.250000");
    }

    #[test]
    fn map_link_contains_both_axes() {
        let c = Coordinates::new(49.5, -123.25).unwrap();
        assert_eq!(
            c.map_link(),
            "https://www.google.com/maps?q=49.500000,-123.250000"
        );
    }
}
