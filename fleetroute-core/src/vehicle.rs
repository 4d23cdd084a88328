use geo::Coord;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Depot coordinate used when a vehicle carries no start position.
///
/// `x = longitude`, `y = latitude`.
pub const DEFAULT_DEPOT: Coord<f64> = Coord {
    x: -74.0060,
    y: 40.7128,
};

/// A vehicle as received from the request layer.
///
/// Every field is optional on the wire: a missing identifier is tolerated
/// and treated as an opaque token, a missing capacity means the vehicle is
/// unconstrained, and a missing start position falls back to
/// [`DEFAULT_DEPOT`].
///
/// # Examples
/// ```
/// use fleetroute_core::{DEFAULT_DEPOT, Vehicle};
///
/// let vehicle = Vehicle::default();
/// assert_eq!(vehicle.capacity(), f64::INFINITY);
/// assert_eq!(vehicle.start_position(), DEFAULT_DEPOT);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    /// Identifier; absent identifiers are carried through as `None`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Capacity in kilograms; `None` means unconstrained. The request layer
    /// may send the field as `capacity` instead of `capacityKg`.
    #[serde(default, alias = "capacity", skip_serializing_if = "Option::is_none")]
    pub capacity_kg: Option<f64>,
    /// Start latitude in degrees.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_lat: Option<f64>,
    /// Start longitude in degrees.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_lon: Option<f64>,
    /// Uninterpreted attributes, preserved verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Vehicle {
    /// Construct a vehicle with an identifier and a capacity.
    ///
    /// # Examples
    /// ```
    /// use fleetroute_core::Vehicle;
    ///
    /// let vehicle = Vehicle::with_capacity("v-1", 100.0);
    /// assert_eq!(vehicle.capacity(), 100.0);
    /// ```
    pub fn with_capacity(id: impl Into<String>, capacity_kg: f64) -> Self {
        Self {
            id: Some(id.into()),
            capacity_kg: Some(capacity_kg),
            ..Self::default()
        }
    }

    /// Set the start position in degrees.
    #[must_use]
    pub const fn with_start(mut self, latitude: f64, longitude: f64) -> Self {
        self.start_lat = Some(latitude);
        self.start_lon = Some(longitude);
        self
    }

    /// Start position, falling back to [`DEFAULT_DEPOT`] when either
    /// coordinate is missing.
    #[must_use]
    pub fn start_position(&self) -> Coord<f64> {
        match (self.start_lat, self.start_lon) {
            (Some(lat), Some(lon)) => Coord { x: lon, y: lat },
            _ => DEFAULT_DEPOT,
        }
    }

    /// Capacity used for feasibility checks; unconstrained vehicles report
    /// an infinite capacity.
    #[must_use]
    pub fn capacity(&self) -> f64 {
        self.capacity_kg.unwrap_or(f64::INFINITY)
    }
}
