use geo::Coord;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A delivery order as received from the request layer.
///
/// Coordinates are WGS84 degrees. The engine reads positions through
/// [`Order::position`], which follows the `geo` convention of
/// `x = longitude` and `y = latitude`.
///
/// Attributes the engine does not interpret are preserved in [`Order::extra`]
/// so they survive the round trip back to the caller.
///
/// # Examples
/// ```
/// use fleetroute_core::Order;
///
/// let order = Order::new("o-1", 40.7128, -74.0060).with_weight(12.5);
/// assert_eq!(order.weight(), 12.5);
/// assert_eq!(order.position().x, -74.0060);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Identifier, unique within one solve request.
    pub id: String,
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
    /// Weight in kilograms. The request layer may send the field as
    /// `weight` instead of `weightKg`; a missing value reads as zero.
    #[serde(default, alias = "weight", skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,
    /// Time spent at the stop in minutes. Carried through to the output
    /// but never consulted by the solver.
    #[serde(default)]
    pub service_duration_min: f64,
    /// Uninterpreted attributes, preserved verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Order {
    /// Construct an order with no weight and no extra attributes.
    ///
    /// # Examples
    /// ```
    /// use fleetroute_core::Order;
    ///
    /// let order = Order::new("o-1", 51.5, -0.1);
    /// assert_eq!(order.weight(), 0.0);
    /// ```
    pub fn new(id: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            id: id.into(),
            latitude,
            longitude,
            weight_kg: None,
            service_duration_min: 0.0,
            extra: Map::new(),
        }
    }

    /// Set the weight in kilograms.
    #[must_use]
    pub const fn with_weight(mut self, weight_kg: f64) -> Self {
        self.weight_kg = Some(weight_kg);
        self
    }

    /// Position of the order, `x = longitude`, `y = latitude`.
    #[must_use]
    pub const fn position(&self) -> Coord<f64> {
        Coord {
            x: self.longitude,
            y: self.latitude,
        }
    }

    /// Weight used for capacity checks. Orders without a weight field weigh
    /// nothing and therefore never fail a capacity check.
    #[must_use]
    pub fn weight(&self) -> f64 {
        self.weight_kg.unwrap_or(0.0)
    }
}
