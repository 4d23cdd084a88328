//! OSRM API response types for the Route service.
//!
//! This module provides deserialisation types for the OSRM Route API
//! response format. The Route API computes the fastest route between the
//! supplied coordinates; the engine only consumes its driving distance.
//!
//! See: <http://project-osrm.org/docs/v5.24.0/api/#route-service>

use serde::Deserialize;

/// OSRM Route API response.
///
/// The response contains a list of candidate routes on success or an error
/// message on failure. The `code` field indicates the response status.
#[derive(Debug, Deserialize)]
pub struct RouteResponse {
    /// Status code from OSRM.
    ///
    /// Common values:
    /// - `"Ok"` - Request was successful
    /// - `"InvalidQuery"` - Invalid query parameters
    /// - `"NoRoute"` - No route found between the coordinates
    pub code: String,

    /// Optional error message when `code` is not `"Ok"`.
    pub message: Option<String>,

    /// Candidate routes, best first. Only the first is consulted.
    pub routes: Option<Vec<RouteSummary>>,
}

/// Summary of one candidate route.
#[derive(Debug, Deserialize)]
pub struct RouteSummary {
    /// Driving distance in meters.
    pub distance: Option<f64>,
}

impl RouteResponse {
    /// Check if the response indicates success.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.code == "Ok"
    }

    /// Distance of the best route in meters, if present and valid.
    ///
    /// Negative, NaN and infinite values are rejected so they never leak
    /// into minimum-distance comparisons.
    #[must_use]
    pub fn distance_meters(&self) -> Option<f64> {
        self.routes
            .as_ref()
            .and_then(|routes| routes.first())
            .and_then(|route| route.distance)
            .filter(|&meters| meters >= 0.0 && meters.is_finite())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialise_success_response() {
        let json = r#"{
            "code": "Ok",
            "routes": [{"distance": 1532.9, "duration": 210.0}]
        }"#;

        let response: RouteResponse = serde_json::from_str(json).expect("should deserialise");

        assert!(response.is_ok());
        assert!(response.message.is_none());
        assert_eq!(response.distance_meters(), Some(1532.9));
    }

    #[test]
    fn deserialise_error_response() {
        let json = r#"{
            "code": "NoRoute",
            "message": "Impossible route between points"
        }"#;

        let response: RouteResponse = serde_json::from_str(json).expect("should deserialise");

        assert!(!response.is_ok());
        assert_eq!(
            response.message,
            Some("Impossible route between points".to_string())
        );
        assert_eq!(response.distance_meters(), None);
    }

    #[test]
    fn rejects_invalid_distances() {
        let response = RouteResponse {
            code: "Ok".to_string(),
            message: None,
            routes: Some(vec![RouteSummary {
                distance: Some(-10.0),
            }]),
        };
        assert_eq!(response.distance_meters(), None);

        let response = RouteResponse {
            code: "Ok".to_string(),
            message: None,
            routes: Some(vec![RouteSummary {
                distance: Some(f64::NAN),
            }]),
        };
        assert_eq!(response.distance_meters(), None);
    }

    #[test]
    fn missing_routes_yield_no_distance() {
        let response = RouteResponse {
            code: "Ok".to_string(),
            message: None,
            routes: None,
        };
        assert_eq!(response.distance_meters(), None);
    }
}
