use serde::{Deserialize, Serialize};

/// A persisted ride. Field names match the `Rides` table columns, which are
/// also the keys clients see in response bodies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ride {
    #[serde(rename = "rideID")]
    pub ride_id: i64,
    pub created: String,
    #[serde(rename = "startLat")]
    pub start_lat: f64,
    #[serde(rename = "startLong")]
    pub start_long: f64,
    #[serde(rename = "endLat")]
    pub end_lat: f64,
    #[serde(rename = "endLong")]
    pub end_long: f64,
    #[serde(rename = "riderName")]
    pub rider_name: String,
    #[serde(rename = "driverName")]
    pub driver_name: String,
    #[serde(rename = "driverVehicle")]
    pub driver_vehicle: String,
}

/// A validated create payload (no id or creation time yet).
///
/// Coordinates are optional: the payload schema does not require them, and a
/// missing one is left for the store's NOT NULL constraint to reject.
#[derive(Debug, Clone, PartialEq)]
pub struct NewRide {
    pub start_lat: Option<f64>,
    pub start_long: Option<f64>,
    pub end_lat: Option<f64>,
    pub end_long: Option<f64>,
    pub rider_name: String,
    pub driver_name: String,
    pub driver_vehicle: String,
}

/// One page of rides plus the row count across all pages.
#[derive(Debug, Clone)]
pub struct RidePage {
    pub rows: Vec<Ride>,
    pub total_count: i64,
}
