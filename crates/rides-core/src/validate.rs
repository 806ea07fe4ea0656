//! Validation of create-ride payloads.
//!
//! Fields are checked one after another in a fixed order and the first
//! failure wins; later fields are not inspected once one has failed.

use serde_json::{Map, Value};
use thiserror::Error;

use crate::model::NewRide;
use crate::params::parse_number;

/// A rejected payload. The message names the offending field.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct ValidationError {
    pub message: String,
}

impl ValidationError {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Inclusive bounds for a coordinate.
#[derive(Debug, Clone, Copy)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

pub const LATITUDE: Range = Range {
    min: -90.0,
    max: 90.0,
};

pub const LONGITUDE: Range = Range {
    min: -180.0,
    max: 180.0,
};

/// Every key a create payload may carry, in the order they are validated.
pub const RIDE_FIELDS: [&str; 7] = [
    "start_lat",
    "start_long",
    "end_lat",
    "end_long",
    "rider_name",
    "driver_name",
    "driver_vehicle",
];

/// Validate a create payload and turn it into a [`NewRide`].
pub fn validate_new_ride(payload: &Value) -> Result<NewRide, ValidationError> {
    let obj = payload
        .as_object()
        .ok_or_else(|| ValidationError::new("\"value\" must be of type object"))?;

    let start_lat = coordinate(obj, "start_lat", LATITUDE)?;
    let start_long = coordinate(obj, "start_long", LONGITUDE)?;
    let end_lat = coordinate(obj, "end_lat", LATITUDE)?;
    let end_long = coordinate(obj, "end_long", LONGITUDE)?;
    let rider_name = non_empty(obj, "rider_name")?;
    let driver_name = non_empty(obj, "driver_name")?;
    let driver_vehicle = non_empty(obj, "driver_vehicle")?;
    reject_unknown_keys(obj)?;

    Ok(NewRide {
        start_lat,
        start_long,
        end_lat,
        end_long,
        rider_name,
        driver_name,
        driver_vehicle,
    })
}

/// An optional number within `range`. Numeric strings are accepted; blank
/// ones are not, even though `parse_number` reads them as 0.
fn coordinate(
    obj: &Map<String, Value>,
    field: &str,
    range: Range,
) -> Result<Option<f64>, ValidationError> {
    let value = match obj.get(field) {
        None => return Ok(None),
        Some(Value::Number(n)) => n.as_f64().unwrap_or(f64::NAN),
        Some(Value::String(s)) if !s.trim().is_empty() => parse_number(s),
        Some(_) => f64::NAN,
    };
    if value.is_nan() {
        return Err(ValidationError::new(format!("\"{field}\" must be a number")));
    }
    if value.is_infinite() {
        return Err(ValidationError::new(format!("\"{field}\" cannot be infinity")));
    }
    if value < range.min {
        return Err(ValidationError::new(format!(
            "\"{field}\" must be greater than or equal to {}",
            range.min
        )));
    }
    if value > range.max {
        return Err(ValidationError::new(format!(
            "\"{field}\" must be less than or equal to {}",
            range.max
        )));
    }
    Ok(Some(value))
}

/// A string of at least one character. Missing counts as empty.
fn non_empty(obj: &Map<String, Value>, field: &str) -> Result<String, ValidationError> {
    match obj.get(field) {
        Some(Value::String(s)) if !s.is_empty() => Ok(s.clone()),
        None | Some(Value::String(_)) => Err(ValidationError::new(format!(
            "\"{field}\" is not allowed to be empty"
        ))),
        Some(_) => Err(ValidationError::new(format!("\"{field}\" must be a string"))),
    }
}

fn reject_unknown_keys(obj: &Map<String, Value>) -> Result<(), ValidationError> {
    match obj.keys().find(|k| !RIDE_FIELDS.contains(&k.as_str())) {
        Some(key) => Err(ValidationError::new(format!("\"{key}\" is not allowed"))),
        None => Ok(()),
    }
}
