use rides_core::model::NewRide;
use rides_core::validate::validate_new_ride;

use serde_json::{Value, json};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn valid_payload() -> Value {
    json!({
        "start_lat": 0,
        "start_long": 0,
        "end_lat": 0,
        "end_long": 0,
        "rider_name": "John Doe",
        "driver_name": "Tony",
        "driver_vehicle": "Honda X",
    })
}

fn with(field: &str, value: Value) -> Value {
    let mut payload = valid_payload();
    payload[field] = value;
    payload
}

fn message_for(payload: &Value) -> String {
    validate_new_ride(payload).unwrap_err().message
}

// ---------------------------------------------------------------------------
// Accepted payloads
// ---------------------------------------------------------------------------

#[test]
fn test_valid_payload_is_accepted() {
    let ride = validate_new_ride(&valid_payload()).unwrap();
    assert_eq!(
        ride,
        NewRide {
            start_lat: Some(0.0),
            start_long: Some(0.0),
            end_lat: Some(0.0),
            end_long: Some(0.0),
            rider_name: "John Doe".into(),
            driver_name: "Tony".into(),
            driver_vehicle: "Honda X".into(),
        }
    );
}

#[test]
fn test_bounds_are_inclusive() {
    let payload = json!({
        "start_lat": -90,
        "start_long": 180,
        "end_lat": 90,
        "end_long": -180,
        "rider_name": "a",
        "driver_name": "b",
        "driver_vehicle": "c",
    });
    let ride = validate_new_ride(&payload).unwrap();
    assert_eq!(ride.start_lat, Some(-90.0));
    assert_eq!(ride.end_long, Some(-180.0));
}

#[test]
fn test_missing_coordinates_pass_through() {
    let mut payload = valid_payload();
    payload.as_object_mut().unwrap().remove("end_long");
    let ride = validate_new_ride(&payload).unwrap();
    assert_eq!(ride.end_long, None);
}

#[test]
fn test_numeric_strings_are_coerced() {
    let ride = validate_new_ride(&with("start_lat", json!("12.5"))).unwrap();
    assert_eq!(ride.start_lat, Some(12.5));
}

// ---------------------------------------------------------------------------
// Rejected payloads
// ---------------------------------------------------------------------------

#[test]
fn test_latitude_out_of_range() {
    assert_eq!(
        message_for(&with("start_lat", json!(-100))),
        "\"start_lat\" must be greater than or equal to -90"
    );
    assert_eq!(
        message_for(&with("end_lat", json!(90.5))),
        "\"end_lat\" must be less than or equal to 90"
    );
}

#[test]
fn test_longitude_out_of_range() {
    assert_eq!(
        message_for(&with("start_long", json!(181))),
        "\"start_long\" must be less than or equal to 180"
    );
    assert_eq!(
        message_for(&with("end_long", json!(-180.01))),
        "\"end_long\" must be greater than or equal to -180"
    );
}

#[test]
fn test_empty_names_are_rejected() {
    for field in ["rider_name", "driver_name", "driver_vehicle"] {
        assert_eq!(
            message_for(&with(field, json!(""))),
            format!("\"{field}\" is not allowed to be empty")
        );
    }
}

#[test]
fn test_missing_name_counts_as_empty() {
    let mut payload = valid_payload();
    payload.as_object_mut().unwrap().remove("driver_vehicle");
    assert_eq!(
        message_for(&payload),
        "\"driver_vehicle\" is not allowed to be empty"
    );
}

#[test]
fn test_wrong_types() {
    assert_eq!(
        message_for(&with("start_long", json!("east"))),
        "\"start_long\" must be a number"
    );
    assert_eq!(
        message_for(&with("end_lat", Value::Null)),
        "\"end_lat\" must be a number"
    );
    assert_eq!(
        message_for(&with("rider_name", json!(42))),
        "\"rider_name\" must be a string"
    );
}

#[test]
fn test_only_first_failure_is_reported() {
    let mut payload = with("end_long", json!(500));
    payload["start_lat"] = json!(-100);
    payload["rider_name"] = json!("");
    assert_eq!(
        message_for(&payload),
        "\"start_lat\" must be greater than or equal to -90"
    );
}

#[test]
fn test_unknown_keys_are_rejected() {
    let payload = with("tip", json!(5));
    assert_eq!(message_for(&payload), "\"tip\" is not allowed");
}

#[test]
fn test_field_errors_take_precedence_over_unknown_keys() {
    let mut payload = with("tip", json!(5));
    payload["driver_name"] = json!("");
    assert_eq!(
        message_for(&payload),
        "\"driver_name\" is not allowed to be empty"
    );
}

#[test]
fn test_non_object_payload() {
    assert_eq!(message_for(&json!([1, 2])), "\"value\" must be of type object");
}


#[test]
fn test_blank_coordinate_strings_are_not_numbers() {
    assert_eq!(
        message_for(&with("start_lat", json!(""))),
        "\"start_lat\" must be a number"
    );
    assert_eq!(
        message_for(&with("end_long", json!("   "))),
        "\"end_long\" must be a number"
    );
}

#[test]
fn test_infinite_coordinates() {
    assert_eq!(
        message_for(&with("start_long", json!("Infinity"))),
        "\"start_long\" cannot be infinity"
    );
    assert_eq!(
        message_for(&with("end_lat", json!("-1e400"))),
        "\"end_lat\" cannot be infinity"
    );
}
