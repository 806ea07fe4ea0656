pub mod envelope;
pub mod model;
pub mod params;
pub mod validate;
