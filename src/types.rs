use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct VehicleRecord {
    pub vehicle_class: String,  // one of 14 recognized classes, e.g. "Compact"
    pub engine_size: f64,       // liters, 0.0..=10.0
    pub cylinders: u32,         // 0..=16
    pub transmission: String,   // e.g. "AS"
    pub co2_rating: f64,        // collected with the record but never encoded
    pub fuel_type: String,      // "D", "E", "X" or "Z"
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prediction {
    /// Estimated fuel consumption in L/100km, rounded to 2 decimals.
    pub fuel_l_per_100km: f64,
    /// Estimated CO2 emissions in g/km, rounded to 2 decimals. Derived
    /// solely from the fuel estimate, not from the feature vector.
    pub co2_g_per_km: f64,
}
