use crate::types::VehicleRecord;
use thiserror::Error;

/// Recognized vehicle classes; a class encodes to its position in this list.
pub const VEHICLE_CLASSES: [&str; 14] = [
    "Two-seater",
    "Minicompact",
    "Compact",
    "Subcompact",
    "Mid-size",
    "Full-size",
    "SUV: Small",
    "SUV: Standard",
    "Minivan",
    "Station wagon: Small",
    "Station wagon: Mid-size",
    "Pickup truck: Small",
    "Special purpose vehicle",
    "Pickup truck: Standard",
];

/// Recognized transmissions; a transmission encodes to its position here.
/// The ordering is part of the fitted schema and must not change.
pub const TRANSMISSIONS: [&str; 5] = ["AV", "AM", "A", "AS", "M"];

/// Recognized fuel types; a fuel type expands to a 4-slot one-hot block
/// with the 1 at its position here.
pub const FUEL_TYPES: [&str; 4] = ["D", "E", "X", "Z"];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EncodingError {
    #[error("unrecognized vehicle class {0:?}")]
    UnknownVehicleClass(String),
    #[error("unrecognized transmission {0:?}")]
    UnknownTransmission(String),
    #[error("unrecognized fuel type {0:?}")]
    UnknownFuelType(String),
}

fn ordinal(table: &[&str], value: &str) -> Option<f64> {
    table.iter().position(|c| *c == value).map(|i| i as f64)
}

/// Encode a vehicle record into the feature vector the fitted artifacts
/// expect: vehicle-class ordinal, engine size, cylinder count, transmission
/// ordinal, then the 4-slot fuel-type one-hot block.
///
/// The one-hot block is a hard truncation point: once it is appended,
/// encoding stops, and no field that sits after it in this consumption
/// order is ever emitted. The record's CO2 rating sits past that point, so
/// it never reaches the vector. The scaler and regressor were fitted on
/// exactly this layout; downstream code must not assume any wider vector
/// exists.
///
/// Unrecognized category values fail with an explicit [`EncodingError`]
/// rather than corrupting the vector.
pub fn encode(record: &VehicleRecord) -> Result<Vec<f64>, EncodingError> {
    let class = ordinal(&VEHICLE_CLASSES, &record.vehicle_class)
        .ok_or_else(|| EncodingError::UnknownVehicleClass(record.vehicle_class.clone()))?;
    let trans = ordinal(&TRANSMISSIONS, &record.transmission)
        .ok_or_else(|| EncodingError::UnknownTransmission(record.transmission.clone()))?;
    let fuel = ordinal(&FUEL_TYPES, &record.fuel_type)
        .ok_or_else(|| EncodingError::UnknownFuelType(record.fuel_type.clone()))?;

    let mut out = Vec::with_capacity(4 + FUEL_TYPES.len());
    out.push(class);
    out.push(record.engine_size);
    out.push(record.cylinders as f64);
    out.push(trans);

    let mut one_hot = [0.0; FUEL_TYPES.len()];
    one_hot[fuel as usize] = 1.0;
    out.extend_from_slice(&one_hot);

    // Truncation point: nothing after the fuel-type block is encoded.
    Ok(out)
}
