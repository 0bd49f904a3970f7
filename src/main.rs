use anyhow::{Context, Result};
use std::io::Read;

use fuel_co2_predictor::{ArtifactPaths, Predictor, VehicleRecord};

fn read_record() -> Result<VehicleRecord> {
    let raw = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read record file {}", path))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read record from stdin")?;
            buf
        }
    };
    serde_json::from_str(&raw).context("failed to parse vehicle record JSON")
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let paths = ArtifactPaths::from_env();
    let predictor = Predictor::from_artifacts(&paths)?;

    let record = read_record()?;
    tracing::info!(
        "predicting for class={:?} engine={} cylinders={} transmission={:?} fuel={:?}",
        record.vehicle_class,
        record.engine_size,
        record.cylinders,
        record.transmission,
        record.fuel_type
    );

    let prediction = predictor.predict(&record)?;
    println!(
        "The predicted fuel consumption is: {} L/100km",
        prediction.fuel_l_per_100km
    );
    println!(
        "The predicted CO2 emissions are: {} g/km",
        prediction.co2_g_per_km
    );
    Ok(())
}
