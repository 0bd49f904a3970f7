use crate::config::ArtifactPaths;
use crate::encoder::encode;
use crate::model::{Predict, PredictionError, RbfSvr, StandardScaler, Transform};
use crate::types::{Prediction, VehicleRecord};
use anyhow::{bail, Result};

/// Round to 2 decimal places, the precision both estimates are reported at.
fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Sequences one prediction request: encode the record, scale and predict
/// fuel consumption, then scale and predict CO2 emissions from the fuel
/// estimate alone. Holds the four pre-fitted artifacts for the process
/// lifetime; nothing here is ever mutated after construction.
pub struct Predictor {
    fuel_scaler: Box<dyn Transform>,
    fuel_model: Box<dyn Predict>,
    co2_scaler: Box<dyn Transform>,
    co2_model: Box<dyn Predict>,
}

impl Predictor {
    /// Assemble a predictor from scaler/regressor pairs. Tests pass fakes
    /// through this seam; production code uses [`Predictor::from_artifacts`].
    pub fn new(
        fuel_scaler: impl Transform + 'static,
        fuel_model: impl Predict + 'static,
        co2_scaler: impl Transform + 'static,
        co2_model: impl Predict + 'static,
    ) -> Self {
        Self {
            fuel_scaler: Box::new(fuel_scaler),
            fuel_model: Box::new(fuel_model),
            co2_scaler: Box::new(co2_scaler),
            co2_model: Box::new(co2_model),
        }
    }

    /// Load the four artifact files and check they agree on dimensions, so
    /// a mismatched deployment fails at startup instead of on the first
    /// request.
    pub fn from_artifacts(paths: &ArtifactPaths) -> Result<Self> {
        let fuel_scaler = StandardScaler::load(&paths.fuel_scaler)?;
        let fuel_model = RbfSvr::load(&paths.fuel_model)?;
        let co2_scaler = StandardScaler::load(&paths.co2_scaler)?;
        let co2_model = RbfSvr::load(&paths.co2_model)?;

        if fuel_scaler.dim() != fuel_model.dim() {
            bail!(
                "fuel scaler dimension ({}) != fuel regressor dimension ({})",
                fuel_scaler.dim(),
                fuel_model.dim()
            );
        }
        if co2_scaler.dim() != 1 || co2_model.dim() != 1 {
            bail!(
                "CO2 artifacts must be 1-dimensional, got scaler {} / regressor {}",
                co2_scaler.dim(),
                co2_model.dim()
            );
        }

        tracing::info!(
            "loaded artifacts: fuel dim={} sv={}, co2 dim={} sv={}",
            fuel_scaler.dim(),
            fuel_model.n_support(),
            co2_scaler.dim(),
            co2_model.n_support()
        );

        Ok(Self::new(fuel_scaler, fuel_model, co2_scaler, co2_model))
    }

    /// Run one prediction request to completion. Any encoding failure or
    /// dimension mismatch aborts the request with no partial result.
    pub fn predict(&self, record: &VehicleRecord) -> Result<Prediction, PredictionError> {
        let vector = encode(record)?;
        tracing::debug!("encoded vector: {:?}", vector);

        let scaled = self.fuel_scaler.transform(&vector)?;
        let fuel = round2(self.fuel_model.predict(&scaled)?);

        // CO2 is derived from the rounded fuel estimate only.
        let co2_scaled = self.co2_scaler.transform(&[fuel])?;
        let co2 = round2(self.co2_model.predict(&co2_scaled)?);

        Ok(Prediction {
            fuel_l_per_100km: fuel,
            co2_g_per_km: co2,
        })
    }
}
