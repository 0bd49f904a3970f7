use std::path::PathBuf;

/// Locations of the four pre-fitted artifact files. Read once at startup;
/// the files themselves are never written by this process.
#[derive(Debug, Clone)]
pub struct ArtifactPaths {
    pub fuel_scaler: PathBuf,
    pub fuel_model: PathBuf,
    pub co2_scaler: PathBuf,
    pub co2_model: PathBuf,
}

fn path_from_env(var: &str, default: &str) -> PathBuf {
    std::env::var(var)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(default))
}

impl ArtifactPaths {
    /// Resolve artifact paths from env vars, falling back to the bundled
    /// `artifacts/` directory.
    pub fn from_env() -> Self {
        Self {
            fuel_scaler: path_from_env("FUEL_SCALER_PATH", "artifacts/fuel_scaler.json"),
            fuel_model: path_from_env("FUEL_MODEL_PATH", "artifacts/fuel_svr.json"),
            co2_scaler: path_from_env("CO2_SCALER_PATH", "artifacts/co2_scaler.json"),
            co2_model: path_from_env("CO2_MODEL_PATH", "artifacts/co2_svr.json"),
        }
    }
}
