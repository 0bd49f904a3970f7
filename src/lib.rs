pub mod config;
pub mod encoder;
pub mod model;
pub mod predictor;
pub mod types;

pub use config::ArtifactPaths;
pub use encoder::{encode, EncodingError};
pub use model::{Predict, PredictionError, RbfSvr, StandardScaler, Transform};
pub use predictor::Predictor;
pub use types::{Prediction, VehicleRecord};
