use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::{fs, path::Path};
use thiserror::Error;

use crate::encoder::EncodingError;

#[derive(Debug, Error)]
pub enum PredictionError {
    #[error("feature encoding failed: {0}")]
    Encoding(#[from] EncodingError),
    #[error("{stage}: input length {got} does not match fitted dimension {expected}")]
    DimensionMismatch {
        stage: &'static str,
        got: usize,
        expected: usize,
    },
}

/// Pre-fitted affine normalization: subtract mean, divide by scale.
pub trait Transform {
    fn transform(&self, input: &[f64]) -> Result<Vec<f64>, PredictionError>;
}

/// Pre-fitted regressor mapping a feature vector to one scalar.
pub trait Predict {
    fn predict(&self, input: &[f64]) -> Result<f64, PredictionError>;
}

/// Standard scaler parameters as fitted at training time.
#[derive(Debug, Deserialize)]
pub struct StandardScaler {
    mean: Vec<f64>,
    scale: Vec<f64>,
}

impl StandardScaler {
    /// Load fitted scaler parameters from a JSON artifact.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read scaler artifact {}", path.display()))?;
        let scaler: StandardScaler = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse scaler artifact {}", path.display()))?;
        if scaler.mean.len() != scaler.scale.len() {
            bail!(
                "scaler artifact {} has mean length {} but scale length {}",
                path.display(),
                scaler.mean.len(),
                scaler.scale.len()
            );
        }
        if scaler.scale.iter().any(|s| *s == 0.0) {
            bail!("scaler artifact {} has a zero scale entry", path.display());
        }
        Ok(scaler)
    }

    /// Dimension the scaler was fitted on.
    pub fn dim(&self) -> usize {
        self.mean.len()
    }
}

impl Transform for StandardScaler {
    fn transform(&self, input: &[f64]) -> Result<Vec<f64>, PredictionError> {
        if input.len() != self.mean.len() {
            return Err(PredictionError::DimensionMismatch {
                stage: "scaler transform",
                got: input.len(),
                expected: self.mean.len(),
            });
        }
        Ok(input
            .iter()
            .zip(self.mean.iter().zip(self.scale.iter()))
            .map(|(x, (m, s))| (x - m) / s)
            .collect())
    }
}

/// Support-vector regressor with an RBF kernel, as fitted at training time.
#[derive(Debug, Deserialize)]
pub struct RbfSvr {
    support_vectors: Vec<Vec<f64>>,
    dual_coef: Vec<f64>,
    intercept: f64,
    gamma: f64,
}

impl RbfSvr {
    /// Load fitted regressor parameters from a JSON artifact.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read regressor artifact {}", path.display()))?;
        let svr: RbfSvr = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse regressor artifact {}", path.display()))?;
        if svr.support_vectors.is_empty() {
            bail!("regressor artifact {} has no support vectors", path.display());
        }
        let dim = svr.support_vectors[0].len();
        if svr.support_vectors.iter().any(|sv| sv.len() != dim) {
            bail!(
                "regressor artifact {} has ragged support vectors",
                path.display()
            );
        }
        if svr.dual_coef.len() != svr.support_vectors.len() {
            bail!(
                "regressor artifact {} has {} dual coefficients for {} support vectors",
                path.display(),
                svr.dual_coef.len(),
                svr.support_vectors.len()
            );
        }
        Ok(svr)
    }

    /// Dimension the regressor was fitted on.
    pub fn dim(&self) -> usize {
        self.support_vectors[0].len()
    }

    /// Number of support vectors retained by the fit.
    pub fn n_support(&self) -> usize {
        self.support_vectors.len()
    }
}

impl Predict for RbfSvr {
    fn predict(&self, input: &[f64]) -> Result<f64, PredictionError> {
        let dim = self.dim();
        if input.len() != dim {
            return Err(PredictionError::DimensionMismatch {
                stage: "regressor predict",
                got: input.len(),
                expected: dim,
            });
        }
        let mut acc = self.intercept;
        for (sv, coef) in self.support_vectors.iter().zip(self.dual_coef.iter()) {
            let sq_dist: f64 = input
                .iter()
                .zip(sv.iter())
                .map(|(x, s)| (x - s) * (x - s))
                .sum();
            acc += coef * (-self.gamma * sq_dist).exp();
        }
        Ok(acc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scaler(mean: Vec<f64>, scale: Vec<f64>) -> StandardScaler {
        StandardScaler { mean, scale }
    }

    #[test]
    fn transform_applies_fitted_affine() {
        let s = scaler(vec![1.0, 2.0], vec![2.0, 4.0]);
        let out = s.transform(&[3.0, 10.0]).unwrap();
        assert_eq!(out, vec![1.0, 2.0]);
    }

    #[test]
    fn transform_rejects_wrong_width() {
        let s = scaler(vec![0.0; 8], vec![1.0; 8]);
        let err = s.transform(&[1.0, 2.0]).unwrap_err();
        assert!(matches!(
            err,
            PredictionError::DimensionMismatch {
                got: 2,
                expected: 8,
                ..
            }
        ));
    }

    #[test]
    fn svr_predicts_intercept_at_support_vector_with_unit_coef() {
        // At a support vector the kernel term is exp(0) = 1.
        let svr = RbfSvr {
            support_vectors: vec![vec![1.0, -1.0]],
            dual_coef: vec![2.5],
            intercept: 10.0,
            gamma: 0.5,
        };
        let y = svr.predict(&[1.0, -1.0]).unwrap();
        assert!((y - 12.5).abs() < 1e-12);
    }

    #[test]
    fn svr_rejects_wrong_width() {
        let svr = RbfSvr {
            support_vectors: vec![vec![0.0; 8]],
            dual_coef: vec![1.0],
            intercept: 0.0,
            gamma: 0.1,
        };
        assert!(svr.predict(&[0.0; 3]).is_err());
    }
}
