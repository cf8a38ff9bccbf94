use std::path::PathBuf;

use thiserror::Error;

use crate::shared::constants::{
    DEFAULT_MODEL_PATH, DEFAULT_NMS_THRESHOLD, DEFAULT_SCORE_THRESHOLD, DEFAULT_TOP_K,
};

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("scale must be a positive number, got {0}")]
    Scale(f64),
    #[error("score threshold must be between 0.0 and 1.0, got {0}")]
    ScoreThreshold(f32),
    #[error("NMS threshold must be between 0.0 and 1.0, got {0}")]
    NmsThreshold(f32),
    #[error("top_k must be at least 1, got {0}")]
    TopK(i32),
}

/// Settings shared by the detector and the acquisition loops.
///
/// Built once from command-line input and read-only afterwards.
/// `backend_id` and `target_id` are OpenCV DNN enum values and are passed
/// to the detector untouched.
#[derive(Clone, Debug, PartialEq)]
pub struct DemoConfig {
    pub model_path: PathBuf,
    pub scale: f64,
    pub backend_id: i32,
    pub target_id: i32,
    pub score_threshold: f32,
    pub nms_threshold: f32,
    pub top_k: i32,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from(DEFAULT_MODEL_PATH),
            scale: 1.0,
            backend_id: 0,
            target_id: 0,
            score_threshold: DEFAULT_SCORE_THRESHOLD,
            nms_threshold: DEFAULT_NMS_THRESHOLD,
            top_k: DEFAULT_TOP_K,
        }
    }
}

impl DemoConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(ConfigError::Scale(self.scale));
        }
        if !(0.0..=1.0).contains(&self.score_threshold) {
            return Err(ConfigError::ScoreThreshold(self.score_threshold));
        }
        if !(0.0..=1.0).contains(&self.nms_threshold) {
            return Err(ConfigError::NmsThreshold(self.nms_threshold));
        }
        if self.top_k < 1 {
            return Err(ConfigError::TopK(self.top_k));
        }
        Ok(())
    }
}
