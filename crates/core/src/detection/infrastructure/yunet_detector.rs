//! YuNet face detector backed by OpenCV's `FaceDetectorYN`.
//!
//! Model loading, backend dispatch, score filtering and NMS happen inside
//! OpenCV. This adapter converts frames to BGR `Mat`s and output rows to
//! [`Detection`]s.
use opencv::core::{Mat, Ptr};
use opencv::objdetect::FaceDetectorYN;
use opencv::prelude::*;

use crate::detection::domain::detection::Detection;
use crate::detection::domain::face_detector::FaceDetector;
use crate::detection::infrastructure::dnn_backend::{backend_name, target_name};
use crate::shared::config::DemoConfig;
use crate::shared::frame::{Frame, FrameSize};
use crate::shared::opencv_mat::{frame_to_bgr_mat, to_cv_size};

pub struct YunetDetector {
    detector: Ptr<FaceDetectorYN>,
    input_size: FrameSize,
}

impl YunetDetector {
    /// Load the model named by `config.model_path`.
    ///
    /// Fails if OpenCV cannot read the model or rejects the
    /// backend/target combination.
    pub fn new(
        config: &DemoConfig,
        input_size: FrameSize,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let model = config
            .model_path
            .to_str()
            .ok_or("model path is not valid UTF-8")?;

        log::info!(
            "Loading {model} (backend: {}, target: {})",
            backend_name(config.backend_id),
            target_name(config.target_id)
        );

        let detector = FaceDetectorYN::create(
            model,
            "",
            to_cv_size(input_size)?,
            config.score_threshold,
            config.nms_threshold,
            config.top_k,
            config.backend_id,
            config.target_id,
        )?;

        Ok(Self {
            detector,
            input_size,
        })
    }
}

impl FaceDetector for YunetDetector {
    fn set_input_size(&mut self, size: FrameSize) -> Result<(), Box<dyn std::error::Error>> {
        self.detector.set_input_size(to_cv_size(size)?)?;
        self.input_size = size;
        Ok(())
    }

    fn detect(&mut self, frame: &Frame) -> Result<Vec<Detection>, Box<dyn std::error::Error>> {
        if frame.size() != self.input_size {
            log::warn!(
                "Frame is {}x{} but detector expects {}x{}",
                frame.width(),
                frame.height(),
                self.input_size.width,
                self.input_size.height
            );
        }

        let image = frame_to_bgr_mat(frame)?;
        let mut faces = Mat::default();
        self.detector.detect(&image, &mut faces)?;

        let mut detections = Vec::with_capacity(faces.rows().max(0) as usize);
        for row in 0..faces.rows() {
            detections.push(Detection::from_row(faces.at_row::<f32>(row)?)?);
        }
        Ok(detections)
    }
}
