use crate::detection::domain::detection::Detection;
use crate::shared::frame::{Frame, FrameSize};

/// Domain interface for face detection.
///
/// The detector expects frames of the size last passed to
/// `set_input_size`; callers reconfigure it whenever that size changes.
pub trait FaceDetector {
    fn set_input_size(&mut self, size: FrameSize) -> Result<(), Box<dyn std::error::Error>>;

    /// Detections in the order the underlying detector returns them.
    fn detect(&mut self, frame: &Frame) -> Result<Vec<Detection>, Box<dyn std::error::Error>>;
}
