use crate::shared::frame::FrameSize;

/// Properties a frame source reports when it is opened.
///
/// Still images are described as a single-frame source with `fps = 0`.
#[derive(Clone, Debug, PartialEq)]
pub struct VideoMetadata {
    pub width: u32,
    pub height: u32,
    pub fps: f64,
    pub total_frames: usize,
}

impl VideoMetadata {
    /// Native frame size as reported by the source.
    pub fn frame_size(&self) -> FrameSize {
        FrameSize::new(self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_size_uses_native_dimensions() {
        let meta = VideoMetadata {
            width: 1920,
            height: 1080,
            fps: 30.0,
            total_frames: 900,
        };
        assert_eq!(meta.frame_size(), FrameSize::new(1920, 1080));
    }

    #[test]
    fn test_image_metadata() {
        let meta = VideoMetadata {
            width: 800,
            height: 600,
            fps: 0.0,
            total_frames: 1,
        };
        assert_eq!(meta.total_frames, 1);
        assert_eq!(meta.fps, 0.0);
        assert_eq!(meta.clone(), meta);
    }
}
