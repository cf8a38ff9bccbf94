use crate::shared::frame::Frame;

/// Presents annotated frames and reports whether the user asked to stop.
pub trait FrameDisplay {
    fn show(&mut self, frame: &Frame) -> Result<(), Box<dyn std::error::Error>>;

    /// Polls for a key press, waiting at most a millisecond.
    ///
    /// Returns `true` once any key has been pressed.
    fn key_pressed(&mut self) -> Result<bool, Box<dyn std::error::Error>>;
}
