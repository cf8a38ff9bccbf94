use crate::detection::domain::detection::Detection;
use crate::shared::frame::Frame;
use crate::visualization::domain::face_annotator::{annotate, VisualizeOptions};
use crate::visualization::infrastructure::mat_canvas::MatCanvas;

/// Returns an annotated copy of `frame`; the input is left untouched.
pub fn visualize(
    frame: &Frame,
    faces: &[Detection],
    options: &VisualizeOptions,
) -> Result<Frame, Box<dyn std::error::Error>> {
    let mut canvas = MatCanvas::from_frame(frame)?;
    annotate(&mut canvas, faces, options)?;
    Ok(canvas.into_frame(frame.index())?)
}
