use opencv::highgui;

use crate::display::domain::frame_display::FrameDisplay;
use crate::shared::constants::WINDOW_TITLE;
use crate::shared::frame::Frame;
use crate::shared::opencv_mat::frame_to_bgr_mat;

/// OpenCV highgui window.
pub struct HighguiDisplay {
    title: String,
    opened: bool,
}

impl HighguiDisplay {
    pub fn new() -> Self {
        Self {
            title: WINDOW_TITLE.to_string(),
            opened: false,
        }
    }
}

impl Default for HighguiDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameDisplay for HighguiDisplay {
    fn show(&mut self, frame: &Frame) -> Result<(), Box<dyn std::error::Error>> {
        if !self.opened {
            highgui::named_window(&self.title, highgui::WINDOW_AUTOSIZE)?;
            self.opened = true;
        }
        let bgr = frame_to_bgr_mat(frame)?;
        highgui::imshow(&self.title, &bgr)?;
        Ok(())
    }

    fn key_pressed(&mut self) -> Result<bool, Box<dyn std::error::Error>> {
        Ok(highgui::wait_key(1)? >= 0)
    }
}

impl Drop for HighguiDisplay {
    fn drop(&mut self) {
        if self.opened {
            let _ = highgui::destroy_window(&self.title);
        }
    }
}
