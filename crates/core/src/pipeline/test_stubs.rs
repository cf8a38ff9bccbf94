//! Stub adapters shared by the use-case tests.

use std::path::Path;
use std::sync::{Arc, Mutex};

use crate::detection::domain::detection::{BoundingBox, Detection};
use crate::detection::domain::face_detector::FaceDetector;
use crate::detection::domain::face_landmarks::FaceLandmarks;
use crate::display::domain::frame_display::FrameDisplay;
use crate::shared::frame::{Frame, FrameSize};
use crate::shared::video_metadata::VideoMetadata;
use crate::video::domain::video_reader::VideoReader;

pub fn solid_frame(width: u32, height: u32, index: usize) -> Frame {
    Frame::new(vec![128u8; (width * height * 3) as usize], width, height, 3, index)
}

pub fn sample_detection() -> Detection {
    Detection {
        bbox: BoundingBox {
            x: 4.0,
            y: 4.0,
            width: 10.0,
            height: 10.0,
        },
        landmarks: FaceLandmarks::new([(6.0, 7.0), (11.0, 7.0), (9.0, 9.0), (7.0, 12.0), (11.0, 12.0)]),
        score: 0.9,
    }
}

/// Frame source that either fails to open or replays a fixed list of frames.
pub struct StubReader {
    metadata: Option<VideoMetadata>,
    frames: Vec<Result<Frame, String>>,
}

impl StubReader {
    pub fn unopenable() -> Self {
        Self {
            metadata: None,
            frames: Vec::new(),
        }
    }

    pub fn with_frames(width: u32, height: u32, frames: Vec<Frame>) -> Self {
        Self::with_results(width, height, frames.into_iter().map(Ok).collect())
    }

    pub fn with_results(width: u32, height: u32, frames: Vec<Result<Frame, String>>) -> Self {
        Self {
            metadata: Some(VideoMetadata {
                width,
                height,
                fps: 30.0,
                total_frames: frames.len(),
            }),
            frames,
        }
    }
}

impl VideoReader for StubReader {
    fn open(&mut self, _path: &Path) -> Result<VideoMetadata, Box<dyn std::error::Error>> {
        self.metadata.clone().ok_or_else(|| "cannot open".into())
    }

    fn frames(
        &mut self,
    ) -> Box<dyn Iterator<Item = Result<Frame, Box<dyn std::error::Error>>> + '_> {
        Box::new(self.frames.drain(..).map(|f| f.map_err(Into::into)))
    }

    fn close(&mut self) {
        self.frames.clear();
    }
}

#[derive(Default)]
pub struct DetectorLog {
    pub input_sizes: Vec<FrameSize>,
    pub detected_sizes: Vec<FrameSize>,
}

/// Detector returning a fixed set of faces and recording every call.
pub struct StubDetector {
    faces: Vec<Detection>,
    fail: bool,
    pub log: Arc<Mutex<DetectorLog>>,
}

impl StubDetector {
    pub fn new(faces: Vec<Detection>) -> Self {
        Self {
            faces,
            fail: false,
            log: Arc::new(Mutex::new(DetectorLog::default())),
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new(Vec::new())
        }
    }
}

impl FaceDetector for StubDetector {
    fn set_input_size(&mut self, size: FrameSize) -> Result<(), Box<dyn std::error::Error>> {
        self.log.lock().unwrap().input_sizes.push(size);
        Ok(())
    }

    fn detect(&mut self, frame: &Frame) -> Result<Vec<Detection>, Box<dyn std::error::Error>> {
        self.log.lock().unwrap().detected_sizes.push(frame.size());
        if self.fail {
            return Err("inference failed".into());
        }
        Ok(self.faces.clone())
    }
}

/// Display that reports a key press after a fixed number of polls.
pub struct StubDisplay {
    polls_until_key: usize,
    pub shown: Arc<Mutex<Vec<Frame>>>,
}

impl StubDisplay {
    pub fn key_after(polls: usize) -> Self {
        Self {
            polls_until_key: polls,
            shown: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl FrameDisplay for StubDisplay {
    fn show(&mut self, frame: &Frame) -> Result<(), Box<dyn std::error::Error>> {
        self.shown.lock().unwrap().push(frame.clone());
        Ok(())
    }

    fn key_pressed(&mut self) -> Result<bool, Box<dyn std::error::Error>> {
        if self.polls_until_key == 0 {
            return Ok(true);
        }
        self.polls_until_key -= 1;
        Ok(false)
    }
}
