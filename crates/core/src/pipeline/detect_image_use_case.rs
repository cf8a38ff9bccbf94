use std::path::Path;

use crate::detection::domain::face_detector::FaceDetector;
use crate::display::domain::frame_display::FrameDisplay;
use crate::pipeline::frame_timer::FrameTimer;
use crate::pipeline::pipeline_error::PipelineError;
use crate::pipeline::run_stats::RunStats;
use crate::shared::frame::Frame;
use crate::video::domain::video_reader::VideoReader;
use crate::visualization::domain::face_annotator::VisualizeOptions;
use crate::visualization::visualize::visualize;

/// Still-image loop: read → resize → (detect → visualize → show) until a key.
///
/// Detection reruns on the same frame every iteration so the overlay shows
/// live latency.
pub struct DetectImageUseCase {
    reader: Box<dyn VideoReader>,
    detector: Box<dyn FaceDetector>,
    display: Box<dyn FrameDisplay>,
    scale: f64,
    verbose: bool,
}

impl DetectImageUseCase {
    pub fn new(
        reader: Box<dyn VideoReader>,
        detector: Box<dyn FaceDetector>,
        display: Box<dyn FrameDisplay>,
        scale: f64,
        verbose: bool,
    ) -> Self {
        Self {
            reader,
            detector,
            display,
            scale,
            verbose,
        }
    }

    pub fn execute(&mut self, input_path: &Path) -> Result<RunStats, PipelineError> {
        let image = match self.read_image(input_path) {
            Ok(frame) => frame,
            Err(source) => {
                log::error!("Cannot read image: {}", input_path.display());
                return Err(PipelineError::ImageUnreadable {
                    path: input_path.to_path_buf(),
                    source,
                });
            }
        };

        let size = image.size().scaled(self.scale);
        if size.is_empty() {
            return Err(PipelineError::EmptyFrame {
                width: size.width,
                height: size.height,
            });
        }
        let image = image.resized(size).map_err(PipelineError::Source)?;
        self.detector
            .set_input_size(size)
            .map_err(PipelineError::Detector)?;

        let mut timer = FrameTimer::new();
        let mut stats = RunStats::default();
        while !self.display.key_pressed().map_err(PipelineError::Display)? {
            timer.start();
            let faces = self.detector.detect(&image).map_err(PipelineError::Detector)?;
            timer.stop();
            log::debug!("time = {:.3}ms", timer.elapsed_ms());

            let options = VisualizeOptions {
                verbose: self.verbose,
                fps: Some(timer.fps()),
                ..Default::default()
            };
            let annotated = visualize(&image, &faces, &options).map_err(PipelineError::Visualize)?;
            self.display
                .show(&annotated)
                .map_err(PipelineError::Display)?;

            stats.record(timer.elapsed_ms(), faces.len());
            timer.reset();
        }

        Ok(stats)
    }

    fn read_image(&mut self, path: &Path) -> Result<Frame, Box<dyn std::error::Error>> {
        self.reader.open(path)?;
        let frame = self.reader.frames().next().ok_or("no frames in image")??;
        self.reader.close();
        Ok(frame)
    }
}
