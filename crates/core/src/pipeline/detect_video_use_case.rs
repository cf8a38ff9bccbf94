use std::path::Path;

use crate::detection::domain::face_detector::FaceDetector;
use crate::display::domain::frame_display::FrameDisplay;
use crate::pipeline::frame_timer::FrameTimer;
use crate::pipeline::pipeline_error::PipelineError;
use crate::pipeline::run_stats::RunStats;
use crate::video::domain::video_reader::VideoReader;
use crate::visualization::domain::face_annotator::VisualizeOptions;
use crate::visualization::visualize::visualize;

/// Video loop: (grab → resize → detect → visualize → show) until a key
/// press or the end of the stream.
pub struct DetectVideoUseCase {
    reader: Box<dyn VideoReader>,
    detector: Box<dyn FaceDetector>,
    display: Box<dyn FrameDisplay>,
    scale: f64,
    verbose: bool,
}

impl DetectVideoUseCase {
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

    /// Runs until the user presses a key or frames run out.
    ///
    /// A stream that cannot be opened ends the loop the same way an
    /// exhausted one does.
    pub fn execute(&mut self, input_path: &Path) -> Result<RunStats, PipelineError> {
        let mut stats = RunStats::default();
        let metadata = match self.reader.open(input_path) {
            Ok(metadata) => metadata,
            Err(e) => {
                log::error!("Cannot open video {}: {e}", input_path.display());
                log::warn!("No frames grabbed!");
                return Ok(stats);
            }
        };
        log::info!(
            "Opened {}: {}x{} @ {:.2} fps, {} frames",
            input_path.display(),
            metadata.width,
            metadata.height,
            metadata.fps,
            metadata.total_frames
        );

        let size = metadata.frame_size().scaled(self.scale);
        if size.is_empty() {
            self.reader.close();
            return Err(PipelineError::EmptyFrame {
                width: size.width,
                height: size.height,
            });
        }
        self.detector
            .set_input_size(size)
            .map_err(PipelineError::Detector)?;

        let mut timer = FrameTimer::new();
        let mut frames = self.reader.frames();
        while !self.display.key_pressed().map_err(PipelineError::Display)? {
            let frame = match frames.next() {
                Some(Ok(frame)) => frame,
                Some(Err(e)) => {
                    log::debug!("Decode failed: {e}");
                    log::warn!("No frames grabbed!");
                    break;
                }
                None => {
                    log::warn!("No frames grabbed!");
                    break;
                }
            };
            let frame = frame.resized(size).map_err(PipelineError::Source)?;

            timer.start();
            let faces = self.detector.detect(&frame).map_err(PipelineError::Detector)?;
            timer.stop();
            log::debug!("frame {}: time = {:.3}ms", frame.index(), timer.elapsed_ms());

            let options = VisualizeOptions {
                verbose: self.verbose,
                fps: Some(timer.fps()),
                ..Default::default()
            };
            let annotated = visualize(&frame, &faces, &options).map_err(PipelineError::Visualize)?;
            self.display
                .show(&annotated)
                .map_err(PipelineError::Display)?;

            stats.record(timer.elapsed_ms(), faces.len());
            timer.reset();
        }
        drop(frames);
        self.reader.close();
        if stats.frames < metadata.total_frames {
            log::info!(
                "Stopped after {} of {} frames",
                stats.frames,
                metadata.total_frames
            );
        }

        Ok(stats)
    }
}
