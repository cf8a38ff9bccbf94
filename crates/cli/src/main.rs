use std::path::{Path, PathBuf};
use std::process;

use clap::error::ErrorKind;
use clap::Parser;

use yunet_demo_core::detection::domain::face_detector::FaceDetector;
use yunet_demo_core::detection::infrastructure::model_resolver;
use yunet_demo_core::detection::infrastructure::yunet_detector::YunetDetector;
use yunet_demo_core::display::infrastructure::highgui_display::HighguiDisplay;
use yunet_demo_core::pipeline::detect_image_use_case::DetectImageUseCase;
use yunet_demo_core::pipeline::detect_video_use_case::DetectVideoUseCase;
use yunet_demo_core::pipeline::pipeline_error::PipelineError;
use yunet_demo_core::pipeline::run_stats::RunStats;
use yunet_demo_core::shared::config::DemoConfig;
use yunet_demo_core::shared::constants::{
    DEFAULT_MODEL_PATH, DEFAULT_NMS_THRESHOLD, DEFAULT_SCORE_THRESHOLD, DEFAULT_TOP_K,
    INITIAL_INPUT_SIZE,
};
use yunet_demo_core::shared::frame::FrameSize;
use yunet_demo_core::video::infrastructure::ffmpeg_reader::FfmpegReader;
use yunet_demo_core::video::infrastructure::image_file_reader::ImageFileReader;

/// Exit status used when only the usage text was printed.
const HELP_EXIT_CODE: i32 = -1;

/// YuNet face detection on a still image or a video stream.
///
/// Press any key in the preview window to quit.
#[derive(Parser, Debug)]
#[command(name = "yunet-demo")]
struct Cli {
    /// Path to the input image.
    #[arg(long = "input_image")]
    input_image: Option<PathBuf>,

    /// Path to the input video.
    #[arg(long = "input_video")]
    input_video: Option<PathBuf>,

    /// Scale factor applied to the input dimensions before detection.
    #[arg(long, visible_alias = "sc", default_value_t = 1.0)]
    scale: f64,

    /// Backend: 0 default, 1 Halide, 2 Intel's Inference Engine, 3 OpenCV,
    /// 4 VKCOM, 5 CUDA.
    #[arg(long = "backend_id", default_value_t = 0, allow_negative_numbers = true)]
    backend_id: i32,

    /// Target: 0 CPU, 1 OpenCL, 2 OpenCL FP16, 3 Myriad, 4 Vulkan, 5 FPGA,
    /// 6 CUDA, 7 CUDA FP16, 8 HDDL.
    #[arg(long = "target_id", default_value_t = 0, allow_negative_numbers = true)]
    target_id: i32,

    /// Path to the model. Download the model at
    /// https://github.com/opencv/opencv_zoo/tree/master/models/face_detection_yunet
    #[arg(short, long, default_value = DEFAULT_MODEL_PATH)]
    model: PathBuf,

    /// Filter out faces of score < score_threshold.
    #[arg(long = "score_threshold", default_value_t = DEFAULT_SCORE_THRESHOLD)]
    score_threshold: f32,

    /// Suppress bounding boxes of iou >= nms_threshold.
    #[arg(long = "nms_threshold", default_value_t = DEFAULT_NMS_THRESHOLD)]
    nms_threshold: f32,

    /// Keep top_k bounding boxes before NMS.
    #[arg(long = "top_k", default_value_t = DEFAULT_TOP_K, allow_negative_numbers = true)]
    top_k: i32,

    /// Log every detected face.
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn to_config(&self) -> DemoConfig {
        DemoConfig {
            model_path: self.model.clone(),
            scale: self.scale,
            backend_id: self.backend_id,
            target_id: self.target_id,
            score_threshold: self.score_threshold,
            nms_threshold: self.nms_threshold,
            top_k: self.top_k,
        }
    }
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.kind() == ErrorKind::DisplayHelp => {
            let _ = e.print();
            process::exit(HELP_EXIT_CODE);
        }
        Err(e) => {
            let _ = e.print();
            process::exit(1);
        }
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run(cli) {
        Ok(stats) => log::info!("Done: {}", stats.summary()),
        Err(e) => {
            log::error!("{e}");
            process::exit(exit_code(e.as_ref()));
        }
    }
}

fn run(cli: Cli) -> Result<RunStats, Box<dyn std::error::Error>> {
    let mut config = cli.to_config();
    config.validate()?;

    log::info!("Resolving model: {}", config.model_path.display());
    config.model_path =
        model_resolver::resolve(&config.model_path, Some(Box::new(download_progress)))?;

    let (width, height) = INITIAL_INPUT_SIZE;
    let detector: Box<dyn FaceDetector> =
        Box::new(YunetDetector::new(&config, FrameSize::new(width, height))?);

    if let Some(image) = &cli.input_image {
        if cli.input_video.is_some() {
            log::warn!("Both --input_image and --input_video given; using the image");
        }
        return Ok(run_image(image, detector, &config, cli.verbose)?);
    }
    if let Some(video) = &cli.input_video {
        return Ok(run_video(video, detector, &config, cli.verbose)?);
    }

    log::warn!("No input given; pass --input_image or --input_video");
    Ok(RunStats::default())
}

fn run_image(
    input: &Path,
    detector: Box<dyn FaceDetector>,
    config: &DemoConfig,
    verbose: bool,
) -> Result<RunStats, PipelineError> {
    let mut use_case = DetectImageUseCase::new(
        Box::new(ImageFileReader::new()),
        detector,
        Box::new(HighguiDisplay::new()),
        config.scale,
        verbose,
    );
    use_case.execute(input)
}

fn run_video(
    input: &Path,
    detector: Box<dyn FaceDetector>,
    config: &DemoConfig,
    verbose: bool,
) -> Result<RunStats, PipelineError> {
    let mut use_case = DetectVideoUseCase::new(
        Box::new(FfmpegReader::new()),
        detector,
        Box::new(HighguiDisplay::new()),
        config.scale,
        verbose,
    );
    use_case.execute(input)
}

fn exit_code(err: &(dyn std::error::Error + 'static)) -> i32 {
    err.downcast_ref::<PipelineError>()
        .map(PipelineError::exit_code)
        .unwrap_or(1)
}

fn download_progress(downloaded: u64, total: u64) {
    if total > 0 {
        let pct = (downloaded as f64 / total as f64 * 100.0) as u32;
        eprint!("\rDownloading face detection model... {pct}%");
    } else {
        eprint!("\rDownloading face detection model... {downloaded} bytes");
    }
    if total > 0 && downloaded >= total {
        eprintln!();
    }
}
