/// Model path used when the user does not pass `--model`.
pub const DEFAULT_MODEL_PATH: &str = "yunet.onnx";

pub const YUNET_MODEL_NAME: &str = "face_detection_yunet_2023mar.onnx";
pub const YUNET_MODEL_URL: &str =
    "https://github.com/opencv/opencv_zoo/raw/main/models/face_detection_yunet/face_detection_yunet_2023mar.onnx";

/// Detector input size before the first frame dictates the real one.
pub const INITIAL_INPUT_SIZE: (u32, u32) = (320, 320);

pub const DEFAULT_SCORE_THRESHOLD: f32 = 0.7;
pub const DEFAULT_NMS_THRESHOLD: f32 = 0.3;
pub const DEFAULT_TOP_K: i32 = 5000;

pub const WINDOW_TITLE: &str = "libfacedetection demo";
