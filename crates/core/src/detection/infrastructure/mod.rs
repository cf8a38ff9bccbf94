pub mod dnn_backend;
pub mod model_resolver;
pub mod yunet_detector;
