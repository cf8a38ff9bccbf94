//! Human-readable names for OpenCV DNN backend and target ids.
//!
//! The ids themselves are handed to the detector unchanged; these names
//! only feed logs.

const BACKENDS: &[&str] = &[
    "default",
    "Halide",
    "Intel's Inference Engine",
    "OpenCV",
    "VKCOM",
    "CUDA",
    "WebNN",
    "TIM-VX",
    "CANN",
];

const TARGETS: &[&str] = &[
    "CPU",
    "OpenCL",
    "OpenCL FP16",
    "Myriad",
    "Vulkan",
    "FPGA",
    "CUDA",
    "CUDA FP16",
    "HDDL",
    "NPU",
    "CPU FP16",
];

pub fn backend_name(id: i32) -> &'static str {
    lookup(BACKENDS, id)
}

pub fn target_name(id: i32) -> &'static str {
    lookup(TARGETS, id)
}

fn lookup(names: &[&'static str], id: i32) -> &'static str {
    usize::try_from(id)
        .ok()
        .and_then(|i| names.get(i).copied())
        .unwrap_or("unknown")
}
