//! Face detection demo built around OpenCV's YuNet detector.
//!
//! Modules follow a domain/infrastructure split: `domain` holds the types
//! and traits the acquisition loops are written against, `infrastructure`
//! holds the adapters for image decoding, ffmpeg, OpenCV and the model
//! cache.

pub mod shared {
    pub mod config;
    pub mod constants;
    pub mod frame;
    pub mod opencv_mat;
    pub mod video_metadata;
}

pub mod detection {
    pub mod domain {
        pub mod detection;
        pub mod face_detector;
        pub mod face_landmarks;
    }
    pub mod infrastructure;
}

pub mod visualization {
    pub mod domain {
        pub mod canvas;
        pub mod face_annotator;
    }
    pub mod infrastructure;
    pub mod visualize;
}

pub mod video {
    pub mod domain {
        pub mod video_reader;
    }
    pub mod infrastructure;
}

pub mod display {
    pub mod domain {
        pub mod frame_display;
    }
    pub mod infrastructure;
}

pub mod pipeline {
    pub mod detect_image_use_case;
    pub mod detect_video_use_case;
    pub mod frame_timer;
    pub mod pipeline_error;
    pub mod run_stats;
    #[cfg(test)]
    pub(crate) mod test_stubs;
}
