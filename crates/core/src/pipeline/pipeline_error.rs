use std::path::PathBuf;

use thiserror::Error;

type BoxError = Box<dyn std::error::Error>;

/// Failures that end an acquisition loop.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("cannot read image: {}", path.display())]
    ImageUnreadable {
        path: PathBuf,
        #[source]
        source: BoxError,
    },
    #[error("face detection failed")]
    Detector(#[source] BoxError),
    #[error("drawing annotations failed")]
    Visualize(#[source] BoxError),
    #[error("display failed")]
    Display(#[source] BoxError),
    #[error("scaled frame is empty ({width}x{height})")]
    EmptyFrame { width: u32, height: u32 },
    #[error("cannot prepare frame")]
    Source(#[source] BoxError),
}

impl PipelineError {
    /// Process exit status for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ImageUnreadable { .. } => 2,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_unreadable_image_exits_with_two() {
        let err = PipelineError::ImageUnreadable {
            path: PathBuf::from("missing.jpg"),
            source: "not found".into(),
        };
        assert_eq!(err.exit_code(), 2);
        assert_eq!(err.to_string(), "cannot read image: missing.jpg");
        assert_eq!(err.source().map(|s| s.to_string()), Some("not found".into()));
    }

    #[test]
    fn test_other_failures_exit_with_one() {
        assert_eq!(PipelineError::Detector("boom".into()).exit_code(), 1);
        assert_eq!(PipelineError::Visualize("boom".into()).exit_code(), 1);
        assert_eq!(PipelineError::Display("boom".into()).exit_code(), 1);
        assert_eq!(PipelineError::Source("boom".into()).exit_code(), 1);
        assert_eq!(
            PipelineError::EmptyFrame {
                width: 0,
                height: 3
            }
            .exit_code(),
            1
        );
    }
}
