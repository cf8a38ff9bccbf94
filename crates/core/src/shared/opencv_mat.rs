//! Frame ↔ `Mat` conversion for the OpenCV adapters.

use opencv::core::{self, Mat, Scalar, Size, CV_8UC1, CV_8UC3, CV_8UC4};
use opencv::imgproc;
use opencv::prelude::*;

use crate::shared::frame::{Frame, FrameSize};

/// Copies a frame into a `Mat` with the same channel order (no conversion).
pub fn frame_to_mat(frame: &Frame) -> opencv::Result<Mat> {
    let mat_type = match frame.channels() {
        1 => CV_8UC1,
        3 => CV_8UC3,
        4 => CV_8UC4,
        n => {
            return Err(opencv::Error::new(
                core::StsBadArg,
                format!("unsupported channel count: {n}"),
            ))
        }
    };

    let size = to_cv_size(frame.size())?;
    let mut mat =
        Mat::new_rows_cols_with_default(size.height, size.width, mat_type, Scalar::all(0.0))?;
    mat.data_bytes_mut()?.copy_from_slice(frame.data());
    Ok(mat)
}

/// Copies an 8-bit `Mat` back into a frame, keeping its channel order.
pub fn mat_to_frame(mat: &Mat, index: usize) -> opencv::Result<Frame> {
    if mat.depth() != core::CV_8U {
        return Err(opencv::Error::new(
            core::StsUnsupportedFormat,
            format!("expected an 8-bit Mat, got depth {}", mat.depth()),
        ));
    }
    let dim = |v: i32| {
        u32::try_from(v).map_err(|_| {
            opencv::Error::new(core::StsOutOfRange, format!("negative dimension {v}"))
        })
    };
    let (width, height) = (dim(mat.cols())?, dim(mat.rows())?);
    let channels = u8::try_from(mat.channels()).map_err(|_| {
        opencv::Error::new(core::StsBadArg, "too many channels".to_string())
    })?;

    let data = if mat.is_continuous() {
        mat.data_bytes()?.to_vec()
    } else {
        mat.try_clone()?.data_bytes()?.to_vec()
    };
    Ok(Frame::new(data, width, height, channels, index))
}

/// Copies a frame into a new BGR `Mat`, the channel order OpenCV expects.
pub fn frame_to_bgr_mat(frame: &Frame) -> opencv::Result<Mat> {
    let code = match frame.channels() {
        1 => imgproc::COLOR_GRAY2BGR,
        3 => imgproc::COLOR_RGB2BGR,
        4 => imgproc::COLOR_RGBA2BGR,
        n => {
            return Err(opencv::Error::new(
                core::StsBadArg,
                format!("unsupported channel count: {n}"),
            ))
        }
    };

    let src = frame_to_mat(frame)?;
    let mut bgr = Mat::default();
    imgproc::cvt_color_def(&src, &mut bgr, code)?;
    Ok(bgr)
}

pub fn to_cv_size(size: FrameSize) -> opencv::Result<Size> {
    let dim = |v: u32| {
        i32::try_from(v).map_err(|_| {
            opencv::Error::new(core::StsOutOfRange, format!("dimension {v} does not fit in i32"))
        })
    };
    Ok(Size::new(dim(size.width)?, dim(size.height)?))
}
