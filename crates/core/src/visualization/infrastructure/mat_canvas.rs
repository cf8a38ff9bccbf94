//! [`Canvas`] backed by OpenCV's `imgproc` drawing on a `Mat`.
//!
//! The `Mat` keeps the frame's channel order, so colors are written as RGB.
use opencv::core::{Mat, Point as CvPoint, Rect, Scalar};
use opencv::imgproc;
use opencv::prelude::*;

use crate::shared::frame::Frame;
use crate::shared::opencv_mat::{frame_to_mat, mat_to_frame};
use crate::visualization::domain::canvas::{Canvas, Color, Point};

const FONT_FACE: i32 = imgproc::FONT_HERSHEY_SIMPLEX;
const FONT_SCALE: f64 = 0.5;
const TEXT_THICKNESS: i32 = 1;

pub struct MatCanvas {
    mat: Mat,
}

impl MatCanvas {
    pub fn from_frame(frame: &Frame) -> opencv::Result<Self> {
        Ok(Self {
            mat: frame_to_mat(frame)?,
        })
    }

    pub fn into_frame(self, index: usize) -> opencv::Result<Frame> {
        mat_to_frame(&self.mat, index)
    }

    fn scalar(&self, color: Color) -> Scalar {
        let (r, g, b) = (color.r as f64, color.g as f64, color.b as f64);
        if self.mat.channels() == 1 {
            Scalar::all((r + g + b) / 3.0)
        } else {
            Scalar::new(r, g, b, 255.0)
        }
    }
}

fn line_thickness(thickness: i32) -> i32 {
    if thickness <= 0 {
        imgproc::FILLED
    } else {
        thickness
    }
}

impl Canvas for MatCanvas {
    fn rectangle(
        &mut self,
        top_left: Point,
        width: i32,
        height: i32,
        color: Color,
        thickness: i32,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let color = self.scalar(color);
        imgproc::rectangle(
            &mut self.mat,
            Rect::new(top_left.x, top_left.y, width, height),
            color,
            line_thickness(thickness),
            imgproc::LINE_8,
            0,
        )?;
        Ok(())
    }

    fn circle(
        &mut self,
        center: Point,
        radius: i32,
        color: Color,
        thickness: i32,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let color = self.scalar(color);
        imgproc::circle(
            &mut self.mat,
            CvPoint::new(center.x, center.y),
            radius.max(0),
            color,
            line_thickness(thickness),
            imgproc::LINE_8,
            0,
        )?;
        Ok(())
    }

    fn text(
        &mut self,
        text: &str,
        origin: Point,
        color: Color,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let color = self.scalar(color);
        imgproc::put_text(
            &mut self.mat,
            text,
            CvPoint::new(origin.x, origin.y),
            FONT_FACE,
            FONT_SCALE,
            color,
            TEXT_THICKNESS,
            imgproc::LINE_8,
            false,
        )?;
        Ok(())
    }
}
