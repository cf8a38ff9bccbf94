use std::fmt;

use crate::detection::domain::face_landmarks::{FaceLandmarks, LANDMARK_COUNT};

/// Values per detector output row: 4 box + 10 landmark coords + score.
pub const DETECTION_ROW_LEN: usize = 4 + LANDMARK_COUNT * 2 + 1;

const SCORE_COLUMN: usize = DETECTION_ROW_LEN - 1;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// One detected face. Produced fresh for every frame; never tracked.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Detection {
    pub bbox: BoundingBox,
    pub landmarks: FaceLandmarks,
    pub score: f32,
}

#[derive(Debug, PartialEq)]
pub struct ShortRowError {
    pub len: usize,
}

impl fmt::Display for ShortRowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "detection row has {} values, expected at least {DETECTION_ROW_LEN}",
            self.len
        )
    }
}

impl std::error::Error for ShortRowError {}

impl Detection {
    /// Parses `[x, y, w, h, x_re, y_re, x_le, y_le, x_nt, y_nt, x_rcm, y_rcm,
    /// x_lcm, y_lcm, score, ...]`. Extra trailing values are ignored.
    pub fn from_row(row: &[f32]) -> Result<Self, ShortRowError> {
        if row.len() < DETECTION_ROW_LEN {
            return Err(ShortRowError { len: row.len() });
        }
        let mut coords = [0.0f32; LANDMARK_COUNT * 2];
        coords.copy_from_slice(&row[4..SCORE_COLUMN]);
        Ok(Self {
            bbox: BoundingBox {
                x: row[0],
                y: row[1],
                width: row[2],
                height: row[3],
            },
            landmarks: FaceLandmarks::from_coords(&coords),
            score: row[SCORE_COLUMN],
        })
    }
}
