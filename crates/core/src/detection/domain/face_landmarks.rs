//! 5-point face landmarks in the order YuNet emits them.

pub const RIGHT_EYE: usize = 0;
pub const LEFT_EYE: usize = 1;
pub const NOSE_TIP: usize = 2;
pub const RIGHT_MOUTH_CORNER: usize = 3;
pub const LEFT_MOUTH_CORNER: usize = 4;

pub const LANDMARK_COUNT: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaceLandmarks {
    points: [(f32, f32); LANDMARK_COUNT],
}

impl FaceLandmarks {
    pub fn new(points: [(f32, f32); LANDMARK_COUNT]) -> Self {
        Self { points }
    }

    /// Reads `[x0, y0, x1, y1, ..., x4, y4]`.
    pub fn from_coords(coords: &[f32; LANDMARK_COUNT * 2]) -> Self {
        let mut points = [(0.0, 0.0); LANDMARK_COUNT];
        for (k, point) in points.iter_mut().enumerate() {
            *point = (coords[k * 2], coords[k * 2 + 1]);
        }
        Self { points }
    }

    pub fn points(&self) -> &[(f32, f32); LANDMARK_COUNT] {
        &self.points
    }

    pub fn point(&self, landmark: usize) -> (f32, f32) {
        self.points[landmark]
    }
}
