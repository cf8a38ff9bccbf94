use crate::detection::domain::detection::Detection;
use crate::detection::domain::face_landmarks::LANDMARK_COUNT;
use crate::visualization::domain::canvas::{Canvas, Color, Point};

/// Baseline-left corner of the FPS label.
pub const FPS_ORIGIN: Point = Point::new(0, 15);

/// Score labels sit this far below the box's top-left corner.
pub const SCORE_OFFSET_Y: i32 = 15;

pub const LANDMARK_RADIUS: i32 = 2;

pub const BOX_COLOR: Color = Color::GREEN;
pub const TEXT_COLOR: Color = Color::GREEN;

/// Right eye, left eye, nose tip, right mouth corner, left mouth corner.
pub const LANDMARK_COLORS: [Color; LANDMARK_COUNT] = [
    Color::BLUE,
    Color::RED,
    Color::GREEN,
    Color::MAGENTA,
    Color::YELLOW,
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisualizeOptions {
    /// Log one line per face.
    pub verbose: bool,
    /// Overlay `FPS: …` when set and positive.
    pub fps: Option<f64>,
    pub thickness: i32,
}

impl Default for VisualizeOptions {
    fn default() -> Self {
        Self {
            verbose: false,
            fps: None,
            thickness: 2,
        }
    }
}

impl VisualizeOptions {
    pub fn with_fps(fps: f64) -> Self {
        Self {
            fps: Some(fps),
            ..Default::default()
        }
    }
}

/// Draws the FPS label and every face onto `canvas`, in sequence order.
pub fn annotate<C: Canvas + ?Sized>(
    canvas: &mut C,
    faces: &[Detection],
    options: &VisualizeOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(fps) = options.fps.filter(|fps| *fps > 0.0) {
        canvas.text(&format_fps(fps), FPS_ORIGIN, TEXT_COLOR)?;
    }

    for (i, face) in faces.iter().enumerate() {
        if options.verbose {
            log::info!("{}", describe_face(i, face));
        }

        let x = face.bbox.x as i32;
        let y = face.bbox.y as i32;
        canvas.rectangle(
            Point::new(x, y),
            face.bbox.width as i32,
            face.bbox.height as i32,
            BOX_COLOR,
            options.thickness,
        )?;

        for (&(lx, ly), color) in face.landmarks.points().iter().zip(LANDMARK_COLORS) {
            canvas.circle(
                Point::new(lx as i32, ly as i32),
                LANDMARK_RADIUS,
                color,
                options.thickness,
            )?;
        }

        canvas.text(
            &format_score(face.score),
            Point::new(x, y + SCORE_OFFSET_Y),
            TEXT_COLOR,
        )?;
    }
    Ok(())
}

pub fn format_fps(fps: f64) -> String {
    format!("FPS: {fps:.2}")
}

pub fn format_score(score: f32) -> String {
    format!("{score:.4}")
}

pub fn describe_face(index: usize, face: &Detection) -> String {
    format!(
        "Face {index}, top-left coordinates: ({}, {}), box width: {}, box height: {}, score: {}",
        face.bbox.x, face.bbox.y, face.bbox.width, face.bbox.height, face.score
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detection::domain::detection::BoundingBox;
    use crate::detection::domain::face_landmarks::FaceLandmarks;
    use rstest::rstest;

    #[derive(Debug, PartialEq)]
    enum Op {
        Rect(Point, i32, i32, Color, i32),
        Circle(Point, i32, Color, i32),
        Text(String, Point, Color),
    }

    #[derive(Default)]
    struct RecordingCanvas {
        ops: Vec<Op>,
    }

    impl RecordingCanvas {
        fn rects(&self) -> usize {
            self.ops.iter().filter(|op| matches!(op, Op::Rect(..))).count()
        }

        fn circles(&self) -> Vec<Color> {
            self.ops
                .iter()
                .filter_map(|op| match op {
                    Op::Circle(_, _, color, _) => Some(*color),
                    _ => None,
                })
                .collect()
        }

        fn texts(&self) -> Vec<&str> {
            self.ops
                .iter()
                .filter_map(|op| match op {
                    Op::Text(text, _, _) => Some(text.as_str()),
                    _ => None,
                })
                .collect()
        }
    }

    type DrawResult = Result<(), Box<dyn std::error::Error>>;

    impl Canvas for RecordingCanvas {
        fn rectangle(&mut self, p: Point, w: i32, h: i32, color: Color, thickness: i32) -> DrawResult {
            self.ops.push(Op::Rect(p, w, h, color, thickness));
            Ok(())
        }

        fn circle(&mut self, center: Point, radius: i32, color: Color, thickness: i32) -> DrawResult {
            self.ops.push(Op::Circle(center, radius, color, thickness));
            Ok(())
        }

        fn text(&mut self, text: &str, origin: Point, color: Color) -> DrawResult {
            self.ops.push(Op::Text(text.to_string(), origin, color));
            Ok(())
        }
    }

    fn face(x: f32, y: f32, score: f32) -> Detection {
        Detection {
            bbox: BoundingBox {
                x,
                y,
                width: 40.5,
                height: 50.9,
            },
            landmarks: FaceLandmarks::new([
                (x + 10.0, y + 15.0),
                (x + 30.0, y + 15.0),
                (x + 20.0, y + 25.0),
                (x + 12.0, y + 38.0),
                (x + 28.0, y + 38.0),
            ]),
            score,
        }
    }

    #[test]
    fn test_no_faces_no_fps_draws_nothing() {
        let mut canvas = RecordingCanvas::default();
        annotate(&mut canvas, &[], &VisualizeOptions::default()).unwrap();
        assert!(canvas.ops.is_empty());
    }

    #[test]
    fn test_no_faces_with_fps_draws_only_label() {
        let mut canvas = RecordingCanvas::default();
        annotate(&mut canvas, &[], &VisualizeOptions::with_fps(29.971)).unwrap();
        assert_eq!(
            canvas.ops,
            vec![Op::Text("FPS: 29.97".into(), FPS_ORIGIN, Color::GREEN)]
        );
    }

    #[rstest]
    #[case(0.0)]
    #[case(-1.0)]
    fn test_non_positive_fps_is_omitted(#[case] fps: f64) {
        let mut canvas = RecordingCanvas::default();
        annotate(&mut canvas, &[], &VisualizeOptions::with_fps(fps)).unwrap();
        assert!(canvas.ops.is_empty());
    }

    #[rstest]
    #[case(1)]
    #[case(2)]
    #[case(7)]
    fn test_draw_counts_scale_with_faces(#[case] n: usize) {
        let faces: Vec<_> = (0..n).map(|i| face(i as f32 * 60.0, 5.0, 0.9)).collect();
        let mut canvas = RecordingCanvas::default();
        annotate(&mut canvas, &faces, &VisualizeOptions::default()).unwrap();

        assert_eq!(canvas.rects(), n);
        assert_eq!(canvas.texts().len(), n);

        let circles = canvas.circles();
        assert_eq!(circles.len(), 5 * n);
        for chunk in circles.chunks(5) {
            assert_eq!(chunk, &LANDMARK_COLORS);
        }
    }

    #[test]
    fn test_landmark_colors_are_distinct() {
        for (i, a) in LANDMARK_COLORS.iter().enumerate() {
            for b in &LANDMARK_COLORS[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_face_geometry_is_truncated() {
        let mut canvas = RecordingCanvas::default();
        annotate(
            &mut canvas,
            &[face(12.7, 30.2, 0.5)],
            &VisualizeOptions::default(),
        )
        .unwrap();

        assert_eq!(
            canvas.ops[0],
            Op::Rect(Point::new(12, 30), 40, 50, Color::GREEN, 2)
        );
        assert_eq!(
            canvas.ops[1],
            Op::Circle(Point::new(22, 45), 2, Color::BLUE, 2)
        );
        assert_eq!(
            canvas.ops[6],
            Op::Text("0.5000".into(), Point::new(12, 45), Color::GREEN)
        );
    }

    #[test]
    fn test_thickness_is_forwarded() {
        let mut canvas = RecordingCanvas::default();
        let options = VisualizeOptions {
            thickness: 5,
            ..Default::default()
        };
        annotate(&mut canvas, &[face(0.0, 0.0, 0.5)], &options).unwrap();
        assert!(canvas.ops.iter().all(|op| match op {
            Op::Rect(.., t) | Op::Circle(.., t) => *t == 5,
            Op::Text(..) => true,
        }));
    }

    #[test]
    fn test_fps_label_comes_before_faces() {
        let mut canvas = RecordingCanvas::default();
        annotate(
            &mut canvas,
            &[face(0.0, 0.0, 0.5)],
            &VisualizeOptions::with_fps(10.0),
        )
        .unwrap();
        assert_eq!(canvas.texts(), vec!["FPS: 10.00", "0.5000"]);
    }

    #[rstest]
    #[case(0.87654321, "0.8765")]
    #[case(1.0, "1.0000")]
    #[case(0.7, "0.7000")]
    #[case(0.12345, "0.1235")]
    fn test_format_score_has_four_decimals(#[case] score: f32, #[case] expected: &str) {
        assert_eq!(format_score(score), expected);
    }

    #[test]
    fn test_format_fps_has_two_decimals() {
        assert_eq!(format_fps(123.456), "FPS: 123.46");
    }

    #[test]
    fn test_describe_face() {
        let mut det = face(10.0, 20.0, 0.93);
        det.bbox.width = 30.0;
        det.bbox.height = 40.0;
        assert_eq!(
            describe_face(3, &det),
            "Face 3, top-left coordinates: (10, 20), box width: 30, box height: 40, score: 0.93"
        );
    }
}
