/// An RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const MAGENTA: Color = Color::rgb(255, 0, 255);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Integer pixel position; may lie outside the drawable area.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Drawing surface for annotations.
///
/// Implementations clip to their own bounds. A non-positive `thickness`
/// fills the shape.
pub trait Canvas {
    fn rectangle(
        &mut self,
        top_left: Point,
        width: i32,
        height: i32,
        color: Color,
        thickness: i32,
    ) -> Result<(), Box<dyn std::error::Error>>;

    fn circle(
        &mut self,
        center: Point,
        radius: i32,
        color: Color,
        thickness: i32,
    ) -> Result<(), Box<dyn std::error::Error>>;

    /// Draws `text` with `origin` at the bottom-left corner of the first glyph.
    fn text(
        &mut self,
        text: &str,
        origin: Point,
        color: Color,
    ) -> Result<(), Box<dyn std::error::Error>>;
}
