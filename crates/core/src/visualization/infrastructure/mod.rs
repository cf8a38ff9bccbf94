pub mod mat_canvas;
