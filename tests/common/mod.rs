pub mod synthetic_canvas;
