pub mod prompt_canvas;
