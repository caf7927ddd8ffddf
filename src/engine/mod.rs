mod output;
mod render;

pub use output::{Output, OutputBlock};
pub use render::{render_move, render_room};
