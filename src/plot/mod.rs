// Scatter plots drawn with the egui painter

pub mod logic;
pub mod painter;

pub use logic::{error_plot, suptitle, wind_plot};
pub use painter::draw_scatter;
