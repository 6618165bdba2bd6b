pub mod colors;
pub mod panel;
pub mod symbols;
pub mod terminal;

pub use panel::{layout_row, print_panel, LayoutPanel};
pub use terminal::Appearance;
