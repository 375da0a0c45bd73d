pub mod oval_button;
pub mod tiled_panel;
