mod host_screen;
mod info_panel;

pub use host_screen::host_screen;
pub use info_panel::{InfoPanelView, info_panel};
