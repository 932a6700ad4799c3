pub mod info_windows;
pub mod menu_bar;
pub mod selection;
pub mod status;
pub mod viewport;
pub mod wavelength_prompt;
