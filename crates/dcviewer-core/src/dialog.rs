//! Dialog service seams.
//!
//! Input prompts and notifications are split so the viewer can own the
//! notifier (it reports failures on its own) while prompts are supplied per
//! call by whichever front-end is driving it. `None` always means the user
//! cancelled.

use std::path::PathBuf;

/// A named group of file extensions for the open dialog.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FileFilter {
    pub name: &'static str,
    pub extensions: &'static [&'static str],
}

pub const FITS_FILTERS: &[FileFilter] = &[
    FileFilter {
        name: "FITS files",
        extensions: &["fits", "fit", "fts"],
    },
    FileFilter {
        name: "All files",
        extensions: &["*"],
    },
];

pub const WAVELENGTH_TITLE: &str = "Wavelength";
pub const WAVELENGTH_MESSAGE: &str = "Type the wavelength you want";

/// Blocking user input.
pub trait Prompts {
    fn pick_open_file(&mut self, filters: &[FileFilter]) -> Option<PathBuf>;

    fn prompt_integer(&mut self, title: &str, message: &str) -> Option<i64>;
}

/// Blocking messages to the user.
pub trait Notifier {
    fn show_info(&mut self, title: &str, text: &str);

    fn show_error(&mut self, text: &str);

    /// Yes/no question; `true` means yes.
    fn confirm(&mut self, title: &str, question: &str) -> bool;
}
