use std::path::PathBuf;

use dcviewer_core::dialog::{FileFilter, Notifier, Prompts};

/// Native file picker restricted to the given filters.
pub fn pick_file(filters: &[FileFilter]) -> Option<PathBuf> {
    filters
        .iter()
        .fold(rfd::FileDialog::new().set_title("Open"), |dialog, f| {
            dialog.add_filter(f.name, f.extensions)
        })
        .pick_file()
}

/// Answers gathered by the UI before the viewer asks for them.
///
/// egui cannot block inside a frame, so the open flow collects the file
/// and wavelength over several frames and replays them here. Anything not
/// collected reads as cancelled.
#[derive(Debug, Default)]
pub struct StagedPrompts {
    file: Option<PathBuf>,
    wavelength: Option<i64>,
}

impl StagedPrompts {
    pub fn new(file: PathBuf, wavelength: i64) -> Self {
        Self {
            file: Some(file),
            wavelength: Some(wavelength),
        }
    }
}

impl Prompts for StagedPrompts {
    fn pick_open_file(&mut self, _filters: &[FileFilter]) -> Option<PathBuf> {
        self.file.take()
    }

    fn prompt_integer(&mut self, _title: &str, _message: &str) -> Option<i64> {
        self.wavelength.take()
    }
}

/// A text window opened by `show_info`.
pub struct InfoWindow {
    pub id: u64,
    pub title: String,
    pub text: String,
    pub open: bool,
}

/// Info text goes to egui windows (headers can be long); errors and
/// questions use native message boxes.
#[derive(Default)]
pub struct GuiNotifier {
    pub windows: Vec<InfoWindow>,
    next_id: u64,
}

impl GuiNotifier {
    /// Forget windows the user has closed.
    pub fn prune(&mut self) {
        self.windows.retain(|w| w.open);
    }
}

impl Notifier for GuiNotifier {
    fn show_info(&mut self, title: &str, text: &str) {
        self.next_id += 1;
        self.windows.push(InfoWindow {
            id: self.next_id,
            title: title.to_string(),
            text: text.to_string(),
            open: true,
        });
    }

    fn show_error(&mut self, text: &str) {
        rfd::MessageDialog::new()
            .set_level(rfd::MessageLevel::Error)
            .set_title("Error")
            .set_description(text)
            .set_buttons(rfd::MessageButtons::Ok)
            .show();
    }

    fn confirm(&mut self, title: &str, question: &str) -> bool {
        let answer = rfd::MessageDialog::new()
            .set_level(rfd::MessageLevel::Warning)
            .set_title(title)
            .set_description(question)
            .set_buttons(rfd::MessageButtons::YesNo)
            .show();
        matches!(answer, rfd::MessageDialogResult::Yes)
    }
}
