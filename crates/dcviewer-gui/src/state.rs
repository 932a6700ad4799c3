use std::path::PathBuf;

/// Viewport display state.
pub struct ViewportState {
    pub texture: Option<egui::TextureHandle>,
    /// Surface generation the texture was built from.
    pub generation: Option<u64>,
    pub image_size: Option<[usize; 2]>,
    pub zoom: f32,
    pub pan_offset: egui::Vec2,
    /// Fit the next image to the panel once its size is known.
    pub fit_pending: bool,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            texture: None,
            generation: None,
            image_size: None,
            zoom: 1.0,
            pan_offset: egui::Vec2::ZERO,
            fit_pending: true,
        }
    }
}

/// The wavelength question of an open in progress.
pub struct WavelengthPrompt {
    pub path: PathBuf,
    pub input: String,
    pub error: Option<String>,
    pub focused: bool,
}

impl WavelengthPrompt {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            input: String::new(),
            error: None,
            focused: false,
        }
    }

    /// Integer typed so far, or a message explaining why it is not one.
    pub fn parse(&self) -> Result<i64, String> {
        let text = self.input.trim();
        text.parse()
            .map_err(|_| format!("'{text}' is not an integer"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wavelength_input_parses_integers_only() {
        let mut prompt = WavelengthPrompt::new(PathBuf::from("cube.fits"));
        prompt.input = " 12 ".into();
        assert_eq!(prompt.parse(), Ok(12));
        prompt.input = "-1".into();
        assert_eq!(prompt.parse(), Ok(-1));
        prompt.input = "1.5".into();
        assert!(prompt.parse().is_err());
        prompt.input.clear();
        assert!(prompt.parse().is_err());
    }
}
