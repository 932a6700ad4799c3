use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use crate::config::ViewerConfig;
use crate::consts::RELEASE_NAME;
use crate::dialog::{Notifier, Prompts, FITS_FILTERS, WAVELENGTH_MESSAGE, WAVELENGTH_TITLE};
use crate::error::{CubeReadError, RenderError};
use crate::fits::{CubeReader, CubeSlice};
use crate::menu::{Flow, MenuCommand};
use crate::overlay::{PointerEvent, Selection, SelectionOverlay, SelectorConfig};
use crate::render::{Figure, Renderer};
use crate::stretch::StretchTransform;

/// A figure together with the selector bound to its axes.
#[derive(Clone, Debug)]
pub struct RenderedVisual {
    pub figure: Figure,
    pub overlay: SelectionOverlay,
}

/// Holds at most one attached visual.
#[derive(Debug, Default)]
pub struct DisplaySurface {
    attached: Option<RenderedVisual>,
    generation: u64,
}

impl DisplaySurface {
    /// Drop whatever is attached. Returns whether anything was.
    pub fn clear(&mut self) -> bool {
        self.attached.take().is_some()
    }

    pub fn attach(&mut self, visual: RenderedVisual) {
        if self.attached.replace(visual).is_some() {
            tracing::warn!("attached a visual over an existing one");
        }
        self.generation += 1;
    }

    pub fn visual(&self) -> Option<&RenderedVisual> {
        self.attached.as_ref()
    }

    pub fn visual_mut(&mut self) -> Option<&mut RenderedVisual> {
        self.attached.as_mut()
    }

    pub fn attached_count(&self) -> usize {
        usize::from(self.attached.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.attached.is_none()
    }

    /// Bumped on every attach, so front-ends know when to rebuild textures.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Owns the loaded slice and the active stretch; every mutation redraws.
pub struct Viewer<R, P, N> {
    reader: R,
    renderer: P,
    notifier: N,
    slice: Option<CubeSlice>,
    source: Option<(PathBuf, i64)>,
    stretch: StretchTransform,
    selector: SelectorConfig,
    license_path: PathBuf,
    surface: DisplaySurface,
    redraws: u64,
}

impl<R, P, N> Viewer<R, P, N>
where
    R: CubeReader,
    P: Renderer,
    N: Notifier,
{
    pub fn new(reader: R, renderer: P, notifier: N, config: &ViewerConfig) -> Self {
        Self {
            reader,
            renderer,
            notifier,
            slice: None,
            source: None,
            stretch: config.default_stretch,
            selector: config.selector,
            license_path: config.license_path.clone(),
            surface: DisplaySurface::default(),
            redraws: 0,
        }
    }

    pub fn slice(&self) -> Option<&CubeSlice> {
        self.slice.as_ref()
    }

    /// Path and wavelength index of the loaded slice.
    pub fn source(&self) -> Option<(&Path, i64)> {
        self.source.as_ref().map(|(p, w)| (p.as_path(), *w))
    }

    pub fn stretch(&self) -> StretchTransform {
        self.stretch
    }

    pub fn surface(&self) -> &DisplaySurface {
        &self.surface
    }

    pub fn overlay(&self) -> Option<&SelectionOverlay> {
        self.surface.visual().map(|v| &v.overlay)
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }

    /// Number of redraw cycles run so far.
    pub fn redraw_count(&self) -> u64 {
        self.redraws
    }

    /// Ask for a file and a wavelength, then load. `None` if either prompt
    /// was cancelled, in which case nothing is read and nothing changes.
    pub fn open(&mut self, prompts: &mut impl Prompts) -> Option<Result<(), CubeReadError>> {
        let path = prompts.pick_open_file(FITS_FILTERS)?;
        let wavelength = prompts.prompt_integer(WAVELENGTH_TITLE, WAVELENGTH_MESSAGE)?;
        Some(self.load(&path, wavelength))
    }

    /// Replace the loaded slice and redraw. On failure the error is shown to
    /// the user and the previous slice stays loaded.
    pub fn load(&mut self, path: &Path, wavelength: i64) -> Result<(), CubeReadError> {
        match self.reader.read(path, wavelength) {
            Ok(slice) => {
                tracing::info!(
                    path = %path.display(),
                    wavelength,
                    width = slice.width(),
                    height = slice.height(),
                    "loaded slice"
                );
                self.slice = Some(slice);
                self.source = Some((path.to_path_buf(), wavelength));
                self.redraw();
                Ok(())
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), wavelength, "load failed: {e}");
                self.notifier
                    .show_error(&format!("Could not open {}:\n{e}", path.display()));
                Err(e)
            }
        }
    }

    pub fn rescale(&mut self, transform: StretchTransform) {
        tracing::debug!(%transform, "rescale");
        self.stretch = transform;
        self.redraw();
    }

    /// Show the header of the loaded slice; empty before any load.
    pub fn show_header(&mut self) {
        let text = self
            .slice
            .as_ref()
            .map(|s| s.header.to_string())
            .unwrap_or_default();
        self.notifier.show_info("Header", &text);
    }

    /// Tear down the current visual and build a new one from the loaded
    /// slice. Render failures are reported and leave the surface empty.
    pub fn redraw(&mut self) {
        self.redraws += 1;
        self.surface.clear();

        let Some(slice) = &self.slice else {
            return;
        };

        match self.renderer.render(&slice.pixels, self.stretch) {
            Ok(figure) => {
                let overlay = SelectionOverlay::new(figure.axes, self.selector);
                self.surface.attach(RenderedVisual { figure, overlay });
            }
            Err(e) => {
                let text = render_diagnostic(&e, self.stretch, slice.pixels.dim());
                tracing::error!("{text}");
                self.notifier.show_error(&text);
            }
        }
    }

    pub fn pointer_pressed(&mut self, event: PointerEvent) {
        if let Some(visual) = self.surface.visual_mut() {
            visual.overlay.press(event);
        }
    }

    pub fn pointer_released(&mut self, event: PointerEvent) -> Option<Selection> {
        let selection = self.surface.visual_mut()?.overlay.release(event)?;
        tracing::info!("selection {selection}");
        Some(selection)
    }

    pub fn key_pressed(&mut self, key: char) {
        if let Some(visual) = self.surface.visual_mut() {
            visual.overlay.key(key);
        }
    }

    /// Confirm before quitting.
    pub fn request_exit(&mut self) -> Flow {
        if self.notifier.confirm("Exit", "Are you really sure to exit?") {
            Flow::Exit
        } else {
            Flow::Continue
        }
    }

    pub fn show_license(&mut self) {
        match std::fs::read_to_string(&self.license_path) {
            Ok(text) => self.notifier.show_info("License", &text),
            Err(e) => self.notifier.show_error(&format!(
                "Could not read license file {}: {e}",
                self.license_path.display()
            )),
        }
    }

    pub fn show_about(&mut self) {
        self.notifier.show_info(
            "About",
            &format!("DCViewer version {}: {RELEASE_NAME}", env!("CARGO_PKG_VERSION")),
        );
    }

    /// Run a menu command.
    pub fn dispatch(&mut self, command: MenuCommand, prompts: &mut impl Prompts) -> Flow {
        match command {
            MenuCommand::Open => {
                // Failures were already shown to the user.
                let _ = self.open(prompts);
            }
            MenuCommand::DisplayHeader => self.show_header(),
            MenuCommand::Exit => return self.request_exit(),
            MenuCommand::Scale(transform) => self.rescale(transform),
            MenuCommand::License => self.show_license(),
            MenuCommand::About => self.show_about(),
        }
        Flow::Continue
    }
}

/// Full diagnostic text for a failed render.
fn render_diagnostic(
    err: &RenderError,
    transform: StretchTransform,
    (rows, cols): (usize, usize),
) -> String {
    let mut text = format!("Rendering failed: {err}");
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        let _ = write!(text, "\n  caused by: {cause}");
        source = std::error::Error::source(cause);
    }
    let _ = write!(text, "\nstretch: {transform}\npixels: {rows}x{cols}");
    text
}
