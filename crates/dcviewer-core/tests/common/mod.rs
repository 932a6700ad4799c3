use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use ndarray::Array2;

use dcviewer_core::config::ViewerConfig;
use dcviewer_core::consts::{FITS_BLOCK_SIZE, FITS_CARD_SIZE};
use dcviewer_core::dialog::{FileFilter, Notifier, Prompts};
use dcviewer_core::error::{CubeReadError, RenderError};
use dcviewer_core::fits::{CubeReader, CubeSlice};
use dcviewer_core::header::{FitsHeader, HeaderCard};
use dcviewer_core::overlay::{PointerButton, PointerEvent};
use dcviewer_core::render::{Figure, Point, Renderer, StretchRenderer};
use dcviewer_core::stretch::StretchTransform;
use dcviewer_core::viewer::Viewer;

/// Number of wavelength planes served by [`FakeReader`].
pub const FAKE_PLANES: i64 = 5;

/// Path that [`FakeReader`] treats as missing.
pub const MISSING: &str = "missing.fits";

pub type TestViewer = Viewer<FakeReader, SwitchRenderer, RecordingNotifier>;

// ---------------------------------------------------------------------------
// Cube reader
// ---------------------------------------------------------------------------

/// Serves a synthetic 4x6 plane per wavelength and records every call.
#[derive(Clone, Default)]
pub struct FakeReader {
    calls: Rc<RefCell<Vec<(PathBuf, i64)>>>,
}

impl FakeReader {
    pub fn calls(&self) -> Vec<(PathBuf, i64)> {
        self.calls.borrow().clone()
    }
}

impl CubeReader for FakeReader {
    fn read(&self, path: &Path, wavelength: i64) -> Result<CubeSlice, CubeReadError> {
        self.calls
            .borrow_mut()
            .push((path.to_path_buf(), wavelength));

        if path == Path::new(MISSING) {
            return Err(CubeReadError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "no such file",
            )));
        }
        if !(0..FAKE_PLANES).contains(&wavelength) {
            return Err(CubeReadError::WavelengthOutOfRange {
                index: wavelength,
                total: FAKE_PLANES as usize,
            });
        }
        Ok(synthetic_slice(wavelength))
    }
}

pub fn synthetic_slice(wavelength: i64) -> CubeSlice {
    let pixels = Array2::from_shape_fn((4, 6), |(r, c)| (r * 6 + c) as f32 + wavelength as f32);
    let header = FitsHeader::new(vec![
        card("SIMPLE  =                    T"),
        card(&format!("WAVEIDX = {wavelength:>20} / plane index")),
    ]);
    CubeSlice { pixels, header }
}

pub fn card(text: &str) -> HeaderCard {
    HeaderCard::parse(format!("{text:<80}").as_bytes())
}

// ---------------------------------------------------------------------------
// Renderer
// ---------------------------------------------------------------------------

/// Delegates to [`StretchRenderer`] unless told to fail.
#[derive(Clone, Default)]
pub struct SwitchRenderer {
    fail: Rc<Cell<bool>>,
    calls: Rc<Cell<usize>>,
}

impl SwitchRenderer {
    pub fn set_failing(&self, fail: bool) {
        self.fail.set(fail);
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl Renderer for SwitchRenderer {
    fn render(
        &self,
        pixels: &Array2<f32>,
        transform: StretchTransform,
    ) -> Result<Figure, RenderError> {
        self.calls.set(self.calls.get() + 1);
        if self.fail.get() {
            return Err(RenderError::NoFiniteValues);
        }
        StretchRenderer::default().render(pixels, transform)
    }
}

// ---------------------------------------------------------------------------
// Dialogs
// ---------------------------------------------------------------------------

/// Records messages; answers confirmations from a queue (default: no).
#[derive(Default)]
pub struct RecordingNotifier {
    pub infos: Vec<(String, String)>,
    pub errors: Vec<String>,
    pub questions: Vec<(String, String)>,
    pub answers: VecDeque<bool>,
}

impl Notifier for RecordingNotifier {
    fn show_info(&mut self, title: &str, text: &str) {
        self.infos.push((title.to_string(), text.to_string()));
    }

    fn show_error(&mut self, text: &str) {
        self.errors.push(text.to_string());
    }

    fn confirm(&mut self, title: &str, question: &str) -> bool {
        self.questions.push((title.to_string(), question.to_string()));
        self.answers.pop_front().unwrap_or(false)
    }
}

/// Replays scripted answers; an exhausted queue behaves like cancel.
#[derive(Default)]
pub struct ScriptedPrompts {
    pub files: VecDeque<Option<PathBuf>>,
    pub integers: VecDeque<Option<i64>>,
    pub integer_prompts: usize,
}

impl ScriptedPrompts {
    pub fn answering(file: Option<&str>, wavelength: Option<i64>) -> Self {
        Self {
            files: VecDeque::from([file.map(PathBuf::from)]),
            integers: VecDeque::from([wavelength]),
            integer_prompts: 0,
        }
    }
}

impl Prompts for ScriptedPrompts {
    fn pick_open_file(&mut self, _filters: &[FileFilter]) -> Option<PathBuf> {
        self.files.pop_front().flatten()
    }

    fn prompt_integer(&mut self, _title: &str, _message: &str) -> Option<i64> {
        self.integer_prompts += 1;
        self.integers.pop_front().flatten()
    }
}

// ---------------------------------------------------------------------------
// Viewer + input helpers
// ---------------------------------------------------------------------------

/// Viewer wired to fakes; the returned handles share state with it.
pub fn test_viewer() -> (TestViewer, FakeReader, SwitchRenderer) {
    test_viewer_with(&ViewerConfig::default())
}

pub fn test_viewer_with(config: &ViewerConfig) -> (TestViewer, FakeReader, SwitchRenderer) {
    let reader = FakeReader::default();
    let renderer = SwitchRenderer::default();
    let viewer = Viewer::new(
        reader.clone(),
        renderer.clone(),
        RecordingNotifier::default(),
        config,
    );
    (viewer, reader, renderer)
}

/// Pointer event whose data position is half the screen position.
pub fn pointer(x: f32, y: f32, button: PointerButton) -> PointerEvent {
    PointerEvent {
        screen: Point::new(x, y),
        data: Point::new(x / 2.0, y / 2.0),
        button,
    }
}

// ---------------------------------------------------------------------------
// FITS files
// ---------------------------------------------------------------------------

/// Build a primary-HDU FITS file: header cards, then big-endian `data`,
/// both padded to whole blocks.
pub fn build_fits(bitpix: i64, naxes: &[usize], extra_cards: &[&str], data: &[u8]) -> Vec<u8> {
    let mut cards = vec![
        format!("SIMPLE  = {:>20}", "T"),
        format!("BITPIX  = {bitpix:>20}"),
        format!("NAXIS   = {:>20}", naxes.len()),
    ];
    for (i, len) in naxes.iter().enumerate() {
        cards.push(format!("NAXIS{:<3}= {len:>20}", i + 1));
    }
    cards.extend(extra_cards.iter().map(|c| c.to_string()));
    cards.push("END".to_string());

    let mut buf = Vec::new();
    for c in &cards {
        buf.extend_from_slice(format!("{c:<80}").as_bytes());
    }
    pad_to_block(&mut buf, b' ');
    assert_eq!(buf.len() % FITS_BLOCK_SIZE, 0);
    assert_eq!(FITS_BLOCK_SIZE % FITS_CARD_SIZE, 0);

    buf.extend_from_slice(data);
    pad_to_block(&mut buf, 0);
    buf
}

fn pad_to_block(buf: &mut Vec<u8>, fill: u8) {
    let rem = buf.len() % FITS_BLOCK_SIZE;
    if rem != 0 {
        buf.resize(buf.len() + FITS_BLOCK_SIZE - rem, fill);
    }
}

pub fn i16_be(values: &[i16]) -> Vec<u8> {
    values.iter().flat_map(|v| v.to_be_bytes()).collect()
}

pub fn f32_be(values: &[f32]) -> Vec<u8> {
    values.iter().flat_map(|v| v.to_be_bytes()).collect()
}

/// Write bytes to a temporary file that lives as long as the handle.
pub fn write_test_fits(data: &[u8]) -> tempfile::NamedTempFile {
    use std::io::Write;
    let mut f = tempfile::NamedTempFile::new().expect("create temp file");
    f.write_all(data).expect("write FITS data");
    f.flush().expect("flush");
    f
}
