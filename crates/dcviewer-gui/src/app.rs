use std::path::PathBuf;

use dcviewer_core::config::ViewerConfig;
use dcviewer_core::dialog::FITS_FILTERS;
use dcviewer_core::fits::FitsCubeReader;
use dcviewer_core::menu::{Flow, MenuCommand};
use dcviewer_core::render::StretchRenderer;
use dcviewer_core::viewer::Viewer;

use crate::convert::figure_to_color_image;
use crate::dialogs::{self, GuiNotifier, StagedPrompts};
use crate::panels;
use crate::state::{ViewportState, WavelengthPrompt};

pub type GuiViewer = Viewer<FitsCubeReader, StretchRenderer, GuiNotifier>;

const MAX_LOG_LINES: usize = 200;

pub struct DcViewerApp {
    pub viewer: GuiViewer,
    pub viewport: ViewportState,
    pub wavelength_prompt: Option<WavelengthPrompt>,
    pub log_messages: Vec<String>,
    /// Set once the user has said yes to the exit question.
    exit_confirmed: bool,
}

impl DcViewerApp {
    pub fn new(config: &ViewerConfig) -> Self {
        Self {
            viewer: Viewer::new(
                FitsCubeReader,
                StretchRenderer::new(config.log_exponent),
                GuiNotifier::default(),
                config,
            ),
            viewport: ViewportState::default(),
            wavelength_prompt: None,
            log_messages: Vec::new(),
            exit_confirmed: false,
        }
    }

    pub fn add_log(&mut self, message: String) {
        self.log_messages.push(message);
        if self.log_messages.len() > MAX_LOG_LINES {
            let excess = self.log_messages.len() - MAX_LOG_LINES;
            self.log_messages.drain(..excess);
        }
    }

    /// Run a menu command. Open needs a second frame for the wavelength
    /// prompt; everything else goes straight to the viewer.
    pub fn run_command(&mut self, ctx: &egui::Context, command: MenuCommand) {
        match command {
            MenuCommand::Open => {
                if let Some(path) = dialogs::pick_file(FITS_FILTERS) {
                    self.wavelength_prompt = Some(WavelengthPrompt::new(path));
                }
            }
            command => {
                if self.viewer.dispatch(command, &mut StagedPrompts::default()) == Flow::Exit {
                    self.exit_confirmed = true;
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            }
        }
    }

    /// Load the answers collected by the open flow.
    pub fn finish_open(&mut self, path: PathBuf, wavelength: i64) {
        let mut staged = StagedPrompts::new(path.clone(), wavelength);
        if let Some(Ok(())) = self.viewer.open(&mut staged) {
            self.add_log(format!(
                "Opened {} at wavelength {wavelength}",
                path.display()
            ));
        }
    }

    /// Rebuild the texture when the viewer attached a new visual, drop it
    /// when the surface is empty.
    fn sync_texture(&mut self, ctx: &egui::Context) {
        let surface = self.viewer.surface();
        let Some(visual) = surface.visual() else {
            self.viewport.texture = None;
            self.viewport.generation = None;
            return;
        };
        if self.viewport.generation == Some(surface.generation()) {
            return;
        }

        let image = figure_to_color_image(&visual.figure);
        let size = image.size;
        if self.viewport.image_size != Some(size) {
            self.viewport.fit_pending = true;
        }
        self.viewport.texture = Some(ctx.load_texture(
            "viewport",
            image,
            egui::TextureOptions::NEAREST,
        ));
        self.viewport.image_size = Some(size);
        self.viewport.generation = Some(surface.generation());
    }

    /// Window close goes through the same confirmation as File > Exit.
    fn intercept_close(&mut self, ctx: &egui::Context) {
        if self.exit_confirmed || !ctx.input(|i| i.viewport().close_requested()) {
            return;
        }
        ctx.send_viewport_cmd(egui::ViewportCommand::CancelClose);
        self.run_command(ctx, MenuCommand::Exit);
    }
}

impl eframe::App for DcViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.intercept_close(ctx);

        panels::menu_bar::show(ctx, self);
        self.sync_texture(ctx);

        panels::status::show(ctx, self);
        panels::viewport::show(ctx, self);
        panels::wavelength_prompt::show(ctx, self);
        panels::info_windows::show(ctx, self);
    }
}
