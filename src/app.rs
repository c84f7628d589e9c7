use egui::RichText;

use crate::commands::EditorCommand;
use crate::config::AppConfig;
use crate::state::{Action, EditorState};
use crate::theme::{DARK_BG, SUBTEXT};
use crate::{preview, properties, shortcuts, timeline, toolbar};

const TOOLBAR_WIDTH: f32 = 88.0;
const PROPERTIES_WIDTH: f32 = 320.0;
const TIMELINE_HEIGHT: f32 = 150.0;

pub struct FioraApp {
    state: EditorState,
    show_about: bool,
    /// Commands emitted by widgets this frame, applied after the UI pass.
    pending_cmds: Vec<EditorCommand>,
    config: AppConfig,
}

impl FioraApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        crate::theme::configure_style(&cc.egui_ctx);
        Self {
            state: EditorState::default(),
            show_about: false,
            pending_cmds: Vec::new(),
            config,
        }
    }

    fn process_commands(&mut self, ctx: &egui::Context) {
        if self.pending_cmds.is_empty() {
            return;
        }
        for cmd in std::mem::take(&mut self.pending_cmds) {
            match cmd {
                EditorCommand::Quit => {
                    tracing::info!("quit requested");
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
                EditorCommand::Invoke(Action::About) => {
                    self.show_about = true;
                    self.state.apply(EditorCommand::Invoke(Action::About));
                }
                cmd => self.state.apply(cmd),
            }
        }
        tracing::debug!(state = %self.state.to_json(), "applied commands");
    }

    fn menu_bar(&mut self, ui: &mut egui::Ui) {
        let cmds = &mut self.pending_cmds;
        let mut item = |ui: &mut egui::Ui, label: &str, cmd: EditorCommand| {
            if ui.button(label).clicked() {
                cmds.push(cmd);
                ui.close_menu();
            }
        };

        egui::menu::bar(ui, |ui| {
            ui.menu_button("File", |ui| {
                item(ui, "New Project", EditorCommand::Invoke(Action::NewProject));
                item(ui, "Open...", EditorCommand::Invoke(Action::OpenProject));
                item(ui, "Save  (Ctrl+S)", EditorCommand::Invoke(Action::Save));
                ui.separator();
                item(ui, "Exit  (Ctrl+Q)", EditorCommand::Quit);
            });
            ui.menu_button("Edit", |ui| {
                item(ui, "Undo", EditorCommand::Invoke(Action::Undo));
                item(ui, "Redo", EditorCommand::Invoke(Action::Redo));
                ui.separator();
                item(ui, "Cut", EditorCommand::Invoke(Action::Cut));
                item(ui, "Copy", EditorCommand::Invoke(Action::Copy));
                item(ui, "Paste", EditorCommand::Invoke(Action::Paste));
            });
            ui.menu_button("Help", |ui| {
                item(ui, "About", EditorCommand::Invoke(Action::About));
            });
        });
    }

    fn about_window(&mut self, ctx: &egui::Context) {
        egui::Window::new("About")
            .open(&mut self.show_about)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(RichText::new("MiniVideo — Prototype").strong());
                ui.label("Fiora video editor GUI");
                ui.label(RichText::new("No video processing is performed.").color(SUBTEXT));
            });
    }
}

impl eframe::App for FioraApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Track window size for saving on exit
        if let Some(rect) = ctx.input(|i| i.viewport().inner_rect) {
            self.config.window_width = Some(rect.width());
            self.config.window_height = Some(rect.height());
        }

        shortcuts::poll(ctx, &mut self.pending_cmds);

        egui::TopBottomPanel::top("main_menu").show(ctx, |ui| {
            self.menu_bar(ui);
        });

        egui::TopBottomPanel::bottom("status_bar")
            .frame(
                egui::Frame::new()
                    .fill(DARK_BG)
                    .inner_margin(egui::Margin::symmetric(8, 4)),
            )
            .show(ctx, |ui| {
                ui.label(RichText::new(self.state.status()).color(SUBTEXT));
            });

        egui::SidePanel::left("toolbar")
            .resizable(false)
            .exact_width(TOOLBAR_WIDTH)
            .show(ctx, |ui| {
                toolbar::show(ui, self.state.active_tool(), &mut self.pending_cmds);
            });

        egui::SidePanel::right("properties")
            .default_width(PROPERTIES_WIDTH)
            .min_width(220.0)
            .show(ctx, |ui| {
                properties::show(ui, &self.state, &mut self.pending_cmds);
            });

        egui::TopBottomPanel::bottom("timeline")
            .resizable(true)
            .default_height(TIMELINE_HEIGHT)
            .min_height(120.0)
            .show(ctx, |ui| {
                timeline::show(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            preview::show(ui, &mut self.pending_cmds);
        });

        self.about_window(ctx);
        self.process_commands(ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.config.save();
    }
}
