use egui::RichText;
use rfd::FileDialog;

use crate::commands::EditorCommand;
use crate::state::{Action, Tool};
use crate::theme::{ACCENT, SUBTEXT};

const BUTTON_HEIGHT: f32 = 52.0;
pub const VIDEO_EXTS: &[&str] = &["mp4", "avi", "mov", "mkv"];

/// Left tool bar: tool selection plus Import/Export.
pub fn show(ui: &mut egui::Ui, active: Option<Tool>, cmds: &mut Vec<EditorCommand>) {
    ui.vertical_centered_justified(|ui| {
        ui.add_space(6.0);
        ui.label(RichText::new("TOOLS").strong().size(11.0).color(SUBTEXT));
        ui.add_space(4.0);

        for tool in Tool::ALL {
            let selected = active == Some(tool);
            let mut text = RichText::new(format!("{}\n{}", tool.icon(), tool.label()));
            if selected {
                text = text.color(ACCENT);
            }
            let resp = ui.add_sized(
                [ui.available_width(), BUTTON_HEIGHT],
                egui::Button::new(text).selected(selected),
            );
            if resp.clicked() {
                cmds.push(EditorCommand::SelectTool(tool));
            }
        }

        ui.add_space(8.0);
        ui.separator();
        ui.add_space(8.0);

        // Import/Export do not change the active tool.
        if tool_button(ui, "📁\nImport").clicked() {
            let path = FileDialog::new()
                .set_title("Import Video")
                .add_filter("Video Files", VIDEO_EXTS)
                .add_filter("All Files", &["*"])
                .pick_file();
            cmds.push(EditorCommand::Invoke(Action::Import(path)));
        }
        if tool_button(ui, "💾\nExport").clicked() {
            let path = FileDialog::new()
                .set_title("Export Video")
                .set_file_name("untitled.mp4")
                .add_filter("MP4 Video", &["mp4"])
                .add_filter("All Files", &["*"])
                .save_file()
                .map(with_default_extension);
            cmds.push(EditorCommand::Invoke(Action::Export(path)));
        }
    });
}

fn tool_button(ui: &mut egui::Ui, text: &str) -> egui::Response {
    ui.add_sized([ui.available_width(), BUTTON_HEIGHT], egui::Button::new(text))
}

fn with_default_extension(path: std::path::PathBuf) -> std::path::PathBuf {
    if path.extension().is_some() {
        path
    } else {
        path.with_extension("mp4")
    }
}
