use egui::{Align2, FontId, RichText, Stroke};

use crate::commands::EditorCommand;
use crate::state::Action;
use crate::theme::{PREVIEW_BG, PREVIEW_BORDER, SUBTEXT};

const INSET: f32 = 10.0;
const CONTROLS_HEIGHT: f32 = 34.0;

/// Preview placeholder with transport buttons underneath.
pub fn show(ui: &mut egui::Ui, cmds: &mut Vec<EditorCommand>) {
    ui.label(RichText::new("Preview").strong().size(14.0));

    let size = egui::vec2(
        ui.available_width(),
        (ui.available_height() - CONTROLS_HEIGHT).max(120.0),
    );
    let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 0.0, PREVIEW_BG);
    painter.rect_stroke(
        rect.shrink(INSET),
        0.0,
        Stroke::new(2.0, PREVIEW_BORDER),
        egui::StrokeKind::Inside,
    );
    painter.text(
        rect.center(),
        Align2::CENTER_CENTER,
        "Video Preview\n(placeholder)",
        FontId::proportional(18.0),
        SUBTEXT,
    );

    ui.horizontal(|ui| {
        let transport = [
            ("⏮ Prev", Action::PrevFrame),
            ("⏯ Play/Pause", Action::PlayPause),
            ("⏭ Next", Action::NextFrame),
        ];
        for (label, action) in transport {
            if ui.button(label).clicked() {
                cmds.push(EditorCommand::Invoke(action));
            }
        }
    });
}
