use egui::{RichText, Stroke};

use crate::theme::{DARK_PANEL, DARK_WIDGET, TIMELINE_BG};

const CLIP_COUNT: usize = 12;
const CLIP_SIZE: egui::Vec2 = egui::vec2(180.0, 90.0);

/// Label drawn on the `index`-th (zero based) placeholder clip.
pub fn clip_label(index: usize) -> String {
    format!("Clip {}\n00:{:02}:00", index + 1, index)
}

/// Horizontally scrollable strip of placeholder clips.
pub fn show(ui: &mut egui::Ui) {
    ui.label(RichText::new("Timeline").strong());

    egui::Frame::new()
        .fill(TIMELINE_BG)
        .inner_margin(egui::Margin::symmetric(0, 12))
        .show(ui, |ui| {
            egui::ScrollArea::horizontal()
                .id_salt("timeline_scroll")
                .auto_shrink([false, true])
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        for i in 0..CLIP_COUNT {
                            ui.add_space(6.0);
                            clip_block(ui, &clip_label(i));
                        }
                        ui.add_space(6.0);
                    });
                });
        });
}

fn clip_block(ui: &mut egui::Ui, label: &str) {
    let (rect, resp) = ui.allocate_exact_size(CLIP_SIZE, egui::Sense::hover());
    let stroke = if resp.hovered() {
        Stroke::new(1.0, ui.visuals().selection.bg_fill)
    } else {
        Stroke::new(1.0, DARK_WIDGET)
    };
    let painter = ui.painter();
    painter.rect_filled(rect, 3.0, DARK_PANEL);
    painter.rect_stroke(rect, 3.0, stroke, egui::StrokeKind::Inside);
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        label,
        egui::FontId::proportional(13.0),
        ui.visuals().text_color(),
    );
}

#[cfg(test)]
mod tests {
    use super::clip_label;

    #[test]
    fn clip_labels_count_from_one() {
        assert_eq!(clip_label(0), "Clip 1\n00:00:00");
        assert_eq!(clip_label(11), "Clip 12\n00:11:00");
    }
}
