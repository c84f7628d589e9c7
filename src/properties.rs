use egui::RichText;

use crate::commands::EditorCommand;
use crate::state::{Adjustment, ColorChannel, EditorState, Panel};

/// Header text for a collapsible section.
pub fn header_text(panel: Panel, expanded: bool) -> String {
    let arrow = if expanded { "▼" } else { "►" };
    format!("{} {}", arrow, panel.label())
}

/// Right-hand properties panel with the Adjustments and Color Mixer sections.
pub fn show(ui: &mut egui::Ui, state: &EditorState, cmds: &mut Vec<EditorCommand>) {
    ui.label(RichText::new("Properties").strong().size(14.0));
    ui.add_space(4.0);

    egui::ScrollArea::vertical()
        .id_salt("properties_scroll")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for panel in Panel::ALL {
                let expanded = state.panels().is_expanded(panel);
                if ui
                    .add(egui::Button::new(
                        RichText::new(header_text(panel, expanded)).strong(),
                    ))
                    .clicked()
                {
                    cmds.push(EditorCommand::TogglePanel(panel));
                }
                if expanded {
                    ui.indent(panel.label(), |ui| match panel {
                        Panel::Adjustments => adjustments_section(ui, state, cmds),
                        Panel::ColorMixer => color_section(ui, state, cmds),
                    });
                }
                ui.add_space(6.0);
            }
        });
}

fn adjustments_section(ui: &mut egui::Ui, state: &EditorState, cmds: &mut Vec<EditorCommand>) {
    egui::Grid::new("adjustments_grid")
        .num_columns(2)
        .spacing([8.0, 6.0])
        .show(ui, |ui| {
            for kind in Adjustment::ALL {
                // Sliders edit a local copy; the state changes only through the command.
                let mut value = state.adjustments().get(kind);
                ui.label(kind.label());
                let resp = ui.add(
                    egui::Slider::new(&mut value, Adjustment::MIN..=Adjustment::MAX)
                        .fixed_decimals(2)
                        .clamping(egui::SliderClamping::Always),
                );
                if resp.changed() {
                    cmds.push(EditorCommand::SetAdjustment(kind, value));
                }
                ui.end_row();
            }
        });
}

fn color_section(ui: &mut egui::Ui, state: &EditorState, cmds: &mut Vec<EditorCommand>) {
    egui::Grid::new("color_grid")
        .num_columns(2)
        .spacing([8.0, 6.0])
        .show(ui, |ui| {
            for channel in ColorChannel::ALL {
                let mut value = state.color_mix().get(channel);
                ui.label(channel.label());
                let resp = ui.add(
                    egui::Slider::new(&mut value, 0_u8..=255_u8)
                        .clamping(egui::SliderClamping::Always),
                );
                if resp.changed() {
                    cmds.push(EditorCommand::SetColor(channel, value));
                }
                ui.end_row();
            }
        });
}

#[cfg(test)]
mod tests {
    use super::header_text;
    use crate::state::Panel;

    #[test]
    fn header_arrow_tracks_expansion() {
        assert_eq!(header_text(Panel::Adjustments, true), "▼ Adjustments");
        assert_eq!(header_text(Panel::ColorMixer, false), "► Color Mixer");
    }
}
