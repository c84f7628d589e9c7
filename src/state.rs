use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::commands::EditorCommand;

const STATUS_READY: &str = "Ready";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Editing tool selectable from the tool bar.
pub enum Tool {
    Cut,
    Move,
    AddText,
    Adjust,
}

impl Tool {
    pub const ALL: [Tool; 4] = [Tool::Cut, Tool::Move, Tool::AddText, Tool::Adjust];

    pub fn label(self) -> &'static str {
        match self {
            Tool::Cut => "Cut",
            Tool::Move => "Move",
            Tool::AddText => "Add Text",
            Tool::Adjust => "Adjust",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Tool::Cut => "✂",
            Tool::Move => "🖱",
            Tool::AddText => "🅰",
            Tool::Adjust => "⚙",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Collapsible section of the properties panel.
pub enum Panel {
    Adjustments,
    ColorMixer,
}

impl Panel {
    pub const ALL: [Panel; 2] = [Panel::Adjustments, Panel::ColorMixer];

    pub fn label(self) -> &'static str {
        match self {
            Panel::Adjustments => "Adjustments",
            Panel::ColorMixer => "Color Mixer",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Expanded/collapsed flag for every properties section.
pub struct PanelVisibility {
    pub adjustments: bool,
    pub color_mixer: bool,
}

impl Default for PanelVisibility {
    fn default() -> Self {
        Self {
            adjustments: true,
            color_mixer: true,
        }
    }
}

impl PanelVisibility {
    pub fn is_expanded(&self, panel: Panel) -> bool {
        match panel {
            Panel::Adjustments => self.adjustments,
            Panel::ColorMixer => self.color_mixer,
        }
    }

    fn flag_mut(&mut self, panel: Panel) -> &mut bool {
        match panel {
            Panel::Adjustments => &mut self.adjustments,
            Panel::ColorMixer => &mut self.color_mixer,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Stub actions reachable from menus, buttons, and shortcuts.
pub enum Action {
    NewProject,
    OpenProject,
    Save,
    Undo,
    Redo,
    Cut,
    Copy,
    Paste,
    /// `None` when the file dialog was cancelled.
    Import(Option<PathBuf>),
    Export(Option<PathBuf>),
    PrevFrame,
    PlayPause,
    NextFrame,
    About,
}

impl Action {
    pub fn describe(&self) -> String {
        match self {
            Action::NewProject => "New Project".to_string(),
            Action::OpenProject => "Open Project".to_string(),
            Action::Save => "Save Project".to_string(),
            Action::Undo => "Undo".to_string(),
            Action::Redo => "Redo".to_string(),
            Action::Cut => "Cut".to_string(),
            Action::Copy => "Copy".to_string(),
            Action::Paste => "Paste".to_string(),
            Action::Import(Some(path)) => format!("Imported video: {}", path.display()),
            Action::Import(None) => "Import cancelled".to_string(),
            Action::Export(Some(path)) => format!("Exported video to: {}", path.display()),
            Action::Export(None) => "Export cancelled".to_string(),
            Action::PrevFrame => "Prev Frame".to_string(),
            Action::PlayPause => "Play/Pause".to_string(),
            Action::NextFrame => "Next Frame".to_string(),
            Action::About => "About".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Adjustment {
    Brightness,
    Contrast,
    Shadows,
    Highlights,
    Whites,
    Blacks,
    Levels,
}

impl Adjustment {
    pub const ALL: [Adjustment; 7] = [
        Adjustment::Brightness,
        Adjustment::Contrast,
        Adjustment::Shadows,
        Adjustment::Highlights,
        Adjustment::Whites,
        Adjustment::Blacks,
        Adjustment::Levels,
    ];
    pub const MIN: f32 = -100.0;
    pub const MAX: f32 = 100.0;

    pub fn label(self) -> &'static str {
        match self {
            Adjustment::Brightness => "Brightness",
            Adjustment::Contrast => "Contrast",
            Adjustment::Shadows => "Shadows",
            Adjustment::Highlights => "Highlights",
            Adjustment::Whites => "Whites",
            Adjustment::Blacks => "Blacks",
            Adjustment::Levels => "Levels",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
/// Tonal slider values shown in the Adjustments section.
pub struct Adjustments {
    pub brightness: f32,
    pub contrast: f32,
    pub shadows: f32,
    pub highlights: f32,
    pub whites: f32,
    pub blacks: f32,
    pub levels: f32,
}

impl Default for Adjustments {
    fn default() -> Self {
        Self {
            brightness: 0.0,
            contrast: 0.0,
            shadows: 0.0,
            highlights: 0.0,
            whites: 0.0,
            blacks: 0.0,
            levels: 1.0,
        }
    }
}

impl Adjustments {
    pub fn get(&self, kind: Adjustment) -> f32 {
        match kind {
            Adjustment::Brightness => self.brightness,
            Adjustment::Contrast => self.contrast,
            Adjustment::Shadows => self.shadows,
            Adjustment::Highlights => self.highlights,
            Adjustment::Whites => self.whites,
            Adjustment::Blacks => self.blacks,
            Adjustment::Levels => self.levels,
        }
    }

    fn get_mut(&mut self, kind: Adjustment) -> &mut f32 {
        match kind {
            Adjustment::Brightness => &mut self.brightness,
            Adjustment::Contrast => &mut self.contrast,
            Adjustment::Shadows => &mut self.shadows,
            Adjustment::Highlights => &mut self.highlights,
            Adjustment::Whites => &mut self.whites,
            Adjustment::Blacks => &mut self.blacks,
            Adjustment::Levels => &mut self.levels,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorChannel {
    Red,
    Green,
    Blue,
}

impl ColorChannel {
    pub const ALL: [ColorChannel; 3] = [ColorChannel::Red, ColorChannel::Green, ColorChannel::Blue];

    pub fn label(self) -> &'static str {
        match self {
            ColorChannel::Red => "R",
            ColorChannel::Green => "G",
            ColorChannel::Blue => "B",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// RGB mix shown in the Color Mixer section.
pub struct ColorMix {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Default for ColorMix {
    fn default() -> Self {
        Self {
            red: 128,
            green: 128,
            blue: 128,
        }
    }
}

impl ColorMix {
    pub fn get(&self, channel: ColorChannel) -> u8 {
        match channel {
            ColorChannel::Red => self.red,
            ColorChannel::Green => self.green,
            ColorChannel::Blue => self.blue,
        }
    }

    fn get_mut(&mut self, channel: ColorChannel) -> &mut u8 {
        match channel {
            ColorChannel::Red => &mut self.red,
            ColorChannel::Green => &mut self.green,
            ColorChannel::Blue => &mut self.blue,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
/// Everything the editor window reads and writes.
///
/// Widgets never touch the fields directly; they emit an [`EditorCommand`]
/// and the app routes it through [`EditorState::apply`] after the UI pass.
pub struct EditorState {
    active_tool: Option<Tool>,
    panels: PanelVisibility,
    adjustments: Adjustments,
    color_mix: ColorMix,
    status: String,
}

impl Default for EditorState {
    fn default() -> Self {
        Self {
            active_tool: None,
            panels: PanelVisibility::default(),
            adjustments: Adjustments::default(),
            color_mix: ColorMix::default(),
            status: STATUS_READY.to_string(),
        }
    }
}

impl EditorState {
    pub fn active_tool(&self) -> Option<Tool> {
        self.active_tool
    }

    pub fn panels(&self) -> &PanelVisibility {
        &self.panels
    }

    pub fn adjustments(&self) -> &Adjustments {
        &self.adjustments
    }

    pub fn color_mix(&self) -> &ColorMix {
        &self.color_mix
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    /// Applies one queued command. `Quit` is left to the caller.
    pub fn apply(&mut self, cmd: EditorCommand) {
        match cmd {
            EditorCommand::SelectTool(tool) => self.select_tool(tool),
            EditorCommand::TogglePanel(panel) => {
                self.toggle_panel(panel);
            }
            EditorCommand::Invoke(action) => self.invoke(action),
            EditorCommand::SetAdjustment(kind, value) => self.set_adjustment(kind, value),
            EditorCommand::SetColor(channel, value) => self.set_color(channel, value),
            EditorCommand::Quit => {}
        }
    }

    pub fn select_tool(&mut self, tool: Tool) {
        self.active_tool = Some(tool);
        self.status = format!("Tool: {}", tool.label());
        tracing::info!(tool = tool.label(), "selected tool");
    }

    /// Flips the section's flag and returns whether it is now expanded.
    pub fn toggle_panel(&mut self, panel: Panel) -> bool {
        let flag = self.panels.flag_mut(panel);
        *flag = !*flag;
        let expanded = *flag;
        self.status = format!(
            "{} {}",
            panel.label(),
            if expanded { "expanded" } else { "collapsed" }
        );
        tracing::debug!(panel = panel.label(), expanded, "toggled panel");
        expanded
    }

    pub fn invoke(&mut self, action: Action) {
        let description = action.describe();
        tracing::info!("[placeholder] {}", description);
        self.status = format!("Action: {}", description);
    }

    pub fn set_adjustment(&mut self, kind: Adjustment, value: f32) {
        let value = value.clamp(Adjustment::MIN, Adjustment::MAX);
        *self.adjustments.get_mut(kind) = value;
        self.status = format!("{}: {:.2}", kind.label(), value);
        tracing::debug!(adjustment = kind.label(), value, "adjust");
    }

    pub fn set_color(&mut self, channel: ColorChannel, value: u8) {
        *self.color_mix.get_mut(channel) = value;
        self.status = format!("{}: {}", channel.label(), value);
        tracing::debug!(channel = channel.label(), value, "color");
    }

    /// Compact JSON snapshot for debug logging.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_actions() -> Vec<Action> {
        vec![
            Action::NewProject,
            Action::OpenProject,
            Action::Save,
            Action::Undo,
            Action::Redo,
            Action::Cut,
            Action::Copy,
            Action::Paste,
            Action::Import(Some(PathBuf::from("/videos/clip.mp4"))),
            Action::Import(None),
            Action::Export(Some(PathBuf::from("/videos/out.mp4"))),
            Action::Export(None),
            Action::PrevFrame,
            Action::PlayPause,
            Action::NextFrame,
            Action::About,
        ]
    }

    #[test]
    fn initial_state_has_no_tool_and_expanded_panels() {
        let state = EditorState::default();
        assert_eq!(state.active_tool(), None);
        assert!(state.panels().is_expanded(Panel::Adjustments));
        assert!(state.panels().is_expanded(Panel::ColorMixer));
        assert_eq!(state.status(), "Ready");
        assert_eq!(state.adjustments().levels, 1.0);
        assert_eq!(state.adjustments().brightness, 0.0);
        assert_eq!(state.color_mix(), &ColorMix::default());
    }

    #[test]
    fn select_tool_sets_active_tool_and_status() {
        let mut state = EditorState::default();
        for tool in Tool::ALL {
            state.select_tool(tool);
            assert_eq!(state.active_tool(), Some(tool));
            assert_eq!(state.status(), format!("Tool: {}", tool.label()));
        }
    }

    #[test]
    fn any_tool_may_follow_any_other() {
        let mut state = EditorState::default();
        for from in Tool::ALL {
            for to in Tool::ALL {
                state.select_tool(from);
                state.select_tool(to);
                assert_eq!(state.active_tool(), Some(to));
            }
        }
    }

    #[test]
    fn toggle_panel_twice_restores_original() {
        let mut state = EditorState::default();
        for panel in Panel::ALL {
            let before = state.panels().is_expanded(panel);
            assert_eq!(state.toggle_panel(panel), !before);
            assert_eq!(state.toggle_panel(panel), before);
            assert_eq!(state.panels().is_expanded(panel), before);
        }
    }

    #[test]
    fn toggle_panel_leaves_other_panel_alone() {
        let mut state = EditorState::default();
        state.toggle_panel(Panel::ColorMixer);
        assert!(!state.panels().is_expanded(Panel::ColorMixer));
        assert!(state.panels().is_expanded(Panel::Adjustments));
        assert_eq!(state.status(), "Color Mixer collapsed");
    }

    #[test]
    fn invoke_always_leaves_non_empty_status() {
        let mut state = EditorState::default();
        for action in all_actions() {
            state.invoke(action);
            assert!(state.status().starts_with("Action: "));
            assert!(state.status().len() > "Action: ".len());
        }
    }

    #[test]
    fn invoke_does_not_touch_tool_or_panels() {
        let mut state = EditorState::default();
        state.select_tool(Tool::Move);
        state.invoke(Action::Undo);
        assert_eq!(state.active_tool(), Some(Tool::Move));
        assert_eq!(state.panels(), &PanelVisibility::default());
    }

    #[test]
    fn import_status_includes_chosen_path() {
        let mut state = EditorState::default();
        state.invoke(Action::Import(Some(PathBuf::from("/videos/clip.mp4"))));
        assert_eq!(state.status(), "Action: Imported video: /videos/clip.mp4");
        state.invoke(Action::Export(None));
        assert_eq!(state.status(), "Action: Export cancelled");
    }

    #[test]
    fn set_adjustment_clamps_and_formats() {
        let mut state = EditorState::default();
        state.set_adjustment(Adjustment::Brightness, 12.5);
        assert_eq!(state.adjustments().get(Adjustment::Brightness), 12.5);
        assert_eq!(state.status(), "Brightness: 12.50");

        state.set_adjustment(Adjustment::Contrast, 250.0);
        assert_eq!(state.adjustments().contrast, 100.0);
        state.set_adjustment(Adjustment::Blacks, -250.0);
        assert_eq!(state.adjustments().blacks, -100.0);
    }

    #[test]
    fn set_color_updates_channel_and_status() {
        let mut state = EditorState::default();
        state.set_color(ColorChannel::Green, 200);
        assert_eq!(state.color_mix().get(ColorChannel::Green), 200);
        assert_eq!(state.color_mix().red, 128);
        assert_eq!(state.status(), "G: 200");
    }

    #[test]
    fn apply_routes_commands() {
        let mut state = EditorState::default();
        state.apply(EditorCommand::SelectTool(Tool::AddText));
        assert_eq!(state.active_tool(), Some(Tool::AddText));
        state.apply(EditorCommand::TogglePanel(Panel::Adjustments));
        assert!(!state.panels().adjustments);
        state.apply(EditorCommand::SetColor(ColorChannel::Blue, 7));
        assert_eq!(state.color_mix().blue, 7);
        state.apply(EditorCommand::Invoke(Action::Redo));
        assert_eq!(state.status(), "Action: Redo");
    }

    #[test]
    fn quit_leaves_state_untouched() {
        let mut state = EditorState::default();
        state.select_tool(Tool::Cut);
        let before = state.to_json();
        state.apply(EditorCommand::Quit);
        assert_eq!(state.to_json(), before);
    }

    #[test]
    fn state_snapshot_round_trips_through_json() {
        let mut state = EditorState::default();
        state.select_tool(Tool::Adjust);
        state.toggle_panel(Panel::Adjustments);
        let restored: EditorState = serde_json::from_str(&state.to_json()).unwrap();
        assert_eq!(restored.active_tool(), Some(Tool::Adjust));
        assert!(!restored.panels().adjustments);
        assert_eq!(restored.status(), state.status());
    }

    #[test]
    fn cut_then_collapse_then_save_writes_nothing() {
        let before: Vec<_> = std::fs::read_dir(".")
            .unwrap()
            .flatten()
            .map(|e| e.file_name())
            .collect();

        let mut state = EditorState::default();
        state.apply(EditorCommand::SelectTool(Tool::Cut));
        assert_eq!(state.status(), "Tool: Cut");
        state.apply(EditorCommand::TogglePanel(Panel::ColorMixer));
        assert!(!state.panels().is_expanded(Panel::ColorMixer));

        let save = crate::shortcuts::command_for(egui::Modifiers::COMMAND, egui::Key::S);
        state.apply(save.unwrap());
        assert_eq!(state.status(), "Action: Save Project");

        let mut after: Vec<_> = std::fs::read_dir(".")
            .unwrap()
            .flatten()
            .map(|e| e.file_name())
            .collect();
        let mut before = before;
        before.sort();
        after.sort();
        assert_eq!(before, after);
    }
}
