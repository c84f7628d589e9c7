// Every interaction with the editor window is expressed as an EditorCommand.
// Widgets push these during the UI pass; app.rs applies them afterwards.

use crate::state::{Action, Adjustment, ColorChannel, Panel, Tool};

#[derive(Debug, Clone, PartialEq)]
pub enum EditorCommand {
    SelectTool(Tool),
    TogglePanel(Panel),
    Invoke(Action),
    SetAdjustment(Adjustment, f32),
    SetColor(ColorChannel, u8),
    /// Close the main window. Handled by the app, not by `EditorState`.
    Quit,
}
