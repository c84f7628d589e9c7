use egui::{Key, Modifiers};

use crate::commands::EditorCommand;
use crate::state::Action;

/// Maps a key press to a global shortcut, if it is one.
pub fn command_for(modifiers: Modifiers, key: Key) -> Option<EditorCommand> {
    if !modifiers.command || modifiers.shift || modifiers.alt {
        return None;
    }
    match key {
        Key::Q => Some(EditorCommand::Quit),
        Key::S => Some(EditorCommand::Invoke(Action::Save)),
        _ => None,
    }
}

/// Collects shortcut commands from this frame's key events.
pub fn poll(ctx: &egui::Context, cmds: &mut Vec<EditorCommand>) {
    ctx.input(|i| {
        for event in &i.events {
            if let egui::Event::Key {
                key,
                pressed: true,
                repeat: false,
                modifiers,
                ..
            } = event
            {
                if let Some(cmd) = command_for(*modifiers, *key) {
                    cmds.push(cmd);
                }
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::command_for;
    use crate::commands::EditorCommand;
    use crate::state::Action;
    use egui::{Key, Modifiers};

    #[test]
    fn ctrl_s_maps_to_save_placeholder() {
        assert_eq!(
            command_for(Modifiers::COMMAND, Key::S),
            Some(EditorCommand::Invoke(Action::Save))
        );
    }

    #[test]
    fn ctrl_q_maps_to_quit() {
        assert_eq!(command_for(Modifiers::COMMAND, Key::Q), Some(EditorCommand::Quit));
    }

    #[test]
    fn unmodified_keys_are_ignored() {
        assert_eq!(command_for(Modifiers::NONE, Key::S), None);
        assert_eq!(command_for(Modifiers::NONE, Key::Q), None);
    }

    #[test]
    fn extra_modifiers_are_ignored() {
        let ctrl_shift = Modifiers::COMMAND | Modifiers::SHIFT;
        assert_eq!(command_for(ctrl_shift, Key::S), None);
        assert_eq!(command_for(Modifiers::COMMAND, Key::Z), None);
    }
}
