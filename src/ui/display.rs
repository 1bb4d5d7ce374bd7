//! Compose one full screen of game output

use crate::describe;
use crate::session::Session;
use crate::ui::styles::Styles;

pub const TITLE: &str = "--- Blackout Bargain ---";
pub const FOOTER: &str = "Type 'quit' or press Ctrl+D to exit.";

/// Render the current session as text for the terminal.
///
/// The frame ends with the input prompt so the caller can read the next
/// line right after printing it.
pub fn render_frame(session: &Session, styles: &Styles) -> String {
    let state = session.state();
    let mut s = String::new();

    s.push_str(&styles.title(TITLE));
    s.push_str("\n\n");

    if session.is_over() {
        s.push_str(&styles.message(&state.message));
        s.push_str("\n\n");
        s.push_str(&styles.help(FOOTER));
        s.push('\n');
        return s;
    }

    if let Some(input) = session.pending_input() {
        s.push_str(&styles.pending(&format!("Processing '{}'...", input)));
        s.push('\n');
        return s;
    }

    s.push_str(&styles.location(describe::location_name(state.location)));
    s.push('\n');
    s.push_str(&styles.location(&describe::location_description(state)));
    s.push('\n');

    let visible = describe::visible_items_text(state);
    if !visible.is_empty() {
        s.push_str(&styles.items(&visible));
        s.push('\n');
    }

    s.push_str(&styles.inventory(&describe::inventory_description(state)));
    s.push_str("\n\n");

    if !state.message.is_empty() {
        s.push_str(&styles.message(&state.message));
        s.push_str("\n\n");
    }

    s.push_str(&styles.help(FOOTER));
    s.push_str("\n\n");
    s.push_str(&styles.prompt(&describe::input_prompt(state)));
    s.push_str(&state.input_buffer);

    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{Fact, Location};
    use crate::world::WorldState;

    #[test]
    fn test_frame_at_start() {
        let session = Session::new(false);
        let frame = render_frame(&session, &Styles::plain());
        assert!(frame.starts_with(TITLE));
        assert!(frame.contains("Near Register 4 (Front)"));
        assert!(frame.contains("Inventory: Empty."));
        assert!(!frame.contains("You see:"));
        assert!(frame.ends_with("> "));
    }

    #[test]
    fn test_frame_shows_visible_items_and_message() {
        let mut session = Session::with_state(WorldState::at(Location::Register), false);
        session.submit_line("go security").unwrap();
        let frame = render_frame(&session, &Styles::plain());
        assert!(frame.contains("You see: crumpled employee discount voucher"));
        assert!(frame.contains("electronics section"));
    }

    #[test]
    fn test_frame_prompts_for_code() {
        let mut session = Session::with_state(WorldState::at(Location::ManagersOffice), false);
        session.submit_line("use 4711").unwrap();
        let frame = render_frame(&session, &Styles::plain());
        assert!(frame.ends_with("Enter safe code: "));
    }

    #[test]
    fn test_frame_while_narrating() {
        let mut session = Session::new(true);
        session.submit_line("listen carefully").unwrap();
        let frame = render_frame(&session, &Styles::plain());
        assert!(frame.contains("Processing 'listen carefully'..."));
        assert!(!frame.contains("Inventory:"));
    }

    #[test]
    fn test_frame_after_escape() {
        let mut state = WorldState::at(Location::LoadingDock);
        state.record(Fact::DoorUnlocked);
        let mut session = Session::with_state(state, false);
        session.submit_line("escape").unwrap();
        let frame = render_frame(&session, &Styles::plain());
        assert!(frame.contains("You escaped the Blackout Nightmare!"));
        assert!(!frame.contains("> "));
    }
}
