//! Keyboard mapping for the guess input.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key press means to the game screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Type a character into the guess field.
    Insert(char),
    /// Delete the last character.
    Backspace,
    /// Highlight the previous suggestion.
    SelectPrevious,
    /// Highlight the next suggestion.
    SelectNext,
    /// Complete the input with the highlighted suggestion.
    Complete,
    /// Submit the guess.
    Submit,
    /// Start a new session.
    Reset,
    /// Leave the game.
    Quit,
    /// Not bound.
    Ignored,
}

/// Maps a key press to an input event.
pub fn map_key(key: KeyEvent) -> InputEvent {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c') if ctrl => InputEvent::Quit,
        KeyCode::Char('r') if ctrl => InputEvent::Reset,
        KeyCode::Char(_) if ctrl => InputEvent::Ignored,
        KeyCode::Char(c) => InputEvent::Insert(c),
        KeyCode::Backspace => InputEvent::Backspace,
        KeyCode::Up => InputEvent::SelectPrevious,
        KeyCode::Down => InputEvent::SelectNext,
        KeyCode::Tab => InputEvent::Complete,
        KeyCode::Enter => InputEvent::Submit,
        KeyCode::Esc => InputEvent::Quit,
        _ => InputEvent::Ignored,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_plain_characters_insert() {
        assert_eq!(map_key(key(KeyCode::Char('r'))), InputEvent::Insert('r'));
        assert_eq!(map_key(key(KeyCode::Char('-'))), InputEvent::Insert('-'));
    }

    #[test]
    fn test_control_chords() {
        let reset = KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL);
        let quit = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(reset), InputEvent::Reset);
        assert_eq!(map_key(quit), InputEvent::Quit);
    }

    #[test]
    fn test_navigation_keys() {
        assert_eq!(map_key(key(KeyCode::Up)), InputEvent::SelectPrevious);
        assert_eq!(map_key(key(KeyCode::Down)), InputEvent::SelectNext);
        assert_eq!(map_key(key(KeyCode::Tab)), InputEvent::Complete);
        assert_eq!(map_key(key(KeyCode::Enter)), InputEvent::Submit);
        assert_eq!(map_key(key(KeyCode::F(1))), InputEvent::Ignored);
    }
}
