//! Terminal input.
//!
//! Raw crossterm events are converted once, at the edge, into engine events
//! ([`InputEvent`]); everything past this module is crossterm-free. Key
//! events carry web-style key names ("Escape", "ArrowUp", "F5", plain
//! characters as themselves) so consumers match on strings instead of a
//! foreign enum.

pub mod router;

pub use router::{
    ClickEvent, ClickHandler, HitGrid, HitRegion, InputRouter, MouseAction, MouseButton,
    MouseEvent,
};

use std::io::{self, stdout};
use std::time::Duration;

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event as CtEvent, KeyEvent as CtKeyEvent,
    KeyEventKind, KeyCode, KeyModifiers, MouseButton as CtMouseButton,
    MouseEvent as CtMouseEvent, MouseEventKind,
};
use crossterm::execute;

// =============================================================================
// Events
// =============================================================================

/// A terminal event after conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Mouse(MouseEvent),
    Key(KeyEvent),
    Resize(u16, u16),
    /// Something we received but do not route (focus, paste, scroll).
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    Press,
    Repeat,
    Release,
}

/// A key event with a named key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: String,
    pub kind: KeyKind,
    pub modifiers: Modifiers,
}

/// Modifier keys held during an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
}

// =============================================================================
// Polling
// =============================================================================

/// Poll for one event, waiting at most `timeout`.
pub fn poll_event(timeout: Duration) -> io::Result<Option<InputEvent>> {
    if event::poll(timeout)? {
        let event = event::read()?;
        Ok(Some(convert_event(event)))
    } else {
        Ok(None)
    }
}

/// Start reporting mouse events.
pub fn enable_mouse() -> io::Result<()> {
    execute!(stdout(), EnableMouseCapture)
}

/// Stop reporting mouse events.
pub fn disable_mouse() -> io::Result<()> {
    execute!(stdout(), DisableMouseCapture)
}

// =============================================================================
// Conversion
// =============================================================================

fn convert_event(event: CtEvent) -> InputEvent {
    match event {
        CtEvent::Key(key) => InputEvent::Key(convert_key_event(&key)),
        CtEvent::Mouse(mouse) => convert_mouse_event(&mouse),
        CtEvent::Resize(cols, rows) => InputEvent::Resize(cols, rows),
        _ => InputEvent::None,
    }
}

pub fn convert_mouse_event(event: &CtMouseEvent) -> InputEvent {
    let (action, button) = match event.kind {
        MouseEventKind::Down(button) => (MouseAction::Down, convert_mouse_button(button)),
        MouseEventKind::Up(button) => (MouseAction::Up, convert_mouse_button(button)),
        MouseEventKind::Drag(button) => (MouseAction::Drag, convert_mouse_button(button)),
        MouseEventKind::Moved => (MouseAction::Move, MouseButton::Left),
        // Scroll has no consumers in this pipeline.
        MouseEventKind::ScrollUp
        | MouseEventKind::ScrollDown
        | MouseEventKind::ScrollLeft
        | MouseEventKind::ScrollRight => return InputEvent::None,
    };
    InputEvent::Mouse(MouseEvent {
        x: event.column,
        y: event.row,
        action,
        button,
        modifiers: convert_modifiers(event.modifiers),
    })
}

fn convert_mouse_button(button: CtMouseButton) -> MouseButton {
    match button {
        CtMouseButton::Left => MouseButton::Left,
        CtMouseButton::Right => MouseButton::Right,
        CtMouseButton::Middle => MouseButton::Middle,
    }
}

pub fn convert_key_event(event: &CtKeyEvent) -> KeyEvent {
    let key = match event.code {
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Esc => "Escape".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::Delete => "Delete".to_string(),
        KeyCode::Insert => "Insert".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        KeyCode::PageUp => "PageUp".to_string(),
        KeyCode::PageDown => "PageDown".to_string(),
        KeyCode::Up => "ArrowUp".to_string(),
        KeyCode::Down => "ArrowDown".to_string(),
        KeyCode::Left => "ArrowLeft".to_string(),
        KeyCode::Right => "ArrowRight".to_string(),
        KeyCode::F(n) => format!("F{n}"),
        _ => String::new(),
    };
    let kind = match event.kind {
        KeyEventKind::Press => KeyKind::Press,
        KeyEventKind::Repeat => KeyKind::Repeat,
        KeyEventKind::Release => KeyKind::Release,
    };
    KeyEvent {
        key,
        kind,
        modifiers: convert_modifiers(event.modifiers),
    }
}

fn convert_modifiers(modifiers: KeyModifiers) -> Modifiers {
    Modifiers {
        ctrl: modifiers.contains(KeyModifiers::CONTROL),
        alt: modifiers.contains(KeyModifiers::ALT),
        shift: modifiers.contains(KeyModifiers::SHIFT),
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_plain_characters() {
        let event = CtKeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        let key = convert_key_event(&event);
        assert_eq!(key.key, "q");
        assert_eq!(key.kind, KeyKind::Press);
        assert!(!key.modifiers.ctrl);
    }

    #[test]
    fn test_convert_named_keys() {
        let cases = [
            (KeyCode::Esc, "Escape"),
            (KeyCode::Enter, "Enter"),
            (KeyCode::Up, "ArrowUp"),
            (KeyCode::Down, "ArrowDown"),
            (KeyCode::Left, "ArrowLeft"),
            (KeyCode::Right, "ArrowRight"),
            (KeyCode::Home, "Home"),
            (KeyCode::PageDown, "PageDown"),
        ];
        for (code, expected) in cases {
            let key = convert_key_event(&CtKeyEvent::new(code, KeyModifiers::NONE));
            assert_eq!(key.key, expected);
        }
    }

    #[test]
    fn test_convert_function_keys() {
        let key = convert_key_event(&CtKeyEvent::new(KeyCode::F(5), KeyModifiers::NONE));
        assert_eq!(key.key, "F5");
    }

    #[test]
    fn test_convert_modifiers() {
        let event = CtKeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL | KeyModifiers::SHIFT,
        );
        let key = convert_key_event(&event);
        assert!(key.modifiers.ctrl);
        assert!(key.modifiers.shift);
        assert!(!key.modifiers.alt);
    }

    #[test]
    fn test_convert_mouse_down_up() {
        let down = CtMouseEvent {
            kind: MouseEventKind::Down(CtMouseButton::Left),
            column: 4,
            row: 2,
            modifiers: KeyModifiers::NONE,
        };
        match convert_mouse_event(&down) {
            InputEvent::Mouse(mouse) => {
                assert_eq!(mouse.action, MouseAction::Down);
                assert_eq!(mouse.button, MouseButton::Left);
                assert_eq!((mouse.x, mouse.y), (4, 2));
            }
            other => panic!("expected mouse event, got {other:?}"),
        }

        let up = CtMouseEvent {
            kind: MouseEventKind::Up(CtMouseButton::Right),
            column: 4,
            row: 2,
            modifiers: KeyModifiers::NONE,
        };
        match convert_mouse_event(&up) {
            InputEvent::Mouse(mouse) => {
                assert_eq!(mouse.action, MouseAction::Up);
                assert_eq!(mouse.button, MouseButton::Right);
            }
            other => panic!("expected mouse event, got {other:?}"),
        }
    }

    #[test]
    fn test_scroll_is_dropped() {
        let scroll = CtMouseEvent {
            kind: MouseEventKind::ScrollUp,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(convert_mouse_event(&scroll), InputEvent::None);
    }
}
