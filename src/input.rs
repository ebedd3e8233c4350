//! Raw input events and the per-frame intent they collapse into.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

use crate::config::GameConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    KeyDown(KeyCode),
    /// Terminal resized to `(cols, rows)`; only the renderer cares.
    Resize(u16, u16),
}

/// What the player asked for during one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Intent {
    pub jump: bool,
    pub quit: bool,
}

impl Intent {
    /// Fold a drained queue into one snapshot. Only the configured jump key
    /// counts; several presses in the same frame still make one jump.
    pub fn from_events(events: &[InputEvent], config: &GameConfig) -> Self {
        events.iter().fold(Intent::default(), |intent, ev| match ev {
            InputEvent::Quit => Intent {
                quit: true,
                ..intent
            },
            InputEvent::KeyDown(code) if *code == config.jump_key => Intent {
                jump: true,
                ..intent
            },
            InputEvent::KeyDown(_) | InputEvent::Resize(..) => intent,
        })
    }
}

/// Queue of pending events, drained once at the start of each frame.
pub trait InputSource {
    fn drain(&mut self) -> io::Result<Vec<InputEvent>>;
}

#[derive(Debug, Default)]
pub struct TerminalInput;

impl TerminalInput {
    pub fn new() -> Self {
        Self
    }
}

impl InputSource for TerminalInput {
    fn drain(&mut self) -> io::Result<Vec<InputEvent>> {
        let mut events = Vec::new();
        while event::poll(Duration::ZERO)? {
            events.extend(map_event(event::read()?));
        }
        Ok(events)
    }
}

/// Translate one crossterm event. Only presses count, so repeats and releases
/// from a held key never arm another jump.
pub fn map_event(ev: Event) -> Option<InputEvent> {
    match ev {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            let quit = matches!(key.code, KeyCode::Char('q') | KeyCode::Esc)
                || (key.code == KeyCode::Char('c')
                    && key.modifiers.contains(KeyModifiers::CONTROL));
            Some(if quit {
                InputEvent::Quit
            } else {
                InputEvent::KeyDown(key.code)
            })
        }
        Event::Resize(cols, rows) => Some(InputEvent::Resize(cols, rows)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent;

    #[test]
    fn test_empty_queue_is_idle() {
        let config = GameConfig::default();
        assert_eq!(Intent::from_events(&[], &config), Intent::default());
    }

    #[test]
    fn test_only_jump_key_is_recognized() {
        let config = GameConfig::default();
        let events = [
            InputEvent::KeyDown(KeyCode::Up),
            InputEvent::KeyDown(KeyCode::Char('x')),
            InputEvent::Resize(80, 24),
        ];
        assert!(!Intent::from_events(&events, &config).jump);

        let events = [InputEvent::KeyDown(KeyCode::Char(' '))];
        assert!(Intent::from_events(&events, &config).jump);
    }

    fn key(code: KeyCode, modifiers: KeyModifiers, kind: KeyEventKind) -> Event {
        Event::Key(KeyEvent::new_with_kind(code, modifiers, kind))
    }

    #[test]
    fn test_only_key_presses_are_forwarded() {
        let space = KeyCode::Char(' ');
        assert_eq!(
            map_event(key(space, KeyModifiers::NONE, KeyEventKind::Press)),
            Some(InputEvent::KeyDown(space))
        );
        assert_eq!(
            map_event(key(space, KeyModifiers::NONE, KeyEventKind::Repeat)),
            None
        );
        assert_eq!(
            map_event(key(space, KeyModifiers::NONE, KeyEventKind::Release)),
            None
        );
    }

    #[test]
    fn test_quit_keys() {
        let press = |code, mods| map_event(key(code, mods, KeyEventKind::Press));
        assert_eq!(press(KeyCode::Char('q'), KeyModifiers::NONE), Some(InputEvent::Quit));
        assert_eq!(press(KeyCode::Esc, KeyModifiers::NONE), Some(InputEvent::Quit));
        assert_eq!(
            press(KeyCode::Char('c'), KeyModifiers::CONTROL),
            Some(InputEvent::Quit)
        );
        assert_eq!(
            press(KeyCode::Char('c'), KeyModifiers::NONE),
            Some(InputEvent::KeyDown(KeyCode::Char('c')))
        );
    }

    #[test]
    fn test_resize_and_other_events() {
        assert_eq!(
            map_event(Event::Resize(100, 30)),
            Some(InputEvent::Resize(100, 30))
        );
        assert_eq!(map_event(Event::FocusGained), None);
    }

    #[test]
    fn test_quit_and_jump_in_same_frame() {
        let config = GameConfig::default();
        let events = [
            InputEvent::KeyDown(KeyCode::Char(' ')),
            InputEvent::Quit,
            InputEvent::KeyDown(KeyCode::Char(' ')),
        ];
        let intent = Intent::from_events(&events, &config);
        assert!(intent.jump);
        assert!(intent.quit);
    }
}
