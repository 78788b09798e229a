//! Keyboard and window event handling.

use sdl2::{event::Event, keyboard::Keycode};

/// Returns `true` if the key event should close the window.
///
/// Only the initial press counts; auto-repeat events are ignored.
pub fn is_close_key(keycode: Option<Keycode>, repeat: bool) -> bool {
    !repeat && keycode == Some(Keycode::Escape)
}

/// Returns `true` if the event asks the program to shut down.
pub fn close_requested(event: &Event) -> bool {
    match event {
        Event::Quit { .. } => true,
        Event::KeyDown {
            keycode, repeat, ..
        } => is_close_key(*keycode, *repeat),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use sdl2::keyboard::Mod;

    use super::*;

    #[test]
    fn test_escape_press_closes() {
        assert!(is_close_key(Some(Keycode::Escape), false));
    }

    #[test]
    fn test_escape_repeat_is_ignored() {
        assert!(!is_close_key(Some(Keycode::Escape), true));
    }

    #[test]
    fn test_other_keys_do_not_close() {
        assert!(!is_close_key(Some(Keycode::Space), false));
        assert!(!is_close_key(Some(Keycode::Q), false));
        assert!(!is_close_key(None, false));
    }

    #[test]
    fn test_quit_event_closes() {
        assert!(close_requested(&Event::Quit { timestamp: 0 }));
    }

    fn key_down(keycode: Keycode, repeat: bool) -> Event {
        Event::KeyDown {
            timestamp: 0,
            window_id: 1,
            keycode: Some(keycode),
            scancode: None,
            keymod: Mod::NOMOD,
            repeat,
        }
    }

    #[test]
    fn test_escape_key_down_event_closes() {
        assert!(close_requested(&key_down(Keycode::Escape, false)));
    }

    #[test]
    fn test_escape_key_down_repeat_does_not_close() {
        assert!(!close_requested(&key_down(Keycode::Escape, true)));
    }

    #[test]
    fn test_other_key_down_does_not_close() {
        assert!(!close_requested(&key_down(Keycode::Space, false)));
    }
}
