//! Translation of terminal key presses into input session events.
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use typeahead::prelude::InputEvent;

/// What the prompt should do in response to a key.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum KeyAction {
    /// Feed an event to the input session.
    Input(InputEvent),

    /// Leave the prompt.
    Quit,

    /// Nothing to do.
    Ignore,
}

/// Decide what `key` means when the input buffer currently holds `text`.
pub fn interpret(key: &KeyEvent, text: &str) -> KeyAction {
    if key.kind == KeyEventKind::Release {
        return KeyAction::Ignore;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    match key.code {
        KeyCode::Esc => KeyAction::Quit,
        KeyCode::Char('c') if ctrl => KeyAction::Quit,
        KeyCode::Char('d') if ctrl => {
            if text.is_empty() {
                KeyAction::Quit
            } else {
                KeyAction::Ignore
            }
        },
        KeyCode::Char('u') if ctrl => edit(String::new()),
        KeyCode::Char('w') if ctrl => {
            let kept = text.trim_end();
            let kept = kept.trim_end_matches(|c: char| !c.is_whitespace());

            edit(kept.to_string())
        },
        KeyCode::Char(_) if ctrl || alt => KeyAction::Ignore,
        KeyCode::Char(c) => {
            let mut next = String::with_capacity(text.len() + c.len_utf8());
            next.push_str(text);
            next.push(c);

            edit(next)
        },
        KeyCode::Backspace => {
            let mut next = text.to_string();

            match next.pop() {
                Some(_) => edit(next),
                None => KeyAction::Ignore,
            }
        },
        KeyCode::Tab => KeyAction::Input(InputEvent::Cycle),
        KeyCode::Enter => KeyAction::Input(InputEvent::Confirm),
        _ => KeyAction::Ignore,
    }
}

fn edit(text: String) -> KeyAction {
    KeyAction::Input(InputEvent::Edit(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! key {
        ($ch: literal) => {
            KeyEvent::new(KeyCode::Char($ch), KeyModifiers::NONE)
        };
        ($kc: expr) => {
            KeyEvent::new($kc, KeyModifiers::NONE)
        };
    }

    macro_rules! ctl {
        ($ch: literal) => {
            KeyEvent::new(KeyCode::Char($ch), KeyModifiers::CONTROL)
        };
    }

    fn edited(text: &str) -> KeyAction {
        KeyAction::Input(InputEvent::Edit(text.into()))
    }

    #[test]
    fn test_typing() {
        assert_eq!(interpret(&key!('s'), ""), edited("s"));
        assert_eq!(interpret(&key!('u'), "s"), edited("su"));
        assert_eq!(interpret(&key!(' '), "su"), edited("su "));
        assert_eq!(interpret(&key!('é'), "caf"), edited("café"));
    }

    #[test]
    fn test_backspace() {
        assert_eq!(interpret(&key!(KeyCode::Backspace), "su"), edited("s"));
        assert_eq!(interpret(&key!(KeyCode::Backspace), "café"), edited("caf"));
        assert_eq!(interpret(&key!(KeyCode::Backspace), ""), KeyAction::Ignore);
    }

    #[test]
    fn test_line_editing() {
        assert_eq!(interpret(&ctl!('u'), "What is a su"), edited(""));
        assert_eq!(interpret(&ctl!('w'), "What is a su"), edited("What is a "));
        assert_eq!(interpret(&ctl!('w'), "What is a  "), edited("What is "));
        assert_eq!(interpret(&ctl!('w'), "su"), edited(""));
    }

    #[test]
    fn test_suggestion_keys() {
        assert_eq!(interpret(&key!(KeyCode::Tab), "su"), KeyAction::Input(InputEvent::Cycle));
        assert_eq!(interpret(&key!(KeyCode::Enter), "su"), KeyAction::Input(InputEvent::Confirm));
    }

    #[test]
    fn test_quit() {
        assert_eq!(interpret(&key!(KeyCode::Esc), "su"), KeyAction::Quit);
        assert_eq!(interpret(&ctl!('c'), "su"), KeyAction::Quit);
        assert_eq!(interpret(&ctl!('d'), ""), KeyAction::Quit);
        assert_eq!(interpret(&ctl!('d'), "su"), KeyAction::Ignore);
    }

    #[test]
    fn test_ignored() {
        assert_eq!(interpret(&ctl!('x'), "su"), KeyAction::Ignore);
        assert_eq!(interpret(&key!(KeyCode::Left), "su"), KeyAction::Ignore);

        let release =
            KeyEvent::new_with_kind(KeyCode::Char('a'), KeyModifiers::NONE, KeyEventKind::Release);
        assert_eq!(interpret(&release, "su"), KeyAction::Ignore);
    }
}
