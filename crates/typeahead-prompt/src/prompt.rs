//! # Interactive prompt
//!
//! A readline-style prompt that shows completions for the word being typed on the line below
//! it. Tab moves through the suggestions, Enter accepts the highlighted one or, when nothing is
//! highlighted, submits the line.
use std::io::{self, Stdout, Write};
use std::time::Duration;

use crossterm::{
    cursor::{Hide as CursorHide, MoveTo, Show as CursorShow},
    event::{poll, read, DisableBracketedPaste, EnableBracketedPaste, Event},
    execute,
    style::{Attribute, Print, SetAttribute},
    terminal::{Clear, ClearType},
    QueueableCommand,
};
use typeahead::prelude::*;
use unicode_width::UnicodeWidthStr;

use crate::keys::{interpret, KeyAction};

const PROMPT: &str = "> ";
const SEPARATOR: &str = "  ";

/// Puts the terminal back into cooked mode, even if the prompt bails out early.
///
/// Bracketed paste is on for as long as raw mode is, so a paste arrives as one [Event::Paste]
/// rather than as key presses.
struct RawMode;

impl RawMode {
    fn enable() -> io::Result<Self> {
        crossterm::terminal::enable_raw_mode()?;

        if let Err(e) = execute!(io::stdout(), EnableBracketedPaste) {
            let _ = crossterm::terminal::disable_raw_mode();

            return Err(e);
        }

        Ok(RawMode)
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), DisableBracketedPaste);
        let _ = crossterm::terminal::disable_raw_mode();
    }
}

/// Terminal front end for an [InputSession].
pub struct Prompt {
    engine: SuggestionEngine,
    session: InputSession,

    stdout: Stdout,
    dimensions: (u16, u16),
    top: u16,
}

impl Prompt {
    /// Create a new prompt that completes words with `engine`.
    pub fn new(engine: SuggestionEngine) -> io::Result<Self> {
        let dimensions = crossterm::terminal::size()?;

        let prompt = Prompt {
            engine,
            session: InputSession::default(),

            stdout: io::stdout(),
            dimensions,
            top: 0,
        };

        Ok(prompt)
    }

    /// Read lines until the user quits, returning everything that was submitted.
    pub fn run(&mut self) -> io::Result<Vec<String>> {
        let _raw = RawMode::enable()?;
        let mut submitted = vec![];

        self.init()?;

        loop {
            self.redraw()?;

            if !poll(Duration::from_millis(500))? {
                continue;
            }

            let event = match read()? {
                Event::Key(ke) => {
                    match interpret(&ke, self.session.text()) {
                        KeyAction::Input(event) => event,
                        KeyAction::Quit => break,
                        KeyAction::Ignore => continue,
                    }
                },
                Event::Paste(s) => InputEvent::Edit(pasted(self.session.text(), &s)),
                Event::Resize(width, height) => {
                    self.resize(width, height);
                    continue;
                },
                Event::FocusGained | Event::FocusLost | Event::Mouse(_) => {
                    // Do nothing for now.
                    continue;
                },
            };

            let transition = self.session.apply(&self.engine, event);
            self.session = transition.session;

            if let Some(text) = transition.submitted {
                tracing::info!(words = self.session.learned().len(), "Submitted line");
                self.echo(&text)?;
                submitted.push(text);
            }
        }

        self.clear()?;

        Ok(submitted)
    }

    fn init(&mut self) -> io::Result<()> {
        let (col, mut row) = crossterm::cursor::position()?;

        if col > 0 {
            // Move to next line if the cursor is after text.
            row += 1;
        }

        // Leave room for the suggestion line beneath the prompt.
        while row.saturating_add(1) >= self.dimensions.1 && row > 0 {
            self.linebreak()?;
            row -= 1;
        }

        self.top = row;

        Ok(())
    }

    fn resize(&mut self, width: u16, height: u16) {
        self.dimensions = (width, height);

        if self.top.saturating_add(1) >= height {
            self.top = height.saturating_sub(2);
        }
    }

    fn redraw(&mut self) -> io::Result<()> {
        let width = usize::from(self.dimensions.0);
        let line = visible_tail(self.session.text(), width.saturating_sub(PROMPT.width() + 1));

        self.stdout.queue(CursorHide)?;
        self.stdout
            .queue(MoveTo(0, self.top))?
            .queue(Clear(ClearType::FromCursorDown))?
            .queue(Print(PROMPT))?
            .queue(Print(line))?;

        self.stdout.queue(MoveTo(0, self.top.saturating_add(1)))?;

        for (i, suggestion) in self.session.suggestions().iter().enumerate() {
            if i > 0 {
                self.stdout.queue(Print(SEPARATOR))?;
            }

            if self.session.active() == Some(i) {
                self.stdout
                    .queue(SetAttribute(Attribute::Reverse))?
                    .queue(Print(suggestion))?
                    .queue(SetAttribute(Attribute::Reset))?;
            } else {
                self.stdout
                    .queue(SetAttribute(Attribute::Dim))?
                    .queue(Print(suggestion))?
                    .queue(SetAttribute(Attribute::Reset))?;
            }
        }

        let col = PROMPT.width() + line.width();
        let col = u16::try_from(col).unwrap_or(u16::MAX).min(self.dimensions.0.saturating_sub(1));

        self.stdout.queue(MoveTo(col, self.top))?;
        self.stdout.queue(CursorShow)?;
        self.stdout.flush()?;

        Ok(())
    }

    /// Leave a submitted line on screen, and start a fresh prompt below it.
    fn echo(&mut self, text: &str) -> io::Result<()> {
        self.stdout
            .queue(MoveTo(0, self.top))?
            .queue(Clear(ClearType::FromCursorDown))?
            .queue(Print(PROMPT))?
            .queue(Print(text))?;
        self.linebreak()?;

        self.init()
    }

    fn clear(&mut self) -> io::Result<()> {
        self.stdout
            .queue(MoveTo(0, self.top))?
            .queue(Clear(ClearType::FromCursorDown))?;
        self.stdout.flush()
    }

    fn linebreak(&mut self) -> io::Result<()> {
        self.stdout.queue(Print("\r\n"))?;
        self.stdout.flush()
    }
}

/// Append pasted text to the line, keeping it on one line.
fn pasted(text: &str, paste: &str) -> String {
    let mut line = String::with_capacity(text.len() + paste.len());
    line.push_str(text);
    line.push_str(&paste.replace("\r\n", " ").replace(['\r', '\n'], " "));

    return line;
}

/// The longest suffix of `text` that fits in `width` columns.
fn visible_tail(text: &str, width: usize) -> &str {
    if text.width() <= width {
        return text;
    }

    let mut used = 0;
    let mut start = text.len();

    for (idx, ch) in text.char_indices().rev() {
        let w = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);

        if used + w > width {
            break;
        }

        used += w;
        start = idx;
    }

    return &text[start..];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pasted() {
        assert_eq!(pasted("It was ", "sunny\nday"), "It was sunny day");
        assert_eq!(pasted("", "sunny\r\nday\r"), "sunny day ");
        assert_eq!(pasted("su", ""), "su");
    }

    #[test]
    fn test_paste_submits_nothing() {
        let dict = ["sunny", "sunset"].into_iter().collect();
        let engine = SuggestionEngine::new(dict);
        let session = InputSession::default();

        let next = session.apply(&engine, InputEvent::Edit(pasted(session.text(), "sunny\nsu")));
        assert_eq!(next.submitted, None);
        assert_eq!(next.session.text(), "sunny su");
        assert_eq!(next.session.suggestions(), ["sunny", "sunset"]);
    }

    #[test]
    fn test_visible_tail() {
        assert_eq!(visible_tail("hello", 10), "hello");
        assert_eq!(visible_tail("hello", 5), "hello");
        assert_eq!(visible_tail("hello world", 5), "world");
        assert_eq!(visible_tail("hello", 0), "");

        // Wide characters take up two columns each.
        assert_eq!(visible_tail("日本語", 4), "本語");
        assert_eq!(visible_tail("日本語", 3), "語");
    }
}
