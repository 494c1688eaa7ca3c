//! Operator console line syntax.
//!
//! ```text
//! play <label>          press a video button (a bare label works too)
//! pause                 toggle play/pause
//! seek <ms>             move the seek slider
//! stop                  fade the video out
//! word <text> [weight]  add a word and regenerate
//! refresh               regenerate without adding a word
//! status                print kiosk state
//! buttons               list video buttons
//! quit                  exit
//! ```

use crate::{
    foundation::{
        clock::Millis,
        error::{VideoSwitchError, VideoSwitchResult},
    },
    runtime::event::Event,
};

/// One parsed console line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Forward to the kiosk.
    Kiosk(Event),
    /// Print a state summary.
    Status,
    /// Print the button labels.
    Buttons,
    /// Leave the console loop.
    Quit,
}

/// Parse a console line. Blank lines yield `Ok(None)`.
pub fn parse_command(line: &str) -> VideoSwitchResult<Option<Command>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (head, rest) = match line.split_once(char::is_whitespace) {
        Some((h, r)) => (h, r.trim()),
        None => (line, ""),
    };

    let cmd = match head {
        "play" if rest.is_empty() => {
            return Err(VideoSwitchError::validation("usage: play <label>"));
        }
        "play" => Command::Kiosk(Event::PressButton(rest.to_string())),
        "pause" => no_args(head, rest, Command::Kiosk(Event::PlayPause))?,
        "stop" => no_args(head, rest, Command::Kiosk(Event::StopVideo))?,
        "seek" => Command::Kiosk(Event::Seek(parse_position(rest)?)),
        "word" => parse_word(rest)?,
        "refresh" => no_args(
            head,
            rest,
            Command::Kiosk(Event::SubmitWord {
                text: String::new(),
                weight: None,
            }),
        )?,
        "status" => no_args(head, rest, Command::Status)?,
        "buttons" => no_args(head, rest, Command::Buttons)?,
        "quit" | "exit" => no_args(head, rest, Command::Quit)?,
        _ => Command::Kiosk(Event::PressButton(line.to_string())),
    };
    Ok(Some(cmd))
}

fn no_args(head: &str, rest: &str, cmd: Command) -> VideoSwitchResult<Command> {
    if rest.is_empty() {
        Ok(cmd)
    } else {
        Err(VideoSwitchError::validation(format!(
            "'{head}' takes no arguments"
        )))
    }
}

fn parse_position(rest: &str) -> VideoSwitchResult<Millis> {
    rest.parse::<Millis>().map_err(|_| {
        VideoSwitchError::validation(format!(
            "usage: seek <ms> (got '{rest}')"
        ))
    })
}

fn parse_word(rest: &str) -> VideoSwitchResult<Command> {
    let mut parts = rest.split_whitespace();
    let (Some(text), weight, None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(VideoSwitchError::validation("usage: word <text> [weight]"));
    };
    Ok(Command::Kiosk(Event::SubmitWord {
        text: text.to_string(),
        weight: weight.map(str::to_string),
    }))
}

#[cfg(test)]
#[path = "../../tests/unit/runtime/command.rs"]
mod tests;
