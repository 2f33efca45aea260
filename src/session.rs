#![cfg(feature = "std")]

//! Interactive line-based replay session.

use std::io::{BufRead, Write};

use crate::cursor::ReplayCursor;
use crate::render::{render_view, RenderStyle};

/// A request read from the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Forward,
    Backward,
    Seek(usize),
    First,
    Last,
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  n, next, <enter>  step forward
  p, prev, b, back  step backward
  g N, goto N       jump to ply N
  f, first          jump to the opening board
  l, last           jump to the final board
  h, help, ?        show this help
  q, quit           leave the replay";

/// Parse one line of user input. An empty line steps forward.
pub fn parse_command(input: &str) -> Result<Command, String> {
    let mut words = input.split_whitespace();
    let Some(word) = words.next() else {
        return Ok(Command::Forward);
    };
    let command = match word.to_ascii_lowercase().as_str() {
        "n" | "next" => Command::Forward,
        "p" | "prev" | "b" | "back" => Command::Backward,
        "f" | "first" => Command::First,
        "l" | "last" => Command::Last,
        "h" | "help" | "?" => Command::Help,
        "q" | "quit" => Command::Quit,
        "g" | "goto" => {
            let arg = words
                .next()
                .ok_or_else(|| format!("'{}' needs a ply number", word))?;
            let ply = arg
                .parse()
                .map_err(|_| format!("Invalid ply '{}' - must be a non-negative number", arg))?;
            Command::Seek(ply)
        }
        other => return Err(format!("Unknown command '{}' - type 'h' for help", other)),
    };
    if let Some(extra) = words.next() {
        return Err(format!("Unexpected argument '{}'", extra));
    }
    Ok(command)
}

/// Apply `command` to the cursor. Returns whether the position changed.
pub fn apply_command(cursor: &mut ReplayCursor<'_>, command: Command) -> bool {
    let before = cursor.position();
    match command {
        Command::Forward => {
            cursor.step_forward();
        }
        Command::Backward => {
            cursor.step_backward();
        }
        Command::Seek(ply) => cursor.seek(ply),
        Command::First => cursor.rewind(),
        Command::Last => cursor.fast_forward(),
        Command::Help | Command::Quit => {}
    }
    cursor.position() != before
}

/// Drive `cursor` from `input` until `quit` or end of input, writing every
/// newly reached ply to `output`.
pub fn run_session<R: BufRead, W: Write>(
    cursor: &mut ReplayCursor<'_>,
    style: &RenderStyle,
    mut input: R,
    mut output: W,
) -> anyhow::Result<()> {
    writeln!(output, "{}", render_view(&cursor.current_view(), style))?;
    loop {
        write!(output, "> ")?;
        output.flush()?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            log::debug!("input closed, leaving replay");
            writeln!(output)?;
            break;
        }
        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(msg) => {
                writeln!(output, "{}", msg)?;
                continue;
            }
        };
        log::debug!("command {:?} at ply {}", command, cursor.position());
        match command {
            Command::Quit => break,
            Command::Help => writeln!(output, "{}", HELP)?,
            _ => {
                if apply_command(cursor, command) {
                    writeln!(output, "{}", render_view(&cursor.current_view(), style))?;
                }
            }
        }
    }
    Ok(())
}
