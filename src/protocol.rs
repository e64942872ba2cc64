//! Line-oriented controller protocol: a GTP-style command loop driving an
//! [`Engine`].
//!
//! Each input line optionally carries a leading numeric command id,
//! followed by a command name and its arguments; each dispatched command
//! returns `= [id] text` on success or `? [id] text` on failure.
//! `showgroups`, a debug-only group-printing command, has no module
//! behind it here and is intentionally absent from `KNOWN_COMMANDS`.

use std::io::{self, BufRead, Write};

use crate::board::Color;
use crate::constants::{PROGRAM_NAME, PROTOCOL_VERSION};
use crate::coord;
use crate::engine::Engine;

/// The commands this controller understands, in `list_commands` order.
const KNOWN_COMMANDS: &[&str] = &[
    "protocol_version",
    "name",
    "version",
    "known_command",
    "list_commands",
    "quit",
    "boardsize",
    "clear_board",
    "komi",
    "fixed_handicap",
    "play",
    "genmove",
    "undo",
    "loadsgf",
    "showboard",
];

/// Owns the [`Engine`] and drives it from line-oriented commands.
pub struct Controller {
    engine: Engine,
}

impl Controller {
    pub fn new() -> Self {
        Controller { engine: Engine::new() }
    }

    /// Reads commands from stdin and writes responses to stdout until
    /// `quit` or end of input.
    pub fn run(&mut self) {
        let stdin = io::stdin();
        let mut stdout = io::stdout();

        for line in stdin.lock().lines() {
            let line = match line {
                Ok(l) => l,
                Err(_) => break,
            };
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (id, response) = self.execute_line(line);
            let id_str = id.map(|i| format!(" {i}")).unwrap_or_default();
            let (prefix, text) = response;
            writeln!(stdout, "{prefix}{id_str} {text}\n").ok();
            stdout.flush().ok();

            if line.split_whitespace().next().map(str::to_lowercase).as_deref() == Some("quit") {
                break;
            }
        }
    }

    /// Parses one input line and dispatches it, returning the optional
    /// numeric command id plus the `(prefix, text)` response pair.
    pub fn execute_line(&mut self, line: &str) -> (Option<u32>, (char, String)) {
        let (id, command_line) = Self::parse_id(line);
        let parts: Vec<&str> = command_line.split_whitespace().collect();
        if parts.is_empty() {
            return (id, ('?', "empty command".to_string()));
        }
        let command = parts[0].to_lowercase();
        let args = &parts[1..];
        (id, self.execute(&command, args))
    }

    /// Parses an optional leading numeric command id, per GTP's `[id]
    /// command args` line shape.
    fn parse_id(line: &str) -> (Option<u32>, &str) {
        let trimmed = line.trim();
        let mut chars = trimmed.char_indices();
        if let Some((_, c)) = chars.next() {
            if c.is_ascii_digit() {
                let end = chars
                    .find(|(_, c)| !c.is_ascii_digit())
                    .map(|(i, _)| i)
                    .unwrap_or(trimmed.len());
                if let Ok(id) = trimmed[..end].parse::<u32>() {
                    return (Some(id), trimmed[end..].trim());
                }
            }
        }
        (None, trimmed)
    }

    fn parse_color(token: &str) -> Result<Color, String> {
        match token.to_lowercase().as_str() {
            "b" | "black" => Ok(Color::Black),
            "w" | "white" => Ok(Color::White),
            _ => Err("invalid color".to_string()),
        }
    }

    /// Executes one already-tokenized command and returns its response.
    fn execute(&mut self, command: &str, args: &[&str]) -> (char, String) {
        match command {
            "protocol_version" => ('=', PROTOCOL_VERSION.to_string()),
            "name" => ('=', PROGRAM_NAME.to_string()),
            "version" => ('=', env!("CARGO_PKG_VERSION").to_string()),

            "known_command" => {
                let Some(name) = args.first() else {
                    return ('?', "missing argument".to_string());
                };
                let known = KNOWN_COMMANDS.contains(&name.to_lowercase().as_str());
                ('=', if known { "true" } else { "false" }.to_string())
            }

            "list_commands" => ('=', KNOWN_COMMANDS.join("\n")),

            "quit" => ('=', String::new()),

            "boardsize" => {
                let Some(size) = args.first().and_then(|a| a.parse::<u8>().ok()) else {
                    return ('?', "unacceptable size".to_string());
                };
                match self.engine.boardsize(size) {
                    Ok(()) => ('=', String::new()),
                    Err(_) => ('?', "unacceptable size".to_string()),
                }
            }

            "clear_board" => {
                self.engine.clear_board();
                ('=', String::new())
            }

            "komi" => {
                let Some(komi) = args.first().and_then(|a| a.parse::<f32>().ok()) else {
                    return ('?', "invalid komi".to_string());
                };
                self.engine.set_komi(komi);
                ('=', String::new())
            }

            "fixed_handicap" => {
                let Some(handicap) = args.first().and_then(|a| a.parse::<u32>().ok()) else {
                    return ('?', "invalid handicap".to_string());
                };
                match self.engine.fixed_handicap(handicap) {
                    Ok(points) => {
                        let text = points
                            .iter()
                            .map(|&(i, j)| format!("{}{}", coord::label_column(i), j as u32 + 1))
                            .collect::<Vec<_>>()
                            .join(" ");
                        ('=', text)
                    }
                    Err(e) => ('?', e.to_string()),
                }
            }

            "play" => {
                if args.len() < 2 {
                    return ('?', "missing arguments".to_string());
                }
                let color = match Self::parse_color(args[0]) {
                    Ok(c) => c,
                    Err(e) => return ('?', e),
                };
                if coord::is_vertex_pass(args[1]) {
                    return match self.engine.pass(color) {
                        Ok(()) => ('=', String::new()),
                        Err(_) => ('?', "illegal move".to_string()),
                    };
                }
                let (i, j) = match coord::parse_vertex(args[1], self.engine.size()) {
                    Ok(v) => v,
                    Err(_) => return ('?', "invalid coordinate".to_string()),
                };
                match self.engine.play(color, i, j) {
                    Ok(()) => ('=', String::new()),
                    Err(_) => ('?', "illegal move".to_string()),
                }
            }

            "genmove" => {
                let Some(color) = args.first().and_then(|a| Self::parse_color(a).ok()) else {
                    return ('?', "invalid color".to_string());
                };
                let stats = self.engine.genmove(color);
                match stats.mv {
                    crate::search::SelectedMove::Play(i, j) => {
                        ('=', format!("{}{}", coord::label_column(i), j as u32 + 1))
                    }
                    crate::search::SelectedMove::Pass => ('=', "pass".to_string()),
                }
            }

            "undo" => match self.engine.undo() {
                Ok(()) => ('=', String::new()),
                Err(_) => ('?', "cannot undo".to_string()),
            },

            "loadsgf" => {
                let Some(path) = args.first() else {
                    return ('?', "missing argument".to_string());
                };
                let stop_at = args.get(1).and_then(|a| a.parse::<usize>().ok());
                let content = match std::fs::read_to_string(path) {
                    Ok(c) => c,
                    Err(_) => return ('?', "cannot load file".to_string()),
                };
                match self.engine.load_sgf(&content, stop_at) {
                    Ok(()) => ('=', String::new()),
                    Err(_) => ('?', "cannot load file".to_string()),
                }
            }

            "showboard" => ('=', self.engine.render()),

            _ => ('?', format!("unknown command: {command}")),
        }
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut Engine {
        &mut self.engine
    }
}

impl Default for Controller {
    fn default() -> Self {
        Controller::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_id_extracts_leading_number() {
        let (id, rest) = Controller::parse_id("17 name");
        assert_eq!(id, Some(17));
        assert_eq!(rest, "name");
    }

    #[test]
    fn parse_id_is_none_without_a_leading_digit() {
        let (id, rest) = Controller::parse_id("name");
        assert_eq!(id, None);
        assert_eq!(rest, "name");
    }

    #[test]
    fn protocol_version_and_name_respond() {
        let mut ctl = Controller::new();
        assert_eq!(ctl.execute("protocol_version", &[]), ('=', "2".to_string()));
        assert_eq!(ctl.execute("name", &[]), ('=', PROGRAM_NAME.to_string()));
    }

    #[test]
    fn known_command_reports_membership() {
        let mut ctl = Controller::new();
        assert_eq!(ctl.execute("known_command", &["play"]), ('=', "true".to_string()));
        assert_eq!(ctl.execute("known_command", &["showgroups"]), ('=', "false".to_string()));
    }

    #[test]
    fn list_commands_contains_every_known_command() {
        let mut ctl = Controller::new();
        let (prefix, text) = ctl.execute("list_commands", &[]);
        assert_eq!(prefix, '=');
        for cmd in KNOWN_COMMANDS {
            assert!(text.contains(cmd));
        }
    }

    #[test]
    fn boardsize_accepts_valid_and_rejects_invalid() {
        let mut ctl = Controller::new();
        assert_eq!(ctl.execute("boardsize", &["13"]), ('=', String::new()));
        assert_eq!(ctl.engine().size(), 13);
        assert_eq!(ctl.execute("boardsize", &["1"]).0, '?');
    }

    #[test]
    fn play_and_genmove_round_trip() {
        let mut ctl = Controller::new();
        assert_eq!(ctl.execute("play", &["black", "A1"]), ('=', String::new()));
        assert_eq!(ctl.execute("play", &["white", "pass"]), ('=', String::new()));
        assert_eq!(ctl.execute("undo", &[]), ('=', String::new()));
    }

    #[test]
    fn play_rejects_bad_color_and_bad_vertex() {
        let mut ctl = Controller::new();
        assert_eq!(ctl.execute("play", &["purple", "A1"]).0, '?');
        assert_eq!(ctl.execute("play", &["black", "I5"]).0, '?');
    }

    #[test]
    fn fixed_handicap_reports_vertices() {
        let mut ctl = Controller::new();
        ctl.execute("boardsize", &["19"]);
        let (prefix, text) = ctl.execute("fixed_handicap", &["2"]);
        assert_eq!(prefix, '=');
        assert_eq!(text, "Q16 D4");
    }

    #[test]
    fn unknown_command_is_an_error() {
        let mut ctl = Controller::new();
        assert_eq!(ctl.execute("frobnicate", &[]).0, '?');
    }

    #[test]
    fn showboard_delegates_to_render() {
        let mut ctl = Controller::new();
        let (prefix, text) = ctl.execute("showboard", &[]);
        assert_eq!(prefix, '=');
        assert!(text.contains('+') || text.contains('.'));
    }
}
