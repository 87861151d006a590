//! Line-oriented text protocol for driving the engine.
//!
//! Modeled on GTP: each line is an optional numeric id followed by a command
//! and its arguments. Responses start with `=` on success or `?` on failure,
//! echo the id, and end with a blank line. Any front-end that can talk over
//! stdin/stdout can play against the engine this way.
//!
//! ## Supported Commands
//!
//! - `name`, `version`, `protocol_version` - Engine identification
//! - `list_commands` - List all supported commands
//! - `known_command <cmd>` - Check if a command is supported
//! - `quit` - Exit the loop
//! - `clear_board` - Start a new game
//! - `difficulty [level]` - Show or set the engine level (easy, medium, hard)
//! - `play <pit>` - Play a pit for the side to move
//! - `genmove` - Let the engine choose and play a move for the side to move
//! - `hint` - Suggest a move for the side to move without playing it
//! - `legal_moves` - Pits the side to move may play
//! - `showboard` - Print the board, scores and turn
//! - `score` - Print both scores
//! - `history` - List the moves played so far
//!
//! ## Example
//!
//! ```ignore
//! use mancala_rust::protocol::TextEngine;
//! let mut engine = TextEngine::new();
//! engine.run()?;
//! ```

use std::io::{self, BufRead, Write};

use crate::board::{Pit, Side};
use crate::game::Game;
use crate::search::{DecisionEngine, Difficulty, suggest_move};

/// The list of known commands.
const KNOWN_COMMANDS: &[&str] = &[
    "clear_board",
    "difficulty",
    "genmove",
    "hint",
    "history",
    "known_command",
    "legal_moves",
    "list_commands",
    "name",
    "play",
    "protocol_version",
    "quit",
    "score",
    "showboard",
    "version",
];

/// Protocol session state.
pub struct TextEngine {
    game: Game,
    engine: DecisionEngine,
}

impl Default for TextEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TextEngine {
    /// Create a session at the default difficulty.
    pub fn new() -> Self {
        Self::with_difficulty(Difficulty::default())
    }

    pub fn with_difficulty(difficulty: Difficulty) -> Self {
        Self {
            game: Game::new(),
            engine: DecisionEngine::new(difficulty),
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Run the command loop, reading from stdin and writing to stdout.
    pub fn run(&mut self) -> anyhow::Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.run_with(stdin.lock(), stdout.lock())
    }

    /// Run the command loop over arbitrary streams.
    pub fn run_with(&mut self, input: impl BufRead, mut output: impl Write) -> anyhow::Result<()> {
        for line in input.lines() {
            let line = line?;

            // Skip empty lines and comments
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (id, command_line) = Self::parse_id(line);
            let parts: Vec<&str> = command_line.split_whitespace().collect();
            let Some((command, args)) = parts.split_first() else {
                continue;
            };
            let command = command.to_lowercase();

            let (success, message) = self.execute(&command, args);
            let prefix = if success { '=' } else { '?' };
            let id_str = id.map(|i| i.to_string()).unwrap_or_default();

            writeln!(output, "{prefix}{id_str} {message}\n")?;
            output.flush()?;

            if command == "quit" {
                break;
            }
        }
        Ok(())
    }

    /// Parse an optional numeric command ID from the beginning of the line.
    fn parse_id(line: &str) -> (Option<u32>, &str) {
        let trimmed = line.trim();
        let end = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(trimmed.len());
        if end > 0 {
            if let Ok(id) = trimmed[..end].parse::<u32>() {
                return (Some(id), trimmed[end..].trim());
            }
        }
        (None, trimmed)
    }

    /// Execute a command and return (success, response).
    pub fn execute(&mut self, command: &str, args: &[&str]) -> (bool, String) {
        match command {
            "name" => (true, env!("CARGO_PKG_NAME").to_string()),

            "version" => (true, env!("CARGO_PKG_VERSION").to_string()),

            "protocol_version" => (true, "1".to_string()),

            "list_commands" => (true, KNOWN_COMMANDS.join("\n")),

            "known_command" => match args.first() {
                Some(cmd) => {
                    let known = KNOWN_COMMANDS.contains(&cmd.to_lowercase().as_str());
                    (true, known.to_string())
                }
                None => (false, "missing argument".to_string()),
            },

            "quit" => (true, String::new()),

            "clear_board" => {
                self.game.reset();
                (true, String::new())
            }

            "difficulty" => {
                if let Some(level) = args.first() {
                    self.engine = DecisionEngine::new(Difficulty::from_name(level));
                }
                (true, self.engine.difficulty().to_string())
            }

            "play" => {
                let Some(arg) = args.first() else {
                    return (false, "missing argument".to_string());
                };
                let Ok(pit) = arg.parse::<Pit>() else {
                    return (false, format!("invalid pit '{arg}'"));
                };
                match self.game.apply_move(pit) {
                    Ok(result) => {
                        let message = result.outcome.map(|o| o.to_string()).unwrap_or_default();
                        (true, message)
                    }
                    Err(err) => (false, err.to_string()),
                }
            }

            "genmove" => {
                let side = self.game.turn();
                let Some(decision) = self.engine.choose_move(self.game.state(), side) else {
                    return (false, "no move available".to_string());
                };
                match self.game.apply_move(decision.pit) {
                    Ok(_) => (true, format!("{}\n{}", decision.pit, decision.explanation)),
                    Err(err) => (false, err.to_string()),
                }
            }

            "hint" => {
                let state = self.game.state();
                if !state.is_finished() && state.turn() != Side::HUMAN {
                    return (false, format!("hints are for side {}", Side::HUMAN));
                }
                match suggest_move(state) {
                    Some(hint) => (true, format!("{}\n{hint}", hint.pit)),
                    None => (false, "no move available".to_string()),
                }
            }

            "legal_moves" => {
                let moves: Vec<String> = self
                    .game
                    .state()
                    .moves_to_play()
                    .iter()
                    .map(Pit::to_string)
                    .collect();
                (true, moves.join(" "))
            }

            "showboard" => (true, format!("\n{}", self.game.state())),

            "score" => {
                let state = self.game.state();
                (
                    true,
                    format!("A {} B {}", state.score(Side::A), state.score(Side::B)),
                )
            }

            "history" => {
                let lines: Vec<String> = self
                    .game
                    .history()
                    .iter()
                    .map(|r| {
                        let mut line = format!("{} {}", r.side, r.start_pit);
                        if r.captured() > 0 {
                            line.push_str(&format!(" captured {}", r.captured()));
                        }
                        if r.bonus_turn {
                            line.push_str(" bonus");
                        }
                        line
                    })
                    .collect();
                (true, lines.join("\n"))
            }

            _ => (false, format!("unknown command: {command}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id_with_id() {
        let (id, cmd) = TextEngine::parse_id("123 name");
        assert_eq!(id, Some(123));
        assert_eq!(cmd, "name");
    }

    #[test]
    fn test_parse_id_without_id() {
        let (id, cmd) = TextEngine::parse_id("name");
        assert_eq!(id, None);
        assert_eq!(cmd, "name");
    }

    #[test]
    fn test_known_command() {
        let mut engine = TextEngine::new();

        let (success, response) = engine.execute("known_command", &["genmove"]);
        assert!(success);
        assert_eq!(response, "true");

        let (success, response) = engine.execute("known_command", &["boardsize"]);
        assert!(success);
        assert_eq!(response, "false");
    }

    #[test]
    fn test_play_and_clear() {
        let mut engine = TextEngine::new();

        let (success, _) = engine.execute("play", &["2"]);
        assert!(success);
        assert_eq!(engine.game().turn(), Side::B);

        let (success, message) = engine.execute("play", &["2"]);
        assert!(!success);
        assert!(message.contains("Illegal move"));

        let (success, _) = engine.execute("clear_board", &[]);
        assert!(success);
        assert!(engine.game().history().is_empty());
    }

    #[test]
    fn test_difficulty_falls_back_to_medium() {
        let mut engine = TextEngine::with_difficulty(Difficulty::Hard);
        let (_, response) = engine.execute("difficulty", &[]);
        assert_eq!(response, "hard");
        let (success, response) = engine.execute("difficulty", &["impossible"]);
        assert!(success);
        assert_eq!(response, "medium");
    }

    #[test]
    fn test_genmove_plays_for_side_to_move() {
        let mut engine = TextEngine::with_difficulty(Difficulty::Easy);
        engine.execute("play", &["2"]);
        let (success, response) = engine.execute("genmove", &[]);
        assert!(success);
        let pit: Pit = response.lines().next().unwrap().parse().unwrap();
        assert!(Side::B.owns(pit));
        assert_eq!(engine.game().history().len(), 2);
    }

    #[test]
    fn test_hint_only_on_human_turn() {
        let mut engine = TextEngine::new();
        let (success, response) = engine.execute("hint", &[]);
        assert!(success);
        let pit: Pit = response.lines().next().unwrap().parse().unwrap();
        assert!(Side::A.owns(pit));

        engine.execute("play", &["2"]);
        let (success, response) = engine.execute("hint", &[]);
        assert!(!success);
        assert_eq!(response, "hints are for side A");
    }

    #[test]
    fn test_run_with_streams() {
        let mut engine = TextEngine::new();
        let input = b"1 name\nlegal_moves\n# comment\n2 quit\nname\n";
        let mut output = Vec::new();
        engine.run_with(&input[..], &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();
        assert_eq!(
            text,
            "=1 mancala-rust\n\n= 0 1 2 3 4 5 6\n\n=2 \n\n"
        );
    }
}
