//! Line-oriented console front-end.
//!
//! Reads one command per line and prints the board and announcements after
//! each one. Generic over input and output so sessions can be scripted.

use crate::announcer::Announcer;
use crate::config::GameConfig;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tictactoe_engine::{GameEngine, MoveResult, ParsePositionError, Position, Status};
use tracing::{debug, info, instrument, warn};

const HELP: &str = "\
Commands:
  1-9 | row,column | name   place your mark (e.g. 5, 1,1, center)
  start [x-name] [o-name]   start a new game
  start x name, o name      names with spaces, split at the comma
  restart                   start again with the same names
  board                     show the board
  json                      show the game state as JSON
  help                      show this help
  quit                      leave";

/// Why an input line was not understood.
#[derive(
    Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum CommandError {
    /// The line was read as a position and did not parse.
    #[display("{_0}")]
    Position(ParsePositionError),
    /// More than two names without a comma between them.
    #[display(
        "Cannot tell the names apart in {input:?}; separate them with a comma (start Mary Ann, Bob)"
    )]
    #[from(ignore)]
    AmbiguousNames {
        /// Everything after the command word.
        input: String,
    },
}

/// A parsed console command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    /// Place the active mark.
    Play(Position),
    /// Start a new game, optionally with new names.
    Start {
        /// Name for X, if given.
        x_name: Option<String>,
        /// Name for O, if given.
        o_name: Option<String>,
    },
    /// Start again with the current names.
    Restart,
    /// Print the board.
    Board,
    /// Print the snapshot as JSON.
    Json,
    /// Print the command list.
    Help,
    /// Leave the session.
    Quit,
}

impl ConsoleCommand {
    /// Parses one input line. Blank lines yield `None`.
    ///
    /// `start` takes up to two single-word names, or two names of any
    /// length separated by a comma.
    #[instrument]
    pub fn parse(line: &str) -> Option<Result<Self, CommandError>> {
        let line = line.trim();
        let first = line.split_whitespace().next()?;
        let command = match first.to_ascii_lowercase().as_str() {
            "start" | "new" => {
                let (x_name, o_name) = match start_names(line[first.len()..].trim()) {
                    Ok(names) => names,
                    Err(e) => return Some(Err(e)),
                };
                Self::Start { x_name, o_name }
            }
            "restart" | "r" => Self::Restart,
            "board" | "b" => Self::Board,
            "json" => Self::Json,
            "help" | "h" | "?" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            _ => return Some(line.parse().map(Self::Play).map_err(CommandError::from)),
        };
        Some(Ok(command))
    }
}

fn start_names(rest: &str) -> Result<(Option<String>, Option<String>), CommandError> {
    let name = |s: &str| {
        let s = s.trim();
        (!s.is_empty()).then(|| s.to_string())
    };
    if let Some((x, o)) = rest.split_once(',') {
        return Ok((name(x), name(o)));
    }
    match rest.split_whitespace().collect::<Vec<_>>().as_slice() {
        [] => Ok((None, None)),
        [x] => Ok((name(x), None)),
        [x, o] => Ok((name(x), name(o))),
        _ => Err(CommandError::AmbiguousNames {
            input: rest.to_string(),
        }),
    }
}

/// Console session driving one engine.
pub struct Console<R, W> {
    engine: GameEngine,
    config: GameConfig,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a session; the first game starts when [`Console::run`] is called.
    pub fn new(config: GameConfig, input: R, output: W) -> Self {
        Self {
            engine: GameEngine::new(),
            config,
            input,
            output,
        }
    }

    /// Returns the engine.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Returns the output sink.
    pub fn output(&self) -> &W {
        &self.output
    }

    /// Runs until `quit` or end of input.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<()> {
        info!("Console session started");
        let x = self.config.player_x_name().clone();
        let o = self.config.player_o_name().clone();
        self.start(x.as_deref(), o.as_deref())?;

        let mut line = String::new();
        loop {
            self.prompt()?;
            line.clear();
            let read = self
                .input
                .read_line(&mut line)
                .context("Failed to read from input")?;
            if read == 0 {
                debug!("End of input");
                break;
            }

            match ConsoleCommand::parse(&line) {
                None => continue,
                Some(Err(e)) => {
                    warn!(error = %e, "Unrecognised input");
                    writeln!(self.output, "{}", e)?;
                }
                Some(Ok(ConsoleCommand::Quit)) => break,
                Some(Ok(command)) => self.execute(command)?,
            }
        }

        info!("Console session ended");
        Ok(())
    }

    /// Applies one command and prints its result.
    #[instrument(skip(self))]
    pub fn execute(&mut self, command: ConsoleCommand) -> Result<()> {
        match command {
            ConsoleCommand::Play(pos) => self.play(pos)?,
            ConsoleCommand::Start { x_name, o_name } => {
                let x = x_name.or_else(|| self.config.player_x_name().clone());
                let o = o_name.or_else(|| self.config.player_o_name().clone());
                self.start(x.as_deref(), o.as_deref())?;
            }
            ConsoleCommand::Restart => {
                let x = self.engine.player_x().name().clone();
                let o = self.engine.player_o().name().clone();
                self.start(Some(&x), Some(&o))?;
            }
            ConsoleCommand::Board => self.print_board()?,
            ConsoleCommand::Json => {
                let json = serde_json::to_string_pretty(&self.engine.snapshot())
                    .context("Failed to serialize game state")?;
                writeln!(self.output, "{}", json)?;
            }
            ConsoleCommand::Help => writeln!(self.output, "{}", HELP)?,
            ConsoleCommand::Quit => {}
        }
        Ok(())
    }

    fn start(&mut self, x_name: Option<&str>, o_name: Option<&str>) -> Result<()> {
        self.engine.start(x_name, o_name);
        for line in Announcer::new(&self.engine).game_starts() {
            writeln!(self.output, "{}", line)?;
        }
        self.print_board()?;
        writeln!(self.output, "{}", Announcer::new(&self.engine).turn())?;
        Ok(())
    }

    fn play(&mut self, pos: Position) -> Result<()> {
        match self.engine.play(pos) {
            MoveResult::Rejected(reason) => {
                writeln!(self.output, "{}", Announcer::rejection(reason))?;
            }
            MoveResult::Accepted => {
                self.print_board()?;
                let announcer = Announcer::new(&self.engine);
                match announcer.result() {
                    Some(result) => {
                        writeln!(self.output, "{}", result)?;
                        writeln!(self.output, "Type 'restart' to play again or 'quit' to leave.")?;
                    }
                    None => writeln!(self.output, "{}", announcer.turn())?,
                }
            }
        }
        Ok(())
    }

    fn print_board(&mut self) -> Result<()> {
        writeln!(self.output, "{}", self.engine.board())?;
        Ok(())
    }

    fn prompt(&mut self) -> Result<()> {
        if self.engine.status() == Status::Active {
            write!(self.output, "{} > ", self.engine.active_player_name())?;
        } else {
            write!(self.output, "> ")?;
        }
        self.output.flush().context("Failed to flush output")?;
        Ok(())
    }
}
