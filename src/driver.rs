//! The turn loop that sits between a player and the [`TurnController`].

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use colored::{Color, Colorize};
use log::warn;

use crate::piece::Colour;
use crate::turn::TurnController;

pub const DEFAULT_MAX_TURNS: usize = 200;

/// Supplies a source and destination square for each attempted turn.
pub trait MoveSource {
    /// `None` ends the game.
    fn next_move(&mut self, colour: Colour) -> Option<(String, String)>;
}

/// A fixed list of moves, handed out in order regardless of colour.
pub struct ScriptedMoves {
    moves: VecDeque<(String, String)>,
}

impl ScriptedMoves {
    pub fn new<I, S>(moves: I) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
        S: Into<String>,
    {
        ScriptedMoves {
            moves: moves.into_iter().map(|(from, to)| (from.into(), to.into())).collect(),
        }
    }
}

impl MoveSource for ScriptedMoves {
    fn next_move(&mut self, _colour: Colour) -> Option<(String, String)> {
        self.moves.pop_front()
    }
}

/// Prompts for one square per line. Input is trimmed and lower-cased.
pub struct ConsoleInput<R, W> {
    input: R,
    prompt: W,
}

impl<R: BufRead, W: Write> ConsoleInput<R, W> {
    pub fn new(input: R, prompt: W) -> Self {
        ConsoleInput { input, prompt }
    }

    fn read_square(&mut self, question: &str) -> io::Result<Option<String>> {
        writeln!(self.prompt, "{question}")?;
        write!(self.prompt, "Coordinates: ")?;
        self.prompt.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_lowercase()))
    }

    fn read_pair(&mut self, colour: Colour) -> io::Result<Option<(String, String)>> {
        writeln!(self.prompt, "{colour}'s turn")?;
        let question = "Enter the coordinates of the piece to move (e.g. a4):";
        let Some(source) = self.read_square(question)? else {
            return Ok(None);
        };
        let Some(destination) = self.read_square("Where do you want to move it? (e.g. a5)")? else {
            return Ok(None);
        };
        Ok(Some((source, destination)))
    }
}

impl<R: BufRead, W: Write> MoveSource for ConsoleInput<R, W> {
    fn next_move(&mut self, colour: Colour) -> Option<(String, String)> {
        match self.read_pair(colour) {
            Ok(pair) => pair,
            Err(err) => {
                warn!("failed to read move: {err}");
                None
            }
        }
    }
}

/// Why [`Game::run`] stopped.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Ending {
    MaxTurnsReached,
    OutOfMoves,
}

pub struct Game {
    pub controller: TurnController,
    pub max_turns: usize,
    pub use_colour_output: bool,
}

impl Game {
    pub fn new(controller: TurnController) -> Self {
        Game {
            controller,
            max_turns: DEFAULT_MAX_TURNS,
            use_colour_output: true,
        }
    }

    fn paint(&self, text: String, color: Color) -> String {
        if self.use_colour_output {
            text.color(color).to_string()
        } else {
            text
        }
    }

    /// Plays until `max_turns` half-moves have been applied or the source
    /// runs dry. A rejected move is reported and the same side tries again.
    pub fn run<S, W>(&mut self, source: &mut S, out: &mut W) -> io::Result<Ending>
    where
        S: MoveSource,
        W: Write,
    {
        writeln!(out, "{}", self.controller.board())?;
        let ending = loop {
            if self.controller.turns_played() >= self.max_turns {
                writeln!(out, "Maximum turns reached.")?;
                break Ending::MaxTurnsReached;
            }
            let colour = self.controller.side_to_move();
            let Some((source_text, destination_text)) = source.next_move(colour) else {
                break Ending::OutOfMoves;
            };
            match self.controller.play(&source_text, &destination_text) {
                Ok(summary) => {
                    writeln!(out, "{}", self.paint(summary.to_string(), Color::Green))?;
                    writeln!(out, "{}", self.controller.board())?;
                }
                Err(err) => {
                    let message = format!("{colour}: {err}");
                    writeln!(out, "{}", self.paint(message, Color::Red))?;
                }
            }
        };
        writeln!(out, "Game over!")?;
        Ok(ending)
    }
}
