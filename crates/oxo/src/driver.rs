//! Text driver: the menu and the play loop.
//!
//! The driver only reads lines and prints the board; every rule decision
//! is made by the [`Session`].

use crate::{BoardStore, RestoreOutcome, Session, SessionError};
use oxo_tictactoe::{GameStatus, Opponent};
use std::io::{self, BufRead, Write};
use tracing::{debug, instrument};

/// Main menu entries, in display order.
pub const MENU: [&str; 4] = [
    "Start new game",
    "Resume saved game",
    "Display help",
    "Quit",
];

const HELP: &str = "
    Start new game:  starts a new game of tic-tac-toe
    Resume saved game: restores the last saved game and commences play
    Display help: shows this page
    Quit: quits the application
";

/// A main menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Start a new game.
    NewGame,
    /// Resume the saved game.
    Resume,
    /// Show help.
    Help,
    /// Leave the program.
    Quit,
}

impl MenuChoice {
    /// Maps a 1-based menu number to a choice.
    pub fn from_number(number: usize) -> Option<Self> {
        match number {
            1 => Some(MenuChoice::NewGame),
            2 => Some(MenuChoice::Resume),
            3 => Some(MenuChoice::Help),
            4 => Some(MenuChoice::Quit),
            _ => None,
        }
    }
}

/// How a play loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayEnd {
    /// The game reached a terminal status.
    Finished(GameStatus),
    /// The player quit (or input ran out).
    Quit,
}

/// Drives a session from line-based input.
#[derive(Debug)]
pub struct Driver<S, O, R, W> {
    session: Session<S, O>,
    input: R,
    output: W,
}

impl<S, O, R, W> Driver<S, O, R, W>
where
    S: BoardStore,
    O: Opponent,
    R: BufRead,
    W: Write,
{
    /// Creates a driver around a session.
    pub fn new(session: Session<S, O>, input: R, output: W) -> Self {
        Self {
            session,
            input,
            output,
        }
    }

    /// Returns the session.
    pub fn session(&self) -> &Session<S, O> {
        &self.session
    }

    /// Consumes the driver, returning the output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Writes a prompt and reads one line, or `None` at end of input.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Shows the menu until a valid entry is chosen.
    ///
    /// Returns `None` at end of input.
    #[instrument(skip(self))]
    pub fn menu_choice(&mut self) -> io::Result<Option<MenuChoice>> {
        loop {
            for (index, item) in MENU.iter().enumerate() {
                writeln!(self.output, "{} \t {}", index + 1, item)?;
            }
            let Some(line) = self.prompt("\nChoose a menu option: ")? else {
                return Ok(None);
            };
            match line.parse::<usize>().ok().and_then(MenuChoice::from_number) {
                Some(choice) => return Ok(Some(choice)),
                None => writeln!(self.output, "Choose a number between 1 and {}", MENU.len())?,
            }
        }
    }

    /// Runs the menu until the player quits.
    #[instrument(skip(self))]
    pub fn run_menu(&mut self) -> io::Result<()> {
        loop {
            let choice = self.menu_choice()?;
            debug!(?choice, "Menu choice");
            match choice {
                Some(MenuChoice::NewGame) => {
                    self.session.new_game();
                    if self.play()? == PlayEnd::Quit {
                        return Ok(());
                    }
                }
                Some(MenuChoice::Resume) => {
                    self.resume()?;
                    if self.play()? == PlayEnd::Quit {
                        return Ok(());
                    }
                }
                Some(MenuChoice::Help) => write!(self.output, "{}", HELP)?,
                Some(MenuChoice::Quit) | None => {
                    writeln!(self.output, "Goodbye...")?;
                    return Ok(());
                }
            }
        }
    }

    /// Restores the saved game and tells the player what happened.
    pub fn resume(&mut self) -> io::Result<RestoreOutcome> {
        let outcome = self.session.restore();
        if outcome == RestoreOutcome::StartedFresh {
            writeln!(self.output, "No saved game found, starting a new one.")?;
        }
        Ok(outcome)
    }

    /// Plays the current game until it ends or the player quits.
    #[instrument(skip(self))]
    pub fn play(&mut self) -> io::Result<PlayEnd> {
        loop {
            writeln!(self.output, "\n{}\n", self.session.board().display())?;

            let status = self.session.status();
            if status.is_terminal() {
                self.announce(status)?;
                return Ok(PlayEnd::Finished(status));
            }

            let Some(line) = self.prompt("Cell[1-9 or q to quit]: ")? else {
                return Ok(PlayEnd::Quit);
            };

            if line.to_lowercase().starts_with('q') {
                self.quit()?;
                return Ok(PlayEnd::Quit);
            }

            let Some(index) = line.parse::<usize>().ok().and_then(|n| n.checked_sub(1)) else {
                writeln!(self.output, "Choose a number between 1 and 9 or 'q' to quit ")?;
                continue;
            };

            match self.session.player_move(index) {
                Ok(turn) => {
                    if let Some(reply) = turn.opponent_move() {
                        writeln!(
                            self.output,
                            "Opponent plays {}",
                            reply.position.to_index() + 1
                        )?;
                    }
                }
                Err(SessionError::InvalidIndex(_)) => {
                    writeln!(self.output, "Choose a number between 1 and 9 or 'q' to quit ")?;
                }
                Err(SessionError::SquareOccupied(_)) => {
                    writeln!(self.output, "Choose an empty cell")?;
                }
                Err(e) => writeln!(self.output, "{}", e)?,
            }
        }
    }

    /// Offers to save, then says goodbye.
    fn quit(&mut self) -> io::Result<()> {
        let answer = self.prompt("Save game before quitting?[y/n] ")?;
        if answer.is_some_and(|a| a.to_lowercase().starts_with('y')) {
            match self.session.save() {
                Ok(()) => writeln!(self.output, "Game saved.")?,
                Err(e) => writeln!(self.output, "Could not save game: {}", e)?,
            }
        }
        writeln!(self.output, "Goodbye...")
    }

    fn announce(&mut self, status: GameStatus) -> io::Result<()> {
        match status {
            GameStatus::PlayerWon => writeln!(self.output, "Winner is X\n"),
            GameStatus::OpponentWon => writeln!(self.output, "Winner is O\n"),
            GameStatus::Draw => writeln!(self.output, "It's a draw!"),
            GameStatus::InProgress => Ok(()),
        }
    }
}
