//! Command validation and dispatch for a single rover.
//!
//! The entry point is [`ControlTower`]. Wrap a [`Rover`], submit a command
//! string to [`execute_commands`](ControlTower::execute_commands), and read
//! the outcome back through [`rover`](ControlTower::rover) or
//! [`report_position`](ControlTower::report_position). A command string is
//! validated as a whole before anything is applied, so a rejected string
//! never moves the rover.

use crate::rover::Rover;
use tracing::debug;

/// A single movement instruction, decoded from its wire token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Move one cell along the heading (`F`).
    Forwards,
    /// Move one cell against the heading (`B`).
    Backwards,
    /// Quarter turn counter-clockwise (`L`).
    RotateLeft,
    /// Quarter turn clockwise (`R`).
    RotateRight,
}

/// Error returned when a command string contains a token outside
/// `{F, B, L, R}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("invalid command token {token:?}")]
pub struct InvalidCommand {
    /// The offending character.
    pub token: char,
}

impl Command {
    /// Decodes one wire token.
    pub fn from_token(token: char) -> Result<Self, InvalidCommand> {
        match token {
            'F' => Ok(Command::Forwards),
            'B' => Ok(Command::Backwards),
            'L' => Ok(Command::RotateLeft),
            'R' => Ok(Command::RotateRight),
            _ => Err(InvalidCommand { token }),
        }
    }

    /// The wire token for this command, the inverse of
    /// [`from_token`](Self::from_token).
    pub fn token(self) -> char {
        match self {
            Command::Forwards => 'F',
            Command::Backwards => 'B',
            Command::RotateLeft => 'L',
            Command::RotateRight => 'R',
        }
    }

    /// Decodes a whole command string, failing on the first bad token.
    ///
    /// Decoding the full string up front is what makes execution
    /// all-or-nothing: nothing is applied to a rover unless every token
    /// decodes.
    pub fn parse(commands: &str) -> Result<Vec<Self>, InvalidCommand> {
        commands.chars().map(Self::from_token).collect()
    }
}

/// Drives one rover through validated command strings.
///
/// The tower borrows the rover exclusively for its own lifetime; the caller
/// keeps ownership and reads the final state back once the tower is dropped,
/// or through [`rover`](Self::rover) while it lives. The tower holds no
/// state of its own.
pub struct ControlTower<'a> {
    rover: &'a mut Rover,
}

impl<'a> ControlTower<'a> {
    /// Creates a tower controlling `rover`.
    pub fn new(rover: &'a mut Rover) -> Self {
        Self { rover }
    }

    /// Read access to the controlled rover.
    pub fn rover(&self) -> &Rover {
        self.rover
    }

    /// Checks that `commands` consists only of the tokens `F`, `B`, `L`, `R`.
    ///
    /// Callable without a tower to pre-flight a string. The empty string is
    /// valid and executes as zero commands.
    pub fn validate_commands(commands: &str) -> Result<(), InvalidCommand> {
        Command::parse(commands).map(|_| ())
    }

    /// Validates `commands`, then applies each token to the rover in order.
    ///
    /// A rejected string leaves the rover untouched. An accepted string is
    /// applied to the end even when a forward move gets blocked along the
    /// way: a stuck rover keeps rotating and attempting moves.
    pub fn execute_commands(&mut self, commands: &str) -> Result<(), InvalidCommand> {
        let parsed = Command::parse(commands)?;
        debug!("dispatching {} commands to rover", parsed.len());
        for command in parsed {
            match command {
                Command::Forwards => self.rover.move_forwards(),
                Command::Backwards => self.rover.move_backwards(),
                Command::RotateLeft => self.rover.rotate_left(),
                Command::RotateRight => self.rover.rotate_right(),
            }
        }
        Ok(())
    }

    /// Renders the rover state for humans: `(x, y) HEADING STATUS`.
    pub fn report_position(&self) -> String {
        let location = self.rover.location();
        format!(
            "({}, {}) {} {}",
            location.x,
            location.y,
            self.rover.heading(),
            self.rover.status()
        )
    }
}
