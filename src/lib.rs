//! # regolith-rover
//!
//! Deterministic command interpretation and motion state tracking for a
//! single planetary surface rover on an unbounded integer grid.
//!
//! It decouples the *vehicle* (a [`Rover`] owning location, heading,
//! obstacle set, and status) from the *operator* (a [`ControlTower`] that
//! validates a wire command string as a whole, then drives the rover one
//! token at a time). Forward moves into occupied cells are not errors; they
//! pin the rover to [`RoverStatus::Stuck`] while later commands keep being
//! applied.
//!
//! ```
//! use regolith_rover::{ControlTower, Heading, Rover};
//!
//! let mut rover = Rover::new((0, 1), Heading::West);
//! let mut tower = ControlTower::new(&mut rover);
//! tower.execute_commands("FLFFFRFLBB")?;
//! assert_eq!(tower.report_position(), "(-2, 0) SOUTH OK");
//! # Ok::<(), regolith_rover::InvalidCommand>(())
//! ```

pub mod heading;
pub mod rover;
pub mod tower;

pub use heading::*;
pub use rover::*;
pub use tower::*;
