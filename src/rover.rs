//! Rover state and single-step motion physics.

use crate::heading::Heading;
use glam::IVec2;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use tracing::debug;

/// Whether a rover is free to advance or pinned against an obstacle.
///
/// The only transition is `Ok` to `Stuck`, fired by a forward move whose
/// target cell is occupied. No operation transitions a rover back to `Ok`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoverStatus {
    /// Free to move.
    #[default]
    Ok,
    /// A forward move was blocked by an obstacle.
    Stuck,
}

impl RoverStatus {
    /// The marker used in position reports.
    pub fn name(self) -> &'static str {
        match self {
            RoverStatus::Ok => "OK",
            RoverStatus::Stuck => "STUCK",
        }
    }
}

impl fmt::Display for RoverStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Holds the position and heading of a rover and applies its motion.
///
/// The rover exclusively owns its location, heading, obstacle set, and
/// status. Drive it through a [`ControlTower`](crate::ControlTower) or call
/// the motion primitives directly; none of them can fail. Obstacles are
/// fixed at construction time.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Rover {
    location: IVec2,
    heading: Heading,
    obstacles: HashSet<IVec2>,
    status: RoverStatus,
}

impl Rover {
    /// Creates a rover at `location` facing `heading`, with an empty
    /// obstacle set and `Ok` status.
    ///
    /// `location` accepts anything convertible to an [`IVec2`], so plain
    /// `(x, y)` tuples work.
    pub fn new(location: impl Into<IVec2>, heading: Heading) -> Self {
        Self {
            location: location.into(),
            heading,
            obstacles: HashSet::new(),
            status: RoverStatus::Ok,
        }
    }

    /// Replaces the obstacle set in one step (builder pattern).
    ///
    /// Duplicate coordinates collapse; the set is fixed for the lifetime of
    /// the rover.
    pub fn with_obstacles<I, P>(mut self, obstacles: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<IVec2>,
    {
        self.obstacles = obstacles.into_iter().map(Into::into).collect();
        self
    }

    /// Overrides the initial status.
    pub fn with_status(mut self, status: RoverStatus) -> Self {
        self.status = status;
        self
    }

    /// Current grid location.
    pub fn location(&self) -> IVec2 {
        self.location
    }

    /// Current heading.
    pub fn heading(&self) -> Heading {
        self.heading
    }

    /// Current status.
    pub fn status(&self) -> RoverStatus {
        self.status
    }

    /// True once a forward move has been blocked.
    pub fn is_stuck(&self) -> bool {
        self.status == RoverStatus::Stuck
    }

    /// The fixed set of cells that block forward motion.
    pub fn obstacles(&self) -> &HashSet<IVec2> {
        &self.obstacles
    }

    /// Moves one cell forward along the current heading.
    ///
    /// If the target cell is an obstacle the location is left unchanged and
    /// the status becomes [`RoverStatus::Stuck`]. A blocked move is a normal
    /// outcome, not an error; later commands keep being applied.
    pub fn move_forwards(&mut self) {
        let target = self.location + self.heading.step();
        if self.obstacles.contains(&target) {
            debug!(
                "forward move into ({}, {}) blocked, rover stuck",
                target.x, target.y
            );
            self.status = RoverStatus::Stuck;
        } else {
            self.location = target;
        }
    }

    /// Moves one cell backward, against the current heading.
    ///
    /// Backward moves never consult the obstacle set and never touch the
    /// status: a reversing rover can enter an occupied cell.
    pub fn move_backwards(&mut self) {
        self.location -= self.heading.step();
    }

    /// Rotates a quarter turn counter-clockwise (N → W → S → E → N).
    pub fn rotate_left(&mut self) {
        self.heading = self.heading.rotated_left();
    }

    /// Rotates a quarter turn clockwise (N → E → S → W → N).
    pub fn rotate_right(&mut self) {
        self.heading = self.heading.rotated_right();
    }
}
