//! Cardinal headings on the surface grid.

use glam::IVec2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The four cardinal directions a rover can face.
///
/// Variants are declared in left-rotation order: each call to
/// [`rotated_left`](Self::rotated_left) walks the cycle N → W → S → E → N,
/// and [`rotated_right`](Self::rotated_right) walks it in reverse.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Heading {
    North,
    West,
    South,
    East,
}

impl Heading {
    /// Returns the unit grid step for one forward move along this heading.
    ///
    /// North is +Y, East is +X. A backward move subtracts the same step.
    pub fn step(self) -> IVec2 {
        match self {
            Heading::North => IVec2::Y,
            Heading::West => IVec2::NEG_X,
            Heading::South => IVec2::NEG_Y,
            Heading::East => IVec2::X,
        }
    }

    /// Returns the heading one quarter turn counter-clockwise.
    pub fn rotated_left(self) -> Self {
        match self {
            Heading::North => Heading::West,
            Heading::West => Heading::South,
            Heading::South => Heading::East,
            Heading::East => Heading::North,
        }
    }

    /// Returns the heading one quarter turn clockwise, the exact inverse of
    /// [`rotated_left`](Self::rotated_left).
    pub fn rotated_right(self) -> Self {
        match self {
            Heading::North => Heading::East,
            Heading::East => Heading::South,
            Heading::South => Heading::West,
            Heading::West => Heading::North,
        }
    }

    /// The full English name used in position reports.
    pub fn name(self) -> &'static str {
        match self {
            Heading::North => "NORTH",
            Heading::West => "WEST",
            Heading::South => "SOUTH",
            Heading::East => "EAST",
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
