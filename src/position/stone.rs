use std::fmt;

use board_game_traits::Color;

use crate::position::error::IllegalStone;

/// Whether a stone is one of the player's regular stones, or their capstone.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum StoneKind {
    Regular,
    Capstone,
}

/// The three kinds of placement a player can make.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Role {
    Flat,
    Standing,
    Cap,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Orientation {
    Flat,
    Standing,
}

/// A single Tak piece. A capstone is always standing.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Stone {
    color: Color,
    kind: StoneKind,
    orientation: Orientation,
}

impl Stone {
    pub fn new(
        color: Color,
        kind: StoneKind,
        orientation: Orientation,
    ) -> Result<Self, IllegalStone> {
        if kind == StoneKind::Capstone && orientation == Orientation::Flat {
            return Err(IllegalStone);
        }
        Ok(Stone {
            color,
            kind,
            orientation,
        })
    }

    pub const fn flat(color: Color) -> Self {
        Stone {
            color,
            kind: StoneKind::Regular,
            orientation: Orientation::Flat,
        }
    }

    pub const fn standing(color: Color) -> Self {
        Stone {
            color,
            kind: StoneKind::Regular,
            orientation: Orientation::Standing,
        }
    }

    pub const fn capstone(color: Color) -> Self {
        Stone {
            color,
            kind: StoneKind::Capstone,
            orientation: Orientation::Standing,
        }
    }

    pub const fn from_role_color(role: Role, color: Color) -> Self {
        match role {
            Role::Flat => Stone::flat(color),
            Role::Standing => Stone::standing(color),
            Role::Cap => Stone::capstone(color),
        }
    }

    pub fn role(self) -> Role {
        match (self.kind, self.orientation) {
            (StoneKind::Capstone, _) => Role::Cap,
            (StoneKind::Regular, Orientation::Standing) => Role::Standing,
            (StoneKind::Regular, Orientation::Flat) => Role::Flat,
        }
    }

    pub fn color(self) -> Color {
        self.color
    }

    pub fn kind(self) -> StoneKind {
        self.kind
    }

    pub fn orientation(self) -> Orientation {
        self.orientation
    }

    pub fn is_capstone(self) -> bool {
        self.kind == StoneKind::Capstone
    }

    /// True for regular stones that are standing. Capstones are never walls.
    pub fn is_wall(self) -> bool {
        self.kind == StoneKind::Regular && self.orientation == Orientation::Standing
    }

    pub fn set_orientation(&mut self, orientation: Orientation) -> Result<(), IllegalStone> {
        if self.kind == StoneKind::Capstone && orientation == Orientation::Flat {
            return Err(IllegalStone);
        }
        self.orientation = orientation;
        Ok(())
    }

    /// Knock a wall down to a flat. Does nothing to flats and capstones.
    pub(crate) fn flatten(&mut self) {
        if self.is_wall() {
            self.orientation = Orientation::Flat;
        }
    }

    /// Flats and capstones count toward a road, walls do not.
    pub fn is_road_stone(self) -> bool {
        self.kind == StoneKind::Capstone || self.orientation == Orientation::Flat
    }
}

impl fmt::Display for Stone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self.color {
            Color::White => 'w',
            Color::Black => 'b',
        };
        match (self.kind, self.orientation) {
            (StoneKind::Capstone, _) => write!(f, "{}", letter.to_ascii_uppercase())?,
            (StoneKind::Regular, Orientation::Standing) => write!(f, "S{}", letter)?,
            (StoneKind::Regular, Orientation::Flat) => write!(f, "{}", letter)?,
        }
        Ok(())
    }
}
