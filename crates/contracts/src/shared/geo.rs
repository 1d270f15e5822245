//! Bounding-region arithmetic for camera framing

use serde::{Deserialize, Serialize};

use crate::domain::a001_location::Position;

/// Smallest lat/lng box covering a set of positions.
///
/// Longitudes are not wrapped across the antimeridian; a single city never
/// needs it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLngBounds {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl LatLngBounds {
    pub fn from_point(p: Position) -> Self {
        Self {
            south: p.lat,
            west: p.lng,
            north: p.lat,
            east: p.lng,
        }
    }

    /// `None` for an empty set
    pub fn from_positions<I>(positions: I) -> Option<Self>
    where
        I: IntoIterator<Item = Position>,
    {
        let mut iter = positions.into_iter();
        let mut bounds = Self::from_point(iter.next()?);
        for p in iter {
            bounds.extend(p);
        }
        Some(bounds)
    }

    pub fn extend(&mut self, p: Position) {
        self.south = self.south.min(p.lat);
        self.north = self.north.max(p.lat);
        self.west = self.west.min(p.lng);
        self.east = self.east.max(p.lng);
    }

    pub fn contains(&self, p: Position) -> bool {
        p.lat >= self.south && p.lat <= self.north && p.lng >= self.west && p.lng <= self.east
    }

    pub fn center(&self) -> Position {
        Position::new(
            (self.south + self.north) / 2.0,
            (self.west + self.east) / 2.0,
        )
    }

    pub fn south_west(&self) -> Position {
        Position::new(self.south, self.west)
    }

    pub fn north_east(&self) -> Position {
        Position::new(self.north, self.east)
    }
}
