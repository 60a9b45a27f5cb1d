use std::fmt;

use naia_serde::{BitReader, BitWrite, Serde, SerdeErr};

/// Stable identity of a player, assigned by the tournament framework
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlayerId(u16);

impl PlayerId {
    pub const fn new(value: u16) -> Self {
        Self(value)
    }

    pub const fn value(&self) -> u16 {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "player#{}", self.0)
    }
}

impl Serde for PlayerId {
    fn ser(&self, writer: &mut dyn BitWrite) {
        self.0.ser(writer);
    }

    fn de(reader: &mut BitReader) -> Result<Self, SerdeErr> {
        Ok(Self(u16::de(reader)?))
    }

    fn bit_length(&self) -> u32 {
        self.0.bit_length()
    }
}

/// World coordinates of an object lying on the map
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

// floats travel as their raw bit pattern so the replica sees the exact host value
impl Serde for Position {
    fn ser(&self, writer: &mut dyn BitWrite) {
        self.x.to_bits().ser(writer);
        self.y.to_bits().ser(writer);
    }

    fn de(reader: &mut BitReader) -> Result<Self, SerdeErr> {
        let x = f32::from_bits(u32::de(reader)?);
        let y = f32::from_bits(u32::de(reader)?);
        Ok(Self { x, y })
    }

    fn bit_length(&self) -> u32 {
        self.x.to_bits().bit_length() + self.y.to_bits().bit_length()
    }
}

/// Playable rectangle of the map, inclusive on all edges
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MapBounds {
    pub min: Position,
    pub max: Position,
}

impl MapBounds {
    pub fn new(min: Position, max: Position) -> Self {
        Self { min, max }
    }

    /// Bounds of a tile map of `width` x `height` tiles starting at the world origin
    pub fn from_tiles(width: u32, height: u32, tile_size: f32) -> Self {
        Self {
            min: Position::new(0.0, 0.0),
            max: Position::new(width as f32 * tile_size, height as f32 * tile_size),
        }
    }

    pub fn contains(&self, position: &Position) -> bool {
        position.x >= self.min.x
            && position.x <= self.max.x
            && position.y >= self.min.y
            && position.y <= self.max.y
    }
}
