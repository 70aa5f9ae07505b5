use core::fmt;

/// A stable integer that selects a renderer (and optional click handler) for an item.
///
/// View types are derived from an item's variant, never from its content.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewType(pub u32);

impl ViewType {
    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ViewType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The scroll axis of a list or grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    #[default]
    Vertical,
    Horizontal,
}

/// Four directional spacing magnitudes, in layout units.
///
/// `start`/`end` are the horizontal edges, `top`/`bottom` the vertical ones, independent of
/// the scroll axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Padding {
    pub start: u32,
    pub top: u32,
    pub end: u32,
    pub bottom: u32,
}

impl Padding {
    pub const ZERO: Self = Self::new(0, 0, 0, 0);

    pub const fn new(start: u32, top: u32, end: u32, bottom: u32) -> Self {
        Self {
            start,
            top,
            end,
            bottom,
        }
    }

    pub const fn all(value: u32) -> Self {
        Self::new(value, value, value, value)
    }

    pub const fn symmetric(horizontal: u32, vertical: u32) -> Self {
        Self::new(horizontal, vertical, horizontal, vertical)
    }

    /// Returns a copy with `start` and `end` replaced.
    pub const fn with_horizontal(self, value: u32) -> Self {
        Self {
            start: value,
            end: value,
            ..self
        }
    }

    /// Returns a copy with `top` and `bottom` replaced.
    pub const fn with_vertical(self, value: u32) -> Self {
        Self {
            top: value,
            bottom: value,
            ..self
        }
    }
}

/// Offsets to reserve around an item, as produced by the spacing decoration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemOffsets {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}
