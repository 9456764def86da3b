//! The [`CellKind`] type: what occupies one grid cell.

/// The kind of a grid cell.
///
/// `Path`, `Visited` and `Current` are presentation markers. Searches treat
/// them exactly like `Empty`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellKind {
    #[default]
    Empty,
    Obstacle,
    Source,
    Destination,
    Path,
    Visited,
    Current,
}

impl CellKind {
    /// The character used for this kind in text form.
    pub const fn symbol(self) -> char {
        match self {
            Self::Empty => '.',
            Self::Obstacle => '#',
            Self::Source => 'S',
            Self::Destination => 'D',
            Self::Path => '*',
            Self::Visited => 'v',
            Self::Current => 'c',
        }
    }

    /// Inverse of [`symbol`](Self::symbol).
    pub const fn from_symbol(ch: char) -> Option<Self> {
        Some(match ch {
            '.' => Self::Empty,
            '#' => Self::Obstacle,
            'S' => Self::Source,
            'D' => Self::Destination,
            '*' => Self::Path,
            'v' => Self::Visited,
            'c' => Self::Current,
            _ => return None,
        })
    }

    /// Whether this is a presentation-only marker.
    #[inline]
    pub const fn is_marker(self) -> bool {
        matches!(self, Self::Path | Self::Visited | Self::Current)
    }

    /// Whether this is the source or the destination.
    #[inline]
    pub const fn is_endpoint(self) -> bool {
        matches!(self, Self::Source | Self::Destination)
    }

    #[inline]
    pub const fn is_passable(self) -> bool {
        !matches!(self, Self::Obstacle)
    }
}
