use strum::{Display, EnumIter, FromRepr};

/// Terrain classes a map pixel can be labeled as
///
/// The `repr(u8)` discriminants are exactly the label values stored in the
/// encoded bitmap, so a decoded label byte converts back with
/// [`Terrain::from_repr`].
#[derive(Debug, Eq, PartialEq, PartialOrd, Ord, Copy, Clone, Hash, Display, EnumIter, FromRepr)]
#[repr(u8)]
pub enum Terrain {
    /// Fallback class for any color outside the palette
    Meadow = 0,
    /// Dark green terrain
    Forest = 1,
    /// Red/orange terrain (food sources)
    Food = 2,
    /// Blue terrain (water)
    Water = 3,
}

/// The source colors recognized by the classifier, in match priority order
///
/// Matching is bit-exact per channel; there is no tolerance. First match wins,
/// and anything unmatched falls back to [`Terrain::Meadow`].
pub const PALETTE: [([u8; 3], Terrain); 3] = [
    ([0, 80, 0], Terrain::Forest),
    ([255, 50, 0], Terrain::Food),
    ([0, 90, 255], Terrain::Water),
];

impl Terrain {
    /// Classifies a single RGB pixel against [`PALETTE`]
    #[must_use]
    pub fn classify(rgb: [u8; 3]) -> Self {
        PALETTE
            .iter()
            .find(|(color, _)| *color == rgb)
            .map_or(Self::Meadow, |&(_, terrain)| terrain)
    }

    /// Returns the label value stored in the bitmap for this terrain
    #[must_use]
    pub const fn label(self) -> u8 {
        self as u8
    }

    /// Representative color used when rendering a grid back to RGB
    ///
    /// Palette classes render as their palette color; [`Self::Meadow`] renders
    /// black, which reclassifies back to `Meadow`.
    #[must_use]
    pub const fn color(self) -> [u8; 3] {
        match self {
            Self::Meadow => [0, 0, 0],
            Self::Forest => [0, 80, 0],
            Self::Food => [255, 50, 0],
            Self::Water => [0, 90, 255],
        }
    }
}
