//! Colors and landmark metadata for the race board.
//!
//! The flat `Color` palette is what a renderer paints. Resolution never
//! matches against it directly: every space carries a `SpaceColor`, which
//! separates the five cycling colors from the terminal white and the five
//! landmark marker colors, so a card can only ever name a cycling color.

use serde::{Deserialize, Serialize};

/// The number of cycling colors assigned to ordinary spaces.
pub const CYCLE_LEN: usize = 5;

/// The number of landmark (special) spaces on every board.
pub const LANDMARK_COUNT: usize = 5;

/// Every paintable color on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Color {
    White = 0,
    Orange = 1,
    Red = 2,
    Yellow = 3,
    Blue = 4,
    Green = 5,
    Magenta = 6,
    Cyan = 7,
    Pink = 8,
    Gray = 9,
    Black = 10,
}

/// All palette colors in discriminant order.
pub const ALL_COLORS: [Color; 11] = [
    Color::White, Color::Orange, Color::Red, Color::Yellow,
    Color::Blue, Color::Green, Color::Magenta, Color::Cyan,
    Color::Pink, Color::Gray, Color::Black,
];

impl Color {
    /// Returns the text color that stays legible on this background.
    pub const fn text_color(self) -> Color {
        match self {
            Color::Blue | Color::Gray | Color::Black => Color::White,
            _ => Color::Black,
        }
    }

    /// Narrows a palette color to a cycling color, if it is one.
    pub const fn as_cycling(self) -> Option<CandyColor> {
        match self {
            Color::Orange => Some(CandyColor::Orange),
            Color::Red => Some(CandyColor::Red),
            Color::Yellow => Some(CandyColor::Yellow),
            Color::Blue => Some(CandyColor::Blue),
            Color::Green => Some(CandyColor::Green),
            _ => None,
        }
    }
}

/// One of the five colors that cycle across ordinary spaces.
///
/// Discriminants equal `index % 5` for the spaces that carry the color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum CandyColor {
    Orange = 0,
    Red = 1,
    Yellow = 2,
    Blue = 3,
    Green = 4,
}

/// Cycling colors keyed by `index % 5`.
pub const CYCLE: [CandyColor; CYCLE_LEN] = [
    CandyColor::Orange,
    CandyColor::Red,
    CandyColor::Yellow,
    CandyColor::Blue,
    CandyColor::Green,
];

impl CandyColor {
    /// Returns the cycling color for an ordinary space at `index`.
    pub const fn for_index(index: usize) -> CandyColor {
        CYCLE[index % CYCLE_LEN]
    }

    /// Widens to the flat palette.
    pub const fn color(self) -> Color {
        match self {
            CandyColor::Orange => Color::Orange,
            CandyColor::Red => Color::Red,
            CandyColor::Yellow => Color::Yellow,
            CandyColor::Blue => Color::Blue,
            CandyColor::Green => Color::Green,
        }
    }

    /// Returns the lowercase letter used in card notation.
    pub const fn letter(self) -> char {
        match self {
            CandyColor::Orange => 'o',
            CandyColor::Red => 'r',
            CandyColor::Yellow => 'y',
            CandyColor::Blue => 'b',
            CandyColor::Green => 'g',
        }
    }

    /// Parses a cycling color from its notation letter.
    pub fn from_letter(c: char) -> Option<CandyColor> {
        CYCLE.iter().copied().find(|color| color.letter() == c)
    }
}

/// A named landmark, one per special space, in ascending board order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Landmark {
    CandyCaneForest = 0,
    MintyMountains = 1,
    BubbleGumTrapeze = 2,
    MarshmallowMarsh = 3,
    LicoriceLagoon = 4,
}

/// Static metadata for a landmark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LandmarkInfo {
    pub name: &'static str,
    pub marker: Color,
}

/// Landmarks in ascending board order.
pub const ALL_LANDMARKS: [Landmark; LANDMARK_COUNT] = [
    Landmark::CandyCaneForest,
    Landmark::MintyMountains,
    Landmark::BubbleGumTrapeze,
    Landmark::MarshmallowMarsh,
    Landmark::LicoriceLagoon,
];

/// Landmark metadata indexed by `Landmark as usize`.
pub const LANDMARK_INFO: [LandmarkInfo; LANDMARK_COUNT] = [
    LandmarkInfo { name: "Candy Cane Forest", marker: Color::Magenta },
    LandmarkInfo { name: "Minty Mountains", marker: Color::Cyan },
    LandmarkInfo { name: "Bubble Gum Trapeze", marker: Color::Pink },
    LandmarkInfo { name: "Marshmallow Marsh", marker: Color::Gray },
    LandmarkInfo { name: "Licorice Lagoon", marker: Color::Black },
];

impl Landmark {
    /// Returns the 1-based rank (1 = nearest the start).
    pub const fn rank(self) -> u8 {
        self as u8 + 1
    }

    /// Looks up a landmark by its 1-based rank.
    pub fn from_rank(rank: u8) -> Option<Landmark> {
        match rank {
            1..=5 => Some(ALL_LANDMARKS[(rank - 1) as usize]),
            _ => None,
        }
    }

    /// Returns the display name.
    pub const fn name(self) -> &'static str {
        LANDMARK_INFO[self as usize].name
    }

    /// Returns the marker color painted on this landmark's space.
    pub const fn marker(self) -> Color {
        LANDMARK_INFO[self as usize].marker
    }
}

/// The color role of a single space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpaceColor {
    /// The white start and end spaces.
    Terminal,
    /// An ordinary space that cards can match.
    Cycling(CandyColor),
    /// A landmark space, reachable only by teleport.
    Marker(Landmark),
}

impl SpaceColor {
    /// Returns the palette color to paint.
    pub const fn color(self) -> Color {
        match self {
            SpaceColor::Terminal => Color::White,
            SpaceColor::Cycling(c) => c.color(),
            SpaceColor::Marker(l) => l.marker(),
        }
    }

    /// Returns true if a card of `color` may stop on this space.
    pub fn matches(self, color: CandyColor) -> bool {
        self == SpaceColor::Cycling(color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_is_keyed_by_discriminant() {
        for (i, c) in CYCLE.iter().enumerate() {
            assert_eq!(*c as usize, i);
            assert_eq!(CandyColor::for_index(i + 5), *c);
        }
    }

    #[test]
    fn letters_round_trip() {
        for c in CYCLE {
            assert_eq!(CandyColor::from_letter(c.letter()), Some(c));
        }
        assert_eq!(CandyColor::from_letter('w'), None);
    }

    #[test]
    fn landmark_markers_are_unique_and_not_cycling() {
        for (i, a) in ALL_LANDMARKS.iter().enumerate() {
            assert!(a.marker().as_cycling().is_none());
            assert_ne!(a.marker(), Color::White);
            for b in &ALL_LANDMARKS[i + 1..] {
                assert_ne!(a.marker(), b.marker());
            }
        }
    }

    #[test]
    fn landmark_ranks() {
        assert_eq!(Landmark::from_rank(1), Some(Landmark::CandyCaneForest));
        assert_eq!(Landmark::from_rank(5), Some(Landmark::LicoriceLagoon));
        assert_eq!(Landmark::from_rank(0), None);
        assert_eq!(Landmark::from_rank(6), None);
        assert_eq!(Landmark::BubbleGumTrapeze.rank(), 3);
        assert_eq!(Landmark::MarshmallowMarsh.name(), "Marshmallow Marsh");
    }

    #[test]
    fn text_colors() {
        assert_eq!(Color::Blue.text_color(), Color::White);
        assert_eq!(Color::Gray.text_color(), Color::White);
        assert_eq!(Color::Black.text_color(), Color::White);
        assert_eq!(Color::Red.text_color(), Color::Black);
        assert_eq!(Color::Pink.text_color(), Color::Black);
    }

    #[test]
    fn marker_never_matches_a_card() {
        let space = SpaceColor::Marker(Landmark::MintyMountains);
        assert!(CYCLE.iter().all(|c| !space.matches(*c)));
        assert!(!SpaceColor::Terminal.matches(CandyColor::Red));
        assert!(SpaceColor::Cycling(CandyColor::Red).matches(CandyColor::Red));
    }

    #[test]
    fn all_colors_in_discriminant_order() {
        for (i, c) in ALL_COLORS.iter().enumerate() {
            assert_eq!(*c as usize, i);
        }
    }
}
