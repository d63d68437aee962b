/*
MIT License
Copyright (c)  Germán Molina
Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:
The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.
THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
*/

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The direction a surface faces.
///
/// Exterior surfaces face one of the eight compass points, or
/// `top` (e.g., a ceiling under an attic) or `bottom` (e.g., a
/// floor over a crawl space).
///
/// Interior elements are seen from two sides, so their direction
/// describes the pair: a `horizontal` element is a vertical wall
/// between two rooms, an `upward` element is a ceiling seen from
/// below (its rear is a floor) and a `downward` element is a floor
/// seen from above (its rear is a ceiling).
///
/// ## Examples
///
/// #### `.json`
/// ```json
/// "sw"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Faces South
    #[serde(rename = "s")]
    South,
    /// Faces SouthWest
    #[serde(rename = "sw")]
    SouthWest,
    /// Faces West
    #[serde(rename = "w")]
    West,
    /// Faces NorthWest
    #[serde(rename = "nw")]
    NorthWest,
    /// Faces North
    #[serde(rename = "n")]
    North,
    /// Faces NorthEast
    #[serde(rename = "ne")]
    NorthEast,
    /// Faces East
    #[serde(rename = "e")]
    East,
    /// Faces SouthEast
    #[serde(rename = "se")]
    SouthEast,
    /// Faces the sky
    #[serde(rename = "top")]
    Top,
    /// Faces the ground
    #[serde(rename = "bottom")]
    Bottom,
    /// A vertical interior element
    #[serde(rename = "horizontal")]
    Horizontal,
    /// An interior ceiling (i.e., the floor of the room above)
    #[serde(rename = "upward")]
    Upward,
    /// An interior floor (i.e., the ceiling of the room below)
    #[serde(rename = "downward")]
    Downward,
}

impl Direction {
    /// The eight compass points, clockwise from South
    pub const COMPASS: [Direction; 8] = [
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
    ];

    /// The tag used for this direction in the input and
    /// output tables
    pub fn tag(&self) -> &'static str {
        match self {
            Self::South => "s",
            Self::SouthWest => "sw",
            Self::West => "w",
            Self::NorthWest => "nw",
            Self::North => "n",
            Self::NorthEast => "ne",
            Self::East => "e",
            Self::SouthEast => "se",
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Horizontal => "horizontal",
            Self::Upward => "upward",
            Self::Downward => "downward",
        }
    }

    /// Checks whether this is one of the eight compass points
    pub fn is_compass(&self) -> bool {
        Self::COMPASS.contains(self)
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().to_ascii_lowercase();
        [
            Self::South,
            Self::SouthWest,
            Self::West,
            Self::NorthWest,
            Self::North,
            Self::NorthEast,
            Self::East,
            Self::SouthEast,
            Self::Top,
            Self::Bottom,
            Self::Horizontal,
            Self::Upward,
            Self::Downward,
        ]
        .into_iter()
        .find(|d| d.tag() == trimmed)
        .ok_or_else(|| format!("Unknown direction '{}'", s))
    }
}

/***********/
/* TESTING */
/***********/

#[cfg(test)]
mod testing {
    use super::*;

    #[test]
    fn test_from_str() -> Result<(), String> {
        assert_eq!(Direction::from_str("s")?, Direction::South);
        assert_eq!(Direction::from_str(" NE ")?, Direction::NorthEast);
        assert_eq!(Direction::from_str("upward")?, Direction::Upward);
        assert!(Direction::from_str("south-ish").is_err());
        assert!(Direction::from_str("").is_err());
        Ok(())
    }

    #[test]
    fn test_tags_round_trip() -> Result<(), String> {
        for d in Direction::COMPASS {
            assert!(d.is_compass());
            assert_eq!(Direction::from_str(d.tag())?, d);
        }
        assert!(!Direction::Top.is_compass());
        Ok(())
    }

    #[test]
    fn serde() -> Result<(), String> {
        let found: Vec<Direction> =
            json5::from_str("['s', 'nw', 'top', 'horizontal']").map_err(|e| e.to_string())?;
        assert_eq!(
            found,
            vec![
                Direction::South,
                Direction::NorthWest,
                Direction::Top,
                Direction::Horizontal
            ]
        );
        let s = serde_json::to_string(&Direction::SouthEast).map_err(|e| e.to_string())?;
        assert_eq!(s, "\"se\"");
        Ok(())
    }
}
