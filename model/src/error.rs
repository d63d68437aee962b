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

use thiserror::Error;

use crate::{Direction, Float, Season, SurfaceCategory};

/// Everything that can go wrong during a conversion.
///
/// All of these are fatal: a conversion either produces a
/// complete [`crate::EnvelopeAssembly`] or nothing at all.
/// Row numbers refer to the position of the row within the
/// `surfaces` table, starting from 0.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConversionError {
    /// A row of the surface table lacks a field it needs
    #[error("surface row {row} is missing the required field '{field}'")]
    MissingField {
        /// The offending row
        row: usize,
        /// The missing field
        field: &'static str,
    },

    /// A direction tag is not known
    #[error("surface row {row} has an unknown direction '{tag}'")]
    UnknownDirection {
        /// The offending row
        row: usize,
        /// The tag as written in the input
        tag: String,
    },

    /// A direction is known, but it does not make sense for the
    /// category of the row (e.g., an exterior wall facing `upward`)
    #[error("surface row {row} ({category}) cannot face '{direction}'")]
    MisplacedDirection {
        /// The offending row
        row: usize,
        /// The category of the row
        category: SurfaceCategory,
        /// The direction found
        direction: Direction,
    },

    /// A construction category tag is not known
    #[error("surface row {row} has an unrecognized construction category '{tag}'")]
    UnknownCategory {
        /// The offending row
        row: usize,
        /// The tag as written in the input
        tag: String,
    },

    /// The azimuthal coefficient table lacks an entry
    #[error("no azimuthal coefficient for season '{season}', direction '{direction}' and region {region}")]
    MissingAzimuthalCoefficient {
        /// The season requested
        season: Season,
        /// The direction requested
        direction: Direction,
        /// The region requested
        region: u8,
    },

    /// The solar correction factor table lacks an entry
    #[error("no solar correction factor for region {region} and season '{season}'")]
    MissingSolarCorrectionFactor {
        /// The region requested
        region: u8,
        /// The season requested
        season: Season,
    },

    /// Regions go from 1 to 8
    #[error("region {0} is not valid (expecting a number between 1 and 8)")]
    InvalidRegion(u8),

    /// A row (or ventilation route) points to a room that was not declared
    #[error("{context} refers to room {room}, which does not exist")]
    UnknownRoom {
        /// Where the reference was found
        context: String,
        /// The missing room id
        room: usize,
    },

    /// An interior element needs a room on each side
    #[error("surface row {row} ({category}) needs a 'rear_room_id'")]
    MissingRearRoom {
        /// The offending row
        row: usize,
        /// The category of the row
        category: SurfaceCategory,
    },

    /// Only interior elements can have a room on their rear side
    #[error("surface row {row} ({category}) cannot have a 'rear_room_id'")]
    UnexpectedRearRoom {
        /// The offending row
        row: usize,
        /// The category of the row
        category: SurfaceCategory,
    },

    /// An interior element cannot separate a room from itself
    #[error("surface row {row} connects room {room} with itself")]
    SameRoomPair {
        /// The offending row
        row: usize,
        /// The room on both sides
        room: usize,
    },

    /// A whole-building target that must be positive is not
    #[error("'{name}' must be larger than zero (found {value})")]
    NonPositiveTarget {
        /// The name of the target
        name: &'static str,
        /// Its value
        value: Float,
    },

    /// The reference heat loss of the building is zero, so
    /// the U-values cannot be scaled
    #[error("the baseline heat loss of the envelope is zero (are there any exterior surfaces?)")]
    ZeroBaselineHeatLoss,

    /// The windows cannot contribute the solar gains still required
    /// because there are no windows receiving sun
    #[error("{required} of solar gain still required during the {season} season, but there are no sunlit windows")]
    NoWindowsForSolarTarget {
        /// The season
        season: Season,
        /// The missing solar-gain magnitude
        required: Float,
    },

    /// An interior pair is not cross-linked
    #[error("boundaries {front} and {rear} do not form a consistent front/rear pair")]
    BrokenMirrorPair {
        /// The front boundary id
        front: usize,
        /// The rear boundary id
        rear: usize,
    },

    /// Room identifiers must be unique
    #[error("room id {0} is declared more than once")]
    DuplicateRoomId(usize),

    /// Boundary identifiers must be unique in the whole envelope
    #[error("boundary id {0} is used more than once")]
    DuplicateBoundaryId(usize),

    /// The input could not be parsed
    #[error("could not parse input: {0}")]
    Parse(String),

    /// A file could not be read or written
    #[error("{0}")]
    Io(String),
}

impl From<serde_json::Error> for ConversionError {
    fn from(e: serde_json::Error) -> Self {
        ConversionError::Parse(e.to_string())
    }
}

#[cfg(test)]
mod testing {
    use super::*;

    #[test]
    fn test_messages_identify_the_row() {
        let e = ConversionError::MissingField {
            row: 3,
            field: "area",
        };
        assert_eq!(
            e.to_string(),
            "surface row 3 is missing the required field 'area'"
        );

        let e = ConversionError::MissingAzimuthalCoefficient {
            season: Season::Cooling,
            direction: Direction::South,
            region: 6,
        };
        assert_eq!(
            e.to_string(),
            "no azimuthal coefficient for season 'cooling', direction 's' and region 6"
        );
    }
}
