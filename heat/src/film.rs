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

use crate::Float;
use model::Direction;

/// The heat transfer properties of one face of a construction.
///
/// The values depend on what the face is to its room: a
/// vertical side, a ceiling (heat flowing upwards) or a floor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceAttributes {
    /// Convective heat transfer coefficient, in `W/m2.K`
    pub h_c: Float,

    /// Whether the face is the floor of its room
    pub is_floor: bool,

    /// The surface heat transfer resistance at the other side of
    /// the construction, in `m2.K/W`
    pub outside_heat_transfer_resistance: Float,
}

impl FaceAttributes {
    /// A vertical face exposed to the outdoors
    pub const SIDE: Self = Self {
        h_c: 2.5,
        is_floor: false,
        outside_heat_transfer_resistance: 0.04,
    };

    /// A face that is the ceiling of its room
    pub const CEILING: Self = Self {
        h_c: 5.0,
        is_floor: false,
        outside_heat_transfer_resistance: 0.09,
    };

    /// A face that is the floor of its room
    pub const FLOOR: Self = Self {
        h_c: 0.7,
        is_floor: true,
        outside_heat_transfer_resistance: 0.15,
    };

    /// A face of a wall between two rooms
    pub const PARTITION: Self = Self {
        h_c: 5.0,
        is_floor: false,
        outside_heat_transfer_resistance: 0.11,
    };

    /// Floors absorb the solar radiation that enters the room
    pub fn is_solar_absorbed_inside(&self) -> bool {
        self.is_floor
    }
}

/// The face of an exterior surface facing `direction`
pub fn exterior(direction: Direction) -> FaceAttributes {
    match direction {
        Direction::Top | Direction::Upward => FaceAttributes::CEILING,
        Direction::Bottom | Direction::Downward => FaceAttributes::FLOOR,
        Direction::Horizontal => FaceAttributes::PARTITION,
        _ => FaceAttributes::SIDE,
    }
}

/***********/
/* TESTING */
/***********/

#[cfg(test)]
mod testing {
    use super::*;

    #[test]
    fn test_exterior() {
        for d in Direction::COMPASS {
            assert_eq!(exterior(d), FaceAttributes::SIDE);
        }
        assert_eq!(exterior(Direction::Top).h_c, 5.0);
        assert_eq!(exterior(Direction::Top).outside_heat_transfer_resistance, 0.09);

        let bottom = exterior(Direction::Bottom);
        assert_eq!(bottom.h_c, 0.7);
        assert!(bottom.is_floor);
        assert!(bottom.is_solar_absorbed_inside());
        assert_eq!(bottom.outside_heat_transfer_resistance, 0.15);
    }
}
