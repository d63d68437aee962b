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

#![deny(missing_docs)]

//! Functions for creating small conversion inputs

/// The kind of Floating point number used in the
/// library... the `"float"` feature means it becomes `f32`
/// and `f64` is used otherwise.
#[cfg(feature = "float")]
type Float = f32;

#[cfg(not(feature = "float"))]
type Float = f64;

use model::input::{AzimuthalCoefficientEntry, ShadingInput, SolarCorrectionEntry};
use model::{
    BuildingRow, Common, ConversionInput, Direction, EnvelopeTargets, MechanicalVentilation,
    RoomRow, Season, SurfaceRow,
};

/// The region all test models are located in
pub const REGION: u8 = 6;

/// Characteristics of the single-room model: one wall and one
/// window facing the same direction
pub struct SingleRoomOptions {
    /// The target average U-value, in `W/m2.K`
    pub ua_target: Float,

    /// The cooling season solar gain target
    pub eta_ac_target: Float,

    /// The heating season solar gain target
    pub eta_ah_target: Float,

    /// The envelope area declared in the targets, in `m2`. It does
    /// not need to match the area of the wall and the window.
    pub a_env: Float,

    /// Whether the building uses its thermal mass
    pub is_storage: bool,

    /// The area of the wall, in `m2`
    pub wall_area: Float,

    /// The area of the window, in `m2`
    pub window_area: Float,

    /// The direction both surfaces face
    pub direction: Direction,

    /// The azimuthal coefficient of `direction` during the cooling season
    pub cooling_coefficient: Float,

    /// The azimuthal coefficient of `direction` during the heating season
    pub heating_coefficient: Float,

    /// The solar gain correction factor for windows (both seasons)
    pub solar_correction: Float,
}

impl Default for SingleRoomOptions {
    fn default() -> SingleRoomOptions {
        SingleRoomOptions {
            ua_target: 0.2,
            eta_ac_target: 0.03,
            eta_ah_target: 0.045,
            a_env: 307.51,
            is_storage: false,
            wall_area: 10.0,
            window_area: 5.0,
            direction: Direction::South,
            cooling_coefficient: 0.93,
            heating_coefficient: 0.51,
            solar_correction: 1.0,
        }
    }
}

fn room(id: usize, name: &str, floor_area: Float, height: Float) -> RoomRow {
    RoomRow {
        id,
        name: name.to_string(),
        sub_name: String::new(),
        floor_area,
        volume: floor_area * height,
        natural_ventilation: 0.0,
        furniture_heat_capacity: 12_600.0 * floor_area,
        schedule: name.to_string(),
    }
}

fn exterior(category: &str, name: &str, room: usize, area: Float, direction: &str) -> SurfaceRow {
    SurfaceRow {
        category: category.to_string(),
        name: name.to_string(),
        area: Some(area),
        direction: Some(direction.to_string()),
        connected_room_id: Some(room),
        ..SurfaceRow::default()
    }
}

fn interior(category: &str, name: &str, room: usize, rear_room: usize, area: Float) -> SurfaceRow {
    SurfaceRow {
        category: category.to_string(),
        name: name.to_string(),
        area: Some(area),
        connected_room_id: Some(room),
        rear_room_id: Some(rear_room),
        ..SurfaceRow::default()
    }
}

fn coefficients(region: u8, table: &[(Direction, Float, Float)]) -> Vec<AzimuthalCoefficientEntry> {
    let mut ret = Vec::with_capacity(table.len() * 2);
    for (direction, cooling, heating) in table.iter() {
        ret.push(AzimuthalCoefficientEntry {
            season: Season::Cooling,
            direction: *direction,
            region,
            value: *cooling,
        });
        ret.push(AzimuthalCoefficientEntry {
            season: Season::Heating,
            direction: *direction,
            region,
            value: *heating,
        });
    }
    ret
}

fn correction_factors(region: u8, cooling: Float, heating: Float) -> Vec<SolarCorrectionEntry> {
    vec![
        SolarCorrectionEntry {
            region,
            season: Season::Cooling,
            value: cooling,
        },
        SolarCorrectionEntry {
            region,
            season: Season::Heating,
            value: heating,
        },
    ]
}

/// Creates an input with a single room enclosed by a wall and a window
pub fn single_room(options: &SingleRoomOptions) -> ConversionInput {
    let direction = options.direction.tag();
    ConversionInput {
        common: Common::default(),
        building: BuildingRow {
            story: 1,
            c_value: 2.0,
            inside_pressure: Default::default(),
        },
        targets: EnvelopeTargets {
            region: REGION,
            ua_target: options.ua_target,
            eta_ac_target: options.eta_ac_target,
            eta_ah_target: options.eta_ah_target,
            a_env: options.a_env,
            is_storage: options.is_storage,
        },
        rooms: vec![room(0, "main_occupant_room", 20.0, 2.4)],
        surfaces: vec![
            exterior("wall", "wall", 0, options.wall_area, direction),
            exterior("window", "window", 0, options.window_area, direction),
        ],
        azimuthal_coefficients: coefficients(
            REGION,
            &[(
                options.direction,
                options.cooling_coefficient,
                options.heating_coefficient,
            )],
        ),
        solar_correction_factors: correction_factors(
            REGION,
            options.solar_correction,
            options.solar_correction,
        ),
        mechanical_ventilations: vec![],
    }
}

/// The rooms of [`small_house`]
pub mod rooms {
    /// The living room, on the ground floor
    pub const MAIN: usize = 0;
    /// A bedroom, upstairs
    pub const OTHER: usize = 1;
    /// The hall and stairs
    pub const NON_OCCUPANT: usize = 2;
    /// The attic above the living room
    pub const ATTIC: usize = 3;
    /// The crawl space under the living room
    pub const UNDERFLOOR: usize = 4;
}

/// Creates an input for a small house: three rooms plus an attic
/// and a crawl space. It has every kind of surface, including a
/// window with zero area.
pub fn small_house(is_storage: bool) -> ConversionInput {
    use crate::rooms::*;

    let mut window_s = exterior("window", "window_s", MAIN, 8.0, "s");
    window_s.incident_angle_characteristics = Some("single".to_string());
    window_s.solar_shading = Some(ShadingInput {
        depth: 0.6,
        d_h: 1.8,
        d_e: 0.3,
    });

    let mut floor_other = exterior("floor", "floor_over_garage", OTHER, 12.0, "bottom");
    floor_other.temp_diff_coef = 0.7;

    let mut attic_ceiling = interior("ceiling", "ceiling", MAIN, ATTIC, 30.0);
    attic_ceiling.rear_name = Some("attic_floor".to_string());

    let mut underfloor = interior("floor", "floor", MAIN, UNDERFLOOR, 30.0);
    underfloor.rear_name = Some("underfloor_ceiling".to_string());
    underfloor.temp_diff_coef = 0.7;

    let mut partition = interior("partition", "partition", MAIN, NON_OCCUPANT, 12.0);
    partition.sub_name = "living".to_string();
    partition.rear_sub_name = Some("hall".to_string());

    let surfaces = vec![
        exterior("wall", "wall_s", MAIN, 20.0, "s"),
        exterior("wall", "wall_w", MAIN, 10.0, "w"),
        exterior("wall", "wall_n", OTHER, 15.0, "n"),
        exterior("wall", "wall_e", OTHER, 8.0, "e"),
        exterior("wall", "wall_n", NON_OCCUPANT, 6.0, "n"),
        attic_ceiling,
        exterior("ceiling", "ceiling", OTHER, 20.0, "top"),
        underfloor,
        floor_other,
        exterior("roof", "roof", NON_OCCUPANT, 10.0, "top"),
        exterior("door", "entrance", NON_OCCUPANT, 1.6, "n"),
        window_s,
        exterior("window", "window_w", MAIN, 2.0, "w"),
        exterior("window", "window_n", OTHER, 3.0, "n"),
        exterior("window", "window_e", OTHER, 0.0, "e"),
        partition,
        interior("partition", "partition", OTHER, NON_OCCUPANT, 9.0),
        interior("second_floor", "second_floor", OTHER, MAIN, 14.0),
        SurfaceRow {
            category: "ground".to_string(),
            name: "earthen_floor".to_string(),
            area: Some(4.0),
            connected_room_id: Some(NON_OCCUPANT),
            ..SurfaceRow::default()
        },
    ];

    ConversionInput {
        common: Common::default(),
        building: BuildingRow {
            story: 2,
            c_value: 2.0,
            inside_pressure: Default::default(),
        },
        targets: EnvelopeTargets {
            region: REGION,
            ua_target: 0.87,
            eta_ac_target: 0.028,
            eta_ah_target: 0.045,
            a_env: 175.6,
            is_storage,
        },
        rooms: vec![
            room(MAIN, "main_occupant_room", 30.0, 2.4),
            room(OTHER, "other_occupant_room", 20.0, 2.4),
            room(NON_OCCUPANT, "non_occupant_room", 10.0, 2.4),
            room(ATTIC, "attic", 30.0, 1.2),
            room(UNDERFLOOR, "underfloor", 30.0, 0.45),
        ],
        surfaces,
        azimuthal_coefficients: coefficients(
            REGION,
            &[
                (Direction::South, 0.434, 0.936),
                (Direction::SouthWest, 0.502, 0.579),
                (Direction::West, 0.512, 0.253),
                (Direction::NorthWest, 0.396, 0.103),
                (Direction::North, 0.341, 0.261),
                (Direction::NorthEast, 0.389, 0.098),
                (Direction::East, 0.497, 0.247),
                (Direction::SouthEast, 0.491, 0.568),
                (Direction::Top, 1.0, 1.0),
            ],
        ),
        solar_correction_factors: correction_factors(REGION, 0.93, 0.51),
        mechanical_ventilations: vec![MechanicalVentilation {
            id: 0,
            root_type: "type3".to_string(),
            volume: 60.0,
            root: vec![MAIN, NON_OCCUPANT],
        }],
    }
}

#[cfg(test)]
mod testing {
    use super::*;

    #[test]
    fn test_single_room() -> Result<(), String> {
        let input = single_room(&SingleRoomOptions::default());
        let surfaces = input.parse_surfaces().map_err(|e| e.to_string())?;
        assert_eq!(surfaces.len(), 2);
        assert_eq!(surfaces[0].temp_diff_coef, 1.0);
        assert_eq!(input.azimuthal_coefficients.len(), 2);
        Ok(())
    }

    #[test]
    fn test_small_house() -> Result<(), String> {
        let input = small_house(false);
        let surfaces = input.parse_surfaces().map_err(|e| e.to_string())?;
        assert_eq!(surfaces.len(), input.surfaces.len());
        assert_eq!(surfaces.iter().filter(|s| s.is_interior()).count(), 5);
        assert_eq!(surfaces.iter().filter(|s| !s.is_emitted()).count(), 1);
        Ok(())
    }
}
