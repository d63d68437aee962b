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

use crate::film::{self, FaceAttributes};
use crate::layer_solver::{solve_insulation, SurfaceResistances};
use crate::materials::{air_gap, Material};
use crate::Float;
use model::{
    Direction, ExternalGeneralPart, ExternalOpaquePart, ExternalTransparentPart, Ground, Layer,
    SolarShadingPart, WindowDetails,
};

/// The long-wave emissivity of every exterior face
pub const OUTSIDE_EMISSIVITY: Float = 0.9;

/// The solar absorptance of every opaque exterior face
pub const OUTSIDE_SOLAR_ABSORPTION: Float = 0.8;

/// The inside surface heat transfer resistance of
/// windows, doors and roofs, in `m2.K/W`
pub const FENESTRATION_INSIDE_RESISTANCE: Float = 0.11;

const WALL_FILMS: SurfaceResistances = SurfaceResistances {
    inside: 0.11,
    outside: 0.04,
};

const CEILING_FILMS: SurfaceResistances = SurfaceResistances {
    inside: 0.09,
    outside: 0.09,
};

const FLOOR_FILMS: SurfaceResistances = SurfaceResistances {
    inside: 0.15,
    outside: 0.15,
};

/// The kinds of construction in the envelope
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Archetype {
    /// Timber-framed exterior wall
    ExteriorWall,
    /// Ceiling under an attic, or exposed
    Ceiling,
    /// First floor over a crawl space, or exposed
    Floor,
    /// Wall between two rooms
    Partition,
    /// Slab between two storeys
    SecondFloor,
    /// Earthen floor
    GroundSlab,
    /// Window
    Window,
    /// Exterior door
    Door,
    /// Roof described by its U-value
    Roof,
}

/// Where a boundary goes: everything that identifies it
/// within the envelope
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    /// The id of the boundary
    pub id: usize,
    /// The name of the boundary
    pub name: String,
    /// A secondary name
    pub sub_name: String,
    /// The room the boundary belongs to
    pub connected_room_id: usize,
}

impl Placement {
    /// Creates a new [`Placement`]
    pub fn new<S: Into<String>>(id: usize, name: S, sub_name: S, connected_room_id: usize) -> Self {
        Self {
            id,
            name: name.into(),
            sub_name: sub_name.into(),
            connected_room_id,
        }
    }
}

/// A construction made of layers. It knows nothing about
/// where it will be placed.
#[derive(Debug, Clone, PartialEq)]
pub struct LayeredConstruction {
    /// What kind of construction this is
    pub archetype: Archetype,

    /// The layers, from the front face towards the rear one.
    /// Empty layers are never included.
    pub layers: Vec<Layer>,

    /// The attributes of the front face
    pub front: FaceAttributes,

    /// The attributes of the rear face, for constructions
    /// that separate two rooms
    pub rear: FaceAttributes,
}

impl LayeredConstruction {
    fn new(
        archetype: Archetype,
        layers: Vec<Option<Layer>>,
        front: FaceAttributes,
        rear: FaceAttributes,
    ) -> Self {
        let layers = layers
            .into_iter()
            .flatten()
            .filter(|l| !l.is_empty())
            .collect();
        Self {
            archetype,
            layers,
            front,
            rear,
        }
    }

    /// The U-value of the construction (surface resistances
    /// included), in `W/m2.K`
    pub fn u_value(&self, films: SurfaceResistances) -> Float {
        let r: Float = self.layers.iter().map(|l| l.thermal_resistance).sum();
        1.0 / (films.inside + films.outside + r)
    }

    /// Places this construction in the envelope as an exterior surface
    pub fn external_general_part(
        &self,
        place: Placement,
        area: Float,
        direction: Direction,
        temp_dif_coef: Float,
    ) -> ExternalGeneralPart {
        let face = self.front;
        ExternalGeneralPart {
            id: place.id,
            name: place.name,
            sub_name: place.sub_name,
            connected_room_id: place.connected_room_id,
            area,
            h_c: face.h_c,
            is_solar_absorbed_inside: face.is_solar_absorbed_inside(),
            is_floor: face.is_floor,
            layers: self.layers.clone(),
            solar_shading_part: SolarShadingPart::none(),
            is_sun_striked_outside: true,
            direction,
            outside_emissivity: OUTSIDE_EMISSIVITY,
            outside_heat_transfer_resistance: face.outside_heat_transfer_resistance,
            outside_solar_absorption: OUTSIDE_SOLAR_ABSORPTION,
            temp_dif_coef,
        }
    }

    /// Places this construction in the envelope, lying on the ground
    pub fn ground(&self, place: Placement, area: Float) -> Ground {
        Ground {
            id: place.id,
            name: place.name,
            sub_name: place.sub_name,
            connected_room_id: place.connected_room_id,
            area,
            is_solar_absorbed_inside: self.front.is_solar_absorbed_inside(),
            is_floor: self.front.is_floor,
            h_c: self.front.h_c,
            layers: self.layers.clone(),
        }
    }
}

/// A timber-framed exterior wall insulated up to `u_value`
pub fn exterior_wall(u_value: Float) -> LayeredConstruction {
    let inside = Material::GypsumBoard.layer(0.01);
    let sheathing = Material::Plywood.layer(0.012);
    let cladding = Material::CementBoard.layer(0.013);
    let gap = air_gap();
    let known = inside.thermal_resistance
        + gap.thermal_resistance
        + sheathing.thermal_resistance
        + cladding.thermal_resistance;
    let insulation = insulate(u_value, known, WALL_FILMS);

    LayeredConstruction::new(
        Archetype::ExteriorWall,
        vec![
            Some(inside),
            Some(gap),
            insulation,
            Some(sheathing),
            Some(cladding),
        ],
        FaceAttributes::SIDE,
        FaceAttributes::SIDE,
    )
}

/// A ceiling insulated up to `u_value`. Its rear face is the
/// floor of the attic, when there is one.
pub fn ceiling(u_value: Float) -> LayeredConstruction {
    let board = Material::GypsumBoard.layer(0.01);
    let insulation = insulate(u_value, board.thermal_resistance, CEILING_FILMS);

    LayeredConstruction::new(
        Archetype::Ceiling,
        vec![Some(board), insulation],
        FaceAttributes::CEILING,
        FaceAttributes::FLOOR,
    )
}

/// A first floor insulated up to `u_value`. Buildings that
/// use their thermal mass get a concrete slab on top.
pub fn floor(u_value: Float, is_storage: bool) -> LayeredConstruction {
    let slab = is_storage.then(|| Material::Concrete.layer(0.09));
    let deck = Material::Plywood.layer(0.012);
    let known = deck.thermal_resistance + slab.as_ref().map_or(0.0, |l| l.thermal_resistance);
    let insulation = insulate(u_value, known, FLOOR_FILMS);

    LayeredConstruction::new(
        Archetype::Floor,
        vec![slab, Some(deck), insulation],
        FaceAttributes::FLOOR,
        FaceAttributes::CEILING,
    )
}

/// A wall between two rooms
pub fn partition() -> LayeredConstruction {
    LayeredConstruction::new(
        Archetype::Partition,
        vec![
            Some(Material::GypsumBoard.layer(0.0125)),
            Some(air_gap()),
            Some(Material::GypsumBoard.layer(0.0125)),
        ],
        FaceAttributes::PARTITION,
        FaceAttributes::PARTITION,
    )
}

/// The slab between two storeys. Both faces keep the
/// attributes of a floor.
pub fn second_floor(is_storage: bool) -> LayeredConstruction {
    LayeredConstruction::new(
        Archetype::SecondFloor,
        vec![
            is_storage.then(|| Material::Concrete.layer(0.09)),
            Some(Material::Plywood.layer(0.024)),
        ],
        FaceAttributes::FLOOR,
        FaceAttributes::FLOOR,
    )
}

/// An earthen floor
pub fn ground_slab() -> LayeredConstruction {
    LayeredConstruction::new(
        Archetype::GroundSlab,
        vec![Some(Material::Concrete.layer(0.12))],
        FaceAttributes::FLOOR,
        FaceAttributes::FLOOR,
    )
}

fn insulate(u_value: Float, known: Float, films: SurfaceResistances) -> Option<Layer> {
    let m = Material::Insulation;
    solve_insulation(
        u_value,
        known,
        films,
        m.conductivity(),
        m.volumetric_heat_capacity(),
    )
    .layer(m.name())
}

/// A construction described directly by its U-value
/// (and, for windows, its solar heat gain coefficient)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FenestrationConstruction {
    /// What kind of construction this is
    pub archetype: Archetype,
    /// The U-value, in `W/m2.K`
    pub u_value: Float,
    /// The solar heat gain coefficient. Zero for opaque elements.
    pub eta_value: Float,
}

/// A window of a certain U-value and solar heat gain coefficient
pub fn window(u_value: Float, eta_value: Float) -> FenestrationConstruction {
    FenestrationConstruction {
        archetype: Archetype::Window,
        u_value,
        eta_value,
    }
}

/// An exterior door
pub fn door(u_value: Float) -> FenestrationConstruction {
    FenestrationConstruction {
        archetype: Archetype::Door,
        u_value,
        eta_value: 0.0,
    }
}

/// A roof
pub fn roof(u_value: Float) -> FenestrationConstruction {
    FenestrationConstruction {
        archetype: Archetype::Roof,
        u_value,
        eta_value: 0.0,
    }
}

impl FenestrationConstruction {
    /// Places this construction in the envelope as an opaque surface
    pub fn external_opaque_part(
        &self,
        place: Placement,
        area: Float,
        direction: Direction,
        temp_dif_coef: Float,
    ) -> ExternalOpaquePart {
        let face = film::exterior(direction);
        ExternalOpaquePart {
            id: place.id,
            name: place.name,
            sub_name: place.sub_name,
            connected_room_id: place.connected_room_id,
            area,
            h_c: face.h_c,
            is_solar_absorbed_inside: face.is_solar_absorbed_inside(),
            is_floor: face.is_floor,
            solar_shading_part: SolarShadingPart::none(),
            is_sun_striked_outside: true,
            direction,
            outside_emissivity: OUTSIDE_EMISSIVITY,
            outside_heat_transfer_resistance: face.outside_heat_transfer_resistance,
            u_value: self.u_value,
            inside_heat_transfer_resistance: FENESTRATION_INSIDE_RESISTANCE,
            outside_solar_absorption: OUTSIDE_SOLAR_ABSORPTION,
            temp_dif_coef,
        }
    }

    /// Places this construction in the envelope as a window
    pub fn external_transparent_part(
        &self,
        place: Placement,
        area: Float,
        direction: Direction,
        temp_dif_coef: Float,
        details: &WindowDetails,
    ) -> ExternalTransparentPart {
        let face = film::exterior(direction);
        ExternalTransparentPart {
            id: place.id,
            name: place.name,
            sub_name: place.sub_name,
            connected_room_id: place.connected_room_id,
            area,
            h_c: face.h_c,
            is_solar_absorbed_inside: face.is_solar_absorbed_inside(),
            is_floor: face.is_floor,
            solar_shading_part: details.solar_shading.clone(),
            is_sun_striked_outside: true,
            direction,
            outside_emissivity: OUTSIDE_EMISSIVITY,
            outside_heat_transfer_resistance: face.outside_heat_transfer_resistance,
            u_value: self.u_value,
            inside_heat_transfer_resistance: FENESTRATION_INSIDE_RESISTANCE,
            eta_value: self.eta_value,
            incident_angle_characteristics: details.incident_angle_characteristics.clone(),
            glass_area_ratio: details.glass_area_ratio,
            temp_dif_coef,
        }
    }
}

/***********/
/* TESTING */
/***********/

#[cfg(test)]
mod testing {
    use super::*;
    use approx::assert_relative_eq;

    fn names(c: &LayeredConstruction) -> Vec<&str> {
        c.layers.iter().map(|l| l.name.as_str()).collect()
    }

    #[test]
    fn test_exterior_wall() {
        let wall = exterior_wall(0.53);
        assert_eq!(wall.archetype, Archetype::ExteriorWall);
        assert_eq!(
            names(&wall),
            vec!["gypsum_board", "air_gap", "insulation", "plywood", "cement_board"]
        );
        assert_relative_eq!(wall.u_value(WALL_FILMS), 0.53, max_relative = 1e-9);
        assert_eq!(wall.front.h_c, 2.5);
        assert!(!wall.front.is_floor);
    }

    #[test]
    fn test_no_insulation() {
        // Known layers already beat this
        let wall = exterior_wall(5.0);
        assert_eq!(
            names(&wall),
            vec!["gypsum_board", "air_gap", "plywood", "cement_board"]
        );
        assert!(wall.u_value(WALL_FILMS) < 5.0);

        let c = ceiling(10.0);
        assert_eq!(names(&c), vec!["gypsum_board"]);
    }

    #[test]
    fn test_ceiling() {
        let c = ceiling(0.24);
        assert_eq!(names(&c), vec!["gypsum_board", "insulation"]);
        assert_relative_eq!(c.u_value(CEILING_FILMS), 0.24, max_relative = 1e-9);
        assert!(!c.front.is_floor);
        assert!(c.rear.is_floor);
        assert_eq!(c.front.h_c, 5.0);
    }

    #[test]
    fn test_floor() {
        let f = floor(0.48, false);
        assert_eq!(names(&f), vec!["plywood", "insulation"]);
        assert_relative_eq!(f.u_value(FLOOR_FILMS), 0.48, max_relative = 1e-9);
        assert!(f.front.is_floor);
        assert!(!f.rear.is_floor);
        assert_eq!(f.front.h_c, 0.7);

        let f = floor(0.48, true);
        assert_eq!(names(&f), vec!["concrete", "plywood", "insulation"]);
        assert_relative_eq!(f.u_value(FLOOR_FILMS), 0.48, max_relative = 1e-9);
    }

    #[test]
    fn test_interior_archetypes() {
        let p = partition();
        assert_eq!(names(&p), vec!["gypsum_board", "air_gap", "gypsum_board"]);
        assert_eq!(p.front, p.rear);
        assert_eq!(p.front.h_c, 5.0);

        let s = second_floor(false);
        assert_eq!(names(&s), vec!["plywood"]);
        let s = second_floor(true);
        assert_eq!(names(&s), vec!["concrete", "plywood"]);
        assert!(s.front.is_floor && s.rear.is_floor);
        assert_eq!(s.front.h_c, 0.7);

        let g = ground_slab();
        assert_eq!(names(&g), vec!["concrete"]);
        assert!(g.front.is_floor);
    }

    #[test]
    fn test_emit_exterior() {
        let place = Placement::new(3, "wall_s", "", 0);
        let w = exterior_wall(0.53).external_general_part(place, 10.0, Direction::South, 1.0);
        assert_eq!(w.id, 3);
        assert_eq!(w.area, 10.0);
        assert_eq!(w.direction, Direction::South);
        assert_eq!(w.outside_heat_transfer_resistance, 0.04);
        assert_eq!(w.outside_emissivity, 0.9);
        assert_eq!(w.outside_solar_absorption, 0.8);
        assert!(w.is_sun_striked_outside);
        assert!(!w.solar_shading_part.existence);

        let place = Placement::new(4, "floor", "", 0);
        let f = floor(0.48, false).external_general_part(place, 20.0, Direction::Bottom, 0.7);
        assert!(f.is_floor);
        assert!(f.is_solar_absorbed_inside);
        // Exposed floors keep the fixed exterior attributes
        assert!(f.is_sun_striked_outside);
        assert_eq!(f.temp_dif_coef, 0.7);

        let place = Placement::new(5, "earthen_floor", "", 1);
        let g = ground_slab().ground(place, 4.5);
        assert_eq!(g.h_c, 0.7);
        assert!(g.is_floor && g.is_solar_absorbed_inside);
        assert_eq!(g.layers.len(), 1);
    }

    #[test]
    fn test_emit_fenestration() {
        let details = WindowDetails {
            incident_angle_characteristics: "multiple".into(),
            glass_area_ratio: 0.8,
            solar_shading: SolarShadingPart::simple(0.6, 1.8, 0.3),
        };
        let place = Placement::new(0, "window_s", "", 0);
        let w = window(4.65, 0.5).external_transparent_part(
            place,
            5.0,
            Direction::South,
            1.0,
            &details,
        );
        assert_eq!(w.u_value, 4.65);
        assert_eq!(w.eta_value, 0.5);
        assert_eq!(w.h_c, 2.5);
        assert_eq!(w.inside_heat_transfer_resistance, 0.11);
        assert_eq!(w.outside_heat_transfer_resistance, 0.04);
        assert!(w.solar_shading_part.existence);

        let place = Placement::new(1, "roof", "", 0);
        let r = roof(0.24).external_opaque_part(place, 30.0, Direction::Top, 1.0);
        assert_eq!(r.h_c, 5.0);
        assert_eq!(r.outside_heat_transfer_resistance, 0.09);
        assert_eq!(r.u_value, 0.24);

        let place = Placement::new(2, "door", "", 0);
        let d = door(4.65).external_opaque_part(place, 1.6, Direction::North, 1.0);
        assert_eq!(d.h_c, 2.5);
        assert_eq!(d.direction, Direction::North);
        assert_eq!(d.inside_heat_transfer_resistance, 0.11);
    }
}
