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

use heat::construction::{
    ceiling, door, exterior_wall, floor, ground_slab, partition, roof, second_floor, window,
};
use heat::{make_pair, LayeredConstruction, Placement};
use model::{
    Boundary, Building, ConversionError, ConversionInput, EnvelopeAssembly, Equipments, Room,
    Surface, SurfaceCategory,
};
use regulation::RepresentativeValues;
use std::collections::HashSet;

/// Checks that room ids are unique and that every room referenced
/// by the surfaces and the ventilation routes is declared
pub fn validate_rooms(input: &ConversionInput, surfaces: &[Surface]) -> Result<(), ConversionError> {
    let mut rooms: HashSet<usize> = HashSet::with_capacity(input.rooms.len());
    for r in &input.rooms {
        if !rooms.insert(r.id) {
            return Err(ConversionError::DuplicateRoomId(r.id));
        }
    }

    for s in surfaces {
        let referenced = std::iter::once(s.connected_room_id).chain(s.rear.as_ref().map(|r| r.room_id));
        for room in referenced {
            if !rooms.contains(&room) {
                return Err(ConversionError::UnknownRoom {
                    context: format!("surface row {}", s.row),
                    room,
                });
            }
        }
    }

    for v in &input.mechanical_ventilations {
        if let Some(room) = v.root.iter().find(|r| !rooms.contains(r)) {
            return Err(ConversionError::UnknownRoom {
                context: format!("mechanical ventilation {}", v.id),
                room: *room,
            });
        }
    }
    Ok(())
}

/// The constructions shared by every surface of a category
struct Constructions {
    wall: LayeredConstruction,
    ceiling: LayeredConstruction,
    floor: LayeredConstruction,
    partition: LayeredConstruction,
    second_floor: LayeredConstruction,
    ground: LayeredConstruction,
}

impl Constructions {
    fn new(values: &RepresentativeValues, is_storage: bool) -> Self {
        let u = &values.u_values;
        Self {
            wall: exterior_wall(u.wall),
            ceiling: ceiling(u.ceiling),
            floor: floor(u.floor, is_storage),
            partition: partition(),
            second_floor: second_floor(is_storage),
            ground: ground_slab(),
        }
    }

    /// The construction of a layered surface
    fn layered(&self, category: SurfaceCategory) -> Option<&LayeredConstruction> {
        match category {
            SurfaceCategory::Wall => Some(&self.wall),
            SurfaceCategory::Ceiling => Some(&self.ceiling),
            SurfaceCategory::Floor => Some(&self.floor),
            SurfaceCategory::Partition => Some(&self.partition),
            SurfaceCategory::SecondFloor => Some(&self.second_floor),
            SurfaceCategory::Ground => Some(&self.ground),
            SurfaceCategory::Roof | SurfaceCategory::Door | SurfaceCategory::Window => None,
        }
    }
}

/// Collects boundaries, giving them consecutive ids
#[derive(Default)]
struct BoundaryList {
    boundaries: Vec<Boundary>,
}

impl BoundaryList {
    fn next_place(&self, surface: &Surface) -> Placement {
        Placement::new(
            self.boundaries.len(),
            surface.name.clone(),
            surface.sub_name.clone(),
            surface.connected_room_id,
        )
    }

    fn push(&mut self, b: Boundary) {
        self.boundaries.push(b)
    }
}

/// Exterior layered surfaces, in the order they are written
const EXTERIOR_ORDER: [SurfaceCategory; 3] = [
    SurfaceCategory::Wall,
    SurfaceCategory::Ceiling,
    SurfaceCategory::Floor,
];

/// Interior elements, in the order they are written
const INTERIOR_ORDER: [SurfaceCategory; 4] = [
    SurfaceCategory::Ceiling,
    SurfaceCategory::Floor,
    SurfaceCategory::Partition,
    SurfaceCategory::SecondFloor,
];

/// The surfaces of a category that face the outdoors
fn exterior<'a>(
    surfaces: &'a [&'a Surface],
    category: SurfaceCategory,
) -> impl Iterator<Item = &'a Surface> + 'a {
    surfaces
        .iter()
        .copied()
        .filter(move |s| s.category == category && !s.is_interior())
}

/// Puts the whole envelope together.
///
/// Boundaries are written in a fixed order: exterior layered
/// surfaces (walls, ceilings and floors), exterior opaque surfaces
/// (doors and roofs), windows, interior pairs (ceilings, floors,
/// partitions and slabs between storeys) and, finally, surfaces on
/// the ground. Within each group, the order of the surfaces table
/// is kept. Ids are given in that same order, starting from zero,
/// and the two faces of an interior element get consecutive ids.
///
/// Surfaces with no area are skipped.
pub fn assemble(
    input: &ConversionInput,
    surfaces: &[Surface],
    values: &RepresentativeValues,
) -> Result<EnvelopeAssembly, ConversionError> {
    validate_rooms(input, surfaces)?;

    let is_storage = input.targets.is_storage;
    let constructions = Constructions::new(values, is_storage);
    let u = &values.u_values;
    let the_door = door(u.door);
    let the_roof = roof(u.ceiling);
    let the_window = window(u.window, values.eta_window());

    let emitted: Vec<&Surface> = surfaces.iter().filter(|s| s.is_emitted()).collect();
    let mut list = BoundaryList::default();

    // Exterior
    for category in EXTERIOR_ORDER {
        let template = match constructions.layered(category) {
            Some(c) => c,
            None => continue,
        };
        for s in exterior(&emitted, category) {
            let place = list.next_place(s);
            list.push(Boundary::ExternalGeneralPart(template.external_general_part(
                place,
                s.area,
                s.direction,
                s.temp_diff_coef,
            )));
        }
    }
    for s in exterior(&emitted, SurfaceCategory::Door) {
        let place = list.next_place(s);
        list.push(Boundary::ExternalOpaquePart(the_door.external_opaque_part(
            place,
            s.area,
            s.direction,
            s.temp_diff_coef,
        )));
    }
    for s in exterior(&emitted, SurfaceCategory::Roof) {
        let place = list.next_place(s);
        list.push(Boundary::ExternalOpaquePart(the_roof.external_opaque_part(
            place,
            s.area,
            s.direction,
            s.temp_diff_coef,
        )));
    }
    for s in exterior(&emitted, SurfaceCategory::Window) {
        let place = list.next_place(s);
        let details = s.window.clone().unwrap_or_default();
        list.push(Boundary::ExternalTransparentPart(
            the_window.external_transparent_part(
                place,
                s.area * values.window_area_factor,
                s.direction,
                s.temp_diff_coef,
                &details,
            ),
        ));
    }

    // Interior
    for category in INTERIOR_ORDER {
        let template = match constructions.layered(category) {
            Some(c) => c,
            None => continue,
        };
        for s in emitted.iter().filter(|s| s.category == category) {
            let rear = match &s.rear {
                Some(r) => r,
                None => continue,
            };
            let front_place = list.next_place(s);
            let rear_place = Placement::new(
                front_place.id + 1,
                rear.name.clone(),
                rear.sub_name.clone(),
                rear.room_id,
            );
            let (front, rear) = make_pair(template, s.area, front_place, rear_place)?;
            list.push(Boundary::Internal(front));
            list.push(Boundary::Internal(rear));
        }
    }

    // Ground
    for s in emitted
        .iter()
        .filter(|s| s.category == SurfaceCategory::Ground)
    {
        let place = list.next_place(s);
        list.push(Boundary::Ground(constructions.ground.ground(place, s.area)));
    }

    let assembly = EnvelopeAssembly {
        common: input.common.clone(),
        building: Building::from(&input.building),
        rooms: input.rooms.iter().map(Room::from).collect(),
        boundaries: list.boundaries,
        mechanical_ventilations: input.mechanical_ventilations.clone(),
        equipments: Equipments::default(),
    };
    assembly.validate()?;
    Ok(assembly)
}

/***********/
/* TESTING */
/***********/

#[cfg(test)]
mod testing {
    use super::*;
    use regulation::{AzimuthalCoefficients, SolarCorrectionFactors};
    use test_models::{rooms, single_room, small_house, SingleRoomOptions};

    fn assemble_input(input: &ConversionInput) -> Result<EnvelopeAssembly, String> {
        let surfaces = input.parse_surfaces().map_err(|e| e.to_string())?;
        let values = regulation::solve(
            &input.targets,
            &surfaces,
            &AzimuthalCoefficients::new(&input.azimuthal_coefficients),
            &SolarCorrectionFactors::new(&input.solar_correction_factors),
        )
        .map_err(|e| e.to_string())?;
        assemble(input, &surfaces, &values).map_err(|e| e.to_string())
    }

    #[test]
    fn test_order_and_ids() -> Result<(), String> {
        let a = assemble_input(&small_house(false))?;
        let types: Vec<&str> = a.boundaries.iter().map(|b| b.boundary_type()).collect();

        let mut expected = vec!["external_general_part"; 5 + 1 + 1];
        expected.extend(vec!["external_opaque_part"; 2]);
        expected.extend(vec!["external_transparent_part"; 3]);
        expected.extend(vec!["internal"; 2 * 5]);
        expected.push("ground");
        assert_eq!(types, expected);

        for (i, b) in a.boundaries.iter().enumerate() {
            assert_eq!(b.id(), i);
        }

        // Doors before roofs
        assert_eq!(a.boundaries[7].name(), "entrance");
        assert_eq!(a.boundaries[8].name(), "roof");

        // Interior ceilings first, then interior floors
        assert_eq!(a.boundaries[12].name(), "ceiling");
        assert_eq!(a.boundaries[13].name(), "attic_floor");
        assert_eq!(a.boundaries[13].connected_room_id(), rooms::ATTIC);
        assert_eq!(a.boundaries[15].name(), "underfloor_ceiling");
        Ok(())
    }

    #[test]
    fn test_zero_area_rows_are_skipped() -> Result<(), String> {
        let a = assemble_input(&small_house(false))?;
        assert!(a.boundaries.iter().all(|b| b.area() > 0.0));
        assert!(a.boundaries.iter().all(|b| b.name() != "window_e"));
        Ok(())
    }

    #[test]
    fn test_window_areas_are_corrected() -> Result<(), String> {
        let input = single_room(&SingleRoomOptions::default());
        let a = assemble_input(&input)?;
        let w = match &a.boundaries[1] {
            Boundary::ExternalTransparentPart(w) => w,
            _ => return Err("expecting a window".to_string()),
        };
        // The window correction is applied for this model
        assert!(w.area > 5.0);
        assert!(w.eta_value < 0.88);
        assert!(w.u_value < 6.51);
        // Walls are never scaled
        assert_eq!(a.boundaries[0].area(), 10.0);
        Ok(())
    }

    #[test]
    fn test_unknown_rooms() -> Result<(), String> {
        let mut input = small_house(false);
        input.surfaces[3].connected_room_id = Some(42);
        let surfaces = input.parse_surfaces().map_err(|e| e.to_string())?;
        assert_eq!(
            validate_rooms(&input, &surfaces),
            Err(ConversionError::UnknownRoom {
                context: "surface row 3".to_string(),
                room: 42
            })
        );

        let mut input = small_house(false);
        input.mechanical_ventilations[0].root.push(9);
        let surfaces = input.parse_surfaces().map_err(|e| e.to_string())?;
        assert_eq!(
            validate_rooms(&input, &surfaces),
            Err(ConversionError::UnknownRoom {
                context: "mechanical ventilation 0".to_string(),
                room: 9
            })
        );

        let mut input = small_house(false);
        input.rooms[rooms::ATTIC].id = rooms::MAIN;
        let surfaces = input.parse_surfaces().map_err(|e| e.to_string())?;
        assert_eq!(
            validate_rooms(&input, &surfaces),
            Err(ConversionError::DuplicateRoomId(rooms::MAIN))
        );
        Ok(())
    }

    #[test]
    fn test_rooms_and_blocks() -> Result<(), String> {
        let input = small_house(true);
        let a = assemble_input(&input)?;
        assert_eq!(a.rooms.len(), 5);
        assert_eq!(a.building.infiltration.story, 2);
        assert_eq!(a.mechanical_ventilations.len(), 1);
        assert!(a.equipments.heating_equipments.is_empty());
        assert_eq!(a.common.ac_method, "simple");
        Ok(())
    }
}
