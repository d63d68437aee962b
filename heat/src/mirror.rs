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

use crate::construction::{LayeredConstruction, Placement};
use crate::film::FaceAttributes;
use crate::Float;
use model::{reversed_layers, ConversionError, Internal, SolarShadingPart};

/// Builds the rear face of an interior element, as seen from the
/// room in `rear`.
///
/// The layers are reversed, and the ids are cross-linked so that
/// the rear face points back at `front`.
pub fn mirror(front: &Internal, rear: Placement, face: FaceAttributes) -> Internal {
    Internal {
        id: rear.id,
        name: rear.name,
        sub_name: rear.sub_name,
        connected_room_id: rear.connected_room_id,
        area: front.area,
        h_c: face.h_c,
        is_solar_absorbed_inside: face.is_solar_absorbed_inside(),
        is_floor: face.is_floor,
        layers: reversed_layers(&front.layers),
        solar_shading_part: SolarShadingPart::none(),
        outside_heat_transfer_resistance: face.outside_heat_transfer_resistance,
        rear_surface_boundary_id: front.id,
    }
}

/// Places an interior construction between two rooms, returning
/// its front and rear faces.
///
/// Fails if both faces end up in the same room or with the same id.
///
/// ```
/// use heat::{construction::ceiling, make_pair, Placement};
///
/// let (front, rear) = make_pair(
///     &ceiling(0.24),
///     20.0,
///     Placement::new(7, "ceiling", "", 0),
///     Placement::new(8, "attic_floor", "", 3),
/// ).unwrap();
///
/// assert_eq!(front.rear_surface_boundary_id, 8);
/// assert_eq!(rear.rear_surface_boundary_id, 7);
/// assert!(rear.is_floor);
/// ```
pub fn make_pair(
    template: &LayeredConstruction,
    area: Float,
    front: Placement,
    rear: Placement,
) -> Result<(Internal, Internal), ConversionError> {
    let face = template.front;
    let rear_id = rear.id;
    let front = Internal {
        id: front.id,
        name: front.name,
        sub_name: front.sub_name,
        connected_room_id: front.connected_room_id,
        area,
        h_c: face.h_c,
        is_solar_absorbed_inside: face.is_solar_absorbed_inside(),
        is_floor: face.is_floor,
        layers: template.layers.clone(),
        solar_shading_part: SolarShadingPart::none(),
        outside_heat_transfer_resistance: face.outside_heat_transfer_resistance,
        rear_surface_boundary_id: rear_id,
    };
    let rear = mirror(&front, rear, template.rear);

    let linked = front.rear_surface_boundary_id == rear.id
        && rear.rear_surface_boundary_id == front.id
        && front.id != rear.id;
    if !linked || front.connected_room_id == rear.connected_room_id {
        return Err(ConversionError::BrokenMirrorPair {
            front: front.id,
            rear: rear.id,
        });
    }
    Ok((front, rear))
}

/***********/
/* TESTING */
/***********/

#[cfg(test)]
mod testing {
    use super::*;
    use crate::construction::{ceiling, floor, partition, second_floor};

    #[test]
    fn test_partition_pair() -> Result<(), String> {
        let (front, rear) = make_pair(
            &partition(),
            8.0,
            Placement::new(10, "partition", "kitchen", 0),
            Placement::new(11, "partition", "bedroom", 1),
        )
        .map_err(|e| e.to_string())?;

        assert_eq!(front.rear_surface_boundary_id, 11);
        assert_eq!(rear.rear_surface_boundary_id, 10);
        assert_eq!(front.connected_room_id, 0);
        assert_eq!(rear.connected_room_id, 1);
        assert_eq!(rear.sub_name, "bedroom");
        assert_eq!(rear.area, 8.0);
        assert_eq!(rear.layers, reversed_layers(&front.layers));
        assert_eq!(front.h_c, rear.h_c);
        assert_eq!(front.is_floor, rear.is_floor);
        Ok(())
    }

    #[test]
    fn test_flags_are_complemented() -> Result<(), String> {
        let (front, rear) = make_pair(
            &ceiling(0.24),
            20.0,
            Placement::new(0, "ceiling", "", 0),
            Placement::new(1, "attic_floor", "", 2),
        )
        .map_err(|e| e.to_string())?;
        assert!(!front.is_floor);
        assert!(rear.is_floor);
        assert!(rear.is_solar_absorbed_inside);
        assert_eq!(front.h_c, 5.0);
        assert_eq!(rear.h_c, 0.7);

        let (front, rear) = make_pair(
            &floor(0.48, true),
            20.0,
            Placement::new(0, "floor", "", 0),
            Placement::new(1, "underfloor_ceiling", "", 2),
        )
        .map_err(|e| e.to_string())?;
        assert!(front.is_floor);
        assert!(!rear.is_floor);
        assert_eq!(rear.layers.last().map(|l| l.name.as_str()), Some("concrete"));

        // Unchanged for slabs between storeys
        let (front, rear) = make_pair(
            &second_floor(false),
            20.0,
            Placement::new(0, "second_floor", "", 0),
            Placement::new(1, "second_floor", "", 2),
        )
        .map_err(|e| e.to_string())?;
        assert!(front.is_floor && rear.is_floor);
        assert_eq!(front.h_c, 0.7);
        assert_eq!(rear.h_c, 0.7);
        Ok(())
    }

    #[test]
    fn test_mirror_twice() -> Result<(), String> {
        let template = ceiling(0.24);
        let (front, rear) = make_pair(
            &template,
            20.0,
            Placement::new(0, "ceiling", "", 0),
            Placement::new(1, "attic_floor", "", 2),
        )
        .map_err(|e| e.to_string())?;
        let back = mirror(
            &rear,
            Placement::new(0, "ceiling", "", 0),
            template.front,
        );
        assert_eq!(back, front);
        Ok(())
    }

    #[test]
    fn test_broken_pairs() {
        let e = make_pair(
            &partition(),
            8.0,
            Placement::new(0, "partition", "", 1),
            Placement::new(1, "partition", "", 1),
        );
        assert_eq!(e, Err(ConversionError::BrokenMirrorPair { front: 0, rear: 1 }));

        let e = make_pair(
            &partition(),
            8.0,
            Placement::new(4, "partition", "", 0),
            Placement::new(4, "partition", "", 1),
        );
        assert!(e.is_err());
    }
}
