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

use crate::{Direction, Float, Layer};
use serde::{Deserialize, Serialize};

/// Describes the solar shading (e.g., eaves) above a surface.
///
/// When `existence` is `false`, no other field is written.
///
/// ## Examples
///
/// #### `.json`
/// ```json
/// { "existence": false }
/// ```
///
/// ```json
/// {
///     "existence": true,
///     "input_method": "simple",
///     "depth": 0.6,
///     "d_h": 1.8,
///     "d_e": 0.3
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolarShadingPart {
    /// Whether there is a shading element or not
    pub existence: bool,

    /// How the shading is described. Only `"simple"` is produced.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub input_method: Option<String>,

    /// The projection depth of the shading element, in `m`
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub depth: Option<Float>,

    /// The height of the glazing under the shading, in `m`
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub d_h: Option<Float>,

    /// The distance between the top of the glazing and the
    /// shading edge, in `m`
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub d_e: Option<Float>,
}

impl Default for SolarShadingPart {
    fn default() -> Self {
        Self::none()
    }
}

impl SolarShadingPart {
    /// No shading at all
    pub fn none() -> Self {
        Self {
            existence: false,
            input_method: None,
            depth: None,
            d_h: None,
            d_e: None,
        }
    }

    /// A simple overhang
    pub fn simple(depth: Float, d_h: Float, d_e: Float) -> Self {
        Self {
            existence: true,
            input_method: Some("simple".to_string()),
            depth: Some(depth),
            d_h: Some(d_h),
            d_e: Some(d_e),
        }
    }
}

/// An exterior surface made of layers (e.g., an exterior wall,
/// or a ceiling under a ventilated attic)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExternalGeneralPart {
    /// The id of the boundary, unique within the envelope
    pub id: usize,
    /// The name of the boundary
    pub name: String,
    /// A secondary name
    pub sub_name: String,
    /// The room this boundary belongs to
    pub connected_room_id: usize,
    /// The area, in `m2`
    pub area: Float,
    /// The inside convective heat transfer coefficient, in `W/m2.K`
    pub h_c: Float,
    /// Whether the inside face absorbs the solar radiation entering the room
    pub is_solar_absorbed_inside: bool,
    /// Whether this surface is a floor
    pub is_floor: bool,
    /// The layers, from the room side outwards
    pub layers: Vec<Layer>,
    /// The shading above the surface
    pub solar_shading_part: SolarShadingPart,
    /// Whether the outside face receives sun
    pub is_sun_striked_outside: bool,
    /// The direction the surface faces
    pub direction: Direction,
    /// The long-wave emissivity of the outside face
    pub outside_emissivity: Float,
    /// The outside surface heat transfer resistance, in `m2.K/W`
    pub outside_heat_transfer_resistance: Float,
    /// The solar absorptance of the outside face
    pub outside_solar_absorption: Float,
    /// The temperature difference coefficient
    pub temp_dif_coef: Float,
}

/// An exterior surface with no layers, described by its
/// U-value (e.g., a door or a roof)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExternalOpaquePart {
    /// The id of the boundary, unique within the envelope
    pub id: usize,
    /// The name of the boundary
    pub name: String,
    /// A secondary name
    pub sub_name: String,
    /// The room this boundary belongs to
    pub connected_room_id: usize,
    /// The area, in `m2`
    pub area: Float,
    /// The inside convective heat transfer coefficient, in `W/m2.K`
    pub h_c: Float,
    /// Whether the inside face absorbs the solar radiation entering the room
    pub is_solar_absorbed_inside: bool,
    /// Whether this surface is a floor
    pub is_floor: bool,
    /// The shading above the surface
    pub solar_shading_part: SolarShadingPart,
    /// Whether the outside face receives sun
    pub is_sun_striked_outside: bool,
    /// The direction the surface faces
    pub direction: Direction,
    /// The long-wave emissivity of the outside face
    pub outside_emissivity: Float,
    /// The outside surface heat transfer resistance, in `m2.K/W`
    pub outside_heat_transfer_resistance: Float,
    /// The U-value, in `W/m2.K`
    pub u_value: Float,
    /// The inside surface heat transfer resistance, in `m2.K/W`
    pub inside_heat_transfer_resistance: Float,
    /// The solar absorptance of the outside face
    pub outside_solar_absorption: Float,
    /// The temperature difference coefficient
    pub temp_dif_coef: Float,
}

/// A window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExternalTransparentPart {
    /// The id of the boundary, unique within the envelope
    pub id: usize,
    /// The name of the boundary
    pub name: String,
    /// A secondary name
    pub sub_name: String,
    /// The room this boundary belongs to
    pub connected_room_id: usize,
    /// The area, in `m2`
    pub area: Float,
    /// The inside convective heat transfer coefficient, in `W/m2.K`
    pub h_c: Float,
    /// Whether the inside face absorbs the solar radiation entering the room
    pub is_solar_absorbed_inside: bool,
    /// Whether this surface is a floor
    pub is_floor: bool,
    /// The shading above the window
    pub solar_shading_part: SolarShadingPart,
    /// Whether the outside face receives sun
    pub is_sun_striked_outside: bool,
    /// The direction the window faces
    pub direction: Direction,
    /// The long-wave emissivity of the outside face
    pub outside_emissivity: Float,
    /// The outside surface heat transfer resistance, in `m2.K/W`
    pub outside_heat_transfer_resistance: Float,
    /// The U-value, in `W/m2.K`
    pub u_value: Float,
    /// The inside surface heat transfer resistance, in `m2.K/W`
    pub inside_heat_transfer_resistance: Float,
    /// The solar heat gain coefficient
    pub eta_value: Float,
    /// The incident angle characteristic (e.g., `"single"` or `"multiple"` glazing)
    pub incident_angle_characteristics: String,
    /// The fraction of the window area that is glass
    pub glass_area_ratio: Float,
    /// The temperature difference coefficient
    pub temp_dif_coef: Float,
}

/// One face of an element separating two rooms.
///
/// These always come in pairs: the other face has the
/// id referenced in `rear_surface_boundary_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Internal {
    /// The id of the boundary, unique within the envelope
    pub id: usize,
    /// The name of the boundary
    pub name: String,
    /// A secondary name
    pub sub_name: String,
    /// The room this face belongs to
    pub connected_room_id: usize,
    /// The area, in `m2`
    pub area: Float,
    /// The convective heat transfer coefficient of this face, in `W/m2.K`
    pub h_c: Float,
    /// Whether this face absorbs the solar radiation entering the room
    pub is_solar_absorbed_inside: bool,
    /// Whether this face is a floor
    pub is_floor: bool,
    /// The layers, from this face towards the rear one
    pub layers: Vec<Layer>,
    /// The shading (there is never any)
    pub solar_shading_part: SolarShadingPart,
    /// The surface heat transfer resistance of the rear face, in `m2.K/W`
    pub outside_heat_transfer_resistance: Float,
    /// The id of the other face of this element
    pub rear_surface_boundary_id: usize,
}

/// A surface in contact with the ground
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ground {
    /// The id of the boundary, unique within the envelope
    pub id: usize,
    /// The name of the boundary
    pub name: String,
    /// A secondary name
    pub sub_name: String,
    /// The room this boundary belongs to
    pub connected_room_id: usize,
    /// The area, in `m2`
    pub area: Float,
    /// Whether the inside face absorbs the solar radiation entering the room
    pub is_solar_absorbed_inside: bool,
    /// Whether this surface is a floor
    pub is_floor: bool,
    /// The inside convective heat transfer coefficient, in `W/m2.K`
    pub h_c: Float,
    /// The layers, from the room side downwards
    pub layers: Vec<Layer>,
}

/// Any boundary surface of the envelope.
///
/// The variant is written as the `boundary_type` field, and
/// each variant only writes the fields that apply to it.
///
/// ## Examples
///
/// #### `.json`
/// ```json
/// {
///     "boundary_type": "ground",
///     "id": 12,
///     "name": "earthen_floor",
///     "sub_name": "",
///     "connected_room_id": 1,
///     "area": 4.5,
///     "is_solar_absorbed_inside": true,
///     "is_floor": true,
///     "h_c": 0.7,
///     "layers": [{
///         "name": "concrete",
///         "thermal_resistance": 0.075,
///         "thermal_capacity": 240000.0
///     }]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "boundary_type", rename_all = "snake_case")]
pub enum Boundary {
    /// A layered exterior surface
    ExternalGeneralPart(ExternalGeneralPart),
    /// An opaque exterior surface described by its U-value
    ExternalOpaquePart(ExternalOpaquePart),
    /// A window
    ExternalTransparentPart(ExternalTransparentPart),
    /// A face of an interior element
    Internal(Internal),
    /// A surface in contact with the ground
    Ground(Ground),
}

impl Boundary {
    /// The id of the boundary
    pub fn id(&self) -> usize {
        match self {
            Self::ExternalGeneralPart(b) => b.id,
            Self::ExternalOpaquePart(b) => b.id,
            Self::ExternalTransparentPart(b) => b.id,
            Self::Internal(b) => b.id,
            Self::Ground(b) => b.id,
        }
    }

    /// The name of the boundary
    pub fn name(&self) -> &str {
        match self {
            Self::ExternalGeneralPart(b) => &b.name,
            Self::ExternalOpaquePart(b) => &b.name,
            Self::ExternalTransparentPart(b) => &b.name,
            Self::Internal(b) => &b.name,
            Self::Ground(b) => &b.name,
        }
    }

    /// The room the boundary belongs to
    pub fn connected_room_id(&self) -> usize {
        match self {
            Self::ExternalGeneralPart(b) => b.connected_room_id,
            Self::ExternalOpaquePart(b) => b.connected_room_id,
            Self::ExternalTransparentPart(b) => b.connected_room_id,
            Self::Internal(b) => b.connected_room_id,
            Self::Ground(b) => b.connected_room_id,
        }
    }

    /// The area of the boundary, in `m2`
    pub fn area(&self) -> Float {
        match self {
            Self::ExternalGeneralPart(b) => b.area,
            Self::ExternalOpaquePart(b) => b.area,
            Self::ExternalTransparentPart(b) => b.area,
            Self::Internal(b) => b.area,
            Self::Ground(b) => b.area,
        }
    }

    /// The `boundary_type` tag of this boundary
    pub fn boundary_type(&self) -> &'static str {
        match self {
            Self::ExternalGeneralPart(_) => "external_general_part",
            Self::ExternalOpaquePart(_) => "external_opaque_part",
            Self::ExternalTransparentPart(_) => "external_transparent_part",
            Self::Internal(_) => "internal",
            Self::Ground(_) => "ground",
        }
    }

    /// The layers of the boundary, if it has any
    pub fn layers(&self) -> Option<&[Layer]> {
        match self {
            Self::ExternalGeneralPart(b) => Some(&b.layers),
            Self::Internal(b) => Some(&b.layers),
            Self::Ground(b) => Some(&b.layers),
            Self::ExternalOpaquePart(_) | Self::ExternalTransparentPart(_) => None,
        }
    }
}

/***********/
/* TESTING */
/***********/

#[cfg(test)]
mod testing {
    use super::*;

    fn ground() -> Ground {
        Ground {
            id: 12,
            name: "earthen_floor".into(),
            sub_name: "".into(),
            connected_room_id: 1,
            area: 4.5,
            is_solar_absorbed_inside: true,
            is_floor: true,
            h_c: 0.7,
            layers: vec![Layer::new("concrete", 0.075, 240000.)],
        }
    }

    #[test]
    fn serde_ground() -> Result<(), String> {
        let hardcoded_ref = Boundary::Ground(ground());

        let from_hardcoded_json: Boundary = json5::from_str(
            "{
            boundary_type: 'ground',
            id: 12,
            name: 'earthen_floor',
            sub_name: '',
            connected_room_id: 1,
            area: 4.5,
            is_solar_absorbed_inside: true,
            is_floor: true,
            h_c: 0.7,
            layers: [{
                name: 'concrete',
                thermal_resistance: 0.075,
                thermal_capacity: 240000,
            }]
        }",
        )
        .map_err(|e| e.to_string())?;
        assert_eq!(hardcoded_ref, from_hardcoded_json);

        // Serialize and deserialize again
        let rust_json = serde_json::to_string(&hardcoded_ref).map_err(|e| e.to_string())?;
        let from_serialized: Boundary =
            serde_json::from_str(&rust_json).map_err(|e| e.to_string())?;
        assert_eq!(hardcoded_ref, from_serialized);

        Ok(())
    }

    #[test]
    fn test_fields_are_omitted_per_type() -> Result<(), String> {
        let b = Boundary::Ground(ground());
        let value = serde_json::to_value(&b).map_err(|e| e.to_string())?;
        let obj = value.as_object().ok_or("not an object")?;
        assert_eq!(obj["boundary_type"], "ground");
        assert!(!obj.contains_key("rear_surface_boundary_id"));
        assert!(!obj.contains_key("u_value"));
        assert!(!obj.contains_key("solar_shading_part"));
        assert!(!obj.contains_key("direction"));
        assert_eq!(b.boundary_type(), "ground");
        Ok(())
    }

    #[test]
    fn test_solar_shading() -> Result<(), String> {
        let none = serde_json::to_string(&SolarShadingPart::none()).map_err(|e| e.to_string())?;
        assert_eq!(none, r#"{"existence":false}"#);

        let simple = SolarShadingPart::simple(0.6, 1.8, 0.3);
        let value = serde_json::to_value(&simple).map_err(|e| e.to_string())?;
        assert_eq!(value["existence"], true);
        assert_eq!(value["input_method"], "simple");
        assert_eq!(value["depth"], 0.6);
        Ok(())
    }

    #[test]
    fn test_accessors() {
        let b = Boundary::Ground(ground());
        assert_eq!(b.id(), 12);
        assert_eq!(b.name(), "earthen_floor");
        assert_eq!(b.connected_room_id(), 1);
        assert_eq!(b.area(), 4.5);
        assert_eq!(b.layers().map(|l| l.len()), Some(1));
    }
}
