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

use crate::{
    BuildingRow, Common, ConversionError, Direction, Float, MechanicalVentilation, RoomRow,
    SolarShadingPart,
};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The incident angle characteristic assigned to windows that do not
/// declare one
const DEFAULT_INCIDENT_ANGLE_CHARACTERISTICS: &str = "multiple";

/// The glass area ratio assigned to windows that do not declare one
const DEFAULT_GLASS_AREA_RATIO: Float = 0.8;

fn default_temp_diff_coef() -> Float {
    1.0
}

/// The two seasons for which solar gains are evaluated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    /// Cooling season
    Cooling,
    /// Heating season
    Heating,
}

impl Season {
    /// Both seasons, cooling first
    pub const ALL: [Season; 2] = [Season::Cooling, Season::Heating];
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cooling => write!(f, "cooling"),
            Self::Heating => write!(f, "heating"),
        }
    }
}

/// The whole-building targets
///
/// ## Examples
///
/// #### `.json`
/// ```json
/// {
///     "region": 6,
///     "ua_target": 0.87,
///     "eta_ac_target": 0.028,
///     "eta_ah_target": 0.045,
///     "a_env": 307.51,
///     "is_storage": false
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnvelopeTargets {
    /// The climate region, from 1 (coldest) to 8
    pub region: u8,

    /// The target average U-value of the envelope, in `W/m2.K`
    pub ua_target: Float,

    /// The target average solar heat gain coefficient
    /// during the cooling season
    pub eta_ac_target: Float,

    /// The target average solar heat gain coefficient
    /// during the heating season
    pub eta_ah_target: Float,

    /// The total area of the envelope, in `m2`
    pub a_env: Float,

    /// Whether the building uses its thermal mass (i.e., whether
    /// floors carry a concrete slab)
    #[serde(default)]
    pub is_storage: bool,
}

impl EnvelopeTargets {
    /// The target solar heat gain coefficient of a season
    pub fn eta_target(&self, season: Season) -> Float {
        match season {
            Season::Cooling => self.eta_ac_target,
            Season::Heating => self.eta_ah_target,
        }
    }
}

/// The kind of construction of a row in the surfaces table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SurfaceCategory {
    /// An exterior wall
    Wall,
    /// A ceiling, either under an attic room or exposed
    Ceiling,
    /// A first floor, either over an underfloor room or exposed
    Floor,
    /// A roof described only by its U-value
    Roof,
    /// An exterior door
    Door,
    /// A window
    Window,
    /// A wall between two rooms
    Partition,
    /// A slab between two storeys
    SecondFloor,
    /// An earthen floor
    Ground,
}

impl SurfaceCategory {
    /// The tag used for this category in the input
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Wall => "wall",
            Self::Ceiling => "ceiling",
            Self::Floor => "floor",
            Self::Roof => "roof",
            Self::Door => "door",
            Self::Window => "window",
            Self::Partition => "partition",
            Self::SecondFloor => "second_floor",
            Self::Ground => "ground",
        }
    }

    /// The direction assumed when a row does not declare one
    fn default_direction(&self, has_rear: bool) -> Option<Direction> {
        match (self, has_rear) {
            (Self::Ceiling, false) | (Self::Roof, _) => Some(Direction::Top),
            (Self::Ceiling, true) => Some(Direction::Upward),
            (Self::Floor, false) | (Self::Ground, _) => Some(Direction::Bottom),
            (Self::Floor, true) | (Self::SecondFloor, _) => Some(Direction::Downward),
            (Self::Partition, _) => Some(Direction::Horizontal),
            (Self::Wall, _) | (Self::Door, _) | (Self::Window, _) => None,
        }
    }

    /// Checks whether a row of this category can face `direction`
    fn accepts(&self, direction: Direction, has_rear: bool) -> bool {
        match (self, has_rear) {
            (Self::Wall, _) | (Self::Door, _) => direction.is_compass(),
            (Self::Window, _) | (Self::Roof, _) => {
                direction.is_compass() || direction == Direction::Top
            }
            (Self::Ceiling, false) => direction == Direction::Top,
            (Self::Ceiling, true) => direction == Direction::Upward,
            (Self::Floor, false) | (Self::Ground, _) => direction == Direction::Bottom,
            (Self::Floor, true) | (Self::SecondFloor, _) => direction == Direction::Downward,
            (Self::Partition, _) => direction == Direction::Horizontal,
        }
    }

    /// Checks whether rows of this category always connect two rooms
    fn requires_rear(&self) -> bool {
        matches!(self, Self::Partition | Self::SecondFloor)
    }

    /// Checks whether rows of this category may connect two rooms
    fn allows_rear(&self) -> bool {
        matches!(
            self,
            Self::Partition | Self::SecondFloor | Self::Ceiling | Self::Floor
        )
    }
}

impl std::fmt::Display for SurfaceCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl FromStr for SurfaceCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().to_ascii_lowercase();
        [
            Self::Wall,
            Self::Ceiling,
            Self::Floor,
            Self::Roof,
            Self::Door,
            Self::Window,
            Self::Partition,
            Self::SecondFloor,
            Self::Ground,
        ]
        .into_iter()
        .find(|c| c.tag() == trimmed)
        .ok_or_else(|| format!("Unknown surface category '{}'", s))
    }
}

/// The shading above a window, as written in the input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ShadingInput {
    /// The projection depth, in `m`
    pub depth: Float,
    /// The height of the glazing under the shading, in `m`
    pub d_h: Float,
    /// The distance between the top of the glazing and the shading, in `m`
    pub d_e: Float,
}

/// A row of the surfaces table, as written in the input.
///
/// Most fields are optional at this stage; [`SurfaceRow::parse`]
/// checks that the row contains what its category needs.
///
/// ## Examples
///
/// #### `.json`
/// ```json
/// {
///     "category": "window",
///     "name": "window_s",
///     "area": 5.0,
///     "direction": "s",
///     "connected_room_id": 0,
///     "solar_shading": { "depth": 0.6, "d_h": 1.8, "d_e": 0.3 }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SurfaceRow {
    /// The category tag (e.g., `"wall"`, `"partition"`)
    pub category: String,

    /// The name of the surface
    pub name: String,

    /// A secondary name
    #[serde(default)]
    pub sub_name: String,

    /// The area, in `m2`. Rows with zero area are not emitted.
    pub area: Option<Float>,

    /// The direction tag
    pub direction: Option<String>,

    /// The temperature difference coefficient
    #[serde(default = "default_temp_diff_coef")]
    pub temp_diff_coef: Float,

    /// The room this surface belongs to
    pub connected_room_id: Option<usize>,

    /// The room on the other side, for interior elements
    pub rear_room_id: Option<usize>,

    /// The name of the rear face. Defaults to `name`
    pub rear_name: Option<String>,

    /// The secondary name of the rear face. Defaults to `sub_name`
    pub rear_sub_name: Option<String>,

    /// For windows: the incident angle characteristic
    pub incident_angle_characteristics: Option<String>,

    /// For windows: the fraction of the area that is glass
    pub glass_area_ratio: Option<Float>,

    /// For windows: the shading above it
    pub solar_shading: Option<ShadingInput>,
}

impl Default for SurfaceRow {
    fn default() -> Self {
        Self {
            category: String::new(),
            name: String::new(),
            sub_name: String::new(),
            area: None,
            direction: None,
            temp_diff_coef: default_temp_diff_coef(),
            connected_room_id: None,
            rear_room_id: None,
            rear_name: None,
            rear_sub_name: None,
            incident_angle_characteristics: None,
            glass_area_ratio: None,
            solar_shading: None,
        }
    }
}

/// The other side of an interior element
#[derive(Debug, Clone, PartialEq)]
pub struct RearSide {
    /// The room on the other side
    pub room_id: usize,
    /// The name of the rear face
    pub name: String,
    /// The secondary name of the rear face
    pub sub_name: String,
}

/// The extra information carried by windows
#[derive(Debug, Clone, PartialEq)]
pub struct WindowDetails {
    /// The incident angle characteristic
    pub incident_angle_characteristics: String,
    /// The fraction of the area that is glass
    pub glass_area_ratio: Float,
    /// The shading above the window
    pub solar_shading: SolarShadingPart,
}

impl Default for WindowDetails {
    fn default() -> Self {
        Self {
            incident_angle_characteristics: DEFAULT_INCIDENT_ANGLE_CHARACTERISTICS.to_string(),
            glass_area_ratio: DEFAULT_GLASS_AREA_RATIO,
            solar_shading: SolarShadingPart::none(),
        }
    }
}

/// A checked row of the surfaces table
#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    /// The position of the row in the table
    pub row: usize,
    /// The category
    pub category: SurfaceCategory,
    /// The name
    pub name: String,
    /// A secondary name
    pub sub_name: String,
    /// The area, in `m2`
    pub area: Float,
    /// The direction
    pub direction: Direction,
    /// The temperature difference coefficient
    pub temp_diff_coef: Float,
    /// The room the (front) surface belongs to
    pub connected_room_id: usize,
    /// The rear side, for interior elements
    pub rear: Option<RearSide>,
    /// Window-only information
    pub window: Option<WindowDetails>,
}

impl Surface {
    /// Checks whether this surface separates two rooms
    pub fn is_interior(&self) -> bool {
        self.rear.is_some()
    }

    /// Surfaces with no area are dropped from the
    /// envelope altogether
    pub fn is_emitted(&self) -> bool {
        self.area > 0.0
    }
}

impl SurfaceRow {
    /// Checks the row and turns it into a [`Surface`].
    ///
    /// `row` is the position of this row in the table, used
    /// for reporting errors.
    pub fn parse(&self, row: usize) -> Result<Surface, ConversionError> {
        let category =
            SurfaceCategory::from_str(&self.category).map_err(|_| {
                ConversionError::UnknownCategory {
                    row,
                    tag: self.category.clone(),
                }
            })?;

        let area = self.area.ok_or(ConversionError::MissingField {
            row,
            field: "area",
        })?;
        let connected_room_id = self
            .connected_room_id
            .ok_or(ConversionError::MissingField {
                row,
                field: "connected_room_id",
            })?;

        let rear_room_id = self.rear_room_id;
        if rear_room_id.is_some() && !category.allows_rear() {
            return Err(ConversionError::UnexpectedRearRoom { row, category });
        }
        if category.requires_rear() && rear_room_id.is_none() {
            return Err(ConversionError::MissingRearRoom { row, category });
        }
        let rear = match rear_room_id {
            Some(room) if room == connected_room_id => {
                return Err(ConversionError::SameRoomPair { row, room })
            }
            Some(room_id) => Some(RearSide {
                room_id,
                name: self.rear_name.clone().unwrap_or_else(|| self.name.clone()),
                sub_name: self
                    .rear_sub_name
                    .clone()
                    .unwrap_or_else(|| self.sub_name.clone()),
            }),
            None => None,
        };
        let has_rear = rear.is_some();

        let direction = match &self.direction {
            Some(tag) => Direction::from_str(tag).map_err(|_| ConversionError::UnknownDirection {
                row,
                tag: tag.clone(),
            })?,
            None => category
                .default_direction(has_rear)
                .ok_or(ConversionError::MissingField {
                    row,
                    field: "direction",
                })?,
        };
        if !category.accepts(direction, has_rear) {
            return Err(ConversionError::MisplacedDirection {
                row,
                category,
                direction,
            });
        }

        let window = if category == SurfaceCategory::Window {
            let defaults = WindowDetails::default();
            Some(WindowDetails {
                incident_angle_characteristics: self
                    .incident_angle_characteristics
                    .clone()
                    .unwrap_or(defaults.incident_angle_characteristics),
                glass_area_ratio: self.glass_area_ratio.unwrap_or(defaults.glass_area_ratio),
                solar_shading: match &self.solar_shading {
                    Some(s) => SolarShadingPart::simple(s.depth, s.d_h, s.d_e),
                    None => defaults.solar_shading,
                },
            })
        } else {
            None
        };

        Ok(Surface {
            row,
            category,
            name: self.name.clone(),
            sub_name: self.sub_name.clone(),
            area,
            direction,
            temp_diff_coef: self.temp_diff_coef,
            connected_room_id,
            rear,
            window,
        })
    }
}

/// An entry of the azimuthal coefficient table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AzimuthalCoefficientEntry {
    /// The season
    pub season: Season,
    /// The direction
    pub direction: Direction,
    /// The region
    pub region: u8,
    /// The coefficient
    pub value: Float,
}

/// An entry of the solar gain correction factor table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SolarCorrectionEntry {
    /// The region
    pub region: u8,
    /// The season
    pub season: Season,
    /// The correction factor applied to windows
    pub value: Float,
}

/// Everything needed for producing an [`crate::EnvelopeAssembly`]
///
/// ## Examples
///
/// #### `.json`
/// ```json
/// {
///     "common": { "ac_method": "simple" },
///     "building": { "story": 2, "c_value": 2.0 },
///     "targets": {
///         "region": 6, "ua_target": 0.87,
///         "eta_ac_target": 0.028, "eta_ah_target": 0.045,
///         "a_env": 307.51
///     },
///     "rooms": [ ... ],
///     "surfaces": [ ... ],
///     "azimuthal_coefficients": [ ... ],
///     "solar_correction_factors": [ ... ],
///     "mechanical_ventilations": [ ... ]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConversionInput {
    /// Settings shared by the whole calculation
    #[serde(default)]
    pub common: Common,

    /// The building
    pub building: BuildingRow,

    /// The whole-building targets
    pub targets: EnvelopeTargets,

    /// The rooms
    pub rooms: Vec<RoomRow>,

    /// The surfaces table
    pub surfaces: Vec<SurfaceRow>,

    /// The azimuthal coefficient table
    pub azimuthal_coefficients: Vec<AzimuthalCoefficientEntry>,

    /// The solar gain correction factor table
    #[serde(default)]
    pub solar_correction_factors: Vec<SolarCorrectionEntry>,

    /// The mechanical ventilation routes
    #[serde(default)]
    pub mechanical_ventilations: Vec<MechanicalVentilation>,
}

impl ConversionInput {
    /// Parses the input from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ConversionError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Checks every row of the surfaces table. The first
    /// faulty row aborts the whole process.
    pub fn parse_surfaces(&self) -> Result<Vec<Surface>, ConversionError> {
        self.surfaces
            .iter()
            .enumerate()
            .map(|(row, s)| s.parse(row))
            .collect()
    }
}

/***********/
/* TESTING */
/***********/
