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
use serde::{Deserialize, Serialize};

/// The ratio between the heat conductance and the heat
/// capacity of the furniture, in `1/s`
const FURNITURE_HEAT_COND_RATIO: Float = 0.00022;

/// The moisture conductance of the furniture, in `kg/s.(kg/kg(DA))`
const FURNITURE_MOISTURE_COND: Float = 0.9;

/// A room, as it is written in the rooms table.
///
/// ## Examples
///
/// #### `.json`
/// ```json
/// {
///     "id": 0,
///     "name": "main_occupant_room",
///     "sub_name": "",
///     "floor_area": 29.81,
///     "volume": 71.54,
///     "natural_ventilation": 0.0,
///     "furniture_heat_capacity": 357720.0,
///     "schedule": "main_occupant_room"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RoomRow {
    /// The id of the room. Must be unique.
    pub id: usize,

    /// The name of the room
    pub name: String,

    /// A secondary name
    #[serde(default)]
    pub sub_name: String,

    /// The floor area, in `m2`
    pub floor_area: Float,

    /// The volume, in `m3`
    pub volume: Float,

    /// The natural ventilation rate, in `m3/h`
    #[serde(default)]
    pub natural_ventilation: Float,

    /// The heat capacity of the furniture, in `J/K`
    #[serde(default)]
    pub furniture_heat_capacity: Float,

    /// The name of the schedule of the room
    pub schedule: String,
}

/// The ventilation of a room
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomVentilation {
    /// The natural ventilation rate, in `m3/h`
    pub natural: Float,
}

/// The furniture in a room
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Furniture {
    /// Always `"specify"`
    pub input_method: String,

    /// Heat capacity, in `J/K`
    pub heat_capacity: Float,

    /// Heat conductance between the furniture and the air, in `W/K`
    pub heat_cond: Float,

    /// Moisture capacity, in `kg/(kg/kg(DA))`
    pub moisture_capacity: Float,

    /// Moisture conductance, in `kg/s.(kg/kg(DA))`
    pub moisture_cond: Float,
}

/// The schedule of a room
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomSchedule {
    /// The name of the schedule
    pub name: String,
}

/// A room of the assembly.
///
/// Rooms are the nodes that boundaries connect to
/// through their `connected_room_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    /// The id of the room
    pub id: usize,
    /// The name of the room
    pub name: String,
    /// A secondary name
    pub sub_name: String,
    /// The floor area, in `m2`
    pub floor_area: Float,
    /// The volume, in `m3`
    pub volume: Float,
    /// The ventilation
    pub ventilation: RoomVentilation,
    /// The furniture
    pub furniture: Furniture,
    /// The schedule
    pub schedule: RoomSchedule,
}

impl From<&RoomRow> for Room {
    fn from(row: &RoomRow) -> Self {
        Self {
            id: row.id,
            name: row.name.clone(),
            sub_name: row.sub_name.clone(),
            floor_area: row.floor_area,
            volume: row.volume,
            ventilation: RoomVentilation {
                natural: row.natural_ventilation,
            },
            furniture: Furniture {
                input_method: "specify".to_string(),
                heat_capacity: row.furniture_heat_capacity,
                heat_cond: FURNITURE_HEAT_COND_RATIO * row.furniture_heat_capacity,
                moisture_capacity: 0.0,
                moisture_cond: FURNITURE_MOISTURE_COND,
            },
            schedule: RoomSchedule {
                name: row.schedule.clone(),
            },
        }
    }
}

/***********/
/* TESTING */
/***********/
