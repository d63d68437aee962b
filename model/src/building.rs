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

/// Settings shared by the whole calculation
///
/// ## Examples
///
/// #### `.json`
/// ```json
/// { "ac_method": "simple" }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Common {
    /// The air-conditioning control method used by the simulation engine
    pub ac_method: String,
}

impl Default for Common {
    fn default() -> Self {
        Self {
            ac_method: "simple".to_string(),
        }
    }
}

/// How the infiltration is calculated
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InfiltrationMethod {
    /// Balances the pressure of a residential building.
    /// This is the only supported method.
    #[default]
    BalanceResidential,
}

/// How the C-value (i.e., the equivalent leakage area per floor area)
/// is obtained
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CValueEstimate {
    /// It is given explicitly
    #[default]
    Specify,
}

/// The pressure of the inside of the building, relative to
/// the outside, which depends on the ventilation system
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsidePressure {
    /// Exhaust-only ventilation
    #[default]
    Negative,
    /// Supply-only ventilation
    Positive,
    /// Balanced ventilation
    Balanced,
}

/// The infiltration of the building
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Infiltration {
    /// The calculation method
    pub method: InfiltrationMethod,
    /// How the C-value is obtained
    pub c_value_estimate: CValueEstimate,
    /// The number of storeys
    pub story: usize,
    /// The C-value, in `cm2/m2`
    pub c_value: Float,
    /// The inside pressure
    pub inside_pressure: InsidePressure,
}

/// The building, as it is written in the input
///
/// ## Examples
///
/// #### `.json`
/// ```json
/// { "story": 2, "c_value": 2.0, "inside_pressure": "negative" }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BuildingRow {
    /// The number of storeys
    pub story: usize,
    /// The C-value, in `cm2/m2`
    pub c_value: Float,
    /// The inside pressure
    #[serde(default)]
    pub inside_pressure: InsidePressure,
}

/// The building block of the assembly
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Building {
    /// The infiltration
    pub infiltration: Infiltration,
}

impl From<&BuildingRow> for Building {
    fn from(row: &BuildingRow) -> Self {
        Self {
            infiltration: Infiltration {
                method: InfiltrationMethod::BalanceResidential,
                c_value_estimate: CValueEstimate::Specify,
                story: row.story,
                c_value: row.c_value,
                inside_pressure: row.inside_pressure,
            },
        }
    }
}

/// A route of mechanical ventilation through a set of rooms.
///
/// ## Examples
///
/// #### `.json`
/// ```json
/// { "id": 0, "root_type": "type3", "volume": 60.0, "root": [0, 2] }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MechanicalVentilation {
    /// The id of the route
    pub id: usize,
    /// The kind of ventilation system (e.g., `"type1"`, `"type3"`)
    pub root_type: String,
    /// The air volume moved through the route, in `m3/h`
    pub volume: Float,
    /// The ids of the rooms, in the order air flows through them
    pub root: Vec<usize>,
}

/// Heating and cooling equipments.
///
/// The conversion never produces any, but the block needs
/// to be there.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Equipments {
    /// Heating equipments
    pub heating_equipments: Vec<serde_json::Value>,
    /// Cooling equipments
    pub cooling_equipments: Vec<serde_json::Value>,
}

/***********/
/* TESTING */
/***********/

#[cfg(test)]
mod testing {
    use super::*;

    #[test]
    fn serde_building() -> Result<(), String> {
        let row: BuildingRow =
            json5::from_str("{story: 2, c_value: 2.0, inside_pressure: 'balanced'}")
                .map_err(|e| e.to_string())?;
        let building = Building::from(&row);
        let value = serde_json::to_value(&building).map_err(|e| e.to_string())?;

        assert_eq!(value["infiltration"]["method"], "balance_residential");
        assert_eq!(value["infiltration"]["c_value_estimate"], "specify");
        assert_eq!(value["infiltration"]["story"], 2);
        assert_eq!(value["infiltration"]["inside_pressure"], "balanced");
        Ok(())
    }

    #[test]
    fn test_defaults() -> Result<(), String> {
        let row: BuildingRow =
            json5::from_str("{story: 1, c_value: 5.0}").map_err(|e| e.to_string())?;
        assert_eq!(row.inside_pressure, InsidePressure::Negative);
        assert_eq!(Common::default().ac_method, "simple");

        let eq = serde_json::to_string(&Equipments::default()).map_err(|e| e.to_string())?;
        assert_eq!(eq, r#"{"heating_equipments":[],"cooling_equipments":[]}"#);
        Ok(())
    }
}
