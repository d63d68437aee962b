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
    reversed_layers, Boundary, Building, Common, ConversionError, Equipments,
    MechanicalVentilation, Room,
};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// A structure describing the whole envelope of a building,
/// ready to be handed to the simulation engine.
///
/// Once built, it is not meant to be modified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnvelopeAssembly {
    /// Settings shared by the whole calculation
    pub common: Common,

    /// The building
    pub building: Building,

    /// The rooms
    pub rooms: Vec<Room>,

    /// Every boundary surface, exterior, interior and ground
    pub boundaries: Vec<Boundary>,

    /// The mechanical ventilation routes
    pub mechanical_ventilations: Vec<MechanicalVentilation>,

    /// Heating and cooling equipments
    pub equipments: Equipments,
}

impl EnvelopeAssembly {
    /// Parses an assembly from JSON
    ///
    /// ```rust
    /// use model::EnvelopeAssembly;
    ///
    /// let json_str = r#"{
    ///     "common": { "ac_method": "simple" },
    ///     "building": { "infiltration": {
    ///         "method": "balance_residential",
    ///         "c_value_estimate": "specify",
    ///         "story": 1,
    ///         "c_value": 2.0,
    ///         "inside_pressure": "negative"
    ///     }},
    ///     "rooms": [],
    ///     "boundaries": [],
    ///     "mechanical_ventilations": [],
    ///     "equipments": { "heating_equipments": [], "cooling_equipments": [] }
    /// }"#;
    ///
    /// let assembly = EnvelopeAssembly::from_json(json_str).unwrap();
    /// assert!(assembly.boundaries.is_empty());
    /// ```
    pub fn from_json(json: &str) -> Result<Self, ConversionError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Writes the assembly as JSON
    pub fn to_json(&self, pretty: bool) -> Result<String, ConversionError> {
        let s = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(s)
    }

    /// Borrows the boundary with a certain id, if any
    pub fn boundary(&self, id: usize) -> Option<&Boundary> {
        self.boundaries.iter().find(|b| b.id() == id)
    }

    /// Checks that no boundary id is repeated
    pub fn validate_ids(&self) -> Result<(), ConversionError> {
        let mut seen = HashSet::with_capacity(self.boundaries.len());
        for b in &self.boundaries {
            if !seen.insert(b.id()) {
                return Err(ConversionError::DuplicateBoundaryId(b.id()));
            }
        }
        Ok(())
    }

    /// Checks that every interior face has a rear face pointing back
    /// to it, in a different room and with its layers reversed
    pub fn validate_mirror_pairs(&self) -> Result<(), ConversionError> {
        let internals: HashMap<usize, &crate::Internal> = self
            .boundaries
            .iter()
            .filter_map(|b| match b {
                Boundary::Internal(i) => Some((i.id, i)),
                _ => None,
            })
            .collect();

        for front in internals.values() {
            let broken = ConversionError::BrokenMirrorPair {
                front: front.id,
                rear: front.rear_surface_boundary_id,
            };
            let rear = internals
                .get(&front.rear_surface_boundary_id)
                .ok_or_else(|| broken.clone())?;
            let consistent = rear.rear_surface_boundary_id == front.id
                && rear.connected_room_id != front.connected_room_id
                && rear.layers == reversed_layers(&front.layers);
            if !consistent {
                return Err(broken);
            }
        }
        Ok(())
    }

    /// Runs every validation
    pub fn validate(&self) -> Result<(), ConversionError> {
        self.validate_ids()?;
        self.validate_mirror_pairs()
    }
}

/***********/
/* TESTING */
/***********/
