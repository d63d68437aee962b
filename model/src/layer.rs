/*
MIT License
Copyright (c) 2021 Germán Molina
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

/// The representation of a physical layer.
/// That is to say, a slice of a construction with
/// a certain thermal resistance and heat capacity.
///
/// Layers are always part of an ordered list, from the face
/// of the surface that owns them towards its other side.
///
/// ## Examples
///
/// ##### `.json`
/// ```json
/// {
///     "name": "gypsum_board",
///     "thermal_resistance": 0.0454,
///     "thermal_capacity": 8300.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Layer {
    /// The name of the layer
    pub name: String,

    /// The thermal resistance of the layer, in `m2.K/W`
    pub thermal_resistance: Float,

    /// The heat capacity of the layer, in `J/m2.K`
    pub thermal_capacity: Float,
}

impl Layer {
    /// Creates a new [`Layer`]
    pub fn new<S: Into<String>>(name: S, thermal_resistance: Float, thermal_capacity: Float) -> Self {
        Self {
            name: name.into(),
            thermal_resistance,
            thermal_capacity,
        }
    }

    /// Checks whether this layer has neither resistance nor
    /// capacity. Such layers are never emitted.
    pub fn is_empty(&self) -> bool {
        self.thermal_resistance == 0.0 && self.thermal_capacity == 0.0
    }
}

/// Returns the same layers, ordered as seen from the other
/// face of the construction.
pub fn reversed_layers(layers: &[Layer]) -> Vec<Layer> {
    layers.iter().rev().cloned().collect()
}

/***********/
/* TESTING */
/***********/

#[cfg(test)]
mod testing {
    use super::*;

    fn stack() -> Vec<Layer> {
        vec![
            Layer::new("gypsum_board", 0.045, 8300.),
            Layer::new("air_gap", 0.09, 0.),
            Layer::new("insulation", 1.8, 1117.8),
            Layer::new("plywood", 0.075, 8640.),
        ]
    }

    #[test]
    fn serde() -> Result<(), String> {
        let hardcoded_ref = Layer::new("plywood", 0.075, 8640.);

        let from_hardcoded_json: Layer = json5::from_str(
            "{
            name: 'plywood',
            thermal_resistance: 0.075,
            thermal_capacity: 8640,
        }",
        )
        .map_err(|e| e.to_string())?;
        assert_eq!(hardcoded_ref, from_hardcoded_json);

        let rust_json = serde_json::to_string(&hardcoded_ref).map_err(|e| e.to_string())?;
        assert_eq!(
            rust_json,
            r#"{"name":"plywood","thermal_resistance":0.075,"thermal_capacity":8640.0}"#
        );
        Ok(())
    }

    #[test]
    fn test_reversal_is_an_involution() {
        let layers = stack();
        let once = reversed_layers(&layers);
        assert_ne!(once, layers);
        assert_eq!(once[0].name, "plywood");
        assert_eq!(once[3].name, "gypsum_board");
        assert_eq!(reversed_layers(&once), layers);

        // trivial stacks
        assert!(reversed_layers(&[]).is_empty());
        let single = vec![Layer::new("concrete", 0.075, 240000.)];
        assert_eq!(reversed_layers(&single), single);
    }

    #[test]
    fn test_is_empty() {
        assert!(Layer::new("insulation", 0., 0.).is_empty());
        assert!(!Layer::new("air_gap", 0.09, 0.).is_empty());
    }
}
