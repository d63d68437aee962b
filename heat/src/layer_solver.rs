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
use model::Layer;

/// The surface heat transfer resistances at both faces of a
/// construction, in `m2.K/W`. They are part of the U-value but
/// they are not layers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceResistances {
    /// The resistance at the room side
    pub inside: Float,
    /// The resistance at the other side
    pub outside: Float,
}

/// The insulation needed for reaching a certain U-value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InsulationSolution {
    /// Thermal resistance, in `m2.K/W`. Never negative.
    pub resistance: Float,
    /// Thickness, in `m`
    pub thickness: Float,
    /// Heat capacity, in `J/m2.K`
    pub heat_capacity: Float,
}

impl InsulationSolution {
    /// Builds the insulation layer. Returns `None` when no
    /// insulation is needed, as empty layers are not emitted.
    pub fn layer(&self, name: &str) -> Option<Layer> {
        if self.resistance > 0.0 {
            Some(Layer::new(name, self.resistance, self.heat_capacity))
        } else {
            None
        }
    }
}

/// Calculates the insulation that, added to a set of known layers,
/// gives a construction of U-value `u_target`.
///
/// The resistance of the insulation is what is left after subtracting
/// the surface resistances and the known layers from the total
/// resistance:
///
/// ```math
/// R_{ins} = \max \left( \frac{1}{U} - R_{si} - R_{se} - \sum R_{known}, 0 \right)
/// ```
///
/// When the known layers are already too resistive, the result is
/// zero (i.e., there is no such thing as negative insulation) and the
/// construction ends up with a U-value lower than the target.
///
/// `u_target` must be larger than zero.
///
/// ```
/// use heat::{solve_insulation, SurfaceResistances};
///
/// let films = SurfaceResistances{ inside: 0.11, outside: 0.04 };
/// let sol = solve_insulation(0.5, 0.35, films, 0.045, 13.8e3);
/// assert!((sol.resistance - 1.5).abs() < 1e-9);
/// assert!((sol.thickness - 0.0675).abs() < 1e-9);
/// ```
pub fn solve_insulation(
    u_target: Float,
    known_resistance: Float,
    films: SurfaceResistances,
    conductivity: Float,
    volumetric_heat_capacity: Float,
) -> InsulationSolution {
    debug_assert!(u_target > 0.0, "U-value targets need to be positive");

    let total = films.inside + films.outside + known_resistance;
    let inv_u = 1.0 / u_target;
    // Compared before subtracting, so the clamped value is exactly +0.0
    let resistance = if inv_u <= total { 0.0 } else { inv_u - total };
    let thickness = resistance * conductivity;

    InsulationSolution {
        resistance,
        thickness,
        heat_capacity: volumetric_heat_capacity * thickness,
    }
}

/***********/
/* TESTING */
/***********/

#[cfg(test)]
mod testing {
    use super::*;
    use approx::assert_relative_eq;

    const FILMS: SurfaceResistances = SurfaceResistances {
        inside: 0.11,
        outside: 0.04,
    };

    #[test]
    fn test_solve() {
        let sol = solve_insulation(0.25, 0.6, FILMS, 0.04, 10e3);
        // 4.0 - 0.15 - 0.6
        assert_relative_eq!(sol.resistance, 3.25, max_relative = 1e-12);
        assert_relative_eq!(sol.thickness, 0.13, max_relative = 1e-12);
        assert_relative_eq!(sol.heat_capacity, 1300.0, max_relative = 1e-12);

        // The full stack gets back the target
        let u = 1.0 / (FILMS.inside + FILMS.outside + 0.6 + sol.resistance);
        assert_relative_eq!(u, 0.25, max_relative = 1e-12);

        let layer = sol.layer("insulation").unwrap();
        assert_eq!(layer.name, "insulation");
        assert_eq!(layer.thermal_resistance, sol.resistance);
    }

    #[test]
    fn test_no_insulation_needed() {
        // 1/U = 1.0, but films + known layers = 1.15
        let sol = solve_insulation(1.0, 1.0, FILMS, 0.04, 10e3);
        assert_eq!(sol.resistance, 0.0);
        assert!(sol.resistance.is_sign_positive());
        assert_eq!(sol.thickness, 0.0);
        assert_eq!(sol.heat_capacity, 0.0);
        assert!(sol.layer("insulation").is_none());

        // Exactly at the limit
        let sol = solve_insulation(2.0, 0.35, FILMS, 0.04, 10e3);
        assert_eq!(sol.resistance, 0.0);
        assert!(sol.layer("insulation").is_none());
    }
}
