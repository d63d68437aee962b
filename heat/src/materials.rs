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

/// The thermal resistance of a non-ventilated air gap, in `m2.K/W`
pub const AIR_GAP_RESISTANCE: Float = 0.09;

/// A material with common physical properties.
///
/// Each one of these becomes a [`Layer`] once it is
/// given a thickness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Material {
    /// Gypsum board
    ///
    /// # Properties
    /// * Thermal Cond.: 0.22 W/m.K
    /// * Volumetric heat capacity: 830 kJ/m3.K
    GypsumBoard,

    /// Structural plywood
    ///
    /// # Properties
    /// * Thermal Cond.: 0.16 W/m.K
    /// * Volumetric heat capacity: 720 kJ/m3.K
    Plywood,

    /// Wood-cement board used as exterior cladding
    ///
    /// # Properties
    /// * Thermal Cond.: 0.17 W/m.K
    /// * Volumetric heat capacity: 1300 kJ/m3.K
    CementBoard,

    /// Normal concrete
    ///
    /// # Properties
    /// * Thermal Cond.: 1.6 W/m.K
    /// * Volumetric heat capacity: 2000 kJ/m3.K
    Concrete,

    /// Glass wool (16K), used as the fill insulation
    ///
    /// # Properties
    /// * Thermal Cond.: 0.045 W/m.K
    /// * Volumetric heat capacity: 13.8 kJ/m3.K
    Insulation,
}

impl Material {
    /// The name given to layers made of this material
    pub fn name(&self) -> &'static str {
        match self {
            Self::GypsumBoard => "gypsum_board",
            Self::Plywood => "plywood",
            Self::CementBoard => "cement_board",
            Self::Concrete => "concrete",
            Self::Insulation => "insulation",
        }
    }

    /// The thermal conductivity, in `W/m.K`
    pub fn conductivity(&self) -> Float {
        match self {
            Self::GypsumBoard => 0.22,
            Self::Plywood => 0.16,
            Self::CementBoard => 0.17,
            Self::Concrete => 1.6,
            Self::Insulation => 0.045,
        }
    }

    /// The volumetric heat capacity (i.e., density times
    /// specific heat), in `J/m3.K`
    pub fn volumetric_heat_capacity(&self) -> Float {
        match self {
            Self::GypsumBoard => 830e3,
            Self::Plywood => 720e3,
            Self::CementBoard => 1300e3,
            Self::Concrete => 2000e3,
            Self::Insulation => 13.8e3,
        }
    }

    /// The thermal resistance of a slice of this material, in `m2.K/W`
    pub fn resistance(&self, thickness: Float) -> Float {
        thickness / self.conductivity()
    }

    /// Builds a [`Layer`] of a certain thickness (in `m`)
    pub fn layer(&self, thickness: Float) -> Layer {
        Layer::new(
            self.name(),
            self.resistance(thickness),
            self.volumetric_heat_capacity() * thickness,
        )
    }
}

/// A non-ventilated air gap. It has no heat capacity.
pub fn air_gap() -> Layer {
    Layer::new("air_gap", AIR_GAP_RESISTANCE, 0.0)
}

/***********/
/* TESTING */
/***********/

#[cfg(test)]
mod testing {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_layer() {
        let l = Material::GypsumBoard.layer(0.01);
        assert_eq!(l.name, "gypsum_board");
        assert_relative_eq!(l.thermal_resistance, 0.01 / 0.22, max_relative = 1e-12);
        assert_relative_eq!(l.thermal_capacity, 8300.0, max_relative = 1e-12);

        let l = Material::Concrete.layer(0.09);
        assert_relative_eq!(l.thermal_resistance, 0.05625, max_relative = 1e-12);
        assert_relative_eq!(l.thermal_capacity, 180000.0, max_relative = 1e-12);
    }

    #[test]
    fn test_air_gap() {
        let l = air_gap();
        assert_eq!(l.thermal_resistance, AIR_GAP_RESISTANCE);
        assert_eq!(l.thermal_capacity, 0.0);
        assert!(!l.is_empty());
    }
}
