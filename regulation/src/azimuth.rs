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
use model::input::{AzimuthalCoefficientEntry, SolarCorrectionEntry};
use model::{ConversionError, Direction, Season};
use std::collections::HashMap;

/// The direction under which a surface facing `direction` is looked
/// up in the azimuthal coefficient table. Surfaces facing the
/// ground receive no sun, so they return `None`.
pub fn solar_direction(direction: Direction) -> Option<Direction> {
    match direction {
        Direction::Bottom | Direction::Downward | Direction::Horizontal => None,
        Direction::Top | Direction::Upward => Some(Direction::Top),
        d => Some(d),
    }
}

/// The azimuthal coefficients (i.e., how much sun a surface
/// receives depending on its orientation), by season,
/// direction and region
#[derive(Debug, Clone, Default)]
pub struct AzimuthalCoefficients {
    table: HashMap<(Season, Direction, u8), Float>,
}

impl AzimuthalCoefficients {
    /// Builds the table from its entries. Repeated entries
    /// overwrite earlier ones.
    pub fn new(entries: &[AzimuthalCoefficientEntry]) -> Self {
        let table = entries
            .iter()
            .map(|e| ((e.season, e.direction, e.region), e.value))
            .collect();
        Self { table }
    }

    /// Looks up a coefficient
    pub fn get(
        &self,
        season: Season,
        direction: Direction,
        region: u8,
    ) -> Result<Float, ConversionError> {
        self.table
            .get(&(season, direction, region))
            .copied()
            .ok_or(ConversionError::MissingAzimuthalCoefficient {
                season,
                direction,
                region,
            })
    }
}

/// The factors correcting the solar gains through
/// windows, by region and season
#[derive(Debug, Clone, Default)]
pub struct SolarCorrectionFactors {
    table: HashMap<(u8, Season), Float>,
}

impl SolarCorrectionFactors {
    /// Builds the table from its entries. Repeated entries
    /// overwrite earlier ones.
    pub fn new(entries: &[SolarCorrectionEntry]) -> Self {
        let table = entries
            .iter()
            .map(|e| ((e.region, e.season), e.value))
            .collect();
        Self { table }
    }

    /// Looks up a correction factor
    pub fn get(&self, region: u8, season: Season) -> Result<Float, ConversionError> {
        self.table
            .get(&(region, season))
            .copied()
            .ok_or(ConversionError::MissingSolarCorrectionFactor { region, season })
    }
}
