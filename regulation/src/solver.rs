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

use crate::azimuth::solar_direction;
use crate::tables::{baseline_u_values, upper_bounds, MAX_WINDOW_ETA, OPAQUE_ETA_FACTOR};
use crate::{
    AzimuthalCoefficients, CategoryValues, EnvelopeCategory, Float, RegionClass,
    SolarCorrectionFactors,
};
use model::{print_warning, ConversionError, EnvelopeTargets, Season, Surface};

const MODULE_NAME: &str = "Envelope Target Solver";

/// Relative difference between the declared envelope area and the
/// area of the surfaces table above which a warning is issued
const AREA_MISMATCH_TOLERANCE: Float = 0.01;

/// The values that all surfaces of a category share.
///
/// These are calculated once per building.
#[derive(Debug, Clone, PartialEq)]
pub struct RepresentativeValues {
    /// The U-value of each category, in `W/m2.K`. The window
    /// value already includes the window correction.
    pub u_values: CategoryValues,

    /// The factor by which the baseline U-values were scaled
    pub f_u: Float,

    /// The solar heat gain coefficient of windows during
    /// the cooling season
    pub eta_window_cooling: Float,

    /// The solar heat gain coefficient of windows during
    /// the heating season
    pub eta_window_heating: Float,

    /// The factor by which the solar heat gain coefficients of
    /// the windows were divided. Values below 1 mean no
    /// correction was needed.
    pub f_eta: Float,

    /// The factor by which the area of every window is multiplied.
    /// This is 1 unless the window correction was applied.
    pub window_area_factor: Float,
}

impl RepresentativeValues {
    /// The solar heat gain coefficient of an opaque category
    pub fn opaque_eta(&self, category: EnvelopeCategory) -> Float {
        OPAQUE_ETA_FACTOR * self.u_values.get(category)
    }

    /// The solar heat gain coefficient given to the windows of the
    /// envelope. Only one value can be written, so the cooling
    /// season one is used.
    pub fn eta_window(&self) -> Float {
        self.eta_window_cooling
    }

    /// The solar heat gain coefficient of windows during `season`
    pub fn eta_window_for(&self, season: Season) -> Float {
        match season {
            Season::Cooling => self.eta_window_cooling,
            Season::Heating => self.eta_window_heating,
        }
    }
}

/// A row of the surfaces table that counts towards the envelope
struct EnvelopeSurface<'a> {
    surface: &'a Surface,
    category: EnvelopeCategory,
}

/// Calculates the representative U-values and solar heat gain
/// coefficients of a building.
///
/// The baseline U-values of the region are scaled by a single
/// factor so that the envelope reaches `ua_target`, clamping each
/// category at its upper bound. The opaque elements then
/// contribute their share of solar gains, and the windows are
/// given whatever solar heat gain coefficient is needed for
/// reaching the target of each season.
///
/// If that coefficient exceeds what a window can have, both
/// seasonal values are scaled down, and the window areas scaled up
/// (and their U-value down) by the same factor. This keeps the
/// solar gains and heat losses through windows unchanged.
pub fn solve(
    targets: &EnvelopeTargets,
    surfaces: &[Surface],
    azimuth: &AzimuthalCoefficients,
    correction: &SolarCorrectionFactors,
) -> Result<RepresentativeValues, ConversionError> {
    let class = RegionClass::try_from(targets.region)?;
    if targets.ua_target <= 0.0 {
        return Err(ConversionError::NonPositiveTarget {
            name: "ua_target",
            value: targets.ua_target,
        });
    }
    if targets.a_env <= 0.0 {
        return Err(ConversionError::NonPositiveTarget {
            name: "a_env",
            value: targets.a_env,
        });
    }

    let envelope: Vec<EnvelopeSurface> = surfaces
        .iter()
        .filter(|s| s.is_emitted())
        .filter_map(|surface| {
            EnvelopeCategory::from_surface(surface.category)
                .map(|category| EnvelopeSurface { surface, category })
        })
        .collect();

    let tabulated_area: Float = envelope.iter().map(|e| e.surface.area).sum();
    if (tabulated_area - targets.a_env).abs() > AREA_MISMATCH_TOLERANCE * targets.a_env {
        print_warning(
            MODULE_NAME,
            format!(
                "The surfaces add up to {:.2} m2, but the envelope area is declared to be {:.2} m2",
                tabulated_area, targets.a_env
            ),
        );
    }

    // Heat losses
    let baseline = baseline_u_values(class, targets.is_storage);
    let q_baseline: Float = envelope
        .iter()
        .map(|e| e.surface.area * e.surface.temp_diff_coef * baseline.get(e.category))
        .sum();
    if q_baseline <= 0.0 {
        return Err(ConversionError::ZeroBaselineHeatLoss);
    }
    let f_u = targets.ua_target * targets.a_env / q_baseline;

    let bounds = upper_bounds(targets.is_storage);
    let mut u_values = CategoryValues::from_fn(|c| {
        let scaled = f_u * baseline.get(c);
        let bound = bounds.get(c);
        if scaled > bound {
            print_warning(
                MODULE_NAME,
                format!(
                    "The U-value of the {} category ({:.3} W/m2K) was clamped at {} W/m2K",
                    c, scaled, bound
                ),
            );
            bound
        } else {
            scaled
        }
    });

    // Solar gains
    let mut etas = [0.0; 2];
    for (season, eta) in Season::ALL.iter().zip(etas.iter_mut()) {
        *eta = window_eta(*season, targets, &envelope, &u_values, azimuth, correction)?;
    }
    let [mut eta_window_cooling, mut eta_window_heating] = etas;

    let f_eta = eta_window_cooling.max(eta_window_heating) / MAX_WINDOW_ETA;
    let mut window_area_factor = 1.0;
    if f_eta > 1.0 {
        print_warning(
            MODULE_NAME,
            format!(
                "Windows would need a solar heat gain coefficient of {:.3}; window areas are multiplied by {:.3} instead",
                f_eta * MAX_WINDOW_ETA,
                f_eta
            ),
        );
        eta_window_cooling /= f_eta;
        eta_window_heating /= f_eta;
        u_values.window /= f_eta;
        window_area_factor = f_eta;
    }

    Ok(RepresentativeValues {
        u_values,
        f_u,
        eta_window_cooling,
        eta_window_heating,
        f_eta,
        window_area_factor,
    })
}

/// The solar heat gain coefficient windows need for reaching
/// the solar gain target of a season
fn window_eta(
    season: Season,
    targets: &EnvelopeTargets,
    envelope: &[EnvelopeSurface],
    u_values: &CategoryValues,
    azimuth: &AzimuthalCoefficients,
    correction: &SolarCorrectionFactors,
) -> Result<Float, ConversionError> {
    let m_target = targets.eta_target(season) * targets.a_env;

    let mut opaque = 0.0;
    let mut denominator = 0.0;
    let mut correction_factor = None;
    for e in envelope {
        let nu = match solar_direction(e.surface.direction) {
            Some(d) => azimuth.get(season, d, targets.region)?,
            None => continue,
        };
        if e.category == EnvelopeCategory::Window {
            let f_sol = match correction_factor {
                Some(f) => f,
                None => {
                    let f = correction.get(targets.region, season)?;
                    correction_factor = Some(f);
                    f
                }
            };
            denominator += e.surface.area * nu * f_sol;
        } else {
            opaque += OPAQUE_ETA_FACTOR * u_values.get(e.category) * e.surface.area * nu;
        }
    }

    let contribution = (m_target - opaque).max(0.0);
    if denominator > 0.0 {
        Ok(contribution / denominator)
    } else if contribution > 0.0 {
        Err(ConversionError::NoWindowsForSolarTarget {
            season,
            required: contribution,
        })
    } else {
        Ok(0.0)
    }
}

/***********/
/* TESTING */
/***********/
