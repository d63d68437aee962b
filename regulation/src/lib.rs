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

#![deny(missing_docs)]

//! Turns whole-building targets into representative U-values and
//! solar heat gain coefficients.
//!
//! The envelope is described by a handful of categories (walls,
//! ceilings, floors, doors and windows). Each category starts from
//! a baseline U-value that depends on the climate [`region`]. All of
//! them are then scaled together until the envelope reaches the
//! target average U-value, never exceeding the upper bounds in
//! [`tables`]. Once the U-values are known, the solar heat gain
//! coefficient of the windows is chosen so that the building
//! reaches its solar gain targets, given the coefficients in
//! [`azimuth`].

/// The kind of Floating point number used in the
/// library... the `"float"` feature means it becomes `f32`
/// and `f64` is used otherwise.
#[cfg(feature = "float")]
type Float = f32;

#[cfg(not(feature = "float"))]
type Float = f64;

/// Climate regions
pub mod region;
pub use region::RegionClass;

/// Baseline U-values and their upper bounds
pub mod tables;
pub use tables::{CategoryValues, EnvelopeCategory};

/// Azimuthal coefficients and solar gain correction factors
pub mod azimuth;
pub use azimuth::{AzimuthalCoefficients, SolarCorrectionFactors};

/// The envelope target solver
pub mod solver;
pub use solver::{solve, RepresentativeValues};
