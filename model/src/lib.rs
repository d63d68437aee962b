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

//! This crate contains the data structures utilized for describing
//! the envelope of a building as it is handed to the thermal-load
//! simulation engine.
//!
//! # Introduction
//!
//! There are two groups of objects in here. The first one is the
//! *input*: the tables (rooms, surfaces, azimuthal coefficients and so on)
//! that describe a building in terms of areas, orientations and targets.
//! The second one is the *output*: an [`EnvelopeAssembly`], which contains
//! the rooms and every boundary surface with its layers, exposure
//! attributes and identifiers.
//!
//! Everything that happens in between (i.e., deriving U-values, solving
//! insulation thicknesses and mirroring interior walls) lives in the
//! `heat` and `regulation` crates.
//!
//! # Example
//!
//! ```
//! use model::{Layer, reversed_layers};
//!
//! let layers = vec![
//!     Layer::new("gypsum_board", 0.045, 8300.),
//!     Layer::new("insulation", 2.1, 1300.),
//! ];
//!
//! // Seen from the other side, the construction is the same
//! // set of layers in the opposite order
//! let rear = reversed_layers(&layers);
//! assert_eq!(rear[0].name, "insulation");
//! assert_eq!(reversed_layers(&rear), layers);
//! ```

/// The kind of Floating point number used in the
/// library... the `"float"` feature means it becomes `f32`
/// and `f64` is used otherwise.
#[cfg(feature = "float")]
pub type Float = f32;

/// The kind of Floating point number used in the
/// library... the `"float"` feature means it becomes `f32`
/// and `f64` is used otherwise.
#[cfg(not(feature = "float"))]
pub type Float = f64;

/// The direction (i.e., orientation) a surface faces
mod direction;
pub use direction::Direction;

/// A single material slice of a construction
mod layer;
pub use layer::{reversed_layers, Layer};

/// The boundary surfaces, as handed to the simulation engine
mod boundary;
pub use boundary::{
    Boundary, ExternalGeneralPart, ExternalOpaquePart, ExternalTransparentPart, Ground, Internal,
    SolarShadingPart,
};

/// The rooms of the building
mod room;
pub use room::{Furniture, Room, RoomRow, RoomSchedule, RoomVentilation};

/// The building-wide blocks of the assembly (infiltration, ventilation routes...)
mod building;
pub use building::{
    Building, BuildingRow, CValueEstimate, Common, Equipments, Infiltration, InfiltrationMethod,
    InsidePressure, MechanicalVentilation,
};

/// The tables describing a building before conversion
pub mod input;
pub use input::{
    AzimuthalCoefficientEntry, ConversionInput, EnvelopeTargets, RearSide, Season,
    ShadingInput, SolarCorrectionEntry, Surface, SurfaceCategory, SurfaceRow, WindowDetails,
};

/// The final structure
mod envelope;
pub use envelope::EnvelopeAssembly;

/// The errors that abort a conversion
pub mod error;
pub use error::ConversionError;

/// For printing warning and error messages to the user
pub mod error_msgs;
pub use error_msgs::{print_error, print_warning};
