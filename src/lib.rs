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

//! The main `envelope` crate, putting every other development together.
//!
//! It takes the tables describing a building (its rooms, its surfaces
//! and its whole-building targets) and produces the boundary surfaces
//! a thermal load simulation engine needs, with every construction
//! fully described by its layers.
//!
//! ```
//! use envelope::convert;
//! use test_models::{single_room, SingleRoomOptions};
//!
//! let input = single_room(&SingleRoomOptions::default());
//! let conversion = convert(&input).unwrap();
//! assert_eq!(conversion.assembly.boundaries.len(), 2);
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

/// Places every surface in the envelope
pub mod assembly;
pub use assembly::assemble;

/// A module with some useful functions to run a conversion
pub mod run_conversion;
pub use run_conversion::{convert, Conversion, ConvertOptions};

// Re-exports
pub use heat;
pub use model;
pub use model::*;
pub use regulation;
