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

//! The constructions of the envelope, from their U-values to their layers.
//!
//! A construction is built in three steps:
//!
//! 1. A target U-value is given (see the `regulation` crate)
//! 2. An archetype in [`construction`] stacks its known [`materials`] and
//!    asks the [`layer_solver`] how much insulation is needed to reach the target
//! 3. The resulting template is placed in the building, either as an
//!    exterior surface or, through [`mirror`], as the two faces of an
//!    interior element.
//!
//! ```
//! use heat::construction::exterior_wall;
//!
//! let wall = exterior_wall(0.53);
//! let names : Vec<&str> = wall.layers.iter().map(|l| l.name.as_str()).collect();
//! assert_eq!(names, vec!["gypsum_board", "air_gap", "insulation", "plywood", "cement_board"]);
//! ```

/// The kind of Floating point number used in the
/// library... the `"float"` feature means it becomes `f32`
/// and `f64` is used otherwise.
#[cfg(feature = "float")]
type Float = f32;

#[cfg(not(feature = "float"))]
type Float = f64;

/// The materials of which constructions are made
pub mod materials;

/// Back-solves insulation from a target U-value
pub mod layer_solver;

/// The surface heat transfer properties of each face
pub mod film;

/// The construction archetypes
pub mod construction;

/// Builds the two faces of interior elements
pub mod mirror;

pub use construction::{Archetype, FenestrationConstruction, LayeredConstruction, Placement};
pub use film::FaceAttributes;
pub use layer_solver::{solve_insulation, InsulationSolution, SurfaceResistances};
pub use mirror::{make_pair, mirror};
