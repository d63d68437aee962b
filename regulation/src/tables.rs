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

use crate::{Float, RegionClass};
use model::SurfaceCategory;

/// The solar heat gain coefficient of an opaque element is
/// this factor times its U-value
pub const OPAQUE_ETA_FACTOR: Float = 0.034;

/// The largest solar heat gain coefficient a window can have
pub const MAX_WINDOW_ETA: Float = 0.88;

/// The categories in which the envelope is divided for
/// calculating its average U-value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnvelopeCategory {
    /// Exterior walls
    Wall,
    /// Ceilings and roofs
    Ceiling,
    /// Floors
    Floor,
    /// Exterior doors
    Door,
    /// Windows
    Window,
}

impl EnvelopeCategory {
    /// All categories
    pub const ALL: [EnvelopeCategory; 5] = [
        EnvelopeCategory::Wall,
        EnvelopeCategory::Ceiling,
        EnvelopeCategory::Floor,
        EnvelopeCategory::Door,
        EnvelopeCategory::Window,
    ];

    /// The category a surface counts as. Elements that
    /// do not separate a room from the outdoors (partitions,
    /// slabs between storeys and earthen floors) return `None`.
    pub fn from_surface(category: SurfaceCategory) -> Option<Self> {
        match category {
            SurfaceCategory::Wall => Some(Self::Wall),
            SurfaceCategory::Ceiling | SurfaceCategory::Roof => Some(Self::Ceiling),
            SurfaceCategory::Floor => Some(Self::Floor),
            SurfaceCategory::Door => Some(Self::Door),
            SurfaceCategory::Window => Some(Self::Window),
            SurfaceCategory::Partition | SurfaceCategory::SecondFloor | SurfaceCategory::Ground => {
                None
            }
        }
    }
}

impl std::fmt::Display for EnvelopeCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Wall => "wall",
            Self::Ceiling => "ceiling",
            Self::Floor => "floor",
            Self::Door => "door",
            Self::Window => "window",
        };
        write!(f, "{}", s)
    }
}

/// One value per [`EnvelopeCategory`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryValues {
    /// The value for walls
    pub wall: Float,
    /// The value for ceilings (and roofs)
    pub ceiling: Float,
    /// The value for floors
    pub floor: Float,
    /// The value for doors
    pub door: Float,
    /// The value for windows
    pub window: Float,
}

impl CategoryValues {
    /// Borrows the value of a category
    pub fn get(&self, category: EnvelopeCategory) -> Float {
        match category {
            EnvelopeCategory::Wall => self.wall,
            EnvelopeCategory::Ceiling => self.ceiling,
            EnvelopeCategory::Floor => self.floor,
            EnvelopeCategory::Door => self.door,
            EnvelopeCategory::Window => self.window,
        }
    }

    /// Builds a new set of values, calling `f` on each category
    pub fn from_fn<F: FnMut(EnvelopeCategory) -> Float>(mut f: F) -> Self {
        Self {
            wall: f(EnvelopeCategory::Wall),
            ceiling: f(EnvelopeCategory::Ceiling),
            floor: f(EnvelopeCategory::Floor),
            door: f(EnvelopeCategory::Door),
            window: f(EnvelopeCategory::Window),
        }
    }
}

/// The U-values, in `W/m2.K`, that the categories would have in a
/// building meeting the reference envelope of its region
pub fn baseline_u_values(class: RegionClass, is_storage: bool) -> CategoryValues {
    match class {
        RegionClass::Cold => CategoryValues {
            wall: 0.35,
            ceiling: 0.17,
            floor: if is_storage { 0.27 } else { 0.34 },
            door: 2.33,
            window: 2.33,
        },
        RegionClass::Warm => CategoryValues {
            wall: 0.53,
            ceiling: 0.24,
            floor: if is_storage { 0.34 } else { 0.48 },
            door: 4.65,
            window: 4.65,
        },
    }
}

/// The largest U-value, in `W/m2.K`, each category can be given
pub fn upper_bounds(is_storage: bool) -> CategoryValues {
    CategoryValues {
        wall: 2.24,
        ceiling: 4.48,
        floor: if is_storage { 2.32 } else { 2.67 },
        door: 6.51,
        window: 6.51,
    }
}
