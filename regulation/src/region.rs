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

use model::ConversionError;

/// The regions go from 1 (coldest) to 8 (warmest)
pub const REGIONS: std::ops::RangeInclusive<u8> = 1..=8;

/// The last region considered cold
const LAST_COLD_REGION: u8 = 3;

/// The group of regions that share baseline values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegionClass {
    /// Regions 1 to 3
    Cold,
    /// Regions 4 to 8
    Warm,
}

impl TryFrom<u8> for RegionClass {
    type Error = ConversionError;

    fn try_from(region: u8) -> Result<Self, Self::Error> {
        if !REGIONS.contains(&region) {
            return Err(ConversionError::InvalidRegion(region));
        }
        if region <= LAST_COLD_REGION {
            Ok(Self::Cold)
        } else {
            Ok(Self::Warm)
        }
    }
}

#[cfg(test)]
mod testing {
    use super::*;

    #[test]
    fn test_classes() {
        assert_eq!(RegionClass::try_from(1), Ok(RegionClass::Cold));
        assert_eq!(RegionClass::try_from(3), Ok(RegionClass::Cold));
        assert_eq!(RegionClass::try_from(4), Ok(RegionClass::Warm));
        assert_eq!(RegionClass::try_from(8), Ok(RegionClass::Warm));
        assert_eq!(
            RegionClass::try_from(0),
            Err(ConversionError::InvalidRegion(0))
        );
        assert_eq!(
            RegionClass::try_from(9),
            Err(ConversionError::InvalidRegion(9))
        );
    }
}
