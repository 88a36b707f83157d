use crate::domain::model::{Building, Skyline};
use crate::utils::error::{Result, SkylineError};
use std::fmt;

/// The single-building skylines the partitioner starts from.
///
/// Only constructible from a non-empty list, so the recursion never sees an
/// empty slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseSkylines {
    skylines: Vec<Skyline>,
}

impl BaseSkylines {
    pub fn from_buildings(buildings: &[Building]) -> Result<Self> {
        Self::from_skylines(buildings.iter().map(Skyline::from_building).collect())
    }

    pub fn from_skylines(skylines: Vec<Skyline>) -> Result<Self> {
        if skylines.is_empty() {
            return Err(SkylineError::EmptyInput);
        }
        Ok(Self { skylines })
    }

    pub fn as_slice(&self) -> &[Skyline] {
        &self.skylines
    }

    pub fn len(&self) -> usize {
        self.skylines.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

/// Renders a run of skylines the way trace blocks list them:
/// `[(1,3)(5,0), (2,4)(6,0)]`.
pub struct SkylineList<'a>(pub &'a [Skyline]);

impl fmt::Display for SkylineList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, skyline) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", skyline)?;
        }
        write!(f, "]")
    }
}
