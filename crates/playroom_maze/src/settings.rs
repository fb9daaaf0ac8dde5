//! Generation parameters.

use super::error::MazeError;
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// Smallest accepted maze size.
pub const MIN_SIZE: usize = 5;

/// Size and collectible count for one maze.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Getters, Serialize, Deserialize, new)]
pub struct MazeSettings {
    /// Side length; odd and at least [`MIN_SIZE`].
    size: usize,
    /// Collectibles to place, capped by the reachable cells available.
    collectibles: usize,
}

impl MazeSettings {
    /// Checks the size constraint.
    pub fn validate(&self) -> Result<(), MazeError> {
        if self.size < MIN_SIZE || self.size % 2 == 0 {
            return Err(MazeError::InvalidConfiguration { size: self.size });
        }
        Ok(())
    }
}
