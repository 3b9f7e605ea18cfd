//! Stage generation settings.

use crate::error::{Error, Result};
use nalgebra::Vector3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Parameters for generating a stage.
///
/// Generation itself never fails on odd settings; it produces fewer items
/// when the geometry does not allow more. [`GenerationSettings::validate`]
/// is for the configuration layer that loads these values.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GenerationSettings {
    /// Smallest container size per axis.
    pub container_size_min: Vector3<f64>,

    /// Largest container size per axis.
    pub container_size_max: Vector3<f64>,

    /// Fewest items to aim for (inclusive).
    pub item_count_min: usize,

    /// Most items to aim for (inclusive).
    pub item_count_max: usize,

    /// No generated item has an edge shorter than this.
    pub min_edge_size: f64,

    /// Shortest time limit in seconds.
    pub time_limit_min_secs: f64,

    /// Longest time limit in seconds.
    pub time_limit_max_secs: f64,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            container_size_min: Vector3::new(3.0, 3.0, 3.0),
            container_size_max: Vector3::new(8.0, 8.0, 8.0),
            item_count_min: 5,
            item_count_max: 10,
            min_edge_size: 0.5,
            time_limit_min_secs: 30.0,
            time_limit_max_secs: 120.0,
        }
    }
}

impl GenerationSettings {
    /// Creates settings with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the container size range.
    pub fn with_container_size(mut self, min: Vector3<f64>, max: Vector3<f64>) -> Self {
        self.container_size_min = min;
        self.container_size_max = max;
        self
    }

    /// Uses one fixed container size.
    pub fn with_fixed_container(self, size: Vector3<f64>) -> Self {
        self.with_container_size(size, size)
    }

    /// Sets the item count range.
    pub fn with_item_count(mut self, min: usize, max: usize) -> Self {
        self.item_count_min = min;
        self.item_count_max = max;
        self
    }

    /// Sets the minimum edge size.
    pub fn with_min_edge_size(mut self, size: f64) -> Self {
        self.min_edge_size = size;
        self
    }

    /// Sets the time limit range in seconds.
    pub fn with_time_limit(mut self, min_secs: f64, max_secs: f64) -> Self {
        self.time_limit_min_secs = min_secs;
        self.time_limit_max_secs = max_secs;
        self
    }

    /// Checks that every range is ordered and every size is positive.
    pub fn validate(&self) -> Result<()> {
        for axis in 0..3 {
            let (min, max) = (self.container_size_min[axis], self.container_size_max[axis]);
            if min <= 0.0 {
                return Err(Error::ConfigError(format!(
                    "Container size minimum on axis {axis} must be positive, got {min}"
                )));
            }
            if min > max {
                return Err(Error::ConfigError(format!(
                    "Container size range on axis {axis} is inverted: {min} > {max}"
                )));
            }
        }

        if self.item_count_min == 0 {
            return Err(Error::ConfigError("Item count minimum must be at least 1".into()));
        }
        if self.item_count_min > self.item_count_max {
            return Err(Error::ConfigError(format!(
                "Item count range is inverted: {} > {}",
                self.item_count_min, self.item_count_max
            )));
        }

        if self.min_edge_size <= 0.0 {
            return Err(Error::ConfigError(format!(
                "Minimum edge size must be positive, got {}",
                self.min_edge_size
            )));
        }

        if self.time_limit_min_secs < 0.0 || self.time_limit_min_secs > self.time_limit_max_secs {
            return Err(Error::ConfigError(format!(
                "Time limit range is invalid: {} .. {}",
                self.time_limit_min_secs, self.time_limit_max_secs
            )));
        }

        Ok(())
    }
}
