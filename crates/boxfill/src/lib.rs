//! # Boxfill
//!
//! Engine for a 3D box-fill puzzle: a rectangular container is cut into
//! cuboid pieces, and the player puts them back so they fill it exactly.
//!
//! This crate provides:
//! - **Stage generation**: recursive splitting that is solvable by construction
//! - **Placement tracking**: the live set of placed pieces for one round
//! - **Clear checking**: count, containment and overlap verification
//! - **Snapping**: face alignment for dragged pieces
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use boxfill::engine::{PlacementTracker, RecursiveSplitGenerator};
//! use boxfill::core::{GenerationSettings, RotationState, StageGenerator};
//! use rand::SeedableRng;
//! use std::sync::Arc;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(7);
//! let stage = RecursiveSplitGenerator::new().generate(&GenerationSettings::default(), &mut rng);
//!
//! let stage = Arc::new(stage);
//! let mut tracker = PlacementTracker::new(stage.clone());
//! tracker.place(&stage.items()[0], position, RotationState::identity());
//! if tracker.is_clear() { /* round won */ }
//! ```
//!
//! ## Feature Flags
//!
//! - `engine` (default): generation, tracking, clear checking and snapping
//! - `serde`: Serialization support

/// Core value types and the generator trait.
pub use boxfill_core as core;

/// Generation and verification algorithms.
#[cfg(feature = "engine")]
pub use boxfill_engine as engine;

// Re-export commonly used types at root level
pub use boxfill_core::{
    Error, GenerationSettings, ItemData, PlacedItem, Result, RotationState, StageData,
    StageGenerator,
};
