//! # Boxfill Engine
//!
//! Stage generation and packing verification for the box-fill puzzle.
//!
//! - [`RecursiveSplitGenerator`] cuts a container into items that are
//!   guaranteed to fill it exactly.
//! - [`PlacementTracker`] holds the items placed during one round.
//! - [`is_stage_clear`] decides whether an arrangement fills the container.
//! - [`snap`] aligns a dragged item with nearby walls and faces.

pub mod clear;
pub mod recursive_split;
pub mod snap;
pub mod tracker;

// Re-exports
pub use boxfill_core::{
    Error, GenerationSettings, ItemData, ItemId, PlacedItem, Result, RotationState, StageData,
    StageGenerator,
};
pub use clear::{
    check_stage, is_stage_clear, ClearFailure, ClearReport, ClearTransition, ClearWatcher,
};
pub use recursive_split::{GeneratedStage, RecursiveSplitGenerator, SolutionPlacement};
pub use snap::{center_to_corner, corner_to_center, drop_height, snap, DEFAULT_SNAP_THRESHOLD};
pub use tracker::{PlacementEvent, PlacementTracker, RejectReason, DEFAULT_CLEAR_TOLERANCE};
