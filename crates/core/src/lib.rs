//! # Boxfill Core
//!
//! Core types and abstractions for the box-fill puzzle engine.
//!
//! A stage is a rectangular container plus a set of cuboid items that can be
//! reassembled to fill it exactly. This crate holds the value types shared by
//! generation, placement tracking, clear checking and snapping.
//!
//! ## Core Components
//!
//! - **Rotation algebra**: [`RotationState`], quarter turns about three axes
//! - **Items**: [`ItemData`] definitions and [`PlacedItem`] placements
//! - **Stages**: [`StageData`] and [`GenerationSettings`]
//! - **Generator trait**: [`StageGenerator`], the capability every generation
//!   strategy implements
//! - **Bounds**: [`AABB3D`] axis-aligned box arithmetic
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod error;
pub mod generator;
pub mod item;
pub mod rotation;
pub mod settings;
pub mod stage;
pub mod transform;

// Re-exports
pub use error::{Error, Result};
pub use generator::StageGenerator;
pub use item::{Color, ItemData, ItemId, PlacedItem};
pub use nalgebra::Vector3;
pub use rotation::RotationState;
pub use settings::GenerationSettings;
pub use stage::StageData;
pub use transform::AABB3D;
