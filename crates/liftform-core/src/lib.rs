//! # Liftform Core
//!
//! Core types and geometry utilities for the liftform barbell technique
//! analysis system.
//!
//! This crate provides the foundational building blocks used throughout the
//! liftform ecosystem, including:
//!
//! - **Core Data Types**: [`PoseFrame`], [`PoseSeries`], [`Point2`],
//!   [`Joint`], and [`LiftType`] for representing tracked body joints over
//!   time and the lift being performed.
//!
//! - **Error Types**: Input validation errors via the [`error`] module.
//!
//! - **Geometry**: Joint-angle and smoothing helpers in the [`geometry`]
//!   module that stay finite on degenerate input.
//!
//! Coordinates are unitless with the y axis growing **upward**: a higher
//! y value means a physically higher joint. Producers working in image
//! space (y down) must flip the axis before building a [`PoseSeries`].
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization via serde
//!
//! ## Example
//!
//! ```rust
//! use liftform_core::{Joint, Point2, PoseFrame, PoseSeries};
//!
//! let mut frame = PoseFrame::new(0, 0.0);
//! frame.set_joint(Joint::Hip, Point2::new(0.5, 0.47));
//! frame.set_joint(Joint::Knee, Point2::new(0.55, 0.33));
//!
//! let series = PoseSeries::new(30.0, vec![frame]).unwrap();
//! assert_eq!(series.len(), 1);
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod geometry;
pub mod types;

// Re-export commonly used types at the crate root
pub use error::{CoreError, CoreResult};
pub use types::{
    // Pose types
    Joint, Point2, PoseFrame, PoseSeries,
    // Lift classification
    LiftType,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Number of tracked body joints
pub const JOINT_COUNT: usize = 6;

/// Prelude module for convenient imports.
///
/// Convenient re-exports of commonly used types.
///
/// ```rust
/// use liftform_core::prelude::*;
/// ```
pub mod prelude {

    pub use crate::error::{CoreError, CoreResult};
    pub use crate::types::{Joint, LiftType, Point2, PoseFrame, PoseSeries};
}
