//! Session layer for the liftform analysis engine.
//!
//! Bridges capture sources to the pure analysis pipeline:
//!
//! - **Samples**: decode recorded JSON pose samples into a
//!   [`PoseSeries`](liftform_core::PoseSeries)
//! - **Live sessions**: buffer frames over a sliding window and re-run
//!   the analysis as new frames arrive
//!
//! # Example
//!
//! ```rust
//! use liftform_core::LiftType;
//! use liftform_session::LiveSession;
//!
//! let session = LiveSession::with_defaults(LiftType::Squat);
//!
//! // Nothing buffered yet, so there is nothing to analyze
//! assert!(session.analyze_recent().is_none());
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod sample;
pub mod session;

pub use error::{SessionError, SessionResult};
pub use sample::{series_from_file, series_from_json, DEFAULT_FPS};
pub use session::{estimate_fps, feedback_message, LiveSession, SessionConfig, SessionId};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
