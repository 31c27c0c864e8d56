//! Crux Clock Infrastructure
//!
//! Time sources for stamping history snapshots:
//!
//! - [`SystemClock`] for live sessions (wall-clock time)
//! - [`FixedClock`] for tests (only advances when told to)
//!
//! ## Usage
//!
//! ```ignore
//! use crux_clock::{FixedClock, SystemClock};
//! use chrono::Duration;
//!
//! let clock = FixedClock::at_epoch();
//! clock.advance(Duration::seconds(30));
//! ```

mod fixed;
mod system;

pub use fixed::FixedClock;
pub use system::SystemClock;

// Re-export the Clock trait for convenience
pub use crux_ports::Clock;
