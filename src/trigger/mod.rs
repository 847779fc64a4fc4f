//! Request triggering for interactive drawing surfaces.
//!
//! Pointer events arrive faster than a recognition completes. Requests are
//! coalesced through a single-slot queue where the most recent drawing wins
//! and is released after a quiet period; intermediate states are dropped.
//! Nothing in flight is ever cancelled, since each request is synchronous.

pub mod debounce;
pub mod stroke;

pub use debounce::{Debouncer, DEFAULT_QUIET_PERIOD};
pub use stroke::{PointerEvent, StrokeTracker};
