//! Host-side runtime pieces: clock injection, tick scheduling, and viewport
//! classification off a resize signal.

pub mod clock;
pub mod ticker;
pub mod viewport;

pub use clock::{Clock, FixedClock, SystemClock};
pub use ticker::{CountdownDriver, CountdownParams, Ticker};
pub use viewport::{ManualResizeSource, ResizeSource, ResizeSubscription, ViewportWatcher};
