//! Without rotation a long-running process grows one log file forever. Segments are
//! retired at a daily wall-clock boundary and only the most recent ones are kept.

mod clock;
mod policy;
mod rolling;

pub use clock::{Clock, ManualClock, SystemClock, Zone};
pub use policy::{DEFAULT_RETENTION, RotationPolicy};
pub use rolling::RollingFile;
