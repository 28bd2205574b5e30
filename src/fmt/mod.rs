//! Record rendering: the event model, structured fields, level colors, and the
//! shared line layout used by the console and file sinks.

mod color;
mod event;
mod fields;
mod render;

pub use color::{Color, colorize};
pub use event::{CallSite, LogEvent};
pub use fields::{Fields, UNPRINTABLE};
pub use render::{LEVEL_WIDTH, TIMESTAMP_FORMAT, render, render_console, render_file};
