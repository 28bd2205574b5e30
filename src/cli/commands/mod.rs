//! One file per subcommand keeps `main` a thin dispatcher.

mod demo;
mod inspect;
mod log;

pub use demo::cmd_demo;
pub use inspect::{cmd_path, cmd_slug};
pub use log::cmd_log;
