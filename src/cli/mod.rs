pub mod app;

pub use app::{Cli, Command};
