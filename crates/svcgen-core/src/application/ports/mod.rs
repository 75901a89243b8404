//! Application ports (traits) for external dependencies.

pub mod output;

pub use output::{Filesystem, InterfaceSource, UnitRenderer};
