//! Source-interface extraction adapters.

mod go;

pub use go::GoInterfaceSource;
