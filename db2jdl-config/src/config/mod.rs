//! Configuration model: raw input binding, validation and the immutable settings

pub mod defaults;
mod handling;
mod raw;
mod settings;

pub use handling::*;
pub use raw::*;
pub use settings::*;
