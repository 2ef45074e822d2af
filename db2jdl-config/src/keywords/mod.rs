//! Reserved-keyword resources

mod loader;
mod locator;

pub use loader::*;
pub use locator::*;
