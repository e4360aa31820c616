pub mod ports;

pub mod locator;
pub use locator::{ConfigLocator, ErrorPolicy, Presence, SUPPORTED_EXTS};
