//! Configuration-file discovery
//!
//! Given an ordered list of candidate directories, a base file name and an
//! ordered list of supported extensions, [`ConfigLocator`] walks the
//! directories in order and returns the first existing match. All
//! filesystem access goes through the [`FileSystem`] port, so searches run
//! against the real disk ([`OsFs`]) or an injected in-memory filesystem in
//! tests.
//!
//! Parsing, merging and watching of the located file belong to the caller;
//! this crate only answers "which file".

pub mod adapters;
pub mod core;
pub mod errors;
pub mod utils;

pub use crate::adapters::OsFs;
pub use crate::core::locator::probe;
pub use crate::core::ports::{FileStat, FileSystem, FileSystemError};
pub use crate::core::{ConfigLocator, ErrorPolicy, Presence, SUPPORTED_EXTS};
pub use crate::errors::LocateError;
