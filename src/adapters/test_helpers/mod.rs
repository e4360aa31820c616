//! Test helpers for mocking dependencies in tests
//!
//! Provides `MockFileSystem`, an in-memory implementation of the
//! `FileSystem` port, kept simple and focused on what the locator tests
//! need.

mod mock_file_system;

pub use mock_file_system::MockFileSystem;
