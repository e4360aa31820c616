pub mod os_fs;

pub use os_fs::OsFs;

#[cfg(test)]
pub(crate) mod test_helpers; // Available within crate for testing
