//! Department Directory Domain
//!
//! Departments are the owners of allocated assets. Each one carries the
//! signatory and receiver printed on its acceptance act.
//!
//! # Key Concepts
//!
//! - **Department**: one directory entry, keyed by its normalized code
//! - **DepartmentDirectory**: lookup table built once per run

pub mod department;
pub mod directory;
pub mod error;

pub use department::{Department, DepartmentColumns};
pub use directory::{load_departments, load_directory, DepartmentDirectory};
pub use error::DirectoryError;
