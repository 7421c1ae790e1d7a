//! Semantic Versioning 2.0.0 library
//!
//! This crate provides strict version parsing, precedence comparison, bump
//! operations and sorting as defined by <https://semver.org/>.
//!
//! ```
//! use strict_semver::{Comparator, Sorter, Version};
//!
//! let release = Version::parse("1.0.0").unwrap();
//! let rc = Version::parse("1.0.0-rc.1+build.5").unwrap();
//!
//! assert!(Comparator::greater_than(&release, &rc));
//! assert_eq!(rc.bump_patch().unwrap(), release);
//! assert_eq!(Sorter::sort(&[release.clone(), rc.clone()]), vec![rc, release]);
//! ```
//!
//! Serde support sits behind the `serde` feature; run the full test suite
//! with `cargo test --all-features`.

mod comparator;
mod identifier;
#[cfg(feature = "serde")]
mod serde_impl;
mod sorter;
mod version;

pub use comparator::Comparator;
pub use sorter::Sorter;
pub use version::{Version, VersionError};
