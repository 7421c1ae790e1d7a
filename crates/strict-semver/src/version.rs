//! Version value type: construction, parsing, rendering and bumps

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

use crate::identifier::{is_valid_identifiers, IDENTIFIERS_PATTERN};
use crate::Comparator;

/// Error raised when a version cannot be built from the given input
///
/// Every variant is an invalid-argument error: nothing is constructed when
/// one of them is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionError {
    #[error("The pre-release version \"{0}\" is not compatible with rule 9 of the specifications.")]
    InvalidPreRelease(String),
    #[error("The build version \"{0}\" is not compatible with rule 10 of the specifications.")]
    InvalidBuild(String),
    #[error("The string \"{0}\" does not look like a version.")]
    InvalidVersion(String),
    #[error("The {0} version cannot be incremented past its maximum value.")]
    Overflow(&'static str),
}

lazy_static! {
    static ref VERSION_RE: Regex = Regex::new(&format!(
        r"^(?P<major>[0-9]+)\.(?P<minor>[0-9]+)\.(?P<patch>[0-9]+){}{}$",
        format!(r"(?:-(?P<prerelease>{}))?", IDENTIFIERS_PATTERN),
        format!(r"(?:\+(?P<build>{}))?", IDENTIFIERS_PATTERN),
    ))
    .unwrap();
}

/// A version as defined by Semantic Versioning 2.0.0
///
/// Values are immutable. `==` is structural and includes build metadata;
/// use [`Version::compare`] or the `is_*` predicates for precedence.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version {
    major: u64,
    minor: u64,
    patch: u64,
    pre_release: String,
    build: String,
}

impl Version {
    /// Create a version, validating pre-release and build metadata.
    ///
    /// An empty `pre_release` or `build` means the part is absent.
    pub fn new(
        major: u64,
        minor: u64,
        patch: u64,
        pre_release: &str,
        build: &str,
    ) -> Result<Self, VersionError> {
        if !pre_release.is_empty() && !is_valid_identifiers(pre_release) {
            log::debug!("Rejecting pre-release {:?}", pre_release);
            return Err(VersionError::InvalidPreRelease(pre_release.to_string()));
        }

        if !build.is_empty() && !is_valid_identifiers(build) {
            log::debug!("Rejecting build metadata {:?}", build);
            return Err(VersionError::InvalidBuild(build.to_string()));
        }

        Ok(Version {
            major,
            minor,
            patch,
            pre_release: pre_release.to_string(),
            build: build.to_string(),
        })
    }

    /// Create a plain `major.minor.patch` release version
    pub fn release(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
            pre_release: String::new(),
            build: String::new(),
        }
    }

    /// Parse a `major.minor.patch[-pre-release][+build]` string.
    ///
    /// The whole input must match; no `v` prefix or surrounding whitespace is
    /// accepted.
    pub fn parse(version: &str) -> Result<Self, VersionError> {
        let invalid = || VersionError::InvalidVersion(version.to_string());

        let caps = match VERSION_RE.captures(version) {
            Some(caps) => caps,
            None => {
                log::debug!("{:?} does not match the version grammar", version);
                return Err(invalid());
            }
        };

        // The grammar guarantees digits; parsing only fails past u64::MAX
        let number = |name: &str| -> Result<u64, VersionError> {
            caps[name].parse::<u64>().map_err(|_| {
                log::debug!("{} of {:?} does not fit in 64 bits", name, version);
                invalid()
            })
        };

        Version::new(
            number("major")?,
            number("minor")?,
            number("patch")?,
            caps.name("prerelease").map_or("", |m| m.as_str()),
            caps.name("build").map_or("", |m| m.as_str()),
        )
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> u64 {
        self.minor
    }

    pub fn patch(&self) -> u64 {
        self.patch
    }

    /// Pre-release part, empty when there is none
    pub fn pre_release(&self) -> &str {
        &self.pre_release
    }

    /// Build metadata, empty when there is none
    pub fn build(&self) -> &str {
        &self.build
    }

    pub fn is_pre_release(&self) -> bool {
        !self.pre_release.is_empty()
    }

    /// Iterate over the dot-separated pre-release identifiers
    pub fn pre_release_identifiers(&self) -> impl Iterator<Item = &str> {
        self.pre_release.split('.').filter(|id| !id.is_empty())
    }

    /// Next major release.
    ///
    /// A pre-release of an `X.0.0` version settles on `X.0.0` itself.
    pub fn bump_major(&self) -> Result<Self, VersionError> {
        if self.is_pre_release() && self.minor == 0 && self.patch == 0 {
            return Ok(Version::release(self.major, 0, 0));
        }

        let major = self.major.checked_add(1).ok_or(VersionError::Overflow("major"))?;
        Ok(Version::release(major, 0, 0))
    }

    /// Next minor release.
    ///
    /// A pre-release of an `X.Y.0` version settles on `X.Y.0` itself.
    pub fn bump_minor(&self) -> Result<Self, VersionError> {
        if self.is_pre_release() && self.patch == 0 {
            return Ok(Version::release(self.major, self.minor, 0));
        }

        let minor = self.minor.checked_add(1).ok_or(VersionError::Overflow("minor"))?;
        Ok(Version::release(self.major, minor, 0))
    }

    /// Next patch release.
    ///
    /// A pre-release settles on its own `X.Y.Z` numbers.
    pub fn bump_patch(&self) -> Result<Self, VersionError> {
        if self.is_pre_release() {
            return Ok(Version::release(self.major, self.minor, self.patch));
        }

        let patch = self.patch.checked_add(1).ok_or(VersionError::Overflow("patch"))?;
        Ok(Version::release(self.major, self.minor, patch))
    }

    /// Compare by precedence, ignoring build metadata
    pub fn compare(&self, other: &Version) -> Ordering {
        Comparator::compare(self, other)
    }

    /// Check if both versions have the same precedence
    pub fn is_equal(&self, other: &Version) -> bool {
        Comparator::equal_to(self, other)
    }

    pub fn is_greater_than(&self, other: &Version) -> bool {
        Comparator::greater_than(self, other)
    }

    pub fn is_greater_than_or_equal(&self, other: &Version) -> bool {
        Comparator::greater_than_or_equal_to(self, other)
    }

    pub fn is_less_than(&self, other: &Version) -> bool {
        Comparator::less_than(self, other)
    }

    pub fn is_less_than_or_equal(&self, other: &Version) -> bool {
        Comparator::less_than_or_equal_to(self, other)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if !self.pre_release.is_empty() {
            write!(f, "-{}", self.pre_release)?;
        }
        if !self.build.is_empty() {
            write!(f, "+{}", self.build)?;
        }
        Ok(())
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Version::parse(s)
    }
}

impl TryFrom<&str> for Version {
    type Error = VersionError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Version::parse(value)
    }
}
