//! Version precedence comparison

use std::cmp::Ordering;

use crate::identifier::compare_identifier;
use crate::Version;

/// Comparator for ordering versions by precedence
///
/// Build metadata never takes part in the comparison.
pub struct Comparator;

impl Comparator {
    /// Check if version1 > version2
    pub fn greater_than(version1: &Version, version2: &Version) -> bool {
        Self::compare(version1, version2) == Ordering::Greater
    }

    /// Check if version1 >= version2
    pub fn greater_than_or_equal_to(version1: &Version, version2: &Version) -> bool {
        Self::compare(version1, version2) != Ordering::Less
    }

    /// Check if version1 < version2
    pub fn less_than(version1: &Version, version2: &Version) -> bool {
        Self::compare(version1, version2) == Ordering::Less
    }

    /// Check if version1 <= version2
    pub fn less_than_or_equal_to(version1: &Version, version2: &Version) -> bool {
        Self::compare(version1, version2) != Ordering::Greater
    }

    /// Check if version1 == version2
    pub fn equal_to(version1: &Version, version2: &Version) -> bool {
        Self::compare(version1, version2) == Ordering::Equal
    }

    /// Check if version1 != version2
    pub fn not_equal_to(version1: &Version, version2: &Version) -> bool {
        Self::compare(version1, version2) != Ordering::Equal
    }

    /// Compare version1 to version2 by precedence
    pub fn compare(version1: &Version, version2: &Version) -> Ordering {
        version1
            .major()
            .cmp(&version2.major())
            .then_with(|| version1.minor().cmp(&version2.minor()))
            .then_with(|| version1.patch().cmp(&version2.patch()))
            .then_with(|| compare_pre_release(version1.pre_release(), version2.pre_release()))
    }

    /// Same as [`Comparator::compare`], as a -1, 0 or 1 signal
    pub fn compare_sign(version1: &Version, version2: &Version) -> i32 {
        Self::compare(version1, version2) as i32
    }
}

fn compare_pre_release(pre_release1: &str, pre_release2: &str) -> Ordering {
    // A release outranks any of its pre-releases
    match (pre_release1.is_empty(), pre_release2.is_empty()) {
        (true, true) => return Ordering::Equal,
        (true, false) => return Ordering::Greater,
        (false, true) => return Ordering::Less,
        (false, false) => {}
    }

    let mut identifiers1 = pre_release1.split('.');
    let mut identifiers2 = pre_release2.split('.');

    loop {
        match (identifiers1.next(), identifiers2.next()) {
            (None, None) => return Ordering::Equal,
            // A larger set of identifiers wins when all preceding ones are equal
            (Some(_), None) => return Ordering::Greater,
            (None, Some(_)) => return Ordering::Less,
            (Some(id1), Some(id2)) => match compare_identifier(id1, id2) {
                Ordering::Equal => continue,
                other => return other,
            },
        }
    }
}
