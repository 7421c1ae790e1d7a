//! Sorting of version collections by precedence

use crate::{Comparator, Version};

/// Sorts versions by precedence without touching the input
pub struct Sorter;

impl Sorter {
    /// Sort versions in ascending order
    pub fn sort(versions: &[Version]) -> Vec<Version> {
        Self::usort(versions, true)
    }

    /// Sort versions in descending order (reverse sort)
    pub fn rsort(versions: &[Version]) -> Vec<Version> {
        Self::usort(versions, false)
    }

    /// Sort version strings in ascending order.
    ///
    /// Strings that do not parse are dropped from the result.
    pub fn sort_strings(versions: &[&str]) -> Vec<String> {
        let mut parsed: Vec<(Version, usize)> = versions
            .iter()
            .enumerate()
            .filter_map(|(i, v)| match Version::parse(v) {
                Ok(version) => Some((version, i)),
                Err(err) => {
                    log::debug!("Skipping {:?} while sorting: {}", v, err);
                    None
                }
            })
            .collect();

        log::trace!("Sorting {} of {} version strings", parsed.len(), versions.len());
        parsed.sort_by(|(a, _), (b, _)| Comparator::compare(a, b));

        // Return original strings in sorted order
        parsed
            .into_iter()
            .map(|(_, i)| versions[i].to_string())
            .collect()
    }

    fn usort(versions: &[Version], ascending: bool) -> Vec<Version> {
        log::trace!("Sorting {} versions", versions.len());

        let mut sorted = versions.to_vec();
        sorted.sort_by(|a, b| {
            let cmp = Comparator::compare(a, b);
            if ascending {
                cmp
            } else {
                cmp.reverse()
            }
        });
        sorted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_all(versions: &[&str]) -> Vec<Version> {
        versions.iter().map(|v| Version::parse(v).unwrap()).collect()
    }

    fn render(versions: &[Version]) -> Vec<String> {
        versions.iter().map(Version::to_string).collect()
    }

    #[test]
    fn test_sort() {
        let versions = parse_all(&[
            "2.0.0",
            "1.2.3",
            "1.3.3",
            "1.3.3-alpha.10",
            "1.3.3-alpha.2",
            "1.2.3-rc.1+exp.sha.5114f85",
        ]);
        let sorted = Sorter::sort(&versions);
        assert_eq!(
            render(&sorted),
            vec![
                "1.2.3-rc.1+exp.sha.5114f85",
                "1.2.3",
                "1.3.3-alpha.2",
                "1.3.3-alpha.10",
                "1.3.3",
                "2.0.0",
            ]
        );

        // Input is left as it was
        assert_eq!(render(&versions)[0], "2.0.0");
        assert_eq!(versions.len(), 6);
    }

    #[test]
    fn test_sort_numeric_fields() {
        let sorted = Sorter::sort(&parse_all(&["2.0.0", "1.10.10"]));
        assert_eq!(render(&sorted), vec!["1.10.10", "2.0.0"]);
    }

    #[test]
    fn test_sort_empty_and_single() {
        assert!(Sorter::sort(&[]).is_empty());
        let single = parse_all(&["1.0.0-rc.1"]);
        assert_eq!(Sorter::sort(&single), single);
    }

    #[test]
    fn test_sort_keeps_precedence_equal_elements() {
        let sorted = Sorter::sort(&parse_all(&["1.0.0+b", "0.9.0", "1.0.0+a"]));
        assert_eq!(sorted.len(), 3);
        assert_eq!(sorted[0].to_string(), "0.9.0");
        assert!(sorted[1].is_equal(&sorted[2]));
    }

    #[test]
    fn test_rsort() {
        let versions = parse_all(&["1.0.0", "0.1.0", "3.2.1", "2.4.0-alpha", "2.4.0"]);
        let rsorted = Sorter::rsort(&versions);
        assert_eq!(render(&rsorted), vec!["3.2.1", "2.4.0", "2.4.0-alpha", "1.0.0", "0.1.0"]);
    }

    #[test]
    fn test_sort_strings() {
        let versions = vec!["1.0.0", "not-a-version", "0.1.0", "1.0", "2.4.0-alpha", "2.4.0"];
        let sorted = Sorter::sort_strings(&versions);
        assert_eq!(sorted, vec!["0.1.0", "1.0.0", "2.4.0-alpha", "2.4.0"]);
    }
}
