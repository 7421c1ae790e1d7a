//! Serde support: versions travel as their canonical string

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::Version;

impl Serialize for Version {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Version::parse(&s).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize() {
        let version = Version::parse("1.0.0-beta+exp.sha.5114f85").unwrap();
        assert_eq!(serde_json::to_string(&version).unwrap(), "\"1.0.0-beta+exp.sha.5114f85\"");
    }

    #[test]
    fn test_deserialize() {
        let version: Version = serde_json::from_str("\"2.10.0-rc.1\"").unwrap();
        assert_eq!(version, Version::new(2, 10, 0, "rc.1", "").unwrap());

        let versions: Vec<Version> = serde_json::from_str(r#"["1.0.0", "1.0.0-alpha"]"#).unwrap();
        assert_eq!(versions.len(), 2);
    }

    #[test]
    fn test_deserialize_rejects_invalid() {
        let err = serde_json::from_str::<Version>("\"1.1\"").unwrap_err();
        assert!(err.to_string().contains("does not look like a version"));

        assert!(serde_json::from_str::<Version>("123").is_err());
    }
}
