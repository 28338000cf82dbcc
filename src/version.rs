use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Version the bindings were written against.  Override at build time
/// with `ENERGYPLUS_VERSION=major.minor.patch-build`.
const TARGETED: &str = match option_env!("ENERGYPLUS_VERSION") {
    Some(v) => v,
    None => "9.3.0-baff08990c",
};

/// An EnergyPlus release, e.g. `9.3.0-baff08990c`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
    /// Build identifier (commit hash); may be empty.
    pub build: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid EnergyPlus version {0:?}, expected major.minor.patch[-build]")]
pub struct ParseVersionError(String);

impl EngineVersion {
    /// The version this crate targets.
    pub fn targeted() -> Self {
        // A malformed build-time override reads as 0.0.0-<override>.
        TARGETED.parse().unwrap_or(Self {
            major: 0,
            minor: 0,
            patch: 0,
            build: TARGETED.to_string(),
        })
    }
}

impl FromStr for EngineVersion {
    type Err = ParseVersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseVersionError(s.to_string());
        let (numbers, build) = match s.trim().split_once('-') {
            Some((n, b)) => (n, b.to_string()),
            None => (s.trim(), String::new()),
        };
        let mut parts = numbers.split('.').map(|p| p.parse::<u32>().map_err(|_| err()));
        let major = parts.next().ok_or_else(err)??;
        let minor = parts.next().ok_or_else(err)??;
        let patch = parts.next().ok_or_else(err)??;
        if parts.next().is_some() {
            return Err(err());
        }
        Ok(Self {
            major,
            minor,
            patch,
            build,
        })
    }
}

impl fmt::Display for EngineVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}-{}", self.major, self.minor, self.patch, self.build)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_version() {
        let v: EngineVersion = "9.3.0-baff08990c".parse().unwrap();
        assert_eq!((v.major, v.minor, v.patch), (9, 3, 0));
        assert_eq!(v.build, "baff08990c");
        assert_eq!(v.to_string(), "9.3.0-baff08990c");
    }

    #[test]
    fn build_is_optional() {
        let v: EngineVersion = "23.2.1".parse().unwrap();
        assert_eq!(v.patch, 1);
        assert!(v.build.is_empty());
        assert_eq!(v.to_string(), "23.2.1-");
    }

    #[test]
    fn rejects_malformed() {
        assert!("9.3".parse::<EngineVersion>().is_err());
        assert!("9.3.x-abc".parse::<EngineVersion>().is_err());
        assert!("9.3.0.1".parse::<EngineVersion>().is_err());
    }

    #[test]
    fn targeted_is_parseable() {
        let v = EngineVersion::targeted();
        assert_eq!(v.to_string().parse::<EngineVersion>().unwrap(), v);
    }
}
