//! Document revision marker.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use docuflow_core::AppError;

/// A `major.minor` revision marker, rendered as e.g. `"1.0"`.
///
/// The minor component is bumped on content edits; status changes never
/// touch the version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Version {
    /// Major revision.
    pub major: u32,
    /// Minor revision.
    pub minor: u32,
}

impl Version {
    /// The version assigned to every newly created document.
    pub fn initial() -> Self {
        Self { major: 1, minor: 0 }
    }

    /// Bump the minor revision (content edit).
    pub fn bump(&mut self) {
        self.minor += 1;
    }
}

impl Default for Version {
    fn default() -> Self {
        Self::initial()
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

impl FromStr for Version {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid =
            || AppError::validation(format!("Invalid version: '{s}'. Expected 'major.minor'"));
        let (major, minor) = s.split_once('.').ok_or_else(invalid)?;
        Ok(Self {
            major: major.parse().map_err(|_| invalid())?,
            minor: minor.parse().map_err(|_| invalid())?,
        })
    }
}

impl From<Version> for String {
    fn from(version: Version) -> String {
        version.to_string()
    }
}

impl TryFrom<String> for Version {
    type Error = AppError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}
