//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Unique identifier for a generated ROI report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReportId(Uuid);

impl ReportId {
    /// Creates a new random ReportId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a ReportId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Short form used in filenames and email subjects.
    pub fn short(&self) -> String {
        self.0.simple().to_string()[..8].to_string()
    }
}

impl Default for ReportId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ReportId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ReportId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_id_new_generates_unique_ids() {
        assert_ne!(ReportId::new(), ReportId::new());
    }

    #[test]
    fn report_id_round_trips_through_string() {
        let id = ReportId::new();
        let parsed: ReportId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn report_id_rejects_garbage() {
        assert!("not-a-uuid".parse::<ReportId>().is_err());
    }

    #[test]
    fn report_id_short_is_eight_hex_chars() {
        let uuid = Uuid::parse_str("0f8fad5b-d9cb-469f-a165-70867728950e").unwrap();
        let id = ReportId::from_uuid(uuid);
        assert_eq!(id.short(), "0f8fad5b");
    }

    #[test]
    fn report_id_serializes_transparently() {
        let uuid = Uuid::parse_str("0f8fad5b-d9cb-469f-a165-70867728950e").unwrap();
        let json = serde_json::to_string(&ReportId::from_uuid(uuid)).unwrap();
        assert_eq!(json, "\"0f8fad5b-d9cb-469f-a165-70867728950e\"");
    }
}
