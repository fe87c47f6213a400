//! Typed payloads for the User API.
//!
//! Directory entries keep their fields as `serde_json::Value`; only the
//! fixed envelopes and the CSV task contract are typed.

use serde::Deserialize;

/// The directory resources the CSV transport can import and export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CsvKind {
    User,
    Organization,
    Title,
    UserOrganizations,
}

impl CsvKind {
    /// Resource name as it appears in `/v1/csv/{kind}.json`.
    pub fn as_str(&self) -> &'static str {
        match self {
            CsvKind::User => "user",
            CsvKind::Organization => "organization",
            CsvKind::Title => "title",
            CsvKind::UserOrganizations => "userOrganizations",
        }
    }
}

impl std::fmt::Display for CsvKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of queueing a CSV import.
#[derive(Debug, Clone, Deserialize)]
pub struct CsvImportResult {
    /// Import task id, polled via `Csv::result`.
    pub id: String,
}

/// Status of a CSV import task.
#[derive(Debug, Clone, Deserialize)]
pub struct CsvTaskStatus {
    pub done: bool,
    pub success: bool,
    #[serde(default)]
    pub errors: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_kind_resource_names() {
        assert_eq!(CsvKind::User.as_str(), "user");
        assert_eq!(CsvKind::UserOrganizations.as_str(), "userOrganizations");
        assert_eq!(CsvKind::Title.to_string(), "title");
    }

    #[test]
    fn test_task_status_defaults_errors() {
        let status: CsvTaskStatus = serde_json::from_value(serde_json::json!({
            "done": true, "success": true
        }))
        .unwrap();
        assert!(status.done);
        assert!(status.errors.is_empty());
    }
}
