//! Shutdown plan document parser.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// A shutdown plan: one cluster and the services to stop in it.
///
/// The on-disk form is a flat JSON document:
///
/// ```json
/// { "cluster_name": "staging", "service_names": ["api", "worker"] }
/// ```
///
/// Service order is preserved and duplicates are kept; the driver
/// processes each entry independently.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShutdownPlan {
    pub cluster_name: String,
    pub service_names: Vec<String>,
}

impl ShutdownPlan {
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let plan: ShutdownPlan = serde_json::from_str(&content)?;
        Ok(plan)
    }

    /// Check that the plan is usable before any remote work starts.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.cluster_name.trim().is_empty() {
            anyhow::bail!("shutdown plan has an empty cluster_name");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parse_minimal() {
        let json = r#"{ "cluster_name": "staging", "service_names": ["api", "worker"] }"#;
        let plan: ShutdownPlan = serde_json::from_str(json).unwrap();
        assert_eq!(plan.cluster_name, "staging");
        assert_eq!(plan.service_names, vec!["api", "worker"]);
    }

    #[test]
    fn empty_service_list_is_a_valid_plan() {
        let json = r#"{ "cluster_name": "staging", "service_names": [] }"#;
        let plan: ShutdownPlan = serde_json::from_str(json).unwrap();
        assert!(plan.validate().is_ok());
        assert!(plan.service_names.is_empty());
    }

    #[test]
    fn duplicates_are_preserved() {
        let json = r#"{ "cluster_name": "staging", "service_names": ["api", "api"] }"#;
        let plan: ShutdownPlan = serde_json::from_str(json).unwrap();
        assert_eq!(plan.service_names.len(), 2);
    }

    #[test]
    fn validate_rejects_empty_cluster() {
        let plan = ShutdownPlan {
            cluster_name: "  ".to_string(),
            service_names: vec!["api".to_string()],
        };
        assert!(plan.validate().is_err());
    }

    #[test]
    fn from_file_round_trip() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "cluster_name": "prod", "service_names": ["gateway"] }}"#
        )
        .unwrap();

        let plan = ShutdownPlan::from_file(file.path()).unwrap();
        assert_eq!(plan.cluster_name, "prod");
        assert_eq!(plan.service_names, vec!["gateway"]);
    }

    #[test]
    fn from_file_rejects_malformed_document() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(ShutdownPlan::from_file(file.path()).is_err());
    }

    #[test]
    fn from_file_missing_path_is_an_error() {
        let missing = Path::new("/nonexistent/quiesce-plan.json");
        assert!(ShutdownPlan::from_file(missing).is_err());
    }
}
