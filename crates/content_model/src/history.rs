//! Work/education timeline record shape.

use serde::{Deserialize, Serialize};

/// Variant tag for a timeline entry. The tag decides which optional sections are
/// meaningful: work entries carry notable projects/contributions, education entries carry
/// free-text additional activities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryKind {
    /// Employment entry.
    Work,
    /// Education entry.
    Education,
}

/// One entry in the `history` content-set.
///
/// Entries render in source-document order; the provider never sorts them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    /// Unique id within the content-set, used as the rendering key.
    pub id: String,
    /// Work/education discriminator; JSON field name is `type`.
    #[serde(rename = "type")]
    pub kind: HistoryKind,
    /// Display label for the period, e.g. `"2020 - 2023"`.
    pub year: String,
    /// Job title or degree name.
    pub title: String,
    /// Employer or school name; JSON field name is `company`.
    #[serde(rename = "company")]
    pub organization: String,
    /// Logical logo name resolved against the company-assets path, when one exists.
    #[serde(default)]
    pub logo: Option<String>,
    /// Free-text description; may contain newlines.
    pub description: String,
    /// Notable projects (work entries only).
    #[serde(default)]
    pub projects: Vec<String>,
    /// Notable contributions (work entries only).
    #[serde(default)]
    pub contributions: Vec<String>,
    /// Additional activities (education entries only); JSON field name is `additionalInfo`.
    #[serde(default, rename = "additionalInfo")]
    pub additional_info: Option<String>,
}

impl HistoryEntry {
    /// Returns whether this is an employment entry.
    pub fn is_work(&self) -> bool {
        self.kind == HistoryKind::Work
    }

    /// Returns whether this is an education entry.
    pub fn is_education(&self) -> bool {
        self.kind == HistoryKind::Education
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parses_work_entry_with_projects_and_contributions() {
        let entry: HistoryEntry = serde_json::from_str(
            r#"{
                "id": "work-1",
                "type": "work",
                "year": "2021 - 2024",
                "title": "Senior Developer",
                "company": "Acme Systems",
                "logo": "Acme",
                "description": "Built internal platforms.",
                "projects": ["Billing revamp"],
                "contributions": ["CI pipeline overhaul"]
            }"#,
        )
        .expect("work entry parses");
        assert!(entry.is_work());
        assert_eq!(entry.organization, "Acme Systems");
        assert_eq!(entry.projects, vec!["Billing revamp".to_string()]);
        assert_eq!(entry.additional_info, None);
    }

    #[test]
    fn parses_education_entry_with_additional_info_and_no_logo() {
        let entry: HistoryEntry = serde_json::from_str(
            r#"{
                "id": "edu-1",
                "type": "education",
                "year": "2014 - 2018",
                "title": "BSc Computer Science",
                "company": "State University",
                "description": "Systems focus.",
                "additionalInfo": "Programming club lead"
            }"#,
        )
        .expect("education entry parses");
        assert!(entry.is_education());
        assert_eq!(entry.logo, None);
        assert!(entry.projects.is_empty());
        assert_eq!(
            entry.additional_info.as_deref(),
            Some("Programming club lead")
        );
    }
}
