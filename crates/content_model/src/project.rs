//! Project card record shape.

use serde::{Deserialize, Deserializer, Serialize};

/// One project card in the `projects` content-set.
///
/// Field names in the JSON documents are camelCase. The link fields accept the authoring
/// sentinel `"#"` for "no link" and normalize it to `None` during deserialization so the
/// rendering layer only ever branches on presence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    /// Unique id within the content-set, used as the rendering key.
    pub id: String,
    /// Display title; also the logical name for the card image lookup.
    pub title: String,
    /// Free-text description; may contain newlines.
    pub description: String,
    /// Ordered technology tags.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Absolute source-code URL, absent when the code is private.
    #[serde(default, deserialize_with = "deserialize_link")]
    pub github_url: Option<String>,
    /// Absolute live-demo URL, absent when nothing is deployed.
    #[serde(default, deserialize_with = "deserialize_link")]
    pub live_url: Option<String>,
    /// Professional (client/employer) work as opposed to a side project.
    #[serde(default)]
    pub is_professional: bool,
}

impl ProjectRecord {
    /// Returns whether the record carries a usable source-code link.
    pub fn has_source_link(&self) -> bool {
        self.github_url.is_some()
    }

    /// Returns whether the record carries a usable live-demo link.
    pub fn has_live_link(&self) -> bool {
        self.live_url.is_some()
    }
}

fn deserialize_link<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.filter(|value| !value.is_empty() && value != "#"))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn parse(raw: &str) -> ProjectRecord {
        serde_json::from_str(raw).expect("project record parses")
    }

    #[test]
    fn parses_camel_case_document_fields() {
        let record = parse(
            r#"{
                "id": "p-1",
                "title": "Inventory Dashboard",
                "description": "Stock tracking UI",
                "tags": ["Rust", "Leptos"],
                "githubUrl": "https://github.com/example/inventory",
                "liveUrl": "https://inventory.example.com",
                "isProfessional": true
            }"#,
        );
        assert_eq!(record.id, "p-1");
        assert_eq!(record.tags, vec!["Rust".to_string(), "Leptos".to_string()]);
        assert!(record.is_professional);
        assert!(record.has_source_link());
        assert!(record.has_live_link());
    }

    #[test]
    fn hash_sentinel_and_missing_links_normalize_to_none() {
        let record = parse(
            r##"{
                "id": "p-2",
                "title": "Internal Tool",
                "description": "Private work",
                "tags": [],
                "githubUrl": "#",
                "isProfessional": true
            }"##,
        );
        assert_eq!(record.github_url, None);
        assert_eq!(record.live_url, None);
        assert!(!record.has_source_link());
        assert!(!record.has_live_link());
    }

    #[test]
    fn empty_string_link_is_treated_as_absent() {
        let record = parse(
            r#"{"id": "p-3", "title": "T", "description": "D", "liveUrl": ""}"#,
        );
        assert_eq!(record.live_url, None);
    }
}
