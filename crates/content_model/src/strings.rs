//! Localized UI string bundle (the `common` content-set).
//!
//! Every field defaults to the English copy so a partially translated document still
//! renders readable text. Documents use camelCase keys and may omit whole sections.

use serde::{Deserialize, Serialize};

/// Navigation link labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NavStrings {
    /// Home link label.
    pub home: String,
    /// History link label.
    pub history: String,
    /// Projects link label.
    pub projects: String,
    /// Contact link label.
    pub contact: String,
}

impl Default for NavStrings {
    fn default() -> Self {
        Self {
            home: "Home".into(),
            history: "History".into(),
            projects: "Projects".into(),
            contact: "Contact".into(),
        }
    }
}

/// Home-page introduction copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IntroStrings {
    /// Headline under the profile picture.
    pub title: String,
    /// Longer introduction paragraph.
    pub description: String,
}

impl Default for IntroStrings {
    fn default() -> Self {
        Self {
            title: "Hi, I build software.".into(),
            description: "Full-stack developer focused on reliable, fast web applications."
                .into(),
        }
    }
}

/// Labels for the highlighted skill badges on the home page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SkillStrings {
    /// Full-stack badge label.
    pub fullstack: String,
    /// Leadership badge label.
    pub leadership: String,
    /// Performance badge label.
    pub performance: String,
}

impl Default for SkillStrings {
    fn default() -> Self {
        Self {
            fullstack: "Full-Stack".into(),
            leadership: "Leadership".into(),
            performance: "Performance".into(),
        }
    }
}

/// History-page tab labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HistoryStrings {
    /// Work tab label.
    pub work_experience: String,
    /// Education tab label.
    pub education: String,
}

impl Default for HistoryStrings {
    fn default() -> Self {
        Self {
            work_experience: "Work Experience".into(),
            education: "Education".into(),
        }
    }
}

/// Timeline section headings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TimelineStrings {
    /// Heading for a work entry's notable projects.
    pub notable_projects: String,
    /// Heading for a work entry's notable contributions.
    pub notable_contributions: String,
    /// Heading for an education entry's additional activities.
    pub additional_activities: String,
}

impl Default for TimelineStrings {
    fn default() -> Self {
        Self {
            notable_projects: "Notable Projects".into(),
            notable_contributions: "Notable Contributions".into(),
            additional_activities: "Additional Activities".into(),
        }
    }
}

/// Projects-page section headings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectsStrings {
    /// Professional-projects section heading.
    pub professional: String,
    /// Side-projects section heading.
    pub side: String,
}

impl Default for ProjectsStrings {
    fn default() -> Self {
        Self {
            professional: "Professional Projects".into(),
            side: "Side Projects".into(),
        }
    }
}

/// Contact-form labels and status messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactStrings {
    /// Page heading.
    pub title: String,
    /// Name field label.
    pub name_label: String,
    /// Email field label.
    pub email_label: String,
    /// Message field label.
    pub message_label: String,
    /// Submit button label.
    pub send: String,
    /// Status text while the submission is in flight.
    pub sending: String,
    /// Status text after a successful submission.
    pub success: String,
    /// Status text after a failed submission.
    pub error: String,
}

impl Default for ContactStrings {
    fn default() -> Self {
        Self {
            title: "Get In Touch".into(),
            name_label: "Name".into(),
            email_label: "Email".into(),
            message_label: "Message".into(),
            send: "Send Message".into(),
            sending: "Sending...".into(),
            success: "Thanks! Your message has been sent.".into(),
            error: "Something went wrong. Please try again later.".into(),
        }
    }
}

/// The full localized UI string bundle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct UiStrings {
    /// Navigation labels.
    pub nav: NavStrings,
    /// Home-page introduction.
    pub intro: IntroStrings,
    /// Skill badge labels.
    pub skills: SkillStrings,
    /// History tab labels.
    pub history: HistoryStrings,
    /// Timeline section headings.
    pub timeline: TimelineStrings,
    /// Projects-page headings.
    pub projects: ProjectsStrings,
    /// Contact-form labels.
    pub contact: ContactStrings,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn partial_document_falls_back_to_english_per_section() {
        let strings: UiStrings = serde_json::from_str(
            r#"{"nav": {"home": "主页", "history": "经历", "projects": "项目", "contact": "联系"}}"#,
        )
        .expect("partial bundle parses");
        assert_eq!(strings.nav.home, "主页");
        assert_eq!(strings.projects, ProjectsStrings::default());
        assert_eq!(strings.contact.send, "Send Message");
    }

    #[test]
    fn empty_document_is_the_english_default() {
        let strings: UiStrings = serde_json::from_str("{}").expect("empty bundle parses");
        assert_eq!(strings, UiStrings::default());
    }
}
