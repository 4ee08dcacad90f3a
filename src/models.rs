use serde::{Deserialize, Serialize};

/// One element of the Harvest `/v1/jobs` response.
///
/// Only `name` is required; unknown fields are ignored.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct Job {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub name: String,
    #[serde(default)]
    pub status: Option<String>,
    /// Kept as text and compared lexicographically.
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub departments: Vec<Department>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub offices: Vec<Office>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct Department {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct Office {
    #[serde(default)]
    pub name: String,
}

impl Job {
    pub fn has_status(&self, status: &str) -> bool {
        self.status.as_deref() == Some(status)
    }

    /// Sort key for recency; a missing timestamp counts as the empty string.
    pub fn updated_at_key(&self) -> &str {
        self.updated_at.as_deref().unwrap_or_default()
    }

    /// Lowercased title and department names, the text roles are matched against.
    pub fn role_text(&self) -> String {
        let mut text = self.name.to_lowercase();
        for department in &self.departments {
            text.push(' ');
            text.push_str(&department.name.to_lowercase());
        }
        text
    }

    /// Lowercased title, departments and offices, the text free-form queries search.
    pub fn search_text(&self) -> String {
        let mut text = self.role_text();
        for office in &self.offices {
            text.push(' ');
            text.push_str(&office.name.to_lowercase());
        }
        text
    }
}
