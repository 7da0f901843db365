//! Domain entities exchanged with the paperdesk API

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A research project grouping papers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Unique project name.
    pub name: String,
    /// Papers attached to the project.
    #[serde(default)]
    pub papers: Vec<Paper>,
}

/// A paper tracked by a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paper {
    /// Raw arXiv identifier, possibly carrying a version suffix.
    pub arxiv_id: String,
    /// Identifier with the version suffix stripped.
    pub clean_id: String,
    /// Paper title.
    pub title: String,
    /// Abstract text. `abstract` is reserved in Rust, hence the rename.
    #[serde(rename = "abstract")]
    pub summary: String,
    /// Log emitted by the server's ingestion pipeline.
    #[serde(default)]
    pub log: String,
    /// Name of the owning project, when attached to one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,
    /// Citations extracted from the paper source.
    #[serde(default)]
    pub references: Vec<Reference>,
    /// Set when reference extraction failed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub references_error: Option<String>,
}

/// A citation extracted from a paper.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reference {
    /// Citation key within the paper.
    pub id: String,
    /// Cited work's title.
    pub title: String,
    /// arXiv identifier of the cited work, when resolved.
    #[serde(default)]
    pub arxiv_id: String,
    /// Publication date as sent by the server, `YYYY-MM-DD`.
    #[serde(default)]
    pub date: String,
    /// Publication month, when the server could split the date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub month: Option<u32>,
    /// Publication year, when the server could split the date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    /// Identifier with the version suffix stripped.
    #[serde(default)]
    pub clean_id: String,
    /// Link to the cited work.
    #[serde(default)]
    pub url: String,
    /// Author list as one string.
    #[serde(default)]
    pub author: String,
    /// Untyped extraction payload, passed through as-is.
    #[serde(default)]
    pub data: serde_json::Value,
}

impl Reference {
    /// Publication date parsed from the wire format, if well-formed.
    #[must_use]
    pub fn published(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[allow(clippy::unwrap_used)] // Test code: parsing literal JSON
    fn test_paper_summary_maps_to_the_abstract_key() {
        let paper: Paper = serde_json::from_str(
            r#"{
                "arxiv_id": "2103.14030v2",
                "clean_id": "2103.14030",
                "title": "Swin Transformer",
                "abstract": "This paper presents a new vision Transformer."
            }"#,
        )
        .unwrap();

        assert_eq!(paper.summary, "This paper presents a new vision Transformer.");
        assert!(paper.references.is_empty());
        assert!(paper.project_name.is_none());

        let json = serde_json::to_value(&paper).unwrap();
        assert!(json.get("abstract").is_some());
        assert!(json.get("summary").is_none());
    }

    #[test]
    #[allow(clippy::unwrap_used)] // Test code: parsing literal JSON
    fn test_reference_publication_date() {
        let mut reference: Reference = serde_json::from_str(
            r#"{
                "id": "vaswani2017",
                "title": "Attention Is All You Need",
                "date": "2017-06-12"
            }"#,
        )
        .unwrap();

        let published = reference.published().unwrap();
        assert_eq!(published, NaiveDate::from_ymd_opt(2017, 6, 12).unwrap());

        reference.date = "June 2017".to_string();
        assert!(reference.published().is_none());
    }
}
