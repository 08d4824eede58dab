use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Status value of a complaint number confirmed by the manufacturer.
pub const STATUS_OK: &str = "OK";

/// Row of `GET complaint_number/list_complaints`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplaintNumber {
    pub complaint_number: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub remark: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComplaintStatus {
    pub status: Option<String>,
    pub remark: Option<String>,
}

/// Complaint number → status lookup built from the uploaded list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComplaintStatusMap {
    entries: HashMap<String, ComplaintStatus>,
}

impl ComplaintStatusMap {
    pub fn from_list(list: Vec<ComplaintNumber>) -> Self {
        let entries = list
            .into_iter()
            .map(|item| {
                (
                    item.complaint_number,
                    ComplaintStatus {
                        status: item.status,
                        remark: item.remark,
                    },
                )
            })
            .collect();
        Self { entries }
    }

    pub fn get(&self, complaint_number: &str) -> Option<&ComplaintStatus> {
        self.entries.get(complaint_number)
    }

    pub fn is_ok(&self, complaint_number: &str) -> bool {
        self.get(complaint_number)
            .and_then(|s| s.status.as_deref())
            .is_some_and(|s| s == STATUS_OK)
    }

    /// Remark if one was recorded, otherwise a verdict on the status.
    pub fn tooltip(&self, complaint_number: &str) -> String {
        let remark = self
            .get(complaint_number)
            .and_then(|s| s.remark.as_deref())
            .filter(|r| !r.is_empty());
        match remark {
            Some(r) => r.to_string(),
            None if self.is_ok(complaint_number) => "Complaint number is valid".to_string(),
            None => "COMPLAINT NUMBER NOT PRESENT".to_string(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map() -> ComplaintStatusMap {
        ComplaintStatusMap::from_list(vec![
            ComplaintNumber {
                complaint_number: "CMP0000000001".to_string(),
                status: Some("OK".to_string()),
                remark: None,
            },
            ComplaintNumber {
                complaint_number: "CMP0000000002".to_string(),
                status: Some("REJECTED".to_string()),
                remark: Some("Duplicate claim".to_string()),
            },
            ComplaintNumber {
                complaint_number: "CMP0000000003".to_string(),
                status: None,
                remark: Some(String::new()),
            },
        ])
    }

    #[test]
    fn test_status_lookup() {
        let map = map();
        assert_eq!(map.len(), 3);
        assert!(map.is_ok("CMP0000000001"));
        assert!(!map.is_ok("CMP0000000002"));
        assert!(!map.is_ok("CMP0000000003"));
        assert!(!map.is_ok("UNKNOWN"));
    }

    #[test]
    fn test_tooltip_text() {
        let map = map();
        assert_eq!(map.tooltip("CMP0000000001"), "Complaint number is valid");
        assert_eq!(map.tooltip("CMP0000000002"), "Duplicate claim");
        assert_eq!(map.tooltip("CMP0000000003"), "COMPLAINT NUMBER NOT PRESENT");
        assert_eq!(map.tooltip("UNKNOWN"), "COMPLAINT NUMBER NOT PRESENT");
    }
}
