use crate::shared::api_error::NoticeKind;
use serde::{Deserialize, Serialize};

/// Response of the CSV upload endpoints (`cg_srf_number/upload`,
/// `complaint_number/upload`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UploadOutcome {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub resolution: String,
    #[serde(rename = "type", default = "success")]
    pub kind: NoticeKind,
}

fn success() -> NoticeKind {
    NoticeKind::Success
}

/// A file is accepted when its name ends in `.csv` or its MIME type is
/// `text/csv`.
pub fn is_csv_file(name: &str, mime: &str) -> bool {
    name.to_ascii_lowercase().ends_with(".csv") || mime.eq_ignore_ascii_case("text/csv")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_csv_file() {
        assert!(is_csv_file("numbers.csv", ""));
        assert!(is_csv_file("NUMBERS.CSV", "application/octet-stream"));
        assert!(is_csv_file("export", "text/csv"));
        assert!(!is_csv_file("numbers.xlsx", "application/vnd.ms-excel"));
        assert!(!is_csv_file("numbers.csv.txt", "text/plain"));
    }

    #[test]
    fn test_outcome_defaults_to_success() {
        let outcome: UploadOutcome =
            serde_json::from_str(r#"{"message":"42 rows uploaded"}"#).unwrap();
        assert_eq!(outcome.message, "42 rows uploaded");
        assert_eq!(outcome.kind, NoticeKind::Success);

        let outcome: UploadOutcome = serde_json::from_str(
            r#"{"message":"Partially uploaded","resolution":"3 duplicates","type":"warning"}"#,
        )
        .unwrap();
        assert_eq!(outcome.kind, NoticeKind::Warning);
    }
}
