use serde::{Deserialize, Serialize};

/// One reviewer scorecard parsed from a spreadsheet row.
///
/// Ratings keep the spreadsheet's column order so rendered comments list the
/// criteria identically on every run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub title: String,
    pub total: i64,
    pub ratings: Vec<(String, i64)>,
}
