use std::collections::HashMap;
use std::path::Path;

use calamine::{open_workbook, Data, DataType, Reader, Xlsx};

use crate::error::{Error, Result};
use crate::models::Review;

/// The eight rating columns, in spreadsheet order starting at
/// `FIRST_RATING_COLUMN`.
const RATING_CRITERIA: [&str; 8] = [
    "Clear/compelling",
    "Relevancy",
    "Topic Coverage",
    "Useful",
    "Uniqueness",
    "Expertise on subject",
    "Speaker Experience",
    "Personal Score",
];

const FIRST_RATING_COLUMN: usize = 4;
const TOTAL_COLUMN: usize = 12;
const TITLE_COLUMN: usize = 14;

/// Reads the first worksheet into a map from talk title to its review.
///
/// The column layout is positional, not header-based: columns 4-11 hold the
/// rating criteria, column 12 the total score, column 14 the title.
pub fn read_reviews(path: &Path) -> Result<HashMap<String, Review>> {
    let mut workbook: Xlsx<_> = open_workbook(path)
        .map_err(|e| Error::Parse(format!("cannot open {}: {}", path.display(), e)))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| Error::Parse(format!("{} has no sheets", path.display())))?
        .map_err(|e| Error::Parse(format!("cannot read {}: {}", path.display(), e)))?;

    Ok(collect_reviews(range.rows().skip(1)))
}

/// Reduces data rows into a title-keyed map. When the same title appears
/// twice, the later row wins. Rows without a title are skipped.
pub(crate) fn collect_reviews<'a>(
    rows: impl Iterator<Item = &'a [Data]>,
) -> HashMap<String, Review> {
    let mut reviews = HashMap::new();

    for row in rows {
        let Some(title) = text_at(row, TITLE_COLUMN) else {
            continue;
        };

        let ratings = RATING_CRITERIA
            .iter()
            .enumerate()
            .map(|(offset, criterion)| {
                (
                    criterion.to_string(),
                    score_at(row, FIRST_RATING_COLUMN + offset),
                )
            })
            .collect();

        reviews.insert(
            title.clone(),
            Review {
                title,
                total: score_at(row, TOTAL_COLUMN),
                ratings,
            },
        );
    }

    reviews
}

fn text_at(row: &[Data], column: usize) -> Option<String> {
    row.get(column)
        .and_then(|cell| cell.as_string())
        .filter(|text| !text.is_empty())
}

fn score_at(row: &[Data], column: usize) -> i64 {
    row.get(column)
        .and_then(|cell| cell.as_f64())
        .map(|value| value.round() as i64)
        .unwrap_or(0)
}
