use crate::models::Review;

/// Renders a review as the comment body posted to the issue: a header, one
/// line per rating criterion in spreadsheet order, a blank line, and the
/// total score.
pub fn render(review: &Review) -> String {
    let mut lines = Vec::with_capacity(review.ratings.len() + 3);

    lines.push("### Review: ".to_string());
    for (criterion, score) in &review.ratings {
        lines.push(format!(" - {}: {}", criterion, score));
    }
    lines.push(String::new());
    lines.push(format!("### TOTAL SCORE: {}", review.total));

    lines.join("\n")
}
