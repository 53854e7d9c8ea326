use std::collections::HashMap;

use crate::import::renderer;
use crate::models::{EligibleIssue, IssueRecord, Review};

/// Joins issues to reviews by exact title equality, preserving issue order.
/// Matched issues carry their review and the pre-rendered comment body;
/// issues without a review are dropped.
pub fn match_reviews(
    issues: Vec<IssueRecord>,
    reviews: &HashMap<String, Review>,
) -> Vec<EligibleIssue> {
    issues
        .into_iter()
        .filter_map(|issue| {
            let review = reviews.get(&issue.title)?.clone();
            let comment = renderer::render(&review);
            Some(EligibleIssue {
                issue,
                review,
                comment,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RepoId;

    fn record(number: u64, title: &str) -> IssueRecord {
        IssueRecord {
            number,
            title: title.to_string(),
            source: RepoId {
                owner: "empirejs".to_string(),
                name: "cfp".to_string(),
            },
        }
    }

    fn review(title: &str, total: i64) -> Review {
        Review {
            title: title.to_string(),
            total,
            ratings: vec![("Useful".to_string(), total)],
        }
    }

    fn reviews_for(titles: &[(&str, i64)]) -> HashMap<String, Review> {
        titles
            .iter()
            .map(|(title, total)| (title.to_string(), review(title, *total)))
            .collect()
    }

    #[test]
    fn test_only_matching_titles_survive() {
        let reviews = reviews_for(&[("Talk A", 8)]);
        let issues = vec![record(1, "Talk A"), record(2, "Talk B")];

        let matched = match_reviews(issues, &reviews);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].issue.number, 1);
    }

    #[test]
    fn test_issue_order_is_preserved() {
        let reviews = reviews_for(&[("Talk A", 8), ("Talk C", 6)]);
        let issues = vec![
            record(3, "Talk C"),
            record(1, "Talk A"),
            record(2, "Talk B"),
        ];

        let matched = match_reviews(issues, &reviews);
        let numbers: Vec<u64> = matched.iter().map(|e| e.issue.number).collect();
        assert_eq!(numbers, vec![3, 1]);
    }

    #[test]
    fn test_match_attaches_review_and_rendered_comment() {
        let reviews = reviews_for(&[("Talk A", 8)]);
        let matched = match_reviews(vec![record(1, "Talk A")], &reviews);

        assert_eq!(matched[0].review, reviews["Talk A"]);
        assert_eq!(matched[0].comment, renderer::render(&reviews["Talk A"]));
    }

    #[test]
    fn test_title_match_is_exact() {
        let reviews = reviews_for(&[("Talk A", 8)]);
        let issues = vec![record(1, "talk a"), record(2, "Talk A ")];

        assert!(match_reviews(issues, &reviews).is_empty());
    }
}
