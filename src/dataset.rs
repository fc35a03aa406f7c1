//! Bundled demo reviews and JSONL loading.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::review::Review;

/// Five bundled restaurant reviews spanning the full star range.
///
/// Small enough to ingest instantly, varied enough that food, service,
/// atmosphere and price queries all find something.
pub fn sample_reviews() -> Vec<Review> {
    vec![
        Review::new(
            "sample_001",
            "Absolutely wonderful experience from start to finish. The handmade \
             pasta was delicious and the sauce tasted incredibly fresh. Our server \
             was attentive without hovering and gave excellent recommendations. \
             The atmosphere was cozy with warm lighting and quiet music. Prices \
             felt reasonable for the quality on the plate. We will be back every \
             time we visit the neighborhood.",
            5,
        ),
        Review::new(
            "sample_002",
            "Great brunch spot with fresh ingredients and generous portions. The \
             avocado toast was excellent and the coffee was strong. Service was \
             friendly although we waited about ten minutes for a table on Sunday. \
             Good value for the price point in this part of town. The patio \
             seating is lovely when the weather cooperates.",
            4,
        ),
        Review::new(
            "sample_003",
            "The food was decent but nothing memorable. My burger arrived \
             slightly cold and the fries needed salt. Our waiter was polite yet \
             the service felt slow for a half empty restaurant. The dining room \
             is clean and the location is convenient to the train station. \
             Average experience overall and I might give it another chance.",
            3,
        ),
        Review::new(
            "sample_004",
            "Disappointing dinner considering the prices. The steak was \
             overcooked and bland for a thirty dollar plate. We had to flag \
             someone down twice just to get refills. The room was loud and \
             cramped with tables packed too close together. Expensive for what \
             you actually get and there are better options nearby.",
            2,
        ),
        Review::new(
            "sample_005",
            "Terrible experience and I would avoid this place. We waited almost \
             an hour for cold food and the order was still wrong. The staff was \
             rude when we raised the problem and never apologized. The table was \
             sticky and the restroom was worse. A complete waste of money and an \
             evening I will not get back.",
            1,
        ),
    ]
}

/// Load reviews from a JSONL file, one JSON object per line.
///
/// Blank lines are skipped; I/O and parse errors propagate.
pub fn load_jsonl<P: AsRef<Path>>(path: P) -> Result<Vec<Review>> {
    let file = File::open(path.as_ref())?;
    let reader = BufReader::new(file);

    let mut reviews = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        reviews.push(serde_json::from_str(&line)?);
    }

    debug!(
        path = %path.as_ref().display(),
        reviews = reviews.len(),
        "loaded reviews"
    );
    Ok(reviews)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Write;

    use crate::error::XystonError;

    #[test]
    fn test_sample_reviews_shape() {
        let reviews = sample_reviews();
        assert_eq!(reviews.len(), 5);

        let ids: Vec<&str> = reviews
            .iter()
            .map(|r| r.review_id.as_deref().unwrap())
            .collect();
        assert_eq!(
            ids,
            vec![
                "sample_001",
                "sample_002",
                "sample_003",
                "sample_004",
                "sample_005"
            ]
        );

        let mut stars: Vec<u8> = reviews.iter().map(|r| r.stars).collect();
        stars.sort_unstable();
        assert_eq!(stars, vec![1, 2, 3, 4, 5]);

        for review in &reviews {
            assert!(review.text.chars().count() > 50);
        }
    }

    #[test]
    fn test_load_jsonl_skips_blank_lines() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, r#"{{"review_id":"r1","text":"Great food","stars":5}}"#).unwrap();
        writeln!(file).unwrap();
        writeln!(file, r#"{{"text":"No id on this one","stars":2}}"#).unwrap();
        file.flush().unwrap();

        let reviews = load_jsonl(file.path()).unwrap();
        assert_eq!(reviews.len(), 2);
        assert_eq!(reviews[0].review_id.as_deref(), Some("r1"));
        assert_eq!(reviews[0].stars, 5);
        assert_eq!(reviews[1].review_id, None);
        assert_eq!(reviews[1].text, "No id on this one");
    }

    #[test]
    fn test_load_jsonl_propagates_parse_errors() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "not json at all").unwrap();
        file.flush().unwrap();

        let result = load_jsonl(file.path());
        assert!(matches!(result, Err(XystonError::Json(_))));
    }

    #[test]
    fn test_load_jsonl_missing_file() {
        let result = load_jsonl("/definitely/not/here.jsonl");
        assert!(matches!(result, Err(XystonError::Io(_))));
    }
}
