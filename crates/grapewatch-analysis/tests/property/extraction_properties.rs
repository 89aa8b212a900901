//! Property tests for verdict extraction.

use proptest::prelude::*;

use grapewatch_analysis::extraction::{normalize, parse_response};
use grapewatch_core::{ParseOutcome, Verdict};

fn verdict_strategy() -> impl Strategy<Value = Verdict> {
    (
        "[A-Za-zğüşöçİı \"(){}]{1,40}",
        (0u32..=100).prop_map(|n| f64::from(n) / 100.0),
        "[A-Za-z0-9 .,\"'{}\\n]{0,80}",
    )
        .prop_map(|(label, score, explanation)| Verdict::new(label, score, explanation))
}

proptest! {
    // Any valid record decodes to itself.
    #[test]
    fn prop_encoded_verdict_decodes_directly(v in verdict_strategy()) {
        let encoded = serde_json::to_string(&v).unwrap();
        let (decoded, outcome) = parse_response(&encoded);
        prop_assert_eq!(outcome, ParseOutcome::Direct);
        prop_assert_eq!(decoded, v);
    }

    // Fences around a record do not change the result.
    #[test]
    fn prop_fence_stripping_is_transparent(v in verdict_strategy(), pad in "[ \\n\\t]{0,4}") {
        let encoded = serde_json::to_string(&v).unwrap();
        let fenced = format!("{pad}```json{pad}{encoded}{pad}```{pad}");
        prop_assert_eq!(normalize(&fenced), encoded.as_str());
        prop_assert_eq!(parse_response(&fenced), parse_response(&encoded));
    }

    // Prose without braces around a single record recovers that record.
    #[test]
    fn prop_record_in_prose_is_recovered(
        v in verdict_strategy(),
        before in "[A-Za-z .:\\n]{1,40}",
        after in "[A-Za-z .!\\n]{1,40}",
    ) {
        let encoded = serde_json::to_string(&v).unwrap();
        let text = format!("{before}{encoded}{after}");
        let (decoded, outcome) = parse_response(&text);
        prop_assert!(outcome.is_success());
        prop_assert_eq!(decoded, v);
    }

    // Text without any brace never yields a decoded record, and the raw text
    // is always embedded in the diagnostic.
    #[test]
    fn prop_braceless_text_is_no_record(text in "[^{}]{1,120}") {
        let (verdict, outcome) = parse_response(&text);
        prop_assert!(verdict.is_unknown());
        prop_assert_eq!(verdict.confidence_score(), 0.0);
        prop_assert!(verdict.explanation().contains(text.as_str()));
        prop_assert_eq!(outcome, ParseOutcome::NoRecordFound);
    }
}
