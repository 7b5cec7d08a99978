use codesnip_types::{Extraction, ExtractionOutcome};

use crate::error::ExtractError;

/// Trim the raw engine output and classify it. Non-empty text survives
/// byte-for-byte apart from the outer whitespace.
pub fn classify(raw: &str) -> Extraction {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        Extraction::NoText
    } else {
        Extraction::Text(trimmed.to_owned())
    }
}

/// Map the pipeline result into the tagged value the presentation layer
/// consumes. Failures keep their reason; they are never folded into
/// `NoTextRecognized`.
pub fn into_outcome(result: Result<Extraction, ExtractError>) -> ExtractionOutcome {
    match result {
        Ok(Extraction::Text(text)) => ExtractionOutcome::Text(text),
        Ok(Extraction::NoText) => ExtractionOutcome::NoTextRecognized,
        Err(err) => ExtractionOutcome::OperationFailed(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_trims_and_keeps_inner_content_exact() {
        let raw = "  let x = foo(\"bar\")\n\n";
        match classify(raw) {
            Extraction::Text(text) => assert_eq!(text, "let x = foo(\"bar\")"),
            Extraction::NoText => panic!("expected text"),
        }
    }

    #[test]
    fn whitespace_only_output_is_no_text() {
        assert_eq!(classify("   \n\t  "), Extraction::NoText);
        assert_eq!(classify(""), Extraction::NoText);
    }

    #[test]
    fn failures_stay_distinct_from_no_text() {
        let outcome = into_outcome(Err(ExtractError::Capture("backend gone".into())));
        match outcome {
            ExtractionOutcome::OperationFailed(reason) => {
                assert!(reason.contains("backend gone"))
            }
            other => panic!("capture failure conflated into {other:?}"),
        }

        let outcome = into_outcome(Ok(Extraction::NoText));
        assert_eq!(outcome, ExtractionOutcome::NoTextRecognized);
    }
}
