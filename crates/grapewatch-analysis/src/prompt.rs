//! Instruction text sent to the vision model alongside each image.

use grapewatch_core::models::sentinels::{
    HEALTHY_CONFIDENCE, HEALTHY_EXPLANATION, HEALTHY_LABEL,
};
use grapewatch_core::Verdict;

/// Example record shown to the model. Its explanation contains quotes so the
/// serialized form demonstrates escaping.
fn example_record() -> String {
    let example = Verdict::new(
        "Powdery Mildew",
        0.95,
        "The problem is \"powdery\" mildew and it's quite severe.",
    );
    serde_json::to_string(&example).expect("example verdict serializes")
}

/// Build the instruction for one analysis.
pub fn instruction() -> String {
    let example = example_record();
    format!(
        "You are an expert viticulturist AI. Analyze the provided image of grape leaves/plant \
         for any signs of diseases or health issues. \
         Identify the disease, provide a confidence score (0.0 to 1.0), and a brief explanation. \
         Respond in STRICT JSON format with double quotes for keys and string values. \
         ALL internal double quotes within string values MUST be escaped (e.g., \\\"your text\\\"). \
         Fields: 'disease_detected', 'confidence_score', 'explanation'. \
         Example: {example} \
         If no disease is detected, set 'disease_detected' to '{HEALTHY_LABEL}', \
         'confidence_score' to {HEALTHY_CONFIDENCE:.1} and 'explanation' to '{HEALTHY_EXPLANATION}'. \
         YOUR RESPONSE MUST BE ONLY THE JSON OBJECT. DO NOT USE ANY OTHER TEXT OR MARKDOWN CODE FENCES."
    )
}
