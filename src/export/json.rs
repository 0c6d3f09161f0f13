use super::ReportEnvelope;
use crate::error::Result;

/// Pretty-printed JSON for an envelope
pub fn render(envelope: &ReportEnvelope) -> Result<String> {
    Ok(serde_json::to_string_pretty(envelope)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::tests::sample_envelope;

    #[test]
    fn test_render_envelope() {
        let envelope = sample_envelope();
        let text = render(&envelope).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();

        assert_eq!(value["days"], 7);
        assert_eq!(
            value["report"]["disclaimer"],
            "Wellness insights only. Not medical diagnosis."
        );
        assert!(value["generated_at"].is_string());
    }
}
