use tabled::{settings::Style, Table, Tabled};

use super::ReportEnvelope;

#[derive(Tabled)]
struct MetricRow {
    #[tabled(rename = "Metric")]
    metric: &'static str,
    #[tabled(rename = "Value")]
    value: String,
}

fn format_curve(curve: &[f64]) -> String {
    curve
        .iter()
        .map(|v| format!("{:.3}", v))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Human-readable report: a metrics table followed by the burnout reasons
pub fn render(envelope: &ReportEnvelope) -> String {
    let metrics = &envelope.report.metrics;
    let burnout = &metrics.burnout_risk;

    let rows = vec![
        MetricRow {
            metric: "Mood std",
            value: format!("{:.4}", metrics.volatility.mood_std),
        },
        MetricRow {
            metric: "Mood jump",
            value: format!("{:.4}", metrics.volatility.mood_jump),
        },
        MetricRow {
            metric: "Volatility score",
            value: format!("{:.2}", metrics.volatility.volatility_score),
        },
        MetricRow {
            metric: "Latest stress load",
            value: format!("{:.3}", metrics.stress_accumulation.latest_accumulation),
        },
        MetricRow {
            metric: "Stress load trend",
            value: format!("{:+.4}", metrics.stress_accumulation.accumulation_trend_slope),
        },
        MetricRow {
            metric: "Burnout risk",
            value: format!(
                "{:.2} ({})",
                burnout.burnout_risk_score, burnout.burnout_risk_label
            ),
        },
        MetricRow {
            metric: "Emotional battery",
            value: format!("{:.2}", metrics.emotional_battery),
        },
    ];

    let mut lines = vec![
        "WELLNESS REPORT".to_string(),
        format!("Source: {}", envelope.source),
        format!("Days: {}", envelope.days),
        format!(
            "Generated: {}",
            envelope.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        ),
        String::new(),
        Table::new(rows).with(Style::rounded()).to_string(),
        String::new(),
        format!(
            "Stress load curve: {}",
            format_curve(&metrics.stress_accumulation.accumulation_curve)
        ),
        String::new(),
        "Burnout drivers:".to_string(),
    ];
    lines.extend(burnout.burnout_reasons.iter().map(|r| format!("  • {}", r)));

    if let Some(debug) = &burnout.components_debug {
        lines.push(String::new());
        lines.push("Burnout components:".to_string());
        lines.push(format!(
            "  stress {:.4} | sleep {:.4} | energy {:.4} | mood {:.4} | raw {:.4}",
            debug.contributions.stress,
            debug.contributions.sleep,
            debug.contributions.energy,
            debug.contributions.mood,
            debug.risk_raw
        ));
    }

    lines.push(String::new());
    lines.push(envelope.report.disclaimer.clone());
    lines.push(String::new());

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::tests::sample_envelope;

    #[test]
    fn test_text_report_sections() {
        let text = render(&sample_envelope());

        assert!(text.starts_with("WELLNESS REPORT"));
        assert!(text.contains("Source: sample"));
        assert!(text.contains("Burnout risk"));
        assert!(text.contains("(Yellow)"));
        assert!(text.contains("Burnout drivers:"));
        assert!(text.contains("Wellness insights only. Not medical diagnosis."));
        assert!(!text.contains("Burnout components:"));
    }

    #[test]
    fn test_curve_formatting() {
        assert_eq!(format_curve(&[1.0, 1.8, 2.44]), "1.000 1.800 2.440");
        assert_eq!(format_curve(&[]), "");
    }
}
