//! Page assembly

use std::fmt::Write;

use crate::model::FeatureSchema;
use crate::prediction::{Diagnosis, PredictionReport};

use super::chart::{importance_chart, probability_chart, ChartError};
use super::escape;
use super::theme::{
    AWARENESS_IMAGE_URL, AWARENESS_LINK_URL, BENIGN_ICON_URL, MALIGNANT_ICON_URL, PAGE_TITLE,
    STYLESHEET,
};

/// Full page: input form, optional results, awareness section.
///
/// `values` pre-fills the inputs and must follow schema order.
pub fn render_page(
    schema: &FeatureSchema,
    values: &[f64],
    report: Option<&PredictionReport>,
) -> Result<String, ChartError> {
    let mut body = String::new();

    body.push_str(r#"<div class="layout">"#);
    render_form(&mut body, schema, values);

    body.push_str(r#"<main class="main">"#);
    let _ = write!(body, "<h1>🩺 {}</h1>", escape(PAGE_TITLE));
    if let Some(report) = report {
        render_results(&mut body, report)?;
    }
    render_awareness(&mut body);
    body.push_str("</main></div>");

    Ok(document(PAGE_TITLE, &body))
}

/// Standalone page for a failed submission or server error
pub fn render_error(title: &str, message: &str) -> String {
    let body = format!(
        r#"<main class="main" style="padding: 24px;"><h1>🩺 {title}</h1><div class="error-banner"><p>{message}</p></div><p><a href="/">Back to the form</a></p></main>"#,
        title = escape(title),
        message = escape(message)
    );
    document(title, &body)
}

fn document(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\"><head><meta charset=\"utf-8\"><meta name=\"viewport\" content=\"width=device-width, initial-scale=1\"><title>{title}</title><style>{css}</style></head><body>{body}</body></html>",
        title = escape(title),
        css = STYLESHEET,
        body = body
    )
}

// ============================================================================
// INPUT FORM
// ============================================================================

fn render_form(out: &mut String, schema: &FeatureSchema, values: &[f64]) {
    out.push_str(r#"<aside class="sidebar"><h2>🚀 Enter Patient Features</h2><form method="post" action="/predict">"#);

    for (i, name) in schema.iter().enumerate() {
        let value = values.get(i).copied().unwrap_or(0.0);
        let _ = write!(
            out,
            r#"<label for="feature-{i}">{name}</label><input id="feature-{i}" type="number" name="value" step="any" value="{value}" required>"#,
            i = i,
            name = escape(name),
            value = display_value(value)
        );
    }

    out.push_str(r#"<button type="submit">Predict Now</button></form></aside>"#);
}

/// Five decimals, unless that would change the value on resubmission
fn display_value(value: f64) -> String {
    let fixed = format!("{:.5}", value);
    if fixed.parse::<f64>().ok() == Some(value) {
        fixed
    } else {
        value.to_string()
    }
}

// ============================================================================
// RESULTS
// ============================================================================

fn render_results(out: &mut String, report: &PredictionReport) -> Result<(), ChartError> {
    let icon_url = match report.diagnosis {
        Diagnosis::Malignant => MALIGNANT_ICON_URL,
        Diagnosis::Benign => BENIGN_ICON_URL,
    };

    out.push_str(r#"<div class="columns">"#);

    let _ = write!(
        out,
        r#"<div class="card"><div class="card-inner"><div class="card-front"><h2>Prediction Result</h2><p>{label} {icon}</p></div><div class="card-back"><img src="{img}" width="150" alt="{label}"><p>Click to flip</p></div></div></div>"#,
        label = report.diagnosis.as_str(),
        icon = report.diagnosis.icon(),
        img = icon_url
    );

    let _ = write!(
        out,
        r#"<div class="card"><div class="card-inner"><div class="card-front"><h2>Risk Alert</h2><p>{tier} {icon}</p></div><div class="card-back"><p>Malignant Probability: {pct:.2}%</p><p>Click to flip</p></div></div></div>"#,
        tier = report.risk_tier.as_str(),
        icon = report.risk_tier.icon(),
        pct = report.probabilities.malignant * 100.0
    );

    out.push_str("</div>");

    out.push_str(r#"<h3>Prediction Probabilities</h3><div class="chart">"#);
    out.push_str(&probability_chart(&report.probabilities).to_svg()?);
    out.push_str("</div>");

    if let Some(chart) = importance_chart(&report.importances) {
        out.push_str(r#"<h3>Top Feature Importance</h3><div class="chart">"#);
        out.push_str(&chart.to_svg()?);
        out.push_str("</div>");
    }
    Ok(())
}

// ============================================================================
// AWARENESS
// ============================================================================

fn render_awareness(out: &mut String) {
    let _ = write!(
        out,
        r#"<hr><h2>Breast Cancer Awareness</h2><img src="{img}" width="600" alt="Breast cancer overview" style="max-width: 100%;"><p>Learn More About Breast Cancer</p><p><a href="{link}" target="_blank" rel="noopener">Click Here</a></p>"#,
        img = escape(AWARENESS_IMAGE_URL),
        link = escape(AWARENESS_LINK_URL)
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prediction::types::RiskTier;
    use crate::prediction::{ClassProbabilities, FeatureImportance};

    fn schema() -> FeatureSchema {
        FeatureSchema::new(vec!["mean radius".to_string(), "worst <area>".to_string()]).unwrap()
    }

    fn report(importances: Vec<FeatureImportance>) -> PredictionReport {
        PredictionReport {
            diagnosis: Diagnosis::Malignant,
            probabilities: ClassProbabilities { benign: 0.1234, malignant: 0.8766 },
            risk_tier: RiskTier::High,
            importances,
        }
    }

    #[test]
    fn test_form_has_one_input_per_feature() {
        let html = render_page(&schema(), &[], None).unwrap();
        assert_eq!(html.matches(r#"name="value""#).count(), 2);
        assert!(html.contains(r#"value="0.00000""#));
        assert!(html.contains("worst &lt;area&gt;"));
        assert!(html.contains("Predict Now"));
        assert!(!html.contains("Prediction Result"));
        assert!(html.contains("Breast Cancer Awareness"));
    }

    #[test]
    fn test_form_keeps_submitted_values() {
        let html = render_page(&schema(), &[1.5, -0.00001], None).unwrap();
        assert!(html.contains(r#"value="1.50000""#));
        assert!(html.contains(r#"value="-0.00001""#));
        assert!(html.contains(r#"step="any""#));
    }

    #[test]
    fn test_form_keeps_values_beyond_five_decimals() {
        let html = render_page(&schema(), &[1e-7, 0.123456789], None).unwrap();
        assert!(html.contains(r#"value="0.0000001""#));
        assert!(html.contains(r#"value="0.123456789""#));
        assert!(!html.contains(r#"value="0.00000""#));
    }

    #[test]
    fn test_results_rendered() {
        let importances = vec![FeatureImportance { feature: "mean radius".to_string(), importance: 2.0 }];
        let html = render_page(&schema(), &[0.0, 0.0], Some(&report(importances))).unwrap();
        assert!(html.contains("Malignant ⚠️"));
        assert!(html.contains("High Risk ⚠️"));
        assert!(html.contains("Malignant Probability: 87.66%"));
        assert!(html.contains("Prediction Probabilities"));
        assert!(html.contains("Top Feature Importance"));
        assert!(html.contains(MALIGNANT_ICON_URL));
    }

    #[test]
    fn test_importance_chart_omitted_when_empty() {
        let html = render_page(&schema(), &[0.0, 0.0], Some(&report(vec![]))).unwrap();
        assert!(html.contains("Prediction Probabilities"));
        assert!(!html.contains("Top Feature Importance"));
    }

    #[test]
    fn test_error_page() {
        let html = render_error("Invalid input", "expected 2 feature values, got 3");
        assert!(html.contains("expected 2 feature values, got 3"));
        assert!(html.contains(r#"href="/""#));
    }
}
