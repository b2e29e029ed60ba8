//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use adscope_domain::{labels, ClassificationRecord, Score};
use colored::*;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a classification record.
    pub fn format_record(&self, record: &ClassificationRecord) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(adscope_export::to_canonical_json(record)?),
            OutputFormat::Csv => Ok(adscope_export::to_canonical_csv(record)),
            OutputFormat::Table => Ok(self.format_record_table(record)),
        }
    }

    /// Format a record as an overview table plus a sub-score table.
    fn format_record_table(&self, record: &ClassificationRecord) -> String {
        let mut builder = Builder::default();
        builder.push_record(["Field", "Value"]);
        builder.push_record(["Ad name", &record.ads_name]);
        builder.push_record(["Ad type", labels::ad_type_label(&record.ad_type)]);
        builder.push_record([
            "Categories",
            &join_labelled(&record.ad_type_category, labels::category_label),
        ]);
        builder.push_record([
            "Themes",
            &join_labelled(&record.ad_theme, labels::theme_label),
        ]);
        builder.push_record(["Target age", labels::target_age_label(&record.target_age)]);
        builder.push_record([
            "Target gender",
            labels::target_gender_label(&record.target_gender),
        ]);
        builder.push_record(["Notes", &record.notes.join(", ")]);

        let mut overview = builder.build();
        overview
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        let mut builder = Builder::default();
        builder.push_record(["Group", "Key", "Label", "Score"]);
        push_scores(&mut builder, "motivation", labels::motivation_label, [
            ("fun", &record.motivation.fun),
            ("social", &record.motivation.social),
            ("rewards", &record.motivation.rewards),
            ("savings", &record.motivation.savings),
            ("trust", &record.motivation.trust),
            ("convenience", &record.motivation.convenience),
            ("growth", &record.motivation.growth),
            ("status_display", &record.motivation.status_display),
            ("curiosity", &record.motivation.curiosity),
            ("habit_building", &record.motivation.habit_building),
            ("safety_net", &record.motivation.safety_net),
        ]);
        push_scores(&mut builder, "engagement", labels::engagement_label, [
            ("casual_score", &record.engagement.casual_score),
            ("hardcore_score", &record.engagement.hardcore_score),
            ("frequency_score", &record.engagement.frequency_score),
            ("multi_app_usage", &record.engagement.multi_app_usage),
            ("retention_potential", &record.engagement.retention_potential),
        ]);
        builder.push_record([
            "engagement",
            "session_length_expectation",
            labels::engagement_label("session_length_expectation"),
            record.engagement.session_length_expectation.as_str(),
        ]);
        push_scores(&mut builder, "promo", labels::promo_label, [
            ("install_reward_sensitive", &record.promo.install_reward_sensitive),
            ("coupon_event_sensitive", &record.promo.coupon_event_sensitive),
            ("fomo_sensitive", &record.promo.fomo_sensitive),
            ("exclusive_benefit_sensitive", &record.promo.exclusive_benefit_sensitive),
            ("trial_experience_sensitive", &record.promo.trial_experience_sensitive),
        ]);
        push_scores(&mut builder, "brand", labels::brand_label, [
            ("brand_loyalty", &record.brand.brand_loyalty),
            ("nostalgia", &record.brand.nostalgia),
            ("trust_in_official", &record.brand.trust_in_official),
            ("award_proof_sensitive", &record.brand.award_proof_sensitive),
            ("local_trust_factor", &record.brand.local_trust_factor),
            ("global_trust_factor", &record.brand.global_trust_factor),
        ]);
        push_scores(&mut builder, "commerce", labels::commerce_label, [
            ("price_sensitivity", &record.commerce.price_sensitivity),
            ("premium_willingness", &record.commerce.premium_willingness),
            ("transaction_frequency", &record.commerce.transaction_frequency),
            ("risk_tolerance", &record.commerce.risk_tolerance),
            ("recurring_payment", &record.commerce.recurring_payment),
            ("big_purchase_intent", &record.commerce.big_purchase_intent),
        ]);

        let mut scores = builder.build();
        scores
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        format!("{}\n{}", overview, scores)
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "green" => text.green().to_string(),
            "red" => text.red().to_string(),
            _ => text.to_string(),
        }
    }
}

fn push_scores<const N: usize>(
    builder: &mut Builder,
    group: &str,
    label: fn(&str) -> &str,
    entries: [(&str, &Score); N],
) {
    for (key, score) in entries {
        builder.push_record([group, key, label(key), &score.to_cell()]);
    }
}

fn join_labelled(items: &[String], label: fn(&str) -> &str) -> String {
    items
        .iter()
        .map(|item| label(item))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record() -> ClassificationRecord {
        serde_json::from_value(json!({
            "ad_type": "game",
            "ad_theme": ["fantasy"],
            "target_age": "teens",
            "target_gender": "neutral",
            "motivation": {"fun": 0.8}
        }))
        .unwrap()
    }

    #[test]
    fn test_json_format_is_canonical() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_record(&record()).unwrap();
        assert!(output.contains("\"ad_type\": \"game\""));
    }

    #[test]
    fn test_csv_format_has_two_lines() {
        let formatter = Formatter::new(OutputFormat::Csv, false);
        let output = formatter.format_record(&record()).unwrap();
        assert_eq!(output.trim_end().split("\r\n").count(), 2);
    }

    #[test]
    fn test_table_format_uses_labels() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_record(&record()).unwrap();
        assert!(output.contains("게임")); // localized ad type
        assert!(output.contains("판타지")); // localized theme
        assert!(output.contains("0.8"));
    }

    #[test]
    fn test_colorize_disabled_leaves_text_plain() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert_eq!(formatter.success("done"), "✓ done");
        assert_eq!(formatter.error("boom"), "✗ boom");
    }
}
