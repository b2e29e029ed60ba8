//! Ad metadata module - caller-supplied input fields

use serde::{Deserialize, Serialize};

/// Caller-supplied advertisement fields.
///
/// Everything here is opaque pass-through text: it feeds the prompt and is
/// echoed unchanged into the final Classification Record. The two trailing
/// fields are optional user overrides that steer (but do not replace) the
/// model's own classification.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdMetadata {
    /// Unique ad index
    pub ads_idx: String,

    /// Campaign code; ads sharing a code admit only one participation
    pub ads_code: String,

    /// Ad display name
    pub ads_name: String,

    /// Short ad summary
    pub ads_summary: String,

    /// Participation guide text
    pub ads_guide: String,

    /// Participation restrictions
    pub ads_limit: String,

    /// Reward amount offered for participation
    pub ads_reward_price: String,

    /// Minimum eligible age
    pub ads_age_min: String,

    /// Maximum eligible age
    pub ads_age_max: String,

    /// Campaign start date
    pub ads_sdate: String,

    /// Campaign end date
    pub ads_edate: String,

    /// User-specified ad type override (empty for automatic classification)
    pub ad_type: String,

    /// User-specified ad category override (empty for automatic classification)
    pub ad_type_category: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_default_to_empty() {
        let meta: AdMetadata = serde_json::from_str(r#"{"ads_name": "Coin Quest"}"#).unwrap();
        assert_eq!(meta.ads_name, "Coin Quest");
        assert_eq!(meta.ads_code, "");
        assert_eq!(meta.ad_type, "");
    }
}
