//! Classification Record - the schema-complete output of one classification

use crate::lenient;
use crate::metadata::AdMetadata;
use crate::score::Score;
use crate::session::SessionLength;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Psychological motivation sub-scores.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotivationScores {
    /// Interest in game or entertainment value
    pub fun: Score,
    /// Desire to share or interact with others
    pub social: Score,
    /// Desire for points and benefits
    pub rewards: Score,
    /// Desire to save money
    pub savings: Score,
    /// Preference for safe, trustworthy services
    pub trust: Score,
    /// Preference for simple, easy usage
    pub convenience: Score,
    /// Desire for personal development or learning
    pub growth: Score,
    /// Desire for social status and recognition
    pub status_display: Score,
    /// Desire to explore something new
    pub curiosity: Score,
    /// Preference for building regular behavior patterns
    pub habit_building: Score,
    /// Desire to avoid risk and stay safe
    pub safety_net: Score,
}

/// App-usage engagement sub-scores plus the session-length category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngagementScores {
    /// Preference for light, casual usage
    pub casual_score: Score,
    /// Preference for deep, involved usage
    pub hardcore_score: Score,
    /// Preference for frequently used apps
    pub frequency_score: Score,
    /// Tendency to use several apps side by side
    pub multi_app_usage: Score,
    /// Preference for apps worth keeping long-term
    pub retention_potential: Score,
    /// Expected time-in-app per session
    pub session_length_expectation: SessionLength,
}

/// Promotion-sensitivity sub-scores.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromoScores {
    /// Sensitivity to install rewards
    pub install_reward_sensitive: Score,
    /// Sensitivity to coupons and events
    pub coupon_event_sensitive: Score,
    /// Sensitivity to fear-of-missing-out framing
    pub fomo_sensitive: Score,
    /// Sensitivity to exclusive benefits
    pub exclusive_benefit_sensitive: Score,
    /// Sensitivity to free trials and samples
    pub trial_experience_sensitive: Score,
}

/// Brand-perception sub-scores.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrandScores {
    /// Loyalty toward a named brand
    pub brand_loyalty: Score,
    /// Response to retro or nostalgic framing
    pub nostalgia: Score,
    /// Trust in official or certified channels
    pub trust_in_official: Score,
    /// Sensitivity to awards and certifications
    pub award_proof_sensitive: Score,
    /// Domestic-market trust factor
    pub local_trust_factor: Score,
    /// Global-market trust factor
    pub global_trust_factor: Score,
}

/// Purchase-behavior sub-scores.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommerceScores {
    /// Sensitivity to price and discounts
    pub price_sensitivity: Score,
    /// Willingness to pay for premium offerings
    pub premium_willingness: Score,
    /// Tendency toward frequent transactions
    pub transaction_frequency: Score,
    /// Tolerance for financial risk
    pub risk_tolerance: Score,
    /// Affinity for subscription payment models
    pub recurring_payment: Score,
    /// Intent toward large purchases
    pub big_purchase_intent: Score,
}

/// The schema-complete structured output of one classification request.
///
/// Field order here is the canonical JSON key order. Deserialization is
/// total: any missing field takes its schema default, wrong-shaped values
/// collapse leniently, and unknown extra keys from the model are carried in
/// `extra` rather than rejected.
///
/// A record is created fresh per classification call, receives its echoed
/// metadata exactly once via [`ClassificationRecord::apply_metadata`], and is
/// never mutated after that.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassificationRecord {
    /// Ad category code, or free text when user-overridden
    #[serde(deserialize_with = "lenient::string")]
    pub ad_type: String,

    /// Ordered sub-classification tags
    #[serde(deserialize_with = "lenient::string_list")]
    pub ad_type_category: Vec<String>,

    /// Ordered narrative/appeal tags
    #[serde(deserialize_with = "lenient::string_list")]
    pub ad_theme: Vec<String>,

    /// Target age bracket (`all_ages` when no signal exists)
    #[serde(deserialize_with = "lenient::string")]
    pub target_age: String,

    /// Target gender (`neutral` when no signal exists)
    #[serde(deserialize_with = "lenient::string")]
    pub target_gender: String,

    /// Motivation sub-scores
    #[serde(deserialize_with = "lenient::group")]
    pub motivation: MotivationScores,

    /// Engagement sub-scores
    #[serde(deserialize_with = "lenient::group")]
    pub engagement: EngagementScores,

    /// Promotion sub-scores
    #[serde(deserialize_with = "lenient::group")]
    pub promo: PromoScores,

    /// Brand sub-scores
    #[serde(deserialize_with = "lenient::group")]
    pub brand: BrandScores,

    /// Commerce sub-scores
    #[serde(deserialize_with = "lenient::group")]
    pub commerce: CommerceScores,

    /// Short justification strings from the model
    #[serde(deserialize_with = "lenient::string_list")]
    pub notes: Vec<String>,

    /// Echoed: unique ad index
    #[serde(deserialize_with = "lenient::string")]
    pub ads_idx: String,

    /// Echoed: campaign code
    #[serde(deserialize_with = "lenient::string")]
    pub ads_code: String,

    /// Echoed: ad display name
    #[serde(deserialize_with = "lenient::string")]
    pub ads_name: String,

    /// Echoed: ad summary
    #[serde(deserialize_with = "lenient::string")]
    pub ads_summary: String,

    /// Echoed: participation guide
    #[serde(deserialize_with = "lenient::string")]
    pub ads_guide: String,

    /// Echoed: participation restrictions
    #[serde(deserialize_with = "lenient::string")]
    pub ads_limit: String,

    /// Echoed: reward amount
    #[serde(deserialize_with = "lenient::string")]
    pub ads_reward_price: String,

    /// Echoed: minimum eligible age
    #[serde(deserialize_with = "lenient::string")]
    pub ads_age_min: String,

    /// Echoed: maximum eligible age
    #[serde(deserialize_with = "lenient::string")]
    pub ads_age_max: String,

    /// Echoed: campaign start date
    #[serde(deserialize_with = "lenient::string")]
    pub ads_sdate: String,

    /// Echoed: campaign end date
    #[serde(deserialize_with = "lenient::string")]
    pub ads_edate: String,

    /// Unknown extra keys from the model, tolerated and carried through
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ClassificationRecord {
    /// Merge the echoed input metadata into this record.
    ///
    /// Overwrites only the metadata keys; the classification keys the model
    /// produced are left untouched.
    pub fn apply_metadata(&mut self, meta: &AdMetadata) {
        self.ads_idx = meta.ads_idx.clone();
        self.ads_code = meta.ads_code.clone();
        self.ads_name = meta.ads_name.clone();
        self.ads_summary = meta.ads_summary.clone();
        self.ads_guide = meta.ads_guide.clone();
        self.ads_limit = meta.ads_limit.clone();
        self.ads_reward_price = meta.ads_reward_price.clone();
        self.ads_age_min = meta.ads_age_min.clone();
        self.ads_age_max = meta.ads_age_max.clone();
        self.ads_sdate = meta.ads_sdate.clone();
        self.ads_edate = meta.ads_edate.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_object_yields_schema_defaults() {
        let record: ClassificationRecord = serde_json::from_value(json!({})).unwrap();
        assert_eq!(record.ad_type, "");
        assert!(record.ad_type_category.is_empty());
        assert!(record.ad_theme.is_empty());
        assert_eq!(record.motivation.fun.as_f64(), Some(0.0));
        assert_eq!(record.commerce.big_purchase_intent.as_f64(), Some(0.0));
        assert_eq!(
            record.engagement.session_length_expectation,
            SessionLength::Short
        );
        assert!(record.notes.is_empty());
    }

    #[test]
    fn test_wrong_shaped_group_collapses_to_default() {
        let record: ClassificationRecord =
            serde_json::from_value(json!({"motivation": "very motivated"})).unwrap();
        assert_eq!(record.motivation, MotivationScores::default());
    }

    #[test]
    fn test_extra_keys_are_carried() {
        let record: ClassificationRecord =
            serde_json::from_value(json!({"ad_type": "game", "confidence": 0.9})).unwrap();
        assert_eq!(record.extra.get("confidence"), Some(&json!(0.9)));
    }

    #[test]
    fn test_apply_metadata_overwrites_only_metadata_keys() {
        let mut record: ClassificationRecord =
            serde_json::from_value(json!({"ad_type": "game", "ads_name": "model-said-this"}))
                .unwrap();
        let meta = AdMetadata {
            ads_name: "Coin Quest".to_string(),
            ads_idx: "42".to_string(),
            ..AdMetadata::default()
        };
        record.apply_metadata(&meta);
        assert_eq!(record.ad_type, "game");
        assert_eq!(record.ads_name, "Coin Quest");
        assert_eq!(record.ads_idx, "42");
    }

    #[test]
    fn test_canonical_json_key_order() {
        let record = ClassificationRecord::default();
        let text = serde_json::to_string(&record).unwrap();
        let ad_type = text.find("\"ad_type\"").unwrap();
        let motivation = text.find("\"motivation\"").unwrap();
        let notes = text.find("\"notes\"").unwrap();
        let ads_idx = text.find("\"ads_idx\"").unwrap();
        assert!(ad_type < motivation);
        assert!(motivation < notes);
        assert!(notes < ads_idx);
    }
}
