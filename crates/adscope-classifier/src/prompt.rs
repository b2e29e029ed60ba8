//! Prompt engineering for ad classification

use adscope_domain::AdMetadata;

/// Builds prompts for the external model to classify one advertisement
///
/// Pure and deterministic: the same metadata always yields the same prompt,
/// and every supplied field value appears verbatim. No truncation is applied;
/// length limits imposed by the hosted service are the caller's concern.
pub struct PromptBuilder {
    metadata: AdMetadata,
}

impl PromptBuilder {
    /// Create a new prompt builder for the given ad metadata
    pub fn new(metadata: AdMetadata) -> Self {
        Self { metadata }
    }

    /// Build the complete classification prompt
    pub fn build(&self) -> String {
        let mut prompt = String::new();

        prompt.push_str(CLASSIFICATION_INSTRUCTIONS);
        prompt.push_str("\n\nAd text:\n");
        prompt.push_str(&self.render_ad_text());

        prompt
    }

    /// Render the ad metadata as labelled lines for the prompt
    fn render_ad_text(&self) -> String {
        let m = &self.metadata;
        format!(
            "Ad name: {}\n\
             Summary: {}\n\
             Guide: {}\n\
             Restrictions: {}\n\
             Reward price: {}\n\
             Age range: {}~{}\n\
             Start date: {}\n\
             End date: {}\n\
             User-specified ad type: {}\n\
             User-specified ad category: {}",
            m.ads_name,
            m.ads_summary,
            m.ads_guide,
            m.ads_limit,
            m.ads_reward_price,
            m.ads_age_min,
            m.ads_age_max,
            m.ads_sdate,
            m.ads_edate,
            m.ad_type,
            m.ad_type_category,
        )
    }
}

const CLASSIFICATION_INSTRUCTIONS: &str = r#"1. Role definition
You are a classifier that analyzes advertisement text and classifies it as JSON
following a predefined parameter schema. You must return exactly one valid JSON
object and nothing else; any explanatory remarks belong in the notes field only.

2. Output schema
{
  "ad_type": "",
  "ad_type_category": [],
  "ad_theme": [],
  "target_age": "",
  "target_gender": "",
  "motivation": {
    "fun": 0, "social": 0, "rewards": 0, "savings": 0, "trust": 0,
    "convenience": 0, "growth": 0, "status_display": 0, "curiosity": 0,
    "habit_building": 0, "safety_net": 0
  },
  "engagement": {
    "casual_score": 0.0, "hardcore_score": 0.0, "frequency_score": 0.0,
    "multi_app_usage": 0, "retention_potential": 0.0,
    "session_length_expectation": "short"
  },
  "promo": {
    "install_reward_sensitive": 0, "coupon_event_sensitive": 0,
    "fomo_sensitive": 0, "exclusive_benefit_sensitive": 0,
    "trial_experience_sensitive": 0
  },
  "brand": {
    "brand_loyalty": 0.0, "nostalgia": 0, "trust_in_official": 0.0,
    "award_proof_sensitive": 0, "local_trust_factor": 0.0,
    "global_trust_factor": 0.0
  },
  "commerce": {
    "price_sensitivity": 0.0, "premium_willingness": 0.0,
    "transaction_frequency": 0.0, "risk_tolerance": 0.0,
    "recurring_payment": 0, "big_purchase_intent": 0.0
  },
  "notes": []
}

3. Classification rules
(A) Ad type ad_type
When the ad is classified by content, use one of:
game, app, shopping, finance, service, content, healthcare, education,
rewards_only, other.
When a numeric participation-type code applies, use it directly:
1:install -> 1, 2:launch -> 2, 3:participation -> 3, 4:click -> 4,
5:facebook -> 5, 6:twitter -> 6, 7:instagram -> 7, 8:impression -> 8,
9:quest -> 9, 10:youtube -> 10, 11:naver -> 11, 12:CPS (purchase) -> 12.

(B) Ad category ad_type_category
0: no category selected -> 0
1: app (simple earn) -> 1
2: experience (game earn) / app (simple earn) - cpi, cpe -> 2
3: subscription (simple earn) -> 3
4: simple mission - quiz (simple earn) -> 4
5: experience (game earn) - cpa -> 5
6: multi reward (game earn) -> 6
7: finance (participation earn) -> 7
8: free participation (participation earn) -> 8
10: paid participation (participation earn) -> 10
11: shopping - per-product category (shopping earn) -> 11
12: affiliate mall (shopping earn) -> 12
13: simple mission (simple earn) -> 13

(C) Ad theme ad_theme
Tag narrative, emotional, and appeal points; multiple tags allowed.
Example: fantasy RPG -> fantasy, competition, growth
Example: insurance -> trust, safety_net, security_privacy
Example: rewards -> rewards, savings_benefit, urgency

(D) Target age target_age
If stated explicitly, reflect it as given (e.g. ages 13-18 -> teens).
Adults-only (19+) -> adults. No signal at all -> all_ages.
Insurance and finance ads may be assumed thirties and up by default.

(E) Target gender target_gender
Default to neutral when nothing is stated.
Beauty/fashion aimed at women -> female_focus, otherwise female.
Men-only services (shaving, military) -> male_focus, otherwise male.

4. Score judgment criteria
Core principle: even without explicit keywords, actively assign a reasonable
default score (e.g. 0.2-0.5) to highly related parameters based on the ad type
and context, instead of leaving them at 0.

Motivation
- rewards: 1 when earning or compensation is mentioned. For shopping and game
  ads, infer at least 0.3 from contextual hints alone.
- savings: 1 when discounts or lowest-price claims are mentioned. Shopping ads
  lean on price appeal, so infer at least 0.3 by default.
- fun: game ads get at least 0.7 even without explicit wording. Entertainment
  and content types infer at least 0.3.
- trust: finance and healthcare ads get at least 0.5 by default since trust is
  central. 1 when "official" or "certified" is mentioned.
- growth: education and game types (especially RPG) carry inherent growth
  elements, so infer at least 0.4 by default.
- curiosity: 1 when free trials or new features are mentioned. New app or
  service ads are likely to provoke curiosity, so infer at least 0.2.

Commerce
- price_sensitivity: shopping ads mostly target price-sensitive users, so
  assign at least 0.6 by default; 0.9 or higher when lowest-price or discount
  claims are emphasized.
- risk_tolerance: for investment or cryptocurrency finance ads assign at least
  0.8. Insurance is risk-averse; keep this at 0.1 or below.
- big_purchase_intent: high-value products and services (loans, insurance,
  real estate) get at least 0.7.

Brand
- brand_loyalty, trust_in_official: when a publicly known company or brand
  name appears, assign at least 0.5 even without the words "famous brand".
  Finance types infer at least 0.3 by default.
- local_trust_factor: assign 1 when the advertiser is clearly a domestic
  company.

5. Output rules
Always output JSON only (no additional explanation).
Record short justification keywords in the notes field.
Above all, read the context: rather than leaving a field at 0, actively infer
and fill a value whenever there is any relevance.

6. Using user-specified information
- If a "User-specified ad type" is provided, use it as ad_type, but reclassify
  if it is contextually inappropriate.
- If a "User-specified ad category" is provided, include it in
  ad_type_category.
- Without user-specified information, classify automatically from the ad text.

Analyze the following ad text and return JSON matching the schema above:"#;
