//! Canonical CSV serialization of a Classification Record

use adscope_domain::{ClassificationRecord, Score};

/// The fixed, ordered CSV header: classification fields, echoed metadata,
/// then the flattened sub-score groups.
///
/// Matches the legacy `json_total.csv` layout column-for-column, including
/// the `original_ads_name` spelling of the ad-name column.
pub const CSV_HEADER: [&str; 43] = [
    "ad_type",
    "ad_type_category",
    "ad_theme",
    "target_age",
    "target_gender",
    "notes",
    "ads_idx",
    "ads_code",
    "original_ads_name",
    "motivation_fun",
    "motivation_social",
    "motivation_rewards",
    "motivation_savings",
    "motivation_trust",
    "motivation_convenience",
    "motivation_growth",
    "motivation_status_display",
    "motivation_curiosity",
    "motivation_habit_building",
    "motivation_safety_net",
    "engagement_casual_score",
    "engagement_hardcore_score",
    "engagement_frequency_score",
    "engagement_multi_app_usage",
    "engagement_retention_potential",
    "engagement_session_length_expectation",
    "promo_install_reward_sensitive",
    "promo_coupon_event_sensitive",
    "promo_fomo_sensitive",
    "promo_exclusive_benefit_sensitive",
    "promo_trial_experience_sensitive",
    "brand_brand_loyalty",
    "brand_nostalgia",
    "brand_trust_in_official",
    "brand_award_proof_sensitive",
    "brand_local_trust_factor",
    "brand_global_trust_factor",
    "commerce_price_sensitivity",
    "commerce_premium_willingness",
    "commerce_transaction_frequency",
    "commerce_risk_tolerance",
    "commerce_recurring_payment",
    "commerce_big_purchase_intent",
];

/// Serialize a record as one header row plus one data row.
///
/// Sequence fields are comma-joined into their single cell before quoting.
/// Known ambiguity, preserved from the legacy layout: a tag that itself
/// contains a comma is indistinguishable from two tags after round-trip.
pub fn to_canonical_csv(record: &ClassificationRecord) -> String {
    let cells = row_cells(record);
    debug_assert_eq!(cells.len(), CSV_HEADER.len());

    let header = CSV_HEADER
        .iter()
        .map(|h| quote(h))
        .collect::<Vec<_>>()
        .join(",");
    let row = cells
        .iter()
        .map(|c| quote(c))
        .collect::<Vec<_>>()
        .join(",");

    format!("{}\r\n{}\r\n", header, row)
}

fn row_cells(record: &ClassificationRecord) -> Vec<String> {
    let mut cells = vec![
        record.ad_type.clone(),
        record.ad_type_category.join(","),
        record.ad_theme.join(","),
        record.target_age.clone(),
        record.target_gender.clone(),
        record.notes.join(","),
        record.ads_idx.clone(),
        record.ads_code.clone(),
        record.ads_name.clone(),
    ];

    let m = &record.motivation;
    cells.extend(score_cells([
        &m.fun,
        &m.social,
        &m.rewards,
        &m.savings,
        &m.trust,
        &m.convenience,
        &m.growth,
        &m.status_display,
        &m.curiosity,
        &m.habit_building,
        &m.safety_net,
    ]));

    let e = &record.engagement;
    cells.extend(score_cells([
        &e.casual_score,
        &e.hardcore_score,
        &e.frequency_score,
        &e.multi_app_usage,
        &e.retention_potential,
    ]));
    cells.push(e.session_length_expectation.as_str().to_string());

    let p = &record.promo;
    cells.extend(score_cells([
        &p.install_reward_sensitive,
        &p.coupon_event_sensitive,
        &p.fomo_sensitive,
        &p.exclusive_benefit_sensitive,
        &p.trial_experience_sensitive,
    ]));

    let b = &record.brand;
    cells.extend(score_cells([
        &b.brand_loyalty,
        &b.nostalgia,
        &b.trust_in_official,
        &b.award_proof_sensitive,
        &b.local_trust_factor,
        &b.global_trust_factor,
    ]));

    let c = &record.commerce;
    cells.extend(score_cells([
        &c.price_sensitivity,
        &c.premium_willingness,
        &c.transaction_frequency,
        &c.risk_tolerance,
        &c.recurring_payment,
        &c.big_purchase_intent,
    ]));

    cells
}

fn score_cells<const N: usize>(scores: [&Score; N]) -> impl Iterator<Item = String> {
    scores.into_iter().map(Score::to_cell).collect::<Vec<_>>().into_iter()
}

/// Quote one CSV cell per RFC 4180: values containing the delimiter, quote
/// characters, or line breaks are wrapped, with inner quotes doubled.
fn quote(cell: &str) -> String {
    if cell.contains(',') || cell.contains('"') || cell.contains('\n') || cell.contains('\r') {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}
