//! Label tables - raw key to localized (Korean) label lookups
//!
//! Presentation layers render records with these tables; the core only
//! exposes the raw/label pairs and owns no rendering logic. Unknown keys map
//! to themselves so forward-compatible model output still displays.

/// Localized label for an ad type code.
pub fn ad_type_label(raw: &str) -> &str {
    match raw {
        "1" => "설치형",
        "2" => "실행형",
        "3" => "참여형",
        "4" => "클릭형",
        "5" => "페북",
        "6" => "트위터",
        "7" => "인스타",
        "8" => "노출형",
        "9" => "퀘스트",
        "10" => "유튜브",
        "11" => "네이버",
        "12" => "CPS(물건구매)",
        "game" => "게임",
        "app" => "앱",
        "shopping" => "쇼핑",
        "finance" => "금융",
        "service" => "서비스",
        "content" => "콘텐츠",
        "healthcare" => "헬스케어",
        "education" => "교육",
        "rewards_only" => "리워드 전용",
        "other" => "기타",
        other => other,
    }
}

/// Localized label for an ad category code.
pub fn category_label(raw: &str) -> &str {
    match raw {
        "0" => "카테고리 선택안함",
        "1" => "앱(간편적립)",
        "2" => "경험하기(게임적립)/앱(간편적립)",
        "3" => "구독(간편적립)",
        "4" => "간편미션-퀴즈(간편적립)",
        "5" => "경험하기(게임적립)",
        "6" => "멀티보상(게임적립)",
        "7" => "금융(참여적립)",
        "8" => "무료참여(참여적립)",
        "10" => "유료참여(참여적립)",
        "11" => "쇼핑-상품별카테고리(쇼핑적립)",
        "12" => "제휴몰(쇼핑적립)",
        "13" => "간편미션(간편적립)",
        other => other,
    }
}

/// Localized label for a theme tag.
pub fn theme_label(raw: &str) -> &str {
    match raw {
        "fantasy" => "판타지",
        "competition" => "경쟁",
        "growth" => "성장",
        "trust" => "신뢰",
        "safety_net" => "안전망",
        "security_privacy" => "보안/개인정보",
        "rewards" => "리워드",
        "savings_benefit" => "절약 혜택",
        "urgency" => "긴급성",
        "fun" => "재미",
        "social" => "소셜",
        "convenience" => "편의성",
        "curiosity" => "호기심",
        "habit_building" => "습관형성",
        "status_display" => "지위표시",
        other => other,
    }
}

/// Localized label for a target age bracket.
pub fn target_age_label(raw: &str) -> &str {
    match raw {
        "all_ages" => "전연령",
        "teens" => "10대",
        "twenties" => "20대",
        "thirties" => "30대",
        "forties" => "40대",
        "fifties" => "50대",
        "adults" => "성인",
        other => other,
    }
}

/// Localized label for a target gender value.
pub fn target_gender_label(raw: &str) -> &str {
    match raw {
        "male_focus" => "남성 중심",
        "female_focus" => "여성 중심",
        "male" => "남성",
        "female" => "여성",
        "neutral" => "전성별",
        other => other,
    }
}

/// Localized label for a motivation sub-score key.
pub fn motivation_label(raw: &str) -> &str {
    match raw {
        "fun" => "재미",
        "social" => "소셜",
        "rewards" => "리워드",
        "savings" => "절약",
        "trust" => "신뢰",
        "convenience" => "편의성",
        "growth" => "성장",
        "status_display" => "지위표시",
        "curiosity" => "호기심",
        "habit_building" => "습관형성",
        "safety_net" => "안전망",
        other => other,
    }
}

/// Localized label for an engagement sub-score key.
pub fn engagement_label(raw: &str) -> &str {
    match raw {
        "casual_score" => "캐주얼",
        "hardcore_score" => "하드코어",
        "frequency_score" => "사용빈도",
        "multi_app_usage" => "멀티앱",
        "retention_potential" => "유지력",
        "session_length_expectation" => "세션길이",
        other => other,
    }
}

/// Localized label for a promotion sub-score key.
pub fn promo_label(raw: &str) -> &str {
    match raw {
        "install_reward_sensitive" => "설치리워드",
        "coupon_event_sensitive" => "쿠폰이벤트",
        "fomo_sensitive" => "FOMO",
        "exclusive_benefit_sensitive" => "독점혜택",
        "trial_experience_sensitive" => "체험경험",
        other => other,
    }
}

/// Localized label for a brand sub-score key.
pub fn brand_label(raw: &str) -> &str {
    match raw {
        "brand_loyalty" => "브랜드충성도",
        "nostalgia" => "향수",
        "trust_in_official" => "공식신뢰",
        "award_proof_sensitive" => "수상증명",
        "local_trust_factor" => "국내신뢰",
        "global_trust_factor" => "글로벌신뢰",
        other => other,
    }
}

/// Localized label for a commerce sub-score key.
pub fn commerce_label(raw: &str) -> &str {
    match raw {
        "price_sensitivity" => "가격민감도",
        "premium_willingness" => "프리미엄지불의향",
        "transaction_frequency" => "거래빈도",
        "risk_tolerance" => "위험감수성",
        "recurring_payment" => "정기결제",
        "big_purchase_intent" => "고액구매의도",
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_keys_translate() {
        assert_eq!(ad_type_label("game"), "게임");
        assert_eq!(category_label("3"), "구독(간편적립)");
        assert_eq!(target_age_label("teens"), "10대");
        assert_eq!(target_gender_label("neutral"), "전성별");
        assert_eq!(motivation_label("safety_net"), "안전망");
        assert_eq!(promo_label("fomo_sensitive"), "FOMO");
    }

    #[test]
    fn test_unknown_keys_pass_through() {
        assert_eq!(ad_type_label("metaverse"), "metaverse");
        assert_eq!(theme_label("cyberpunk"), "cyberpunk");
    }
}
