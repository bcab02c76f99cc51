//! 필드 값 정규화.
//!
//! 스크리너 CSV에는 `"1,234"`, `"12.5%"`, `"3K"`, `"2.5M"`, `"1B"` 같은
//! 표기가 섞여 있습니다. 모든 필드는 하나의 총함수로 f64로 변환하고,
//! 변환할 수 없는 값은 배치가 멈추지 않도록 항상 0.0으로 대체합니다.

/// 원시 필드 값을 f64로 변환.
///
/// - 없음 / 빈 문자열 / `nan` → 0.0
/// - 후행 `%` 제거, 천 단위 쉼표 제거
/// - 후행 `K`/`M`/`B`는 각각 천/백만/십억 배수
/// - 그 외 파싱 실패 → 0.0 (에러를 내지 않는다)
///
/// 퍼센트 필드는 저장된 스케일을 그대로 유지합니다 (`"12.5%"` → 12.5).
/// 소수로 저장된 비율 필드의 ×100 변환은 호출부 책임입니다.
pub fn convert_value(raw: Option<&str>) -> f64 {
    let Some(raw) = raw else {
        return 0.0;
    };

    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("nan") {
        return 0.0;
    }

    let cleaned = trimmed
        .strip_suffix('%')
        .unwrap_or(trimmed)
        .replace(',', "");

    let (digits, multiplier) = match cleaned.chars().last() {
        Some('K') => (&cleaned[..cleaned.len() - 1], 1_000.0),
        Some('M') => (&cleaned[..cleaned.len() - 1], 1_000_000.0),
        Some('B') => (&cleaned[..cleaned.len() - 1], 1_000_000_000.0),
        _ => (cleaned.as_str(), 1.0),
    };

    match digits.parse::<f64>() {
        Ok(value) if value.is_finite() => value * multiplier,
        _ => 0.0,
    }
}
