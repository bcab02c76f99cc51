//! 라벨/서술 텍스트용 숫자 포맷 헬퍼.

/// 반올림한 정수부를 천 단위 쉼표로 포맷.
///
/// 거래량처럼 큰 수의 라벨에 사용한다 (`1234567.8` → `"1,234,568"`).
pub fn format_count(v: f64) -> String {
    let rounded = v.round() as i64;
    let digits = rounded.abs().to_string();
    let grouped = digits
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or(""))
        .collect::<Vec<_>>()
        .join(",");
    if rounded < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0.0), "0");
        assert_eq!(format_count(999.0), "999");
        assert_eq!(format_count(1_234_567.0), "1,234,567");
        assert_eq!(format_count(1_234_567.8), "1,234,568");
        assert_eq!(format_count(-45_000.0), "-45,000");
    }
}
