//! 검색어/검색 대상 정규화

use crate::core::unicode::is_compat_jamo;

/// 검색 비교용 정규화: 소문자화 + 모든 공백 제거
///
/// "Kim Hana" -> "kimhana", "오 윤" -> "오윤"
pub fn normalize_search_text(value: &str) -> String {
    value
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// 낱자모(ㄱ-ㅎ, ㅏ-ㅣ)가 하나라도 포함되어 있는지 검사
pub fn has_hangul_jamo(value: &str) -> bool {
    value.chars().any(is_compat_jamo)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_search_text() {
        assert_eq!(normalize_search_text("Kim Hana"), "kimhana");
        assert_eq!(normalize_search_text("  오 윤\t"), "오윤");
        assert_eq!(normalize_search_text("ART\n2025"), "art2025");
        assert_eq!(normalize_search_text(""), "");
        assert_eq!(normalize_search_text("   "), "");
    }

    #[test]
    fn test_normalize_keeps_hangul_as_is() {
        assert_eq!(normalize_search_text("옹기"), "옹기");
        assert_eq!(normalize_search_text("오ㅇ"), "오ㅇ");
    }

    #[test]
    fn test_has_hangul_jamo() {
        assert!(has_hangul_jamo("오ㅇ"));
        assert!(has_hangul_jamo("ㄱ"));
        assert!(has_hangul_jamo("ㅏ"));
        assert!(has_hangul_jamo("kimㅎ"));

        assert!(!has_hangul_jamo("오윤"));
        assert!(!has_hangul_jamo("hello"));
        assert!(!has_hangul_jamo(""));
    }
}
