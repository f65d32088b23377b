//! 한국 전화번호 정규화

/// 숫자만 남기기
fn to_digits(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

/// 국가번호(+82, 0082)를 국내 형식 0으로 치환
fn normalize_korean_dial_code(digits: &str) -> String {
    if let Some(rest) = digits.strip_prefix("0082") {
        return format!("0{}", rest);
    }
    if let Some(rest) = digits.strip_prefix("82") {
        return format!("0{}", rest);
    }
    digits.to_string()
}

/// 숫자열을 주어진 길이로 나눠 하이픈으로 연결 (ASCII 숫자만 들어온다)
fn hyphenate(digits: &str, first: usize, second: usize) -> String {
    format!(
        "{}-{}-{}",
        &digits[..first],
        &digits[first..first + second],
        &digits[first + second..]
    )
}

/// 한국 전화번호를 하이픈 포함 표준 형태로 정규화
///
/// - 02 (서울): 02-XXX-XXXX / 02-XXXX-XXXX
/// - 0505 (평생번호): 0505-XXX-XXXX
/// - 8자리 대표번호: XXXX-XXXX
/// - 10자리: XXX-XXX-XXXX, 11자리: XXX-XXXX-XXXX
///
/// 비어 있거나 전화번호로 판단하기 어려우면 None
pub fn format_korean_phone_number(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    let digits = normalize_korean_dial_code(&to_digits(trimmed));
    if digits.is_empty() {
        return None;
    }

    if digits.starts_with("02") {
        return match digits.len() {
            9 => Some(hyphenate(&digits, 2, 3)),
            10 => Some(hyphenate(&digits, 2, 4)),
            _ => None,
        };
    }

    if digits.starts_with("0505") && digits.len() == 11 {
        return Some(hyphenate(&digits, 4, 3));
    }

    match digits.len() {
        8 => Some(format!("{}-{}", &digits[..4], &digits[4..])),
        10 => Some(hyphenate(&digits, 3, 3)),
        11 => Some(hyphenate(&digits, 3, 4)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mobile_numbers() {
        assert_eq!(format_korean_phone_number("01012345678").as_deref(), Some("010-1234-5678"));
        assert_eq!(format_korean_phone_number("010-1234-5678").as_deref(), Some("010-1234-5678"));
        assert_eq!(format_korean_phone_number("011 234 5678").as_deref(), Some("011-234-5678"));
    }

    #[test]
    fn test_seoul_area_numbers() {
        assert_eq!(format_korean_phone_number("0212345678").as_deref(), Some("02-1234-5678"));
        assert_eq!(format_korean_phone_number("021234567").as_deref(), Some("02-123-4567"));
        assert_eq!(format_korean_phone_number("(02) 764-3114").as_deref(), Some("02-764-3114"));

        // 02로 시작하지만 길이가 맞지 않음
        assert_eq!(format_korean_phone_number("0212345"), None);
        assert_eq!(format_korean_phone_number("02123456789"), None);
    }

    #[test]
    fn test_representative_short_numbers() {
        assert_eq!(format_korean_phone_number("15881234").as_deref(), Some("1588-1234"));
        assert_eq!(format_korean_phone_number("1588-1234").as_deref(), Some("1588-1234"));
    }

    #[test]
    fn test_0505_numbers() {
        assert_eq!(format_korean_phone_number("05051234567").as_deref(), Some("0505-123-4567"));
    }

    #[test]
    fn test_international_prefix() {
        assert_eq!(format_korean_phone_number("+82 10 1234 5678").as_deref(), Some("010-1234-5678"));
        assert_eq!(format_korean_phone_number("0082-2-123-4567").as_deref(), Some("02-123-4567"));
        assert_eq!(format_korean_phone_number("+82-31-123-4567").as_deref(), Some("031-123-4567"));
    }

    #[test]
    fn test_invalid_or_empty() {
        assert_eq!(format_korean_phone_number(""), None);
        assert_eq!(format_korean_phone_number("   "), None);
        assert_eq!(format_korean_phone_number("abc"), None);
        assert_eq!(format_korean_phone_number("12345"), None);
        assert_eq!(format_korean_phone_number("010-1234-56789-0"), None);
    }
}
