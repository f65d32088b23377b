//! 자유 형식 연락처 텍스트에서 이메일/전화번호 추출
//!
//! 작가 신청서의 연락처 칸처럼 "메일 foo@bar.com / 010 1234 5678" 식으로
//! 섞여 들어온 문자열을 다룬다.

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

use super::phone::format_korean_phone_number;

lazy_static! {
    static ref EMAIL_PATTERN: Regex =
        Regex::new(r"(?i)[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}").unwrap();
    static ref PHONE_PATTERN: Regex = Regex::new(r"\+?[0-9][0-9\s()\-]{5,}[0-9]").unwrap();
}

/// 연락처 텍스트 파싱 결과
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedContact {
    pub email: Option<String>,
    /// 정규화된 전화번호 (인식 불가 시 None)
    pub phone: Option<String>,
}

/// 첫 번째 이메일 주소
pub fn extract_email(text: &str) -> Option<String> {
    let source = text.trim();
    if source.is_empty() {
        return None;
    }
    EMAIL_PATTERN
        .find(source)
        .map(|m| m.as_str().trim().to_string())
}

/// 첫 번째 전화번호 형태의 문자열 (정규화 전 원문)
///
/// 이메일 주소 안의 숫자를 전화번호로 오인하지 않도록 이메일을 먼저 지운다.
pub fn extract_phone(text: &str) -> Option<String> {
    let source = text.trim();
    if source.is_empty() {
        return None;
    }
    let without_email = EMAIL_PATTERN.replace_all(source, " ");
    PHONE_PATTERN
        .find(&without_email)
        .map(|m| m.as_str().trim().to_string())
        .filter(|s| !s.is_empty())
}

/// 이메일과 정규화된 전화번호 추출
pub fn parse_contact(text: &str) -> ParsedContact {
    let email = extract_email(text);
    let phone = extract_phone(text).and_then(|raw| format_korean_phone_number(&raw));
    log::trace!("연락처 파싱: email={:?}, phone={:?}", email, phone);
    ParsedContact { email, phone }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_email() {
        assert_eq!(
            extract_email("메일: Artist.Kim@Example.co.kr 입니다").as_deref(),
            Some("Artist.Kim@Example.co.kr")
        );
        assert_eq!(extract_email("연락처 없음"), None);
        assert_eq!(extract_email(""), None);
    }

    #[test]
    fn test_extract_phone() {
        assert_eq!(
            extract_phone("전화 010 1234 5678 로 연락 주세요").as_deref(),
            Some("010 1234 5678")
        );
        assert_eq!(
            extract_phone("+82 (10) 1234-5678").as_deref(),
            Some("+82 (10) 1234-5678")
        );
        assert_eq!(extract_phone("번호 없음"), None);
    }

    #[test]
    fn test_extract_phone_ignores_digits_in_email() {
        assert_eq!(extract_phone("artist01012345678@mail.com"), None);
        assert_eq!(
            extract_phone("artist2024@mail.com, 02-764-3114").as_deref(),
            Some("02-764-3114")
        );
    }

    #[test]
    fn test_parse_contact() {
        let parsed = parse_contact("kim@example.com / 010.1234.5678");
        assert_eq!(parsed.email.as_deref(), Some("kim@example.com"));
        // 마침표 구분자는 전화번호 패턴에 맞지 않음
        assert_eq!(parsed.phone, None);

        let parsed = parse_contact("kim@example.com / 010-1234-5678");
        assert_eq!(parsed.phone.as_deref(), Some("010-1234-5678"));

        assert_eq!(parse_contact(""), ParsedContact::default());
    }

    #[test]
    fn test_parsed_contact_serializes_to_json() {
        let parsed = ParsedContact {
            email: Some("kim@example.com".to_string()),
            phone: None,
        };
        let json = serde_json::to_string(&parsed).unwrap();
        assert_eq!(json, r#"{"email":"kim@example.com","phone":null}"#);
    }
}
