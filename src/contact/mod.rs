//! 연락처 정규화/추출

mod extract;
mod phone;

pub use extract::{extract_email, extract_phone, parse_contact, ParsedContact};
pub use phone::format_korean_phone_number;
