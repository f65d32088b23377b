//! 한글 유니코드 처리

pub mod unicode;
