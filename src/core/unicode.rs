//! 유니코드 한글 음절 조합/분해 유틸리티
//!
//! 완성형 음절(U+AC00 ~ U+D7A3)은 초성 19 × 중성 21 × 종성 28 의 산술 배치이므로
//! 테이블 없이 인덱스 계산만으로 분해/조합한다.

/// 한글 음절 시작 코드포인트 (가)
const HANGUL_SYLLABLE_BASE: u32 = 0xAC00;
/// 한글 음절 마지막 코드포인트 (힣)
const HANGUL_SYLLABLE_END: u32 = 0xD7A3;

/// 초성 개수
const CHOSEONG_COUNT: u32 = 19;
/// 중성 개수
const JUNGSEONG_COUNT: u32 = 21;
/// 종성 개수 (종성 없음 포함)
const JONGSEONG_COUNT: u32 = 28;

/// 호환용 자음 범위 (ㄱ ~ ㅎ)
const COMPAT_CONSONANT_FIRST: u32 = 0x3131;
const COMPAT_CONSONANT_LAST: u32 = 0x314E;
/// 호환용 모음 범위 (ㅏ ~ ㅣ)
const COMPAT_VOWEL_FIRST: u32 = 0x314F;
const COMPAT_VOWEL_LAST: u32 = 0x3163;

/// 분해된 완성형 음절
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Syllable {
    /// 초성 인덱스 (0~18)
    pub choseong: u32,
    /// 중성 인덱스 (0~20)
    pub jungseong: u32,
    /// 종성 인덱스 (0~27, 0 = 종성 없음)
    pub jongseong: u32,
}

impl Syllable {
    /// 완성형 한글 문자를 분해 (완성형이 아니면 None)
    pub fn from_char(c: char) -> Option<Self> {
        let (choseong, jungseong, jongseong) = decompose_syllable(c)?;
        Some(Self {
            choseong,
            jungseong,
            jongseong,
        })
    }

    /// 다시 완성형 문자로 조합
    pub fn to_char(self) -> Option<char> {
        compose_syllable(self.choseong, self.jungseong, self.jongseong)
    }

    pub fn has_jongseong(&self) -> bool {
        self.jongseong != 0
    }

    /// 종성을 뗀 음절 (예: 옹 -> 오)
    pub fn without_jongseong(self) -> Self {
        Self {
            jongseong: 0,
            ..self
        }
    }
}

/// 초성/중성/종성 인덱스로 완성된 한글 유니코드 생성
/// - choseong: 초성 인덱스 (0~18)
/// - jungseong: 중성 인덱스 (0~20)
/// - jongseong: 종성 인덱스 (0~27, 0 = 종성 없음)
pub fn compose_syllable(choseong: u32, jungseong: u32, jongseong: u32) -> Option<char> {
    if choseong >= CHOSEONG_COUNT || jungseong >= JUNGSEONG_COUNT || jongseong >= JONGSEONG_COUNT {
        return None;
    }
    let code = HANGUL_SYLLABLE_BASE
        + (choseong * JUNGSEONG_COUNT + jungseong) * JONGSEONG_COUNT
        + jongseong;
    char::from_u32(code)
}

/// 완성형 한글을 초성/중성/종성 인덱스로 분해
/// 반환: (초성 인덱스, 중성 인덱스, 종성 인덱스)
pub fn decompose_syllable(c: char) -> Option<(u32, u32, u32)> {
    let code = c as u32;
    if !(HANGUL_SYLLABLE_BASE..=HANGUL_SYLLABLE_END).contains(&code) {
        return None;
    }
    let offset = code - HANGUL_SYLLABLE_BASE;
    let jongseong = offset % JONGSEONG_COUNT;
    let jungseong = (offset / JONGSEONG_COUNT) % JUNGSEONG_COUNT;
    let choseong = offset / (JUNGSEONG_COUNT * JONGSEONG_COUNT);
    Some((choseong, jungseong, jongseong))
}

/// 복합 종성을 분리
/// 반환: (첫 번째 종성 인덱스, 두 번째 종성의 초성 인덱스)
/// 두 번째 값은 다음 글자의 초성으로 사용됨
pub fn split_jongseong(jong: u32) -> Option<(u32, u32)> {
    match jong {
        3 => Some((1, 9)),   // ㄳ -> ㄱ(종성1) + ㅅ(초성9)
        5 => Some((4, 12)),  // ㄵ -> ㄴ(종성4) + ㅈ(초성12)
        6 => Some((4, 18)),  // ㄶ -> ㄴ(종성4) + ㅎ(초성18)
        9 => Some((8, 0)),   // ㄺ -> ㄹ(종성8) + ㄱ(초성0)
        10 => Some((8, 6)),  // ㄻ -> ㄹ(종성8) + ㅁ(초성6)
        11 => Some((8, 7)),  // ㄼ -> ㄹ(종성8) + ㅂ(초성7)
        12 => Some((8, 9)),  // ㄽ -> ㄹ(종성8) + ㅅ(초성9)
        13 => Some((8, 16)), // ㄾ -> ㄹ(종성8) + ㅌ(초성16)
        14 => Some((8, 17)), // ㄿ -> ㄹ(종성8) + ㅍ(초성17)
        15 => Some((8, 18)), // ㅀ -> ㄹ(종성8) + ㅎ(초성18)
        18 => Some((17, 9)), // ㅄ -> ㅂ(종성17) + ㅅ(초성9)
        _ => None,
    }
}

/// 단일 종성을 초성 인덱스로 변환
pub fn jongseong_to_choseong(jong: u32) -> Option<u32> {
    match jong {
        1 => Some(0),   // ㄱ
        2 => Some(1),   // ㄲ
        4 => Some(2),   // ㄴ
        7 => Some(3),   // ㄷ
        8 => Some(5),   // ㄹ
        16 => Some(6),  // ㅁ
        17 => Some(7),  // ㅂ
        19 => Some(9),  // ㅅ
        20 => Some(10), // ㅆ
        21 => Some(11), // ㅇ
        22 => Some(12), // ㅈ
        23 => Some(14), // ㅊ
        24 => Some(15), // ㅋ
        25 => Some(16), // ㅌ
        26 => Some(17), // ㅍ
        27 => Some(18), // ㅎ
        _ => None,
    }
}

/// 초성 인덱스에 해당하는 호환용 자모 문자
pub fn choseong_to_jamo_char(cho: u32) -> Option<char> {
    // 호환용 자모는 초성 순서와 다르므로 직접 매핑
    #[rustfmt::skip]
    const JAMO_CODES: [u32; 19] = [
        0x3131, // ㄱ
        0x3132, // ㄲ
        0x3134, // ㄴ
        0x3137, // ㄷ
        0x3138, // ㄸ
        0x3139, // ㄹ
        0x3141, // ㅁ
        0x3142, // ㅂ
        0x3143, // ㅃ
        0x3145, // ㅅ
        0x3146, // ㅆ
        0x3147, // ㅇ
        0x3148, // ㅈ
        0x3149, // ㅉ
        0x314A, // ㅊ
        0x314B, // ㅋ
        0x314C, // ㅌ
        0x314D, // ㅍ
        0x314E, // ㅎ
    ];
    JAMO_CODES
        .get(cho as usize)
        .and_then(|&code| char::from_u32(code))
}

/// 문자가 완성형 한글(가-힣)인지 확인
pub fn is_complete_hangul(c: char) -> bool {
    (HANGUL_SYLLABLE_BASE..=HANGUL_SYLLABLE_END).contains(&(c as u32))
}

/// 호환용 자음 낱자(ㄱ-ㅎ)인지 확인
pub fn is_compat_consonant(c: char) -> bool {
    (COMPAT_CONSONANT_FIRST..=COMPAT_CONSONANT_LAST).contains(&(c as u32))
}

/// 호환용 모음 낱자(ㅏ-ㅣ)인지 확인
pub fn is_compat_vowel(c: char) -> bool {
    (COMPAT_VOWEL_FIRST..=COMPAT_VOWEL_LAST).contains(&(c as u32))
}

pub fn is_compat_jamo(c: char) -> bool {
    is_compat_consonant(c) || is_compat_vowel(c)
}
