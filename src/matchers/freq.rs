//! Tiny per-script frequency tables ("hot pairs").
//!
//! The EUC-style grammars of GB2312, EUC-KR and EUC-JP are numerically
//! identical over 0xA1–0xFE pairs, so structure alone cannot separate them.
//! Full statistical samplers are overkill here; a handful of the most
//! frequent characters of each script is enough to rank the right family
//! first on natural-language text.

use once_cell::sync::Lazy;
use rustc_hash::FxHashSet;

#[inline]
fn pair(lead: u8, trail: u8) -> u16 {
    ((lead as u16) << 8) | trail as u16
}

// Most frequent simplified-Chinese characters, GB2312 code points.
const GB_COMMON_PAIRS: [u16; 20] = [
    0xB5C4, // 的
    0xD2BB, // 一
    0xCAC7, // 是
    0xB2BB, // 不
    0xC1CB, // 了
    0xD4DA, // 在
    0xC8CB, // 人
    0xD3D0, // 有
    0xCED2, // 我
    0xCBFB, // 他
    0xD6D0, // 中
    0xB9FA, // 国
    0xB4F3, // 大
    0xC0B4, // 来
    0xC9CF, // 上
    0xB8F6, // 个
    0xB5BD, // 到
    0xCBB5, // 说
    0xC3C7, // 们
    0xCEAA, // 为
];

// Most frequent traditional-Chinese characters, Big5 code points.
const BIG5_COMMON_PAIRS: [u16; 17] = [
    0xA440, // 一
    0xA446, // 了
    0xA448, // 人
    0xA4A3, // 不
    0xA4A4, // 中
    0xA457, // 上
    0xA46A, // 大
    0xA54C, // 他
    0xA662, // 在
    0xA6B3, // 有
    0xA741, // 你
    0xA7DA, // 我
    0xA84F, // 來
    0xA94D, // 和
    0xAABA, // 的
    0xAC4F, // 是
    0xB0EA, // 國
];

// Most frequent hangul syllables, EUC-KR (KS X 1001) code points.
const EUC_KR_COMMON_PAIRS: [u16; 20] = [
    0xC0CC, // 이
    0xB4D9, // 다
    0xB4C2, // 는
    0xC0C7, // 의
    0xC0BB, // 을
    0xC7CF, // 하
    0xBFA1, // 에
    0xB0A1, // 가
    0xB0ED, // 고
    0xC1F6, // 지
    0xBCAD, // 서
    0xB8A6, // 를
    0xB1E2, // 기
    0xC7D1, // 한
    0xB7CE, // 로
    0xBBE7, // 사
    0xB4EB, // 대
    0xB5B5, // 도
    0xBDBA, // 스
    0xB1B9, // 국
];

static GB_COMMON: Lazy<FxHashSet<u16>> =
    Lazy::new(|| GB_COMMON_PAIRS.iter().copied().collect());

static BIG5_COMMON: Lazy<FxHashSet<u16>> =
    Lazy::new(|| BIG5_COMMON_PAIRS.iter().copied().collect());

static EUC_KR_COMMON: Lazy<FxHashSet<u16>> =
    Lazy::new(|| EUC_KR_COMMON_PAIRS.iter().copied().collect());

pub fn is_common_gb(lead: u8, trail: u8) -> bool {
    GB_COMMON.contains(&pair(lead, trail))
}

pub fn is_common_big5(lead: u8, trail: u8) -> bool {
    BIG5_COMMON.contains(&pair(lead, trail))
}

pub fn is_common_euc_kr(lead: u8, trail: u8) -> bool {
    EUC_KR_COMMON.contains(&pair(lead, trail))
}

/// Shift_JIS hot zone: the hiragana/katakana lead rows. Kana density is the
/// signature of Japanese running text.
pub fn is_kana_sjis(lead: u8, _trail: u8) -> bool {
    lead == 0x82 || lead == 0x83
}
