//! UTF-16 matchers. There is no byte grammar to validate, so these are pure
//! statistics: a BOM confirms outright, and otherwise the matcher stays a
//! low-confidence candidate as long as most 16-bit units land in blocks real
//! text uses (ASCII with a zero byte, CJK punctuation and kana, unified
//! ideographs, hangul). Random bytes fail that majority test.

use crate::matchers::{CharsetMatcher, Verdict};

pub struct Utf16Matcher {
    label: &'static str,
    big_endian: bool,
    pending: Option<u8>,
    units: u64,
    qualifying: u64,
    first_unit: bool,
    verdict: Verdict,
}

impl Utf16Matcher {
    pub fn le() -> Self {
        Self::new("UTF-16LE", false)
    }

    pub fn be() -> Self {
        Self::new("UTF-16BE", true)
    }

    fn new(label: &'static str, big_endian: bool) -> Self {
        Utf16Matcher {
            label,
            big_endian,
            pending: None,
            units: 0,
            qualifying: 0,
            first_unit: true,
            verdict: Verdict::Undetermined,
        }
    }
}

fn qualifies(unit: u16) -> bool {
    matches!(
        unit,
        0x0001..=0x00FF | 0x3000..=0x30FF | 0x4E00..=0x9FFF | 0xAC00..=0xD7A3
    )
}

impl CharsetMatcher for Utf16Matcher {
    fn label(&self) -> &'static str {
        self.label
    }

    fn feed(&mut self, chunk: &[u8]) -> Verdict {
        if self.verdict != Verdict::Undetermined {
            return self.verdict;
        }
        for &b in chunk {
            let Some(first) = self.pending.take() else {
                self.pending = Some(b);
                continue;
            };
            let unit = if self.big_endian {
                u16::from_be_bytes([first, b])
            } else {
                u16::from_le_bytes([first, b])
            };
            if self.first_unit {
                self.first_unit = false;
                if unit == 0xFEFF {
                    self.verdict = Verdict::Confirmed;
                    return self.verdict;
                }
            }
            self.units += 1;
            if qualifies(unit) {
                self.qualifying += 1;
            }
        }
        self.verdict
    }

    fn verdict(&self) -> Verdict {
        self.verdict
    }

    fn score(&self) -> u64 {
        self.qualifying
    }

    fn plausible(&self) -> bool {
        self.verdict == Verdict::Undetermined
            && self.units >= 4
            && self.qualifying * 3 >= self.units * 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bom_confirms_each_endianness() {
        let mut le = Utf16Matcher::le();
        assert_eq!(le.feed(&[0xFF, 0xFE, 0x41, 0x00]), Verdict::Confirmed);
        let mut be = Utf16Matcher::be();
        assert_eq!(be.feed(&[0xFE, 0xFF, 0x00, 0x41]), Verdict::Confirmed);
        // The opposite endianness sees U+FFFE and stays unconfirmed.
        let mut be = Utf16Matcher::be();
        assert_eq!(be.feed(&[0xFF, 0xFE]), Verdict::Undetermined);
    }

    #[test]
    fn cjk_units_are_plausible() {
        let mut be = Utf16Matcher::be();
        // 中中中中 as UTF-16BE
        be.feed(&[0x4E, 0x2D, 0x4E, 0x2D, 0x4E, 0x2D, 0x4E, 0x2D]);
        assert!(be.plausible());
        assert_eq!(be.score(), 4);
    }

    #[test]
    fn hostile_units_are_not_plausible() {
        let mut le = Utf16Matcher::le();
        le.feed(&[0xFF; 16]);
        assert!(!le.plausible());
        assert_eq!(le.score(), 0);
    }

    #[test]
    fn odd_chunk_boundary_keeps_pending_byte() {
        let mut be = Utf16Matcher::be();
        be.feed(&[0x4E]);
        be.feed(&[0x2D, 0x4E, 0x2D, 0x4E]);
        be.feed(&[0x2D, 0x4E, 0x2D]);
        assert_eq!(be.score(), 4);
    }
}
