//! GB18030 matcher: the GBK grammar extended with the four-byte form.
//!
//! By construction it stays plausible whenever GBK does, which is exactly why
//! arbitration demotes its label; it carries no frequency table so a plain
//! GBK match always outranks it.

use crate::byte_class::ByteSet;
use crate::matchers::{CharsetMatcher, Verdict};

const LEAD: ByteSet = ByteSet::EMPTY.with_range(0x81, 0xFE);
const TRAIL: ByteSet = ByteSet::EMPTY.with_range(0x40, 0x7E).with_range(0x80, 0xFE);
const DIGIT: ByteSet = ByteSet::EMPTY.with_range(0x30, 0x39);

enum Pending {
    None,
    Lead,
    /// Third byte of a four-byte sequence expected (0x81..=0xFE).
    FourThird,
    /// Fourth byte of a four-byte sequence expected (0x30..=0x39).
    FourFourth,
}

pub struct Gb18030Matcher {
    pending: Pending,
    pairs: u64,
    quads: u64,
    verdict: Verdict,
}

impl Gb18030Matcher {
    pub fn new() -> Self {
        Gb18030Matcher {
            pending: Pending::None,
            pairs: 0,
            quads: 0,
            verdict: Verdict::Undetermined,
        }
    }

    fn reject(&mut self) -> Verdict {
        self.verdict = Verdict::Rejected;
        self.verdict
    }
}

impl Default for Gb18030Matcher {
    fn default() -> Self {
        Self::new()
    }
}

impl CharsetMatcher for Gb18030Matcher {
    fn label(&self) -> &'static str {
        "GB18030"
    }

    fn feed(&mut self, chunk: &[u8]) -> Verdict {
        if self.verdict != Verdict::Undetermined {
            return self.verdict;
        }
        for &b in chunk {
            match self.pending {
                Pending::Lead => {
                    if TRAIL.contains(b) {
                        self.pairs += 1;
                        self.pending = Pending::None;
                    } else if DIGIT.contains(b) {
                        self.pending = Pending::FourThird;
                    } else {
                        return self.reject();
                    }
                }
                Pending::FourThird => {
                    if !LEAD.contains(b) {
                        return self.reject();
                    }
                    self.pending = Pending::FourFourth;
                }
                Pending::FourFourth => {
                    if !DIGIT.contains(b) {
                        return self.reject();
                    }
                    self.quads += 1;
                    self.pending = Pending::None;
                }
                Pending::None => {
                    if b < 0x80 {
                        // ASCII passes through.
                    } else if LEAD.contains(b) {
                        self.pending = Pending::Lead;
                    } else {
                        return self.reject();
                    }
                }
            }
        }
        self.verdict
    }

    fn verdict(&self) -> Verdict {
        self.verdict
    }

    fn score(&self) -> u64 {
        2 * self.pairs + 4 * self.quads
    }

    fn plausible(&self) -> bool {
        self.verdict == Verdict::Undetermined && self.pairs + self.quads > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_four_byte_form() {
        let mut m = Gb18030Matcher::new();
        assert_eq!(m.feed(&[0x81, 0x30, 0x81, 0x30]), Verdict::Undetermined);
        assert!(m.plausible());
        assert_eq!(m.score(), 4);
    }

    #[test]
    fn four_byte_form_split_across_chunks() {
        let mut m = Gb18030Matcher::new();
        m.feed(&[0x81, 0x30]);
        m.feed(&[0x81]);
        m.feed(&[0x30]);
        assert_eq!(m.score(), 4);
    }

    #[test]
    fn rejects_malformed_fourth_byte() {
        let mut m = Gb18030Matcher::new();
        assert_eq!(m.feed(&[0x81, 0x30, 0x81, 0x81]), Verdict::Rejected);
    }

    #[test]
    fn plausible_whenever_gbk_is() {
        use crate::matchers::double_byte::{DoubleByteMatcher, GBK};
        let bytes = [0x81, 0x40, 0xB5, 0xC4, 0xFE, 0xFE];
        let mut gbk = DoubleByteMatcher::new(&GBK);
        let mut gb18030 = Gb18030Matcher::new();
        gbk.feed(&bytes);
        gb18030.feed(&bytes);
        assert!(gbk.plausible());
        assert!(gb18030.plausible());
    }
}
