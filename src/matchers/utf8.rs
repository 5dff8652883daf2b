//! UTF-8 matcher with strict continuation validation.
//!
//! The first continuation byte after 0xE0/0xED/0xF0/0xF4 has a narrowed
//! range, which rules out overlong forms and surrogates; anything malformed
//! rejects immediately. Because no legacy CJK encoding keeps producing valid
//! multi-byte UTF-8 by accident, a clean run of complete sequences is enough
//! to confirm early.

use crate::matchers::{CharsetMatcher, Verdict};

const BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];
const CONFIRM_MIN_SEQUENCES: u64 = 8;

pub struct Utf8Matcher {
    verdict: Verdict,
    /// Continuation bytes still expected for the current sequence.
    remaining: u8,
    /// Accepted range for the next continuation byte.
    lo: u8,
    hi: u8,
    sequences: u64,
    head: [u8; 3],
    position: u64,
}

impl Utf8Matcher {
    pub fn new() -> Self {
        Utf8Matcher {
            verdict: Verdict::Undetermined,
            remaining: 0,
            lo: 0x80,
            hi: 0xBF,
            sequences: 0,
            head: [0; 3],
            position: 0,
        }
    }

    fn reject(&mut self) -> Verdict {
        self.verdict = Verdict::Rejected;
        self.verdict
    }
}

impl Default for Utf8Matcher {
    fn default() -> Self {
        Self::new()
    }
}

impl CharsetMatcher for Utf8Matcher {
    fn label(&self) -> &'static str {
        "UTF-8"
    }

    fn feed(&mut self, chunk: &[u8]) -> Verdict {
        if self.verdict != Verdict::Undetermined {
            return self.verdict;
        }
        for &b in chunk {
            if self.position < 3 {
                self.head[self.position as usize] = b;
            }
            self.position += 1;

            if self.remaining > 0 {
                if b < self.lo || b > self.hi {
                    return self.reject();
                }
                self.lo = 0x80;
                self.hi = 0xBF;
                self.remaining -= 1;
                if self.remaining == 0 {
                    self.sequences += 1;
                }
            } else {
                match b {
                    0x00..=0x7F => {}
                    0xC2..=0xDF => {
                        self.remaining = 1;
                        self.lo = 0x80;
                        self.hi = 0xBF;
                    }
                    0xE0 => {
                        self.remaining = 2;
                        self.lo = 0xA0;
                        self.hi = 0xBF;
                    }
                    0xE1..=0xEC | 0xEE..=0xEF => {
                        self.remaining = 2;
                        self.lo = 0x80;
                        self.hi = 0xBF;
                    }
                    0xED => {
                        self.remaining = 2;
                        self.lo = 0x80;
                        self.hi = 0x9F;
                    }
                    0xF0 => {
                        self.remaining = 3;
                        self.lo = 0x90;
                        self.hi = 0xBF;
                    }
                    0xF1..=0xF3 => {
                        self.remaining = 3;
                        self.lo = 0x80;
                        self.hi = 0xBF;
                    }
                    0xF4 => {
                        self.remaining = 3;
                        self.lo = 0x80;
                        self.hi = 0x8F;
                    }
                    _ => return self.reject(),
                }
            }

            // A leading BOM settles it outright.
            if self.position == 3 && self.head == BOM {
                self.verdict = Verdict::Confirmed;
                return self.verdict;
            }
        }
        if self.sequences >= CONFIRM_MIN_SEQUENCES {
            self.verdict = Verdict::Confirmed;
        }
        self.verdict
    }

    fn verdict(&self) -> Verdict {
        self.verdict
    }

    fn score(&self) -> u64 {
        4 * self.sequences
    }

    fn plausible(&self) -> bool {
        self.verdict == Verdict::Undetermined && self.sequences > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bom_confirms_immediately() {
        let mut m = Utf8Matcher::new();
        assert_eq!(m.feed(&[0xEF, 0xBB, 0xBF]), Verdict::Confirmed);
        // BOM split across chunks behaves the same.
        let mut m = Utf8Matcher::new();
        assert_eq!(m.feed(&[0xEF]), Verdict::Undetermined);
        assert_eq!(m.feed(&[0xBB, 0xBF]), Verdict::Confirmed);
    }

    #[test]
    fn rejects_overlong_and_surrogates() {
        let mut m = Utf8Matcher::new();
        assert_eq!(m.feed(&[0xC0, 0x80]), Verdict::Rejected);
        let mut m = Utf8Matcher::new();
        assert_eq!(m.feed(&[0xE0, 0x9F, 0x80]), Verdict::Rejected);
        let mut m = Utf8Matcher::new();
        assert_eq!(m.feed(&[0xED, 0xA0, 0x80]), Verdict::Rejected);
        let mut m = Utf8Matcher::new();
        assert_eq!(m.feed(&[0xF5, 0x80]), Verdict::Rejected);
    }

    #[test]
    fn rejects_stray_continuation() {
        let mut m = Utf8Matcher::new();
        assert_eq!(m.feed(&[0xB5]), Verdict::Rejected);
    }

    #[test]
    fn confirms_after_enough_clean_sequences() {
        let mut m = Utf8Matcher::new();
        let text = "日本語のテキスト。"; // 9 characters, 3 bytes each
        assert_eq!(m.feed(text.as_bytes()), Verdict::Confirmed);
    }

    #[test]
    fn sequence_split_across_chunks() {
        let mut m = Utf8Matcher::new();
        let bytes = "中".as_bytes();
        m.feed(&bytes[..1]);
        m.feed(&bytes[1..]);
        assert_eq!(m.score(), 4);
        assert!(m.plausible());
    }
}
