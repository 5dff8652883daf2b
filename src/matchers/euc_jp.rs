//! EUC-JP matcher. Same two-byte skeleton as the other EUC grammars plus the
//! SS2 (half-width katakana) and SS3 (JIS X 0212) escape forms, which the
//! generic double-byte machine cannot express.

use crate::byte_class::ByteSet;
use crate::matchers::{CharsetMatcher, Verdict};

const EUC_RANGE: ByteSet = ByteSet::EMPTY.with_range(0xA1, 0xFE);
const KANA_RANGE: ByteSet = ByteSet::EMPTY.with_range(0xA1, 0xDF);

const CONFIRM_MIN_PAIRS: u64 = 256;

enum Pending {
    None,
    Lead,
    /// After SS2 (0x8E): one half-width katakana byte expected.
    Kana,
    /// After SS3 (0x8F): two plane-2 bytes expected.
    Ss3First,
    Ss3Second,
}

pub struct EucJpMatcher {
    pending: Pending,
    pending_lead: u8,
    pairs: u64,
    half_width: u64,
    kana_pairs: u64,
    verdict: Verdict,
}

impl EucJpMatcher {
    pub fn new() -> Self {
        EucJpMatcher {
            pending: Pending::None,
            pending_lead: 0,
            pairs: 0,
            half_width: 0,
            kana_pairs: 0,
            verdict: Verdict::Undetermined,
        }
    }

    fn reject(&mut self) -> Verdict {
        self.verdict = Verdict::Rejected;
        self.verdict
    }
}

impl Default for EucJpMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl CharsetMatcher for EucJpMatcher {
    fn label(&self) -> &'static str {
        "EUC-JP"
    }

    fn feed(&mut self, chunk: &[u8]) -> Verdict {
        if self.verdict != Verdict::Undetermined {
            return self.verdict;
        }
        for &b in chunk {
            match self.pending {
                Pending::Lead => {
                    if !EUC_RANGE.contains(b) {
                        return self.reject();
                    }
                    self.pairs += 1;
                    // Rows 0xA4/0xA5 are hiragana/katakana, the signature of
                    // Japanese running text.
                    if self.pending_lead == 0xA4 || self.pending_lead == 0xA5 {
                        self.kana_pairs += 1;
                    }
                    self.pending = Pending::None;
                }
                Pending::Kana => {
                    if !KANA_RANGE.contains(b) {
                        return self.reject();
                    }
                    self.half_width += 1;
                    self.pending = Pending::None;
                }
                Pending::Ss3First => {
                    if !EUC_RANGE.contains(b) {
                        return self.reject();
                    }
                    self.pending = Pending::Ss3Second;
                }
                Pending::Ss3Second => {
                    if !EUC_RANGE.contains(b) {
                        return self.reject();
                    }
                    self.pairs += 1;
                    self.pending = Pending::None;
                }
                Pending::None => {
                    if b < 0x80 {
                        // ASCII passes through.
                    } else if EUC_RANGE.contains(b) {
                        self.pending_lead = b;
                        self.pending = Pending::Lead;
                    } else if b == 0x8E {
                        self.pending = Pending::Kana;
                    } else if b == 0x8F {
                        self.pending = Pending::Ss3First;
                    } else {
                        return self.reject();
                    }
                }
            }
        }
        if self.pairs >= CONFIRM_MIN_PAIRS && self.kana_pairs * 4 >= self.pairs {
            self.verdict = Verdict::Confirmed;
        }
        self.verdict
    }

    fn verdict(&self) -> Verdict {
        self.verdict
    }

    fn score(&self) -> u64 {
        2 * self.pairs + self.half_width + 4 * self.kana_pairs
    }

    fn plausible(&self) -> bool {
        self.verdict == Verdict::Undetermined && self.pairs + self.half_width > 0
    }
}
