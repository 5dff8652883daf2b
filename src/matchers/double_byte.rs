//! Table-driven matcher for the classic two-byte CJK encodings.
//!
//! GB2312, GBK, Big5, EUC-KR and Shift_JIS all share the same skeleton: a
//! lead byte selects a row, a trail byte must fall in the encoding's trail
//! range, and anything out of range rejects the encoding outright. The
//! grammars differ only in their byte ranges, single-byte extras and
//! frequency tables, so one state machine serves all five.

use crate::byte_class::ByteSet;
use crate::matchers::{freq, CharsetMatcher, Verdict};

/// Byte-sequence grammar of one double-byte encoding.
pub struct DoubleByteGrammar {
    pub label: &'static str,
    pub lead: ByteSet,
    pub trail: ByteSet,
    /// Non-ASCII bytes that stand alone (Shift_JIS half-width katakana).
    pub singles: ByteSet,
    /// Frequency table membership for a completed pair.
    pub hot: fn(u8, u8) -> bool,
}

pub static GB2312: DoubleByteGrammar = DoubleByteGrammar {
    label: "GB2312",
    lead: ByteSet::EMPTY.with_range(0xA1, 0xF7),
    trail: ByteSet::EMPTY.with_range(0xA1, 0xFE),
    singles: ByteSet::EMPTY,
    hot: freq::is_common_gb,
};

pub static GBK: DoubleByteGrammar = DoubleByteGrammar {
    label: "GBK",
    lead: ByteSet::EMPTY.with_range(0x81, 0xFE),
    trail: ByteSet::EMPTY.with_range(0x40, 0x7E).with_range(0x80, 0xFE),
    singles: ByteSet::EMPTY,
    // GB2312 codes are unchanged in GBK, so the same table applies.
    hot: freq::is_common_gb,
};

pub static BIG5: DoubleByteGrammar = DoubleByteGrammar {
    label: "Big5",
    lead: ByteSet::EMPTY.with_range(0xA1, 0xF9),
    trail: ByteSet::EMPTY.with_range(0x40, 0x7E).with_range(0xA1, 0xFE),
    singles: ByteSet::EMPTY,
    hot: freq::is_common_big5,
};

pub static EUC_KR: DoubleByteGrammar = DoubleByteGrammar {
    label: "EUC-KR",
    lead: ByteSet::EMPTY.with_range(0xA1, 0xFE),
    trail: ByteSet::EMPTY.with_range(0xA1, 0xFE),
    singles: ByteSet::EMPTY,
    hot: freq::is_common_euc_kr,
};

pub static SHIFT_JIS: DoubleByteGrammar = DoubleByteGrammar {
    label: "Shift_JIS",
    lead: ByteSet::EMPTY.with_range(0x81, 0x9F).with_range(0xE0, 0xEF),
    trail: ByteSet::EMPTY.with_range(0x40, 0x7E).with_range(0x80, 0xFC),
    singles: ByteSet::EMPTY.with_range(0xA1, 0xDF),
    hot: freq::is_kana_sjis,
};

// Confirmation needs a long run of pairs with strong frequency agreement;
// the grammars overlap too much for anything more eager. An unconfirmed
// matcher still wins through the final ranking.
const CONFIRM_MIN_PAIRS: u64 = 256;

pub struct DoubleByteMatcher {
    grammar: &'static DoubleByteGrammar,
    pending_lead: Option<u8>,
    pairs: u64,
    singles: u64,
    hot_hits: u64,
    verdict: Verdict,
}

impl DoubleByteMatcher {
    pub fn new(grammar: &'static DoubleByteGrammar) -> Self {
        DoubleByteMatcher {
            grammar,
            pending_lead: None,
            pairs: 0,
            singles: 0,
            hot_hits: 0,
            verdict: Verdict::Undetermined,
        }
    }
}

impl CharsetMatcher for DoubleByteMatcher {
    fn label(&self) -> &'static str {
        self.grammar.label
    }

    fn feed(&mut self, chunk: &[u8]) -> Verdict {
        if self.verdict != Verdict::Undetermined {
            return self.verdict;
        }
        for &b in chunk {
            if let Some(lead) = self.pending_lead.take() {
                if self.grammar.trail.contains(b) {
                    self.pairs += 1;
                    if (self.grammar.hot)(lead, b) {
                        self.hot_hits += 1;
                    }
                } else {
                    self.verdict = Verdict::Rejected;
                    return self.verdict;
                }
            } else if b < 0x80 {
                // ASCII passes through without touching the score.
            } else if self.grammar.lead.contains(b) {
                self.pending_lead = Some(b);
            } else if self.grammar.singles.contains(b) {
                self.singles += 1;
            } else {
                self.verdict = Verdict::Rejected;
                return self.verdict;
            }
        }
        if self.pairs >= CONFIRM_MIN_PAIRS && self.hot_hits * 4 >= self.pairs {
            self.verdict = Verdict::Confirmed;
        }
        self.verdict
    }

    fn verdict(&self) -> Verdict {
        self.verdict
    }

    fn score(&self) -> u64 {
        2 * self.pairs + self.singles + 4 * self.hot_hits
    }

    fn plausible(&self) -> bool {
        self.verdict == Verdict::Undetermined && self.pairs + self.singles > 0
    }
}
