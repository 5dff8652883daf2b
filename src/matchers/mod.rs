//! Per-encoding matchers: small incremental state machines that each track
//! how plausible one encoding remains as chunks arrive.

use crate::Scope;

pub mod double_byte;
pub mod euc_jp;
pub mod freq;
pub mod gb18030;
pub mod utf16;
pub mod utf8;

use double_byte::DoubleByteMatcher;
use euc_jp::EucJpMatcher;
use gb18030::Gb18030Matcher;
use utf16::Utf16Matcher;
use utf8::Utf8Matcher;

/// Verdict of a matcher about its own encoding.
///
/// `Rejected` and `Confirmed` are terminal: a matcher that has left
/// `Undetermined` is never fed again and never changes its mind.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    Undetermined,
    Rejected,
    Confirmed,
}

/// Capability interface shared by every matcher family, so the detector can
/// drive them without knowing any encoding's internal grammar.
pub trait CharsetMatcher {
    /// Canonical label, e.g. `"Shift_JIS"` or `"UTF-16LE"`.
    fn label(&self) -> &'static str;

    /// Consumes the next chunk and returns the updated verdict. Partial
    /// multi-byte sequences are carried across chunk boundaries, so verdicts
    /// are deterministic for a deterministic chunk ordering.
    fn feed(&mut self, chunk: &[u8]) -> Verdict;

    /// Current verdict without consuming input.
    fn verdict(&self) -> Verdict;

    /// Confidence score used to rank plausible candidates at end of stream.
    /// Only comparable between matchers fed the same byte sequence.
    fn score(&self) -> u64;

    /// Whether the matcher still considers itself a viable candidate at end
    /// of stream. Stricter than `verdict() == Undetermined` for statistical
    /// matchers.
    fn plausible(&self) -> bool;
}

/// Instantiates the matcher subset implied by `scope`, in registration order.
///
/// Registration order doubles as the deterministic tie-break for equal
/// scores, so more specific grammars are registered before broader ones and
/// the script-agnostic UTF matchers always come last.
pub fn for_scope(scope: Scope) -> Vec<Box<dyn CharsetMatcher>> {
    let (chinese, japanese, korean) = match scope {
        Scope::All => (true, true, true),
        Scope::ChineseOnly => (true, false, false),
        Scope::JapaneseOnly => (false, true, false),
        Scope::KoreanOnly => (false, false, true),
    };

    let mut set: Vec<Box<dyn CharsetMatcher>> = Vec::new();
    if chinese {
        set.push(Box::new(DoubleByteMatcher::new(&double_byte::GB2312)));
        set.push(Box::new(DoubleByteMatcher::new(&double_byte::GBK)));
        set.push(Box::new(Gb18030Matcher::new()));
        set.push(Box::new(DoubleByteMatcher::new(&double_byte::BIG5)));
    }
    if japanese {
        set.push(Box::new(DoubleByteMatcher::new(&double_byte::SHIFT_JIS)));
        set.push(Box::new(EucJpMatcher::new()));
    }
    if korean {
        set.push(Box::new(DoubleByteMatcher::new(&double_byte::EUC_KR)));
    }
    // UTF matchers are script-agnostic and active in every scope.
    set.push(Box::new(Utf8Matcher::new()));
    set.push(Box::new(Utf16Matcher::le()));
    set.push(Box::new(Utf16Matcher::be()));
    set
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(scope: Scope) -> Vec<&'static str> {
        for_scope(scope).iter().map(|m| m.label()).collect()
    }

    #[test]
    fn all_scope_registers_every_family() {
        assert_eq!(
            labels(Scope::All),
            vec![
                "GB2312", "GBK", "GB18030", "Big5", "Shift_JIS", "EUC-JP", "EUC-KR", "UTF-8",
                "UTF-16LE", "UTF-16BE"
            ]
        );
    }

    #[test]
    fn narrow_scopes_keep_utf_matchers() {
        assert_eq!(
            labels(Scope::KoreanOnly),
            vec!["EUC-KR", "UTF-8", "UTF-16LE", "UTF-16BE"]
        );
        assert_eq!(
            labels(Scope::JapaneseOnly),
            vec!["Shift_JIS", "EUC-JP", "UTF-8", "UTF-16LE", "UTF-16BE"]
        );
        assert!(!labels(Scope::ChineseOnly).contains(&"EUC-KR"));
    }
}
