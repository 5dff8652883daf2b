//! Charset detection for Chinese/Japanese/Korean byte streams.
//!
//! A [`Detector`] is a single-use session: push byte chunks with
//! [`Detector::feed`], then call [`Detector::finish`] for the verdict. Every
//! per-encoding matcher tracks its own plausibility; when several encodings
//! remain plausible at end of stream, a fixed arbitration rule picks the
//! answer. Mapping a detected label to an actual decoder is the caller's job.
//!
//! ```
//! use cjk_chardet::{detect, Detection};
//!
//! assert_eq!(detect(b"plain old ascii"), Detection::Ascii);
//! ```

use log::debug;

pub mod arbitrate;
pub mod byte_class;
pub mod matchers;

pub use byte_class::is_ascii;
use matchers::{CharsetMatcher, Verdict};

/// Chunk size used by the whole-buffer entry points. Chunking granularity
/// affects matcher call frequency, never the result.
const CHUNK_SIZE: usize = 1024;

/// Language families to attempt matching against, fixed per session.
///
/// Narrow scopes activate only the matchers of that family; the UTF matchers
/// are script-agnostic and always active.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Scope {
    All,
    ChineseOnly,
    JapaneseOnly,
    KoreanOnly,
}

/// Outcome of a detection session.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Detection {
    /// The entire stream was 7-bit clean (an empty stream included).
    Ascii,
    /// The most probable encoding, as a canonical label such as `"GBK"`,
    /// `"Big5"`, `"Shift_JIS"` or `"UTF-16LE"`.
    Encoding(&'static str),
    /// No matcher remained plausible; callers should fall back to their
    /// configured default encoding.
    NoMatch,
}

impl Detection {
    /// The detected label, `"ASCII"` for the ASCII sentinel, or `None` when
    /// nothing matched.
    pub fn label(&self) -> Option<&'static str> {
        match *self {
            Detection::Ascii => Some("ASCII"),
            Detection::Encoding(label) => Some(label),
            Detection::NoMatch => None,
        }
    }
}

/// One detection session: owns the matcher set for its scope and consumes a
/// strictly ordered sequence of byte chunks.
///
/// Each detection call constructs its own `Detector`; sessions are never
/// shared, so concurrent detections cannot corrupt each other's state.
/// [`finish`](Detector::finish) consumes the session, making a resolved
/// session unusable by construction.
pub struct Detector {
    scope: Scope,
    matchers: Vec<Box<dyn CharsetMatcher>>,
    pure_ascii: bool,
    confirmed: Option<&'static str>,
}

impl Detector {
    pub fn new(scope: Scope) -> Self {
        Detector {
            scope,
            matchers: matchers::for_scope(scope),
            pure_ascii: true,
            confirmed: None,
        }
    }

    pub fn scope(&self) -> Scope {
        self.scope
    }

    /// Pushes the next chunk of the stream.
    ///
    /// Returns `true` once some matcher has confirmed; from then on further
    /// chunks are accepted as no-ops and the caller may stop feeding early.
    /// While the stream is still 7-bit clean, chunks are only screened by the
    /// ASCII classifier and the matchers are left untouched.
    pub fn feed(&mut self, chunk: &[u8]) -> bool {
        if self.confirmed.is_some() {
            return true;
        }
        if self.pure_ascii {
            if is_ascii(chunk) {
                return false;
            }
            self.pure_ascii = false;
        }
        for matcher in self.matchers.iter_mut() {
            if matcher.verdict() != Verdict::Undetermined {
                continue;
            }
            match matcher.feed(chunk) {
                Verdict::Confirmed => {
                    debug!("matcher confirmed: {}", matcher.label());
                    self.confirmed = Some(matcher.label());
                    return true;
                }
                Verdict::Rejected => debug!("matcher rejected: {}", matcher.label()),
                Verdict::Undetermined => {}
            }
        }
        false
    }

    /// Ends the stream and resolves the session.
    ///
    /// The pure-ASCII fast path takes precedence over all matcher state, then
    /// a confirmed label, then the ranked list of still-plausible matchers
    /// reduced through [`arbitrate::pick`]. Finishing early is allowed and
    /// yields whatever partial verdict is available.
    pub fn finish(self) -> Detection {
        if self.pure_ascii {
            return Detection::Ascii;
        }
        if let Some(label) = self.confirmed {
            return Detection::Encoding(label);
        }
        // Rank plausible matchers by score, ties by registration order.
        let mut ranked: Vec<(u64, usize)> = self
            .matchers
            .iter()
            .enumerate()
            .filter(|(_, m)| m.plausible())
            .map(|(index, m)| (m.score(), index))
            .collect();
        ranked.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)));
        let candidates: Vec<&'static str> = ranked
            .iter()
            .map(|&(_, index)| self.matchers[index].label())
            .collect();
        debug!("probable charsets: {:?}", candidates);
        match arbitrate::pick(&candidates) {
            Some(label) => Detection::Encoding(label),
            None => Detection::NoMatch,
        }
    }
}

/// Detects the probable charset of a whole in-memory buffer with
/// [`Scope::All`].
pub fn detect(bytes: &[u8]) -> Detection {
    detect_with_scope(bytes, Scope::All)
}

/// Detects the probable charset of a whole in-memory buffer, feeding it
/// through a fresh session in 1 KiB chunks.
pub fn detect_with_scope(bytes: &[u8], scope: Scope) -> Detection {
    let mut detector = Detector::new(scope);
    for chunk in bytes.chunks(CHUNK_SIZE) {
        if detector.feed(chunk) {
            break;
        }
    }
    detector.finish()
}

/// Reports whether already-decoded text contains the Unicode replacement
/// character, i.e. was probably decoded with the wrong charset.
///
/// Caller-side sanity check only; detection never consults it.
///
/// ```
/// use cjk_chardet::in_wrong_encoding;
/// assert!(in_wrong_encoding("bad: \u{FFFD}"));
/// assert!(!in_wrong_encoding("好"));
/// ```
pub fn in_wrong_encoding(text: &str) -> bool {
    text.contains('\u{FFFD}')
}
