/// Compact byte-range membership set optimized for per-byte tests in the
/// matcher hot loops.
///
/// # Design
///
/// * All 256 byte values map to one bit across two [`u128`] halves, so a
///   membership test is a single shift and bitwise AND with no table lookup.
/// * Sets are built at compile time with [`ByteSet::with_range`], which keeps
///   every encoding grammar a plain `static` with no startup cost.
#[derive(Copy, Clone)]
pub struct ByteSet {
    lo: u128, // bytes 0x00..=0x7F
    hi: u128, // bytes 0x80..=0xFF
}

impl ByteSet {
    /// The set containing no bytes.
    pub const EMPTY: ByteSet = ByteSet { lo: 0, hi: 0 };

    /// Returns a copy of this set with the inclusive range `start..=end` added.
    ///
    /// # Examples
    ///
    /// ```
    /// use cjk_chardet::byte_class::ByteSet;
    /// const TRAIL: ByteSet = ByteSet::EMPTY.with_range(0x40, 0x7E).with_range(0x80, 0xFE);
    /// assert!(TRAIL.contains(0x40));
    /// assert!(!TRAIL.contains(0x7F));
    /// ```
    pub const fn with_range(mut self, start: u8, end: u8) -> ByteSet {
        let mut b = start as u16;
        while b <= end as u16 {
            if b < 128 {
                self.lo |= 1u128 << b;
            } else {
                self.hi |= 1u128 << (b - 128);
            }
            b += 1;
        }
        self
    }

    /// Tests whether `b` is a member of this set.
    #[inline]
    pub const fn contains(&self, b: u8) -> bool {
        if b < 128 {
            (self.lo >> b) & 1 == 1
        } else {
            (self.hi >> (b - 128)) & 1 == 1
        }
    }
}

/// Returns `true` iff every byte of `buffer` is 7-bit ASCII (< 0x80).
///
/// Pure and stateless; the detector calls this per chunk only while the
/// stream is still ASCII-clean, and an empty buffer is trivially clean.
///
/// # Examples
///
/// ```
/// use cjk_chardet::is_ascii;
/// assert!(is_ascii(b"plain text"));
/// assert!(!is_ascii(&[0x68, 0xE4, 0xB8, 0xAD]));
/// ```
#[inline]
pub fn is_ascii(buffer: &[u8]) -> bool {
    buffer.iter().all(|&b| b < 0x80)
}
