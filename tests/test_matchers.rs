#[cfg(test)]
mod tests {
    use cjk_chardet::{detect, detect_with_scope, Detection, Detector, Scope};

    /// Feeds `bytes` in chunks of `size` through a fresh session.
    fn detect_chunked(bytes: &[u8], size: usize) -> Detection {
        let mut detector = Detector::new(Scope::All);
        for chunk in bytes.chunks(size) {
            if detector.feed(chunk) {
                break;
            }
        }
        detector.finish()
    }

    fn assert_chunking_invariant(bytes: &[u8]) {
        let whole = detect(bytes);
        for size in [1, 2, 3, 7, 1024] {
            assert_eq!(
                detect_chunked(bytes, size),
                whole,
                "split size {} changed the result",
                size
            );
        }
    }

    #[test]
    fn chunking_does_not_change_the_result() {
        // Multi-byte sequences land on every possible split point.
        let (gbk, _, _) = encoding_rs::GBK.encode("的一是不了在人有我他中国");
        assert_chunking_invariant(&gbk);

        let (euc_kr, _, _) = encoding_rs::EUC_KR.encode("한국의 기사가 하나 있다");
        assert_chunking_invariant(&euc_kr);

        let (sjis, _, _) = encoding_rs::SHIFT_JIS.encode("日本語のテキストです");
        assert_chunking_invariant(&sjis);

        assert_chunking_invariant("こんにちは、世界。日本語のテキストです。".as_bytes());

        assert_chunking_invariant(&[0x81, 0x30, 0x81, 0x30].repeat(5));

        assert_chunking_invariant(&[0xFF, 0xFF].repeat(8));
    }

    #[test]
    fn ascii_prefix_does_not_disturb_detection() {
        let (tail, _, _) = encoding_rs::EUC_KR.encode("한국의 기사가 하나 있다");
        let mut bytes = b"From: nobody\r\n\r\n".to_vec();
        bytes.extend_from_slice(&tail);
        assert_eq!(detect(&bytes), Detection::Encoding("EUC-KR"));
        assert_eq!(detect_chunked(&bytes, 4), Detection::Encoding("EUC-KR"));
    }

    #[test]
    fn scope_is_fixed_per_session() {
        let detector = Detector::new(Scope::JapaneseOnly);
        assert_eq!(detector.scope(), Scope::JapaneseOnly);
    }

    #[test]
    fn japanese_scope_still_detects_utf8() {
        let text = "こんにちは、世界。日本語のテキストです。";
        assert_eq!(
            detect_with_scope(text.as_bytes(), Scope::JapaneseOnly),
            Detection::Encoding("UTF-8")
        );
    }

    #[test]
    fn malformed_input_is_not_an_error() {
        // Garbage never panics; it just exhausts the matcher set.
        let mut detector = Detector::new(Scope::All);
        detector.feed(&[0x80, 0x00, 0xFF, 0xA0, 0x81]);
        detector.feed(&[0xFF; 32]);
        assert_eq!(detector.finish(), Detection::NoMatch);
    }

    #[test]
    fn dangling_lead_at_end_of_stream_is_ignored() {
        let (bytes, _, _) = encoding_rs::GBK.encode("的一是不了在人有我他中国");
        let mut bytes = bytes.into_owned();
        bytes.push(0xB5); // truncated final character
        assert_eq!(detect(&bytes), Detection::Encoding("GB2312"));
    }
}
