/// Turns an arbitrary byte-chunk stream into whole `\n`-terminated lines,
/// buffering a partial trailing piece across chunks.
///
/// Holds two kinds of leftover state: `tail`, the buffered partial line,
/// and `pending_bytes`, a UTF-8 sequence left incomplete at a chunk
/// boundary (a chunk boundary can land in the middle of a multi-byte
/// character).
#[derive(Debug, Default)]
pub struct Utf8LineFramer {
    tail: String,
    pending_bytes: Vec<u8>,
}

impl Utf8LineFramer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one chunk of bytes, returning whole lines completed by this
    /// call (in order). An empty chunk is a no-op.
    pub fn feed(&mut self, chunk: &[u8]) -> Vec<String> {
        if chunk.is_empty() {
            return Vec::new();
        }
        let mut bytes = std::mem::take(&mut self.pending_bytes);
        bytes.extend_from_slice(chunk);

        let text = match std::str::from_utf8(&bytes) {
            Ok(s) => s.to_string(),
            Err(e) => {
                let valid_up_to = e.valid_up_to();
                self.pending_bytes = bytes[valid_up_to..].to_vec();
                // Safety: `valid_up_to` is, by `str::from_utf8`'s own
                // contract, the boundary of a valid UTF-8 prefix.
                std::str::from_utf8(&bytes[..valid_up_to]).unwrap().to_string()
            }
        };
        self.feed_text(&text)
    }

    fn feed_text(&mut self, chunk: &str) -> Vec<String> {
        if chunk.is_empty() {
            return Vec::new();
        }
        let mut pieces: Vec<String> = chunk.split('\n').map(str::to_string).collect();
        if !self.tail.is_empty() {
            let mut first = std::mem::take(&mut self.tail);
            first.push_str(&pieces[0]);
            pieces[0] = first;
        }
        let last = pieces.pop().expect("split always yields at least one piece");
        if !last.is_empty() {
            self.tail = last;
        }
        pieces
    }

    /// The buffered partial line, if any. Exposed for callers that want to
    /// inspect (not flush) unterminated trailing content once the
    /// underlying byte stream has ended.
    pub fn remainder(&self) -> &str {
        &self.tail
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_single_complete_chunk() {
        let mut framer = Utf8LineFramer::new();
        let lines = framer.feed(b"hello\nworld\n");
        assert_eq!(lines, vec!["hello", "world"]);
        assert_eq!(framer.remainder(), "");
    }

    #[test]
    fn buffers_partial_tail_across_chunks() {
        let mut framer = Utf8LineFramer::new();
        assert_eq!(framer.feed(b"hello\nwor"), vec!["hello"]);
        assert_eq!(framer.remainder(), "wor");
        assert_eq!(framer.feed(b"ld\n"), vec!["world"]);
        assert_eq!(framer.feed(b"!"), Vec::<String>::new());
        assert_eq!(framer.remainder(), "!");
    }

    #[test]
    fn empty_chunk_is_a_no_op() {
        let mut framer = Utf8LineFramer::new();
        assert_eq!(framer.feed(b""), Vec::<String>::new());
        assert_eq!(framer.remainder(), "");
    }

    #[test]
    fn chunk_ending_in_newline_leaves_empty_tail() {
        let mut framer = Utf8LineFramer::new();
        framer.feed(b"partial");
        assert_eq!(framer.feed(b"\n"), vec!["partial"]);
        assert_eq!(framer.remainder(), "");
    }

    #[test]
    fn reassembly_identity_over_arbitrary_partition() {
        let text = "a\nbb\nccc\n";
        let expected: Vec<String> = text.split('\n').filter(|s| !s.is_empty()).map(str::to_string).collect();

        for split_at in 0..text.len() {
            let (first, second) = text.split_at(split_at);
            let mut framer = Utf8LineFramer::new();
            let mut lines = framer.feed(first.as_bytes());
            lines.extend(framer.feed(second.as_bytes()));
            assert_eq!(lines, expected, "split at {split_at} produced {lines:?}");
        }
    }

    #[test]
    fn multibyte_character_split_across_chunks_decodes_correctly() {
        let line = "caf\u{e9}\n"; // 'é' is two bytes in UTF-8
        let bytes = line.as_bytes();
        let split_at = bytes.len() - 1; // split inside the 2-byte character
        let mut framer = Utf8LineFramer::new();
        let mut lines = framer.feed(&bytes[..split_at]);
        lines.extend(framer.feed(&bytes[split_at..]));
        assert_eq!(lines, vec!["caf\u{e9}"]);
    }
}
