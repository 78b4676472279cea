//! HTML output assembly.
//!
//! Blocks arrive fully rendered; the writer owns the output buffer and
//! serializes each block followed by a single newline, so a multi-line
//! block stays one write unit.

/// HTML output writer with a pre-allocated, reusable buffer.
///
/// # Example
/// ```
/// use hashmark::HtmlWriter;
///
/// let mut writer = HtmlWriter::new();
/// writer.push_block("<h1>Hi</h1>");
/// writer.push_block("<ul>\n<li>a</li>\n</ul>");
///
/// assert_eq!(writer.into_string(), "<h1>Hi</h1>\n<ul>\n<li>a</li>\n</ul>\n");
/// ```
pub struct HtmlWriter {
    out: Vec<u8>,
}

impl HtmlWriter {
    /// Create a new writer with default capacity.
    #[inline]
    pub fn new() -> Self {
        Self {
            out: Vec::with_capacity(1024),
        }
    }

    /// Create with pre-allocated capacity based on expected input size.
    ///
    /// Output for this dialect runs close to input size; reserve a
    /// quarter extra for tag overhead.
    #[inline]
    pub fn with_capacity_for(input_len: usize) -> Self {
        Self {
            out: Vec::with_capacity(input_len + input_len / 4),
        }
    }

    /// Write one block followed by its terminating newline.
    #[inline]
    pub fn push_block(&mut self, block: &str) {
        self.out.extend_from_slice(block.as_bytes());
        self.out.push(b'\n');
    }

    /// Current output length in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.out.len()
    }

    /// Check if output is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.out.is_empty()
    }

    /// Clear output for reuse (keeps capacity).
    #[inline]
    pub fn clear(&mut self) {
        self.out.clear();
    }

    /// Get output as str.
    #[inline]
    pub fn as_str(&self) -> &str {
        // SAFETY: only whole &str blocks and ASCII newlines are written
        unsafe { std::str::from_utf8_unchecked(&self.out) }
    }

    /// Take ownership of the output as a String.
    #[inline]
    pub fn into_string(self) -> String {
        // SAFETY: only whole &str blocks and ASCII newlines are written
        unsafe { String::from_utf8_unchecked(self.out) }
    }
}

impl Default for HtmlWriter {
    fn default() -> Self {
        Self::new()
    }
}
