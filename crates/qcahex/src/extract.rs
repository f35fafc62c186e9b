//! Hex-dump row extraction from raw driver log text.
//!
//! Kernel logs interleave dump rows with ordinary log lines. A dump row
//! looks like
//!
//! ```text
//! [ 1234.567890] ath6kl: tx 00000000: 01 00 3a 00 00 00 00 00  ........
//! ```
//!
//! with an optional timestamp, an optional description (here `ath6kl: tx`),
//! the address offset, up to 16 byte values and an optional trailing ASCII
//! column. The extractor finds the offset token, applies the description
//! filters and hands back the canonical `<offset>: <bytes>` row the decoders
//! consume. Lines that are not dump rows yield `None` and are skipped.

/// Description-filtered dump-row extractor.
#[derive(Debug, Clone)]
pub struct Extractor {
    log_has_timestamps: bool,
    keep_timestamps: bool,
    desc: Vec<String>,
    desc_invert: Vec<String>,
}

impl Extractor {
    pub fn new(
        log_has_timestamps: bool,
        keep_timestamps: bool,
        desc: Vec<String>,
        desc_invert: Vec<String>,
    ) -> Self {
        Self {
            log_has_timestamps,
            keep_timestamps,
            desc,
            desc_invert,
        }
    }

    /// Whether extracted rows carry a timestamp prefix.
    pub fn emits_timestamps(&self) -> bool {
        self.log_has_timestamps && self.keep_timestamps
    }

    /// Extract the canonical dump row from one raw log line.
    pub fn extract(&self, line: &str) -> Option<String> {
        let line = line.trim_end();

        let (timestamp, rest) = if self.log_has_timestamps {
            let stripped = line.trim_start().strip_prefix('[')?;
            let (ts, rest) = stripped.split_once(']')?;
            (Some(ts.trim()), rest)
        } else {
            (None, line)
        };

        let tokens: Vec<&str> = rest.split_whitespace().collect();
        let offset_pos = tokens.iter().position(|t| is_offset_token(t))?;

        let desc = tokens[..offset_pos].join(" ");
        if !self.desc.is_empty() && !self.desc.iter().any(|d| desc.starts_with(d.as_str())) {
            return None;
        }
        if self.desc_invert.iter().any(|d| desc.starts_with(d.as_str())) {
            return None;
        }

        let mut bytes = Vec::with_capacity(qcahex_frame::MAX_LINE_BYTES);
        for token in &tokens[offset_pos + 1..] {
            if !is_byte_token(token) || bytes.len() == qcahex_frame::MAX_LINE_BYTES {
                break; // trailing ASCII column
            }
            bytes.push(*token);
        }

        let offset = tokens[offset_pos].trim_end_matches(':');
        let mut row = String::new();
        if self.emits_timestamps() {
            if let Some(ts) = timestamp {
                row.push('[');
                row.push_str(ts);
                row.push_str("] ");
            }
        }
        row.push_str(offset);
        row.push_str(": ");
        row.push_str(&bytes.join(" "));
        Some(row)
    }
}

fn is_offset_token(token: &str) -> bool {
    let Some(stem) = token.strip_suffix(':') else {
        return false;
    };
    !stem.is_empty() && stem.chars().all(|c| c.is_ascii_hexdigit())
}

fn is_byte_token(token: &str) -> bool {
    token.len() == 2 && token.chars().all(|c| c.is_ascii_hexdigit())
}
