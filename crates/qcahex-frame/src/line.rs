use crate::error::{LineError, Result};

/// A Linux hex dump prints at most 16 byte values per row.
pub const MAX_LINE_BYTES: usize = 16;

/// One parsed hex-dump row.
///
/// Rows arrive in order; the address offset is only used to detect the start
/// of a new frame (`addr == 0`), byte positions within the frame are implied
/// by arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HexLine {
    /// Address offset within the dumped buffer.
    pub addr: u32,
    /// Byte values carried by this row, in dump order (0..=16 entries).
    pub bytes: Vec<u8>,
    /// Timestamp prefix, present only when the caller configured one.
    pub timestamp: Option<String>,
}

impl HexLine {
    /// Parse one dump row of the form `[<timestamp>] <offset>: <b0> <b1> ...`.
    ///
    /// The `[<timestamp>] ` prefix is stripped only when `timestamps` is set;
    /// in that case its bracket delimiters are mandatory. An `Err` means the
    /// line is not a dump row and should be skipped by the caller.
    pub fn parse(line: &str, timestamps: bool) -> Result<Self> {
        let (timestamp, rest) = if timestamps {
            let stripped = line.strip_prefix('[').ok_or(LineError::MissingTimestamp)?;
            let (ts, rest) = stripped
                .split_once("] ")
                .ok_or(LineError::MissingTimestamp)?;
            (Some(ts.to_string()), rest)
        } else {
            (None, line)
        };

        let (addr_field, dump) = rest
            .split_once(": ")
            .ok_or(LineError::MissingSeparator)?;
        let addr_field = addr_field.trim();
        let addr = u32::from_str_radix(addr_field, 16)
            .map_err(|_| LineError::InvalidOffset(addr_field.to_string()))?;

        let mut bytes = Vec::with_capacity(MAX_LINE_BYTES);
        for token in dump.split_ascii_whitespace() {
            if token.len() != 2 {
                return Err(LineError::InvalidByte(token.to_string()));
            }
            let value = u8::from_str_radix(token, 16)
                .map_err(|_| LineError::InvalidByte(token.to_string()))?;
            if bytes.len() == MAX_LINE_BYTES {
                return Err(LineError::TooManyBytes);
            }
            bytes.push(value);
        }

        Ok(Self {
            addr,
            bytes,
            timestamp,
        })
    }

    /// An offset-0 row begins a new frame.
    pub fn starts_frame(&self) -> bool {
        self.addr == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_plain_row() {
        let line = HexLine::parse("00000000: 01 00 3a 00 04 00 00 00", false).unwrap();
        assert_eq!(line.addr, 0);
        assert_eq!(line.bytes, vec![0x01, 0x00, 0x3a, 0x00, 0x04, 0x00, 0x00, 0x00]);
        assert_eq!(line.timestamp, None);
        assert!(line.starts_frame());
    }

    #[test]
    fn parse_continuation_row() {
        let line = HexLine::parse("00000010: aa bb", false).unwrap();
        assert_eq!(line.addr, 0x10);
        assert_eq!(line.bytes, vec![0xaa, 0xbb]);
        assert!(!line.starts_frame());
    }

    #[test]
    fn parse_full_width_row() {
        let line = HexLine::parse(
            "00000000: 00 01 02 03 04 05 06 07 08 09 0a 0b 0c 0d 0e 0f",
            false,
        )
        .unwrap();
        assert_eq!(line.bytes.len(), MAX_LINE_BYTES);
    }

    #[test]
    fn parse_with_timestamp() {
        let line = HexLine::parse("[12345.678901] 00000000: 02 00", true).unwrap();
        assert_eq!(line.timestamp.as_deref(), Some("12345.678901"));
        assert_eq!(line.bytes, vec![0x02, 0x00]);
    }

    #[test]
    fn timestamp_required_but_absent() {
        assert_eq!(
            HexLine::parse("00000000: 02 00", true),
            Err(LineError::MissingTimestamp)
        );
    }

    #[test]
    fn timestamp_present_but_not_requested_fails_offset() {
        // The bracket token is not valid hex, so the row is rejected rather
        // than silently misparsed.
        assert!(HexLine::parse("[123] 00000000: 02 00", false).is_err());
    }

    #[test]
    fn rejects_bad_offset() {
        assert_eq!(
            HexLine::parse("zz: 01 02", false),
            Err(LineError::InvalidOffset("zz".to_string()))
        );
    }

    #[test]
    fn rejects_bad_byte_token() {
        assert_eq!(
            HexLine::parse("00000000: 01 g2", false),
            Err(LineError::InvalidByte("g2".to_string()))
        );
        assert_eq!(
            HexLine::parse("00000000: 1", false),
            Err(LineError::InvalidByte("1".to_string()))
        );
    }

    #[test]
    fn rejects_row_with_too_many_bytes() {
        let row = format!("00000000: {}", vec!["00"; 17].join(" "));
        assert_eq!(HexLine::parse(&row, false), Err(LineError::TooManyBytes));
    }

    #[test]
    fn rejects_row_without_separator() {
        assert_eq!(
            HexLine::parse("plain log text", false),
            Err(LineError::MissingSeparator)
        );
    }

    #[test]
    fn empty_dump_portion_is_allowed() {
        let line = HexLine::parse("00000000: ", false).unwrap();
        assert!(line.bytes.is_empty());
    }
}
