use crate::assembler::Direction;

/// Byte length of the legacy ("short") HTC header used by older targets.
pub const SHORT_HEADER_LEN: usize = 6;
/// Byte length of the current HTC header.
pub const FULL_HEADER_LEN: usize = 8;

/// Which HTC header length the analyzed driver uses.
///
/// This is a static configuration choice, never inferred from the data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeaderVariant {
    /// 6-byte header ("old" format). Carries no trailer length.
    Short,
    /// 8-byte header.
    #[default]
    Full,
}

impl HeaderVariant {
    /// Number of bytes the header occupies at the start of a frame.
    pub fn len(self) -> usize {
        match self {
            HeaderVariant::Short => SHORT_HEADER_LEN,
            HeaderVariant::Full => FULL_HEADER_LEN,
        }
    }
}

/// HTC frame header.
///
/// Wire format (both variants share the first six bytes):
/// ```text
/// ┌──────────┬───────────┬──────────────┬───────────┬───────────┐
/// │ Endpoint │ Flags     │ Length       │ Ctrl0     │ Ctrl1     │
/// │ (1B)     │ (1B)      │ (2B LE)      │ (1B)      │ (1B)      │
/// └──────────┴───────────┴──────────────┴───────────┴───────────┘
/// ```
/// `length` counts every payload byte after the header, trailer included.
/// In target→host direction `ctrl0` carries the trailer byte count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HtcHeader {
    /// Endpoint id: selects which upper protocol owns the frame.
    pub eid: u8,
    pub flags: u8,
    /// Total payload length declared by the frame.
    pub length: u16,
    pub ctrl0: u8,
    pub ctrl1: u8,
}

impl HtcHeader {
    /// Decode a header from the first bytes of a frame.
    ///
    /// Returns `None` when fewer than `variant.len()` bytes are present. No
    /// endpoint-id range check happens here; endpoint identity belongs to
    /// the owning protocol decoder.
    pub fn parse(bytes: &[u8], variant: HeaderVariant) -> Option<Self> {
        if bytes.len() < variant.len() {
            return None;
        }
        Some(Self {
            eid: bytes[0],
            flags: bytes[1],
            length: u16::from_le_bytes([bytes[2], bytes[3]]),
            ctrl0: bytes[4],
            ctrl1: bytes[5],
        })
    }

    /// Trailer byte count for the given configuration.
    ///
    /// Only target→host frames carry a trailer, and only the 8-byte header
    /// declares its length; everywhere else this is 0.
    pub fn trailer_len(&self, variant: HeaderVariant, direction: Direction) -> usize {
        match (direction, variant) {
            (Direction::TargetToHost, HeaderVariant::Full) => self.ctrl0 as usize,
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_header() {
        let bytes = [0x01, 0x02, 0x3a, 0x01, 0x04, 0x00, 0xff, 0xff];
        let hdr = HtcHeader::parse(&bytes, HeaderVariant::Full).unwrap();
        assert_eq!(hdr.eid, 1);
        assert_eq!(hdr.flags, 2);
        assert_eq!(hdr.length, 0x013a);
        assert_eq!(hdr.ctrl0, 4);
        assert_eq!(hdr.ctrl1, 0);
    }

    #[test]
    fn parse_short_header() {
        let bytes = [0x00, 0x00, 0x10, 0x00, 0x00, 0x00];
        let hdr = HtcHeader::parse(&bytes, HeaderVariant::Short).unwrap();
        assert_eq!(hdr.eid, 0);
        assert_eq!(hdr.length, 0x10);
    }

    #[test]
    fn insufficient_bytes() {
        let bytes = [0x01, 0x00, 0x10, 0x00, 0x00, 0x00, 0x00];
        assert!(HtcHeader::parse(&bytes, HeaderVariant::Full).is_none());
        assert!(HtcHeader::parse(&bytes[..5], HeaderVariant::Short).is_none());
    }

    #[test]
    fn trailer_only_in_target_to_host_full() {
        let bytes = [0x01, 0x00, 0x0a, 0x00, 0x04, 0x00, 0x00, 0x00];
        let hdr = HtcHeader::parse(&bytes, HeaderVariant::Full).unwrap();
        assert_eq!(
            hdr.trailer_len(HeaderVariant::Full, Direction::TargetToHost),
            4
        );
        assert_eq!(
            hdr.trailer_len(HeaderVariant::Full, Direction::HostToTarget),
            0
        );
        let short = HtcHeader::parse(&bytes[..6], HeaderVariant::Short).unwrap();
        assert_eq!(
            short.trailer_len(HeaderVariant::Short, Direction::TargetToHost),
            0
        );
    }
}
