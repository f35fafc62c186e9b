use qcahex_frame::{Assembler, Direction, HeaderVariant, HexLine, HtcHeader};
use tracing::trace;

use crate::config::{AnalyzerConfig, WmiEncoding};
use crate::decoder::{FrameDecoder, MessageKind, MessageView};
use crate::wmi_ids::{WmiCmd, WmiEvt};

/// WMI control header, decoded from the first bytes of the frame payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WmiHeader {
    /// Message id: 24 bits (unified) or 16 bits (legacy), little-endian.
    pub msg_id: u32,
    /// Interface index. In the legacy encoding this sits at byte 3, one
    /// reserved byte past the 16-bit id field; the gap is part of the wire
    /// format.
    pub if_idx: u8,
}

impl WmiHeader {
    /// Decode from the start of the frame payload. `None` when fewer bytes
    /// than the encoding's header length are present.
    pub fn parse(data: &[u8], encoding: WmiEncoding) -> Option<Self> {
        if data.len() < encoding.header_len() {
            return None;
        }
        let (msg_id, if_idx) = match encoding {
            WmiEncoding::Unified => {
                let id = u32::from_le_bytes([data[0], data[1], data[2], 0]);
                (id, data[3])
            }
            WmiEncoding::Legacy => {
                let id = u32::from(u16::from_le_bytes([data[0], data[1]]));
                (id, data[3])
            }
        };
        Some(Self { msg_id, if_idx })
    }
}

/// Decoder for WMI control messages on the configured control-service
/// endpoint.
#[derive(Debug)]
pub struct WmiCtrlDecoder {
    eid: u8,
    header_variant: HeaderVariant,
    direction: Direction,
    encoding: WmiEncoding,
    frame: Option<Frame>,
}

#[derive(Debug)]
struct Frame {
    assembler: Assembler,
    timestamp: Option<String>,
}

impl WmiCtrlDecoder {
    pub fn new(config: &AnalyzerConfig) -> Self {
        Self {
            eid: config.wmi_eid,
            header_variant: config.header_variant,
            direction: config.direction,
            encoding: config.encoding,
            frame: None,
        }
    }

    /// WMI header of the current frame, decoded from the accumulated
    /// payload prefix. Resolves as soon as enough bytes arrived, even when
    /// the header straddles dump rows.
    pub fn header(&self) -> Option<WmiHeader> {
        let frame = self.frame.as_ref()?;
        WmiHeader::parse(frame.assembler.data(), self.encoding)
    }
}

impl FrameDecoder for WmiCtrlDecoder {
    fn endpoint(&self) -> u8 {
        self.eid
    }

    fn begin_frame(&mut self, line: &HexLine) -> bool {
        self.frame = None;
        let Some(htc) = HtcHeader::parse(&line.bytes, self.header_variant) else {
            trace!("frame start row too short for HTC header");
            return false;
        };
        if htc.eid != self.eid {
            trace!(eid = htc.eid, expected = self.eid, "endpoint mismatch");
            return false;
        }
        let mut assembler = Assembler::new(&htc, self.header_variant, self.direction);
        let complete = assembler.push(&line.bytes[self.header_variant.len()..]);
        self.frame = Some(Frame {
            assembler,
            timestamp: line.timestamp.clone(),
        });
        complete
    }

    fn continue_frame(&mut self, line: &HexLine) -> bool {
        let Some(frame) = &mut self.frame else {
            return false;
        };
        if frame.assembler.is_complete() {
            return false;
        }
        frame.assembler.push(&line.bytes)
    }

    fn message(&self) -> Option<MessageView<'_>> {
        let frame = self.frame.as_ref()?;
        if !frame.assembler.is_complete() {
            return None;
        }
        let header = WmiHeader::parse(frame.assembler.data(), self.encoding)?;
        Some(MessageView {
            kind: MessageKind::Wmi {
                id: header.msg_id,
                if_idx: header.if_idx,
                cmd: WmiCmd::from_id(header.msg_id),
                evt: WmiEvt::from_id(header.msg_id),
            },
            data: &frame.assembler.data()[self.encoding.header_len()..],
            trailer: frame.assembler.trailer(),
            timestamp: frame.timestamp.as_deref(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decoder() -> WmiCtrlDecoder {
        WmiCtrlDecoder::new(&AnalyzerConfig::new())
    }

    fn line(text: &str) -> HexLine {
        HexLine::parse(text, false).unwrap()
    }

    #[test]
    fn unified_header_parse() {
        let hdr = WmiHeader::parse(&[0x01, 0x90, 0x00, 0x02], WmiEncoding::Unified).unwrap();
        assert_eq!(hdr.msg_id, 0x9001);
        assert_eq!(hdr.if_idx, 2);
    }

    #[test]
    fn legacy_header_keeps_if_idx_gap() {
        // 16-bit id, one reserved byte, then the interface index.
        let hdr =
            WmiHeader::parse(&[0x01, 0x00, 0xff, 0x03, 0x00, 0x00], WmiEncoding::Legacy).unwrap();
        assert_eq!(hdr.msg_id, 0x1);
        assert_eq!(hdr.if_idx, 3);
    }

    #[test]
    fn header_needs_full_length() {
        assert!(WmiHeader::parse(&[0x01, 0x90, 0x00], WmiEncoding::Unified).is_none());
        assert!(WmiHeader::parse(&[0x01, 0x00, 0x00, 0x03, 0x00], WmiEncoding::Legacy).is_none());
    }

    #[test]
    fn single_row_message() {
        let mut dec = decoder();
        // eid 1, length 8: unified header (cmd 0x4003, if 0) + 4 payload bytes.
        let done = dec.parse_line(&line("00000000: 01 00 08 00 00 00 00 00 03 40 00 00 aa bb cc dd"));
        assert!(done);
        let msg = dec.message().unwrap();
        match msg.kind {
            MessageKind::Wmi { id, cmd, .. } => {
                assert_eq!(id, 0x4003);
                assert_eq!(cmd, WmiCmd::PdevSetParam);
            }
            other => panic!("unexpected kind: {other:?}"),
        }
        assert_eq!(msg.data, &[0xaa, 0xbb, 0xcc, 0xdd]);
    }

    #[test]
    fn header_split_across_rows() {
        // Total length 4, payload delivered as two 2-byte rows: the message
        // id still combines little-endian from the reassembled payload.
        let mut dec = decoder();
        assert!(!dec.parse_line(&line("00000000: 01 00 04 00 00 00 00 00")));
        assert!(!dec.parse_line(&line("00000008: aa bb")));
        assert!(dec.parse_line(&line("0000000a: cc dd")));
        let header = dec.header().unwrap();
        assert_eq!(header.msg_id, 0xccbbaa);
        let msg = dec.message().unwrap();
        assert_eq!(msg.kind.id(), 0xccbbaa);
        assert_eq!(msg.data.len(), 0);
        assert_eq!(msg.trailer.len(), 0);
    }

    #[test]
    fn endpoint_mismatch_rejects_without_state() {
        let mut dec = decoder();
        assert!(!dec.parse_line(&line("00000000: 02 00 04 00 00 00 00 00 01 00 00 00")));
        assert!(dec.message().is_none());
        // Continuation rows for the rejected frame are inert.
        assert!(!dec.parse_line(&line("00000010: aa bb cc dd")));
        assert!(dec.message().is_none());
        // The next matching frame decodes cleanly.
        assert!(dec.parse_line(&line("00000000: 01 00 04 00 00 00 00 00 01 00 00 00")));
        assert_eq!(dec.message().unwrap().kind.id(), 0x1);
    }

    #[test]
    fn short_start_row_rejects_frame() {
        let mut dec = decoder();
        assert!(!dec.parse_line(&line("00000000: 01 00 08")));
        assert!(!dec.parse_line(&line("00000010: aa bb")));
        assert!(dec.message().is_none());
    }

    #[test]
    fn message_shorter_than_wmi_header_yields_no_message() {
        let mut dec = decoder();
        assert!(dec.parse_line(&line("00000000: 01 00 02 00 00 00 00 00 aa bb")));
        assert!(dec.message().is_none());
    }

    #[test]
    fn multi_row_payload_with_padding() {
        let mut dec = decoder();
        // length 0x14 = 20 bytes: 4 header + 16 payload.
        assert!(!dec.parse_line(&line("00000000: 01 00 14 00 00 00 00 00 01 50 00 00 00 01 02 03")));
        assert!(!dec.parse_line(&line("00000010: 04 05 06 07 08 09 0a 0b")));
        // Final row padded beyond the declared length.
        assert!(dec.parse_line(&line("00000018: 0c 0d 0e 0f 00 00 00 00")));
        let msg = dec.message().unwrap();
        match msg.kind {
            MessageKind::Wmi { cmd, .. } => assert_eq!(cmd, WmiCmd::VdevCreate),
            other => panic!("unexpected kind: {other:?}"),
        }
        assert_eq!(msg.data.len(), 16);
        assert_eq!(msg.data[15], 0x0f);
    }

    #[test]
    fn target_to_host_trailer_split() {
        let mut config = AnalyzerConfig::new();
        config.direction = Direction::TargetToHost;
        let mut dec = WmiCtrlDecoder::new(&config);
        // length 10, ctrl0 4: 6 data bytes (4 header + 2 payload) + 4 trailer.
        // The first row crosses the data/trailer boundary mid-chunk.
        assert!(!dec.parse_line(&line(
            "00000000: 01 00 0a 00 04 00 00 00 01 90 00 00 aa bb 01 02"
        )));
        assert!(dec.parse_line(&line("00000010: 03 04")));
        let msg = dec.message().unwrap();
        assert_eq!(msg.kind.id(), 0x9001);
        assert_eq!(msg.data, &[0xaa, 0xbb]);
        assert_eq!(msg.trailer, &[0x01, 0x02, 0x03, 0x04]);
    }

    #[test]
    fn new_frame_resets_previous_state() {
        let mut dec = decoder();
        assert!(!dec.parse_line(&line("00000000: 01 00 20 00 00 00 00 00 01 00 00 00")));
        // A new offset-0 row abandons the half-assembled frame.
        assert!(dec.parse_line(&line("00000000: 01 00 04 00 00 00 00 00 02 00 00 00")));
        assert_eq!(dec.message().unwrap().kind.id(), 0x2);
    }
}
