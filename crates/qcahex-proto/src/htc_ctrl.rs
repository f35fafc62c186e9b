use qcahex_frame::{Assembler, Direction, HeaderVariant, HexLine, HtcHeader};
use tracing::trace;

use crate::config::AnalyzerConfig;
use crate::decoder::{FrameDecoder, MessageKind, MessageView};
use crate::ids::id_registry;

/// HTC control always rides on the reserved endpoint 0.
pub const HTC_CTRL_EID: u8 = 0;

/// Synthetic id assigned to frames that carry only a trailer.
pub const TRAILER_ONLY_ID: u16 = 0xffff;

id_registry! {
    /// HTC control message ids.
    pub enum HtcCtrlMsg(u16) {
        Ready = 1 => "HTC_MSG_READY_ID",
        ConnectService = 2 => "HTC_MSG_CONNECT_SERVICE_ID",
        ConnectServiceResp = 3 => "HTC_MSG_CONNECT_SERVICE_RESP_ID",
        SetupComplete = 4 => "HTC_MSG_SETUP_COMPLETE_ID",
        SetupCompleteEx = 5 => "HTC_MSG_SETUP_COMPLETE_EX_ID",
        SendSuspendComplete = 6 => "HTC_MSG_SEND_SUSPEND_COMPLETE",
        TrailerOnly = 0xffff => "HTC_MSG_TRAILER_ONLY",
    }
}

/// Decoder for HTC control messages.
///
/// The endpoint is not configurable: the control service owns endpoint 0 by
/// definition. Target→host credit-report frames may consist of nothing but
/// a trailer; those resolve to the [`HtcCtrlMsg::TrailerOnly`] sentinel
/// instead of reading an id from the (empty) payload.
#[derive(Debug)]
pub struct HtcCtrlDecoder {
    header_variant: HeaderVariant,
    direction: Direction,
    frame: Option<Frame>,
}

#[derive(Debug)]
struct Frame {
    assembler: Assembler,
    timestamp: Option<String>,
}

impl HtcCtrlDecoder {
    pub fn new(config: &AnalyzerConfig) -> Self {
        Self {
            header_variant: config.header_variant,
            direction: config.direction,
            frame: None,
        }
    }

    fn current_id(&self) -> Option<u16> {
        let frame = self.frame.as_ref()?;
        let data = frame.assembler.data();
        if frame.assembler.is_complete() && data.is_empty() {
            return Some(TRAILER_ONLY_ID);
        }
        Some(u16::from_le_bytes([*data.first()?, *data.get(1)?]))
    }
}

impl FrameDecoder for HtcCtrlDecoder {
    fn endpoint(&self) -> u8 {
        HTC_CTRL_EID
    }

    fn begin_frame(&mut self, line: &HexLine) -> bool {
        self.frame = None;
        let Some(htc) = HtcHeader::parse(&line.bytes, self.header_variant) else {
            trace!("frame start row too short for HTC header");
            return false;
        };
        if htc.eid != HTC_CTRL_EID {
            trace!(eid = htc.eid, "endpoint mismatch");
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
        let id = self.current_id()?;
        Some(MessageView {
            kind: MessageKind::HtcCtrl {
                id,
                msg: HtcCtrlMsg::from_id(id),
            },
            data: frame.assembler.data(),
            trailer: frame.assembler.trailer(),
            timestamp: frame.timestamp.as_deref(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(text: &str) -> HexLine {
        HexLine::parse(text, false).unwrap()
    }

    #[test]
    fn registry_lookup_is_total() {
        assert_eq!(HtcCtrlMsg::from_id(1), HtcCtrlMsg::Ready);
        assert_eq!(HtcCtrlMsg::from_id(1).name(), Some("HTC_MSG_READY_ID"));
        assert_eq!(HtcCtrlMsg::from_id(0x100), HtcCtrlMsg::Unknown(0x100));
        assert_eq!(HtcCtrlMsg::from_id(0xffff), HtcCtrlMsg::TrailerOnly);
    }

    #[test]
    fn ready_message_decodes() {
        let mut dec = HtcCtrlDecoder::new(&AnalyzerConfig::new());
        assert!(dec.parse_line(&line("00000000: 00 00 08 00 00 00 00 00 01 00 00 00 80 00 01 00")));
        let msg = dec.message().unwrap();
        match msg.kind {
            MessageKind::HtcCtrl { id, msg } => {
                assert_eq!(id, 1);
                assert_eq!(msg, HtcCtrlMsg::Ready);
            }
            other => panic!("unexpected kind: {other:?}"),
        }
        assert_eq!(msg.data.len(), 8);
    }

    #[test]
    fn non_zero_endpoint_rejected() {
        let mut dec = HtcCtrlDecoder::new(&AnalyzerConfig::new());
        assert!(!dec.parse_line(&line("00000000: 01 00 04 00 00 00 00 00 01 00 00 00")));
        assert!(dec.message().is_none());
    }

    #[test]
    fn trailer_only_frame_uses_sentinel_id() {
        let mut config = AnalyzerConfig::new();
        config.direction = Direction::TargetToHost;
        let mut dec = HtcCtrlDecoder::new(&config);
        // Declared length equals the trailer length: no message payload.
        assert!(dec.parse_line(&line("00000000: 00 00 04 00 04 00 00 00 01 02 03 04")));
        let msg = dec.message().unwrap();
        assert_eq!(msg.kind.id(), u32::from(TRAILER_ONLY_ID));
        assert_eq!(msg.kind.name(), Some("HTC_MSG_TRAILER_ONLY"));
        assert!(msg.data.is_empty());
        assert_eq!(msg.trailer, &[0x01, 0x02, 0x03, 0x04]);
    }

    #[test]
    fn connect_service_response_with_trailer() {
        let mut config = AnalyzerConfig::new();
        config.direction = Direction::TargetToHost;
        let mut dec = HtcCtrlDecoder::new(&config);
        // length 10, ctrl0 2: 8 data bytes + 2 trailer bytes.
        assert!(!dec.parse_line(&line(
            "00000000: 00 00 0a 00 02 00 00 00 03 00 00 01 00 00 05 00"
        )));
        assert!(dec.parse_line(&line("00000010: aa bb")));
        let msg = dec.message().unwrap();
        assert_eq!(msg.kind.id(), 3);
        assert_eq!(msg.kind.name(), Some("HTC_MSG_CONNECT_SERVICE_RESP_ID"));
        assert_eq!(msg.data.len(), 8);
        assert_eq!(msg.trailer, &[0xaa, 0xbb]);
    }

    #[test]
    fn one_byte_message_yields_no_message() {
        let mut dec = HtcCtrlDecoder::new(&AnalyzerConfig::new());
        assert!(dec.parse_line(&line("00000000: 00 00 01 00 00 00 00 00 04 00")));
        assert!(dec.message().is_none());
    }
}
