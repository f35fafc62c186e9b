use qcahex_frame::{Assembler, Direction, HeaderVariant, HexLine, HtcHeader};
use tracing::trace;

use crate::config::AnalyzerConfig;
use crate::decoder::{FrameDecoder, HttMsg, MessageKind, MessageView};
use crate::ids::id_registry;

id_registry! {
    /// HTT host-to-target message ids.
    pub enum HttH2tMsg(u8) {
        VersionReq = 0x0 => "HTT_H2T_MSG_TYPE_VERSION_REQ",
        TxFrm = 0x1 => "HTT_H2T_MSG_TYPE_TX_FRM",
        RxRingCfg = 0x2 => "HTT_H2T_MSG_TYPE_RX_RING_CFG",
        StatsReq = 0x3 => "HTT_H2T_MSG_TYPE_STATS_REQ",
        Sync = 0x4 => "HTT_H2T_MSG_TYPE_SYNC",
        AggrCfg = 0x5 => "HTT_H2T_MSG_TYPE_AGGR_CFG",
        FragDescBankCfg = 0x6 => "HTT_H2T_MSG_TYPE_FRAG_DESC_BANK_CFG",
        DeprecatedMgmtTx = 0x7 => "DEPRECATED_HTT_H2T_MSG_TYPE_MGMT_TX",
        WdiIpaCfg = 0x8 => "HTT_H2T_MSG_TYPE_WDI_IPA_CFG",
        WdiIpaOpReq = 0x9 => "HTT_H2T_MSG_TYPE_WDI_IPA_OP_REQ",
        AggrCfgEx = 0xa => "HTT_H2T_MSG_TYPE_AGGR_CFG_EX",
    }
}

id_registry! {
    /// HTT target-to-host message ids.
    pub enum HttT2hMsg(u8) {
        VersionConf = 0x0 => "HTT_T2H_MSG_TYPE_VERSION_CONF",
        RxInd = 0x1 => "HTT_T2H_MSG_TYPE_RX_IND",
        RxFlush = 0x2 => "HTT_T2H_MSG_TYPE_RX_FLUSH",
        PeerMap = 0x3 => "HTT_T2H_MSG_TYPE_PEER_MAP",
        PeerUnmap = 0x4 => "HTT_T2H_MSG_TYPE_PEER_UNMAP",
        RxAddba = 0x5 => "HTT_T2H_MSG_TYPE_RX_ADDBA",
        RxDelba = 0x6 => "HTT_T2H_MSG_TYPE_RX_DELBA",
        TxComplInd = 0x7 => "HTT_T2H_MSG_TYPE_TX_COMPL_IND",
        Pktlog = 0x8 => "HTT_T2H_MSG_TYPE_PKTLOG",
        StatsConf = 0x9 => "HTT_T2H_MSG_TYPE_STATS_CONF",
        RxFragInd = 0xa => "HTT_T2H_MSG_TYPE_RX_FRAG_IND",
        SecInd = 0xb => "HTT_T2H_MSG_TYPE_SEC_IND",
        DeprecatedRcUpdateInd = 0xc => "DEPRECATED_HTT_T2H_MSG_TYPE_RC_UPDATE_IND",
        TxInspectInd = 0xd => "HTT_T2H_MSG_TYPE_TX_INSPECT_IND",
        MgmtTxComplInd = 0xe => "HTT_T2H_MSG_TYPE_MGMT_TX_COMPL_IND",
        TxCreditUpdateInd = 0xf => "HTT_T2H_MSG_TYPE_TX_CREDIT_UPDATE_IND",
        RxPnInd = 0x10 => "HTT_T2H_MSG_TYPE_RX_PN_IND",
        RxOffloadDeliverInd = 0x11 => "HTT_T2H_MSG_TYPE_RX_OFFLOAD_DELIVER_IND",
        RxInOrdPaddrInd = 0x12 => "HTT_T2H_MSG_TYPE_RX_IN_ORD_PADDR_IND",
        WdiIpaOpResponse = 0x14 => "HTT_T2H_MSG_TYPE_WDI_IPA_OP_RESPONSE",
        ChanChange = 0x15 => "HTT_T2H_MSG_TYPE_CHAN_CHANGE",
        RxOfldPktErr = 0x16 => "HTT_T2H_MSG_TYPE_RX_OFLD_PKT_ERR",
        RateReport = 0x17 => "HTT_T2H_MSG_TYPE_RATE_REPORT",
        FlowPoolMap = 0x18 => "HTT_T2H_MSG_TYPE_FLOW_POOL_MAP",
        FlowPoolUnmap = 0x19 => "HTT_T2H_MSG_TYPE_FLOW_POOL_UNMAP",
        Test = 0x20 => "HTT_T2H_MSG_TYPE_TEST",
    }
}

/// Decoder for HTT data-path messages.
///
/// The HTT "header" is a single id byte right after the HTC header; which
/// id space it belongs to is decided by the configured transfer direction,
/// never by inspecting the byte.
#[derive(Debug)]
pub struct HttDecoder {
    eid: u8,
    header_variant: HeaderVariant,
    direction: Direction,
    frame: Option<Frame>,
}

#[derive(Debug)]
struct Frame {
    assembler: Assembler,
    timestamp: Option<String>,
}

impl HttDecoder {
    pub fn new(config: &AnalyzerConfig) -> Self {
        Self {
            eid: config.htt_eid,
            header_variant: config.header_variant,
            direction: config.direction,
            frame: None,
        }
    }

    /// Message id of the current frame, once its first payload byte arrived.
    pub fn msg_id(&self) -> Option<u8> {
        let frame = self.frame.as_ref()?;
        frame.assembler.data().first().copied()
    }
}

impl FrameDecoder for HttDecoder {
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
        let id = *frame.assembler.data().first()?;
        let msg = match self.direction {
            Direction::HostToTarget => HttMsg::HostToTarget(HttH2tMsg::from_id(id)),
            Direction::TargetToHost => HttMsg::TargetToHost(HttT2hMsg::from_id(id)),
        };
        Some(MessageView {
            kind: MessageKind::Htt { id, msg },
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
        assert_eq!(HttH2tMsg::from_id(0x1), HttH2tMsg::TxFrm);
        assert_eq!(
            HttH2tMsg::from_id(0x1).name(),
            Some("HTT_H2T_MSG_TYPE_TX_FRM")
        );
        assert_eq!(HttH2tMsg::from_id(0x42), HttH2tMsg::Unknown(0x42));
        assert_eq!(HttT2hMsg::from_id(0x3), HttT2hMsg::PeerMap);
        // 0x13 is a hole in the target-to-host id space.
        assert_eq!(HttT2hMsg::from_id(0x13), HttT2hMsg::Unknown(0x13));
    }

    #[test]
    fn direction_selects_id_space() {
        let mut config = AnalyzerConfig::new();
        let row = "00000000: 02 00 04 00 00 00 00 00 01 aa bb cc";

        let mut h2t = HttDecoder::new(&config);
        assert!(h2t.parse_line(&line(row)));
        match h2t.message().unwrap().kind {
            MessageKind::Htt { msg: HttMsg::HostToTarget(msg), .. } => {
                assert_eq!(msg, HttH2tMsg::TxFrm);
            }
            other => panic!("unexpected kind: {other:?}"),
        }

        config.direction = Direction::TargetToHost;
        let mut t2h = HttDecoder::new(&config);
        assert!(t2h.parse_line(&line(row)));
        match t2h.message().unwrap().kind {
            MessageKind::Htt { msg: HttMsg::TargetToHost(msg), .. } => {
                assert_eq!(msg, HttT2hMsg::RxInd);
            }
            other => panic!("unexpected kind: {other:?}"),
        }
    }

    #[test]
    fn data_includes_the_id_byte() {
        let mut dec = HttDecoder::new(&AnalyzerConfig::new());
        assert!(dec.parse_line(&line("00000000: 02 00 03 00 00 00 00 00 04 01 02")));
        let msg = dec.message().unwrap();
        assert_eq!(msg.kind.id(), 0x4);
        assert_eq!(msg.data, &[0x04, 0x01, 0x02]);
    }

    #[test]
    fn endpoint_mismatch_rejected() {
        let mut dec = HttDecoder::new(&AnalyzerConfig::new());
        assert!(!dec.parse_line(&line("00000000: 01 00 03 00 00 00 00 00 04 01 02")));
        assert!(dec.message().is_none());
    }

    #[test]
    fn multi_row_reassembly() {
        let mut dec = HttDecoder::new(&AnalyzerConfig::new());
        assert!(!dec.parse_line(&line("00000000: 02 00 0c 00 00 00 00 00 03 00 01 02 03 04 05 06")));
        // The id byte is already known while the frame is still open.
        assert_eq!(dec.msg_id(), Some(0x3));
        assert!(dec.parse_line(&line("00000010: 07 08 09 0a 00 00")));
        let msg = dec.message().unwrap();
        assert_eq!(msg.data.len(), 12);
        assert_eq!(msg.kind.id(), 0x3);
    }

    #[test]
    fn empty_frame_yields_no_message() {
        let mut dec = HttDecoder::new(&AnalyzerConfig::new());
        assert!(dec.parse_line(&line("00000000: 02 00 00 00 00 00 00 00")));
        assert!(dec.message().is_none());
    }
}
