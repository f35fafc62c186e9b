use qcahex_frame::HexLine;
use tracing::trace;

use crate::config::AnalyzerConfig;
use crate::decoder::{FrameDecoder, MessageView};
use crate::htc_ctrl::HtcCtrlDecoder;
use crate::htt::HttDecoder;
use crate::wmi::WmiCtrlDecoder;

/// Routes frames to the decoder owning their endpoint.
///
/// Every offset-0 row selects the active decoder from the endpoint-id byte
/// of the (not yet validated) HTC header; continuation rows go to whichever
/// decoder is active. Frames on endpoints no decoder claims are ignored.
#[derive(Debug)]
pub struct Dispatcher {
    wmi: WmiCtrlDecoder,
    htt: HttDecoder,
    htc_ctrl: HtcCtrlDecoder,
    active: Option<Active>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Active {
    Wmi,
    Htt,
    HtcCtrl,
}

impl Dispatcher {
    pub fn new(config: &AnalyzerConfig) -> Self {
        Self {
            wmi: WmiCtrlDecoder::new(config),
            htt: HttDecoder::new(config),
            htc_ctrl: HtcCtrlDecoder::new(config),
            active: None,
        }
    }

    /// Feed one dump row. Returns true when the active decoder completed a
    /// message on this row.
    pub fn parse_line(&mut self, line: &HexLine) -> bool {
        if line.starts_frame() {
            self.active = match line.bytes.first() {
                Some(&eid) if eid == self.wmi.endpoint() => Some(Active::Wmi),
                Some(&eid) if eid == self.htt.endpoint() => Some(Active::Htt),
                Some(&eid) if eid == self.htc_ctrl.endpoint() => Some(Active::HtcCtrl),
                Some(&eid) => {
                    trace!(eid, "frame on unclaimed endpoint ignored");
                    None
                }
                None => None,
            };
        }
        match self.active {
            Some(Active::Wmi) => self.wmi.parse_line(line),
            Some(Active::Htt) => self.htt.parse_line(line),
            Some(Active::HtcCtrl) => self.htc_ctrl.parse_line(line),
            None => false,
        }
    }

    /// Completed message of the active decoder, if any.
    pub fn message(&self) -> Option<MessageView<'_>> {
        match self.active? {
            Active::Wmi => self.wmi.message(),
            Active::Htt => self.htt.message(),
            Active::HtcCtrl => self.htc_ctrl.message(),
        }
    }
}
