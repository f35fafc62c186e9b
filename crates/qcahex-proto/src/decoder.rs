use qcahex_frame::HexLine;

use crate::htc_ctrl::HtcCtrlMsg;
use crate::htt::{HttH2tMsg, HttT2hMsg};
use crate::wmi_ids::{WmiCmd, WmiEvt};

/// A protocol decoder bound to one HTC endpoint.
///
/// Decoders are fed dump rows in arrival order. An offset-0 row begins a new
/// frame (abandoning any frame still open); every other row continues the
/// open frame. The return value signals "a complete message is now
/// available" — the caller then reads it through [`FrameDecoder::message`].
pub trait FrameDecoder {
    /// Endpoint id this decoder claims frames from.
    fn endpoint(&self) -> u8;

    /// Start a new frame from an offset-0 row. Rejecting the frame (short
    /// HTC header, endpoint mismatch) leaves the decoder idle and returns
    /// false; no partial state is retained.
    fn begin_frame(&mut self, line: &HexLine) -> bool;

    /// Continue the open frame. Rows arriving with no open frame, or after
    /// the open frame completed, are ignored and return false.
    fn continue_frame(&mut self, line: &HexLine) -> bool;

    /// View of the completed message. `None` unless the current frame is
    /// complete and its protocol header resolved. The view borrows decoder
    /// state and goes stale at the next frame start.
    fn message(&self) -> Option<MessageView<'_>>;

    /// Route one row to begin or continue handling by its address offset.
    fn parse_line(&mut self, line: &HexLine) -> bool {
        if line.starts_frame() {
            self.begin_frame(line)
        } else {
            self.continue_frame(line)
        }
    }
}

/// Read-only view of one fully reassembled message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageView<'a> {
    pub kind: MessageKind,
    /// Message payload. For WMI this starts after the WMI header; for HTT
    /// and HTC control it starts at the message id (matching what the
    /// respective protocol considers its message body).
    pub data: &'a [u8],
    /// Trailer bytes (target→host frames only).
    pub trailer: &'a [u8],
    /// Timestamp of the row that started the frame, when configured.
    pub timestamp: Option<&'a str>,
}

/// Symbolic identification of a message, per protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    /// WMI control message. Commands and events share one id space per
    /// direction; both interpretations are carried so callers can present
    /// whichever resolves.
    Wmi {
        id: u32,
        if_idx: u8,
        cmd: WmiCmd,
        evt: WmiEvt,
    },
    /// HTT data-path message, id space selected by transfer direction.
    Htt { id: u8, msg: HttMsg },
    /// HTC control message (endpoint 0).
    HtcCtrl { id: u16, msg: HtcCtrlMsg },
}

/// Direction-scoped HTT message id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttMsg {
    HostToTarget(HttH2tMsg),
    TargetToHost(HttT2hMsg),
}

impl HttMsg {
    pub fn name(self) -> Option<&'static str> {
        match self {
            HttMsg::HostToTarget(msg) => msg.name(),
            HttMsg::TargetToHost(msg) => msg.name(),
        }
    }
}

impl MessageKind {
    /// Raw numeric message id.
    pub fn id(&self) -> u32 {
        match *self {
            MessageKind::Wmi { id, .. } => id,
            MessageKind::Htt { id, .. } => u32::from(id),
            MessageKind::HtcCtrl { id, .. } => u32::from(id),
        }
    }

    /// Resolved symbolic name, `None` when the id is outside its registry.
    /// For WMI the command name wins over the event name when both resolve.
    pub fn name(&self) -> Option<&'static str> {
        match *self {
            MessageKind::Wmi { cmd, evt, .. } => cmd.name().or_else(|| evt.name()),
            MessageKind::Htt { msg, .. } => msg.name(),
            MessageKind::HtcCtrl { msg, .. } => msg.name(),
        }
    }
}
