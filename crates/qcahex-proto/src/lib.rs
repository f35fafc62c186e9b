//! Protocol decoders for the QCA wireless host/target transport.
//!
//! Three protocols ride on HTC frames, selected by the frame's endpoint id:
//! - **WMI** control messages (commands host→target, events target→host),
//!   in the unified (24-bit id) or legacy (16-bit id) header encoding
//! - **HTT** data-path messages, a single id byte per message
//! - **HTC control** messages on the reserved endpoint 0
//!
//! Each decoder composes a `qcahex_frame::Assembler` for reassembly and
//! resolves ids through closed registries: lookup is total, unknown ids map
//! to an explicit `Unknown(raw)` variant, never an error. The [`Dispatcher`]
//! routes frames to the right decoder when several protocols are analyzed
//! over one dump stream.

pub mod config;
pub mod decoder;
pub mod dispatch;
pub mod htc_ctrl;
pub mod htt;
mod ids;
pub mod wmi;
pub mod wmi_ids;
pub mod wmi_tlv;

pub use config::{AnalyzerConfig, MsgFilter, WmiEncoding};
pub use decoder::{FrameDecoder, HttMsg, MessageKind, MessageView};
pub use dispatch::Dispatcher;
pub use htc_ctrl::{HtcCtrlDecoder, HtcCtrlMsg};
pub use htt::{HttDecoder, HttH2tMsg, HttT2hMsg};
pub use wmi::{WmiCtrlDecoder, WmiHeader};
pub use wmi_ids::{WmiCmd, WmiCmdGroup, WmiEvt};
pub use wmi_tlv::{TlvHeader, TlvMsg, TlvTag};
