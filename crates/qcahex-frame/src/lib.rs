//! Hex-dump line parsing and HTC frame reassembly.
//!
//! This is the transport-independent layer of qcahex. Driver debug logs dump
//! HTC frames as rows of at most 16 hex byte values; a frame starts at the
//! row with address offset 0 and spans rows until its declared length is
//! reached. This crate turns those rows into:
//! - [`HexLine`]: one parsed dump row (offset, byte values, timestamp)
//! - [`HtcHeader`]: the link-layer header at the start of every frame
//! - [`Assembler`]: the per-frame accumulation state machine
//!
//! Upper-protocol decoding (WMI, HTT, HTC control) lives in `qcahex-proto`.

pub mod assembler;
pub mod error;
pub mod header;
pub mod line;

pub use assembler::{Assembler, Direction};
pub use error::{LineError, Result};
pub use header::{HeaderVariant, HtcHeader, FULL_HEADER_LEN, SHORT_HEADER_LEN};
pub use line::{HexLine, MAX_LINE_BYTES};
