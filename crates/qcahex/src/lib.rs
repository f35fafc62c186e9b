//! qcahex — analyze hex dumps produced by QCA wireless kernel drivers
//! (ath6kl, qcacld and friends).
//!
//! The dumps record the HTC traffic between driver and target. qcahex
//! extracts the dump rows from the raw log, reassembles HTC frames and
//! decodes the WMI control, HTT data-path and HTC control messages they
//! carry. The decoding engine lives in `qcahex-frame` and `qcahex-proto`;
//! this crate is the command-line front end.

pub mod cmd;
pub mod exit;
pub mod extract;
pub mod logging;
pub mod output;
