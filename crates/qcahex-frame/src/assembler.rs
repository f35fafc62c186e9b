use bytes::BytesMut;
use tracing::trace;

use crate::header::{HeaderVariant, HtcHeader};

/// Transfer direction of the analyzed dump.
///
/// Governs the data/trailer split: only target→host frames carry a trailer.
/// The data-path (HTT) id space is also selected by direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    HostToTarget,
    TargetToHost,
}

/// Per-frame accumulation state machine.
///
/// One `Assembler` lives for exactly one frame: it is created when an
/// offset-0 row carries a decodable HTC header and dropped (replaced) when
/// the next frame starts. Chunks are pushed in arrival order; the assembler
/// slices each chunk against the remaining byte budget so that
/// `data.len() + trailer.len() == header.length` once complete, no matter
/// how much bus padding trails the frame in the dump.
#[derive(Debug)]
pub struct Assembler {
    data_budget: usize,
    trailer_budget: usize,
    data: BytesMut,
    trailer: BytesMut,
    data_done: bool,
    complete: bool,
}

impl Assembler {
    /// Set up accumulation for one frame.
    ///
    /// In target→host direction the trailer budget comes from the header's
    /// `ctrl0` byte (clamped to the declared length); the data budget is the
    /// remainder. Host→target frames have no trailer phase.
    pub fn new(header: &HtcHeader, variant: HeaderVariant, direction: Direction) -> Self {
        let total = header.length as usize;
        let trailer_budget = header.trailer_len(variant, direction).min(total);
        Self {
            data_budget: total - trailer_budget,
            trailer_budget,
            data: BytesMut::with_capacity(total - trailer_budget),
            trailer: BytesMut::with_capacity(trailer_budget),
            data_done: false,
            complete: false,
        }
    }

    /// Feed the payload bytes of one dump row (or the tail of the offset-0
    /// row after the HTC header). Returns true once the frame is complete.
    ///
    /// Bytes beyond the current phase's budget roll over into the trailer
    /// phase; bytes beyond the declared total length are padding and are
    /// dropped. The slicing is exact: dropping the wrong byte would corrupt
    /// the split between data and trailer.
    pub fn push(&mut self, chunk: &[u8]) -> bool {
        if self.complete {
            return true;
        }

        let mut rest = chunk;
        if !self.data_done {
            if self.data.len() + rest.len() >= self.data_budget {
                let take = self.data_budget - self.data.len();
                self.data.extend_from_slice(&rest[..take]);
                rest = &rest[take..];
                self.data_done = true;
            } else {
                self.data.extend_from_slice(rest);
                return false;
            }
        }

        if self.trailer.len() + rest.len() >= self.trailer_budget {
            let take = self.trailer_budget - self.trailer.len();
            self.trailer.extend_from_slice(&rest[..take]);
            if rest.len() > take {
                trace!(padding = rest.len() - take, "dropped frame padding");
            }
            self.complete = true;
            return true;
        }
        self.trailer.extend_from_slice(rest);
        false
    }

    /// True once every declared byte has been accumulated.
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Accumulated payload bytes (upper-protocol header included).
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Accumulated trailer bytes (empty outside target→host direction).
    pub fn trailer(&self) -> &[u8] {
        &self.trailer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(length: u16, ctrl0: u8) -> HtcHeader {
        HtcHeader {
            eid: 1,
            flags: 0,
            length,
            ctrl0,
            ctrl1: 0,
        }
    }

    #[test]
    fn host_to_target_single_chunk() {
        let hdr = header(4, 0);
        let mut asm = Assembler::new(&hdr, HeaderVariant::Full, Direction::HostToTarget);
        assert!(asm.push(&[0xaa, 0xbb, 0xcc, 0xdd]));
        assert_eq!(asm.data(), &[0xaa, 0xbb, 0xcc, 0xdd]);
        assert!(asm.trailer().is_empty());
    }

    #[test]
    fn host_to_target_across_chunks() {
        let hdr = header(4, 0);
        let mut asm = Assembler::new(&hdr, HeaderVariant::Full, Direction::HostToTarget);
        assert!(!asm.push(&[0xaa, 0xbb]));
        assert!(asm.push(&[0xcc, 0xdd]));
        assert!(asm.is_complete());
        assert_eq!(asm.data(), &[0xaa, 0xbb, 0xcc, 0xdd]);
    }

    #[test]
    fn padding_truncated_to_the_byte() {
        // Declared length 5, final chunk padded out to the bus width.
        let hdr = header(5, 0);
        let mut asm = Assembler::new(&hdr, HeaderVariant::Full, Direction::HostToTarget);
        assert!(!asm.push(&[0x01, 0x02]));
        assert!(asm.push(&[0x03, 0x04, 0x05, 0x00, 0x00, 0x00]));
        assert_eq!(asm.data(), &[0x01, 0x02, 0x03, 0x04, 0x05]);
        assert_eq!(asm.data().len() + asm.trailer().len(), 5);
    }

    #[test]
    fn target_to_host_splits_data_and_trailer_in_one_step() {
        // Total 10 with 4 trailer bytes, everything in one row.
        let hdr = header(10, 4);
        let mut asm = Assembler::new(&hdr, HeaderVariant::Full, Direction::TargetToHost);
        let payload = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
        assert!(asm.push(&payload));
        assert_eq!(asm.data(), &[1, 2, 3, 4, 5, 6]);
        assert_eq!(asm.trailer(), &[7, 8, 9, 10]);
    }

    #[test]
    fn target_to_host_trailer_across_chunks() {
        let hdr = header(10, 4);
        let mut asm = Assembler::new(&hdr, HeaderVariant::Full, Direction::TargetToHost);
        assert!(!asm.push(&[1, 2, 3, 4]));
        // Crosses the data/trailer boundary mid-chunk; no byte is dropped.
        assert!(!asm.push(&[5, 6, 7]));
        assert_eq!(asm.data(), &[1, 2, 3, 4, 5, 6]);
        assert_eq!(asm.trailer(), &[7]);
        assert!(asm.push(&[8, 9, 10, 0, 0]));
        assert_eq!(asm.trailer(), &[7, 8, 9, 10]);
        assert_eq!(asm.data().len() + asm.trailer().len(), 10);
    }

    #[test]
    fn zero_trailer_completes_at_end_of_data_phase() {
        let hdr = header(6, 0);
        let mut asm = Assembler::new(&hdr, HeaderVariant::Full, Direction::TargetToHost);
        assert!(asm.push(&[1, 2, 3, 4, 5, 6]));
        assert!(asm.is_complete());
        assert!(asm.trailer().is_empty());
    }

    #[test]
    fn exact_data_fill_waits_for_trailer() {
        let hdr = header(8, 2);
        let mut asm = Assembler::new(&hdr, HeaderVariant::Full, Direction::TargetToHost);
        assert!(!asm.push(&[1, 2, 3, 4, 5, 6]));
        assert!(!asm.is_complete());
        assert!(asm.push(&[7, 8]));
        assert_eq!(asm.trailer(), &[7, 8]);
    }

    #[test]
    fn trailer_only_frame() {
        // Declared length equals the trailer length: no data phase at all.
        let hdr = header(4, 4);
        let mut asm = Assembler::new(&hdr, HeaderVariant::Full, Direction::TargetToHost);
        assert!(asm.push(&[9, 8, 7, 6, 0, 0]));
        assert!(asm.data().is_empty());
        assert_eq!(asm.trailer(), &[9, 8, 7, 6]);
    }

    #[test]
    fn trailer_len_clamped_to_total() {
        let hdr = header(2, 8);
        let mut asm = Assembler::new(&hdr, HeaderVariant::Full, Direction::TargetToHost);
        assert!(asm.push(&[1, 2, 3]));
        assert!(asm.data().is_empty());
        assert_eq!(asm.trailer(), &[1, 2]);
    }

    #[test]
    fn short_header_never_has_a_trailer() {
        let hdr = header(4, 4);
        let mut asm = Assembler::new(&hdr, HeaderVariant::Short, Direction::TargetToHost);
        assert!(asm.push(&[1, 2, 3, 4]));
        assert_eq!(asm.data(), &[1, 2, 3, 4]);
        assert!(asm.trailer().is_empty());
    }

    #[test]
    fn push_after_complete_is_inert() {
        let hdr = header(2, 0);
        let mut asm = Assembler::new(&hdr, HeaderVariant::Full, Direction::HostToTarget);
        assert!(asm.push(&[1, 2]));
        assert!(asm.push(&[3, 4]));
        assert_eq!(asm.data(), &[1, 2]);
    }

    #[test]
    fn zero_length_frame_completes_immediately() {
        let hdr = header(0, 0);
        let mut asm = Assembler::new(&hdr, HeaderVariant::Full, Direction::HostToTarget);
        assert!(asm.push(&[]));
        assert!(asm.data().is_empty());
    }
}
