use std::collections::BTreeSet;

use qcahex_frame::{Direction, HeaderVariant};

/// Which WMI control header encoding the analyzed driver speaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WmiEncoding {
    /// WMI unified: 24-bit LE message id + interface index, 4 bytes total.
    #[default]
    Unified,
    /// "Old" WMI: 16-bit LE message id, interface index at byte 3, 6 bytes
    /// total. The id field and the interface index are not contiguous on the
    /// wire; the gap byte is reserved.
    Legacy,
}

impl WmiEncoding {
    /// Bytes the WMI header occupies at the start of the frame payload.
    pub fn header_len(self) -> usize {
        match self {
            WmiEncoding::Unified => 4,
            WmiEncoding::Legacy => 6,
        }
    }
}

/// Analyzer configuration, constructed once from the command line and passed
/// to every decoder that needs it.
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// HTC header length variant.
    pub header_variant: HeaderVariant,
    /// Transfer direction of the analyzed dump.
    pub direction: Direction,
    /// WMI control header encoding.
    pub encoding: WmiEncoding,
    /// Endpoint carrying WMI control traffic (HTC control service).
    pub wmi_eid: u8,
    /// Endpoint carrying HTT data-path traffic.
    pub htt_eid: u8,
}

impl AnalyzerConfig {
    pub fn new() -> Self {
        Self {
            header_variant: HeaderVariant::default(),
            direction: Direction::default(),
            encoding: WmiEncoding::default(),
            wmi_eid: 1,
            htt_eid: 2,
        }
    }
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Message-id retention filter.
///
/// A message is retained only if it is absent from the exclude set and, when
/// an include set is configured, present in it. The include set is consulted
/// first.
#[derive(Debug, Clone, Default)]
pub struct MsgFilter {
    include: Option<BTreeSet<u32>>,
    exclude: BTreeSet<u32>,
}

impl MsgFilter {
    pub fn new(include: Option<Vec<u32>>, exclude: Vec<u32>) -> Self {
        Self {
            include: include.map(|ids| ids.into_iter().collect()),
            exclude: exclude.into_iter().collect(),
        }
    }

    /// True when a message with this id should be kept.
    pub fn retains(&self, id: u32) -> bool {
        if let Some(include) = &self.include {
            if !include.contains(&id) {
                return false;
            }
        }
        !self.exclude.contains(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_retains_everything() {
        let filter = MsgFilter::default();
        assert!(filter.retains(0));
        assert!(filter.retains(0x9002));
    }

    #[test]
    fn include_filter_drops_outsiders() {
        let filter = MsgFilter::new(Some(vec![0xa, 0xb]), Vec::new());
        assert!(filter.retains(0xa));
        assert!(filter.retains(0xb));
        assert!(!filter.retains(0xc));
    }

    #[test]
    fn exclude_filter_drops_members() {
        let filter = MsgFilter::new(None, vec![0xa]);
        assert!(!filter.retains(0xa));
        assert!(filter.retains(0xb));
    }

    #[test]
    fn include_applies_before_exclude() {
        let filter = MsgFilter::new(Some(vec![0xa, 0xb]), vec![0xa]);
        assert!(!filter.retains(0xa));
        assert!(filter.retains(0xb));
        assert!(!filter.retains(0xc));
    }

    #[test]
    fn default_config_endpoints() {
        let config = AnalyzerConfig::new();
        assert_eq!(config.wmi_eid, 1);
        assert_eq!(config.htt_eid, 2);
        assert_eq!(config.encoding.header_len(), 4);
        assert_eq!(WmiEncoding::Legacy.header_len(), 6);
    }
}
