use std::io::{self, Write};

use clap::ValueEnum;
use qcahex_proto::wmi_tlv::{TlvHeader, TlvMsg, WmiChannel};
use qcahex_proto::{MessageKind, MessageView, WmiCmdGroup};
use serde::Serialize;

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    /// Original analyzer text layout.
    Text,
    /// One JSON object per message.
    Json,
}

/// What to render per message, beyond the id line.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOpts {
    /// Dump the message payload as 16-byte hex rows.
    pub print_data: bool,
    /// Dump the trailer bytes (target→host frames).
    pub print_trailer: bool,
    /// Decode the structured TLV view for supported WMI commands, falling
    /// back to the raw payload when the structure does not decode.
    pub tlv: bool,
}

#[derive(Serialize)]
struct MessageOutput<'a> {
    protocol: &'static str,
    id: u32,
    name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    if_idx: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    group: Option<&'a str>,
    data_len: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<String>,
    trailer_len: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    trailer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    timestamp: Option<&'a str>,
}

/// Render one completed message to the output stream.
pub fn print_message(
    out: &mut dyn Write,
    msg: &MessageView<'_>,
    opts: &RenderOpts,
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => print_text(out, msg, opts),
        OutputFormat::Json => print_json(out, msg, opts),
    }
}

fn print_text(out: &mut dyn Write, msg: &MessageView<'_>, opts: &RenderOpts) -> io::Result<()> {
    writeln!(out, "{}", id_line(msg))?;

    if opts.tlv {
        if let MessageKind::Wmi { cmd, .. } = msg.kind {
            match TlvMsg::decode(cmd, msg.data) {
                Some(tlv) => {
                    write!(out, "{}", tlv_dump(&tlv))?;
                    return trailer_dump(out, msg, opts);
                }
                // Structured decode failed or is not defined for this
                // command: fall back to the raw payload.
                None => {
                    writeln!(out, "{} msg data: {}", proto_label(msg), hex_rows(msg.data))?;
                    return trailer_dump(out, msg, opts);
                }
            }
        }
    }

    if opts.print_data {
        writeln!(out, "{} msg data: {}", proto_label(msg), hex_rows(msg.data))?;
    }
    trailer_dump(out, msg, opts)
}

fn trailer_dump(out: &mut dyn Write, msg: &MessageView<'_>, opts: &RenderOpts) -> io::Result<()> {
    if opts.print_trailer && !msg.trailer.is_empty() {
        writeln!(out, "HTC trailer: {}", hex_rows(msg.trailer))?;
    }
    Ok(())
}

fn print_json(out: &mut dyn Write, msg: &MessageView<'_>, opts: &RenderOpts) -> io::Result<()> {
    let (if_idx, group) = match msg.kind {
        MessageKind::Wmi { id, if_idx, .. } => (Some(if_idx), unknown_cmd_group(msg, id)),
        _ => (None, None),
    };
    let output = MessageOutput {
        protocol: proto_name(msg),
        id: msg.kind.id(),
        name: msg.kind.name(),
        if_idx,
        group,
        data_len: msg.data.len(),
        data: opts.print_data.then(|| hex_string(msg.data)),
        trailer_len: msg.trailer.len(),
        trailer: (opts.print_trailer && !msg.trailer.is_empty())
            .then(|| hex_string(msg.trailer)),
        timestamp: msg.timestamp,
    };
    let json = serde_json::to_string(&output).unwrap_or_else(|_| "{}".to_string());
    writeln!(out, "{json}")
}

fn proto_name(msg: &MessageView<'_>) -> &'static str {
    match msg.kind {
        MessageKind::Wmi { .. } => "wmi",
        MessageKind::Htt { .. } => "htt",
        MessageKind::HtcCtrl { .. } => "htc-ctrl",
    }
}

fn proto_label(msg: &MessageView<'_>) -> &'static str {
    match msg.kind {
        MessageKind::Wmi { .. } => "WMI",
        MessageKind::Htt { .. } => "HTT",
        MessageKind::HtcCtrl { .. } => "HTC ctrl",
    }
}

/// Command group, derived for unified command ids that resolve to no known
/// command or event name.
fn unknown_cmd_group(msg: &MessageView<'_>, id: u32) -> Option<&'static str> {
    match msg.kind {
        MessageKind::Wmi { cmd, evt, .. } if cmd.name().is_none() && evt.name().is_none() => {
            WmiCmdGroup::of(id).name()
        }
        _ => None,
    }
}

fn id_line(msg: &MessageView<'_>) -> String {
    let mut line = String::new();
    if let Some(ts) = msg.timestamp {
        line = format!("{:<16}", format!("[{ts}]"));
    }
    match msg.kind {
        MessageKind::Wmi { id, cmd, evt, .. } => {
            line.push_str(&format!("WMI msg id: {id:6x}"));
            if let Some(name) = cmd.name() {
                line.push_str(&format!("  cmd: {name}"));
                line = format!("{line:<70}");
            }
            if let Some(name) = evt.name() {
                line.push_str(&format!("  evt: {name}"));
            }
            if let Some(group) = unknown_cmd_group(msg, id) {
                line.push_str(&format!("  grp: {group}"));
            }
        }
        MessageKind::Htt { id, msg } => {
            line.push_str(&format!("HTT msg id: {id:6x}"));
            if let Some(name) = msg.name() {
                line.push_str(&format!("  type: {name}"));
            }
        }
        MessageKind::HtcCtrl { id, msg } => {
            line.push_str(&format!("HTC ctrl msg id: {id:6x}"));
            if let Some(name) = msg.name() {
                line.push_str(&format!("  string: {name}"));
            }
        }
    }
    line
}

/// 16-byte dump rows, each prefixed with a running byte offset. Starts with
/// a newline so it appends cleanly after a `label:` prefix.
fn hex_rows(data: &[u8]) -> String {
    let mut s = String::from("\n");
    for (i, chunk) in data.chunks(16).enumerate() {
        s.push_str(&format!("{:08x}:  ", i * 16));
        for byte in chunk {
            s.push_str(&format!("{byte:02x} "));
        }
        s.push('\n');
    }
    s
}

fn hex_string(data: &[u8]) -> String {
    data.iter()
        .map(|b| format!("{b:02x}"))
        .collect::<Vec<_>>()
        .join(" ")
}

fn tlv_hdr_lines(out: &mut String, hdr: &TlvHeader, indent: &str) {
    out.push_str(&format!("{indent}tlv_hdr:\n"));
    out.push_str(&format!("{indent}  length: 0x{:x}\n", hdr.length));
    match hdr.tag.name() {
        Some(name) => out.push_str(&format!("{indent}  tag: 0x{:x} ({name})\n", hdr.tag.id())),
        None => out.push_str(&format!("{indent}  tag: 0x{:x}\n", hdr.tag.id())),
    }
}

fn named_field(out: &mut String, name: &str, value: u32, symbol: Option<&str>) {
    match symbol {
        Some(symbol) => out.push_str(&format!("  {name}: 0x{value:x} ({symbol})\n")),
        None => out.push_str(&format!("  {name}: 0x{value:x}\n")),
    }
}

fn bytes_field(out: &mut String, name: &str, bytes: &[u8]) {
    out.push_str(&format!("  {name}: {}\n", hex_string(bytes)));
}

fn channel_lines(out: &mut String, chan: &WmiChannel) {
    out.push_str("  wmi_chan:\n");
    tlv_hdr_lines(out, &chan.tlv_hdr, "    ");
    for (name, value) in [
        ("mhz", chan.mhz),
        ("band_center_freq1", chan.band_center_freq1),
        ("band_center_freq2", chan.band_center_freq2),
        ("mode", u32::from(chan.mode)),
        ("min_power", u32::from(chan.min_power)),
        ("max_power", u32::from(chan.max_power)),
        ("reg_power", u32::from(chan.reg_power)),
        ("reg_classid", u32::from(chan.reg_classid)),
        ("antenna_max", u32::from(chan.antenna_max)),
        ("max_tx_power", u32::from(chan.max_tx_power)),
    ] {
        out.push_str(&format!("    {name}: 0x{value:x}\n"));
    }
}

/// Structured field dump for a decoded TLV payload, one indented field per
/// line with registry-resolved names in parentheses.
fn tlv_dump(tlv: &TlvMsg) -> String {
    let mut s = String::new();
    match tlv {
        TlvMsg::PdevSetParam(msg) => {
            s.push_str("PdevSetParamMsg:\n");
            tlv_hdr_lines(&mut s, &msg.tlv_hdr, "  ");
            named_field(&mut s, "param", msg.param.id(), msg.param.name());
            named_field(&mut s, "value", msg.value, None);
        }
        TlvMsg::PdevSetRegdomain(msg) => {
            s.push_str("PdevSetRegdomainMsg:\n");
            tlv_hdr_lines(&mut s, &msg.tlv_hdr, "  ");
            named_field(&mut s, "pdev_id", msg.pdev_id, None);
            named_field(&mut s, "regd", msg.regd, None);
            named_field(&mut s, "regd_2ghz", msg.regd_2ghz, None);
            named_field(&mut s, "regd_5ghz", msg.regd_5ghz, None);
            named_field(&mut s, "conform_limit_2ghz", msg.conform_limit_2ghz, None);
            named_field(&mut s, "conform_limit_5ghz", msg.conform_limit_5ghz, None);
        }
        TlvMsg::VdevCreate(msg) => {
            s.push_str("VdevCreateMsg:\n");
            tlv_hdr_lines(&mut s, &msg.tlv_hdr, "  ");
            named_field(&mut s, "vdev_id", msg.vdev_id, None);
            named_field(&mut s, "vdev_type", msg.vdev_type, None);
            named_field(&mut s, "vdev_subtype", msg.vdev_subtype, None);
            bytes_field(&mut s, "mac_addr", &msg.mac_addr);
        }
        TlvMsg::VdevStartReq(msg) => {
            s.push_str("VdevStartReqMsg:\n");
            tlv_hdr_lines(&mut s, &msg.tlv_hdr, "  ");
            named_field(&mut s, "vdev_id", msg.vdev_id, None);
            named_field(&mut s, "requestor_id", msg.requestor_id, None);
            named_field(&mut s, "bcn_intval", msg.bcn_intval, None);
            named_field(&mut s, "dtim_period", msg.dtim_period, None);
            named_field(&mut s, "flags", msg.flags, None);
            named_field(&mut s, "ssid_len", msg.ssid_len, None);
            bytes_field(&mut s, "ssid", &msg.ssid);
            named_field(&mut s, "bcn_tx_rate", msg.bcn_tx_rate, None);
            named_field(&mut s, "bcn_tx_power", msg.bcn_tx_power, None);
            named_field(&mut s, "num_noa_descr", msg.num_noa_descr, None);
            named_field(&mut s, "disable_hw_ack", msg.disable_hw_ack, None);
            match &msg.chan {
                Some(chan) => channel_lines(&mut s, chan),
                None => s.push_str("  wmi_chan: None\n"),
            }
        }
        TlvMsg::VdevSetParam(msg) => {
            s.push_str("VdevSetParamMsg:\n");
            tlv_hdr_lines(&mut s, &msg.tlv_hdr, "  ");
            named_field(&mut s, "vdev_id", msg.vdev_id, None);
            named_field(&mut s, "param_id", msg.param.id(), msg.param.name());
            named_field(&mut s, "param_value", msg.value, None);
        }
        TlvMsg::PeerCreate(msg) => {
            s.push_str("PeerCreateMsg:\n");
            tlv_hdr_lines(&mut s, &msg.tlv_hdr, "  ");
            named_field(&mut s, "vdev_id", msg.vdev_id, None);
            bytes_field(&mut s, "peer_addr", &msg.peer_addr);
            named_field(&mut s, "peer_type", msg.peer_type.id(), msg.peer_type.name());
        }
        TlvMsg::PeerSetParam(msg) => {
            s.push_str("PeerSetParamMsg:\n");
            tlv_hdr_lines(&mut s, &msg.tlv_hdr, "  ");
            named_field(&mut s, "vdev_id", msg.vdev_id, None);
            bytes_field(&mut s, "peer_macaddr", &msg.peer_addr);
            named_field(&mut s, "param_id", msg.param.id(), msg.param.name());
            named_field(&mut s, "param_value", msg.value, None);
        }
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use qcahex_proto::{HtcCtrlMsg, HttH2tMsg, HttMsg, WmiCmd, WmiEvt};

    fn wmi_view<'a>(id: u32, data: &'a [u8], timestamp: Option<&'a str>) -> MessageView<'a> {
        MessageView {
            kind: MessageKind::Wmi {
                id,
                if_idx: 0,
                cmd: WmiCmd::from_id(id),
                evt: WmiEvt::from_id(id),
            },
            data,
            trailer: &[],
            timestamp,
        }
    }

    fn render(msg: &MessageView<'_>, opts: &RenderOpts, format: OutputFormat) -> String {
        let mut buf = Vec::new();
        print_message(&mut buf, msg, opts, format).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn wmi_id_line_has_cmd_and_padding() {
        let msg = wmi_view(0x3001, &[], None);
        let text = render(&msg, &RenderOpts::default(), OutputFormat::Text);
        assert!(text.starts_with("WMI msg id:   3001  cmd: WMI_UNIFIED_START_SCAN_CMDID"));
    }

    #[test]
    fn wmi_id_line_shows_both_interpretations() {
        // 0x4001 is both a command (pdev set regdomain) and an event (tpc config).
        let msg = wmi_view(0x4001, &[], None);
        let text = render(&msg, &RenderOpts::default(), OutputFormat::Text);
        assert!(text.contains("cmd: WMI_UNIFIED_PDEV_SET_REGDOMAIN_CMDID"));
        assert!(text.contains("evt: WMI_PDEV_TPC_CONFIG_EVENTID"));
    }

    #[test]
    fn unknown_wmi_id_falls_back_to_group() {
        let msg = wmi_view(0x4fff, &[], None);
        let text = render(&msg, &RenderOpts::default(), OutputFormat::Text);
        assert!(text.contains("WMI msg id:   4fff"));
        assert!(!text.contains("cmd:"));
        assert!(text.contains("grp: WMI_UNIFIED_GRP_PDEV"));
    }

    #[test]
    fn timestamp_column_is_left_justified() {
        let msg = wmi_view(0x3001, &[], Some("123.456"));
        let text = render(&msg, &RenderOpts::default(), OutputFormat::Text);
        assert!(text.starts_with("[123.456]       WMI msg id:"));
    }

    #[test]
    fn data_rows_use_sixteen_byte_layout() {
        let data: Vec<u8> = (0..18).collect();
        let msg = wmi_view(0x3001, &data, None);
        let opts = RenderOpts {
            print_data: true,
            ..RenderOpts::default()
        };
        let text = render(&msg, &opts, OutputFormat::Text);
        assert!(text.contains("WMI msg data: \n00000000:  00 01 02 03 04 05 06 07 08 09 0a 0b 0c 0d 0e 0f \n00000010:  10 11 \n"));
    }

    #[test]
    fn htt_and_htc_id_lines() {
        let htt = MessageView {
            kind: MessageKind::Htt {
                id: 1,
                msg: HttMsg::HostToTarget(HttH2tMsg::from_id(1)),
            },
            data: &[1],
            trailer: &[],
            timestamp: None,
        };
        let text = render(&htt, &RenderOpts::default(), OutputFormat::Text);
        assert!(text.starts_with("HTT msg id:      1  type: HTT_H2T_MSG_TYPE_TX_FRM"));

        let htc = MessageView {
            kind: MessageKind::HtcCtrl {
                id: 2,
                msg: HtcCtrlMsg::from_id(2),
            },
            data: &[2, 0],
            trailer: &[],
            timestamp: None,
        };
        let text = render(&htc, &RenderOpts::default(), OutputFormat::Text);
        assert!(text.starts_with("HTC ctrl msg id:      2  string: HTC_MSG_CONNECT_SERVICE_ID"));
    }

    #[test]
    fn trailer_rows_rendered_on_request() {
        let msg = MessageView {
            kind: MessageKind::HtcCtrl {
                id: 0xffff,
                msg: HtcCtrlMsg::from_id(0xffff),
            },
            data: &[],
            trailer: &[0xde, 0xad],
            timestamp: None,
        };
        let opts = RenderOpts {
            print_trailer: true,
            ..RenderOpts::default()
        };
        let text = render(&msg, &opts, OutputFormat::Text);
        assert!(text.contains("HTC trailer: \n00000000:  de ad \n"));
    }

    #[test]
    fn tlv_view_renders_structured_fields() {
        // pdev-set-param payload: len 12, tag 82, reserved, param 1, value 3.
        let mut data = Vec::new();
        data.extend_from_slice(&12u16.to_le_bytes());
        data.extend_from_slice(&82u16.to_le_bytes());
        data.extend_from_slice(&0u32.to_le_bytes());
        data.extend_from_slice(&1u32.to_le_bytes());
        data.extend_from_slice(&3u32.to_le_bytes());
        let msg = wmi_view(0x4003, &data, None);
        let opts = RenderOpts {
            tlv: true,
            ..RenderOpts::default()
        };
        let text = render(&msg, &opts, OutputFormat::Text);
        assert!(text.contains("PdevSetParamMsg:"));
        assert!(text.contains("tag: 0x52 (WMI_TLV_TAG_STRUCT_PDEV_SET_PARAM_CMD)"));
        assert!(text.contains("param: 0x1 (WMI_TLV_PDEV_PARAM_TX_CHAIN_MASK)"));
        assert!(text.contains("value: 0x3"));
    }

    #[test]
    fn tlv_underflow_falls_back_to_raw_dump() {
        // Declared TLV length 8 is below the 12-byte structure minimum.
        let mut data = Vec::new();
        data.extend_from_slice(&8u16.to_le_bytes());
        data.extend_from_slice(&82u16.to_le_bytes());
        data.extend_from_slice(&[0u8; 12]);
        let msg = wmi_view(0x4003, &data, None);
        let opts = RenderOpts {
            tlv: true,
            ..RenderOpts::default()
        };
        let text = render(&msg, &opts, OutputFormat::Text);
        assert!(!text.contains("PdevSetParamMsg:"));
        assert!(text.contains("WMI msg data: \n00000000:  08 00 52 00"));
    }

    #[test]
    fn json_output_carries_identification() {
        let msg = wmi_view(0x3001, &[0xaa, 0xbb], Some("9.5"));
        let opts = RenderOpts {
            print_data: true,
            ..RenderOpts::default()
        };
        let text = render(&msg, &opts, OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(text.trim()).unwrap();
        assert_eq!(value["protocol"], "wmi");
        assert_eq!(value["id"], 0x3001);
        assert_eq!(value["name"], "WMI_UNIFIED_START_SCAN_CMDID");
        assert_eq!(value["data_len"], 2);
        assert_eq!(value["data"], "aa bb");
        assert_eq!(value["timestamp"], "9.5");
    }
}
