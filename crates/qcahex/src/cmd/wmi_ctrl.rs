use clap::Args;
use qcahex_proto::{AnalyzerConfig, WmiCtrlDecoder, WmiEncoding};

use crate::cmd::{analyze, Analyzer, CommonArgs};
use crate::exit::CliResult;
use crate::output::OutputFormat;

#[derive(Args, Debug)]
pub struct WmiCtrlArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// WMI control service endpoint ID. Must match the endpoint the target
    /// assigned to the control service (service id 0x100) in the HTC
    /// service connect response.
    #[arg(short = 'e', long = "ep-id", value_name = "ID", default_value_t = 1)]
    pub ep_id: u8,

    /// Interpret messages according to the WMI unified protocol. If not
    /// set, the "old" 16-bit header format is assumed.
    #[arg(short = 'u', long)]
    pub wmi_unified: bool,

    /// Decode the structured TLV view for supported commands, falling back
    /// to the raw payload when a structure does not decode.
    #[arg(long)]
    pub tlv: bool,
}

pub fn run(args: WmiCtrlArgs, format: OutputFormat) -> CliResult<i32> {
    let mut config = AnalyzerConfig::new();
    config.header_variant = args.common.header_variant();
    config.direction = args.common.direction();
    config.encoding = if args.wmi_unified {
        WmiEncoding::Unified
    } else {
        WmiEncoding::Legacy
    };
    config.wmi_eid = args.ep_id;

    let opts = args.common.render_opts(args.tlv);
    analyze(
        Analyzer::Wmi(WmiCtrlDecoder::new(&config)),
        &args.common,
        opts,
        format,
    )
}
