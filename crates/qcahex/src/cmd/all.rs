use clap::Args;
use qcahex_proto::{AnalyzerConfig, Dispatcher, WmiEncoding};

use crate::cmd::{analyze, Analyzer, CommonArgs};
use crate::exit::CliResult;
use crate::output::OutputFormat;

#[derive(Args, Debug)]
pub struct AllArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// WMI control service endpoint ID.
    #[arg(long = "wmi-ep-id", value_name = "ID", default_value_t = 1)]
    pub wmi_ep_id: u8,

    /// HTT data service endpoint ID.
    #[arg(long = "htt-ep-id", value_name = "ID", default_value_t = 2)]
    pub htt_ep_id: u8,

    /// Interpret WMI messages according to the WMI unified protocol.
    #[arg(short = 'u', long)]
    pub wmi_unified: bool,

    /// Decode the structured TLV view for supported WMI commands.
    #[arg(long)]
    pub tlv: bool,
}

pub fn run(args: AllArgs, format: OutputFormat) -> CliResult<i32> {
    let mut config = AnalyzerConfig::new();
    config.header_variant = args.common.header_variant();
    config.direction = args.common.direction();
    config.encoding = if args.wmi_unified {
        WmiEncoding::Unified
    } else {
        WmiEncoding::Legacy
    };
    config.wmi_eid = args.wmi_ep_id;
    config.htt_eid = args.htt_ep_id;

    let opts = args.common.render_opts(args.tlv);
    analyze(
        Analyzer::All(Dispatcher::new(&config)),
        &args.common,
        opts,
        format,
    )
}
