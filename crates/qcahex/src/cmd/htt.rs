use clap::Args;
use qcahex_proto::{AnalyzerConfig, HttDecoder};

use crate::cmd::{analyze, Analyzer, CommonArgs};
use crate::exit::CliResult;
use crate::output::OutputFormat;

#[derive(Args, Debug)]
pub struct HttArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// HTT data service endpoint ID. Must match the endpoint the target
    /// assigned to the HTT data service in the HTC service connect response.
    #[arg(short = 'e', long = "ep-id", value_name = "ID", default_value_t = 2)]
    pub ep_id: u8,
}

pub fn run(args: HttArgs, format: OutputFormat) -> CliResult<i32> {
    let mut config = AnalyzerConfig::new();
    config.header_variant = args.common.header_variant();
    config.direction = args.common.direction();
    config.htt_eid = args.ep_id;

    let opts = args.common.render_opts(false);
    analyze(
        Analyzer::Htt(HttDecoder::new(&config)),
        &args.common,
        opts,
        format,
    )
}
