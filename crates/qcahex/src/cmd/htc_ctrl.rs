use clap::Args;
use qcahex_proto::{AnalyzerConfig, HtcCtrlDecoder};

use crate::cmd::{analyze, Analyzer, CommonArgs};
use crate::exit::CliResult;
use crate::output::OutputFormat;

#[derive(Args, Debug)]
pub struct HtcCtrlArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

pub fn run(args: HtcCtrlArgs, format: OutputFormat) -> CliResult<i32> {
    let mut config = AnalyzerConfig::new();
    config.header_variant = args.common.header_variant();
    config.direction = args.common.direction();

    let opts = args.common.render_opts(false);
    analyze(
        Analyzer::HtcCtrl(HtcCtrlDecoder::new(&config)),
        &args.common,
        opts,
        format,
    )
}
