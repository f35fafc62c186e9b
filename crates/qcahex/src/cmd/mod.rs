use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};
use qcahex_frame::{Direction, HeaderVariant, HexLine};
use qcahex_proto::{
    Dispatcher, FrameDecoder, HtcCtrlDecoder, HttDecoder, MessageView, MsgFilter, WmiCtrlDecoder,
};

use crate::exit::{io_error, CliResult, SUCCESS};
use crate::extract::Extractor;
use crate::output::{print_message, OutputFormat, RenderOpts};

pub mod all;
pub mod htc_ctrl;
pub mod htt;
pub mod wmi_ctrl;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Extract and decode WMI control messages.
    WmiCtrl(wmi_ctrl::WmiCtrlArgs),
    /// Extract and decode HTT data-path messages.
    Htt(htt::HttArgs),
    /// Extract and decode HTC control messages (endpoint 0).
    HtcCtrl(htc_ctrl::HtcCtrlArgs),
    /// Decode WMI, HTT and HTC control from one dump stream.
    All(all::AllArgs),
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::WmiCtrl(args) => wmi_ctrl::run(args, format),
        Command::Htt(args) => htt::run(args, format),
        Command::HtcCtrl(args) => htc_ctrl::run(args, format),
        Command::All(args) => all::run(args, format),
    }
}

/// Transfer direction of the dumped traffic.
#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum DirectionArg {
    /// Driver→firmware dumps (TX logs).
    HostToTarget,
    /// Firmware→driver dumps (RX logs); enables the HTC trailer split.
    TargetToHost,
}

/// Options shared by every subcommand.
#[derive(Args, Debug)]
pub struct CommonArgs {
    /// Input (log) file. If omitted, stdin is read.
    #[arg(short = 'i', long, value_name = "FILE")]
    pub input_file: Option<PathBuf>,

    /// Output file. If omitted, the output is written to stdout.
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output_file: Option<PathBuf>,

    /// The input log does not contain timestamps.
    #[arg(short = 'n', long)]
    pub no_timestamps: bool,

    /// Keep the timestamp of each dump in the output. Only has an effect
    /// when the log contains timestamps.
    #[arg(short = 't', long)]
    pub keep_timestamps: bool,

    /// Use the 6 byte HTC header ("old" format) instead of 8 bytes.
    #[arg(short = 's', long)]
    pub short_htc_header: bool,

    /// Analyze only dumps whose description matches one of these prefixes
    /// (normally used to select between RX and TX logs).
    #[arg(short = 'd', long = "desc-str", value_name = "STR")]
    pub desc_str: Vec<String>,

    /// Exclude dumps whose description matches one of these prefixes.
    #[arg(short = 'v', long = "desc-str-invert", value_name = "STR")]
    pub desc_str_invert: Vec<String>,

    /// Transfer direction of the dumped traffic.
    #[arg(long, value_enum, default_value = "host-to-target")]
    pub direction: DirectionArg,

    /// Print message payload in addition to message ids.
    #[arg(short = 'p', long)]
    pub print_data: bool,

    /// Print the HTC trailer of target-to-host frames.
    #[arg(long)]
    pub print_trailer: bool,

    /// Retain only messages with these ids (0x-prefixed hex or decimal).
    #[arg(long = "include-id", value_name = "ID", value_parser = parse_msg_id)]
    pub include_id: Vec<u32>,

    /// Drop messages with these ids.
    #[arg(long = "exclude-id", value_name = "ID", value_parser = parse_msg_id)]
    pub exclude_id: Vec<u32>,
}

impl CommonArgs {
    pub fn header_variant(&self) -> HeaderVariant {
        if self.short_htc_header {
            HeaderVariant::Short
        } else {
            HeaderVariant::Full
        }
    }

    pub fn direction(&self) -> Direction {
        match self.direction {
            DirectionArg::HostToTarget => Direction::HostToTarget,
            DirectionArg::TargetToHost => Direction::TargetToHost,
        }
    }

    pub fn filter(&self) -> MsgFilter {
        let include = if self.include_id.is_empty() {
            None
        } else {
            Some(self.include_id.clone())
        };
        MsgFilter::new(include, self.exclude_id.clone())
    }

    pub fn extractor(&self) -> Extractor {
        Extractor::new(
            !self.no_timestamps,
            self.keep_timestamps,
            self.desc_str.clone(),
            self.desc_str_invert.clone(),
        )
    }

    pub fn render_opts(&self, tlv: bool) -> RenderOpts {
        RenderOpts {
            print_data: self.print_data,
            print_trailer: self.print_trailer,
            tlv,
        }
    }
}

fn parse_msg_id(value: &str) -> Result<u32, String> {
    let parsed = match value.strip_prefix("0x").or_else(|| value.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => value.parse(),
    };
    parsed.map_err(|_| format!("invalid message id: {value}"))
}

/// One protocol decoder or the all-protocol dispatcher.
pub(crate) enum Analyzer {
    Wmi(WmiCtrlDecoder),
    Htt(HttDecoder),
    HtcCtrl(HtcCtrlDecoder),
    All(Dispatcher),
}

impl Analyzer {
    fn parse_line(&mut self, line: &HexLine) -> bool {
        match self {
            Analyzer::Wmi(decoder) => decoder.parse_line(line),
            Analyzer::Htt(decoder) => decoder.parse_line(line),
            Analyzer::HtcCtrl(decoder) => decoder.parse_line(line),
            Analyzer::All(dispatcher) => dispatcher.parse_line(line),
        }
    }

    fn message(&self) -> Option<MessageView<'_>> {
        match self {
            Analyzer::Wmi(decoder) => decoder.message(),
            Analyzer::Htt(decoder) => decoder.message(),
            Analyzer::HtcCtrl(decoder) => decoder.message(),
            Analyzer::All(dispatcher) => dispatcher.message(),
        }
    }
}

/// Pump the input through extraction, reassembly and rendering.
pub(crate) fn analyze(
    mut analyzer: Analyzer,
    common: &CommonArgs,
    opts: RenderOpts,
    format: OutputFormat,
) -> CliResult<i32> {
    let extractor = common.extractor();
    let filter = common.filter();
    let timestamps = extractor.emits_timestamps();

    let reader: Box<dyn BufRead> = match &common.input_file {
        Some(path) => {
            let file = File::open(path)
                .map_err(|err| io_error(&format!("failed opening {}", path.display()), err))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(BufReader::new(io::stdin())),
    };
    let mut writer: Box<dyn Write> = match &common.output_file {
        Some(path) => {
            let file = File::create(path)
                .map_err(|err| io_error(&format!("failed creating {}", path.display()), err))?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(io::stdout().lock()),
    };

    for line in reader.lines() {
        let line = line.map_err(|err| io_error("failed reading input", err))?;
        let Some(row) = extractor.extract(&line) else {
            continue;
        };
        let Ok(hex_line) = HexLine::parse(&row, timestamps) else {
            continue;
        };
        if !analyzer.parse_line(&hex_line) {
            continue;
        }
        let Some(msg) = analyzer.message() else {
            continue;
        };
        if !filter.retains(msg.kind.id()) {
            continue;
        }
        print_message(writer.as_mut(), &msg, &opts, format)
            .map_err(|err| io_error("failed writing output", err))?;
    }

    writer
        .flush()
        .map_err(|err| io_error("failed writing output", err))?;
    Ok(SUCCESS)
}
