use std::path::PathBuf;
use structopt::{clap, clap::arg_enum, StructOpt};

#[derive(Debug, StructOpt)]
#[structopt(name = "lexpr", about = "Parse logic expressions into their tree form")]
#[structopt(long_version(option_env!("LONG_VERSION").unwrap_or(env!("CARGO_PKG_VERSION"))))]
#[structopt(setting(clap::AppSettings::ColoredHelp))]
pub struct Opt {
    #[structopt(long = "log-level", possible_values(&LogLevel::variants()), case_insensitive = true)]
    pub log_level: Option<LogLevel>,
    /// Expression to parse, may be repeated
    #[structopt(long = "expr", short = "e", number_of_values = 1)]
    pub exprs: Vec<String>,
    /// One expression per line, `-` for stdin; `.gz` files are decompressed
    #[structopt(long = "input", short = "i")]
    pub input: Option<PathBuf>,
    #[structopt(long = "comment", default_value = "#")]
    pub comment: char,
    #[structopt(long = "out-format", possible_values(&OutputFormat::variants()), case_insensitive = true)]
    pub out_format: Option<OutputFormat>,
    #[structopt(long = "hc-prefix", default_value = "HC:")]
    pub hc_prefix: String,
    #[structopt(long = "rule-prefix", default_value = "Rule:")]
    pub rule_prefix: String,
    /// Log failing expressions and continue with the next one
    #[structopt(long = "keep-going")]
    pub keep_going: bool,
}

arg_enum! {
    #[derive(Debug)]
    pub enum LogLevel {
        DEBUG,
        INFO,
        WARN,
        ERROR,
    }
}

arg_enum! {
    #[derive(Debug, Clone, Copy)]
    pub enum OutputFormat {
        JSON,
        PRETTY,
        TSV,
        TEXT,
    }
}
