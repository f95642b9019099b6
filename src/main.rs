#[macro_use]
extern crate log;

use std::path::PathBuf;
use std::{env::set_var, error::Error, process};
use structopt::StructOpt;

mod opt;

use crate::opt::{LogLevel, Opt, OutputFormat};
use logic_expr::reader::{self, ExpressionLine, ExpressionReader};
use logic_expr::records::ExpressionRecord;
use logic_expr::Parser;

fn collect_lines(opt: &Opt) -> Result<Vec<ExpressionLine>, Box<dyn Error>> {
    let mut lines: Vec<ExpressionLine> = opt
        .exprs
        .iter()
        .enumerate()
        .map(|(i, expr)| ExpressionLine::new(i + 1, expr))
        .collect();

    let input = match (&opt.input, lines.is_empty()) {
        (Some(input), _) => Some(input.clone()),
        (None, true) => Some(PathBuf::from("-")),
        (None, false) => None,
    };

    if let Some(input) = input {
        let bufreader = reader::read_with_gz(&input)?;
        lines.extend(
            ExpressionReader::new(bufreader)
                .with_comment(opt.comment)
                .finish()?,
        );
    }

    Ok(lines)
}

fn main() -> Result<(), Box<dyn Error>> {
    let opt = Opt::from_args();

    match &opt.log_level {
        Some(log_level) => match log_level {
            LogLevel::DEBUG => set_var("RUST_LOG", "debug"),
            LogLevel::INFO => set_var("RUST_LOG", "info"),
            LogLevel::WARN => set_var("RUST_LOG", "warn"),
            LogLevel::ERROR => set_var("RUST_LOG", "error"),
        },
        None => set_var("RUST_LOG", "warn"),
    };

    pretty_env_logger::init_timed();
    debug!("{:?}", opt);

    let parser = Parser::new()
        .with_healthcheck_prefix(&opt.hc_prefix)
        .with_rule_prefix(&opt.rule_prefix);

    let lines = collect_lines(&opt)?;
    let outformat = opt.out_format.unwrap_or(OutputFormat::JSON);

    let mut failed = 0;
    for line in lines {
        let node = match parser.parse(&line.text) {
            Ok(node) => node,
            Err(e) if opt.keep_going => {
                warn!("line {}: {}", line.line, e);
                failed += 1;
                continue;
            }
            Err(e) => return Err(format!("line {}: {}", line.line, e).into()),
        };

        let record = ExpressionRecord::new(line.line, line.text, node);
        match outformat {
            OutputFormat::JSON => println!("{}", record.to_json()?),
            OutputFormat::PRETTY => println!("{}", record.to_pretty_json()?),
            OutputFormat::TSV => println!("{}", record.to_tsv_line()?),
            OutputFormat::TEXT => println!("{}", record),
        }
    }

    if failed > 0 {
        error!("{} expression(s) failed to parse", failed);
        process::exit(1);
    }

    Ok(())
}
