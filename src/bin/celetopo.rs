use std::io;
use std::process;

use clap::{App, Arg};

use celetopo::cmd::{self, Command};
use celetopo::setup::{self, LogConfig};
use celetopo::CmdError;

fn main() {
    let matches = App::new("celetopo")
        .version("0.1.0")
        .author("openacid")
        .about("convert CLUSTER SLOTS replies to and from yaml topologies")
        .arg(
            Arg::with_name("log-file")
                .long("log-file")
                .takes_value(true)
                .help("append log to this file instead of stderr"),
        )
        .arg(
            Arg::with_name("log-level")
                .long("log-level")
                .takes_value(true)
                .default_value("info")
                .help("one of trace, debug, info, warn, error, critical"),
        )
        .arg(
            Arg::with_name("command")
                .required(true)
                .possible_values(&Command::ALL)
                .help("decode: reply to yaml; encode: yaml to reply; normalize: reply to canonical reply"),
        )
        .arg(
            Arg::with_name("input")
                .required(true)
                .help("input file, or - for stdin"),
        )
        .get_matches();

    if let Err(e) = run(&matches) {
        eprintln!("celetopo: {}", e);
        process::exit(1);
    }
}

fn run(matches: &clap::ArgMatches) -> Result<(), CmdError> {
    let cfg = LogConfig {
        path: matches.value_of("log-file").map(Into::into),
        level: setup::parse_level(matches.value_of("log-level").unwrap_or("info"))?,
    };
    setup::init_logger(&cfg)?;

    // both are required by clap
    let command: Command = matches.value_of("command").unwrap_or_default().parse()?;
    let input = cmd::open_input(matches.value_of("input").unwrap_or("-"))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    cmd::run(command, input, &mut out)
}
