//! Commands of the `celetopo` tool.
//!
//! - `decode`: read a raw `CLUSTER SLOTS` reply and print the topology as yaml.
//! - `encode`: read a topology in yaml and write it as a `CLUSTER SLOTS` reply.
//! - `normalize`: decode a reply and encode it again in canonical order.

use std::fs::File;
use std::io::{self, BufReader, Read, Write};
use std::str::FromStr;

use topo::Topology;

use crate::CmdError;

#[cfg(test)]
#[path = "./tests/cmd_tests.rs"]
mod tests;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Decode,
    Encode,
    Normalize,
}

impl Command {
    pub const ALL: [&'static str; 3] = ["decode", "encode", "normalize"];
}

impl FromStr for Command {
    type Err = CmdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "decode" => Ok(Command::Decode),
            "encode" => Ok(Command::Encode),
            "normalize" => Ok(Command::Normalize),
            _ => Err(CmdError::UnknownCommand(s.into())),
        }
    }
}

/// open_input opens a file for reading, or stdin if `path` is `-`.
pub fn open_input(path: &str) -> Result<Box<dyn Read>, CmdError> {
    if path == "-" {
        return Ok(Box::new(io::stdin()));
    }
    let f = File::open(path)?;
    Ok(Box::new(BufReader::new(f)))
}

/// run executes `cmd` with `input`, writing the result to `out`.
pub fn run<R: Read, W: Write + ?Sized>(cmd: Command, input: R, out: &mut W) -> Result<(), CmdError> {
    debug!("run command"; "cmd" => ?cmd);

    match cmd {
        Command::Decode => {
            let t = Topology::decode(input)?;
            out.write_all(serde_yaml::to_string(&t)?.as_bytes())?;
        }
        Command::Encode => {
            let t = read_yaml(input)?;
            t.encode(out)?;
        }
        Command::Normalize => {
            let t = Topology::decode(input)?;
            t.encode(out)?;
        }
    }

    out.flush()?;
    Ok(())
}

fn read_yaml<R: Read>(mut input: R) -> Result<Topology, CmdError> {
    let mut content = String::new();
    input.read_to_string(&mut content)?;
    Ok(Topology::from_yaml(&content)?)
}
