use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::Parser;

use crate::targz::{DEFAULT_BUFFER, PipelineOptions};

#[derive(Parser, Debug)]
#[command(name = "targzsize")]
#[command(version)]
#[command(about = "Compute the total unpacked size of tar.gz archives", long_about = None)]
#[command(after_help = "Examples:\n  \
  targzsize backup.tar.gz                 print the unpacked size in bytes\n  \
  targzsize --human a.tar.gz b.tar.gz     print the combined size in human units\n  \
  targzsize --no-progress *.tar.gz        no status line while reading")]
pub struct Cli {
    /// tar.gz archives to measure, processed in order
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Don't output status messages to stderr
    #[arg(long = "no-progress")]
    pub silent: bool,

    /// Output human units instead of bytes
    #[arg(long)]
    pub human: bool,

    /// Print legal information and exit
    #[arg(long)]
    pub legal: bool,

    /// Capacity of the queues between pipeline stages
    #[arg(long, value_name = "N", default_value_t = DEFAULT_BUFFER, hide = true, value_parser = parse_buffer)]
    pub buffer: usize,
}

impl Cli {
    pub fn is_quiet(&self) -> bool {
        self.silent
    }

    /// Reject invocations that have nothing to measure.
    ///
    /// This is checked after `--legal` has had a chance to run, so it is not
    /// expressed as a clap requirement.
    pub fn validate(&self) -> Result<()> {
        if self.paths.is_empty() {
            bail!("Need at least one file");
        }
        Ok(())
    }

    pub fn options(&self) -> PipelineOptions {
        PipelineOptions {
            silent: self.silent,
            human: self.human,
            buffer: self.buffer,
        }
    }
}

fn parse_buffer(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(err) => Err(err.to_string()),
    }
}
