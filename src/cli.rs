use crate::config::load_config;
use crate::graph::GraphDescription;
use crate::layout::compute_layout;
use crate::layout_dump::LayoutDump;
use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(
    name = "archgraph",
    version,
    about = "Layout engine for detected architecture-diagram graphs"
)]
pub struct Args {
    /// Input graph JSON (detection service output) or '-' for stdin
    #[arg(short = 'i', long = "input")]
    pub input: Option<PathBuf>,

    /// Output file. Defaults to stdout.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Config JSON/JSON5 file
    #[arg(short = 'c', long = "configFile")]
    pub config: Option<PathBuf>,

    /// Pretty-print the layout JSON
    #[arg(long = "pretty")]
    pub pretty: bool,
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    let config = load_config(args.config.as_deref())?;

    let input = read_input(args.input.as_deref())?;
    let graph =
        GraphDescription::from_json(&input).context("invalid graph description document")?;
    let layout = compute_layout(&graph, &config.theme, &config.layout)?;
    let dump = LayoutDump::from_layout(&layout);

    match args.output.as_deref() {
        Some(path) => dump.write_json(path, args.pretty)?,
        None => {
            let json = dump.to_json_string(args.pretty)?;
            let mut stdout = io::stdout().lock();
            stdout.write_all(json.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }

    Ok(())
}

fn read_input(path: Option<&Path>) -> Result<String> {
    if let Some(path) = path {
        if path == Path::new("-") {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            return Ok(buf);
        }
        return std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()));
    }

    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}
