mod render;

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use accesslog_toolchain_core::{AccessLogParser, format};
use accesslog_toolchain_field_tables::LogFormatPreset;

use crate::render::{Format, render_format_pretty, render_record_json, render_record_pretty};

// ── CLI definition ──────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(
    name = "accesslog",
    version,
    about = "accesslog toolchain — parse Apache access logs with configurable LogFormat specifications"
)]
struct Cli {
    /// Output mode: "pretty" for aligned terminal output, "json" for
    /// machine-readable output. Defaults to "pretty" when stdout is a TTY,
    /// "json" otherwise.
    #[arg(long, global = true, value_parser = ["pretty", "json"])]
    output: Option<String>,

    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Parse an access-log file line by line ("-" reads stdin).
    Parse {
        file: String,
        /// LogFormat specification string. Overrides --preset.
        #[arg(long)]
        format: Option<String>,
        /// Built-in format preset to parse with.
        #[arg(long, value_enum, default_value_t = Preset::Combined)]
        preset: Preset,
        /// Fail (exit 1) on the first line whose structure does not match
        /// the format, instead of extracting best-effort values.
        #[arg(long)]
        strict: bool,
    },

    /// Compile a LogFormat specification and print its field descriptors.
    CheckFormat {
        /// The LogFormat specification string (quote it in the shell).
        spec: String,
    },
}

/// Built-in LogFormat presets selectable from the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum Preset {
    /// NCSA combined (CLF + referer and user-agent headers).
    Combined,
    /// NCSA Common Log Format.
    Clf,
    /// CLF prefixed with the canonical server name.
    ClfVhost,
}

impl From<Preset> for LogFormatPreset {
    fn from(p: Preset) -> Self {
        match p {
            Preset::Combined => LogFormatPreset::Combined,
            Preset::Clf => LogFormatPreset::Clf,
            Preset::ClfVhost => LogFormatPreset::ClfVhost,
        }
    }
}

// ── Main ────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();
    let output = Format::resolve_or_detect(cli.output.as_deref());

    match cli.cmd {
        Cmd::Parse {
            file,
            format,
            preset,
            strict,
        } => cmd_parse(&file, format.as_deref(), preset, strict, output)?,
        Cmd::CheckFormat { spec } => cmd_check_format(&spec, output)?,
    }

    Ok(())
}

// ── Commands ────────────────────────────────────────────────────────────

fn cmd_parse(
    file: &str,
    spec: Option<&str>,
    preset: Preset,
    strict: bool,
    output: Format,
) -> Result<()> {
    let mut parser = match spec {
        Some(spec) => AccessLogParser::with_format(spec)
            .with_context(|| format!("invalid log format: {spec}"))?,
        None => AccessLogParser::from_preset(preset.into()),
    };
    parser.set_stop_on_error(strict);

    let reader = open_input(file)?;
    for (idx, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("failed to read {file}"))?;
        if line.is_empty() {
            continue;
        }
        match parser.parse_line(&line) {
            Ok(record) => match output {
                Format::Json => println!("{}", render_record_json(&record)?),
                Format::Pretty => print!("{}", render_record_pretty(&record)),
            },
            Err(e) => {
                eprintln!("{file}:{}: {e}", idx + 1);
                process::exit(1);
            }
        }
    }
    Ok(())
}

fn cmd_check_format(spec: &str, output: Format) -> Result<()> {
    let compiled = match format::compile(spec) {
        Ok(compiled) => compiled,
        Err(e) => {
            eprintln!("invalid log format: {e}");
            process::exit(1);
        }
    };

    match output {
        Format::Json => println!("{}", serde_json::to_string_pretty(&compiled)?),
        Format::Pretty => print!("{}", render_format_pretty(&compiled)),
    }
    Ok(())
}

// ── Input handling ──────────────────────────────────────────────────────

/// Open the input file, or stdin when the path is `-`.
fn open_input(file: &str) -> Result<BufReader<Box<dyn Read>>> {
    let inner: Box<dyn Read> = if file == "-" {
        Box::new(io::stdin())
    } else {
        Box::new(File::open(file).with_context(|| format!("failed to open {file}"))?)
    };
    Ok(BufReader::new(inner))
}
