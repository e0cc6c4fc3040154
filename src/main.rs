// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Command-line interface for the textkit binary.
//!
//! Each string operation is exposed as a subcommand that reads its text from
//! the positional argument or, when omitted, from standard input. The `batch`
//! subcommand executes a YAML batch document and prints a JSON report.

use std::{
    io::{self, Read, Write},
    path::PathBuf,
    process,
};

use clap::{ArgAction, Args, Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use textkit::{
    BatchReport, DEFAULT_SUFFIX, Error, TruncateOptions, capitalize, count_words, load_jobs,
    run_batch_with_progress, slugify, stream_error,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Filter applied when `--log`/`TEXTKIT_LOG` is not a valid directive.
const DEFAULT_LOG_FILTER: &str = "warn";

/// Command line interface for the textkit string helpers.
#[derive(Debug, Parser,)]
#[command(name = "textkit", version, about = "Slugify, truncate, capitalize and count words")]
struct Cli
{
    #[command(subcommand)]
    command: Command,

    /// Log filter directive, e.g. `debug` or `textkit=info`.
    #[arg(long = "log", env = "TEXTKIT_LOG", default_value = DEFAULT_LOG_FILTER, global = true)]
    log: String,
}

#[derive(Debug, Subcommand,)]
/// Supported commands exposed by the CLI.
enum Command
{
    /// Convert text into a lowercase hyphen-separated slug.
    Slugify(TextArgs,),
    /// Bound text to a maximum length, marking cuts with a suffix.
    Truncate(TruncateArgs,),
    /// Uppercase the first character and lowercase the rest.
    Capitalize(TextArgs,),
    /// Count whitespace-separated words.
    CountWords(TextArgs,),
    /// Execute a YAML batch document and print a JSON report.
    Batch(BatchArgs,),
}

#[derive(Debug, Args,)]
struct TextArgs
{
    /// Text to transform; read from standard input when omitted.
    #[arg(value_name = "TEXT")]
    text: Option<String,>,
}

#[derive(Debug, Args,)]
struct TruncateArgs
{
    /// Text to truncate; read from standard input when omitted.
    #[arg(value_name = "TEXT")]
    text: Option<String,>,

    /// Maximum length of the result in characters.
    #[arg(long = "max-length", short = 'n', value_name = "N")]
    max_length: usize,

    /// Marker appended when the text is cut.
    #[arg(long = "suffix", env = "TEXTKIT_SUFFIX", default_value = DEFAULT_SUFFIX)]
    suffix: String,
}

#[derive(Debug, Args,)]
struct BatchArgs
{
    /// Path to the YAML batch document.
    #[arg(long = "config", value_name = "PATH")]
    config: PathBuf,

    /// Output formatted JSON for easier inspection.
    #[arg(long = "pretty", action = ArgAction::SetTrue)]
    pretty: bool,

    /// Draw a progress bar on stderr while jobs run.
    #[arg(long = "progress", action = ArgAction::SetTrue)]
    progress: bool,
}

/// Entry point that reports errors and sets the appropriate exit status.
fn main()
{
    if let Err(error,) = run() {
        eprintln!("{}", error.to_display_string());
        process::exit(1,);
    }
}

/// Executes the CLI using parsed arguments.
///
/// # Errors
///
/// Propagates errors originating from stream handling and batch processing.
fn run() -> Result<(), Error,>
{
    let cli = Cli::parse();
    init_tracing(&cli.log,);

    let stdin = io::stdin();
    let stdout = io::stdout();
    execute(cli.command, &mut stdin.lock(), &mut stdout.lock(),)
}

fn init_tracing(directive: &str,)
{
    let filter =
        EnvFilter::try_new(directive,).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER,),);
    // A subscriber may already be installed when running under a test harness.
    let _ = tracing_subscriber::fmt().with_env_filter(filter,).with_writer(io::stderr,).try_init();
}

fn execute<R: Read, W: Write,>(command: Command, input: &mut R, output: &mut W,)
-> Result<(), Error,>
{
    match command {
        Command::Slugify(args,) => {
            let text = resolve_text(args.text, input,)?;
            write_line(output, &slugify(&text,),)
        }
        Command::Truncate(args,) => {
            let text = resolve_text(args.text, input,)?;
            let options = TruncateOptions::new(args.max_length,).with_suffix(args.suffix,);
            write_line(output, &options.apply(&text,),)
        }
        Command::Capitalize(args,) => {
            let text = resolve_text(args.text, input,)?;
            write_line(output, &capitalize(&text,),)
        }
        Command::CountWords(args,) => {
            let text = resolve_text(args.text, input,)?;
            write_line(output, &count_words(&text,).to_string(),)
        }
        Command::Batch(args,) => run_batch_command(&args, output,),
    }
}

/// Returns the positional text or, when absent, standard input with a single
/// trailing line break removed.
fn resolve_text<R: Read,>(text: Option<String,>, input: &mut R,) -> Result<String, Error,>
{
    if let Some(text,) = text {
        return Ok(text,);
    }

    let mut buffer = String::new();
    input.read_to_string(&mut buffer,).map_err(stream_error,)?;
    debug!("Read {} bytes from standard input", buffer.len());

    if buffer.ends_with('\n',) {
        buffer.pop();
        if buffer.ends_with('\r',) {
            buffer.pop();
        }
    }

    Ok(buffer,)
}

fn write_line<W: Write,>(output: &mut W, value: &str,) -> Result<(), Error,>
{
    writeln!(output, "{value}").map_err(stream_error,)
}

fn run_batch_command<W: Write,>(args: &BatchArgs, output: &mut W,) -> Result<(), Error,>
{
    let document = load_jobs(&args.config,)?;

    let progress = if args.progress { progress_bar() } else { ProgressBar::hidden() };
    let report = run_batch_with_progress(&document, &progress,);

    write_report(output, &report, args.pretty,)?;
    writeln!(output).map_err(stream_error,)
}

fn progress_bar() -> ProgressBar
{
    let bar = ProgressBar::new(0,);
    if let Ok(style,) = ProgressStyle::with_template("{bar:40.cyan/blue} {pos}/{len} jobs",) {
        bar.set_style(style,);
    }
    bar
}

fn write_report<W: Write,>(writer: &mut W, report: &BatchReport, pretty: bool,)
-> Result<(), Error,>
{
    if pretty {
        serde_json::to_writer_pretty(writer, report,)?;
    } else {
        serde_json::to_writer(writer, report,)?;
    }

    Ok((),)
}

#[cfg(test)]
mod tests
{
    use std::{fs, io::Cursor};

    use clap::Parser;
    use tempfile::tempdir;
    use textkit::BatchReport;

    use super::{Cli, Command, execute, init_tracing, resolve_text, write_report};

    fn run_cli(arguments: &[&str], stdin: &str,) -> Result<String, textkit::Error,>
    {
        let mut argv = vec![env!("CARGO_PKG_NAME")];
        argv.extend_from_slice(arguments,);
        let cli = Cli::try_parse_from(argv,).expect("failed to parse CLI",);

        let mut input = Cursor::new(stdin.as_bytes().to_vec(),);
        let mut output = Vec::new();
        execute(cli.command, &mut input, &mut output,)?;
        Ok(String::from_utf8(output,).expect("invalid UTF-8",),)
    }

    #[test]
    fn slugify_uses_positional_text()
    {
        let output = run_cli(&["slugify", "Hello, World!"], "",).expect("slugify failed",);
        assert_eq!(output, "hello-world\n");
    }

    #[test]
    fn truncate_uses_default_suffix()
    {
        let output =
            run_cli(&["truncate", "Hello World", "--max-length", "8"], "",).expect("truncate failed",);
        assert_eq!(output, "Hello...\n");
    }

    #[test]
    fn truncate_accepts_custom_suffix()
    {
        let output = run_cli(&["truncate", "Hello World", "-n", "9", "--suffix", "…"], "",)
            .expect("truncate failed",);
        assert_eq!(output, "Hello Wo…\n");
    }

    #[test]
    fn truncate_requires_max_length()
    {
        let parsed = Cli::try_parse_from([env!("CARGO_PKG_NAME"), "truncate", "Hello"],);
        assert!(parsed.is_err());
    }

    #[test]
    fn truncate_rejects_negative_max_length()
    {
        let parsed =
            Cli::try_parse_from([env!("CARGO_PKG_NAME"), "truncate", "Hello", "-n", "-1"],);
        assert!(parsed.is_err());
    }

    #[test]
    fn capitalize_reads_standard_input()
    {
        let output = run_cli(&["capitalize"], "hELLo WoRLD\n",).expect("capitalize failed",);
        assert_eq!(output, "Hello world\n");
    }

    #[test]
    fn count_words_reads_multiline_standard_input()
    {
        let output = run_cli(&["count-words"], "Hello\tworld\nagain\n",).expect("count failed",);
        assert_eq!(output, "3\n");
    }

    #[test]
    fn resolve_text_strips_single_trailing_line_break()
    {
        let mut input = Cursor::new(b"line\r\n\n".to_vec(),);
        let text = resolve_text(None, &mut input,).expect("read failed",);
        assert_eq!(text, "line\r\n");

        let mut crlf = Cursor::new(b"line\r\n".to_vec(),);
        assert_eq!(resolve_text(None, &mut crlf,).expect("read failed",), "line");
    }

    #[test]
    fn batch_subcommand_parses_flags()
    {
        let cli = Cli::try_parse_from([
            env!("CARGO_PKG_NAME"),
            "batch",
            "--config",
            "jobs.yaml",
            "--pretty",
            "--progress",
        ],)
        .expect("failed to parse CLI",);

        match cli.command {
            Command::Batch(args,) => {
                assert!(args.pretty);
                assert!(args.progress);
                assert_eq!(args.config.to_str(), Some("jobs.yaml"));
            }
            other => panic!("unexpected command variant: {other:?}"),
        }
    }

    #[test]
    fn batch_writes_compact_report()
    {
        let temp = tempdir().expect("failed to create tempdir",);
        let config_path = temp.path().join("jobs.yaml",);
        let yaml = r"
jobs:
  - id: title
    operation: slugify
    input: Hello    World
  - operation: truncate
    input: Hello World
    max_length: 2
";
        fs::write(&config_path, yaml,).expect("failed to write config",);

        let output = run_cli(
            &["batch", "--config", config_path.to_str().expect("utf8",)],
            "",
        )
        .expect("batch failed",);
        assert_eq!(
            output,
            "{\"results\":[{\"id\":\"title\",\"operation\":\"slugify\",\"output\":\"hello-world\"},\
             {\"id\":\"job-2\",\"operation\":\"truncate\",\"output\":\"...\"}]}\n"
        );
    }

    #[test]
    fn batch_reports_validation_errors()
    {
        let temp = tempdir().expect("failed to create tempdir",);
        let config_path = temp.path().join("jobs.yaml",);
        fs::write(&config_path, "jobs: []\n",).expect("failed to write config",);

        let error = run_cli(
            &["batch", "--config", config_path.to_str().expect("utf8",)],
            "",
        )
        .expect_err("expected validation error",);
        match error {
            textkit::Error::Validation {
                message,
            } => assert_eq!(message, "document must include at least one job"),
            other => panic!("unexpected error variant: {other:?}"),
        }
    }

    #[test]
    fn pretty_report_uses_pretty_writer()
    {
        let report = BatchReport {
            results: Vec::new(),
        };
        let mut buffer = Cursor::new(Vec::new(),);
        write_report(&mut buffer, &report, true,).expect("failed to serialize report",);

        let output = String::from_utf8(buffer.into_inner(),).expect("invalid UTF-8",);
        assert_eq!(output, "{\n  \"results\": []\n}");
    }

    #[test]
    fn init_tracing_tolerates_invalid_directive_and_repeated_calls()
    {
        init_tracing("textkit=[",);
        init_tracing("debug",);
        tracing::debug!("subscriber installed");
    }
}
