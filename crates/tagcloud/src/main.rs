//! tagcloud — render the most frequent words of a text as a sized tag cloud.

use std::io::{IsTerminal, Write};
use std::path::PathBuf;

use clap::Parser;

use tagcloud::output::{OutputFormat, OutputOptions};
use tagcloud::{CloudError, CloudOptions, CloudStats, DefaultSeparators, SizeRange, output, source};

// ─── CLI ──────────────────────────────────────────────────────────────────────

#[derive(Debug, Parser)]
#[command(
    name = "tagcloud",
    about = "Render the most frequent words of a text as a sized tag cloud",
    version
)]
struct Cli {
    /// Input text file (`-` for stdin; default: stdin when piped).
    input: Option<PathBuf>,

    /// Number of words to include in the cloud.
    #[arg(
        short = 'n',
        long,
        value_name = "N",
        default_value_t = 50,
        env = "TAGCLOUD_COUNT",
        allow_negative_numbers = true
    )]
    count: i64,

    /// Write the cloud to this file instead of stdout.
    #[arg(short = 'o', long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Html, env = "TAGCLOUD_FORMAT")]
    format: OutputFormat,

    /// Label shown in the heading (default: the input path).
    #[arg(long, value_name = "LABEL")]
    title: Option<String>,

    /// Display size of the least frequent selected word.
    #[arg(long, value_name = "SIZE", default_value_t = SizeRange::DEFAULT.min())]
    min_size: u32,

    /// Display size of the most frequent selected word.
    #[arg(long, value_name = "SIZE", default_value_t = SizeRange::DEFAULT.max())]
    max_size: u32,

    /// Disable ANSI colors.
    #[arg(long)]
    no_color: bool,

    /// Print token and vocabulary statistics to stderr.
    #[arg(short, long)]
    verbose: bool,
}

// ─── Helpers ──────────────────────────────────────────────────────────────────

/// Report `err` as a diagnostic and exit with a matching sysexits code.
fn fail(err: CloudError) -> ! {
    let code = match &err {
        CloudError::VocabularyTooSmall { .. } | CloudError::InvalidCount(_) => exitcode::DATAERR,
        CloudError::InvalidSizeRange { .. } => exitcode::USAGE,
        CloudError::InputUnavailable { .. } => exitcode::NOINPUT,
        CloudError::OutputUnwritable { .. } => exitcode::CANTCREAT,
    };
    eprintln!("{:?}", miette::Report::new(err));
    std::process::exit(code);
}

fn read_input(input: Option<&PathBuf>) -> Result<source::Document, CloudError> {
    match input {
        Some(path) if path.as_os_str() == "-" => source::read_stdin(),
        Some(path) => source::read_path(path),
        None => source::read_stdin(),
    }
}

fn write_stdout(cloud: &tagcloud::Cloud, opts: &OutputOptions) -> Result<(), CloudError> {
    let unwritable = |source: std::io::Error| CloudError::OutputUnwritable {
        path: PathBuf::from("-"),
        source,
    };
    let mut buf: Vec<u8> = Vec::new();
    output::write_output(&mut buf, cloud, opts).map_err(unwritable)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    out.write_all(&buf).and_then(|()| out.flush()).map_err(unwritable)
}

// ─── Entry point ──────────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();

    if cli.input.is_none() && std::io::stdin().is_terminal() {
        eprintln!("error: no input file given (pass a path, `-`, or pipe text to stdin)");
        std::process::exit(exitcode::USAGE);
    }

    let sizes = SizeRange::new(cli.min_size, cli.max_size).unwrap_or_else(|e| fail(e));
    let doc = read_input(cli.input.as_ref()).unwrap_or_else(|e| fail(e));
    let label = cli.title.clone().unwrap_or_else(|| doc.label.clone());

    let opts = CloudOptions {
        count: cli.count,
        sizes,
    };
    let (cloud, stats) =
        tagcloud::build_cloud(label, doc.lines(), &DefaultSeparators, &opts).unwrap_or_else(|e| fail(e));

    if cli.verbose {
        let CloudStats { tokens, distinct } = stats;
        eprintln!(
            "note: {} tokens, {} distinct words, selected {}",
            output::format_number(tokens),
            output::format_number(distinct),
            cloud.entries.len()
        );
    }

    let to_terminal = cli.output.is_none() && std::io::stdout().is_terminal();
    let out_opts = OutputOptions::new(cli.format, cli.no_color, to_terminal);

    let written = match &cli.output {
        Some(path) => output::write_to_path(path, &cloud, &out_opts),
        None => write_stdout(&cloud, &out_opts),
    };
    if let Err(e) = written {
        fail(e);
    }
}
