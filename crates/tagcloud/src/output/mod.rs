//! HTML, plain-text, and JSON rendering of a finished [`Cloud`].

mod format;

pub use format::format_number;
use format::{bold, dim, escape_html, heading, html_span};

use std::io::Write;
use std::path::Path;

use crate::cloud::Cloud;
use crate::error::CloudError;

/// Remote stylesheet defining the `f11` … `f48` size classes.
pub const REMOTE_STYLESHEET: &str = "http://web.cse.ohio-state.edu/software/2231/web-sw2/assignments/projects/tag-cloud-generator/data/tagcloud.css";

/// Local stylesheet looked up next to the generated page.
pub const LOCAL_STYLESHEET: &str = "tagcloud.css";

/// Which rendition to produce.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// A standalone HTML page with one sized `<span>` per word.
    #[default]
    Html,
    /// An aligned word / count / size table.
    Text,
    /// Machine-readable JSON.
    Json,
}

/// Rendering configuration derived from CLI flags.
#[derive(Clone, Copy, Debug)]
pub struct OutputOptions {
    /// Output rendition.
    pub format: OutputFormat,
    /// When `true`, emit ANSI color codes (text format only).
    pub color: bool,
}

impl OutputOptions {
    /// Create a new output configuration from CLI flags.
    ///
    /// Color is used only when writing to a terminal, `--no-color` was not
    /// given and `NO_COLOR` is unset.
    #[must_use]
    pub fn new(format: OutputFormat, no_color: bool, to_terminal: bool) -> Self {
        let color = !no_color && to_terminal && std::env::var("NO_COLOR").is_err();
        Self { format, color }
    }
}

// ─── Public entry points ──────────────────────────────────────────────────────

/// Write the chosen output format for `cloud` to `out`.
pub fn write_output(
    out: &mut dyn Write,
    cloud: &Cloud,
    opts: &OutputOptions,
) -> std::io::Result<()> {
    match opts.format {
        OutputFormat::Html => write_html(out, cloud),
        OutputFormat::Text => write_text(out, cloud, opts.color),
        OutputFormat::Json => write_json(out, cloud),
    }
}

/// Render `cloud` completely, then write it to `path`.
///
/// The bytes go to a temporary file next to `path` that is renamed into
/// place only after every write succeeded, so a failed run never leaves a
/// partial artifact behind.
pub fn write_to_path(path: &Path, cloud: &Cloud, opts: &OutputOptions) -> Result<(), CloudError> {
    let unwritable = |source: std::io::Error| CloudError::OutputUnwritable {
        path: path.to_path_buf(),
        source,
    };
    let mut buf: Vec<u8> = Vec::new();
    write_output(&mut buf, cloud, opts).map_err(unwritable)?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(unwritable)?;
    tmp.write_all(&buf)
        .and_then(|()| tmp.as_file().sync_all())
        .map_err(unwritable)?;
    tmp.persist(path).map_err(|e| unwritable(e.error))?;
    Ok(())
}

// ─── HTML ─────────────────────────────────────────────────────────────────────

fn write_html(out: &mut dyn Write, cloud: &Cloud) -> std::io::Result<()> {
    let title = escape_html(&heading(cloud));

    writeln!(out, "<html>")?;
    writeln!(out, "<head>")?;
    writeln!(out, "<title>{title}</title>")?;
    writeln!(
        out,
        "<link href=\"{REMOTE_STYLESHEET}\" rel=\"stylesheet\" type=\"text/css\">"
    )?;
    writeln!(
        out,
        "<link href=\"{LOCAL_STYLESHEET}\" rel=\"stylesheet\" type=\"text/css\">"
    )?;
    writeln!(out, "</head>")?;
    writeln!(out, "<body>")?;
    writeln!(out, "<h2>{title}</h2>")?;
    writeln!(out, "<hr>")?;
    writeln!(out, "<div class=\"cdiv\">")?;
    writeln!(out, "<p class=\"cbox\">")?;
    for e in &cloud.entries {
        writeln!(out, "{}", html_span(&e.word, e.count, e.size))?;
    }
    writeln!(out, "</p>")?;
    writeln!(out, "</div>")?;
    writeln!(out, "</body>")?;
    writeln!(out, "</html>")
}

// ─── Text ─────────────────────────────────────────────────────────────────────

fn write_text(out: &mut dyn Write, cloud: &Cloud, color: bool) -> std::io::Result<()> {
    writeln!(out, "{}", bold(&heading(cloud), color))?;
    if cloud.entries.is_empty() {
        return Ok(());
    }

    let counts: Vec<String> = cloud.entries.iter().map(|e| format_number(e.count)).collect();
    let word_w = cloud
        .entries
        .iter()
        .map(|e| e.word.chars().count())
        .max()
        .unwrap_or(0)
        .max(4); // at least wide enough for "WORD"
    let count_w = counts.iter().map(String::len).max().unwrap_or(0).max(5);

    writeln!(out)?;
    let header = format!("{:<word_w$}  {:>count_w$}  {:>4}", "WORD", "COUNT", "SIZE");
    writeln!(out, "{}", dim(&header, color))?;
    for (e, count) in cloud.entries.iter().zip(&counts) {
        writeln!(out, "{:<word_w$}  {count:>count_w$}  {:>4}", e.word, e.size)?;
    }
    Ok(())
}

// ─── JSON ─────────────────────────────────────────────────────────────────────

fn write_json(out: &mut dyn Write, cloud: &Cloud) -> std::io::Result<()> {
    let json_str =
        serde_json::to_string_pretty(cloud).map_err(|e| std::io::Error::other(e.to_string()))?;
    writeln!(out, "{json_str}")
}
