use std::fs;
use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use color_eyre::Result;
use color_eyre::eyre::{WrapErr, eyre};
use crossterm::style::Stylize;
use ratatui::crossterm::style::Color as TermColor;
use ratatui::style::Color;
use serde::Serialize;

use pairscope::config::{HighlightMode, load_config, load_config_from};
use pairscope::lexer::{Language, tokenize};
use pairscope::render::SingleLineMode;
use pairscope::theme::highlight;
use pairscope::{
    BracePair, BraceHighlighter, CaretShape, DecorationKind, DecorationRequest, EditorContext,
    IndentGuides, MemoryRegistry, PairError, SourceText, TextBuffer, Theme,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Bracket pair scope inspector
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Find the delimiter pair enclosing a caret and show its scope decorations"
)]
struct Args {
    /// Source file to inspect
    file: PathBuf,

    /// Caret byte offset
    #[arg(long, conflicts_with_all = ["line", "column"], required_unless_present = "line")]
    offset: Option<usize>,

    /// Caret line (1-based)
    #[arg(long, requires = "column")]
    line: Option<usize>,

    /// Caret column in characters (1-based)
    #[arg(long, requires = "line")]
    column: Option<usize>,

    /// Scope renderer, overrides the config file
    #[arg(long, value_enum)]
    mode: Option<HighlightMode>,

    /// Caret shape, overrides the config file
    #[arg(long, value_enum)]
    caret: Option<CaretShape>,

    /// Same-line pair rendering, overrides the config file
    #[arg(long, value_enum)]
    single_line: Option<SingleLineMode>,

    /// Lexer to use (detected from the file extension by default)
    #[arg(long, value_enum)]
    language: Option<Language>,

    /// Skip the delimiter flash decorations
    #[arg(long)]
    no_flash: bool,

    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Print the file with the decorations painted in
    #[arg(long)]
    preview: bool,

    /// Config file to use instead of ~/.config/pairscope/config.toml
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Serialize)]
struct Report<'a> {
    offset: usize,
    renderer: &'static str,
    pair: Option<&'a BracePair>,
    decorations: Vec<&'a DecorationRequest>,
}

fn main() -> Result<()> {
    init_logging();
    color_eyre::install()?;

    let args = Args::parse();

    let config_result = match &args.config {
        Some(path) => load_config_from(path),
        None => load_config(),
    };
    if let Some(warning) = &config_result.warning {
        eprintln!("warning: {}", warning);
    }

    let mut config = config_result.config;
    if let Some(mode) = args.mode {
        config.highlight.mode = mode;
    }
    if let Some(caret) = args.caret {
        config.highlight.caret = caret;
    }
    if let Some(single_line) = args.single_line {
        config.highlight.single_line = single_line;
    }
    if args.no_flash {
        config.highlight.flash_pair = false;
    }

    let contents = fs::read_to_string(&args.file)
        .map_err(PairError::from)
        .wrap_err_with(|| format!("failed to read {}", args.file.display()))?;
    let language = args
        .language
        .unwrap_or_else(|| Language::from_path(&args.file));

    let text = SourceText::new(contents);
    let tokens = tokenize(language, text.as_str());
    let offset = caret_offset(&args, &text)?;

    let mut guides = IndentGuides::build(&text, config.highlight.tab_width);
    guides.set_caret_line(Some(text.line_of_offset(offset)));

    let (theme, color_warnings) = Theme::from_colors(&config.colors);
    for warning in &color_warnings {
        eprintln!("warning: {}", warning);
    }

    let ctx = EditorContext::new(&text, &tokens, &guides).with_caret(config.highlight.caret);
    let mut highlighter = BraceHighlighter::from_config(&config.highlight, language);
    let mut registry = MemoryRegistry::new();

    highlighter.on_caret_moved(&ctx, &theme, &mut registry, offset)?;
    let pair = highlighter.current_pair();
    let decorations: Vec<&DecorationRequest> = registry.iter().map(|(_, d)| d).collect();

    let mut out = std::io::stdout().lock();
    match args.format {
        OutputFormat::Json => {
            let report = Report {
                offset,
                renderer: highlighter.renderer_name(),
                pair,
                decorations: decorations.clone(),
            };
            writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
        }
        OutputFormat::Text => write_text_report(&mut out, &text, offset, pair, &decorations)?,
    }

    if args.preview {
        write!(out, "{}", paint(&text, &decorations))?;
    }

    Ok(())
}

/// Logs to stderr with timestamps. `RUST_LOG` overrides the default level.
fn init_logging() {
    let default_level = if cfg!(debug_assertions) { "debug" } else { "warn" };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format(|buf, record| {
            let datetime = chrono::Local::now();
            writeln!(
                buf,
                "[{}] [{}] {}",
                datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                record.level(),
                record.args()
            )
        })
        .init();
}

fn caret_offset(args: &Args, text: &SourceText) -> Result<usize> {
    if let Some(offset) = args.offset {
        if offset > text.len() {
            return Err(PairError::OffsetOutOfBounds {
                offset,
                len: text.len(),
            }
            .into());
        }
        return Ok(offset);
    }

    let (Some(line), Some(column)) = (args.line, args.column) else {
        return Err(eyre!("either --offset or --line and --column is required"));
    };
    let (Some(line0), Some(column0)) = (line.checked_sub(1), column.checked_sub(1)) else {
        return Err(eyre!("--line and --column are 1-based"));
    };
    text.offset_at(line0, column0).ok_or_else(|| {
        eyre!(
            "line {} is past the end of the file ({} lines)",
            line,
            text.line_count()
        )
    })
}

fn write_text_report(
    out: &mut impl Write,
    text: &SourceText,
    offset: usize,
    pair: Option<&BracePair>,
    decorations: &[&DecorationRequest],
) -> Result<()> {
    let Some(pair) = pair else {
        writeln!(out, "no enclosing pair at offset {}", offset)?;
        return Ok(());
    };

    writeln!(
        out,
        "pair {} {} .. {} {}",
        pair.left.text,
        position(text, pair.left.offset),
        pair.right.text,
        position(text, pair.right.offset)
    )?;
    for decoration in decorations {
        let kind = match &decoration.kind {
            DecorationKind::Inline => "inline".to_string(),
            DecorationKind::Tick => "tick".to_string(),
            DecorationKind::Gutter { line, glyph, .. } => {
                format!("gutter line {} glyph {}", line + 1, glyph)
            }
        };
        writeln!(
            out,
            "  {} {}..{} {} layer {}",
            kind, decoration.range.start, decoration.range.end, decoration.style, decoration.layer
        )?;
    }
    Ok(())
}

/// `line:column`, both 1-based, column in characters.
fn position(text: &SourceText, offset: usize) -> String {
    let line = text.line_of_offset(offset);
    let start = text.line_start(line);
    let column = text.slice(start..offset).chars().count();
    format!("{}:{}", line + 1, column + 1)
}

/// Renders the buffer with decorated characters colored and gutter glyphs in
/// a margin column. Zero-width ticks have no character to color.
fn paint(text: &SourceText, decorations: &[&DecorationRequest]) -> String {
    let has_gutter = decorations
        .iter()
        .any(|d| matches!(d.kind, DecorationKind::Gutter { .. }));
    let mut painted = String::new();

    for line in 0..text.line_count() {
        let start = text.line_start(line);
        let end = text.line_end(line);
        if start == text.len() && line > 0 {
            break;
        }

        if has_gutter {
            let glyph = decorations.iter().find_map(|d| match &d.kind {
                DecorationKind::Gutter { line: l, glyph, .. } if *l == line => {
                    Some((glyph.as_str(), d.color))
                }
                _ => None,
            });
            match glyph {
                Some((glyph, color)) => {
                    let color = color.unwrap_or(highlight::GUTTER_TEXT);
                    painted.push_str(&format!("{} ", glyph.with(TermColor::from(color))));
                }
                None => painted.push_str("  "),
            }
        }

        let mut run = String::new();
        let mut run_color: Option<Color> = None;
        for (i, ch) in text.slice(start..end).char_indices() {
            let color = color_at(decorations, start + i);
            if color != run_color && !run.is_empty() {
                push_run(&mut painted, &run, run_color);
                run.clear();
            }
            run_color = color;
            run.push(ch);
        }
        push_run(&mut painted, &run, run_color);

        painted.push('\n');
    }

    painted
}

fn color_at(decorations: &[&DecorationRequest], offset: usize) -> Option<Color> {
    decorations
        .iter()
        .filter(|d| !matches!(d.kind, DecorationKind::Gutter { .. }))
        .filter(|d| d.range.contains(&offset))
        .max_by_key(|d| d.layer)
        .map(|d| d.color.unwrap_or(highlight::TICK))
}

fn push_run(painted: &mut String, run: &str, color: Option<Color>) {
    if run.is_empty() {
        return;
    }
    match color {
        Some(color) => {
            let styled = run.with(TermColor::from(color)).bold();
            painted.push_str(&styled.to_string());
        }
        None => painted.push_str(run),
    }
}
