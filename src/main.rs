//! schemaview - tabbed reference viewer for CMS boilerplate snippets
//!
//! Renders the built-in snippets (or arbitrary files) through the
//! built-in syntax highlighter, either as a standalone HTML page or
//! directly in the terminal.

mod content;
mod error;
mod highlight;
mod page;

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use error::{Result, ViewerError};
use highlight::{Highlighter, Language, Theme};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();

    let command = match args.first() {
        Some(command) => command.as_str(),
        None => {
            print_usage();
            return Ok(());
        }
    };

    match command {
        "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" => {
            print_version();
            Ok(())
        }
        "build" => cmd_build(&args[1..]),
        "render" => cmd_render(&args[1..]),
        "show" => cmd_show(&args[1..]),
        "list" => cmd_list(&args[1..]),
        other => Err(ViewerError::Usage(format!(
            "unknown command: {} (try --help)",
            other
        ))),
    }
}

/// Options shared by the subcommands.
#[derive(Debug, Default)]
struct Opts {
    /// Positional argument: snippet name or file path
    target: Option<String>,
    /// -o / --output
    output: Option<PathBuf>,
    /// --theme
    theme: Option<PathBuf>,
    /// --language
    language: Option<String>,
}

fn parse_opts(args: &[String]) -> Result<Opts> {
    let mut opts = Opts::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-o" | "--output" => {
                opts.output = Some(PathBuf::from(expect_value(arg, iter.next())?));
            }
            "--theme" => {
                opts.theme = Some(PathBuf::from(expect_value(arg, iter.next())?));
            }
            "--language" => {
                opts.language = Some(expect_value(arg, iter.next())?);
            }
            _ if arg.starts_with('-') => {
                return Err(ViewerError::Usage(format!("unknown option: {}", arg)));
            }
            _ => {
                if opts.target.is_some() {
                    return Err(ViewerError::Usage(format!(
                        "unexpected extra argument: {}",
                        arg
                    )));
                }
                opts.target = Some(arg.clone());
            }
        }
    }

    Ok(opts)
}

fn expect_value(flag: &str, value: Option<&String>) -> Result<String> {
    value
        .cloned()
        .ok_or_else(|| ViewerError::Usage(format!("{} requires a value", flag)))
}

fn load_highlighter(theme: &Option<PathBuf>) -> Result<Highlighter> {
    let theme = match theme {
        Some(path) => Theme::load(path)?,
        None => Theme::dark(),
    };
    Ok(Highlighter::with_theme(theme))
}

fn parse_tag(tag: &str) -> Result<Language> {
    Language::from_tag(tag).ok_or_else(|| ViewerError::UnsupportedLanguage(tag.to_string()))
}

/// Resolve a positional target: a built-in snippet name first, then a
/// file path. Files with an unrecognized extension fall back to the
/// scripting dialect, matching the highlighter's lossy tag resolution.
fn resolve_source(target: &str, language: &Option<String>) -> Result<(String, Language)> {
    if let Some(snippet) = content::find(target) {
        let language = match language {
            Some(tag) => parse_tag(tag)?,
            None => snippet.language,
        };
        return Ok((snippet.body.to_string(), language));
    }

    let path = Path::new(target);
    if path.is_file() {
        let body = fs::read_to_string(path)?;
        let language = match language {
            Some(tag) => parse_tag(tag)?,
            None => Language::from_path(path).unwrap_or(Language::Script),
        };
        return Ok((body, language));
    }

    Err(ViewerError::UnknownSnippet(target.to_string()))
}

fn write_output(output: &Option<PathBuf>, text: &str) -> Result<()> {
    match output {
        Some(path) => fs::write(path, text)?,
        None => print!("{}", text),
    }
    Ok(())
}

/// Build the full tabbed page for all built-in snippets.
fn cmd_build(args: &[String]) -> Result<()> {
    let opts = parse_opts(args)?;
    if let Some(target) = &opts.target {
        return Err(ViewerError::Usage(format!(
            "build takes no positional argument: {}",
            target
        )));
    }
    if opts.language.is_some() {
        return Err(ViewerError::Usage(
            "--language only applies to render and show".to_string(),
        ));
    }

    let highlighter = load_highlighter(&opts.theme)?;
    write_output(&opts.output, &page::build_page(content::SNIPPETS, &highlighter))
}

/// Emit the highlighted markup fragment for one snippet or file.
fn cmd_render(args: &[String]) -> Result<()> {
    let opts = parse_opts(args)?;
    let target = opts
        .target
        .as_deref()
        .ok_or_else(|| ViewerError::Usage("render needs a snippet name or file".to_string()))?;

    let (body, language) = resolve_source(target, &opts.language)?;
    let highlighter = load_highlighter(&opts.theme)?;
    write_output(&opts.output, &highlighter.to_html(&body, language))
}

/// Preview one snippet or file in the terminal.
fn cmd_show(args: &[String]) -> Result<()> {
    let opts = parse_opts(args)?;
    let target = opts
        .target
        .as_deref()
        .ok_or_else(|| ViewerError::Usage("show needs a snippet name or file".to_string()))?;
    if opts.output.is_some() {
        return Err(ViewerError::Usage(
            "show writes to the terminal; use render for files".to_string(),
        ));
    }

    let (body, language) = resolve_source(target, &opts.language)?;
    let highlighter = load_highlighter(&opts.theme)?;
    print!("{}", highlighter.to_ansi(&body, language));
    Ok(())
}

/// List the built-in snippets.
fn cmd_list(args: &[String]) -> Result<()> {
    if !args.is_empty() {
        return Err(ViewerError::Usage("list takes no arguments".to_string()));
    }
    for snippet in content::SNIPPETS {
        println!(
            "{:<10} {:<8} {:<16} {}",
            snippet.name,
            snippet.language.tag(),
            snippet.label,
            snippet.title
        );
    }
    Ok(())
}

fn print_usage() {
    println!(
        "schemaview {} - tabbed reference viewer for CMS boilerplate snippets",
        env!("CARGO_PKG_VERSION")
    );
    println!();
    println!("Usage: schemaview <COMMAND> [OPTIONS]");
    println!();
    println!("Commands:");
    println!("  build              Write the full tabbed HTML page (stdout by default)");
    println!("  render <TARGET>    Emit highlighted markup for a snippet or file");
    println!("  show <TARGET>      Preview a snippet or file in the terminal");
    println!("  list               List the built-in snippets");
    println!();
    println!("Options:");
    println!("  -o, --output FILE  Write output to FILE instead of stdout");
    println!("      --theme FILE   Load color overrides from a TOML theme file");
    println!("      --language TAG Force a dialect (schema|prisma|script|typescript|ts)");
    println!("  -h, --help         Show this help message");
    println!("  -V, --version      Show version information");
    println!();
    println!("TARGET is a built-in snippet name (see `schemaview list`) or a path.");
}

fn print_version() {
    println!("schemaview {}", env!("CARGO_PKG_VERSION"));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_opts_flags_and_target() {
        let opts =
            parse_opts(&args(&["schema", "-o", "out.html", "--theme", "t.toml"])).unwrap();
        assert_eq!(opts.target.as_deref(), Some("schema"));
        assert_eq!(opts.output, Some(PathBuf::from("out.html")));
        assert_eq!(opts.theme, Some(PathBuf::from("t.toml")));
        assert!(opts.language.is_none());
    }

    #[test]
    fn test_parse_opts_rejects_unknown_flag() {
        assert!(parse_opts(&args(&["--frobnicate"])).is_err());
    }

    #[test]
    fn test_parse_opts_rejects_missing_value() {
        assert!(parse_opts(&args(&["-o"])).is_err());
        assert!(parse_opts(&args(&["--language"])).is_err());
    }

    #[test]
    fn test_parse_opts_rejects_second_target() {
        assert!(parse_opts(&args(&["schema", "seed"])).is_err());
    }

    #[test]
    fn test_parse_tag() {
        assert_eq!(parse_tag("prisma").unwrap(), Language::Schema);
        assert!(matches!(
            parse_tag("elixir"),
            Err(ViewerError::UnsupportedLanguage(_))
        ));
    }

    #[test]
    fn test_resolve_source_snippet() {
        let (body, language) = resolve_source("schema", &None).unwrap();
        assert!(body.contains("model User"));
        assert_eq!(language, Language::Schema);
    }

    #[test]
    fn test_resolve_source_language_override() {
        let (_, language) = resolve_source("schema", &Some("ts".to_string())).unwrap();
        assert_eq!(language, Language::Script);
    }

    #[test]
    fn test_resolve_source_unknown() {
        assert!(matches!(
            resolve_source("nope", &None),
            Err(ViewerError::UnknownSnippet(_))
        ));
    }
}
