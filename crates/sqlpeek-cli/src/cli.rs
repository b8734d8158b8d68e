use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelpTopic {
    Root,
    Minify,
    Subst,
    Escape,
    Html,
}

#[derive(Debug, Clone)]
pub enum Command {
    Help(HelpTopic),
    Minify(MinifyArgs),
    Subst(SubstArgs),
    Escape(EscapeArgs),
    Html(HtmlArgs),
}

#[derive(Debug, Clone)]
pub struct MinifyArgs {
    pub config: PathBuf,
    pub width: Option<usize>,
    pub files: Vec<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamsSource {
    None,
    Inline(String),
    File(PathBuf),
}

#[derive(Debug, Clone)]
pub struct SubstArgs {
    pub params: ParamsSource,
    pub files: Vec<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct EscapeArgs {
    pub value: String,
}

#[derive(Debug, Clone)]
pub struct HtmlArgs {
    pub config: PathBuf,
    pub highlight_only: bool,
    pub files: Vec<PathBuf>,
}

const DEFAULT_CONFIG: &str = "sqlpeek.toml";

pub fn parse_args(args: &[String]) -> anyhow::Result<Command> {
    let mut it = args.iter().skip(1);
    let Some(first) = it.next() else {
        return Ok(Command::Help(HelpTopic::Root));
    };

    match first.as_str() {
        "-h" | "--help" => Ok(Command::Help(HelpTopic::Root)),
        "minify" => parse_minify(it.map(|s| s.as_str())),
        "subst" => parse_subst(it.map(|s| s.as_str())),
        "escape" => parse_escape(it.map(|s| s.as_str())),
        "html" => parse_html(it.map(|s| s.as_str())),
        _ => anyhow::bail!("unknown command: {first}"),
    }
}

/// Value of `--flag <v>` or `--flag=<v>`, if `token` is that flag.
fn flag_value<'a>(
    flag: &str,
    token: &'a str,
    it: &mut impl Iterator<Item = &'a str>,
) -> anyhow::Result<Option<&'a str>> {
    if token == flag {
        let Some(v) = it.next() else {
            anyhow::bail!("{flag} requires a value");
        };
        return Ok(Some(v));
    }
    Ok(token
        .strip_prefix(flag)
        .and_then(|rest| rest.strip_prefix('=')))
}

fn parse_minify<'a>(mut it: impl Iterator<Item = &'a str>) -> anyhow::Result<Command> {
    let mut config = PathBuf::from(DEFAULT_CONFIG);
    let mut width: Option<usize> = None;
    let mut files: Vec<PathBuf> = Vec::new();

    while let Some(token) = it.next() {
        if matches!(token, "-h" | "--help") {
            return Ok(Command::Help(HelpTopic::Minify));
        }
        if let Some(v) = flag_value("--config", token, &mut it)? {
            config = PathBuf::from(v);
        } else if let Some(v) = flag_value("--width", token, &mut it)? {
            let n: usize = v
                .parse()
                .map_err(|_| anyhow::anyhow!("--width must be a positive integer, got {v}"))?;
            if n == 0 {
                anyhow::bail!("--width must be a positive integer, got 0");
            }
            width = Some(n);
        } else if token.starts_with("--") {
            anyhow::bail!("unknown argument: {token}");
        } else {
            files.push(PathBuf::from(token));
        }
    }

    Ok(Command::Minify(MinifyArgs {
        config,
        width,
        files,
    }))
}

fn parse_subst<'a>(mut it: impl Iterator<Item = &'a str>) -> anyhow::Result<Command> {
    let mut params = ParamsSource::None;
    let mut files: Vec<PathBuf> = Vec::new();

    while let Some(token) = it.next() {
        if matches!(token, "-h" | "--help") {
            return Ok(Command::Help(HelpTopic::Subst));
        }
        if let Some(v) = flag_value("--params-file", token, &mut it)? {
            if params != ParamsSource::None {
                anyhow::bail!("--params and --params-file are mutually exclusive");
            }
            params = ParamsSource::File(PathBuf::from(v));
        } else if let Some(v) = flag_value("--params", token, &mut it)? {
            if params != ParamsSource::None {
                anyhow::bail!("--params and --params-file are mutually exclusive");
            }
            params = ParamsSource::Inline(v.to_string());
        } else if token.starts_with("--") {
            anyhow::bail!("unknown argument: {token}");
        } else {
            files.push(PathBuf::from(token));
        }
    }

    Ok(Command::Subst(SubstArgs { params, files }))
}

fn parse_escape<'a>(it: impl Iterator<Item = &'a str>) -> anyhow::Result<Command> {
    let mut value: Option<String> = None;

    for token in it {
        match token {
            "-h" | "--help" => return Ok(Command::Help(HelpTopic::Escape)),
            _ if value.is_none() => value = Some(token.to_string()),
            other => anyhow::bail!("unexpected argument: {other}"),
        }
    }

    let Some(value) = value else {
        anyhow::bail!("escape requires a JSON value");
    };
    Ok(Command::Escape(EscapeArgs { value }))
}

fn parse_html<'a>(mut it: impl Iterator<Item = &'a str>) -> anyhow::Result<Command> {
    let mut config = PathBuf::from(DEFAULT_CONFIG);
    let mut highlight_only = false;
    let mut files: Vec<PathBuf> = Vec::new();

    while let Some(token) = it.next() {
        if matches!(token, "-h" | "--help") {
            return Ok(Command::Help(HelpTopic::Html));
        }
        if let Some(v) = flag_value("--config", token, &mut it)? {
            config = PathBuf::from(v);
        } else if token == "--highlight-only" {
            highlight_only = true;
        } else if token.starts_with("--") {
            anyhow::bail!("unknown argument: {token}");
        } else {
            files.push(PathBuf::from(token));
        }
    }

    Ok(Command::Html(HtmlArgs {
        config,
        highlight_only,
        files,
    }))
}

pub fn print_help(topic: HelpTopic) {
    match topic {
        HelpTopic::Root => {
            println!(
                "\
sqlpeek - one-line SQL summaries and parameter inlining

USAGE:
  sqlpeek <COMMAND> [OPTIONS]

COMMANDS:
  minify        Print a width-bounded summary of each statement
  subst         Inline bound parameters into placeholders
  escape        Render one JSON value as a SQL literal
  html          Render statements as HTML markup

Run `sqlpeek <command> --help` for more."
            );
        }
        HelpTopic::Minify => {
            println!(
                "\
USAGE:
  sqlpeek minify [OPTIONS] [FILES...]

Reads one statement per file, or from stdin when no files are given.

OPTIONS:
  --config <FILE>       Config file path (default: sqlpeek.toml)
  --width <N>           Override minify.max_char_width
  -h, --help            Print help"
            );
        }
        HelpTopic::Subst => {
            println!(
                "\
USAGE:
  sqlpeek subst [OPTIONS] [FILES...]

Reads one statement per file, or from stdin when no files are given.
A JSON array binds positions from 0; an object binds digit keys to
positions and other keys to names.

OPTIONS:
  --params <JSON>       Parameters as a JSON array or object
  --params-file <FILE>  Read parameters from a JSON file
  -h, --help            Print help"
            );
        }
        HelpTopic::Escape => {
            println!(
                "\
USAGE:
  sqlpeek escape <JSON>

EXAMPLES:
  sqlpeek escape '\"it'\\''s\"'      # 'it\\'s'
  sqlpeek escape '[1, null, true]'   # 1, NULL, 1"
            );
        }
        HelpTopic::Html => {
            println!(
                "\
USAGE:
  sqlpeek html [OPTIONS] [FILES...]

OPTIONS:
  --config <FILE>       Config file path (default: sqlpeek.toml)
  --highlight-only      Keep the layout; omit the <div><pre> wrapper
  -h, --help            Print help"
            );
        }
    }
}
