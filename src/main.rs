//! The `link-group` binary.

use link_group::plugins::{
    DefaultTranslations, FixedRights, PlainTextParser, StaticDocuments, TrustedDomains,
};
use link_group::{
    html, xml, DocumentReference, LinkGroup, LinkGroupParameters, MacroContext, Options,
    RenderOptions, Services, Syntax, UrlPolicyOptions, DEFAULT_BASE_URL,
};

use std::error::Error;
use std::fs;
use std::io::{self, Read, Write};
use std::iter;
use std::process;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

const EXIT_PARSE_CONFIG: i32 = 2;
const EXIT_READ_INPUT: i32 = 3;
const EXIT_EXECUTE: i32 = 4;

#[derive(Debug, Parser)]
#[command(about, author, version, args_override_self = true)]
#[command(after_help = "\
By default, a configuration file is read from $XDG_CONFIG_HOME/link-group/config. \
It holds command-line arguments which are used as defaults; for example, \
`--trusted-domain example.org --rel nofollow`.")]
struct Cli {
    /// Files holding the content to link; the content is read from standard input if "-" is
    /// given, and is empty if neither files nor --content are given
    #[arg(value_name = "FILE")]
    files: Vec<String>,

    /// Path to a config file holding command-line arguments, or "none"
    #[arg(short, long, value_name = "PATH", default_value = get_default_config_path())]
    config_file: String,

    /// The document to link to, as [wiki:]Space.Page
    #[arg(short, long, value_name = "REFERENCE")]
    reference: String,

    /// The content to link, instead of FILE
    #[arg(long, value_name = "TEXT", conflicts_with = "files")]
    content: Option<String>,

    /// Render the macro inline, inside a paragraph
    #[arg(long)]
    inline: bool,

    /// The syntax the host renders to
    #[arg(short = 't', long = "to", value_name = "SYNTAX", default_value = "html/5.0")]
    target_syntax: Syntax,

    /// Render as a user allowed to edit the page
    #[arg(long)]
    can_edit: bool,

    /// A document which exists, and the URL it is served at
    #[arg(long, value_name = "REFERENCE=URL", value_parser = parse_existing)]
    existing: Vec<(String, String)>,

    /// The wiki references without a wiki prefix belong to
    #[arg(long, value_name = "WIKI", default_value = "xwiki")]
    default_wiki: String,

    /// A domain links may point to; may be repeated
    #[arg(long = "trusted-domain", value_name = "DOMAIN")]
    trusted_domains: Vec<String>,

    /// A scheme links may use; may be repeated [default: http, https]
    #[arg(long = "trusted-scheme", value_name = "SCHEME")]
    trusted_schemes: Vec<String>,

    /// Accept links to any location which parses
    #[arg(long)]
    no_trusted_domains: bool,

    /// The URL of the wiki; relative locations resolve against it
    #[arg(long, value_name = "URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// A rel attribute for the link, e.g. "nofollow"
    #[arg(long, value_name = "REL")]
    rel: Option<String>,

    /// How to print the produced blocks
    #[arg(short, long, value_enum, default_value_t = Format::Html)]
    format: Format,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Html,
    Xml,
}

fn parse_existing(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((reference, url)) if !reference.is_empty() => {
            Ok((reference.to_string(), url.to_string()))
        }
        _ => Err(format!("expected REFERENCE=URL, got [{}]", s)),
    }
}

#[cfg(all(not(windows), not(target_arch = "wasm32")))]
fn get_default_config_path() -> String {
    if let Ok(xdg_dirs) = xdg::BaseDirectories::with_prefix("link-group") {
        if let Ok(path) = xdg_dirs.place_config_file("config") {
            if let Some(path_str) = path.to_str() {
                return path_str.into();
            }
        }
    }

    "none".into()
}

#[cfg(any(windows, target_arch = "wasm32"))]
fn get_default_config_path() -> String {
    "none".into()
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let mut cli = Cli::parse();

    if cli.config_file != "none" {
        if let Ok(config) = fs::read_to_string(&cli.config_file) {
            let config_args = match shell_words::split(&config) {
                Ok(args) => args,
                Err(e) => {
                    eprintln!("failed to parse {}: {}", cli.config_file, e);
                    process::exit(EXIT_PARSE_CONFIG);
                }
            };

            let mut args = std::env::args();
            let argv0 = args.next().unwrap_or_default();
            cli = Cli::parse_from(iter::once(argv0).chain(config_args).chain(args));
        }
    }

    let content = match read_content(&cli) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("failed to read input: {}", e);
            process::exit(EXIT_READ_INPUT);
        }
    };

    let options = options(&cli);
    let security = TrustedDomains::new(&options.policy)?;

    let mut documents = StaticDocuments::new();
    for (reference, url) in &cli.existing {
        documents.insert(DocumentReference::parse(reference, &cli.default_wiki)?, url.clone());
    }

    let rights = if cli.can_edit {
        FixedRights::editor()
    } else {
        FixedRights::viewer()
    };

    let macro_ = LinkGroup::new(
        Services {
            documents: &documents,
            security: &security,
            authorization: &rights,
            localization: &DefaultTranslations,
            parser: &PlainTextParser,
        },
        options.render,
    );

    let context = MacroContext {
        inline: cli.inline,
        target_syntax: Some(cli.target_syntax),
        default_wiki: cli.default_wiki.clone(),
    };
    let parameters = LinkGroupParameters::from(DocumentReference::parse(
        &cli.reference,
        &cli.default_wiki,
    )?);

    let blocks = match macro_.execute(&parameters, content.as_deref(), &context) {
        Ok(blocks) => blocks,
        Err(e) => {
            eprintln!("failed to execute link-group: {}", e);
            process::exit(EXIT_EXECUTE);
        }
    };

    let mut out = String::new();
    match cli.format {
        Format::Html => html::format_blocks(&blocks, cli.target_syntax, &mut out)?,
        Format::Xml => xml::format_blocks(&blocks, &mut out)?,
    }

    let stdout = io::stdout();
    let mut stdout = stdout.lock();
    stdout.write_all(out.as_bytes())?;
    if matches!(cli.format, Format::Html) && !out.is_empty() {
        stdout.write_all(b"\n")?;
    }
    stdout.flush()?;

    Ok(())
}

fn read_content(cli: &Cli) -> io::Result<Option<String>> {
    if let Some(ref content) = cli.content {
        return Ok(Some(content.clone()));
    }
    if cli.files.is_empty() {
        return Ok(None);
    }

    let mut s = String::with_capacity(2048);
    for f in &cli.files {
        if f == "-" {
            io::stdin().read_to_string(&mut s)?;
        } else {
            s.push_str(&fs::read_to_string(f)?);
        }
    }
    Ok(Some(s))
}

fn options(cli: &Cli) -> Options {
    let mut policy = UrlPolicyOptions::builder()
        .enabled(!cli.no_trusted_domains)
        .trusted_domains(cli.trusted_domains.clone())
        .base_url(cli.base_url.clone())
        .build();
    if !cli.trusted_schemes.is_empty() {
        policy.trusted_schemes = cli.trusted_schemes.clone();
    }

    Options {
        policy,
        render: RenderOptions::builder().maybe_rel(cli.rel.clone()).build(),
    }
}
