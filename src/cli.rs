//! Minimal CLI: JSON object → (class | interface | both) declarations
use std::io::Read;
use std::path::{Path, PathBuf};
use anyhow::Context;
use clap::{Parser, Subcommand, Args};
use colored::Colorize;
use rayon::prelude::*;
use serde_json::Value;
use tracing::{info, warn};

use json_decl::{render, RenderConfig, INVALID_JSON_MESSAGE};

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// infer type declarations from JSON objects and print them as a class, an interface, or both
#[derive(Parser, Debug)]
#[command(name = "json-decl")]
pub struct CommandLineInterface {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// emit a class with auto-properties
    Csharp(Target),
    /// emit a structural interface
    Typescript(Target),
    /// emit the class block followed by the interface block
    Both(Target),
}

#[derive(Args, Debug, Clone)]
struct InputSettings {
    /// treat input as newline-delimited JSON (NDJSON)
    #[arg(long, default_value_t = false)]
    ndjson: bool,

    /// JSON Pointer to select a subnode in each document (e.g. /data/items/0)
    #[arg(long)]
    json_pointer: Option<String>,

    /// JQ pre-process filter for each document; every output is rendered
    #[arg(long)]
    jq_expr: Option<String>,

    /// One or more inputs. May be literal paths or quoted glob patterns or '-' for stdin
    #[arg(long, short, num_args = 1.., required = true)]
    input: Vec<String>,
}

#[derive(Args, Debug, Clone)]
struct RenderSettings {
    /// JSON file with rendering options (unknown keys are rejected)
    #[arg(long)]
    config: Option<PathBuf>,

    /// member modifier in the class notation
    #[arg(long)]
    modifier: Option<String>,

    /// accessor token in the class notation
    #[arg(long)]
    accessor: Option<String>,

    /// class name placeholder
    #[arg(long)]
    class_name: Option<String>,

    /// interface name placeholder
    #[arg(long)]
    interface_name: Option<String>,
}

#[derive(clap::Parser, Debug, Clone)]
struct Target {
    #[command(flatten)]
    input_settings: InputSettings,

    #[command(flatten)]
    render_settings: RenderSettings,

    /// output file (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy)]
enum Blocks { Class, Interface, Both }

/// One input document after reading and pre-processing.
#[derive(Debug)]
enum Loaded {
    Value(Value),
    InvalidJson,
    Failed(String),
}

#[derive(Debug)]
struct Document {
    origin: String,
    loaded: Loaded,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl InputSettings {
    fn load_documents(&self) -> anyhow::Result<Vec<Document>> {
        let source_paths = resolve_file_path_patterns(&self.input)
            .map_err(|e| anyhow::anyhow!("failed to resolve input file paths: {e}"))?;
        let mut out = Vec::new();
        for source_path in source_paths {
            let (origin, source) = match read_source(&source_path) {
                Ok(x) => x,
                Err(error) => {
                    let origin = source_path.to_string_lossy().to_string();
                    warn!(%origin, "cannot read input");
                    out.push(Document { origin, loaded: Loaded::Failed(format!("{error:#}")) });
                    continue;
                }
            };
            if self.ndjson {
                for (i, line) in source.lines().enumerate().filter(|(_, l)| !l.trim().is_empty()) {
                    self.push_text(format!("{origin}:{}", i + 1), line, &mut out);
                }
            } else {
                self.push_text(origin, &source, &mut out);
            }
        }
        Ok(out)
    }

    fn push_text(&self, origin: String, text: &str, out: &mut Vec<Document>) {
        let json_value = match serde_json::from_str::<Value>(text) {
            Ok(x) => x,
            Err(error) => {
                warn!(%origin, %error, "input is not valid JSON");
                out.push(Document { origin, loaded: Loaded::InvalidJson });
                return;
            }
        };
        let json_value = match self.json_pointer.as_deref() {
            None => json_value,
            Some(ptr) => match json_value.pointer(ptr) {
                Some(x) => x.clone(),
                None => {
                    let reason = format!("JSON pointer {ptr} matched nothing");
                    out.push(Document { origin, loaded: Loaded::Failed(reason) });
                    return;
                }
            },
        };
        match self.jq_expr.as_ref() {
            None => out.push(Document { origin, loaded: Loaded::Value(json_value) }),
            Some(jq_expr) => match json_decl::jq_exec::run_jaq(jq_expr, &json_value) {
                Ok(xs) => {
                    for (i, x) in xs.into_iter().enumerate() {
                        out.push(Document { origin: format!("{origin}#{i}"), loaded: Loaded::Value(x) });
                    }
                }
                Err(error) => {
                    out.push(Document { origin, loaded: Loaded::Failed(error.to_string()) });
                }
            },
        }
    }
}

impl RenderSettings {
    fn resolve(&self) -> anyhow::Result<RenderConfig> {
        let mut cfg = match self.config.as_ref() {
            Some(path) => RenderConfig::load(path)
                .with_context(|| format!("failed to load config {}", path.display()))?,
            None => RenderConfig::default(),
        };
        if let Some(x) = &self.modifier { cfg.modifier = x.clone(); }
        if let Some(x) = &self.accessor { cfg.accessor = x.clone(); }
        if let Some(x) = &self.class_name { cfg.class_name = x.clone(); }
        if let Some(x) = &self.interface_name { cfg.interface_name = x.clone(); }
        Ok(cfg)
    }
}

impl Document {
    /// Rendered text, plus whether it succeeded.
    fn render(&self, blocks: Blocks, cfg: &RenderConfig) -> (String, bool) {
        match &self.loaded {
            Loaded::InvalidJson => {
                let text = match blocks {
                    Blocks::Both => format!("{INVALID_JSON_MESSAGE}\n\n{INVALID_JSON_MESSAGE}"),
                    _ => INVALID_JSON_MESSAGE.to_owned(),
                };
                (text, false)
            }
            Loaded::Failed(reason) => (String::new(), self.report(reason)),
            Loaded::Value(value) => match render(value, cfg) {
                Ok(decls) => {
                    let text = match blocks {
                        Blocks::Class => decls.class_block,
                        Blocks::Interface => decls.interface_block,
                        Blocks::Both => format!("{}\n\n{}", decls.class_block, decls.interface_block),
                    };
                    (text, true)
                }
                Err(error) => (String::new(), self.report(&error.to_string())),
            },
        }
    }

    fn report(&self, reason: &str) -> bool {
        eprintln!("{} {}: {reason}", "error:".red().bold(), self.origin);
        false
    }
}

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }

    /// Process exit code: 0 when every document rendered, 1 otherwise.
    pub fn run(&self) -> i32 {
        let (target, blocks) = match &self.cmd {
            Command::Csharp(t) => (t, Blocks::Class),
            Command::Typescript(t) => (t, Blocks::Interface),
            Command::Both(t) => (t, Blocks::Both),
        };
        match target.run(blocks) {
            Ok(true) => 0,
            Ok(false) => 1,
            Err(error) => {
                eprintln!("{} {error:#}", "error:".red().bold());
                1
            }
        }
    }
}

impl Target {
    fn run(&self, blocks: Blocks) -> anyhow::Result<bool> {
        let cfg = self.render_settings.resolve()?;
        let documents = self.input_settings.load_documents()?;

        // documents are independent; collect keeps input order
        let rendered = documents
            .par_iter()
            .map(|doc| doc.render(blocks, &cfg))
            .collect::<Vec<_>>();

        let all_ok = rendered.iter().all(|(_, ok)| *ok);
        let src = rendered
            .into_iter()
            .map(|(text, _)| text)
            .filter(|text| !text.is_empty())
            .collect::<Vec<_>>()
            .join("\n\n");

        if let Some(out) = self.out.as_ref() {
            if let Some(parent) = out.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create {}", parent.display()))?;
            }
            std::fs::write(out, format!("{src}\n"))
                .with_context(|| format!("failed to write {}", out.display()))?;
            info!(path = %out.display(), documents = documents.len(), "wrote declarations");
        } else {
            println!("{src}");
        }
        Ok(all_ok)
    }
}

// ————————————————————————————————————————————————————————————————————————————
// INTERNAL HELPERS
// ————————————————————————————————————————————————————————————————————————————

fn read_source(path: &Path) -> anyhow::Result<(String, String)> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf).context("failed to read stdin")?;
        return Ok(("<stdin>".to_owned(), buf));
    }
    let source = std::fs::read_to_string(path)
        .map_err(|e| json_decl::Error::io(path, e))?;
    Ok((path.to_string_lossy().to_string(), source))
}

fn resolve_file_path_patterns<I>(patterns: I) -> Result<Vec<PathBuf>, Box<dyn std::error::Error + Send + Sync>>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    fn has_glob_chars(s: &str) -> bool {
        s.bytes().any(|b| matches!(b, b'*' | b'?' | b'[' | b'{' ))
    }

    let mut out = Vec::<PathBuf>::new();

    for raw in patterns {
        let pattern = raw.as_ref();

        if has_glob_chars(pattern) {
            let mut matched_any = false;
            for entry in glob::glob(pattern)? {
                matched_any = true;
                out.push(entry?);
            }
            if !matched_any {
                // Pattern was explicitly a glob but matched nothing -> surface as an error
                return Err(format!("glob pattern matched no files: {pattern}").into());
            }
        } else {
            // literal path, or '-' for stdin
            out.push(PathBuf::from(pattern));
        }
    }

    Ok(out)
}
