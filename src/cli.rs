//! Minimal CLI: protocol JSON files → (declarations | validation report)
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use rayon::prelude::*;

use protocol_dts::schema::Domain;
use protocol_dts::{Generator, GeneratorConfig, SerializationContext, Style};

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// turn protocol domain descriptions into ambient namespace/interface declarations
#[derive(Parser, Debug)]
pub struct CommandLineInterface {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// generate declarations for every input domain
    Generate(GenerateOut),
    /// generate in memory and report name collisions and dangling references
    Validate(ValidateOut),
}

#[derive(Args, Debug, Clone)]
struct InputSettings {
    /// One or more inputs. May be literal file paths, directories (all `*.json` inside), or quoted glob patterns
    #[arg(long, short, num_args = 1.., required = true)]
    input: Vec<String>,

    /// name of the root `declare namespace`
    #[arg(long, default_value = "Webkit")]
    namespace: String,

    /// output layout of each domain
    #[arg(long, value_enum, default_value_t = Style::Separated)]
    style: Style,

    /// suffix of synthesized command result types
    #[arg(long, default_value = protocol_dts::generator::DEFAULT_RESULT_SUFFIX)]
    result_suffix: String,
}

#[derive(clap::Parser, Debug)]
struct GenerateOut {
    #[command(flatten)]
    input_settings: InputSettings,

    /// output .d.ts file (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// spaces per indentation level
    #[arg(long, default_value_t = 4, conflicts_with = "tabs")]
    indent_width: usize,

    /// indent with tabs instead of spaces
    #[arg(long)]
    tabs: bool,

    /// fail instead of writing output when validation finds issues
    #[arg(long)]
    strict: bool,
}

#[derive(clap::Parser, Debug)]
struct ValidateOut {
    #[command(flatten)]
    input_settings: InputSettings,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl InputSettings {
    fn generator(&self) -> Generator {
        Generator::new(GeneratorConfig { style: self.style, result_suffix: self.result_suffix.clone() })
    }

    /// Loads every domain in input order.
    fn load_domains(&self) -> Result<Vec<Domain>> {
        let source_paths = resolve_file_path_patterns(&self.input)?;
        source_paths
            .par_iter()
            .map(|source_path| -> Result<Domain> {
                let source = std::fs::read(source_path)
                    .with_context(|| format!("failed to read source file {}", source_path.display()))?;
                let domain = protocol_dts::load::domain_from_slice(&source)
                    .with_context(|| format!("failed to parse protocol file {}", source_path.display()))?;
                tracing::info!("{} loaded.", source_path.display());
                Ok(domain)
            })
            .collect()
    }

    fn build(&self) -> Result<protocol_dts::ast::Namespace> {
        let domains = self.load_domains()?;
        let generator = self.generator();
        tracing::debug!(config = ?generator.config(), domains = domains.len(), "generating");
        Ok(generator.convert_protocol(&self.namespace, &domains))
    }
}

impl GenerateOut {
    fn context(&self) -> SerializationContext {
        if self.tabs {
            SerializationContext::new(0, "\t")
        } else {
            SerializationContext::with_tab_width(self.indent_width)
        }
    }
}

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }
    pub fn run(&self) -> Result<()> {
        match &self.cmd {
            Command::Generate(target) => {
                let root = target.input_settings.build()?;
                if target.strict {
                    report(protocol_dts::validate::validate(&root))?;
                }
                let text = protocol_dts::render_to_string(&root, &target.context())?;

                if let Some(out) = target.out.as_ref() {
                    if let Some(parent) = out.parent() {
                        std::fs::create_dir_all(parent)
                            .with_context(|| format!("failed to create {}", parent.display()))?;
                    }
                    std::fs::write(out, &text).with_context(|| format!("failed to write {}", out.display()))?;
                } else {
                    print!("{text}");
                }
                tracing::info!("Done!");
            }
            Command::Validate(target) => {
                let root = target.input_settings.build()?;
                report(protocol_dts::validate::validate(&root))?;
                tracing::info!("no issues found");
            }
        }
        Ok(())
    }
}

// ————————————————————————————————————————————————————————————————————————————
// INTERNAL HELPERS
// ————————————————————————————————————————————————————————————————————————————

fn report(issues: Vec<protocol_dts::Issue>) -> Result<()> {
    if issues.is_empty() {
        return Ok(());
    }
    for issue in &issues {
        tracing::warn!("{issue}");
    }
    bail!(protocol_dts::Error::Invalid { issues })
}

fn resolve_file_path_patterns<I>(patterns: I) -> Result<Vec<PathBuf>>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    fn has_glob_chars(s: &str) -> bool {
        // Minimal glob detection for the `glob` crate syntax.
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
                bail!("glob pattern matched no files: {pattern}");
            }
        } else if Path::new(pattern).is_dir() {
            out.extend(json_files_in(Path::new(pattern))?);
        } else {
            out.push(PathBuf::from(pattern));
        }
    }

    Ok(out)
}

/// Sorted so the domain order does not depend on the filesystem.
fn json_files_in(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).with_context(|| format!("failed to list {}", dir.display()))? {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
