use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use console::{Term, style};
use devws_core::{
    ContentProvider, ContentSource, Devfile, FileContentProvider, KUBERNETES_TOOL_TYPE,
    ManifestList, OPENSHIFT_TOOL_TYPE, Tool, UrlContentProvider, convert_devfile,
    filter_by_selector, resolve_machine_name,
};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// devws - Convert devfiles into workspace environment recipes
#[derive(Parser)]
#[command(name = "devws")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Yaml,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a devfile into a workspace config
    Convert {
        /// Path to the devfile (default: devfile.yaml)
        #[arg(default_value = "devfile.yaml")]
        devfile: PathBuf,

        /// Write the workspace config here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value = "yaml")]
        format: OutputFormat,

        /// Resolve tool references against this base URL instead of the
        /// devfile's directory
        #[arg(long)]
        registry: Option<String>,
    },

    /// Show what each recipe-type tool would contribute, without converting
    Inspect {
        /// Path to the devfile (default: devfile.yaml)
        #[arg(default_value = "devfile.yaml")]
        devfile: PathBuf,

        /// Resolve tool references against this base URL instead of the
        /// devfile's directory
        #[arg(long)]
        registry: Option<String>,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .without_time()
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Convert {
            devfile,
            output,
            format,
            registry,
        } => cmd_convert(&devfile, output.as_deref(), format, registry.as_deref()),
        Commands::Inspect { devfile, registry } => cmd_inspect(&devfile, registry.as_deref()),
    }
}

fn load_devfile(term: &Term, path: &Path) -> Result<Devfile> {
    if !path.exists() {
        term.write_line(&format!(
            "{} Devfile not found: {}",
            style("error:").red().bold(),
            path.display()
        ))?;
        std::process::exit(1);
    }

    match Devfile::from_file(path) {
        Ok(devfile) => Ok(devfile),
        Err(e) => {
            term.write_line(&format!(
                "{} Failed to read devfile: {}",
                style("error:").red().bold(),
                e
            ))?;
            std::process::exit(1);
        }
    }
}

/// Pick the content provider: the factory/registry URL when given, the
/// devfile's own directory otherwise.
fn provider_for(devfile_path: &Path, registry: Option<&str>) -> Box<dyn ContentProvider> {
    match registry {
        Some(base) => Box::new(UrlContentProvider::new(base)),
        None => Box::new(FileContentProvider::new(
            devfile_path.parent().unwrap_or(Path::new(".")),
        )),
    }
}

fn cmd_convert(
    devfile_path: &Path,
    output: Option<&Path>,
    format: OutputFormat,
    registry: Option<&str>,
) -> Result<()> {
    let term = Term::stderr();
    let devfile = load_devfile(&term, devfile_path)?;

    term.write_line(&format!(
        "{} Converting {}",
        style("::").cyan().bold(),
        devfile_path.display()
    ))?;

    let provider = provider_for(devfile_path, registry);

    let config = match convert_devfile(&devfile, ContentSource::Provider(provider.as_ref())) {
        Ok(config) => config,
        Err(e) => {
            term.write_line(&format!("{} {}", style("error:").red().bold(), e))?;
            std::process::exit(1);
        }
    };

    let rendered = match format {
        OutputFormat::Yaml => serde_yaml::to_string(&config)?,
        OutputFormat::Json => serde_json::to_string_pretty(&config)?,
    };

    match output {
        Some(path) => {
            std::fs::write(path, &rendered)?;
            term.write_line(&format!(
                "{} Wrote workspace config to {}",
                style("::").green().bold(),
                path.display()
            ))?;
        }
        None => println!("{rendered}"),
    }

    Ok(())
}

fn cmd_inspect(devfile_path: &Path, registry: Option<&str>) -> Result<()> {
    let term = Term::stderr();
    let devfile = load_devfile(&term, devfile_path)?;

    let provider = provider_for(devfile_path, registry);

    let recipe_tools: Vec<&Tool> = devfile
        .tools
        .iter()
        .filter(|t| t.tool_type == KUBERNETES_TOOL_TYPE || t.tool_type == OPENSHIFT_TOOL_TYPE)
        .collect();

    if recipe_tools.is_empty() {
        term.write_line(&format!(
            "{} No recipe-type tools in {}",
            style("::").cyan().bold(),
            devfile_path.display()
        ))?;
        return Ok(());
    }

    for tool in recipe_tools {
        term.write_line(&format!(
            "{} {} {}",
            style("::").cyan().bold(),
            style(&tool.name).bold(),
            style(format!("({})", tool.tool_type)).dim()
        ))?;

        let content = match tool.local_content.clone() {
            Some(content) => content,
            None => match provider.fetch(&tool.local) {
                Ok(content) => content,
                Err(e) => {
                    term.write_line(&format!(
                        "   {} fetching {}: {}",
                        style("error:").red().bold(),
                        tool.local,
                        e
                    ))?;
                    continue;
                }
            },
        };

        let list = match ManifestList::from_yaml(&content) {
            Ok(list) => list,
            Err(e) => {
                term.write_line(&format!(
                    "   {} parsing {}: {}",
                    style("error:").red().bold(),
                    tool.local,
                    e
                ))?;
                continue;
            }
        };

        let total = list.items.len();
        let items = if tool.selector.is_empty() {
            list.items
        } else {
            filter_by_selector(list.items, &tool.selector)
        };

        for item in &items {
            term.write_line(&format!(
                "   {} {} {}",
                style("+").green().bold(),
                item.kind,
                item.name().unwrap_or("(unnamed)")
            ))?;
        }
        term.write_line(&format!(
            "   {} object(s) of {} retained",
            items.len(),
            total
        ))?;

        match resolve_machine_name(&items) {
            Some(machine) => {
                term.write_line(&format!("   commands would target {}", style(machine).bold()))?;
            }
            None => {
                term.write_line("   no unambiguous command target")?;
            }
        }
    }

    Ok(())
}
