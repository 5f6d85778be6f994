use anyhow::{Context, Result};
use kraper_config::Config;
use kraper_engine::{ExportFormat, ExportPlan, io, recompile_with_report, serialize};
use std::path::{Path, PathBuf};
use std::{env, process};

const USAGE: &str = "Usage:
  kraper-cli render <paper.json> [out.tex]
  kraper-cli recompile <paper.json> <edited.tex> [out.json]
  kraper-cli export <paper.json> <pdf|docx>";

#[derive(Debug, PartialEq)]
enum Command {
    Render {
        paper: PathBuf,
        output: Option<PathBuf>,
    },
    Recompile {
        paper: PathBuf,
        source: PathBuf,
        output: Option<PathBuf>,
    },
    Export {
        paper: PathBuf,
        format: ExportFormat,
    },
}

fn parse_args(args: &[String]) -> Result<Command, String> {
    let rest: Vec<&str> = args.iter().skip(1).map(String::as_str).collect();
    match rest.as_slice() {
        ["render", paper] => Ok(Command::Render {
            paper: PathBuf::from(paper),
            output: None,
        }),
        ["render", paper, output] => Ok(Command::Render {
            paper: PathBuf::from(paper),
            output: Some(PathBuf::from(output)),
        }),
        ["recompile", paper, source] => Ok(Command::Recompile {
            paper: PathBuf::from(paper),
            source: PathBuf::from(source),
            output: None,
        }),
        ["recompile", paper, source, output] => Ok(Command::Recompile {
            paper: PathBuf::from(paper),
            source: PathBuf::from(source),
            output: Some(PathBuf::from(output)),
        }),
        ["export", paper, format] => Ok(Command::Export {
            paper: PathBuf::from(paper),
            format: format.parse()?,
        }),
        [] => Err("no command given".to_string()),
        [command, ..] => Err(format!("unrecognised arguments for '{command}'")),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args: Vec<String> = env::args().collect();
    let command = match parse_args(&args) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("{USAGE}");
            process::exit(1);
        }
    };

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Ignoring config file: {e}");
            None
        }
    };

    run(command, config.as_ref())
}

fn resolve(config: Option<&Config>, path: &Path) -> PathBuf {
    match config {
        Some(config) => config.resolve_paper(path),
        None => path.to_path_buf(),
    }
}

fn run(command: Command, config: Option<&Config>) -> Result<()> {
    match command {
        Command::Render { paper, output } => {
            let paper_path = resolve(config, &paper);
            let paper = io::read_paper(&paper_path)
                .with_context(|| format!("Failed to load paper {}", paper_path.display()))?;

            let latex = serialize(&paper);
            if latex.is_empty() {
                log::warn!("{} has no sections, nothing to render", paper_path.display());
            }

            match output {
                Some(output) => {
                    io::write_source(&output, &latex)?;
                    log::info!("Wrote {}", output.display());
                }
                None => println!("{latex}"),
            }
        }
        Command::Recompile {
            paper,
            source,
            output,
        } => {
            let paper_path = resolve(config, &paper);
            let mut paper = io::read_paper(&paper_path)
                .with_context(|| format!("Failed to load paper {}", paper_path.display()))?;
            let edited = io::read_source(&source)
                .with_context(|| format!("Failed to load source {}", source.display()))?;

            let (sections, report) = recompile_with_report(&edited, &paper.sections);
            paper.sections = sections;

            if report.captured() == 0 {
                log::warn!("No \\section markers found in {}", source.display());
            }
            for name in &report.updated {
                log::info!("Updated section '{name}'");
            }
            for name in &report.inserted {
                log::info!("Added section '{name}'");
            }

            let output = output.unwrap_or(paper_path);
            io::write_paper(&output, &paper)?;
            log::info!("Wrote {}", output.display());
        }
        Command::Export { paper, format } => {
            let paper_path = resolve(config, &paper);
            let paper = io::read_paper(&paper_path)
                .with_context(|| format!("Failed to load paper {}", paper_path.display()))?;

            let plan = ExportPlan::build(&paper, format);
            println!("{}", serde_json::to_string_pretty(&plan)?);
        }
    }

    Ok(())
}
