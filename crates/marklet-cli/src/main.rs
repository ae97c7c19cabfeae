use anyhow::{Context, Result, bail};
use marklet_config::Config;
use marklet_engine::Renderer;
use std::{
    env,
    io::{self, Read, Write},
    path::{Path, PathBuf},
    process,
};

const USAGE: &str = "Usage: marklet [--config PATH] [--init] [FILE]";

#[derive(Debug, Default, PartialEq)]
struct Args {
    config: Option<PathBuf>,
    init: bool,
    help: bool,
    /// `None` or `-` reads stdin.
    input: Option<PathBuf>,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Args> {
    let mut parsed = Args::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => parsed.help = true,
            "--init" => parsed.init = true,
            "--config" => {
                let Some(path) = args.next() else {
                    bail!("--config needs a path");
                };
                parsed.config = Some(PathBuf::from(path));
            }
            flag if flag.starts_with("--") => bail!("unknown option {flag}"),
            _ if parsed.input.is_some() => bail!("only one input file can be given"),
            _ => parsed.input = Some(PathBuf::from(&arg)),
        }
    }

    Ok(parsed)
}

fn load_renderer(config_path: &Path, explicit: bool) -> Result<Renderer> {
    match Config::load_from_path(config_path)? {
        Some(config) => {
            log::info!("Using config file {}", config_path.display());
            Ok(config.renderer()?)
        }
        None if explicit => bail!("config file '{}' does not exist", config_path.display()),
        None => {
            log::info!(
                "No config file at {}, using the default dialect",
                config_path.display()
            );
            Ok(Renderer::default())
        }
    }
}

fn init_config(config_path: &Path) -> Result<()> {
    if config_path.exists() {
        bail!("config file '{}' already exists", config_path.display());
    }
    Config::default().save_to_path(config_path)?;
    eprintln!("Wrote default config to {}", config_path.display());
    Ok(())
}

fn read_input(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read '{}'", path.display())),
        _ => {
            let mut content = String::new();
            io::stdin()
                .read_to_string(&mut content)
                .context("failed to read stdin")?;
            Ok(content)
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = match parse_args(env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("{USAGE}");
            process::exit(1);
        }
    };
    if args.help {
        println!("{USAGE}");
        return Ok(());
    }

    let explicit = args.config.is_some();
    let config_path = match args.config {
        Some(path) => Config::expand_path(&path).unwrap_or(path),
        None => Config::config_path(),
    };
    log::debug!("Config path: {}", config_path.display());

    if args.init {
        return init_config(&config_path);
    }

    let renderer = load_renderer(&config_path, explicit)?;
    let source = read_input(args.input.as_deref())?;
    let html = renderer.render(&source)?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(html.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
