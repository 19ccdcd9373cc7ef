use anyhow::{Context, Result, bail};
use markdown_sitegen_config::Config;
use markdown_sitegen_engine::{copy_dir_recursive, io, markdown_to_html};
use std::{env, path::PathBuf, process};

const USAGE: &str = "\
Usage:
  markdown-sitegen [build]                     copy static assets into the output directory
  markdown-sitegen render <input.md> [out.html] convert one markdown file (stdout if no output)
  markdown-sitegen init                        write a default config file";

enum Command {
    Build,
    Render {
        input: PathBuf,
        output: Option<PathBuf>,
    },
    Init,
}

fn parse_args(args: &[String]) -> Result<Command> {
    match args {
        [] => Ok(Command::Build),
        [cmd] if cmd == "build" => Ok(Command::Build),
        [cmd] if cmd == "init" => Ok(Command::Init),
        [cmd, input] if cmd == "render" => Ok(Command::Render {
            input: PathBuf::from(input),
            output: None,
        }),
        [cmd, input, output] if cmd == "render" => Ok(Command::Render {
            input: PathBuf::from(input),
            output: Some(PathBuf::from(output)),
        }),
        _ => bail!("unrecognized arguments: {}\n\n{USAGE}", args.join(" ")),
    }
}

fn load_config() -> Result<Config> {
    let config_path = Config::config_path();
    log::info!("Config path: {}", config_path.display());

    match Config::load()? {
        Some(config) => {
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        }
        None => {
            log::info!("No config file found, using defaults");
            Ok(Config::default())
        }
    }
}

fn build() -> Result<()> {
    let config = load_config()?;
    copy_dir_recursive(&config.static_path, &config.output_path).with_context(|| {
        format!(
            "copying {} to {}",
            config.static_path.display(),
            config.output_path.display()
        )
    })?;
    Ok(())
}

fn render(input: PathBuf, output: Option<PathBuf>) -> Result<()> {
    match output {
        Some(output) => io::convert_file(&input, &output)?,
        None => {
            let markdown = io::read_file(&input)?;
            let html = markdown_to_html(&markdown)
                .with_context(|| format!("converting {}", input.display()))?;
            println!("{html}");
        }
    }
    Ok(())
}

fn init() -> Result<()> {
    let config_path = Config::config_path();
    if config_path.exists() {
        bail!("config file already exists at {}", config_path.display());
    }
    Config::default().save()?;
    log::info!("Wrote default config to {}", config_path.display());
    Ok(())
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Build => build(),
        Command::Render { input, output } => render(input, output),
        Command::Init => init(),
    }
}

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let result = parse_args(&args).and_then(run);

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
