use clap::Parser;
use hikari::{
    config::HighlighterConfig, formatter::wrap_code_block, HighlightResult, Highlighter,
};
use std::{
    io::{self, Read, Write},
    path::PathBuf,
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Highlight source code as HTML", long_about = None)]
struct Cli {
    /// Source file to highlight; reads stdin when omitted
    file: Option<PathBuf>,

    /// Language of the source (case-insensitive)
    #[arg(short, long)]
    language: Option<String>,

    /// Path to config file
    #[arg(short, long, default_value = "hikari.json")]
    config: PathBuf,

    /// Wrap the output in <pre><code class="language-...">
    #[arg(short, long)]
    wrap: bool,

    /// Print registered languages and aliases, then exit
    #[arg(long)]
    list_languages: bool,

    /// Enable debug mode
    #[arg(short, long)]
    verbose: bool,
}

fn load_config(cli: &Cli) -> HighlightResult<HighlighterConfig> {
    if cli.config.exists() {
        let config = HighlighterConfig::from_file(&cli.config)?;
        info!("config loaded from {:?}", cli.config);
        Ok(config)
    } else {
        // Default config
        Ok(HighlighterConfig::default())
    }
}

fn read_source(cli: &Cli) -> HighlightResult<String> {
    match &cli.file {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut source = String::new();
            io::stdin().read_to_string(&mut source)?;
            Ok(source)
        }
    }
}

fn run(cli: &Cli) -> HighlightResult<()> {
    let config = load_config(cli)?;
    debug!("config: {:?}", config);

    let highlighter = Highlighter::from_config(&config)?;
    let mut stdout = io::stdout().lock();

    if cli.list_languages {
        for language in highlighter.registry().languages() {
            writeln!(stdout, "{}", language)?;
        }
        for (alias, target) in highlighter.registry().aliases() {
            writeln!(stdout, "{} -> {}", alias, target)?;
        }
        return Ok(());
    }

    let source = read_source(cli)?;
    let language = cli
        .language
        .clone()
        .unwrap_or_else(|| config.default_language.clone());
    debug!("Highlighting {} bytes as {}", source.len(), language);

    let fragment = highlighter.highlight(&source, Some(&language));
    let output = if cli.wrap {
        wrap_code_block(&fragment, &language)
    } else {
        fragment
    };

    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
