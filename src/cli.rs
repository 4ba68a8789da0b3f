//! CLI definitions and entry point

use clap::Parser;
use clap::error::ErrorKind;

use embedfiles::config::{Config, DEFAULT_PACKAGE, DEFAULT_VAR, Output};

/// embedfiles - Embed files into a generated Rust module
#[derive(Parser, Debug)]
#[command(
    name = "embedfiles",
    version,
    about = "Embed files into a generated Rust module",
    long_about = "Reads one or more files and embeds them into a .rs source file\n\
                  for compilation into a program.\n\n\
                  The generated module exposes a read-only file system whose\n\
                  open() returns a seekable reader over the embedded bytes."
)]
pub struct Cli {
    /// Glob patterns selecting the files to embed
    #[arg(value_name = "PATTERN", required = true)]
    pub patterns: Vec<String>,

    /// File to write the generated module to; "-" means stdout
    #[arg(long, default_value = "-")]
    pub filename: String,

    /// Name of the module wrapping the generated items
    #[arg(long, default_value = DEFAULT_PACKAGE)]
    pub package: String,

    /// Name of the static holding the assets; a leading capital makes it `pub`
    #[arg(long = "var", default_value = DEFAULT_VAR)]
    pub var: String,

    /// Make open() return the HttpFileSystem-compatible boxed handle
    #[arg(long)]
    pub include_http: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Build the generation config from the parsed arguments
    #[must_use]
    pub fn config(&self) -> Config {
        Config::new(&self.package, &self.var)
            .with_output(Output::from_arg(&self.filename))
            .with_include_http(self.include_http)
    }
}

/// Run the CLI
///
/// Help and version requests print and exit 0; every other argument error
/// is returned so it shares the fatal exit code.
pub fn run() -> anyhow::Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        },
        Err(err) => return Err(err.into()),
    };

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    embedfiles::generate(&cli.config(), &cli.patterns)?;
    Ok(())
}
