use clap::Parser;

#[derive(Debug, Default, Parser)]
#[command(author, about, version)]
pub struct CliArgs {
    /// Path to the configuration file. Built-in defaults are used if omitted.
    #[clap(long, env = "CONFIG_FILE")]
    pub config_file: Option<String>,
    /// Port to listen on, overriding the configured socket address.
    #[clap(long, env = "PORT")]
    pub port: Option<u16>,
}
