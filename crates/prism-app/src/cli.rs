use clap::Parser;

/// Prism: a rotating wireframe cube with a chat companion.
#[derive(Parser, Debug)]
#[command(name = "prism", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Log level override (trace, debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}
