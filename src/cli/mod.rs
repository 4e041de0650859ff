use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "jokefarm", version, about = "Interactive joke farming wizard")]
pub struct Args {
    /// Model sent to the gateway (overrides the config file).
    #[arg(long)]
    pub model: Option<String>,

    /// Where to write the session JSON; default is timestamp-derived.
    #[arg(long)]
    pub session_out: Option<String>,

    /// Do not save the session.
    #[arg(long, default_value_t = false)]
    pub no_save: bool,

    /// Optional TOML config file.
    #[arg(long)]
    pub config: Option<String>,

    /// Per-request gateway timeout (overrides the config file).
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Hide the spinner shown during gateway calls.
    #[arg(long, default_value_t = false)]
    pub no_progress: bool,

    #[arg(long, default_value_t = false)]
    pub debug: bool,
}
