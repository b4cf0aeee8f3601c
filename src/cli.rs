use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "hey-account")]
#[command(author = "hey")]
#[command(version)]
#[command(about = "Connect a Stacks wallet and see your HEY balance")]
pub struct Args {
    /// Tick rate in ticks per second
    #[arg(short, long, default_value_t = 4.0)]
    pub tick_rate: f64,

    /// Frame rate in frames per second
    #[arg(short, long, default_value_t = 30.0)]
    pub frame_rate: f64,

    /// Network to connect to (mainnet, testnet)
    #[arg(short, long, default_value = "mainnet")]
    pub network: String,

    /// Custom Stacks API URL (overrides network default)
    #[arg(long)]
    pub api_url: Option<String>,

    /// Token contract principal (overrides network default)
    #[arg(long)]
    pub token_contract: Option<String>,

    /// Data directory path
    #[arg(long)]
    pub data_dir: Option<String>,

    /// Disable mouse capture (hover falls back to the keyboard)
    #[arg(long)]
    pub no_mouse: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["hey-account"]);
        assert_eq!(args.network, "mainnet");
        assert_eq!(args.frame_rate, 30.0);
        assert!(!args.no_mouse);
        assert!(args.api_url.is_none());
    }

    #[test]
    fn test_overrides() {
        let args = Args::parse_from([
            "hey-account",
            "--network",
            "testnet",
            "--api-url",
            "http://localhost:3999",
            "--no-mouse",
        ]);
        assert_eq!(args.network, "testnet");
        assert_eq!(args.api_url.as_deref(), Some("http://localhost:3999"));
        assert!(args.no_mouse);
    }
}
