//! Command-line configuration.

use std::path::PathBuf;

use clap::Parser;

pub const DEFAULT_URL: &str = "ws://localhost:8080";

#[derive(Parser, Debug)]
#[command(name = "player", about = "Plays one game of Blokus Duo against a websocket server")]
pub struct Args {
    /// Game server websocket URL.
    #[arg(long, default_value = DEFAULT_URL)]
    pub url: String,

    /// Write a JSON game record here when the game ends.
    #[arg(long)]
    pub record: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `blokus_player=trace`. Overrides RUST_LOG.
    #[arg(long)]
    pub log_level: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["player"]).unwrap();
        assert_eq!(args.url, DEFAULT_URL);
        assert_eq!(args.record, None);
        assert_eq!(args.log_level, None);
    }

    #[test]
    fn test_all_flags() {
        let args = Args::try_parse_from([
            "player",
            "--url",
            "ws://10.0.0.2:9000",
            "--record",
            "game.json",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(args.url, "ws://10.0.0.2:9000");
        assert_eq!(args.record, Some(PathBuf::from("game.json")));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_rejects_unknown_flag() {
        assert!(Args::try_parse_from(["player", "--depth", "3"]).is_err());
    }
}
