use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Args {
    /// Path to the configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch posts and write a static page to the output directory
    Build(ViewArgs),
    /// Fetch posts and print the page as plain text
    Show(ViewArgs),
    /// Build a live page and drive it over a websocket
    Serve,
    /// Remove the output directory
    Clean,
}

#[derive(Clone, Debug, Default, clap::Args)]
pub struct ViewArgs {
    /// Only show posts whose title contains this text
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Press "load more" this many times
    #[arg(short, long, default_value_t = 0)]
    pub more: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_view_flags() {
        let args =
            Args::try_parse_from(["postboard", "show", "--search", "lorem", "-m", "2"]).unwrap();

        assert_eq!(args.config, PathBuf::from("config.toml"));
        match args.command {
            Command::Show(view) => {
                assert_eq!(view.search, "lorem");
                assert_eq!(view.more, 2);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn global_config_path() {
        let args = Args::try_parse_from(["postboard", "-c", "site.toml", "build"]).unwrap();

        assert_eq!(args.config, PathBuf::from("site.toml"));
        assert!(matches!(args.command, Command::Build(ref view) if view.search.is_empty()));
    }

    #[test]
    fn requires_a_command() {
        assert!(Args::try_parse_from(["postboard"]).is_err());
    }
}
