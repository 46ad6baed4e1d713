#![deny(unsafe_code)]

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level as TraceLevel;
use tracing::info;
use tracing_subscriber::FmtSubscriber;

use quest_launcher_config::config::{CategoryType, ConfigModel, ConfigSession, ConfigStore};

#[derive(Parser)]
#[command(name = "quest-launcher-config")]
#[command(version)]
#[command(about = "Inspect and edit Quest app launcher preferences", long_about = None)]
struct Cli {
    /// Directory holding config.json (defaults to the platform data dir)
    #[arg(long, global = true)]
    config_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the effective configuration as JSON
    Show,
    /// Print the config file path
    Path,
    /// Change one or more settings and save
    Set(SetArgs),
    /// Restore default settings and save
    Reset,
}

#[derive(clap::Args)]
struct SetArgs {
    /// Grid rows
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    rows: Option<u32>,

    /// Grid columns
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    cols: Option<u32>,

    /// Include 2D (non-VR) apps
    #[arg(long = "show-2d")]
    show_2d: Option<bool>,

    /// Only show apps listed in the custom app names file
    #[arg(long)]
    show_only_custom: Option<bool>,

    /// How apps are split into tabs
    #[arg(long, value_enum)]
    category: Option<CategoryType>,
}

impl SetArgs {
    fn is_empty(&self) -> bool {
        self.rows.is_none()
            && self.cols.is_none()
            && self.show_2d.is_none()
            && self.show_only_custom.is_none()
            && self.category.is_none()
    }

    /// Copy the given settings onto `config`
    fn apply(&self, config: &mut ConfigModel) {
        if let Some(rows) = self.rows {
            config.grid_size.rows = rows;
        }
        if let Some(cols) = self.cols {
            config.grid_size.cols = cols;
        }
        if let Some(show_2d) = self.show_2d {
            config.show_2d = show_2d;
        }
        if let Some(show_only_custom) = self.show_only_custom {
            config.show_only_custom = show_only_custom;
        }
        if let Some(category) = self.category {
            config.category_type = category;
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let level = if cli.verbose {
        TraceLevel::DEBUG
    } else {
        TraceLevel::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let store = match cli.config_dir {
        Some(dir) => ConfigStore::in_dir(dir),
        None => ConfigStore::at_default_location(),
    };

    run(cli.command, store)
}

fn run(command: Command, store: ConfigStore) -> Result<()> {
    match command {
        Command::Path => println!("{}", store.path().display()),
        Command::Show => {
            let session = ConfigSession::initialize(store);
            println!("{}", session.model().to_json_pretty()?);
        }
        Command::Set(args) => {
            if args.is_empty() {
                bail!("Nothing to set; pass at least one setting");
            }

            let mut session = ConfigSession::initialize(store);
            if !session.update(|config| args.apply(config))? {
                info!("Settings already up to date");
            }
        }
        Command::Reset => ConfigSession::initialize(store).reset()?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use quest_launcher_config::config::GridSize;

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["quest-launcher-config"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_set_args_apply_only_given_fields() {
        let cli = parse(&["set", "--rows", "4", "--category", "none"]);
        let Command::Set(args) = cli.command else {
            panic!("expected set command");
        };
        assert!(!args.is_empty());

        let mut config = ConfigModel {
            show_2d: true,
            ..ConfigModel::default()
        };
        args.apply(&mut config);

        assert_eq!(config.grid_size, GridSize { rows: 4, cols: 3 });
        assert_eq!(config.category_type, CategoryType::None);
        assert!(config.show_2d);
        assert!(!config.show_only_custom);
    }

    #[test]
    fn test_set_parses_bool_values() {
        let cli = parse(&["set", "--show-2d", "true", "--show-only-custom", "false"]);
        let Command::Set(args) = cli.command else {
            panic!("expected set command");
        };
        assert_eq!(args.show_2d, Some(true));
        assert_eq!(args.show_only_custom, Some(false));
    }

    #[test]
    fn test_set_rejects_zero_rows() {
        let argv = ["quest-launcher-config", "set", "--rows", "0"];
        assert!(Cli::try_parse_from(argv).is_err());
    }

    #[test]
    fn test_set_without_settings_fails() {
        let dir = tempfile::tempdir().unwrap();
        let store = ConfigStore::in_dir(dir.path());
        let cli = parse(&["set"]);

        let err = run(cli.command, store.clone()).unwrap_err();
        assert!(err.to_string().contains("Nothing to set"));
        assert!(!store.path().exists());
    }

    #[test]
    fn test_set_then_reset_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = ConfigStore::in_dir(dir.path());

        run(parse(&["set", "--cols", "5", "--show-2d", "true"]).command, store.clone()).unwrap();
        let session = ConfigSession::initialize(store.clone());
        assert_eq!(session.model().grid_size, GridSize { rows: 3, cols: 5 });
        assert!(session.model().show_2d);

        run(parse(&["reset"]).command, store.clone()).unwrap();
        let session = ConfigSession::initialize(store);
        assert_eq!(session.model(), &ConfigModel::default());
    }

    #[test]
    fn test_global_config_dir_after_subcommand() {
        let cli = parse(&["show", "--config-dir", "/tmp/launcher", "-v"]);
        assert_eq!(cli.config_dir, Some(PathBuf::from("/tmp/launcher")));
        assert!(cli.verbose);
        assert!(matches!(cli.command, Command::Show));
    }
}
