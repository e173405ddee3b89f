use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

use team_picker::config::{default_config_path, FileConfig, Overrides, Settings};
use team_picker::logging::init_file_logger;
use team_picker::source::fetch_with_retry;
use team_picker::state::derive_view;

#[derive(Parser)]
#[command(name = "team_picker")]
#[command(about = "Choisissez des membres d'équipe dans une liste déroulante, au terminal")]
#[command(version)]
struct Cli {
    /// URL d'un tableau JSON d'utilisateurs
    #[arg(long, conflicts_with = "file")]
    url: Option<String>,

    /// Fichier JSON local à la place de l'URL
    #[arg(long)]
    file: Option<PathBuf>,

    /// Fichier de configuration (défaut : ~/.config/team_picker/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Fichier de log
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Verbosité des logs (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Affiche la liste des membres (non-interactif)
    List {
        /// Trie par nom
        #[arg(long)]
        sort: bool,

        /// Ne garde que les noms contenant ce texte
        #[arg(long)]
        filter: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(default_config_path);
    let file_config = FileConfig::load_optional(&config_path)?;
    let overrides = Overrides {
        url: cli.url,
        file: cli.file,
        log_file: cli.log_file,
        verbosity: cli.verbose,
    };
    let settings = Settings::resolve(file_config, &overrides, &config_path)?;

    init_file_logger(&settings.log_file, settings.log_level)?;

    let source = settings.build_source();

    match cli.command {
        Some(Commands::List { sort, filter }) => {
            // Mode non-interactif : affiche la liste.
            let items = fetch_with_retry(source.as_ref(), &settings.query_options())?;
            let filter = filter.unwrap_or_default();
            for entity in derive_view(Some(items.as_slice()), &filter, !filter.is_empty(), sort) {
                println!("{}", entity);
            }
        }
        None => {
            // Mode par défaut : lance la TUI interactive.
            let state = team_picker::app::build_state(source, settings.query_options());
            team_picker::app::run(state)?;
        }
    }

    Ok(())
}
