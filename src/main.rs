use anyhow::Result;
use clap::{Parser, Subcommand};

use cardbank::cli::{
    handle_account_command, handle_card_command, handle_deposit_command, handle_send_command,
    handle_tax_command, handle_withdraw_command, Credentials,
};
use cardbank::config::{BankPaths, Settings};
use cardbank::logging;
use cardbank::storage::{FileSnapshotStore, SnapshotStore};

#[derive(Parser)]
#[command(
    name = "cardbank",
    author = "Kaylee Beyene",
    version,
    about = "Command-line banking simulator",
    long_about = "cardbank keeps accounts and payment cards in a local snapshot file. \
                  Each card type charges its own tax on withdrawals, deposits and \
                  transfers between cards."
)]
struct Cli {
    /// Account login
    #[arg(long, global = true, env = "CARDBANK_LOGIN")]
    login: Option<String>,

    /// Account password (prompted for when omitted)
    #[arg(long, global = true, env = "CARDBANK_PASSWORD", hide_env_values = true)]
    password: Option<String>,

    /// Increase diagnostic output (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Account management commands
    #[command(subcommand)]
    Account(cardbank::cli::AccountCommands),

    /// Card management commands
    #[command(subcommand)]
    Card(cardbank::cli::CardCommands),

    /// Withdraw money from a card
    Withdraw {
        /// Card number or position from 'card list'
        card: String,
        /// Amount to withdraw
        #[arg(allow_negative_numbers = true)]
        amount: f64,
    },

    /// Put money on a card
    Deposit {
        /// Card number or position from 'card list'
        card: String,
        /// Amount to deposit
        #[arg(allow_negative_numbers = true)]
        amount: f64,
    },

    /// Send money from one of your cards to any card
    Send {
        /// Your card number or position from 'card list'
        from: String,
        /// Recipient's 16-digit card number
        to: String,
        /// Amount to send
        #[arg(allow_negative_numbers = true)]
        amount: f64,
    },

    /// Show the taxes a card type charges on an amount
    Tax {
        /// Card type (standard, premium, virtual)
        kind: String,
        /// Amount to price
        #[arg(allow_negative_numbers = true)]
        amount: f64,
    },

    /// Initialize the data directory
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = BankPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    logging::set_up(cli.verbose, &settings.log_level);

    // A snapshot that can't be read stops the program before any command runs
    let store = FileSnapshotStore::open(&paths, settings.snapshot_format)?;
    store.load_all()?;

    let credentials = Credentials::new(cli.login, cli.password);

    match cli.command {
        Some(Commands::Account(cmd)) => {
            handle_account_command(&store, &credentials, cmd)?;
        }
        Some(Commands::Card(cmd)) => {
            handle_card_command(&store, &credentials, cmd)?;
        }
        Some(Commands::Withdraw { card, amount }) => {
            handle_withdraw_command(&store, &credentials, &card, amount)?;
        }
        Some(Commands::Deposit { card, amount }) => {
            handle_deposit_command(&store, &credentials, &card, amount)?;
        }
        Some(Commands::Send { from, to, amount }) => {
            handle_send_command(&store, &credentials, &from, &to, amount)?;
        }
        Some(Commands::Tax { kind, amount }) => {
            handle_tax_command(&kind, amount)?;
        }
        Some(Commands::Init) => {
            println!("Initializing cardbank at: {}", paths.base_dir().display());
            paths.ensure_directories()?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!("Snapshot file: {}", store.path().display());
            println!();
            println!("Run 'cardbank --login <login> account create --name <Name> --age <age>' to open an account.");
        }
        Some(Commands::Config) => {
            println!("cardbank Configuration");
            println!("======================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Snapshot file:  {}", store.path().display());
            println!();
            println!("Settings:");
            println!("  Snapshot format: {}", settings.snapshot_format);
            println!("  Log level:       {}", settings.log_level);
        }
        None => {
            println!("cardbank - command-line banking simulator");
            println!();
            println!("Run 'cardbank --help' for usage information.");
        }
    }

    Ok(())
}
