//   ____             _____
//  |  _ \ __      __|  ___|  ___   _ __   __ _   ___
//  | |_) |\ \ /\ / /| |_    / _ \ | '__| / _` | / _ \
//  |  __/  \ V  V / |  _|  | (_) || |   | (_| ||  __/
//  |_|      \_/\_/  |_|     \___/ |_|    \__, | \___|
//                                        |___/
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2026-10-18
// Version : 0.1.0
// License : Mulan PSL v2
//
// Random password generator with strength rating.

use std::path::PathBuf;
use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};

use pwforge::configtool::ConfigFile;
use pwforge::setclip;

mod commands;

use commands::password_gen::{self, GenOverrides};
use commands::testpass;

#[derive(Debug, Parser)]
#[command(name = "pwforge")]
#[command(version, about = "Generate random passwords and rate their strength", long_about = None)]
struct Cli {
    /// Path to a JSON config file with default options
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Generate a new random password
    Gen(GenArgs),

    /// Test password strength
    Testpass(TestpassArgs),
}

#[derive(Debug, Parser)]
struct TestpassArgs {
    /// Password to test
    password: String,
}

#[derive(Debug, Parser)]
struct GenArgs {
    /// Length of the password
    #[arg(short, long)]
    length: Option<usize>,

    /// Complexity tier: low, medium or high
    #[arg(short, long)]
    complexity: Option<String>,

    /// Exclude uppercase letters
    #[arg(long, default_value_t = false)]
    no_uppercase: bool,

    /// Exclude lowercase letters
    #[arg(long, default_value_t = false)]
    no_lowercase: bool,

    /// Exclude numbers
    #[arg(long, default_value_t = false)]
    no_numbers: bool,

    /// Exclude special characters
    #[arg(long, default_value_t = false)]
    no_special: bool,

    /// Extra characters added to the pool
    #[arg(long)]
    contains: Option<String>,

    /// Characters removed from the pool
    #[arg(long)]
    excludes: Option<String>,

    /// Ask for every option interactively
    #[arg(short, long, default_value_t = false)]
    interactive: bool,

    /// Do not copy the password to the clipboard
    #[arg(long, default_value_t = false)]
    no_copy: bool,

    /// Clear the clipboard after this many seconds
    #[arg(long)]
    clear_after: Option<u64>,
}

impl From<&GenArgs> for GenOverrides {
    fn from(args: &GenArgs) -> Self {
        Self {
            length: args.length,
            complexity: args.complexity.clone(),
            no_uppercase: args.no_uppercase,
            no_lowercase: args.no_lowercase,
            no_numbers: args.no_numbers,
            no_special: args.no_special,
            contains: args.contains.clone(),
            excludes: args.excludes.clone(),
        }
    }
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn main() -> Result<()> {
    // 作为剪贴板清理进程运行
    if let Some(seconds) = setclip::clear_request() {
        init_logger(0);
        return setclip::run_clear_helper(seconds).context("Clipboard helper failed");
    }

    let cli = Cli::parse();
    init_logger(cli.verbose);

    match cli.command {
        Commands::Gen(args) => {
            let config = ConfigFile::load_or_default(cli.config.as_deref())
                .context("Failed to load configuration")?;
            password_gen::generate_random(
                &config,
                GenOverrides::from(&args),
                args.interactive,
                args.no_copy,
                args.clear_after,
            )
        },
        Commands::Testpass(args) => testpass::test_password(&args.password),
    }
}
