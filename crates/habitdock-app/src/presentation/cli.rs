use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::application::services::LogLevel;
use habitdock_domain::habit::{HabitFrequency, HabitType};

#[derive(Parser, Debug)]
#[command(name = "habitdock")]
#[command(about = "Track wellness habits, streaks and achievements")]
#[command(version)]
pub struct Cli {
    /// Path to the config file (defaults to <config dir>/habitdock/config.json)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// User the session acts as
    #[arg(short, long, global = true, env = "HABITDOCK_USER", default_value = "local")]
    pub user: String,

    /// Email recorded on the session
    #[arg(long, global = true, env = "HABITDOCK_EMAIL")]
    pub email: Option<String>,

    /// Act with the admin role
    #[arg(long, global = true)]
    pub admin: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage habits
    Habit {
        #[command(subcommand)]
        command: HabitCommands,
    },

    /// Record a value for a habit (replaces that day's entry)
    Log {
        #[arg(long)]
        habit: String,

        #[arg(long)]
        value: f64,

        #[arg(long)]
        notes: Option<String>,

        /// Day to log, YYYY-MM-DD (defaults to today)
        #[arg(long)]
        date: Option<String>,
    },

    /// List a habit's logs, newest first
    Logs {
        #[arg(long)]
        habit: String,

        /// Inclusive start date, YYYY-MM-DD
        #[arg(long)]
        from: Option<String>,

        /// Inclusive end date, YYYY-MM-DD
        #[arg(long)]
        to: Option<String>,

        /// Only the entry of this day, YYYY-MM-DD
        #[arg(long, conflicts_with_all = ["from", "to"])]
        on: Option<String>,
    },

    /// Streak and completion statistics (all active habits unless --habit)
    Stats {
        #[arg(long)]
        habit: Option<String>,
    },

    /// Today's progress summary
    Dashboard,

    /// Achievement board with unlocked flags and points
    Achievements,

    /// Evaluate and persist newly earned achievements
    CheckAchievements,

    /// Load catalog entries from a JSON array (admin only)
    ImportAchievements { file: PathBuf },

    /// Show or change configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum HabitCommands {
    /// Create a habit
    Add {
        name: String,

        #[arg(long = "type", value_name = "TYPE")]
        habit_type: HabitType,

        #[arg(long)]
        target: f64,

        #[arg(long, default_value = "daily")]
        frequency: HabitFrequency,

        #[arg(long)]
        icon: Option<String>,

        #[arg(long)]
        color: Option<String>,

        /// Reminder time, HH:MM
        #[arg(long)]
        reminder: Option<String>,
    },

    /// List active habits, newest first
    List,

    /// Show one habit
    Show { id: String },

    /// Change fields of a habit
    Update {
        id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long = "type", value_name = "TYPE")]
        habit_type: Option<HabitType>,

        #[arg(long)]
        target: Option<f64>,

        #[arg(long)]
        frequency: Option<HabitFrequency>,

        #[arg(long)]
        icon: Option<String>,

        #[arg(long)]
        color: Option<String>,

        /// Reminder time, HH:MM
        #[arg(long)]
        reminder: Option<String>,

        /// Turn the reminder off
        #[arg(long, conflicts_with = "reminder")]
        no_reminder: bool,
    },

    /// Archive a habit; it disappears from lists and stats
    Archive { id: String },

    /// Delete a habit and all of its logs
    Delete { id: String },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show,

    /// Persist the log level used from the next run
    SetLogLevel { level: LogLevel },
}
