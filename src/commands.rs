//! CLI command definitions for questlog.

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Show the player level, title and every ledger
    Status {
        /// Print JSON instead of human output
        #[arg(long)]
        json: bool,
    },

    /// Initialize a new ~/.questlog/config.toml configuration file
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },

    /// Award raw XP to a category (academics, goals, books, social, timetable)
    Award {
        category: String,
        amount: u64,
        /// Reason shown in the output
        #[arg(long)]
        reason: Option<String>,
    },

    /// Record an action and earn its XP
    Record {
        #[command(subcommand)]
        action: RecordCommands,
    },

    /// Track habits (these count toward the overall level)
    Habit {
        #[command(subcommand)]
        command: ActivityCommands,
    },

    /// Track hobbies (own levels, not part of the overall level)
    Hobby {
        #[command(subcommand)]
        command: ActivityCommands,
    },

    /// List goal achievements or check for new ones
    Achievements {
        #[command(subcommand)]
        command: Option<AchievementCommands>,
    },

    /// Print the stored snapshot as JSON
    Export,

    /// List users with stored progress
    Users,

    /// Delete the stored snapshot for the user
    Reset {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub enum RecordCommands {
    /// A subject was added
    Subject,
    /// A test result was recorded
    Test {
        /// Points scored
        #[arg(long)]
        score: Option<f64>,
        /// Maximum points
        #[arg(long)]
        max: Option<f64>,
    },
    /// A goal was created
    GoalCreated,
    /// A goal was completed
    GoalCompleted {
        /// low, medium or high
        #[arg(long, default_value = "medium")]
        priority: String,
    },
    /// A book was added
    Book,
    /// Reading progress was made
    Reading,
    /// A book was rated
    Rating {
        /// Previous rating (0 when unrated)
        #[arg(long, default_value_t = 0)]
        old: u8,
        /// New rating
        #[arg(long)]
        new: u8,
    },
    /// A social media platform was added to tracking
    Platform,
    /// A timetable event was scheduled
    Event,
    /// A timetable event was completed
    EventCompleted,
}

#[derive(Subcommand)]
pub enum ActivityCommands {
    /// Start tracking a new item
    Add { name: String },
    /// Toggle completion for a day (defaults to today)
    Toggle {
        /// ID, unique ID prefix, or name
        item: String,
        /// Day as YYYY-MM-DD
        #[arg(long)]
        date: Option<String>,
    },
    /// Complete an item now
    Complete {
        /// ID, unique ID prefix, or name
        item: String,
    },
    /// Stop tracking an item
    Remove {
        /// ID, unique ID prefix, or name
        item: String,
    },
    /// List tracked items
    List {
        /// Print JSON instead of human output
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
pub enum AchievementCommands {
    /// Unlock achievements earned by the given goal counts
    Check {
        /// Number of goals set
        #[arg(long, default_value_t = 0)]
        total: u64,
        /// Number of goals completed
        #[arg(long, default_value_t = 0)]
        completed: u64,
        /// Number of high-priority goals completed
        #[arg(long, default_value_t = 0)]
        high: u64,
        /// Horizons with at least one goal (weekly, monthly, yearly, life)
        #[arg(long, value_delimiter = ',')]
        horizons: Vec<String>,
    },
}
