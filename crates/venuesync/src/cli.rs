//! Clap derive structures for the `venuesync` CLI.
//!
//! Defines the complete command tree, global flags, and shared types.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// venuesync -- command-line client for the VenueSync venue marketplace
#[derive(Debug, Parser)]
#[command(
    name = "venuesync",
    version,
    about = "Browse, book, and manage event venues from the command line",
    long_about = "A command-line client for the VenueSync venue marketplace.\n\n\
        Browse the venue catalog, request bookings with instant quotes,\n\
        broadcast event inquiries to hosts, and message venue owners.\n\
        All state lives in a local data directory.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Data directory holding the stored collections
    #[arg(long, short = 'd', env = "VENUESYNC_DATA_DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "VENUESYNC_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// When to use color output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Skip confirmation prompts
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Browse the venue catalog
    #[command(alias = "v")]
    Venues(VenuesArgs),

    /// Manage favorite venues
    #[command(alias = "fav")]
    Favorites(FavoritesArgs),

    /// Broadcast and manage event inquiries
    #[command(alias = "inq")]
    Inquiries(InquiriesArgs),

    /// Request and manage venue bookings
    #[command(alias = "book", alias = "b")]
    Bookings(BookingsArgs),

    /// Manage venue availability (host calendar)
    #[command(alias = "cal")]
    Calendar(CalendarArgs),

    /// Message venue hosts
    #[command(alias = "msg")]
    Messages(MessagesArgs),

    /// Show or change the login session
    Session(SessionArgs),

    /// Manage CLI configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  VENUES
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct VenuesArgs {
    #[command(subcommand)]
    pub command: VenuesCommand,
}

#[derive(Debug, Subcommand)]
pub enum VenuesCommand {
    /// List venues, optionally filtered
    #[command(alias = "ls")]
    List(VenueFilterArgs),

    /// Show full venue details
    Show {
        /// Venue ID or name
        venue: String,
    },

    /// Edit a venue listing (host-side; changes last for this session)
    Edit {
        /// Venue ID or name
        venue: String,

        /// New display name
        #[arg(long)]
        name: Option<String>,

        /// New location
        #[arg(long)]
        location: Option<String>,

        /// New hourly price
        #[arg(long)]
        price: Option<f64>,

        /// New capacity
        #[arg(long)]
        capacity: Option<u32>,
    },

    /// Show or edit a venue's pricing settings (host-side; edits last
    /// for this session)
    Pricing {
        /// Venue ID or name
        venue: String,

        /// New hourly rate
        #[arg(long)]
        price: Option<f64>,

        /// New minimum bookable hours
        #[arg(long)]
        min_hours: Option<f64>,

        /// New weekend hourly rate
        #[arg(long)]
        weekend_rate: Option<f64>,

        /// New cleaning fee
        #[arg(long)]
        cleaning_fee: Option<f64>,

        /// New security deposit
        #[arg(long)]
        security_deposit: Option<f64>,

        /// Auto-accept booking requests (true/false)
        #[arg(long)]
        instant_book: Option<bool>,
    },
}

/// Catalog filter flags. All optional; results are the venues matching
/// every given constraint.
#[derive(Debug, Args)]
pub struct VenueFilterArgs {
    /// Category keyword (venue type, or 'trending' for top-rated)
    #[arg(long, short = 'c')]
    pub category: Option<String>,

    /// Location substring (case-insensitive)
    #[arg(long, short = 'L')]
    pub location: Option<String>,

    /// Minimum hourly price
    #[arg(long)]
    pub min_price: Option<String>,

    /// Maximum hourly price
    #[arg(long)]
    pub max_price: Option<String>,

    /// Minimum capacity (expected attendees)
    #[arg(long, short = 'a')]
    pub attendees: Option<String>,

    /// Venue types (comma-separated, e.g. "Club,Banquet Hall")
    #[arg(long = "types", value_name = "TYPES")]
    pub venue_types: Option<String>,

    /// Amenity keywords (comma-separated)
    #[arg(long = "amenities", value_name = "AMENITIES")]
    pub amenities: Option<String>,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  FAVORITES
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct FavoritesArgs {
    #[command(subcommand)]
    pub command: FavoritesCommand,
}

#[derive(Debug, Subcommand)]
pub enum FavoritesCommand {
    /// List favorite venues
    #[command(alias = "ls")]
    List,

    /// Add or remove a venue from favorites
    Toggle {
        /// Venue ID or name
        venue: String,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  INQUIRIES
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct InquiriesArgs {
    #[command(subcommand)]
    pub command: InquiriesCommand,
}

#[derive(Debug, Subcommand)]
pub enum InquiriesCommand {
    /// List inquiries, optionally filtered (host inbox view)
    #[command(alias = "ls")]
    List {
        /// Event-type keywords (comma-separated, substring match)
        #[arg(long, value_delimiter = ',')]
        event_types: Option<Vec<String>>,

        /// Budget window to overlap, e.g. "$100-300/hr"
        #[arg(long)]
        budget: Option<String>,

        /// Minimum attendee count
        #[arg(long)]
        min_attendees: Option<u32>,

        /// Maximum attendee count
        #[arg(long)]
        max_attendees: Option<u32>,
    },

    /// Submit a new inquiry
    Submit(InquiryFields),

    /// Edit an existing inquiry (full replacement of given fields)
    Edit {
        /// Inquiry ID
        id: String,

        #[command(flatten)]
        fields: InquiryEditFields,
    },

    /// Delete an inquiry
    Delete {
        /// Inquiry ID
        id: String,
    },
}

#[derive(Debug, Args)]
pub struct InquiryFields {
    /// Event type, e.g. "Birthday Party"
    #[arg(long, required = true)]
    pub event_type: String,

    /// Preferred location
    #[arg(long, required = true)]
    pub location: String,

    /// Event date (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<String>,

    /// Time span for display, e.g. "19:00 - 23:00"
    #[arg(long)]
    pub time: Option<String>,

    /// Hourly budget window, e.g. "$100-200/hr"
    #[arg(long, required = true)]
    pub budget: String,

    /// Expected attendees, e.g. "30-50"
    #[arg(long, required = true)]
    pub attendees: String,

    /// Acceptable venue types (comma-separated)
    #[arg(long = "types", value_name = "TYPES")]
    pub venue_types: Option<String>,

    /// Free-form description for hosts
    #[arg(long, default_value = "")]
    pub description: String,
}

#[derive(Debug, Args)]
pub struct InquiryEditFields {
    /// Event type
    #[arg(long)]
    pub event_type: Option<String>,

    /// Preferred location
    #[arg(long)]
    pub location: Option<String>,

    /// Event date (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<String>,

    /// Time span for display
    #[arg(long)]
    pub time: Option<String>,

    /// Hourly budget window, e.g. "$100-200/hr"
    #[arg(long)]
    pub budget: Option<String>,

    /// Expected attendees, e.g. "30-50"
    #[arg(long)]
    pub attendees: Option<String>,

    /// Acceptable venue types (comma-separated, replaces existing)
    #[arg(long = "types", value_name = "TYPES")]
    pub venue_types: Option<String>,

    /// Free-form description
    #[arg(long)]
    pub description: Option<String>,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  BOOKINGS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct BookingsArgs {
    #[command(subcommand)]
    pub command: BookingsCommand,
}

#[derive(Debug, Subcommand)]
pub enum BookingsCommand {
    /// List bookings
    #[command(alias = "ls")]
    List,

    /// Price a prospective booking without creating it
    Quote {
        /// Venue ID or name
        venue: String,

        /// Start time (HH:MM, 24-hour)
        #[arg(long, required = true)]
        start: String,

        /// End time (HH:MM, 24-hour)
        #[arg(long, required = true)]
        end: String,
    },

    /// Request a booking (requires login and payment details)
    Request {
        /// Venue ID or name
        venue: String,

        /// Event date (YYYY-MM-DD)
        #[arg(long, required = true)]
        date: String,

        /// Start time (HH:MM, 24-hour)
        #[arg(long, required = true)]
        start: String,

        /// End time (HH:MM, 24-hour)
        #[arg(long, required = true)]
        end: String,

        /// Card number
        #[arg(long, required = true)]
        card_number: String,

        /// Name on card
        #[arg(long, required = true)]
        card_name: String,

        /// Card expiry (MM/YY)
        #[arg(long, required = true)]
        expiry: String,

        /// Card verification code
        #[arg(long, required = true)]
        cvv: String,

        /// Billing ZIP code
        #[arg(long, required = true)]
        billing_zip: String,
    },

    /// Accept a booking request (host)
    Accept {
        /// Booking ID or reference (VSYNC-......)
        booking: String,
    },

    /// Decline a booking request (host)
    Decline {
        /// Booking ID or reference (VSYNC-......)
        booking: String,
    },

    /// Monthly earnings from confirmed bookings (host)
    Earnings,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  CALENDAR
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct CalendarArgs {
    #[command(subcommand)]
    pub command: CalendarCommand,
}

#[derive(Debug, Subcommand)]
pub enum CalendarCommand {
    /// List blocked dates, optionally for one venue
    #[command(alias = "ls")]
    List {
        /// Venue ID or name
        venue: Option<String>,
    },

    /// Take a date off the market for a venue
    Block {
        /// Venue ID or name
        venue: String,

        /// Date to block (YYYY-MM-DD)
        #[arg(long, required = true)]
        date: String,

        /// Why the date is unavailable, e.g. "Maintenance"
        #[arg(long, required = true)]
        reason: String,
    },

    /// Put a blocked date back on the market
    Unblock {
        /// Block ID
        id: String,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  MESSAGES
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct MessagesArgs {
    #[command(subcommand)]
    pub command: MessagesCommand,
}

#[derive(Debug, Subcommand)]
pub enum MessagesCommand {
    /// List conversations, most recent first
    #[command(alias = "ls")]
    List,

    /// Show all messages in one conversation
    Show {
        /// Conversation ID
        conversation: String,
    },

    /// Send a message to a venue's host (requires login)
    Send {
        /// Venue ID or name
        venue: String,

        /// Message text
        text: String,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  SESSION
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct SessionArgs {
    #[command(subcommand)]
    pub command: SessionCommand,
}

#[derive(Debug, Subcommand)]
pub enum SessionCommand {
    /// Show the current session state
    Show,

    /// Log in as a guest or host
    Login {
        /// Role to assume
        #[arg(long, default_value = "guest", value_enum)]
        role: SessionRole,
    },

    /// Log out (role is remembered for the next login)
    Logout,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SessionRole {
    /// Book venues, send inquiries and messages
    Guest,
    /// Manage venues, accept bookings, view earnings
    Host,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  CONFIG
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Display current resolved configuration
    Show,

    /// Print the config file path
    Path,

    /// Set a configuration value
    Set {
        /// Config key (e.g. "pricing.tax_rate", "defaults.output")
        key: String,

        /// Value to set
        value: String,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  COMPLETIONS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
