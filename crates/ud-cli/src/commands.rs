use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// List users as a table page
    List {
        /// Case-insensitive substring matched against email, username,
        /// first/last name, and phone number
        #[arg(long)]
        search: Option<String>,

        /// Exact role filter (admin, user, editor)
        #[arg(long)]
        role: Option<String>,

        /// Sort column (username, email, phone, first-name, last-name,
        /// role, created-at)
        #[arg(long)]
        sort: Option<String>,

        /// Sort descending instead of ascending
        #[arg(long)]
        desc: bool,

        /// 1-based page to show (clamped into range)
        #[arg(long)]
        page: Option<usize>,

        /// Rows per page (defaults to the configured page size)
        #[arg(long)]
        page_size: Option<usize>,

        /// Emit the visible page as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Get a user by ID
    Get {
        /// User ID
        id: String,
    },

    /// Create a user
    Create {
        #[arg(long)]
        username: String,

        #[arg(long)]
        password: String,

        /// Defaults to the password when omitted
        #[arg(long)]
        confirm_password: Option<String>,

        #[arg(long)]
        email: String,

        #[arg(long)]
        first_name: String,

        #[arg(long)]
        last_name: String,

        #[arg(long)]
        phone: String,

        /// admin, user, or editor
        #[arg(long, default_value = "user")]
        role: String,

        /// Hosted avatar image URL (upload happens out of band)
        #[arg(long)]
        avatar_url: Option<String>,
    },

    /// Update fields on a user; omitted fields are left untouched
    Update {
        /// User ID
        id: String,

        #[arg(long)]
        username: Option<String>,

        #[arg(long)]
        password: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        first_name: Option<String>,

        #[arg(long)]
        last_name: Option<String>,

        #[arg(long)]
        phone: Option<String>,

        /// admin, user, or editor
        #[arg(long)]
        role: Option<String>,

        #[arg(long)]
        avatar_url: Option<String>,
    },

    /// Delete a user by ID
    Delete {
        /// User ID
        id: String,
    },

    /// Export the filtered user list as an XLSX workbook
    Export {
        /// Same substring filter as `list`
        #[arg(long)]
        search: Option<String>,

        /// Same role filter as `list`
        #[arg(long)]
        role: Option<String>,

        /// Output path (defaults to UserList.xlsx)
        #[arg(long)]
        out: Option<PathBuf>,
    },
}
