/// Read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn version_line() -> String {
    format!("unsplash-tui {}", VERSION)
}

pub fn help_text() -> String {
    format!(
        "{}
Browse Unsplash photos in the terminal.

USAGE:
    unsplash-tui [--query <text>]

OPTIONS:
    -q, --query <text>    Start with a search instead of the editorial feed
    -V, --version         Print version and exit
    -h, --help            Print this help and exit

ENVIRONMENT:
    UNSPLASH_ACCESS_KEY     API access key (required)
    UNSPLASH_API_URL        API base URL
    UNSPLASH_PER_PAGE       Photos per page, 1-30
    UNSPLASH_TIMEOUT_SECS   Request timeout in seconds
    UNSPLASH_TUI_LOG_DIR    Directory for the log file
    RUST_LOG                Log filter",
        version_line()
    )
}
