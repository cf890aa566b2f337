use clap::Parser;

/// Postboard - terminal viewer for employee posts and comments
#[derive(Parser, Debug)]
#[command(name = "postboard")]
#[command(about = "Browse employee posts and their comment threads in the terminal")]
#[command(version)]
pub struct Cli {
    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Preselect a user by id and load their posts at startup
    #[arg(long)]
    pub user: Option<u64>,
}
