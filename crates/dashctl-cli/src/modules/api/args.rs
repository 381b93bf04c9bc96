use clap::Args;

#[derive(Args)]
pub struct ApiArgs {
    /// One of GET, POST, PUT, PATCH, DELETE
    pub method: String,
    /// Path appended to the base URL, e.g. /api/users
    pub path: String,
    /// JSON request body (POST, PUT and PATCH only)
    #[arg(long)]
    pub data: Option<String>,
    /// Per-request deadline in seconds
    #[arg(long)]
    pub timeout: Option<u64>,
}
