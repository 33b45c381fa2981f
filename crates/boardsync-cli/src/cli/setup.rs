use clap::Parser;

pub const USAGE: &str = "Usage: boardsync [add|log] [label/message]";

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.0" for releases, "0.3.0@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(
    name = "boardsync",
    bin_name = "boardsync",
    version = get_version(),
    arg_required_else_help = true
)]
#[command(about = "Push agent activity onto the shared board", long_about = None)]
pub struct Cli {
    /// Mutation to run: `add` or `log`
    pub command: String,

    /// Node label for `add`, message for `log`
    pub text: Option<String>,
}
