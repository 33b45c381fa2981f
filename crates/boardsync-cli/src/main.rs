//! # Boardsync CLI
//!
//! The command-line writer for the shared board. Automation (scripts, agents)
//! invokes it once per mutation:
//!
//! ```text
//! boardsync add "Deploy API"    # new node + "Deployed node: Deploy API" log
//! boardsync log "Build green"   # info log entry
//! ```
//!
//! The binary is intentionally thin: `cli::run()` wires configuration, the
//! file store and the `BoardApi`, runs exactly one command and prints its
//! messages. Everything below the API is the `boardsync` library.
//!
//! There are no flags besides `--help`/`--version`; the state path and bounds
//! come from `boardsync.toml` or `BOARDSYNC_*` environment variables.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
