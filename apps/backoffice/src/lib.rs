//! # Printdesk Back-office Library
//!
//! Core library for the Printdesk back-office host.
//! Sets up logging and configuration, then serves commands line by line.
//!
//! ## Module Organization
//! ```text
//! printdesk_backoffice/
//! ├── lib.rs          ◄─── You are here (startup & command loop)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── shop.rs     ◄─── Orders, till, customers, products
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command envelope & dispatch
//! │   ├── order.rs    ◄─── Order intake and delivery status
//! │   ├── till.rs     ◄─── Cash withdrawals
//! │   ├── customer.rs ◄─── Customers and regulars
//! │   ├── product.rs  ◄─── Catalog
//! │   ├── report.rs   ◄─── Summary, dashboard, report
//! │   └── config.rs   ◄─── Configuration retrieval
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## State Management (Multiple State Types)
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Back-office State                                    │
//! │                                                                         │
//! │  ┌──────────────────────────────┐   ┌──────────────────────────────┐   │
//! │  │    ShopState                 │   │    ConfigState               │   │
//! │  │                              │   │                              │   │
//! │  │  • Orders (chronological)    │   │  • Shop name, currency       │   │
//! │  │  • Till transactions         │   │  • Regular threshold         │   │
//! │  │  • Customers, products       │   │  • Name matching             │   │
//! │  └──────────────────────────────┘   └──────────────────────────────┘   │
//! │                                                                         │
//! │  Each command handler takes only the state it needs.                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod error;
pub mod state;

use std::io::{self, BufRead, Write};

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use error::RunError;
use state::{ConfigState, ShopState};

/// Everything a command can touch.
#[derive(Debug, Default)]
pub struct Backoffice {
    pub shop: ShopState,
    pub config: ConfigState,
}

impl Backoffice {
    /// Creates a back-office with an empty shop.
    pub fn new(config: ConfigState) -> Self {
        Backoffice {
            shop: ShopState::new(),
            config,
        }
    }
}

/// Runs the back-office until stdin closes.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, writing to stderr             │
/// │     • Default: info, debug for printdesk; override with RUST_LOG        │
/// │                                                                         │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • PRINTDESK_* environment variables over defaults                   │
/// │     • Bad values abort startup                                          │
/// │                                                                         │
/// │  3. Initialize State ─────────────────────────────────────────────────► │
/// │     • ShopState: empty, Mutex for exclusive updates                     │
/// │                                                                         │
/// │  4. Serve ────────────────────────────────────────────────────────────► │
/// │     • One JSON command per stdin line, one JSON response per line       │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> Result<(), RunError> {
    init_tracing();

    info!("Starting Printdesk back-office");

    let config = ConfigState::load().map_err(|e| {
        error!(error = %e, "Configuration rejected");
        e
    })?;
    info!(
        shop = %config.shop_name,
        currency = %config.currency_code,
        threshold = config.regular_threshold,
        "Configuration loaded"
    );

    let backoffice = Backoffice::new(config);

    let stdin = io::stdin();
    let stdout = io::stdout();
    serve(&backoffice, stdin.lock(), stdout.lock()).map_err(|e| {
        error!(error = %e, "Command stream failed");
        e
    })?;

    info!("Input closed, shutting down");
    Ok(())
}

/// Answers every non-blank input line with exactly one response line.
///
/// Malformed lines get an error response; only I/O failures stop the loop.
pub fn serve<R, W>(backoffice: &Backoffice, input: R, mut output: W) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let response = commands::handle_line(backoffice, &line);
        serde_json::to_writer(&mut output, &response)?;
        writeln!(output)?;
        output.flush()?;
    }
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=printdesk=trace` - Show trace for printdesk crates only
/// - Default: INFO level, DEBUG for printdesk
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,printdesk=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
