//! # Printdesk Back-office Entry Point
//!
//! ## Application Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Printdesk Back-office                            │
//! │                                                                         │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                  Frontend / script / terminal                    │  │
//! │  │      {"command": "record_order", "args": {...}}  (one per line)  │  │
//! │  └──────────────────────────────┬───────────────────────────────────┘  │
//! │                          stdin  │  ▲ stdout                             │
//! │                                 ▼  │                                    │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                    Rust Backend (this crate)                     │  │
//! │  │                                                                  │  │
//! │  │  main.rs ────► Calls run(), reports startup failure             │  │
//! │  │                                                                  │  │
//! │  │  lib.rs ─────► Logging, config, the command loop                │  │
//! │  │                                                                  │  │
//! │  │  commands/ ──► record_order, record_withdrawal, dashboard, ...  │  │
//! │  │                                                                  │  │
//! │  │  state/ ─────► ShopState, ConfigState                           │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  Logs go to stderr, responses to stdout.                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

fn main() {
    // The actual setup is in lib.rs for better testability
    if let Err(err) = printdesk_backoffice::run() {
        eprintln!("printdesk: {}", err);
        std::process::exit(1);
    }
}
