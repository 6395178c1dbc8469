//! # State Module
//!
//! Manages application state for the back-office.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                      Backoffice                                 │   │
//! │  │  shop: ShopState,  config: ConfigState                          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                              │                                          │
//! │               ┌──────────────┴──────────────┐                           │
//! │               ▼                             ▼                           │
//! │  ┌──────────────────────────┐  ┌──────────────────────────┐             │
//! │  │       ShopState          │  │      ConfigState         │             │
//! │  │                          │  │                          │             │
//! │  │  Arc<Mutex<Shop>>        │  │  shop_name               │             │
//! │  │  orders, transactions,   │  │  regular_threshold       │             │
//! │  │  customers, products     │  │  name_matching           │             │
//! │  └──────────────────────────┘  └──────────────────────────┘             │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • ShopState: Protected by Arc<Mutex<T>> for exclusive access          │
//! │  • ConfigState: Read-only after initialization                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod shop;

pub use config::{ConfigError, ConfigState};
pub use shop::{Shop, ShopState};
