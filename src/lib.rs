//! # Token Swap
//!
//! Core of a single-screen token swap widget: price feed retrieval, token
//! catalog, exchange math, searchable selectors and the swap form state
//! machine.
//!
//! ## Architecture
//!
//! The crate is organized in layers:
//!
//! 1. **Core** — Types, domain models and pure computations (always available)
//! 2. **HTTP API** — `PriceFeedHttp`, one GET per retrieval
//! 3. **High-Level Client** — `SwapClient` with the `prices()` sub-client
//! 4. **Session** — `SwapSession`, the stateful coordinator a renderer drives
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use tokenswap::prelude::*;
//!
//! let client = SwapClient::builder().build()?;
//! let session = SwapSession::mount(client, SessionConfig::default()).await;
//!
//! session.select(Side::From, "ETH").await;
//! session.select(Side::To, "BTC").await;
//! session.edit_amount("2").await;
//!
//! if let SubmitOutcome::Accepted(settlement) = session.submit().await {
//!     settlement.run().await;
//! }
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes and formatting helpers used across all domains.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions, state.
pub mod domain;

/// Unified error types.
pub mod error;

/// Feed and icon URL constants.
pub mod network;

// ── Layer 2: HTTP API ────────────────────────────────────────────────────────

/// HTTP client for the price feed.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `SwapClient` — the primary entry point for feed access.
#[cfg(feature = "http")]
pub mod client;

// ── Layer 4: Session ─────────────────────────────────────────────────────────

/// `SwapSession` — catalog load, selectors and form under one coordinator.
pub mod session;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{Currency, Side};

    // Domain types — price, token
    pub use crate::domain::price::{PriceObservation, PriceSource};
    pub use crate::domain::token::{IconState, Token, TokenCatalog, TokenIcon};

    // Domain types — selector
    pub use crate::domain::selector::{
        Interaction, InteractionHub, RegionId, SelectorList, SelectorOption, TokenSelector,
    };

    // Domain types — swap form
    pub use crate::domain::swap_form::{
        FormErrors, FormField, SubmissionPhase, SubmitDecision, SwapForm, ValidationError,
    };

    // Errors
    pub use crate::error::{FetchError, SdkError};

    // Network
    pub use crate::network::{DEFAULT_PRICES_URL, DEFAULT_TOKEN_ICON_BASE_URL};

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{PricesClient, SwapClient, SwapClientBuilder};

    // Session
    pub use crate::session::{
        CatalogStatus, SessionConfig, Settlement, SettlementOutcome, SubmitOutcome, SwapSession,
        SwapView,
    };
}
