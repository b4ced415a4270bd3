//! Swap session — the single stateful coordinator.
//!
//! Owns the catalog load, both selectors and the form. All mutations go
//! through one `RwLock`, so they are applied strictly in call order. Two async
//! operations exist: the catalog fetch and the simulated settlement. Both
//! carry a generation and check on completion that the session is still alive
//! and still on that generation before touching state.

use crate::domain::exchange;
use crate::domain::price::PriceSource;
use crate::domain::selector::{
    self, Interaction, InteractionHub, ListenerId, RegionId, SelectorList, TokenSelector,
};
use crate::domain::swap_form::{FormErrors, SubmissionPhase, SubmitDecision, SwapForm};
use crate::domain::token::{Token, TokenCatalog};
use crate::error::FetchError;
use crate::network::DEFAULT_TOKEN_ICON_BASE_URL;
use crate::shared::Side;

use async_lock::RwLock;
use std::sync::{Arc, Weak};
use std::time::Duration;

// ─── Configuration ───────────────────────────────────────────────────────────

/// Startup-fixed session settings.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub icon_base_url: String,
    /// Stand-in for a real settlement call. Not a timing guarantee.
    pub settlement_latency: Duration,
    /// How long `Success` is shown before the form returns to `Idle`.
    pub success_display: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            icon_base_url: DEFAULT_TOKEN_ICON_BASE_URL.to_string(),
            settlement_latency: Duration::from_millis(2000),
            success_display: Duration::from_millis(3000),
        }
    }
}

// ─── Catalog status ──────────────────────────────────────────────────────────

/// Where the catalog load stands.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogStatus {
    Loading,
    Ready(TokenCatalog),
    /// Blocking error; the only way out is `SwapSession::reload`.
    Failed(FetchError),
}

impl CatalogStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, CatalogStatus::Loading)
    }

    pub fn catalog(&self) -> Option<&TokenCatalog> {
        match self {
            CatalogStatus::Ready(c) => Some(c),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<String> {
        match self {
            CatalogStatus::Failed(e) => Some(format!("Failed to load tokens: {}", e)),
            _ => None,
        }
    }
}

// ─── Session state ───────────────────────────────────────────────────────────

const FROM_REGION: RegionId = RegionId(0);
const TO_REGION: RegionId = RegionId(1);

struct SessionState {
    catalog: CatalogStatus,
    load_generation: u64,
    submission_generation: u64,
    form: SwapForm,
    from_selector: TokenSelector,
    to_selector: TokenSelector,
    hub: InteractionHub,
    listeners: Vec<(ListenerId, Side)>,
    disposed: bool,
}

impl SessionState {
    fn new() -> Self {
        let mut hub = InteractionHub::new();
        let listeners = vec![
            (hub.subscribe(FROM_REGION), Side::From),
            (hub.subscribe(TO_REGION), Side::To),
        ];
        Self {
            catalog: CatalogStatus::Loading,
            load_generation: 0,
            submission_generation: 0,
            form: SwapForm::new(),
            from_selector: TokenSelector::new(),
            to_selector: TokenSelector::new(),
            hub,
            listeners,
            disposed: false,
        }
    }

    fn selector(&self, side: Side) -> &TokenSelector {
        match side {
            Side::From => &self.from_selector,
            Side::To => &self.to_selector,
        }
    }

    fn selector_mut(&mut self, side: Side) -> &mut TokenSelector {
        match side {
            Side::From => &mut self.from_selector,
            Side::To => &mut self.to_selector,
        }
    }

    /// Push form-derived props into both selectors: each excludes the other
    /// side's currency, and both are disabled outside `Idle`.
    fn sync_selectors(&mut self) {
        let disabled = !self.form.is_idle();
        let from = self.form.from_token().map(|t| t.currency().clone());
        let to = self.form.to_token().map(|t| t.currency().clone());
        self.from_selector.set_excluded(to);
        self.to_selector.set_excluded(from);
        self.from_selector.set_disabled(disabled);
        self.to_selector.set_disabled(disabled);
    }

    fn reset_form(&mut self) {
        // strands any settlement issued for the old form
        self.submission_generation += 1;
        self.form = SwapForm::new();
        self.from_selector.close();
        self.to_selector.close();
        self.sync_selectors();
    }
}

struct SessionInner {
    state: RwLock<SessionState>,
    config: SessionConfig,
}

// ─── Snapshot ────────────────────────────────────────────────────────────────

/// Everything a renderer needs, computed from the current state.
#[derive(Debug, Clone, PartialEq)]
pub struct SwapView {
    pub phase: SubmissionPhase,
    pub status_label: &'static str,
    pub from_token: Option<Token>,
    pub to_token: Option<Token>,
    pub from_amount: String,
    pub receive_amount: String,
    pub rate_display: Option<String>,
    pub pay_usd_value: Option<String>,
    pub receive_usd_value: Option<String>,
    pub errors: FormErrors,
    pub inputs_disabled: bool,
    pub submit_enabled: bool,
    pub from_trigger_label: String,
    pub to_trigger_label: String,
}

// ─── Submission ──────────────────────────────────────────────────────────────

/// Result of `SwapSession::submit`.
#[derive(Debug)]
#[must_use = "the form stays Submitting until the settlement is run"]
pub enum SubmitOutcome {
    /// Not `Idle` (already submitting or showing success); nothing happened.
    Ignored,
    /// Validation failed; errors are on the form.
    Rejected(FormErrors),
    /// Form is `Submitting`; drive the settlement to completion.
    Accepted(Settlement),
}

/// How a settlement run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettlementOutcome {
    /// `Submitting → Success → Idle` all applied.
    Completed,
    /// The session was disposed, dropped or reset first; nothing was applied
    /// after that.
    Abandoned,
}

/// The scheduled completion of one accepted submit.
///
/// Holds only a weak reference to the session, so it never keeps a torn-down
/// session alive and never mutates one. It is also stamped with the submission
/// it belongs to and does nothing once the form has been reset under it. There
/// is no cancel: once started it either completes or finds itself stale.
#[derive(Debug)]
#[must_use = "the form stays Submitting until the settlement is run"]
pub struct Settlement {
    inner: Weak<SessionInner>,
    generation: u64,
    settlement_latency: Duration,
    success_display: Duration,
}

impl Settlement {
    pub async fn run(self) -> SettlementOutcome {
        futures_timer::Delay::new(self.settlement_latency).await;
        if !self.apply(|form| form.settle()).await {
            tracing::debug!("Settlement abandoned before success");
            return SettlementOutcome::Abandoned;
        }

        futures_timer::Delay::new(self.success_display).await;
        if !self.apply(|form| form.reset_after_success()).await {
            tracing::debug!("Settlement abandoned before reset");
            return SettlementOutcome::Abandoned;
        }

        SettlementOutcome::Completed
    }

    /// Run the settlement on the tokio runtime.
    #[cfg(feature = "native")]
    pub fn spawn(self) -> tokio::task::JoinHandle<SettlementOutcome> {
        tokio::spawn(self.run())
    }

    async fn apply(&self, transition: impl FnOnce(&mut SwapForm) -> bool) -> bool {
        let Some(inner) = self.inner.upgrade() else {
            return false;
        };
        let mut state = inner.state.write().await;
        if state.disposed || state.submission_generation != self.generation {
            return false;
        }
        let applied = transition(&mut state.form);
        state.sync_selectors();
        tracing::debug!(phase = %state.form.phase(), applied, "Settlement step");
        applied
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// SwapSession
// ═════════════════════════════════════════════════════════════════════════════

/// One page session of the swap widget.
pub struct SwapSession<S> {
    source: S,
    inner: Arc<SessionInner>,
}

impl<S: PriceSource> SwapSession<S> {
    /// A session in `Loading` state. Call [`load_catalog`](Self::load_catalog) to fetch.
    pub fn new(source: S, config: SessionConfig) -> Self {
        Self {
            source,
            inner: Arc::new(SessionInner {
                state: RwLock::new(SessionState::new()),
                config,
            }),
        }
    }

    /// Create the session and perform the one catalog fetch of a mount.
    pub async fn mount(source: S, config: SessionConfig) -> Self {
        let session = Self::new(source, config);
        session.load_catalog().await;
        session
    }

    pub fn config(&self) -> &SessionConfig {
        &self.inner.config
    }

    // ── Catalog ──────────────────────────────────────────────────────────

    /// Fetch the feed and build a new catalog. A result that arrives after a
    /// newer load started, or after disposal, is dropped.
    pub async fn load_catalog(&self) -> CatalogStatus {
        let generation = {
            let mut state = self.inner.state.write().await;
            if state.disposed {
                return state.catalog.clone();
            }
            state.load_generation += 1;
            state.catalog = CatalogStatus::Loading;
            state.load_generation
        };

        let result = self.source.fetch_prices().await;

        let mut state = self.inner.state.write().await;
        if state.disposed || state.load_generation != generation {
            tracing::debug!(generation, "Discarding stale catalog load");
            return state.catalog.clone();
        }

        state.catalog = match result {
            Ok(observations) => CatalogStatus::Ready(TokenCatalog::build(
                &observations,
                &self.inner.config.icon_base_url,
            )),
            Err(e) => {
                tracing::warn!("Catalog load failed: {}", e);
                CatalogStatus::Failed(e)
            }
        };
        state.catalog.clone()
    }

    /// User-triggered retry: start over as a fresh mount.
    ///
    /// Refused while a swap is in flight (form not `Idle`), unless the catalog
    /// load failed; the current status is returned unchanged.
    pub async fn reload(&self) -> CatalogStatus {
        {
            let mut state = self.inner.state.write().await;
            let failed = matches!(state.catalog, CatalogStatus::Failed(_));
            if state.disposed || !(state.form.is_idle() || failed) {
                return state.catalog.clone();
            }
            state.reset_form();
        }
        self.load_catalog().await
    }

    pub async fn catalog_status(&self) -> CatalogStatus {
        self.inner.state.read().await.catalog.clone()
    }

    // ── Selectors ────────────────────────────────────────────────────────

    pub fn region(&self, side: Side) -> RegionId {
        match side {
            Side::From => FROM_REGION,
            Side::To => TO_REGION,
        }
    }

    /// Trigger click on one selector. Returns whether it is now open.
    pub async fn toggle_selector(&self, side: Side) -> bool {
        let mut state = self.inner.state.write().await;
        if state.disposed {
            return false;
        }
        state.selector_mut(side).toggle()
    }

    pub async fn search(&self, side: Side, text: &str) {
        let mut state = self.inner.state.write().await;
        if !state.disposed {
            state.selector_mut(side).set_search(text);
        }
    }

    pub async fn is_selector_open(&self, side: Side) -> bool {
        self.inner.state.read().await.selector(side).is_open()
    }

    /// Tokens currently listed by one selector.
    pub async fn visible_tokens(&self, side: Side) -> Vec<Token> {
        let state = self.inner.state.read().await;
        match state.catalog.catalog() {
            Some(catalog) => state
                .selector(side)
                .visible(catalog)
                .into_iter()
                .cloned()
                .collect(),
            None => Vec::new(),
        }
    }

    /// Dropdown rows for one selector; `None` until the catalog is ready.
    pub async fn options(&self, side: Side) -> Option<Vec<(Token, bool, String)>> {
        let state = self.inner.state.read().await;
        let catalog = state.catalog.catalog()?;
        let visible = state.selector(side).visible(catalog);
        Some(match selector::options(visible, state.form.token(side)) {
            SelectorList::Options(rows) => rows
                .into_iter()
                .map(|row| (row.token.clone(), row.selected, row.price_label))
                .collect(),
            SelectorList::Empty(_) => Vec::new(),
        })
    }

    /// Pick a currency on one side. Goes through the selector, so the
    /// opposite side's currency is refused.
    pub async fn select(&self, side: Side, currency: &str) -> bool {
        let mut guard = self.inner.state.write().await;
        if guard.disposed {
            return false;
        }
        let state = &mut *guard;

        let Some(token) = state.catalog.catalog().and_then(|c| c.find(currency)) else {
            return false;
        };

        let form = &mut state.form;
        let selector = match side {
            Side::From => &mut state.from_selector,
            Side::To => &mut state.to_selector,
        };
        let mut accepted = false;
        selector.select(token, |t| accepted = form.select(side, t.clone()));
        state.sync_selectors();

        tracing::debug!(%side, currency, accepted, "Token selected");
        accepted
    }

    /// Route a pointer/hover/typing event; selectors it fell outside of close.
    pub async fn interact(&self, interaction: Interaction) {
        let mut state = self.inner.state.write().await;
        if state.disposed {
            return;
        }
        let outside = state.hub.dispatch(interaction);
        let sides: Vec<Side> = state
            .listeners
            .iter()
            .filter(|(id, _)| outside.contains(id))
            .map(|(_, side)| *side)
            .collect();
        for side in sides {
            state.selector_mut(side).dismiss();
        }
    }

    // ── Form ─────────────────────────────────────────────────────────────

    pub async fn edit_amount(&self, text: &str) -> bool {
        let mut state = self.inner.state.write().await;
        !state.disposed && state.form.edit_amount(text)
    }

    pub async fn swap_direction(&self) -> bool {
        let mut state = self.inner.state.write().await;
        if state.disposed {
            return false;
        }
        let swapped = state.form.swap_direction();
        state.sync_selectors();
        swapped
    }

    /// Validate and, if the form is valid, move to `Submitting`. The returned
    /// [`Settlement`] must be driven (awaited or spawned) to reach `Success`.
    pub async fn submit(&self) -> SubmitOutcome {
        let mut state = self.inner.state.write().await;
        if state.disposed {
            return SubmitOutcome::Ignored;
        }
        let outcome = match state.form.submit() {
            SubmitDecision::Ignored => SubmitOutcome::Ignored,
            SubmitDecision::Rejected(errors) => SubmitOutcome::Rejected(errors),
            SubmitDecision::Accepted => {
                state.submission_generation += 1;
                SubmitOutcome::Accepted(Settlement {
                    inner: Arc::downgrade(&self.inner),
                    generation: state.submission_generation,
                    settlement_latency: self.inner.config.settlement_latency,
                    success_display: self.inner.config.success_display,
                })
            }
        };
        state.sync_selectors();
        outcome
    }

    pub async fn phase(&self) -> SubmissionPhase {
        self.inner.state.read().await.form.phase()
    }

    pub async fn form(&self) -> SwapForm {
        self.inner.state.read().await.form.clone()
    }

    pub async fn view(&self) -> SwapView {
        let state = self.inner.state.read().await;
        let form = &state.form;
        SwapView {
            phase: form.phase(),
            status_label: form.status_label(),
            from_token: form.from_token().cloned(),
            to_token: form.to_token().cloned(),
            from_amount: form.from_amount().to_string(),
            receive_amount: form.receive_amount(),
            rate_display: form.rate_display(),
            pay_usd_value: form.pay_usd_value(),
            receive_usd_value: form.receive_usd_value(),
            errors: form.errors().clone(),
            inputs_disabled: form.inputs_disabled(),
            submit_enabled: form.submit_enabled(),
            from_trigger_label: selector::trigger_label(form.from_token()),
            to_trigger_label: selector::trigger_label(form.to_token()),
        }
    }

    /// Exchange rate between the current selections, if both are set.
    pub async fn exchange_rate(&self) -> Option<f64> {
        let state = self.inner.state.read().await;
        exchange::rate_between(state.form.from_token(), state.form.to_token())
    }

    // ── Teardown ─────────────────────────────────────────────────────────

    /// Tear the session down. Pending completions become no-ops and the
    /// outside-interaction listeners are unsubscribed.
    pub async fn dispose(&self) {
        let mut state = self.inner.state.write().await;
        if state.disposed {
            return;
        }
        state.disposed = true;
        let ids: Vec<ListenerId> = state.listeners.drain(..).map(|(id, _)| id).collect();
        for id in ids {
            state.hub.unsubscribe(id);
        }
        tracing::debug!("Swap session disposed");
    }

    pub async fn is_disposed(&self) -> bool {
        self.inner.state.read().await.disposed
    }
}
