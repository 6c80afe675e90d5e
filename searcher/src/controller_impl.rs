//! Search controller with dependency injection
//!
//! Owns all search state. Query edits go through the debouncer; a settled,
//! changed query cancels the in-flight lookup and spawns a new one tagged with
//! a fresh generation. Completions come back over a channel and are applied
//! only when their generation is still the current one.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use shared::{component_debug, component_info, component_warn, AccountId, Component};
use crate::core::debounce::Debouncer;
use crate::core::presentation::{self, SearchView, ToolbarView};
use crate::core::state::SearchState;
use crate::traits::AccountLookup;
use crate::types::{BackgroundEvent, ControllerEvent, LookupCompletion, SearchPhase};

/// The lookup currently considered authoritative
#[derive(Debug)]
struct InFlight {
    generation: u64,
    cancel: CancellationToken,
}

/// Application controller
pub struct SearchController<L>
where
    L: AccountLookup + 'static,
{
    state: SearchState,
    lookup: Arc<L>,
    debouncer: Debouncer<String>,
    generation: u64,
    in_flight: Option<InFlight>,
    completions_tx: mpsc::UnboundedSender<LookupCompletion>,
    completions_rx: mpsc::UnboundedReceiver<LookupCompletion>,
}

impl<L> SearchController<L>
where
    L: AccountLookup + 'static,
{
    /// Create new controller instance
    pub fn new(lookup: L, debounce: Duration) -> Self {
        Self::with_shared_lookup(Arc::new(lookup), debounce)
    }

    pub fn with_shared_lookup(lookup: Arc<L>, debounce: Duration) -> Self {
        let (completions_tx, completions_rx) = mpsc::unbounded_channel();

        Self {
            state: SearchState::new(),
            lookup,
            debouncer: Debouncer::new(debounce),
            generation: 0,
            in_flight: None,
            completions_tx,
            completions_rx,
        }
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn phase(&self) -> SearchPhase {
        self.state.phase()
    }

    /// Generation of the most recently issued lookup (0 before the first)
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn has_in_flight(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn has_pending_input(&self) -> bool {
        self.debouncer.is_pending()
    }

    pub fn view(&self) -> SearchView {
        presentation::build_view(&self.state)
    }

    pub fn toolbar(&self) -> ToolbarView {
        presentation::build_toolbar(&self.state)
    }

    pub fn render(&self) -> String {
        presentation::render(&self.state)
    }

    /// Apply one user event; returns `false` when the loop should stop
    pub fn handle_event(&mut self, event: ControllerEvent) -> bool {
        match event {
            ControllerEvent::Input(text) => self.set_query(text),
            ControllerEvent::Clear => self.clear_query(),
            ControllerEvent::ToggleEditMode => {
                self.toggle_edit_mode();
            }
            ControllerEvent::ToggleSelect(id) => {
                self.toggle_select(id);
            }
            ControllerEvent::ToggleAll => self.toggle_all(),
            ControllerEvent::Duplicate => {
                self.duplicate();
            }
            ControllerEvent::Delete => {
                self.delete();
            }
            ControllerEvent::Quit => return false,
        }
        true
    }

    /// Replace the raw query text
    ///
    /// Non-empty text is debounced. Empty text resets to idle at once and
    /// cancels anything pending.
    pub fn set_query(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text.is_empty() {
            self.clear_query();
            return;
        }

        self.state.query = text.clone();
        self.debouncer.push(text);
    }

    pub fn clear_query(&mut self) {
        self.state.query.clear();
        self.debouncer.cancel();
        self.cancel_in_flight();
        self.state.reset_to_idle();
        component_debug!(Component::Controller, "Query cleared");
    }

    pub fn toggle_select(&mut self, id: AccountId) -> bool {
        self.state.toggle_select(id)
    }

    pub fn toggle_all(&mut self) {
        self.state.toggle_all();
    }

    pub fn delete(&mut self) -> usize {
        let removed = self.state.delete_selected();
        debug_assert!(self.state.selection_is_consistent());
        component_debug!(Component::Controller, removed, "Deleted selected accounts");
        removed
    }

    pub fn duplicate(&mut self) -> Vec<AccountId> {
        let created = self.state.duplicate_selected();
        debug_assert!(self.state.selection_is_consistent());
        component_debug!(Component::Controller, created = created.len(), "Duplicated selected accounts");
        created
    }

    pub fn toggle_edit_mode(&mut self) -> bool {
        self.state.toggle_edit_mode()
    }

    /// Wait for the next debounce firing or lookup completion and apply it
    ///
    /// Never resolves when nothing is pending. Cancel-safe.
    pub async fn poll_background(&mut self) -> BackgroundEvent {
        tokio::select! {
            query = self.debouncer.settled() => {
                self.on_debounced(query.clone());
                BackgroundEvent::Debounced(query)
            }
            Some(completion) = self.completions_rx.recv() => self.on_completion(completion),
        }
    }

    /// Drive the controller until `Quit` or until the event channel closes
    ///
    /// `on_render` is called with the initial state and after every change.
    pub async fn run<F>(mut self, mut events: mpsc::Receiver<ControllerEvent>, mut on_render: F) -> SearchState
    where
        F: FnMut(&SearchState),
    {
        on_render(&self.state);

        loop {
            tokio::select! {
                event = events.recv() => match event {
                    Some(event) => {
                        if !self.handle_event(event) {
                            break;
                        }
                    }
                    None => break,
                },
                _ = self.poll_background() => {}
            }
            on_render(&self.state);
        }

        self.cancel_in_flight();
        self.state
    }

    fn on_debounced(&mut self, query: String) {
        if query == self.state.debounced_query {
            component_debug!(Component::Controller, query = %query, "Debounced query unchanged");
            return;
        }

        if query.is_empty() {
            self.cancel_in_flight();
            self.state.reset_to_idle();
            return;
        }

        self.start_lookup(query);
    }

    fn start_lookup(&mut self, query: String) {
        self.cancel_in_flight();

        self.generation += 1;
        let generation = self.generation;
        let cancel = CancellationToken::new();
        self.in_flight = Some(InFlight {
            generation,
            cancel: cancel.clone(),
        });
        self.state.begin_loading(&query);

        component_info!(Component::Controller, generation, query = %query, "Starting lookup");

        let lookup = Arc::clone(&self.lookup);
        let tx = self.completions_tx.clone();

        tokio::spawn(async move {
            let result = lookup.lookup(&query, cancel.clone()).await;
            if cancel.is_cancelled() {
                return;
            }
            let _ = tx.send(LookupCompletion {
                generation,
                query,
                result,
            });
        });
    }

    fn cancel_in_flight(&mut self) {
        if let Some(in_flight) = self.in_flight.take() {
            in_flight.cancel.cancel();
            component_debug!(
                Component::Controller,
                generation = in_flight.generation,
                "Cancelled superseded lookup"
            );
        }
    }

    fn on_completion(&mut self, completion: LookupCompletion) -> BackgroundEvent {
        let generation = completion.generation;

        match &self.in_flight {
            Some(in_flight) if in_flight.generation == generation => {}
            _ => {
                component_debug!(Component::Controller, generation, "Discarding stale lookup result");
                return BackgroundEvent::Discarded { generation };
            }
        }
        self.in_flight = None;

        match completion.result {
            Ok(accounts) => {
                component_info!(
                    Component::Controller,
                    generation,
                    query = %completion.query,
                    results = accounts.len(),
                    "Lookup completed"
                );
                self.state.apply_results(accounts);
            }
            Err(failure) => {
                component_warn!(
                    Component::Controller,
                    generation,
                    query = %completion.query,
                    error = %failure,
                    "Lookup failed"
                );
                self.state.apply_failure(failure);
            }
        }

        BackgroundEvent::Applied { generation }
    }
}
