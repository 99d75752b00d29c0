use std::sync::Arc;

use tokio::sync::{mpsc, watch};
use uuid::Uuid;

use crate::actions::{ActionDispatcher, Directive};
use crate::config::SessionConfig;
use crate::layout::LayoutError;
use crate::model::ComponentNode;
use crate::navigation::NavigationController;
use crate::state::{property_path, StateStore};
use crate::ui::mvi::Reducer;
use crate::ui::screen::{ScreenSnapshot, ScreenStatus, ScreenStatusReducer, StatusIntent};
use crate::value::PrimitiveValue;

use super::effect::Effect;
use super::intent::{LoadMode, LoadTicket, SessionIntent};

/// Screen currently shown in `Success`.
#[derive(Debug, Clone)]
struct Shown {
    screen_id: String,
    tree: Arc<ComponentNode>,
}

/// Single-writer owner of one session's tree, state and back-stack.
///
/// `handle` never performs I/O. A load returns a [`LoadTicket`]; the caller
/// fetches the layout and feeds the result back as
/// [`SessionIntent::LayoutFetched`]. Only the ticket of the latest
/// generation is applied.
pub struct ScreenSession {
    id: Uuid,
    config: SessionConfig,
    dispatcher: ActionDispatcher,
    store: StateStore,
    navigation: NavigationController,
    status: ScreenStatus,
    status_tx: watch::Sender<ScreenStatus>,
    effects_tx: mpsc::UnboundedSender<Effect>,
    effects_rx: Option<mpsc::UnboundedReceiver<Effect>>,
    shown: Option<Shown>,
    generation: u64,
    /// Latest load issued; kept after a failure so refresh can retry it.
    last_load: Option<LoadTicket>,
    revision: u64,
}

impl std::fmt::Debug for ScreenSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScreenSession")
            .field("id", &self.id)
            .field("back_stack", &self.navigation.entries())
            .field("generation", &self.generation)
            .field("revision", &self.revision)
            .finish_non_exhaustive()
    }
}

impl ScreenSession {
    pub fn new(config: SessionConfig) -> Self {
        Self::with_dispatcher(config, ActionDispatcher::default())
    }

    pub fn with_dispatcher(config: SessionConfig, dispatcher: ActionDispatcher) -> Self {
        let (status_tx, _) = watch::channel(ScreenStatus::default());
        let (effects_tx, effects_rx) = mpsc::unbounded_channel();
        let id = Uuid::new_v4();
        tracing::debug!(session = %id, "Session created");
        Self {
            id,
            config,
            dispatcher,
            store: StateStore::new(),
            navigation: NavigationController::new(),
            status: ScreenStatus::default(),
            status_tx,
            effects_tx,
            effects_rx: Some(effects_rx),
            shown: None,
            generation: 0,
            last_load: None,
            revision: 0,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn status(&self) -> &ScreenStatus {
        &self.status
    }

    /// Watch every status publication.
    pub fn subscribe(&self) -> watch::Receiver<ScreenStatus> {
        self.status_tx.subscribe()
    }

    /// The effect stream. There is one consumer; later calls return `None`.
    /// Effects sent before the consumer takes the stream stay queued.
    pub fn take_effects(&mut self) -> Option<mpsc::UnboundedReceiver<Effect>> {
        self.effects_rx.take()
    }

    pub fn store(&self) -> &StateStore {
        &self.store
    }

    pub fn navigation(&self) -> &NavigationController {
        &self.navigation
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Id of the screen shown in `Success`, if any.
    pub fn current_screen(&self) -> Option<&str> {
        self.shown.as_ref().map(|shown| shown.screen_id.as_str())
    }

    /// Apply one intent. Returns the fetch to perform when the intent
    /// started a load.
    pub fn handle(&mut self, intent: SessionIntent) -> Option<LoadTicket> {
        tracing::trace!(session = %self.id, intent = intent.name(), "Handling intent");
        match intent {
            SessionIntent::LoadLayout { layout_id } => Some(self.begin_load(layout_id, LoadMode::Push)),
            SessionIntent::DeepLink { layout_id } => Some(self.begin_load(layout_id, LoadMode::Reset)),
            SessionIntent::Back => self.back(),
            SessionIntent::Refresh => self.refresh(),
            SessionIntent::Interaction {
                layout_id,
                component_id,
                event,
            } => self.interact(&layout_id, &component_id, &event),
            SessionIntent::UpdateState {
                layout_id,
                path,
                value,
            } => {
                self.store.write(&layout_id, property_path(&path), value);
                self.recompose_if_shown(&layout_id);
                None
            }
            SessionIntent::DataArrived { layout_id, payload } => {
                self.merge_data(&layout_id, &payload);
                None
            }
            SessionIntent::LayoutFetched { ticket, result } => {
                self.on_fetched(ticket, result);
                None
            }
        }
    }

    fn begin_load(&mut self, layout_id: String, mode: LoadMode) -> LoadTicket {
        self.generation += 1;
        let ticket = LoadTicket {
            generation: self.generation,
            layout_id,
            mode,
        };
        tracing::info!(
            session = %self.id,
            layout = %ticket.layout_id,
            mode = ?ticket.mode,
            generation = ticket.generation,
            "Loading layout"
        );
        self.last_load = Some(ticket.clone());
        self.dispatch(StatusIntent::LoadStarted);
        ticket
    }

    fn on_fetched(&mut self, ticket: LoadTicket, result: Result<ComponentNode, LayoutError>) {
        if ticket.generation != self.generation {
            tracing::debug!(
                session = %self.id,
                layout = %ticket.layout_id,
                generation = ticket.generation,
                current = self.generation,
                "Discarding stale layout result"
            );
            return;
        }

        let tree = match result {
            Ok(tree) => tree,
            Err(err) => {
                tracing::error!(
                    session = %self.id,
                    layout = %ticket.layout_id,
                    error = %err,
                    "Layout fetch failed"
                );
                // Only a failed reload has its screen on the stack; a failed
                // push or deep link leaves the old top to go back to.
                let can_go_back = match ticket.mode {
                    LoadMode::Replace => self.navigation.can_go_back(),
                    LoadMode::Push | LoadMode::Reset => !self.navigation.is_empty(),
                };
                self.shown = None;
                self.dispatch(StatusIntent::Failed {
                    message: err.to_string(),
                    can_go_back,
                });
                return;
            }
        };

        if self.config.validate_unique_ids {
            for id in tree.duplicate_ids() {
                tracing::warn!(
                    session = %self.id,
                    layout = %ticket.layout_id,
                    component = %id,
                    "Duplicate component id, lookups use the first match"
                );
            }
        }

        let screen_id = ticket.layout_id;
        match ticket.mode {
            LoadMode::Push => self.navigation.push(&screen_id),
            LoadMode::Replace => {
                if self.navigation.is_empty() {
                    self.navigation.push(&screen_id);
                }
            }
            LoadMode::Reset => {
                self.navigation.reset_to(&screen_id);
                self.store.clear();
            }
        }
        self.store.seed_from_tree(&screen_id, &tree);
        self.last_load = None;

        self.shown = Some(Shown {
            screen_id,
            tree: Arc::new(tree),
        });
        if let Some(snapshot) = self.snapshot() {
            tracing::info!(
                session = %self.id,
                screen = %snapshot.screen_id,
                depth = self.navigation.len(),
                "Screen loaded"
            );
            self.dispatch(StatusIntent::Loaded(snapshot));
        }
    }

    fn back(&mut self) -> Option<LoadTicket> {
        // A pending or failed push is not on the stack yet: going back means
        // returning to the current top.
        let off_stack = self.shown.is_none()
            && self
                .last_load
                .as_ref()
                .is_some_and(|ticket| ticket.mode != LoadMode::Replace);

        let target = if off_stack {
            self.navigation.peek().map(str::to_string)
        } else {
            self.navigation.pop().map(str::to_string)
        };

        match target {
            Some(previous) => Some(self.begin_load(previous, LoadMode::Replace)),
            None => {
                tracing::debug!(session = %self.id, "Back ignored, nothing to go back to");
                None
            }
        }
    }

    fn refresh(&mut self) -> Option<LoadTicket> {
        if self.shown.is_none() {
            if let Some(ticket) = self.last_load.clone() {
                return Some(self.begin_load(ticket.layout_id, ticket.mode));
            }
        }
        match self.navigation.peek().map(str::to_string) {
            Some(current) => Some(self.begin_load(current, LoadMode::Replace)),
            None => {
                tracing::debug!(session = %self.id, "Refresh ignored, nothing loaded");
                None
            }
        }
    }

    fn interact(&mut self, layout_id: &str, component_id: &str, event: &str) -> Option<LoadTicket> {
        let Some(shown) = self.shown.clone().filter(|shown| shown.screen_id == layout_id) else {
            tracing::debug!(
                session = %self.id,
                layout = %layout_id,
                component = %component_id,
                "Interaction for a screen that is not shown, dropped"
            );
            return None;
        };
        let Some(component) = shown.tree.find_by_id(component_id) else {
            tracing::warn!(
                session = %self.id,
                screen = %layout_id,
                component = %component_id,
                "Interaction for unknown component"
            );
            return None;
        };

        let directives = self.dispatcher.dispatch(
            layout_id,
            component_id,
            event,
            &component.interactions,
            &mut self.store,
        );

        let mut reload = None;
        let mut dirty = false;
        for directive in directives {
            match directive {
                Directive::Emit(effect) => self.emit(effect),
                Directive::Recompose => dirty = true,
                Directive::Reload => reload = Some(layout_id.to_string()),
            }
        }

        if dirty {
            self.recompose_if_shown(layout_id);
        }
        reload.map(|screen_id| self.begin_load(screen_id, LoadMode::Replace))
    }

    fn merge_data(&mut self, layout_id: &str, payload: &PrimitiveValue) {
        if payload.as_map().is_none() {
            tracing::warn!(
                session = %self.id,
                layout = %layout_id,
                kind = payload.kind(),
                "Ignoring screen data that is not an object"
            );
            return;
        }
        let written = self.store.merge(layout_id, payload);
        tracing::debug!(session = %self.id, layout = %layout_id, entries = written, "Merged screen data");
        self.recompose_if_shown(layout_id);
    }

    /// Publish a fresh snapshot when `screen_id` is the one shown.
    fn recompose_if_shown(&mut self, screen_id: &str) {
        let Some(shown) = self.shown.as_mut().filter(|shown| shown.screen_id == screen_id) else {
            return;
        };
        shown.tree = Arc::new(shown.tree.deep_copy());
        if let Some(snapshot) = self.snapshot() {
            tracing::debug!(
                session = %self.id,
                screen = %screen_id,
                revision = snapshot.revision,
                "Recomposed"
            );
            self.dispatch(StatusIntent::Recomposed(snapshot));
        }
    }

    fn snapshot(&mut self) -> Option<ScreenSnapshot> {
        let shown = self.shown.as_ref()?;
        self.revision += 1;
        Some(ScreenSnapshot {
            screen_id: shown.screen_id.clone(),
            tree: Arc::clone(&shown.tree),
            state: Arc::new(self.store.scoped(&shown.screen_id)),
            revision: self.revision,
            can_go_back: self.navigation.can_go_back(),
            back_stack: self.navigation.entries().to_vec(),
        })
    }

    fn emit(&self, effect: Effect) {
        tracing::debug!(session = %self.id, effect = ?effect, "Emitting effect");
        if self.effects_tx.send(effect).is_err() {
            tracing::debug!(session = %self.id, "Effect dropped, observer is gone");
        }
    }

    fn dispatch(&mut self, intent: StatusIntent) {
        let current = std::mem::take(&mut self.status);
        self.status = ScreenStatusReducer::reduce(current, intent);
        self.status_tx.send_replace(self.status.clone());
    }
}
