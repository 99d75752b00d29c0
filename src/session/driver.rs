//! Runs a [`ScreenSession`] on its own task.
//!
//! Every intent, whether from a [`SessionHandle`] or from a finished fetch,
//! goes through one channel, so the session is only ever touched by the
//! loop task.

use std::sync::Arc;

use thiserror::Error;
use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;

use crate::layout::LayoutSource;
use crate::ui::screen::ScreenStatus;
use crate::value::PrimitiveValue;

use super::effect::Effect;
use super::intent::{LoadTicket, SessionIntent};
use super::screen::ScreenSession;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Session loop has stopped")]
    Closed,
}

struct DriverMessage {
    intent: SessionIntent,
    /// Acked with whether the intent started a layout load.
    respond_to: Option<oneshot::Sender<bool>>,
}

/// Owner of the session loop task.
pub struct SessionDriver {
    handle: SessionHandle,
    effects: Option<mpsc::UnboundedReceiver<Effect>>,
    task: JoinHandle<()>,
}

impl SessionDriver {
    pub fn spawn(mut session: ScreenSession, source: Arc<dyn LayoutSource>) -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        let status = session.subscribe();
        let effects = session.take_effects();
        let fetch_sender = sender.downgrade();

        tracing::debug!(session = %session.id(), "Starting session loop");
        let task = tokio::spawn(run(session, source, receiver, fetch_sender));

        Self {
            handle: SessionHandle { sender, status },
            effects,
            task,
        }
    }

    pub fn handle(&self) -> SessionHandle {
        self.handle.clone()
    }

    pub fn status(&self) -> watch::Receiver<ScreenStatus> {
        self.handle.status.clone()
    }

    /// The effect stream; `None` once taken.
    pub fn take_effects(&mut self) -> Option<mpsc::UnboundedReceiver<Effect>> {
        self.effects.take()
    }

    /// Stop the loop. Queued intents and in-flight fetches are dropped.
    pub fn shutdown(self) {
        self.task.abort();
    }
}

async fn run(
    mut session: ScreenSession,
    source: Arc<dyn LayoutSource>,
    mut receiver: mpsc::UnboundedReceiver<DriverMessage>,
    fetch_sender: mpsc::WeakUnboundedSender<DriverMessage>,
) {
    while let Some(message) = receiver.recv().await {
        let ticket = session.handle(message.intent);
        let started_load = ticket.is_some();
        if let Some(ticket) = ticket {
            spawn_fetch(ticket, Arc::clone(&source), fetch_sender.clone());
        }
        if let Some(respond_to) = message.respond_to {
            if respond_to.send(started_load).is_err() {
                tracing::trace!("Session: intent ack dropped (receiver gone)");
            }
        }
    }
    tracing::debug!(session = %session.id(), "Session loop stopped");
}

fn spawn_fetch(
    ticket: LoadTicket,
    source: Arc<dyn LayoutSource>,
    fetch_sender: mpsc::WeakUnboundedSender<DriverMessage>,
) {
    tokio::spawn(async move {
        let result = source.fetch_layout(&ticket.layout_id).await;
        let Some(sender) = fetch_sender.upgrade() else {
            tracing::trace!(layout = %ticket.layout_id, "Session gone, dropping fetched layout");
            return;
        };
        let message = DriverMessage {
            intent: SessionIntent::LayoutFetched { ticket, result },
            respond_to: None,
        };
        if sender.send(message).is_err() {
            tracing::trace!("Session loop stopped before fetch completed");
        }
    });
}

/// Cloneable entry point for intents.
#[derive(Clone)]
pub struct SessionHandle {
    sender: mpsc::UnboundedSender<DriverMessage>,
    status: watch::Receiver<ScreenStatus>,
}

impl SessionHandle {
    /// Queue an intent without waiting for it.
    pub fn send(&self, intent: SessionIntent) -> Result<(), SessionError> {
        self.sender
            .send(DriverMessage {
                intent,
                respond_to: None,
            })
            .map_err(|_| SessionError::Closed)
    }

    /// Queue an intent and wait until the loop has applied it. Returns
    /// whether the intent started a layout load.
    ///
    /// A load is applied when it has started; use
    /// [`submit_and_settle`](Self::submit_and_settle) to wait for its result.
    pub async fn submit(&self, intent: SessionIntent) -> Result<bool, SessionError> {
        let (respond_to, receiver) = oneshot::channel();
        self.sender
            .send(DriverMessage {
                intent,
                respond_to: Some(respond_to),
            })
            .map_err(|_| SessionError::Closed)?;
        receiver.await.map_err(|_| SessionError::Closed)
    }

    /// Submit, then wait for the load it started, if any, to finish.
    ///
    /// An intent that starts no load returns the current status as is.
    pub async fn submit_and_settle(&self, intent: SessionIntent) -> Result<ScreenStatus, SessionError> {
        if self.submit(intent).await? {
            self.settled().await
        } else {
            Ok(self.status())
        }
    }

    /// Wait until the status is no longer `Loading`.
    pub async fn settled(&self) -> Result<ScreenStatus, SessionError> {
        let mut status = self.status.clone();
        let settled = status
            .wait_for(|status| !status.is_loading())
            .await
            .map_err(|_| SessionError::Closed)?;
        Ok(settled.clone())
    }

    pub fn status(&self) -> ScreenStatus {
        self.status.borrow().clone()
    }

    pub async fn load_layout(&self, layout_id: &str) -> Result<ScreenStatus, SessionError> {
        self.submit_and_settle(SessionIntent::load(layout_id)).await
    }

    pub async fn deep_link(&self, layout_id: &str) -> Result<ScreenStatus, SessionError> {
        self.submit_and_settle(SessionIntent::deep_link(layout_id)).await
    }

    pub async fn back(&self) -> Result<ScreenStatus, SessionError> {
        self.submit_and_settle(SessionIntent::Back).await
    }

    pub async fn refresh(&self) -> Result<ScreenStatus, SessionError> {
        self.submit_and_settle(SessionIntent::Refresh).await
    }

    pub async fn interact(
        &self,
        layout_id: &str,
        component_id: &str,
        event: &str,
    ) -> Result<ScreenStatus, SessionError> {
        self.submit_and_settle(SessionIntent::interaction(layout_id, component_id, event))
            .await
    }

    pub async fn update_state(
        &self,
        layout_id: &str,
        path: &str,
        value: PrimitiveValue,
    ) -> Result<ScreenStatus, SessionError> {
        self.submit_and_settle(SessionIntent::update_state(layout_id, path, value))
            .await
    }

    pub async fn data_arrived(
        &self,
        layout_id: &str,
        payload: PrimitiveValue,
    ) -> Result<ScreenStatus, SessionError> {
        self.submit_and_settle(SessionIntent::data_arrived(layout_id, payload))
            .await
    }
}
