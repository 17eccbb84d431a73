//! One browser session: a navigation controller whose history lives in the
//! client.
//!
//! The browser owns the real history stack, so [`ClientHistory`] turns each
//! push or replace into a [`ServerMessage::History`] for the client to apply.
//! Back and forward come back in as [`ClientCommand::PopState`], which the
//! controller replays without writing history.

use std::pin::pin;
use std::sync::Arc;
use std::time::Duration;

use algoflow_core::{
    Frame, History, HistoryEntry, HistoryWrite, Mode, NavigationController, NavigationSource,
    NavigationState, PlaybackSpeed, TopicId, TopicRegistry,
};
use futures::{Sink, SinkExt, Stream, StreamExt};
use serde::{Deserialize, Serialize};
use tokio::time::{sleep_until, Instant};
use tracing::{debug, warn};

use crate::error::Result;

/// Commands sent by the client.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientCommand {
    /// Page loaded with this URL fragment.
    Init {
        #[serde(default)]
        fragment: Option<String>,
    },
    /// Topic card clicked.
    Navigate { topic_id: TopicId },
    /// Back-to-landing control clicked.
    Landing,
    /// Browser back/forward landed on this entry.
    PopState {
        #[serde(default)]
        state: Option<NavigationState>,
    },
    Next,
    Previous,
    Jump { index: usize },
    Mode { mode: Mode },
    Play,
    Pause,
    Reset,
    Speed { multiplier: PlaybackSpeed },
}

/// Messages sent to the client.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    /// Apply a history write: `pushState` or `replaceState`.
    History {
        op: HistoryWrite,
        state: NavigationState,
        url: String,
    },
    /// Redraw everything.
    Frame { frame: Frame },
    /// A command could not be understood.
    Error { message: String },
}

/// History kept by the browser, mirrored as outgoing messages.
#[derive(Debug, Default)]
pub struct ClientHistory {
    current: Option<HistoryEntry>,
    outbox: Vec<ServerMessage>,
}

impl ClientHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the writes not yet sent.
    pub fn drain(&mut self) -> Vec<ServerMessage> {
        std::mem::take(&mut self.outbox)
    }

    fn send(&mut self, op: HistoryWrite, entry: HistoryEntry) {
        self.outbox.push(ServerMessage::History {
            op,
            state: entry.state.clone(),
            url: entry.url.clone(),
        });
        self.current = Some(entry);
    }
}

impl History for ClientHistory {
    fn push(&mut self, entry: HistoryEntry) {
        self.send(HistoryWrite::Push, entry);
    }

    fn replace(&mut self, entry: HistoryEntry) {
        self.send(HistoryWrite::Replace, entry);
    }

    fn current(&self) -> Option<&HistoryEntry> {
        self.current.as_ref()
    }
}

/// Navigation and playback state of one connected client.
#[derive(Debug)]
pub struct Session {
    controller: NavigationController<ClientHistory>,
}

impl Session {
    pub fn new(registry: Arc<TopicRegistry>, log_capacity: usize) -> Self {
        Self {
            controller: NavigationController::new(registry, ClientHistory::new())
                .with_log_capacity(log_capacity),
        }
    }

    pub fn controller(&self) -> &NavigationController<ClientHistory> {
        &self.controller
    }

    /// Apply one command at session time `now`. Returns the history writes it
    /// caused followed by the new frame.
    pub fn handle(&mut self, command: ClientCommand, now: Duration) -> Vec<ServerMessage> {
        debug!(?command, "client command");
        let c = &mut self.controller;
        match command {
            ClientCommand::Init { fragment } => c.initial_load(fragment.as_deref()),
            ClientCommand::Navigate { topic_id } => {
                c.select_topic(&topic_id, NavigationSource::User);
            }
            ClientCommand::Landing => c.show_landing(NavigationSource::User),
            ClientCommand::PopState { state } => c.pop_state(state),
            ClientCommand::Next => {
                if let Some(p) = c.playback_mut() {
                    p.next();
                }
            }
            ClientCommand::Previous => {
                if let Some(p) = c.playback_mut() {
                    p.previous();
                }
            }
            ClientCommand::Jump { index } => {
                if let Some(p) = c.playback_mut() {
                    p.jump_to(index);
                }
            }
            ClientCommand::Mode { mode } => {
                if let Some(p) = c.playback_mut() {
                    p.switch_to(mode);
                }
            }
            ClientCommand::Play => {
                if let Some(p) = c.playback_mut() {
                    p.start(now);
                }
            }
            ClientCommand::Pause => {
                if let Some(p) = c.playback_mut() {
                    p.pause();
                }
            }
            ClientCommand::Reset => {
                if let Some(p) = c.playback_mut() {
                    p.reset();
                }
            }
            ClientCommand::Speed { multiplier } => {
                if let Some(p) = c.playback_mut() {
                    p.set_speed(multiplier);
                }
            }
        }

        let mut out = self.controller.history_mut().drain();
        out.push(self.frame());
        out
    }

    /// Parse and apply a raw client message.
    pub fn handle_text(&mut self, text: &str, now: Duration) -> Vec<ServerMessage> {
        match serde_json::from_str::<ClientCommand>(text) {
            Ok(command) => self.handle(command, now),
            Err(err) => {
                warn!(%err, "unreadable client message");
                vec![ServerMessage::Error {
                    message: err.to_string(),
                }]
            }
        }
    }

    /// Fire due simulation ticks. Returns a frame if anything changed.
    pub fn advance_to(&mut self, now: Duration) -> Option<ServerMessage> {
        (self.controller.advance_to(now) > 0).then(|| self.frame())
    }

    /// Session time of the next simulation tick.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.controller.next_deadline()
    }

    pub fn frame(&self) -> ServerMessage {
        ServerMessage::Frame {
            frame: self.controller.frame(),
        }
    }
}

/// Run a session until the client goes away.
///
/// `incoming` yields raw client messages; every reply is written to
/// `outgoing` as JSON. Between messages the loop sleeps until the next
/// simulation tick is due. Dropping the session on return tears down any
/// running simulation.
pub async fn drive<I, O>(mut session: Session, incoming: I, outgoing: O) -> Result<()>
where
    I: Stream<Item = String>,
    O: Sink<String>,
{
    let mut incoming = pin!(incoming);
    let mut outgoing = pin!(outgoing);
    let origin = Instant::now();

    loop {
        let deadline = session.next_deadline().map(|d| origin + d);
        let replies = tokio::select! {
            text = incoming.next() => match text {
                Some(text) => session.handle_text(&text, origin.elapsed()),
                None => break,
            },
            _ = wait_until(deadline) => session.advance_to(origin.elapsed()).into_iter().collect(),
        };

        for reply in replies {
            let json = serde_json::to_string(&reply)?;
            if outgoing.send(json).await.is_err() {
                debug!("client stopped listening");
                return Ok(());
            }
        }
    }

    debug!("client disconnected");
    Ok(())
}

async fn wait_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}
