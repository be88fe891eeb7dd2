//! Lookup controller: owns the search text and the request state machine.
//!
//! A submission is split in two so the network call can run elsewhere (for
//! example in a spawned task) while state changes stay with the owner:
//! [`LookupController::begin`] moves to `Loading` and hands out a [`Ticket`],
//! [`LookupController::fetch`] performs the request, and
//! [`LookupController::apply`] folds the [`Completion`] back in. Completions
//! from anything but the most recently issued ticket are dropped.

use std::{future::Future, sync::Arc};

use crate::{
    Config,
    error::FetchError,
    model::{Lookup, RequestState},
    provider::WeatherProvider,
};

/// Keys the search input reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Escape,
    Other,
}

/// User interaction with the search input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// The input text changed.
    Edit(String),
    Key(Key),
    /// The search icon was clicked.
    SearchClicked,
}

/// Handle for one issued request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    pub generation: u64,
    pub query: String,
}

#[derive(Debug)]
pub struct Completion {
    pub generation: u64,
    pub outcome: Result<Lookup, FetchError>,
}

#[derive(Debug)]
pub struct LookupController {
    provider: Arc<dyn WeatherProvider>,
    initial_query: String,
    query: String,
    state: RequestState,
    generation: u64,
}

impl LookupController {
    pub fn new(config: &Config, provider: Arc<dyn WeatherProvider>) -> Self {
        Self {
            provider,
            initial_query: config.initial_query.clone(),
            query: config.initial_query.clone(),
            state: RequestState::Idle,
            generation: 0,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn state(&self) -> &RequestState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    /// Replace the search text. Empty text is allowed and sent as-is.
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
    }

    /// Start a request for the current query and enter `Loading`.
    ///
    /// Any ticket issued earlier becomes stale.
    pub fn begin(&mut self) -> Ticket {
        self.generation += 1;
        self.state = RequestState::Loading;
        tracing::debug!(generation = self.generation, query = %self.query, "lookup started");

        Ticket { generation: self.generation, query: self.query.clone() }
    }

    /// Perform the request for `ticket` without touching controller state.
    pub fn fetch(&self, ticket: Ticket) -> impl Future<Output = Completion> + Send + use<> {
        let provider = Arc::clone(&self.provider);
        async move {
            let outcome = provider.current(&ticket.query).await;
            Completion { generation: ticket.generation, outcome }
        }
    }

    /// Fold a finished request into the state.
    ///
    /// Returns `false` when the completion belongs to a superseded request and
    /// was ignored.
    pub fn apply(&mut self, completion: Completion) -> bool {
        if completion.generation != self.generation {
            tracing::debug!(
                generation = completion.generation,
                latest = self.generation,
                "ignoring stale lookup result"
            );
            return false;
        }

        self.state = match completion.outcome {
            Ok(Lookup::Found(snapshot)) => {
                tracing::debug!(city = %snapshot.city, "lookup succeeded");
                RequestState::Success(snapshot)
            }
            Ok(Lookup::NotFound) => {
                tracing::info!(query = %self.query, "city not found");
                RequestState::NotFound
            }
            Err(err) => {
                tracing::warn!(error = %err, "weather lookup failed");
                RequestState::Failed(err.user_message().to_string())
            }
        };
        true
    }

    /// Look up the current query and wait for the result.
    pub async fn submit(&mut self) -> &RequestState {
        let ticket = self.begin();
        let completion = self.fetch(ticket).await;
        self.apply(completion);
        &self.state
    }

    /// Initial lookup with the configured starting city.
    pub async fn on_mount(&mut self) -> &RequestState {
        self.query = self.initial_query.clone();
        self.submit().await
    }

    /// React to input. Returns a ticket when the event starts a request.
    pub fn handle(&mut self, event: InputEvent) -> Option<Ticket> {
        match event {
            InputEvent::Edit(text) => {
                self.set_query(text);
                None
            }
            InputEvent::Key(Key::Enter) | InputEvent::SearchClicked => Some(self.begin()),
            InputEvent::Key(_) => None,
        }
    }
}
