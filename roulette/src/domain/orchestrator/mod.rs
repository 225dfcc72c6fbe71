//! Async shell executing state machine effects over the domain ports.
//!
//! The orchestrator is the only writer of [`AppState`]. Adapter calls run as
//! spawned tasks and report back over a channel, so intents keep flowing
//! while requests are outstanding. Each applied event publishes a fresh
//! [`AppView`] on a watch channel.

mod runtime;


use tokio::sync::{mpsc, watch};
use tracing::{debug, info, warn};

pub use self::runtime::RoulettePorts;
use crate::domain::{AppState, AppView, Completion, Effect, Intent};

enum Event {
    Intent(Option<Intent>),
    Completion(Completion),
}

/// Owner of the application state and executor of its effects.
pub struct Orchestrator {
    state: AppState,
    ports: RoulettePorts,
    completions_tx: mpsc::UnboundedSender<Completion>,
    completions_rx: mpsc::UnboundedReceiver<Completion>,
    in_flight: usize,
    view_tx: watch::Sender<AppView>,
}

impl Orchestrator {
    /// Wrap `state`; nothing runs until [`Orchestrator::start`].
    #[must_use]
    pub fn new(state: AppState, ports: RoulettePorts) -> Self {
        let (completions_tx, completions_rx) = mpsc::unbounded_channel();
        let (view_tx, _) = watch::channel(state.view());
        Self {
            state,
            ports,
            completions_tx,
            completions_rx,
            in_flight: 0,
            view_tx,
        }
    }

    /// Run the startup effects. Must be called inside a Tokio runtime.
    pub fn start(&mut self) {
        let effects = self.state.start();
        self.execute(effects);
        self.publish();
    }

    /// Apply a user action and launch whatever it requests.
    pub fn dispatch(&mut self, intent: Intent) {
        debug!(?intent, "dispatching intent");
        let effects = self.state.handle_intent(intent);
        self.execute(effects);
        self.publish();
    }

    /// Wait for the next outstanding request to finish and apply it.
    ///
    /// Returns `false` without waiting when nothing is outstanding.
    pub async fn settle_next(&mut self) -> bool {
        if self.in_flight == 0 {
            return false;
        }
        match self.completions_rx.recv().await {
            Some(completion) => {
                self.apply(completion);
                true
            }
            None => false,
        }
    }

    /// Apply completions until nothing is outstanding, including requests
    /// launched by the completions themselves.
    pub async fn settle(&mut self) {
        while self.settle_next().await {}
    }

    /// Current projection.
    #[must_use]
    pub fn view(&self) -> AppView {
        self.state.view()
    }

    /// State as of the last applied intent or completion.
    #[must_use]
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Number of requests whose completion has not been applied yet.
    #[must_use]
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Receiver that observes every published projection.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<AppView> {
        self.view_tx.subscribe()
    }

    /// Serve intents until the sender side closes, applying completions as
    /// they arrive. Returns the final state.
    pub async fn run(mut self, mut intents: mpsc::Receiver<Intent>) -> AppState {
        self.start();
        loop {
            let event = tokio::select! {
                intent = intents.recv() => Event::Intent(intent),
                Some(completion) = self.completions_rx.recv() => Event::Completion(completion),
            };
            match event {
                Event::Intent(Some(intent)) => self.dispatch(intent),
                Event::Intent(None) => {
                    info!(outstanding = self.in_flight, "intent stream closed; stopping");
                    break;
                }
                Event::Completion(completion) => self.apply(completion),
            }
        }
        self.state
    }

    fn apply(&mut self, completion: Completion) {
        self.in_flight = self.in_flight.saturating_sub(1);
        let effects = self.state.handle_completion(completion);
        self.execute(effects);
        self.publish();
    }

    fn publish(&self) {
        self.view_tx.send_replace(self.state.view());
    }

    fn execute(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::RequestLocation { ticket, options } => {
                    let task = runtime::locate(self.ports.location.clone(), ticket, options);
                    self.spawn(task);
                }
                Effect::FetchAddress {
                    ticket,
                    coordinates,
                    language,
                } => {
                    let source = self.ports.addresses.clone();
                    self.spawn(runtime::resolve_address(source, ticket, coordinates, language));
                }
                Effect::FetchRecommendation { ticket, request } => {
                    let source = self.ports.recommendations.clone();
                    self.spawn(runtime::recommend(source, ticket, request));
                }
                Effect::OpenLink { url } => {
                    if let Err(error) = self.ports.links.open(&url) {
                        warn!(kind = error.kind(), %error, %url, "failed to open link");
                    }
                }
            }
        }
    }

    fn spawn<F>(&mut self, task: F)
    where
        F: Future<Output = Completion> + Send + 'static,
    {
        self.in_flight += 1;
        let completions = self.completions_tx.clone();
        tokio::spawn(async move {
            let completion = task.await;
            if completions.send(completion).is_err() {
                debug!("orchestrator gone before completion was delivered");
            }
        });
    }
}
