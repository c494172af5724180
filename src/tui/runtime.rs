use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, trace};

use super::action::Action;
use super::effects::{ActionFuture, DataEffects, Effect};
use super::reducer::reduce;
use super::state::ViewState;

/// Runtime - owns the view state and processes actions one at a time
///
/// The Runtime is responsible for:
/// - Managing the view state
/// - Dispatching actions through the reducer
/// - Executing side effects asynchronously
///
/// User intents and fetch completions all arrive as actions on one
/// channel, so state is only ever mutated from the thread driving it.
pub struct Runtime {
    /// Current view state
    state: ViewState,

    /// Completions from the effect executor
    action_rx: mpsc::UnboundedReceiver<Action>,

    /// Channel for queuing async work
    effect_tx: mpsc::UnboundedSender<ActionFuture>,

    /// Data effects handler
    data_effects: Arc<DataEffects>,
}

impl Runtime {
    /// Create a new runtime with initial state and data effects handler
    ///
    /// Must be called from within a tokio runtime.
    pub fn new(initial_state: ViewState, data_effects: Arc<DataEffects>) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let (effect_tx, mut effect_rx) = mpsc::unbounded_channel();

        // Spawn effect executor task
        tokio::spawn(async move {
            Self::run_effect_executor(&mut effect_rx, action_tx).await;
        });

        Self {
            state: initial_state,
            action_rx,
            effect_tx,
            data_effects,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Dispatch an action to be processed by the reducer
    ///
    /// Uses mem::take to avoid cloning the state.
    pub fn dispatch(&mut self, action: Action) {
        if action.is_completion() {
            debug!("ACTION: Completion arrived");
        }
        trace!("ACTION: Dispatching {:?}", action);

        let state = std::mem::take(&mut self.state);
        let (new_state, effect) = reduce(state, action);
        self.state = new_state;

        self.execute_effect(effect);
    }

    /// Turn fetch effects into async work and hand it to the executor
    fn execute_effect(&self, effect: Effect) {
        match effect {
            Effect::None => {}
            Effect::FetchGames(request) => {
                debug!("EFFECT: Executing games fetch for {}", request.date);
                self.execute_effect(self.data_effects.fetch_games(request));
            }
            Effect::FetchBoxscore(request) => {
                debug!("EFFECT: Executing box score fetch for game_id={}", request.game_id);
                self.execute_effect(self.data_effects.fetch_boxscore(request));
            }
            Effect::Async(future) => {
                trace!("ACTION: Queueing effect for async execution");
                let _ = self.effect_tx.send(future);
            }
        }
    }

    /// Process all pending actions in the queue without waiting
    ///
    /// Returns the number of actions processed
    pub fn process_actions(&mut self) -> usize {
        let mut count = 0;
        while let Ok(action) = self.action_rx.try_recv() {
            self.dispatch(action);
            count += 1;
        }
        count
    }

    /// Wait for the next action and process it
    ///
    /// Returns false once the effect executor has shut down.
    pub async fn process_next(&mut self) -> bool {
        match self.action_rx.recv().await {
            Some(action) => {
                self.dispatch(action);
                true
            }
            None => false,
        }
    }

    /// Execute effects asynchronously
    ///
    /// This runs in a separate tokio task. Each future gets its own task,
    /// so fetches overlap and complete in any order.
    async fn run_effect_executor(
        effect_rx: &mut mpsc::UnboundedReceiver<ActionFuture>,
        action_tx: mpsc::UnboundedSender<Action>,
    ) {
        while let Some(future) = effect_rx.recv().await {
            let action_tx = action_tx.clone();
            tokio::spawn(async move {
                let action = future.await;
                let _ = action_tx.send(action);
            });
        }
    }
}
