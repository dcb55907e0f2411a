//! The card view: one `card.getOne` call, tracked to settlement.
//!
//! A [`CardView`] starts [`Idle`](ViewState::Idle). Mounting it moves to
//! [`Pending`](ViewState::Pending) and fires a single "newest card" call on
//! the tokio runtime without blocking the caller. When the call settles the
//! state becomes [`Succeeded`](ViewState::Succeeded) or
//! [`Failed`](ViewState::Failed) and stays there; nothing is retried.
//!
//! Dropping the view aborts an in-flight call and discards its result.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use llamavocs_client::{CardView, LlamaClient, Panel};
//!
//! # async fn example() {
//! let mut view = CardView::new();
//! view.mount(Arc::new(LlamaClient::new()));
//!
//! let state = view.settled().await;
//! println!("{}", Panel::from(&state));
//! # }
//! ```

use std::future::Future;
use std::sync::Arc;

use llamavocs_rpc::GetOneInput;
use llamavocs_store::Card;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::client::LlamaClient;
use crate::error::Result;
use crate::panel::Panel;

/// Something a [`CardView`] can fetch a card from.
///
/// Implemented for [`LlamaClient`], and for the in-process
/// `llamavocs_rpc::Caller` with the `local` feature.
pub trait CardSource: Send + Sync + 'static {
    /// Run `card.getOne` with the given input.
    fn get_one(&self, input: GetOneInput) -> impl Future<Output = Result<Option<Card>>> + Send;
}

impl CardSource for LlamaClient {
    async fn get_one(&self, input: GetOneInput) -> Result<Option<Card>> {
        self.cards().get_one(input).await
    }
}

/// A snapshot of the view's call.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ViewState {
    /// Not mounted yet.
    #[default]
    Idle,
    /// The call is in flight.
    Pending,
    /// The call failed. `message` is `None` when the error carried no text.
    Failed { message: Option<String> },
    /// The call succeeded. `None` means the store has no cards.
    Succeeded(Option<Card>),
}

impl ViewState {
    /// Whether the call has produced a result or a failure.
    pub fn is_settled(&self) -> bool {
        matches!(self, ViewState::Failed { .. } | ViewState::Succeeded(_))
    }
}

/// Drives one `card.getOne` call and exposes its state.
#[derive(Debug)]
pub struct CardView {
    state: watch::Receiver<ViewState>,
    // Taken on mount.
    sender: Option<watch::Sender<ViewState>>,
    task: Option<JoinHandle<()>>,
}

impl CardView {
    /// Create an unmounted view.
    pub fn new() -> Self {
        let (sender, state) = watch::channel(ViewState::Idle);
        Self {
            state,
            sender: Some(sender),
            task: None,
        }
    }

    /// Mount the view: move to `Pending` and fetch the newest card from `source`.
    ///
    /// Must be called within a tokio runtime. A view mounts once; later
    /// calls are ignored.
    pub fn mount<S: CardSource>(&mut self, source: Arc<S>) {
        let Some(sender) = self.sender.take() else {
            warn!("Card view already mounted, ignoring");
            return;
        };

        sender.send_replace(ViewState::Pending);
        debug!("Card view mounted, fetching newest card");

        self.task = Some(tokio::spawn(async move {
            let state = match source.get_one(GetOneInput::newest()).await {
                Ok(card) => {
                    debug!(found = card.is_some(), "Card view settled");
                    ViewState::Succeeded(card)
                }
                Err(e) => {
                    warn!(error = %e, "Card view call failed");
                    let message = e.to_string();
                    ViewState::Failed {
                        message: (!message.is_empty()).then_some(message),
                    }
                }
            };
            sender.send_replace(state);
        }));
    }

    /// The current state.
    pub fn state(&self) -> ViewState {
        self.state.borrow().clone()
    }

    /// The panel for the current state.
    pub fn panel(&self) -> Panel {
        Panel::from(&*self.state.borrow())
    }

    /// Wait until the call settles and return the final state.
    ///
    /// Returns the current state straight away if the view was never
    /// mounted, or if the call was lost before settling.
    pub async fn settled(&self) -> ViewState {
        if self.sender.is_some() {
            return self.state();
        }

        let mut state = self.state.clone();
        let settled = state.wait_for(ViewState::is_settled).await.map(|s| s.clone());
        settled.unwrap_or_else(|_| state.borrow().clone())
    }
}

impl Default for CardView {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for CardView {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
