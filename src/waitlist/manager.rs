//! Runs waitlist requests in the background.
//!
//! The UI loop never awaits the network: each call is spawned as its own
//! task and its result comes back as an [`AppEvent`].

use crate::app::event::AppEvent;
use crate::waitlist::{FormId, WaitlistClient};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub struct WaitlistManager {
    client: Arc<dyn WaitlistClient>,
    event_tx: mpsc::UnboundedSender<AppEvent>,
}

impl WaitlistManager {
    pub fn new(client: Arc<dyn WaitlistClient>, event_tx: mpsc::UnboundedSender<AppEvent>) -> Self {
        Self { client, event_tx }
    }

    /// Send one signup. The outcome arrives as [`AppEvent::WaitlistResponse`].
    pub fn submit(&self, form: FormId, email: String) -> JoinHandle<()> {
        let client = Arc::clone(&self.client);
        let event_tx = self.event_tx.clone();
        tokio::spawn(async move {
            let outcome = client.submit(form, &email).await;
            match &outcome {
                Ok(receipt) => tracing::info!(
                    form = form.name(),
                    id = ?receipt.id,
                    message = receipt.message.as_deref().unwrap_or(""),
                    "waitlist signup accepted"
                ),
                Err(e) => tracing::warn!(form = form.name(), error = %e, "waitlist signup not accepted"),
            }
            let _ = event_tx.send(AppEvent::WaitlistResponse { form, outcome });
        })
    }

    /// Fetch the signup counter. Failures are only logged.
    pub fn refresh_count(&self) -> JoinHandle<()> {
        let client = Arc::clone(&self.client);
        let event_tx = self.event_tx.clone();
        tokio::spawn(async move {
            match client.count().await {
                Ok(count) => {
                    let _ = event_tx.send(AppEvent::WaitlistCount(count));
                }
                Err(e) => tracing::debug!(error = %e, "waitlist count unavailable"),
            }
        })
    }
}
