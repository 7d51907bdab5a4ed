use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use tokio_util::sync::CancellationToken;
use wordbook_config::lookup::LookupConfig;
use wordbook_lookup::{DictionaryService, FreeDictionaryClient};
use wordbook_types::AppEvent;

use crate::command::Command;
use crate::events::event_loop;
use crate::io::spawn_input_reader;
use crate::presenter::Presenter;
use crate::shell::{Flow, Shell};
use crate::state::AppState;

/// Build the online dictionary client, or `None` when lookups are off or
/// the endpoint is unusable.
pub fn build_service(config: &LookupConfig) -> Option<Arc<dyn DictionaryService>> {
    if !config.enabled {
        tracing::info!("Online lookup disabled");
        return None;
    }

    match FreeDictionaryClient::new(config.endpoint.clone(), config.timeout()) {
        Ok(client) => {
            let service: Arc<dyn DictionaryService> = Arc::new(client);
            Some(service)
        }
        Err(e) => {
            tracing::warn!("Online lookup unavailable: {e}");
            None
        }
    }
}

/// Application controller for task spawning and lifecycle
pub struct AppController {
    events: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
    cancel_token: CancellationToken,
}

impl Default for AppController {
    fn default() -> Self {
        Self::new()
    }
}

impl AppController {
    pub fn new() -> Self {
        Self {
            events: kanal::bounded_async(64),
            cancel_token: CancellationToken::new(),
        }
    }

    pub fn shell<P: Presenter>(&self, state: AppState, presenter: P) -> Shell<P> {
        let service = build_service(&state.config.lookup);
        Shell::new(
            state,
            presenter,
            service,
            self.events.0.clone(),
            self.cancel_token.child_token(),
        )
    }

    /// Start the stdin reader and the Ctrl+C watcher
    fn spawn_tasks(&self) -> anyhow::Result<()> {
        spawn_input_reader(self.events.0.clone_sync(), self.cancel_token.child_token())?;

        let tx = self.events.0.clone();
        let cancel = self.cancel_token.child_token();
        tokio::spawn(async move {
            tokio::select! {
                _ = cancel.cancelled() => {}
                result = tokio::signal::ctrl_c() => {
                    if let Err(e) = result {
                        tracing::error!("Failed to listen for Ctrl+C: {e}");
                        return;
                    }
                    let _ = tx.send(AppEvent::Shutdown).await;
                }
            }
        });

        Ok(())
    }

    /// Run `initial` and anything it leaves in flight, or the interactive
    /// shell when there is no initial command.
    pub async fn run<P: Presenter>(
        &self,
        shell: &mut Shell<P>,
        initial: Option<Command>,
    ) -> anyhow::Result<()> {
        self.spawn_tasks()?;

        let events_rx = self.events.1.clone();
        let result = match initial {
            Some(command) => match shell.execute(command) {
                Flow::Exit => Ok(()),
                Flow::Continue => event_loop(shell, events_rx, false).await,
            },
            None => {
                shell.greet();
                event_loop(shell, events_rx, true).await
            }
        };

        self.shutdown();
        result?;

        let failures = shell.status().failures;
        if failures > 0 {
            anyhow::bail!("{failures} change(s) could not be saved");
        }
        Ok(())
    }

    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }
}
