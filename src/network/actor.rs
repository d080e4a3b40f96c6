//! Network actor - runs backend requests in the Tokio async runtime

use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::messages::{NetworkCommand, NetworkResponse};
use crate::network::client::ExpensesApi;

/// Network actor that turns commands into HTTP calls.
///
/// Requests are never cancelled. Each one runs to completion and its result is
/// sent back tagged with the command id; the app layer decides whether anyone
/// still cares.
pub struct NetworkActor {
    api: ExpensesApi,
    response_tx: mpsc::UnboundedSender<NetworkResponse>,
    active_requests: JoinSet<()>,
}

impl NetworkActor {
    pub fn new(api: ExpensesApi, response_tx: mpsc::UnboundedSender<NetworkResponse>) -> Self {
        NetworkActor {
            api,
            response_tx,
            active_requests: JoinSet::new(),
        }
    }

    /// Run the network actor message loop
    pub async fn run(mut self, mut cmd_rx: mpsc::UnboundedReceiver<NetworkCommand>) {
        loop {
            tokio::select! {
                biased;

                cmd = cmd_rx.recv() => {
                    match cmd {
                        Some(NetworkCommand::CreateExpense { id, expense }) => {
                            let response_tx = self.response_tx.clone();
                            let api = self.api.clone();

                            self.active_requests.spawn(async move {
                                tracing::info!(id, title = %expense.title, amount = expense.amount, "Adding expense");
                                let result = api.create_expense(&expense).await;
                                match &result {
                                    Ok(()) => tracing::info!(id, "Expense added"),
                                    Err(e) => tracing::error!(id, error = %e, "Adding expense failed"),
                                }
                                let _ = response_tx.send(NetworkResponse::Created { id, result });
                            });
                        }

                        Some(NetworkCommand::FetchExpenses { id, limit }) => {
                            let response_tx = self.response_tx.clone();
                            let api = self.api.clone();

                            self.active_requests.spawn(async move {
                                tracing::info!(id, limit, "Loading expenses");
                                let result = api.list_expenses(limit).await;
                                match &result {
                                    Ok(items) => tracing::info!(id, count = items.len(), "Expenses loaded"),
                                    Err(e) => tracing::error!(id, error = %e, "Loading expenses failed"),
                                }
                                let _ = response_tx.send(NetworkResponse::Loaded { id, result });
                            });
                        }

                        Some(NetworkCommand::Shutdown) | None => break,
                    }
                }

                // Clean up completed tasks
                Some(_result) = self.active_requests.join_next() => {}
            }
        }
    }
}
