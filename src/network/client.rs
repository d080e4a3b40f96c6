//! HTTP client wrapper - the two calls against the expenses backend

use crate::config::BackendConfig;
use crate::error::{describe_reqwest_error, FetchError, SubmissionError};
use crate::models::{Expense, NewExpense};

/// Typed access to `/api/expenses`
#[derive(Debug, Clone)]
pub struct ExpensesApi {
    client: reqwest::Client,
    config: BackendConfig,
}

impl ExpensesApi {
    pub fn new(config: BackendConfig) -> Self {
        ExpensesApi {
            client: create_client(),
            config,
        }
    }

    /// `POST {base}/api/expenses`. Any 2xx is success and the body is ignored.
    pub async fn create_expense(&self, expense: &NewExpense) -> Result<(), SubmissionError> {
        let resp = self
            .client
            .post(self.config.expenses_url())
            .json(expense)
            .send()
            .await
            .map_err(|e| SubmissionError::Network(describe_reqwest_error(&e)))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(SubmissionError::Status(status.as_u16()));
        }
        Ok(())
    }

    /// `GET {base}/api/expenses?limit=N`. Entries are passed through untouched.
    pub async fn list_expenses(&self, limit: usize) -> Result<Vec<Expense>, FetchError> {
        let resp = self
            .client
            .get(self.config.expenses_url())
            .query(&[("limit", limit)])
            .send()
            .await
            .map_err(|e| FetchError::Network(describe_reqwest_error(&e)))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = resp
            .text()
            .await
            .map_err(|e| FetchError::Network(describe_reqwest_error(&e)))?;
        let entries = serde_json::from_str::<Vec<serde_json::Value>>(&body)
            .map_err(|e| FetchError::Decode(e.to_string()))?;
        Ok(entries.into_iter().map(Expense::from_value).collect())
    }
}

/// Create an HTTP client with default configuration.
///
/// No request timeout is set; a call waits as long as the backend does.
pub fn create_client() -> reqwest::Client {
    reqwest::Client::builder()
        .user_agent(concat!("expense-tui/", env!("CARGO_PKG_VERSION")))
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}
