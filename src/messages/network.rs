//! Network messages - communication between App and Network layers

use crate::error::{FetchError, SubmissionError};
use crate::models::{Expense, NewExpense};

/// Commands sent from App layer to Network layer
#[derive(Debug, Clone)]
pub enum NetworkCommand {
    /// `POST /api/expenses`
    CreateExpense {
        id: u64,
        expense: NewExpense,
    },
    /// `GET /api/expenses?limit=..`
    FetchExpenses {
        id: u64,
        limit: usize,
    },
    /// Shutdown the network actor
    Shutdown,
}

impl NetworkCommand {
    pub fn id(&self) -> Option<u64> {
        match self {
            NetworkCommand::CreateExpense { id, .. } => Some(*id),
            NetworkCommand::FetchExpenses { id, .. } => Some(*id),
            NetworkCommand::Shutdown => None,
        }
    }
}

/// Responses sent from Network layer to App layer
#[derive(Debug, Clone)]
pub enum NetworkResponse {
    /// Result of a `CreateExpense`
    Created {
        id: u64,
        result: Result<(), SubmissionError>,
    },
    /// Result of a `FetchExpenses`
    Loaded {
        id: u64,
        result: Result<Vec<Expense>, FetchError>,
    },
}

impl NetworkResponse {
    /// Get the request ID from the response
    pub fn id(&self) -> u64 {
        match self {
            NetworkResponse::Created { id, .. } => *id,
            NetworkResponse::Loaded { id, .. } => *id,
        }
    }

    pub fn is_ok(&self) -> bool {
        match self {
            NetworkResponse::Created { result, .. } => result.is_ok(),
            NetworkResponse::Loaded { result, .. } => result.is_ok(),
        }
    }
}
