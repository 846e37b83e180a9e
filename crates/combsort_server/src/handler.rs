//! Request handlers.

use crate::auth::AccessGate;
use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::journal::{SortJournal, SortRecord};
use crate::wire::{SortBody, SortResponse};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use axum::{Extension, Json};
use combsort_core::{CombSorter, SortRequest, SortResult};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Shared state handed to every handler.
pub(crate) struct AppState {
    pub(crate) config: ServerConfig,
    gate: Arc<dyn AccessGate>,
    journal: Arc<dyn SortJournal>,
    sorter: CombSorter,
}

impl AppState {
    pub(crate) fn new(
        config: ServerConfig,
        gate: Arc<dyn AccessGate>,
        journal: Arc<dyn SortJournal>,
    ) -> Self {
        Self {
            config,
            gate,
            journal,
            sorter: CombSorter::new(),
        }
    }
}

pub(crate) type SharedState = Arc<AppState>;

/// User id resolved by [`require_caller`].
#[derive(Debug, Clone)]
pub(crate) struct Caller(pub(crate) String);

/// Resolves the caller through the access gate before the body is read.
pub(crate) async fn require_caller(
    State(state): State<SharedState>,
    mut request: Request,
    next: Next,
) -> ServerResult<Response> {
    let user = state.gate.authorize(request.headers()).inspect_err(|e| {
        warn!(error = %e, "rejected unauthorized sort request");
    })?;
    request.extensions_mut().insert(Caller(user));
    Ok(next.run(request).await)
}

/// `GET /`
pub(crate) async fn index() -> &'static str {
    "Sorting Service API - Comb Sort\n\n\
     POST /api/sort  {\"array\": [int], \"ascending\": bool, \"gap\": int|null}\n"
}

/// `POST /api/sort`
pub(crate) async fn sort(
    State(state): State<SharedState>,
    Extension(Caller(user)): Extension<Caller>,
    body: Result<Json<SortBody>, JsonRejection>,
) -> ServerResult<Json<SortResponse>> {
    let Json(body) = body.map_err(|rejection| {
        warn!(user = %user, error = %rejection.body_text(), "malformed sort request");
        ServerError::from(rejection)
    })?;

    let request = body
        .into_request(state.config.max_values)
        .inspect_err(|e| warn!(user = %user, error = %e, "rejected sort request"))?;

    info!(user = %user, "Sorting array of {} elements", request.values.len());
    debug!(
        order = ?request.order,
        gap = ?request.gap,
        custom_gap = request.has_usable_gap(),
        "sort parameters"
    );

    let original = request.values.clone();
    let order = request.order;
    let result = run_with_deadline(state.sorter, request, state.config.request_timeout)
        .await
        .inspect_err(|e| warn!(user = %user, error = %e, "sort failed"))?;

    state.journal.record(&SortRecord::new(
        "Sorting completed successfully",
        original.clone(),
        result.sorted_values.clone(),
        Some(user),
    ));

    Ok(Json(SortResponse::new(original, order, result)))
}

/// Runs the engine on the blocking pool and stops waiting after `deadline`.
///
/// The engine has no yield points, so an abandoned sort still runs to
/// completion on its worker; only the response is cut short.
async fn run_with_deadline(
    sorter: CombSorter,
    request: SortRequest<i32>,
    deadline: Duration,
) -> ServerResult<SortResult<i32>> {
    let task = tokio::task::spawn_blocking(move || sorter.run(&request));
    match tokio::time::timeout(deadline, task).await {
        Ok(Ok(result)) => Ok(result),
        Ok(Err(join_error)) => Err(ServerError::Internal(format!(
            "sort task failed: {join_error}"
        ))),
        Err(_) => Err(ServerError::Timeout(deadline)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn deadline_allows_quick_sorts() {
        let request = SortRequest::new(vec![5, 2, 8, 1, 9, 3]);
        let result = run_with_deadline(CombSorter::new(), request, Duration::from_secs(5))
            .await
            .unwrap();
        assert_eq!(result.sorted_values, vec![1, 2, 3, 5, 8, 9]);
        assert_eq!(result.initial_gap, 4);
    }

    #[tokio::test]
    async fn zero_deadline_times_out() {
        let values: Vec<i32> = (0..50_000).rev().collect();
        let request = SortRequest::new(values);
        let result = run_with_deadline(CombSorter::new(), request, Duration::ZERO).await;
        assert!(matches!(result, Err(ServerError::Timeout(_))));
    }
}
