// HTTP request handlers
//
// One generic handler per action; the router instantiates each for the four
// record types. Store calls block, so they run on the blocking pool.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect};
use axum::Extension;
use petadopt_core::{ExError, ExErrorKind};
use petadopt_core_types::RequestId;
use petadopt_service::CrudService;
use petadopt_store::Record;

use crate::error::ApiError;
use crate::extract::{FormInput, RecordKey};
use crate::render::{self, Tabular};
use crate::state::AppState;

type HandlerResult<T> = std::result::Result<T, ApiError>;

/// Run a service call on the blocking pool, tagging failures with the request id
async fn blocking<T, F>(state: &AppState, request_id: &RequestId, call: F) -> HandlerResult<T>
where
    T: Send + 'static,
    F: FnOnce(&CrudService) -> petadopt_store::Result<T> + Send + 'static,
{
    let service = state.service.clone();
    let outcome = tokio::task::spawn_blocking(move || call(&service))
        .await
        .map_err(|e| {
            ExError::new(ExErrorKind::Internal).with_message(format!("store task failed: {}", e))
        })
        .and_then(|result| result);

    outcome.map_err(|e| ApiError::from(e.with_request_id(request_id.clone())))
}

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

pub async fn home() -> Html<String> {
    Html(render::home_page())
}

/// GET listing of one record type
pub async fn list<R: Record + Tabular>(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
) -> HandlerResult<Html<String>> {
    let records = blocking(&state, &request_id, |service| service.list::<R>()).await?;
    Ok(Html(render::list_page(&records)))
}

/// POST add form
pub async fn create<R: Record + Tabular>(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    FormInput(form): FormInput,
) -> HandlerResult<Redirect> {
    blocking(&state, &request_id, move |service| service.create::<R>(&form)).await?;
    Ok(Redirect::to(R::KIND.list_path()))
}

/// GET edit form for one record
pub async fn edit_form<R: Record + Tabular>(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    RecordKey(id): RecordKey,
) -> HandlerResult<Html<String>> {
    let record = blocking(&state, &request_id, move |service| service.get::<R>(&id)).await?;
    Ok(Html(render::edit_page(&record)))
}

/// POST edit form
pub async fn edit<R: Record + Tabular>(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    RecordKey(id): RecordKey,
    FormInput(form): FormInput,
) -> HandlerResult<Redirect> {
    blocking(&state, &request_id, move |service| {
        service.edit::<R>(&id, &form)
    })
    .await?;
    Ok(Redirect::to(R::KIND.list_path()))
}

/// GET delete; absent keys still redirect
pub async fn delete<R: Record + Tabular>(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    RecordKey(id): RecordKey,
) -> HandlerResult<Redirect> {
    blocking(&state, &request_id, move |service| service.remove::<R>(&id)).await?;
    Ok(Redirect::to(R::KIND.list_path()))
}
