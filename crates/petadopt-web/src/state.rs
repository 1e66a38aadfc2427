// App state for the axum server
use petadopt_service::CrudService;

#[derive(Clone)]
pub struct AppState {
    pub service: CrudService,
}
