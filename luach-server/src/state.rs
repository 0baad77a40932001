use luach_core::hebcal::HebcalClient;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub hebcal: HebcalClient,
}

impl AppState {
    pub fn new(hebcal: HebcalClient) -> Self {
        AppState { hebcal }
    }
}
