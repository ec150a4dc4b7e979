use std::{sync::Arc, time::Instant};

use platelens_core::application::PlatelensService;

use crate::{application::http::server::session::SessionGate, args::Args};

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: Arc<PlatelensService>,
    pub session: SessionGate,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: PlatelensService) -> Self {
        Self {
            args,
            service: Arc::new(service),
            session: SessionGate::new(),
            started_at: Instant::now(),
        }
    }
}
