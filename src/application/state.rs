// src/application/state.rs

use std::sync::Arc;

use crate::camera::CameraAccess;
use crate::domain::ScanIntent;
use crate::error::AppResult;
use crate::events::{register_logging_handlers, EventBus};
use crate::presentation::ScanPresenter;
use crate::registry::{DetailResolver, HttpDetailResolver, RegistryConfig};
use crate::services::{ScanGate, ScanSession, ShareService};

/// Pipeline composition root.
/// All fields are Arc-wrapped for thread-safe sharing with the front-end.
/// The camera and presenter collaborators are supplied by whoever embeds
/// the pipeline; the resolver is built here from the registry config.
pub struct AppState {
    pub event_bus: Arc<EventBus>,
    pub scan_gate: Arc<ScanGate>,
    pub detail_resolver: Arc<dyn DetailResolver>,
    pub presenter: Arc<dyn ScanPresenter>,
    pub share_service: Arc<ShareService>,
}

impl AppState {
    pub fn new(
        registry_config: RegistryConfig,
        camera: Arc<dyn CameraAccess>,
        presenter: Arc<dyn ScanPresenter>,
    ) -> AppResult<Self> {
        let event_bus = Arc::new(EventBus::new());
        register_logging_handlers(&event_bus);

        let detail_resolver: Arc<dyn DetailResolver> =
            Arc::new(HttpDetailResolver::new(registry_config)?);
        let scan_gate = Arc::new(ScanGate::new(camera, Arc::clone(&event_bus)));

        Ok(Self {
            event_bus,
            scan_gate,
            detail_resolver,
            presenter,
            share_service: Arc::new(ShareService::new()),
        })
    }

    /// Open a scan session for the chosen intent. The gate is shared, so
    /// sessions opened from the same state never run cycles concurrently.
    pub fn open_session(&self, intent: ScanIntent) -> ScanSession {
        ScanSession::new(
            intent,
            Arc::clone(&self.scan_gate),
            Arc::clone(&self.detail_resolver),
            Arc::clone(&self.presenter),
            Arc::clone(&self.event_bus),
        )
    }
}
