// src/services/scan_session.rs
//
// Scan Session - orchestrator of one scan cycle per admitted detection
//
// CRITICAL RULES:
// - Takes only the first detection when the camera reports several at once
// - Dropped detections are silent; steady-state during continuous scanning
// - The classifier runs only when the registry holds no record
// - The in-flight slot is released on every exit path (RAII guard)
// - Failures are decided here, per kind; nothing propagates unhandled

use std::sync::Arc;

use log::{debug, warn};

use crate::domain::{
    validate_raw_code, Detection, RawCode, ScanDetails, ScanIntent, ScanResult,
};
use crate::events::{EventBus, ScanAdmitted, ScanCompleted, ScanLookupFailed};
use crate::presentation::ScanPresenter;
use crate::registry::{DetailResolver, LookupError, ResolvedDetails};
use crate::services::classifier::PayloadClassifier;
use crate::services::scan_gate::ScanGate;

/// What one camera callback amounted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    /// Detection rejected or unusable; nothing visible happened
    Dropped,
    /// A ScanResult was handed to presentation
    Navigated,
    /// A lookup failure was surfaced as a transient error
    ErrorSurfaced,
}

pub struct ScanSession {
    intent: ScanIntent,
    gate: Arc<ScanGate>,
    resolver: Arc<dyn DetailResolver>,
    classifier: PayloadClassifier,
    presenter: Arc<dyn ScanPresenter>,
    event_bus: Arc<EventBus>,
}

impl ScanSession {
    pub fn new(
        intent: ScanIntent,
        gate: Arc<ScanGate>,
        resolver: Arc<dyn DetailResolver>,
        presenter: Arc<dyn ScanPresenter>,
        event_bus: Arc<EventBus>,
    ) -> Self {
        Self {
            intent,
            gate,
            resolver,
            classifier: PayloadClassifier::new(),
            presenter,
            event_bus,
        }
    }

    pub fn intent(&self) -> ScanIntent {
        self.intent
    }

    /// Camera callback entry point. Drives one full cycle:
    /// admission, capture, lookup, hand-off or error surface.
    pub async fn handle_detections(&self, detections: &[Detection]) -> CycleOutcome {
        // Tie-break: first detected code wins
        let Some(detection) = detections.first() else {
            return CycleOutcome::Dropped;
        };

        if !self.intent.accepts(&detection.symbology) {
            debug!(
                "detection dropped: symbology {} not accepted for {}",
                detection.symbology, self.intent
            );
            return CycleOutcome::Dropped;
        }

        if !self.gate.admit(detection) {
            return CycleOutcome::Dropped;
        }

        // Claim the single-flight slot; released when _guard drops,
        // whatever the outcome of the lookup below
        let Some(_guard) = self.gate.begin_processing() else {
            return CycleOutcome::Dropped;
        };

        let raw_code = RawCode::from_detection(detection);
        if let Err(violation) = validate_raw_code(&raw_code) {
            debug!("detection dropped: {}", violation);
            return CycleOutcome::Dropped;
        }

        self.event_bus.emit(ScanAdmitted::new(
            raw_code.value.clone(),
            raw_code.symbology.clone(),
            self.intent.to_string(),
        ));

        match self.resolver.resolve(&raw_code, self.intent).await {
            Ok(details) => self.hand_off(raw_code, Self::recognized(details)),
            Err(LookupError::NotFound) => {
                // Not a failure: fall back to the classified shape
                let classified = self.classifier.classify(&raw_code.value);
                self.hand_off(raw_code, ScanDetails::Unrecognized(classified))
            }
            Err(failure) => {
                warn!(
                    "lookup failed for {} ({}): {}",
                    raw_code.value, self.intent, failure
                );
                self.event_bus.emit(ScanLookupFailed::new(
                    raw_code.value,
                    self.intent.to_string(),
                    failure.to_string(),
                ));
                self.presenter.show_error(&failure.to_string());
                CycleOutcome::ErrorSurfaced
            }
        }
    }

    fn recognized(details: ResolvedDetails) -> ScanDetails {
        match details {
            ResolvedDetails::Machine(machine) => ScanDetails::Machine(machine),
            ResolvedDetails::RawMaterialLot(lot) => ScanDetails::RawMaterialLot(lot),
        }
    }

    fn hand_off(&self, raw_code: RawCode, details: ScanDetails) -> CycleOutcome {
        self.event_bus.emit(ScanCompleted::new(
            raw_code.value.clone(),
            self.intent.to_string(),
            details.is_recognized(),
        ));

        let result = ScanResult::new(raw_code, self.intent, details);
        self.presenter.navigate_to_details(result);
        CycleOutcome::Navigated
    }
}
