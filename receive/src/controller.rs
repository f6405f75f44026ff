//! Address issuance workflow.
//!
//! Per kind: `Idle`/`Success`/`Error` → `issue` → `Loading` → `Success` or
//! `Error`. While a kind is `Loading`, further `issue` calls for that kind
//! return [`IssueOutcome::Suppressed`] without touching the service. The two
//! kinds never block each other.

use cryp_types::AddressKind;
use std::sync::{Mutex, PoisonError};

use crate::address_store::AddressStore;
use crate::error::IssuanceError;
use crate::service::AccountService;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum IssuanceState {
    #[default]
    Idle,
    Loading,
    Success(String),
    Error(IssuanceError),
}

impl IssuanceState {
    pub fn is_loading(&self) -> bool {
        matches!(self, IssuanceState::Loading)
    }
}

/// Result of one `issue` call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IssueOutcome {
    Issued(String),
    /// A request for the same kind was already in flight.
    Suppressed,
    Failed(IssuanceError),
}

#[derive(Debug, Default)]
struct States {
    transparent: IssuanceState,
    shielded: IssuanceState,
}

impl States {
    fn slot(&mut self, kind: AddressKind) -> &mut IssuanceState {
        match kind {
            AddressKind::Transparent => &mut self.transparent,
            AddressKind::Shielded => &mut self.shielded,
        }
    }
}

pub struct AddressIssuanceController<S, A> {
    service: S,
    addresses: A,
    states: Mutex<States>,
}

impl<S: AccountService, A: AddressStore> AddressIssuanceController<S, A> {
    pub fn new(service: S, addresses: A) -> Self {
        Self {
            service,
            addresses,
            states: Mutex::new(States::default()),
        }
    }

    pub fn state(&self, kind: AddressKind) -> IssuanceState {
        self.lock().slot(kind).clone()
    }

    pub fn is_loading(&self, kind: AddressKind) -> bool {
        self.lock().slot(kind).is_loading()
    }

    pub fn last_receive(&self) -> Option<String> {
        self.addresses.last_receive()
    }

    /// Return a finished kind to `Idle`. A kind that is loading is left alone.
    pub fn reset(&self, kind: AddressKind) {
        let mut states = self.lock();
        let slot = states.slot(kind);
        if !slot.is_loading() {
            *slot = IssuanceState::Idle;
        }
    }

    /// Request a new address of `kind`.
    ///
    /// Dropping the returned future before it completes returns the kind to `Idle`.
    pub async fn issue(&self, kind: AddressKind) -> IssueOutcome {
        {
            let mut states = self.lock();
            let slot = states.slot(kind);
            if slot.is_loading() {
                tracing::debug!(%kind, "issuance already in flight, request suppressed");
                return IssueOutcome::Suppressed;
            }
            *slot = IssuanceState::Loading;
        }

        let mut pending = PendingIssue {
            states: &self.states,
            kind,
            settled: false,
        };

        tracing::info!(%kind, "requesting new receive address");
        let result = self.service.issue(kind).await;

        match result {
            Ok(address) => {
                self.addresses.set_last_receive(address.clone());
                pending.settle(IssuanceState::Success(address.clone()));
                tracing::info!(%kind, %address, "issued receive address");
                IssueOutcome::Issued(address)
            }
            Err(e) => {
                pending.settle(IssuanceState::Error(e.clone()));
                tracing::warn!(%kind, error = %e, "address issuance failed");
                IssueOutcome::Failed(e)
            }
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, States> {
        self.states.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Returns the kind to `Idle` if the issuing future is dropped mid-flight.
struct PendingIssue<'a> {
    states: &'a Mutex<States>,
    kind: AddressKind,
    settled: bool,
}

impl PendingIssue<'_> {
    fn settle(&mut self, state: IssuanceState) {
        let mut states = self.states.lock().unwrap_or_else(PoisonError::into_inner);
        *states.slot(self.kind) = state;
        self.settled = true;
    }
}

impl Drop for PendingIssue<'_> {
    fn drop(&mut self) {
        if !self.settled {
            let mut states = self.states.lock().unwrap_or_else(PoisonError::into_inner);
            *states.slot(self.kind) = IssuanceState::Idle;
            tracing::debug!(kind = %self.kind, "issuance abandoned");
        }
    }
}
