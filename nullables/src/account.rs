//! Nullable account service: scripted address issuance.

use async_trait::async_trait;
use cryp_receive::{AccountService, IssuanceError};
use cryp_types::AddressKind;
use std::collections::VecDeque;
use std::sync::Mutex;
use tokio::sync::oneshot;

enum Reply {
    Ready(Result<String, IssuanceError>),
    Held(oneshot::Receiver<Result<String, IssuanceError>>),
}

/// Handle for a held reply; the pending issuance call resolves when this is released.
pub struct HeldReply(oneshot::Sender<Result<String, IssuanceError>>);

impl HeldReply {
    pub fn resolve(self, address: impl Into<String>) {
        let _ = self.0.send(Ok(address.into()));
    }

    pub fn reject(self, error: IssuanceError) {
        let _ = self.0.send(Err(error));
    }
}

/// Answers issuance calls from a script, in order.
///
/// An exhausted script answers with [`IssuanceError::Other`].
#[derive(Default)]
pub struct NullAccountService {
    script: Mutex<VecDeque<Reply>>,
    calls: Mutex<Vec<AddressKind>>,
}

impl NullAccountService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next call succeeds immediately with `address`.
    pub fn push_address(&self, address: impl Into<String>) {
        self.script
            .lock()
            .unwrap()
            .push_back(Reply::Ready(Ok(address.into())));
    }

    /// Next call fails immediately with `error`.
    pub fn push_error(&self, error: IssuanceError) {
        self.script.lock().unwrap().push_back(Reply::Ready(Err(error)));
    }

    /// Next call stays pending until the returned handle is released.
    pub fn hold(&self) -> HeldReply {
        let (tx, rx) = oneshot::channel();
        self.script.lock().unwrap().push_back(Reply::Held(rx));
        HeldReply(tx)
    }

    /// Kinds requested so far, in call order.
    pub fn calls(&self) -> Vec<AddressKind> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl AccountService for NullAccountService {
    async fn issue(&self, kind: AddressKind) -> Result<String, IssuanceError> {
        self.calls.lock().unwrap().push(kind);
        let reply = self.script.lock().unwrap().pop_front();
        match reply {
            Some(Reply::Ready(result)) => result,
            Some(Reply::Held(rx)) => rx
                .await
                .unwrap_or_else(|_| Err(IssuanceError::Other("held reply dropped".into()))),
            None => Err(IssuanceError::Other("no scripted reply".into())),
        }
    }
}
