//! Account service collaborator.

use async_trait::async_trait;
use cryp_types::AddressKind;
use std::sync::Arc;

use crate::error::IssuanceError;

/// Issues new receive addresses. Implemented by the node RPC client and by
/// test fakes.
#[async_trait]
pub trait AccountService: Send + Sync {
    async fn issue(&self, kind: AddressKind) -> Result<String, IssuanceError>;
}

#[async_trait]
impl<T: AccountService + ?Sized> AccountService for Arc<T> {
    async fn issue(&self, kind: AddressKind) -> Result<String, IssuanceError> {
        (**self).issue(kind).await
    }
}

#[async_trait]
impl<T: AccountService + ?Sized> AccountService for &T {
    async fn issue(&self, kind: AddressKind) -> Result<String, IssuanceError> {
        (**self).issue(kind).await
    }
}
