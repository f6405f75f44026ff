//! Shared "last issued address" cell.
//!
//! One cell for both address kinds; the last completed issuance wins.

use std::sync::Arc;
use tokio::sync::watch;

pub trait AddressStore: Send + Sync {
    fn last_receive(&self) -> Option<String>;
    fn set_last_receive(&self, address: String);
}

impl<T: AddressStore + ?Sized> AddressStore for Arc<T> {
    fn last_receive(&self) -> Option<String> {
        (**self).last_receive()
    }

    fn set_last_receive(&self, address: String) {
        (**self).set_last_receive(address)
    }
}

impl<T: AddressStore + ?Sized> AddressStore for &T {
    fn last_receive(&self) -> Option<String> {
        (**self).last_receive()
    }

    fn set_last_receive(&self, address: String) {
        (**self).set_last_receive(address)
    }
}

/// Cloneable handle to the process-wide address cell.
///
/// Display collaborators (QR code, address field) can [`subscribe`](Self::subscribe)
/// to be woken on every write.
#[derive(Clone, Debug)]
pub struct SharedAddressStore {
    tx: Arc<watch::Sender<Option<String>>>,
}

impl SharedAddressStore {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(None);
        Self { tx: Arc::new(tx) }
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<String>> {
        self.tx.subscribe()
    }
}

impl Default for SharedAddressStore {
    fn default() -> Self {
        Self::new()
    }
}

impl AddressStore for SharedAddressStore {
    fn last_receive(&self) -> Option<String> {
        self.tx.borrow().clone()
    }

    fn set_last_receive(&self, address: String) {
        self.tx.send_replace(Some(address));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty_and_keeps_last_write() {
        let store = SharedAddressStore::new();
        assert_eq!(store.last_receive(), None);
        store.set_last_receive("t1first".into());
        store.set_last_receive("zs1second".into());
        assert_eq!(store.last_receive().as_deref(), Some("zs1second"));
    }

    #[test]
    fn clones_share_the_cell() {
        let store = SharedAddressStore::new();
        let view = store.clone();
        store.set_last_receive("t1abc".into());
        assert_eq!(view.last_receive().as_deref(), Some("t1abc"));
    }

    #[tokio::test]
    async fn subscribers_see_writes() {
        let store = SharedAddressStore::new();
        let mut rx = store.subscribe();
        store.set_last_receive("t1abc".into());
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow().as_deref(), Some("t1abc"));
    }
}
