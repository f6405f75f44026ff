//! Receive-address issuance for the CRYP wallet.
//!
//! [`AddressIssuanceController`] drives one four-state workflow per
//! [`AddressKind`](cryp_types::AddressKind), suppresses duplicate requests
//! while a kind is loading, and publishes every issued address to the shared
//! [`AddressStore`].

pub mod address_store;
pub mod controller;
pub mod error;
pub mod rpc;
pub mod service;

pub use address_store::{AddressStore, SharedAddressStore};
pub use controller::{AddressIssuanceController, IssuanceState, IssueOutcome};
pub use error::IssuanceError;
pub use rpc::{RpcAccountService, RpcConfig};
pub use service::AccountService;
