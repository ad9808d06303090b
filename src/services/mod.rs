//! Service layer for CardBank
//!
//! The service layer provides business logic on top of the storage layer:
//! account and card management, balance operations and transfers.

pub mod account;
pub mod transfer;
pub mod validation;

pub use account::AccountService;
pub use transfer::{TransferOutcome, TransferService};
pub use validation::{AccountValidator, ValidationIssue};
