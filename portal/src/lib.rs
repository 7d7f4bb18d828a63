//! Shared authentication core for the college portal.
//!
//! This crate owns the role model, the durable session contract, login
//! response normalization, and the login controller used by both `client`
//! (browser) and `cli` (terminal). It performs no I/O of its own: network
//! access and storage are injected through the [`login::LoginApi`] and
//! [`session::Storage`] traits.

pub mod envelope;
pub mod login;
pub mod role;
pub mod session;

pub use login::{Credentials, LoginApi, LoginConfig, LoginController, LoginError, LoginSuccess, TransportError};
pub use role::Role;
pub use session::{MemoryStorage, Session, SessionStore, Storage, StorageError};
