// [libs/sdk/src/lib.rs]
//! Facade over the Elydora operation-signing core.
//!
//! A host process that wants to record operations without touching
//! [`elydora_domain_operation`] and [`elydora_infra_transport`] directly
//! needs three things: somewhere to keep its agent identity and signing
//! key on disk ([`config`]), the installer artifacts a host tool's hooks
//! invoke ([`install`]), and a combined builder+transport handle
//! ([`Agent`]). Every error this crate raises is an
//! [`elydora_infra_transport::ElydoraError`], so callers never need a
//! second error type to match on.

pub mod client;
pub mod config;
pub mod install;

pub use client::Agent;
pub use config::AgentConfig;
pub use install::{guard_script_body, hook_script_body, write_install_artifacts};

pub use elydora_domain_operation::{BuilderConfig, OperationParams};
pub use elydora_infra_transport::{ClientConfig, ElydoraError};
