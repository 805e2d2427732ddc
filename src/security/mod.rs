//! Access control subsystem.
//!
//! # Design Decisions
//! - Denial is an expected terminal outcome, not an error: the gate answers
//!   with a full 403 page and the request never reaches the renderer.
//! - Approval has no side effect; the gate attaches nothing to the request.

pub mod access_control;

pub use access_control::{access_gate, candidate_address, Allowlist, GateState};
