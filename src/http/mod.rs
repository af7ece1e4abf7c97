//! Internal HTTP layer for HR chat backend communication.
//!
//! Only [`common`] constants, [`Endpoint`](common::Endpoint) and
//! [`RequestOptions`](gateway::RequestOptions) are re-exported from the crate root.

pub(crate) mod chat;
pub(crate) mod common;
pub(crate) mod error_helpers;
pub(crate) mod gateway;
pub(crate) mod loud_wire;
