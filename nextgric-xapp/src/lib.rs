//! nextgric xApp library
//!
//! The xApp reconfigures per-slice PRB quotas on every connected E2 node.
//! It assembles one E2SM-RC "Slice-level PRB quota" control request and
//! fans it out over the session boundary defined by [`XappConnection`].
//! The binary wires the driver to [`SimConnection`], an in-process
//! stand-in for a live E42 session.

pub mod api;
pub mod driver;
pub mod sim;

pub use api::{E2Node, E2NodeId, XappConnection};
pub use driver::{DriverState, XappDriver, STOP_POLL_INTERVAL};
pub use sim::SimConnection;
