//! E2 session boundary
//!
//! The xApp core does not manage the E42 session itself; it consumes three
//! capabilities from the session layer: discovering the connected E2
//! nodes, sending a control request to one node, and asking the session to
//! stop. [`XappConnection`] is that seam. Production deployments plug a
//! live session client in here; tests and standalone runs use
//! [`crate::SimConnection`].

use std::fmt;

use async_trait::async_trait;

use nextgric_common::Error;
use nextgric_rc::{Plmn, RcControlRequest};

/// Global identifier of an E2 node (gNB).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct E2NodeId {
    /// PLMN of the node
    pub plmn: Plmn,
    /// gNB identifier within the PLMN
    pub nb_id: u32,
}

impl fmt::Display for E2NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:03}-{:02}/gnb-{}",
            self.plmn.mcc, self.plmn.mnc, self.nb_id
        )
    }
}

/// A connected E2 node as reported by the session layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct E2Node {
    /// Global node identifier
    pub id: E2NodeId,
}

/// Capabilities the xApp consumes from the external session layer.
///
/// `send_rc_control` is fire-and-forget from the xApp's perspective:
/// transport failures are the session layer's own error channel, the
/// driver logs them without interpreting or retrying.
#[async_trait]
pub trait XappConnection: Send + Sync {
    /// Returns the currently connected E2 nodes. May block on session
    /// state; an empty result is a fatal precondition for the driver.
    async fn e2_nodes(&self) -> Result<Vec<E2Node>, Error>;

    /// Dispatches one control request to one node.
    async fn send_rc_control(
        &self,
        node: &E2NodeId,
        request: &RcControlRequest,
    ) -> Result<(), Error>;

    /// Asks the session layer to stop. Idempotent; polled until it
    /// reports success.
    async fn try_stop(&self) -> bool;
}
