//! Simulated E2 connection
//!
//! An in-process stand-in for a live E42 session so the xApp binary runs
//! standalone. The node topology comes from the xApp configuration; sends
//! are logged and recorded instead of being encoded onto a wire.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{debug, info};

use nextgric_common::{Error, XappConfig};
use nextgric_rc::{Plmn, RcControlRequest};

use crate::api::{E2Node, E2NodeId, XappConnection};

/// Simulated session connection backed by the xApp configuration.
pub struct SimConnection {
    nodes: Vec<E2Node>,
    sent: Mutex<Vec<(E2NodeId, RcControlRequest)>>,
    stopped: AtomicBool,
}

impl SimConnection {
    /// Builds the simulated topology from an xApp configuration.
    pub fn from_config(config: &XappConfig) -> Self {
        let nodes = config
            .e2_nodes
            .iter()
            .map(|node| E2Node {
                id: E2NodeId {
                    plmn: Plmn {
                        mcc: node.mcc,
                        mnc: node.mnc,
                        mnc_digit_len: if node.mnc >= 100 { 3 } else { 2 },
                    },
                    nb_id: node.nb_id,
                },
            })
            .collect();
        Self {
            nodes,
            sent: Mutex::new(Vec::new()),
            stopped: AtomicBool::new(false),
        }
    }

    /// Requests recorded by `send_rc_control`, in dispatch order.
    pub async fn sent_requests(&self) -> Vec<(E2NodeId, RcControlRequest)> {
        self.sent.lock().await.clone()
    }

    /// True once the session acknowledged a stop request.
    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl XappConnection for SimConnection {
    async fn e2_nodes(&self) -> Result<Vec<E2Node>, Error> {
        debug!(count = self.nodes.len(), "simulated node discovery");
        Ok(self.nodes.clone())
    }

    async fn send_rc_control(
        &self,
        node: &E2NodeId,
        request: &RcControlRequest,
    ) -> Result<(), Error> {
        info!(
            node = %node,
            action_id = request.hdr.ctrl_action_id(),
            tree_nodes = request.msg.node_count(),
            "simulated control dispatch"
        );
        self.sent.lock().await.push((*node, request.clone()));
        Ok(())
    }

    async fn try_stop(&self) -> bool {
        self.stopped.store(true, Ordering::SeqCst);
        true
    }
}
