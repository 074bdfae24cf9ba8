//! xApp session driver
//!
//! Runs the control cycle against the session boundary: discover nodes,
//! assemble one slice-level PRB quota request, fan it out to every node,
//! then poll the session layer until it stops. The driver is strictly
//! sequential; the only waits are the discovery call and the shutdown
//! polling loop.

use std::time::{Duration, Instant};

use tracing::{debug, error, info};

use nextgric_common::{Error, SliceRatioConfig};
use nextgric_rc::{build_slice_prb_quota_request, default_slice_quotas, RcControlRequest};

use crate::api::XappConnection;

/// Sleep interval between shutdown polls.
pub const STOP_POLL_INTERVAL: Duration = Duration::from_millis(1);

/// Observable driver state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DriverState {
    /// Created, nothing discovered yet
    #[default]
    Init,
    /// Node list obtained from the session layer
    NodesDiscovered,
    /// Fan-out finished (successfully dispatched or logged per node)
    Sent,
    /// Session layer acknowledged the stop request
    Stopped,
}

/// Drives one control cycle over an [`XappConnection`].
pub struct XappDriver<C: XappConnection> {
    connection: C,
    state: DriverState,
}

impl<C: XappConnection> XappDriver<C> {
    /// Creates a driver over the given session connection.
    pub fn new(connection: C) -> Self {
        Self {
            connection,
            state: DriverState::Init,
        }
    }

    /// Current driver state.
    pub fn state(&self) -> DriverState {
        self.state
    }

    /// Returns the underlying connection.
    pub fn connection(&self) -> &C {
        &self.connection
    }

    /// Runs the control cycle with ratios taken from the environment
    /// (`SLICE1_RATIO` / `SLICE2_RATIO`).
    pub async fn run(&mut self) -> Result<(), Error> {
        self.run_with_ratios(SliceRatioConfig::from_env()).await
    }

    /// Runs the control cycle with explicit ratio configuration.
    ///
    /// Zero discovered nodes aborts the run before any parameter tree is
    /// built; absence of nodes is a session/topology failure outside this
    /// layer's control and is not retried.
    pub async fn run_with_ratios(&mut self, ratios: SliceRatioConfig) -> Result<(), Error> {
        let nodes = self.connection.e2_nodes().await?;
        if nodes.is_empty() {
            return Err(Error::Topology("no E2 nodes connected".to_string()));
        }
        info!(count = nodes.len(), "connected E2 nodes");
        self.state = DriverState::NodesDiscovered;

        let quotas = default_slice_quotas(&ratios);
        let request: RcControlRequest = build_slice_prb_quota_request(&quotas)
            .map_err(|e| Error::Control(e.to_string()))?;

        let start = Instant::now();
        for node in &nodes {
            debug!(node = %node.id, "dispatching slice-level PRB quota control");
            if let Err(e) = self.connection.send_rc_control(&node.id, &request).await {
                // Transport errors are the session layer's own channel;
                // the fan-out is fire-and-forget at this layer.
                error!(node = %node.id, error = %e, "transport reported send failure");
            }
        }
        let latency = start.elapsed();
        info!(
            nodes = nodes.len(),
            latency_us = latency.as_micros() as u64,
            "control fan-out complete"
        );
        self.state = DriverState::Sent;
        drop(request);

        while !self.connection.try_stop().await {
            tokio::time::sleep(STOP_POLL_INTERVAL).await;
        }
        self.state = DriverState::Stopped;
        info!("xApp session stopped");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{E2Node, E2NodeId};
    use async_trait::async_trait;
    use nextgric_rc::Plmn;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    struct MockConnection {
        nodes: Vec<E2Node>,
        sent: Mutex<Vec<(E2NodeId, RcControlRequest)>>,
        stop_denials: AtomicUsize,
        fail_send_for: Option<E2NodeId>,
    }

    impl MockConnection {
        fn with_nodes(count: u32) -> Self {
            let nodes = (1..=count)
                .map(|nb_id| E2Node {
                    id: E2NodeId {
                        plmn: Plmn {
                            mcc: 1,
                            mnc: 1,
                            mnc_digit_len: 2,
                        },
                        nb_id,
                    },
                })
                .collect();
            Self {
                nodes,
                sent: Mutex::new(Vec::new()),
                stop_denials: AtomicUsize::new(0),
                fail_send_for: None,
            }
        }
    }

    #[async_trait]
    impl XappConnection for MockConnection {
        async fn e2_nodes(&self) -> Result<Vec<E2Node>, Error> {
            Ok(self.nodes.clone())
        }

        async fn send_rc_control(
            &self,
            node: &E2NodeId,
            request: &RcControlRequest,
        ) -> Result<(), Error> {
            self.sent.lock().unwrap().push((*node, request.clone()));
            if self.fail_send_for.as_ref() == Some(node) {
                return Err(Error::Transport("simulated send failure".to_string()));
            }
            Ok(())
        }

        async fn try_stop(&self) -> bool {
            self.stop_denials
                .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
                .is_err()
        }
    }

    #[tokio::test]
    async fn test_zero_nodes_aborts_before_building() {
        let mut driver = XappDriver::new(MockConnection::with_nodes(0));
        let err = driver
            .run_with_ratios(SliceRatioConfig::default())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Topology(_)));
        assert_eq!(driver.state(), DriverState::Init);
        assert!(driver.connection().sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_fanout_sends_identical_request_per_node() {
        let mut driver = XappDriver::new(MockConnection::with_nodes(3));
        driver
            .run_with_ratios(SliceRatioConfig::default())
            .await
            .unwrap();
        assert_eq!(driver.state(), DriverState::Stopped);

        let sent = driver.connection().sent.lock().unwrap();
        assert_eq!(sent.len(), 3);
        let node_ids: Vec<u32> = sent.iter().map(|(id, _)| id.nb_id).collect();
        assert_eq!(node_ids, vec![1, 2, 3]);
        for (_, request) in sent.iter() {
            assert_eq!(request, &sent[0].1);
            assert_eq!(request.hdr.ctrl_action_id(), 6);
        }
    }

    #[tokio::test]
    async fn test_transport_failure_does_not_stop_fanout() {
        let mut connection = MockConnection::with_nodes(3);
        connection.fail_send_for = Some(connection.nodes[1].id);
        let mut driver = XappDriver::new(connection);
        driver
            .run_with_ratios(SliceRatioConfig::default())
            .await
            .unwrap();
        assert_eq!(driver.state(), DriverState::Stopped);
        assert_eq!(driver.connection().sent.lock().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_stop_polled_until_acknowledged() {
        let mut connection = MockConnection::with_nodes(1);
        connection.stop_denials = AtomicUsize::new(3);
        let mut driver = XappDriver::new(connection);
        driver
            .run_with_ratios(SliceRatioConfig::default())
            .await
            .unwrap();
        assert_eq!(driver.state(), DriverState::Stopped);
    }
}
