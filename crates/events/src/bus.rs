//! In-process event bus backed by a `tokio::sync::broadcast` channel.
//!
//! [`EventBus`] is shared via `Arc` (or embedded in the engine) and fans
//! every published [`EngineEvent`] out to all current subscribers.

use serde::Serialize;
use tokio::sync::broadcast;

use orit_core::roles::UserRole;
use orit_core::status::JobStatus;
use orit_core::types::JobId;

// ---------------------------------------------------------------------------
// EngineEvent
// ---------------------------------------------------------------------------

/// A committed state change observers may react to.
///
/// Events fire *after* the change is visible in the engine's snapshot, so
/// a subscriber that re-reads on receipt always sees the committed state.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EngineEvent {
    /// A job's status changed.
    JobTransitioned {
        job_id: JobId,
        previous_status: JobStatus,
        new_status: JobStatus,
        actor_role: UserRole,
    },
    /// A rework follow-up order was auto-generated.
    ReworkSpawned { parent_id: JobId, child_id: JobId },
    /// A notification was marked read.
    NotificationRead { notification_id: String },
}

// ---------------------------------------------------------------------------
// EventBus
// ---------------------------------------------------------------------------

/// Default buffer capacity for the broadcast channel.
const DEFAULT_CAPACITY: usize = 1024;

/// In-process fan-out bus.
///
/// Subscribing returns a [`broadcast::Receiver`]; dropping the receiver
/// unsubscribes. Slow receivers that fall more than the channel capacity
/// behind observe `RecvError::Lagged` rather than blocking the publisher.
#[derive(Debug)]
pub struct EventBus {
    sender: broadcast::Sender<EngineEvent>,
}

impl EventBus {
    /// Create a bus with a specific channel capacity.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish an event to all current subscribers.
    ///
    /// With zero subscribers the event is silently dropped — publishing is
    /// fire-and-forget and never fails.
    pub fn publish(&self, event: EngineEvent) {
        let _ = self.sender.send(event);
    }

    /// Subscribe to all events published after this call.
    pub fn subscribe(&self) -> broadcast::Receiver<EngineEvent> {
        self.sender.subscribe()
    }

    /// Number of live subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn transition_event(job_id: &str) -> EngineEvent {
        EngineEvent::JobTransitioned {
            job_id: job_id.to_string(),
            previous_status: JobStatus::OrderReceived,
            new_status: JobStatus::InventoryCheckPending,
            actor_role: UserRole::OritOps,
        }
    }

    #[tokio::test]
    async fn publish_and_receive_single_subscriber() {
        let bus = EventBus::default();
        let mut rx = bus.subscribe();

        bus.publish(transition_event("ORD-1"));

        let received = rx.recv().await.expect("should receive the event");
        assert_eq!(received, transition_event("ORD-1"));
    }

    #[tokio::test]
    async fn multiple_subscribers_receive_same_event() {
        let bus = EventBus::default();
        let mut rx1 = bus.subscribe();
        let mut rx2 = bus.subscribe();

        bus.publish(EngineEvent::ReworkSpawned {
            parent_id: "ORD-1".into(),
            child_id: "RWK-ORD-1-01".into(),
        });

        assert!(rx1.recv().await.is_ok());
        assert!(rx2.recv().await.is_ok());
    }

    #[test]
    fn publish_with_no_subscribers_does_not_panic() {
        let bus = EventBus::default();
        bus.publish(transition_event("ORD-1"));
        assert_eq!(bus.subscriber_count(), 0);
    }

    #[test]
    fn dropping_receiver_unsubscribes() {
        let bus = EventBus::default();
        let rx = bus.subscribe();
        assert_eq!(bus.subscriber_count(), 1);
        drop(rx);
        assert_eq!(bus.subscriber_count(), 0);
    }

    #[test]
    fn event_serializes_with_tag() {
        let value = serde_json::to_value(transition_event("ORD-1")).unwrap();
        assert_eq!(value["type"], "job_transitioned");
        assert_eq!(value["new_status"], "INVENTORY_CHECK_PENDING");
    }
}
