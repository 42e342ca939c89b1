//! Events published by the activity list and the plan handler.

use tokio::sync::mpsc::UnboundedSender;

use crate::models::Activity;

/// Notification sent to whoever drives the UI.
///
/// Within one tick a [`PlanEvent::Countdown`] is always sent before the
/// matching [`PlanEvent::ActivityExpired`].
#[derive(Debug, Clone, PartialEq)]
pub enum PlanEvent {
    /// The sequence was mutated and recalculated.
    ActivityListChanged,
    /// Periodic update while an activity runs.
    Countdown { seconds_remaining: i64 },
    ActivityStarted(Activity),
    ActivityStopped(Activity),
    /// The countdown of the running activity reached zero.
    ActivityExpired(Activity),
    /// The last activity ended and the day was archived.
    PlanCompleted,
}

/// Sends `event` if a receiver is attached. A receiver that went away is
/// not an error for the planner.
pub(crate) fn publish(sender: Option<&UnboundedSender<PlanEvent>>, event: PlanEvent) {
    if let Some(tx) = sender {
        if tx.send(event).is_err() {
            log::warn!("Dropping plan event: receiver closed");
        }
    }
}
