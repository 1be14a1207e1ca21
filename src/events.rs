use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

use crate::errors::AppError;

// Define the various events that can occur in the system.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Event {
    // Coupon events
    CouponIssued {
        coupon_id: i64,
        member_id: i64,
    },
    CouponApplied {
        coupon_id: i64,
        product_id: i64,
        timestamp: DateTime<Utc>,
    },
    CouponDeleted(i64),

    // Cart events
    CartItemAdded {
        cart_item_id: i64,
        member_id: i64,
    },
    CartItemQuantityChanged {
        cart_item_id: i64,
        quantity: i32,
    },
    CartItemRemoved(i64),
}

/// Sending half of the in-process event channel.
#[derive(Debug, Clone)]
pub struct EventSender {
    sender: mpsc::Sender<Event>,
}

impl EventSender {
    /// Creates a new EventSender
    pub fn new(sender: mpsc::Sender<Event>) -> Self {
        Self { sender }
    }

    /// Sends an event asynchronously
    pub async fn send(&self, event: Event) -> Result<(), AppError> {
        self.sender
            .send(event)
            .await
            .map_err(|e| AppError::EventError(format!("Failed to send event: {}", e)))
    }
}

/// Creates a bounded event channel and returns both halves.
pub fn event_channel(capacity: usize) -> (EventSender, mpsc::Receiver<Event>) {
    let (tx, rx) = mpsc::channel(capacity);
    (EventSender::new(tx), rx)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn send_fails_once_the_receiver_is_gone() {
        let (sender, rx) = event_channel(4);
        drop(rx);

        let result = sender.send(Event::CouponDeleted(1)).await;
        assert!(matches!(result, Err(AppError::EventError(_))));
    }

    #[tokio::test]
    async fn events_arrive_in_send_order() {
        let (sender, mut rx) = event_channel(4);

        sender
            .send(Event::CouponIssued {
                coupon_id: 1,
                member_id: 7,
            })
            .await
            .unwrap();
        sender.send(Event::CartItemRemoved(3)).await.unwrap();

        assert!(matches!(
            rx.recv().await,
            Some(Event::CouponIssued { coupon_id: 1, .. })
        ));
        assert!(matches!(rx.recv().await, Some(Event::CartItemRemoved(3))));
    }
}
