//! Latest-value feeds
//!
//! A `Feed` is the publishing half owned by a repository; a `Subscription`
//! is a reader that can tell whether a newer value has been published since
//! it last looked. Both sit on `tokio::sync::watch`, which keeps only the
//! newest value plus a version counter per receiver.

use tokio::sync::watch;

use crate::error::{SpendableError, SpendableResult};

/// Publishing side of a latest-value stream
#[derive(Debug)]
pub struct Feed<T> {
    name: &'static str,
    tx: watch::Sender<T>,
}

impl<T> Feed<T> {
    pub fn new(name: &'static str, initial: T) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { name, tx }
    }

    /// Replace the current value and wake every subscriber
    ///
    /// Succeeds even when nobody is subscribed.
    pub fn publish(&self, value: T) {
        self.tx.send_replace(value);
    }

    pub fn subscribe(&self) -> Subscription<T> {
        Subscription {
            name: self.name,
            rx: self.tx.subscribe(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

/// Reading side of a feed
#[derive(Debug, Clone)]
pub struct Subscription<T> {
    name: &'static str,
    rx: watch::Receiver<T>,
}

impl<T: Clone> Subscription<T> {
    /// The newest value, marking it as seen
    pub fn latest(&mut self) -> T {
        self.rx.borrow_and_update().clone()
    }

    /// Peek at the newest value without marking it as seen
    pub fn peek(&self) -> T {
        self.rx.borrow().clone()
    }

    /// Whether a value has been published since the last `latest`
    ///
    /// A closed feed reports no change.
    pub fn has_changed(&self) -> bool {
        self.rx.has_changed().unwrap_or(false)
    }

    /// Wait for the next publication and return it
    pub async fn changed(&mut self) -> SpendableResult<T> {
        self.rx
            .changed()
            .await
            .map_err(|_| SpendableError::FeedClosed(self.name))?;
        Ok(self.latest())
    }

    /// A copy of this subscription with the current value already seen
    pub fn fresh(&self) -> Self {
        let mut copy = self.clone();
        copy.rx.mark_unchanged();
        copy
    }

    pub(crate) fn into_receiver(self) -> watch::Receiver<T> {
        self.rx
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subscriber_sees_current_value() {
        let feed = Feed::new("numbers", 1);
        let mut sub = feed.subscribe();
        assert_eq!(sub.latest(), 1);
        assert!(!sub.has_changed());
    }

    #[test]
    fn test_publish_marks_changed() {
        let feed = Feed::new("numbers", 1);
        let mut sub = feed.subscribe();

        feed.publish(2);
        assert!(sub.has_changed());
        assert_eq!(sub.peek(), 2);
        assert!(sub.has_changed());
        assert_eq!(sub.latest(), 2);
        assert!(!sub.has_changed());
    }

    #[test]
    fn test_publish_without_subscribers() {
        let feed = Feed::new("numbers", 0);
        assert_eq!(feed.subscriber_count(), 0);
        feed.publish(5);
        let mut late = feed.subscribe();
        assert_eq!(late.latest(), 5);
        assert_eq!(feed.subscriber_count(), 1);
    }

    #[tokio::test]
    async fn test_changed_waits_for_publication() {
        let feed = Feed::new("numbers", 0);
        let mut sub = feed.subscribe();
        feed.publish(7);
        assert_eq!(sub.changed().await.unwrap(), 7);
    }

    #[tokio::test]
    async fn test_changed_after_close_errors() {
        let feed = Feed::new("numbers", 0);
        let mut sub = feed.subscribe();
        drop(feed);
        let err = sub.changed().await.unwrap_err();
        assert!(matches!(err, SpendableError::FeedClosed("numbers")));
        assert_eq!(sub.latest(), 0);
    }
}
