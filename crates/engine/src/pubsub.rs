//! Generic topic-keyed observer registry.
//!
//! Any component with observable state composes a `PublishSubscribeHub` and
//! notifies per topic. Callbacks receive no payload: subscribers re-read
//! whatever snapshot getter corresponds to their topic, so they always
//! observe the final state of the mutation that triggered the notification.

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

struct Subscriber<T> {
    id: SubscriptionId,
    topic: T,
    callback: Box<dyn FnMut()>,
}

/// Topic-scoped observer registry.
///
/// Single-threaded by design: the engine runs on the host UI loop and all
/// notification dispatch is synchronous.
pub struct PublishSubscribeHub<T> {
    subscribers: Vec<Subscriber<T>>,
    next_id: u64,
}

impl<T: Copy + PartialEq> PublishSubscribeHub<T> {
    pub fn new() -> Self {
        Self {
            subscribers: Vec::new(),
            next_id: 1,
        }
    }

    /// Register a callback for one topic. The callback fires on every
    /// notification of that topic until unsubscribed.
    pub fn subscribe(&mut self, topic: T, callback: impl FnMut() + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push(Subscriber {
            id,
            topic,
            callback: Box::new(callback),
        });
        id
    }

    /// Remove a subscription. Returns false if the id was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|s| s.id != id);
        self.subscribers.len() != before
    }

    /// Invoke every callback registered for `topic`, in subscription order.
    pub fn notify(&mut self, topic: T) {
        for sub in &mut self.subscribers {
            if sub.topic == topic {
                (sub.callback)();
            }
        }
    }

    /// Number of subscriptions currently registered for `topic`.
    pub fn subscriber_count(&self, topic: T) -> usize {
        self.subscribers.iter().filter(|s| s.topic == topic).count()
    }
}

impl<T: Copy + PartialEq> Default for PublishSubscribeHub<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Topic {
        A,
        B,
    }

    fn counter() -> (Rc<RefCell<usize>>, impl FnMut()) {
        let count = Rc::new(RefCell::new(0));
        let inner = Rc::clone(&count);
        (count, move || *inner.borrow_mut() += 1)
    }

    #[test]
    fn test_notify_is_scoped_to_topic() {
        let mut hub = PublishSubscribeHub::new();
        let (a_count, a_cb) = counter();
        let (b_count, b_cb) = counter();
        hub.subscribe(Topic::A, a_cb);
        hub.subscribe(Topic::B, b_cb);

        hub.notify(Topic::A);
        hub.notify(Topic::A);
        assert_eq!(*a_count.borrow(), 2);
        assert_eq!(*b_count.borrow(), 0);
    }

    #[test]
    fn test_unsubscribe_stops_notifications() {
        let mut hub = PublishSubscribeHub::new();
        let (count, cb) = counter();
        let id = hub.subscribe(Topic::A, cb);

        hub.notify(Topic::A);
        assert!(hub.unsubscribe(id));
        hub.notify(Topic::A);
        assert_eq!(*count.borrow(), 1);

        // Second unsubscribe is a no-op.
        assert!(!hub.unsubscribe(id));
    }

    #[test]
    fn test_multiple_subscribers_fire_in_order() {
        let mut hub = PublishSubscribeHub::new();
        let order = Rc::new(RefCell::new(Vec::new()));
        for tag in ["first", "second"] {
            let order = Rc::clone(&order);
            hub.subscribe(Topic::A, move || order.borrow_mut().push(tag));
        }
        hub.notify(Topic::A);
        assert_eq!(*order.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn test_subscriber_count() {
        let mut hub = PublishSubscribeHub::new();
        assert_eq!(hub.subscriber_count(Topic::A), 0);
        let id = hub.subscribe(Topic::A, || {});
        hub.subscribe(Topic::A, || {});
        hub.subscribe(Topic::B, || {});
        assert_eq!(hub.subscriber_count(Topic::A), 2);
        hub.unsubscribe(id);
        assert_eq!(hub.subscriber_count(Topic::A), 1);
    }
}
