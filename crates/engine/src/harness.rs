//! Test harness: per-topic notification counting.
//!
//! `TopicLog` subscribes to every topic of one cell and counts callbacks,
//! so tests can assert exact notification behavior (including the absence
//! of notifications) without GUI dependencies.

use std::cell::RefCell;
use std::rc::Rc;

use rustc_hash::FxHashMap;

use crate::cell::SettingCell;
use crate::events::SettingTopic;
use crate::policy::SettingPolicy;
use crate::pubsub::SubscriptionId;

/// Counts notifications per topic for one cell.
pub struct TopicLog {
    counts: Rc<RefCell<FxHashMap<SettingTopic, usize>>>,
    ids: FxHashMap<SettingTopic, SubscriptionId>,
}

impl TopicLog {
    /// Subscribe to every topic of `cell`. Counting starts now: attach the
    /// log after any setup mutations you don't want counted.
    pub fn attach<P: SettingPolicy>(cell: &mut SettingCell<P>) -> Self {
        let counts: Rc<RefCell<FxHashMap<SettingTopic, usize>>> =
            Rc::new(RefCell::new(FxHashMap::default()));
        let mut ids = FxHashMap::default();
        for topic in SettingTopic::ALL {
            let counts = Rc::clone(&counts);
            let id = cell.subscribe(topic, move || {
                *counts.borrow_mut().entry(topic).or_insert(0) += 1;
            });
            ids.insert(topic, id);
        }
        Self { counts, ids }
    }

    /// Notifications seen for one topic.
    pub fn count(&self, topic: SettingTopic) -> usize {
        self.counts.borrow().get(&topic).copied().unwrap_or(0)
    }

    /// Notifications seen across all topics.
    pub fn total(&self) -> usize {
        self.counts.borrow().values().sum()
    }

    /// Subscription id for one topic, for unsubscribe tests.
    pub fn id(&self, topic: SettingTopic) -> SubscriptionId {
        self.ids[&topic]
    }

    /// Reset all counters.
    pub fn clear(&self) {
        self.counts.borrow_mut().clear();
    }
}
