//! Process-wide topic registry.
//!
//! Content modules register descriptors before navigation begins; after that
//! the registry is shared read-only (behind an `Arc`) by every session.

use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::topic::{Category, TopicDescriptor, TopicId};

/// Ordered mapping from topic id to descriptor.
#[derive(Debug, Default)]
pub struct TopicRegistry {
    topics: Vec<Arc<TopicDescriptor>>,
    index: HashMap<TopicId, usize>,
}

impl TopicRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a descriptor. Display order follows registration order.
    pub fn register(&mut self, descriptor: TopicDescriptor) -> Result<()> {
        if self.index.contains_key(&descriptor.id) {
            return Err(Error::DuplicateTopic(descriptor.id));
        }
        if descriptor.steps.is_empty() {
            return Err(Error::EmptySteps(descriptor.id));
        }

        tracing::debug!(topic = %descriptor.id, steps = descriptor.step_count(), "registered topic");
        self.index.insert(descriptor.id.clone(), self.topics.len());
        self.topics.push(Arc::new(descriptor));
        Ok(())
    }

    /// Look up a topic by id.
    pub fn get(&self, id: &TopicId) -> Option<&Arc<TopicDescriptor>> {
        self.index.get(id).map(|&i| &self.topics[i])
    }

    pub fn contains(&self, id: &TopicId) -> bool {
        self.index.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.topics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }

    /// All descriptors in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<TopicDescriptor>> {
        self.topics.iter()
    }

    /// Descriptors of one category, in display order.
    pub fn by_category(&self, category: Category) -> impl Iterator<Item = &Arc<TopicDescriptor>> {
        self.topics
            .iter()
            .filter(move |t| t.info.category == category)
    }

    /// Cards for the landing page.
    pub fn landing(&self) -> LandingView {
        let cards = |category| {
            self.by_category(category)
                .map(|t| TopicCard::from(t.as_ref()))
                .collect()
        };
        LandingView {
            data_structures: cards(Category::DataStructure),
            algorithms: cards(Category::Algorithm),
        }
    }
}

/// Summary of one topic on the landing page and in the navigation list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopicCard {
    pub id: TopicId,
    pub icon: String,
    pub title: String,
    pub subtitle: String,
    pub kind: &'static str,
    pub time_complexity: String,
    pub space_complexity: String,
}

impl From<&TopicDescriptor> for TopicCard {
    fn from(topic: &TopicDescriptor) -> Self {
        Self {
            id: topic.id.clone(),
            icon: topic.info.icon.clone(),
            title: topic.info.title.clone(),
            subtitle: topic.info.subtitle.clone(),
            kind: topic.info.category.label(),
            time_complexity: topic.info.time.notation.clone(),
            space_complexity: topic.info.space.notation.clone(),
        }
    }
}

/// The landing aggregate: topic cards grouped by category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LandingView {
    pub data_structures: Vec<TopicCard>,
    pub algorithms: Vec<TopicCard>,
}

impl LandingView {
    pub fn topic_count(&self) -> usize {
        self.data_structures.len() + self.algorithms.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{counter_topic, counter_topic_in};

    #[test]
    fn register_and_lookup() {
        let mut registry = TopicRegistry::new();
        registry.register(counter_topic("stack", 3)).unwrap();
        registry.register(counter_topic("queue", 4)).unwrap();

        assert_eq!(registry.len(), 2);
        assert!(registry.contains(&"stack".into()));
        assert_eq!(registry.get(&"queue".into()).unwrap().step_count(), 4);
        assert!(registry.get(&"heap".into()).is_none());
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut registry = TopicRegistry::new();
        registry.register(counter_topic("stack", 3)).unwrap();

        let err = registry.register(counter_topic("stack", 2)).unwrap_err();
        assert_eq!(err, Error::DuplicateTopic("stack".into()));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn empty_step_lists_are_rejected() {
        let mut registry = TopicRegistry::new();
        let err = registry.register(counter_topic("empty", 0)).unwrap_err();
        assert_eq!(err, Error::EmptySteps("empty".into()));
    }

    #[test]
    fn landing_groups_by_category_in_order() {
        let mut registry = TopicRegistry::new();
        registry.register(counter_topic_in("stack", 2, Category::DataStructure)).unwrap();
        registry.register(counter_topic_in("bfs", 2, Category::Algorithm)).unwrap();
        registry.register(counter_topic_in("queue", 2, Category::DataStructure)).unwrap();

        let landing = registry.landing();
        let ds: Vec<_> = landing.data_structures.iter().map(|c| c.id.as_str()).collect();
        let algo: Vec<_> = landing.algorithms.iter().map(|c| c.id.as_str()).collect();

        assert_eq!(ds, vec!["stack", "queue"]);
        assert_eq!(algo, vec!["bfs"]);
        assert_eq!(landing.topic_count(), 3);
    }
}
