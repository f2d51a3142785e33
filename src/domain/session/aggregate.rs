//! Brainstorm session aggregate.
//!
//! A session is a named container of ideas. Ideas are owned by their
//! session and get ids that are unique within it.

use serde::{Deserialize, Serialize};

use super::Idea;
use crate::domain::foundation::Timestamp;

/// Brainstorm session aggregate.
///
/// # Invariants
///
/// - `id` is 0 until the repository assigns one
/// - idea ids are unique within the session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrainstormSession {
    id: i64,
    name: String,
    date_created: Timestamp,
    ideas: Vec<Idea>,
}

impl BrainstormSession {
    /// Creates an unsaved session with no ideas.
    pub fn new(name: impl Into<String>, date_created: Timestamp) -> Self {
        Self {
            id: 0,
            name: name.into(),
            date_created,
            ideas: Vec::new(),
        }
    }

    /// Returns the session with the given id.
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn date_created(&self) -> Timestamp {
        self.date_created
    }

    pub fn ideas(&self) -> &[Idea] {
        &self.ideas
    }

    pub fn idea_count(&self) -> usize {
        self.ideas.len()
    }

    /// Appends an idea, assigning it the next id in this session.
    pub fn add_idea(&mut self, idea: Idea) -> &Idea {
        let next_id = self.ideas.iter().map(Idea::id).max().unwrap_or(0) + 1;
        self.ideas.push(idea.with_id(next_id));
        &self.ideas[self.ideas.len() - 1]
    }
}
