//! Idea entity, owned by a brainstorm session.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Timestamp;

/// A single idea captured during a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Idea {
    id: i64,
    name: String,
    description: String,
    date_created: Timestamp,
}

impl Idea {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        date_created: Timestamp,
    ) -> Self {
        Self {
            id: 0,
            name: name.into(),
            description: description.into(),
            date_created,
        }
    }

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

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn date_created(&self) -> Timestamp {
        self.date_created
    }
}
