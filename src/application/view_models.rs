//! View models and input models exchanged with the HTTP layer.

use serde::{Deserialize, Serialize};

use super::ModelState;
use crate::domain::foundation::Timestamp;
use crate::domain::session::{BrainstormSession, Idea};

/// Session row shown on the listing and detail views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StormSessionViewModel {
    pub id: i64,
    pub name: String,
    pub date_created: Timestamp,
    pub idea_count: usize,
}

impl From<&BrainstormSession> for StormSessionViewModel {
    fn from(session: &BrainstormSession) -> Self {
        Self {
            id: session.id(),
            name: session.name().to_string(),
            date_created: session.date_created(),
            idea_count: session.idea_count(),
        }
    }
}

/// Idea as exposed by the ideas API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IdeaDto {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub date_created: Timestamp,
}

impl From<&Idea> for IdeaDto {
    fn from(idea: &Idea) -> Self {
        Self {
            id: idea.id(),
            name: idea.name().to_string(),
            description: idea.description().to_string(),
            date_created: idea.date_created(),
        }
    }
}

/// Form submitted to create a session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NewSessionModel {
    #[serde(rename = "SessionName", alias = "sessionName", default)]
    pub session_name: Option<String>,
}

impl NewSessionModel {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            session_name: Some(name.into()),
        }
    }

    /// Adds this model's field errors to `state`.
    pub fn validate(&self, state: &mut ModelState) {
        state.require("SessionName", self.session_name.as_deref());
    }
}

/// JSON body submitted to add an idea to a session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewIdeaModel {
    #[serde(alias = "SessionId", default)]
    pub session_id: Option<i64>,
    #[serde(alias = "Name", default)]
    pub name: Option<String>,
    #[serde(alias = "Description", default)]
    pub description: Option<String>,
}

impl NewIdeaModel {
    /// Adds this model's field errors to `state`.
    pub fn validate(&self, state: &mut ModelState) {
        state.require_value("SessionId", self.session_id.as_ref());
        state.require("Name", self.name.as_deref());
        state.require("Description", self.description.as_deref());
    }
}
