// ============================================================================
// Activity Payloads
// ============================================================================

use serde::{Deserialize, Serialize};

/// Deliverable activity payload
///
/// Closed set of activity shapes this node will put on the wire. The
/// serialized form is the ActivityStreams object with a `type` tag;
/// anything that cannot be serialized is rejected at the delivery
/// boundary with a serialization error.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Activity {
    Follow {
        #[serde(skip_serializing_if = "Option::is_none")]
        id: Option<String>,
        actor: String,
        object: String,
    },
    Accept {
        #[serde(skip_serializing_if = "Option::is_none")]
        id: Option<String>,
        actor: String,
        object: serde_json::Value,
    },
    Reject {
        #[serde(skip_serializing_if = "Option::is_none")]
        id: Option<String>,
        actor: String,
        object: serde_json::Value,
    },
    Create {
        #[serde(skip_serializing_if = "Option::is_none")]
        id: Option<String>,
        actor: String,
        object: serde_json::Value,
        #[serde(skip_serializing_if = "Option::is_none")]
        published: Option<String>,
    },
    Announce {
        #[serde(skip_serializing_if = "Option::is_none")]
        id: Option<String>,
        actor: String,
        object: String,
    },
    Like {
        #[serde(skip_serializing_if = "Option::is_none")]
        id: Option<String>,
        actor: String,
        object: String,
    },
    Undo {
        #[serde(skip_serializing_if = "Option::is_none")]
        id: Option<String>,
        actor: String,
        object: serde_json::Value,
    },
    Delete {
        #[serde(skip_serializing_if = "Option::is_none")]
        id: Option<String>,
        actor: String,
        object: serde_json::Value,
    },
}

impl Activity {
    /// Actor id the activity is attributed to
    pub fn actor(&self) -> &str {
        match self {
            Activity::Follow { actor, .. }
            | Activity::Accept { actor, .. }
            | Activity::Reject { actor, .. }
            | Activity::Create { actor, .. }
            | Activity::Announce { actor, .. }
            | Activity::Like { actor, .. }
            | Activity::Undo { actor, .. }
            | Activity::Delete { actor, .. } => actor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn follow_serializes_with_type_tag() {
        let activity = Activity::Follow {
            id: Some("https://example.test/activities/1".to_string()),
            actor: "https://example.test/users/42".to_string(),
            object: "https://remote.test/users/99".to_string(),
        };

        let value = serde_json::to_value(&activity).unwrap();
        assert_eq!(value["type"], "Follow");
        assert_eq!(value["actor"], "https://example.test/users/42");
        assert_eq!(value["object"], "https://remote.test/users/99");
    }

    #[test]
    fn absent_id_is_omitted_from_the_wire_form() {
        let activity = Activity::Like {
            id: None,
            actor: "https://example.test/users/42".to_string(),
            object: "https://remote.test/notes/7".to_string(),
        };

        let value = serde_json::to_value(&activity).unwrap();
        assert!(value.get("id").is_none());
    }

    #[test]
    fn activities_round_trip_through_json() {
        let activity = Activity::Accept {
            id: Some("https://example.test/activities/2".to_string()),
            actor: "https://example.test/users/42".to_string(),
            object: serde_json::json!({
                "type": "Follow",
                "actor": "https://remote.test/users/99",
                "object": "https://example.test/users/42",
            }),
        };

        let encoded = serde_json::to_string(&activity).unwrap();
        let decoded: Activity = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, activity);
    }
}
