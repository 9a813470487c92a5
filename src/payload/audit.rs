//! Audit trail payload

use serde::{Deserialize, Serialize};

/// Action recorded in the audit trail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuditAction {
    Create,
    Update,
    Delete,
    Access,
}

/// Payload describing who did what to which entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditPayload {
    /// Type of actor performing the action, e.g. "user", "system".
    pub actor_type: String,

    /// Unique identifier of the actor.
    pub actor_id: String,

    pub action: AuditAction,

    /// Entity acted upon, e.g. "order", "customer".
    pub entity: String,

    /// Identifier(s) of the affected entity instances.
    pub entity_refs: Vec<String>,

    /// Type of the entity's owner.
    pub entity_owner_type: String,

    /// Unique identifier of the entity's owner.
    pub entity_owner_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_wire_names() {
        assert_eq!(
            serde_json::to_string(&AuditAction::Access).unwrap(),
            "\"access\""
        );
        assert_eq!(
            serde_json::to_string(&AuditAction::Delete).unwrap(),
            "\"delete\""
        );
    }

    #[test]
    fn test_payload_roundtrip() {
        let payload = AuditPayload {
            actor_type: "hawkward.wizard".to_string(),
            actor_id: "magic_user_42".to_string(),
            action: AuditAction::Create,
            entity: "hawkward.spell.banned".to_string(),
            entity_refs: vec!["dead_rift".to_string(), "bicep_curse".to_string()],
            entity_owner_type: "fantasy_realm.system".to_string(),
            entity_owner_id: "realm_keeper_5678".to_string(),
        };

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["actor_type"], "hawkward.wizard");
        assert_eq!(json["action"], "create");
        assert_eq!(json["entity_refs"][1], "bicep_curse");

        let back: AuditPayload = serde_json::from_value(json).unwrap();
        assert_eq!(back, payload);
    }
}
