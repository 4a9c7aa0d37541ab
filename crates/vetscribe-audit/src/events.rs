use serde::Serialize;
use tracing::info;

/// A structured audit event for record mutations.
///
/// Events are emitted via `tracing` so they land in the service's
/// structured log stream alongside request logs. The audit middleware
/// covers the request envelope; these application-level events record
/// which record changed and how.
#[derive(Debug, Clone, Serialize)]
pub struct AuditEvent {
    pub action: String,
    pub resource_type: String,
    pub resource_id: String,
    pub details: Option<serde_json::Value>,
}

impl AuditEvent {
    pub fn new(
        action: impl Into<String>,
        resource_type: impl Into<String>,
        resource_id: impl Into<String>,
    ) -> Self {
        Self {
            action: action.into(),
            resource_type: resource_type.into(),
            resource_id: resource_id.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Emit this audit event via tracing.
    pub fn emit(&self) {
        info!(
            audit.action = %self.action,
            audit.resource_type = %self.resource_type,
            audit.resource_id = %self.resource_id,
            "audit event"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn details_attach_without_clobbering_identity() {
        let event = AuditEvent::new("apply_preset", "exam", "abc-123")
            .with_details(serde_json::json!({ "preset": "t3_l3_myelopathy" }));

        assert_eq!(event.action, "apply_preset");
        assert_eq!(event.resource_id, "abc-123");
        assert_eq!(
            event.details,
            Some(serde_json::json!({ "preset": "t3_l3_myelopathy" }))
        );
    }
}
