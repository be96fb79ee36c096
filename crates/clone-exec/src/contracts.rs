use clone_core::ApiError;
use clone_core::ConfigId;
use clone_core::DiskId;
use clone_core::LinodeId;
use serde::Deserialize;
use serde::Serialize;

/// The single API call a submit turns into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CloneRequest {
    /// Copy one disk onto the machine it belongs to.
    DuplicateDisk { linode_id: LinodeId, disk_id: DiskId },
    /// Copy configs and disks onto another machine. Both lists are always
    /// sent, even when empty; the API copies everything when one is omitted.
    CloneLinode {
        source_linode_id: LinodeId,
        destination_linode_id: LinodeId,
        configs: Vec<ConfigId>,
        disks: Vec<DiskId>,
    },
}

impl CloneRequest {
    pub fn label(&self) -> &'static str {
        match self {
            Self::DuplicateDisk { .. } => "duplicate_disk",
            Self::CloneLinode { .. } => "clone_linode",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CloneReceipt {
    DiskCreated { disk_id: DiskId },
    LinodeUpdated { linode_id: LinodeId },
}

/// The API turned the request down. Errors are passed through untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("clone request rejected: {}", summarize(.0))]
pub struct CloneRejected(pub Vec<ApiError>);

fn summarize(errors: &[ApiError]) -> String {
    if errors.is_empty() {
        return "no reason given".to_string();
    }
    errors
        .iter()
        .map(|error| match &error.field {
            Some(field) => format!("{field}: {}", error.reason),
            None => error.reason.clone(),
        })
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn rejection_message_lists_reasons() {
        let rejected = CloneRejected(vec![
            ApiError::for_field("disk_size", "Not enough space"),
            ApiError::new("Linode busy"),
        ]);
        assert_eq!(
            rejected.to_string(),
            "clone request rejected: disk_size: Not enough space; Linode busy"
        );
    }

    #[test]
    fn clone_request_serializes_both_lists_when_empty() {
        let request = CloneRequest::CloneLinode {
            source_linode_id: 1,
            destination_linode_id: 2,
            configs: Vec::new(),
            disks: vec![5],
        };
        let value = serde_json::to_value(&request).expect("serialize");
        assert_eq!(value["configs"], serde_json::json!([]));
        assert_eq!(value["disks"], serde_json::json!([5]));
        assert_eq!(value["kind"], "clone_linode");
    }
}
