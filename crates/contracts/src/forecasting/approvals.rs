use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApprovalStatus {
    Pending,
    Approved,
    Rejected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApprovalAction {
    Approve,
    Reject,
    Reopen,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApprovalError {
    #[error("cannot {action} a forecast that is {status}")]
    InvalidTransition {
        status: &'static str,
        action: &'static str,
    },
}

impl ApprovalStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ApprovalStatus::Pending => "Pending",
            ApprovalStatus::Approved => "Approved",
            ApprovalStatus::Rejected => "Rejected",
        }
    }

    /// Badge variant used by the UI kit.
    pub fn badge_variant(&self) -> &'static str {
        match self {
            ApprovalStatus::Pending => "warning",
            ApprovalStatus::Approved => "success",
            ApprovalStatus::Rejected => "error",
        }
    }

    /// Only pending forecasts can be decided; decided ones can be reopened.
    pub fn transition(self, action: ApprovalAction) -> Result<ApprovalStatus, ApprovalError> {
        match (self, action) {
            (ApprovalStatus::Pending, ApprovalAction::Approve) => Ok(ApprovalStatus::Approved),
            (ApprovalStatus::Pending, ApprovalAction::Reject) => Ok(ApprovalStatus::Rejected),
            (ApprovalStatus::Approved | ApprovalStatus::Rejected, ApprovalAction::Reopen) => {
                Ok(ApprovalStatus::Pending)
            }
            (status, action) => Err(ApprovalError::InvalidTransition {
                status: status.label(),
                action: action.verb(),
            }),
        }
    }
}

impl ApprovalAction {
    pub fn verb(&self) -> &'static str {
        match self {
            ApprovalAction::Approve => "approve",
            ApprovalAction::Reject => "reject",
            ApprovalAction::Reopen => "reopen",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Approval {
    pub id: String,
    pub project: String,
    /// Forecast period, `YYYY-MM`.
    pub period: String,
    pub submitted_by: String,
    pub submitted_at: String,
    pub total_hours: f64,
    pub status: ApprovalStatus,
    pub comment: Option<String>,
}

/// (pending, approved, rejected)
pub fn status_counts(items: &[Approval]) -> (usize, usize, usize) {
    items.iter().fold((0, 0, 0), |(p, a, r), item| match item.status {
        ApprovalStatus::Pending => (p + 1, a, r),
        ApprovalStatus::Approved => (p, a + 1, r),
        ApprovalStatus::Rejected => (p, a, r + 1),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_can_be_decided() {
        assert_eq!(
            ApprovalStatus::Pending.transition(ApprovalAction::Approve),
            Ok(ApprovalStatus::Approved)
        );
        assert_eq!(
            ApprovalStatus::Pending.transition(ApprovalAction::Reject),
            Ok(ApprovalStatus::Rejected)
        );
    }

    #[test]
    fn test_decided_can_be_reopened() {
        assert_eq!(
            ApprovalStatus::Approved.transition(ApprovalAction::Reopen),
            Ok(ApprovalStatus::Pending)
        );
        assert_eq!(
            ApprovalStatus::Rejected.transition(ApprovalAction::Reopen),
            Ok(ApprovalStatus::Pending)
        );
    }

    #[test]
    fn test_invalid_transitions() {
        let err = ApprovalStatus::Approved
            .transition(ApprovalAction::Reject)
            .unwrap_err();
        assert_eq!(err.to_string(), "cannot reject a forecast that is Approved");
        assert!(ApprovalStatus::Pending.transition(ApprovalAction::Reopen).is_err());
        assert!(ApprovalStatus::Rejected.transition(ApprovalAction::Approve).is_err());
    }

    #[test]
    fn test_status_counts() {
        let make = |status| Approval {
            id: "a".to_string(),
            project: "P".to_string(),
            period: "2026-10".to_string(),
            submitted_by: "x".to_string(),
            submitted_at: "2026-10-01T08:00:00Z".to_string(),
            total_hours: 1.0,
            status,
            comment: None,
        };
        let items = vec![
            make(ApprovalStatus::Pending),
            make(ApprovalStatus::Pending),
            make(ApprovalStatus::Rejected),
        ];
        assert_eq!(status_counts(&items), (2, 0, 1));
    }
}
