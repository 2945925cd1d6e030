//! Wire and domain models for the lead-capture funnel

use crate::role::Role;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// First-stage form draft
///
/// Every field starts empty and every field is required before the draft
/// may be submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub institution: String,
    pub designation: String,
    pub location: String,
    pub specific_need: String,
}

impl SignupDraft {
    /// Wire names of the fields that are still empty, in form order
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push("name");
        }
        if self.email.trim().is_empty() {
            missing.push("email");
        }
        if self.phone.trim().is_empty() {
            missing.push("phone");
        }
        if self.institution.trim().is_empty() {
            missing.push("institution");
        }
        if self.designation.trim().is_empty() {
            missing.push("designation");
        }
        if self.location.trim().is_empty() {
            missing.push("location");
        }
        if self.specific_need.trim().is_empty() {
            missing.push("specificNeed");
        }
        missing
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }
}

/// Body of `POST /api/beta/join`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinBetaRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub institution: String,
    pub designation: String,
    pub location: String,
    pub specific_need: String,
    pub role: Role,
}

impl JoinBetaRequest {
    pub fn from_draft(draft: &SignupDraft, role: Role) -> JoinBetaRequest {
        JoinBetaRequest {
            name: draft.name.clone(),
            email: draft.email.clone(),
            phone: draft.phone.clone(),
            institution: draft.institution.clone(),
            designation: draft.designation.clone(),
            location: draft.location.clone(),
            specific_need: draft.specific_need.clone(),
            role,
        }
    }
}

/// Stored beta signup as the backend returns it
///
/// `id` and `joined_at` are server-assigned; the client never fabricates
/// either. The `id` and `email` echoed here are what the second-stage
/// submission must carry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BetaUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub institution: String,
    pub designation: String,
    pub location: String,
    pub specific_need: String,
    pub role: Role,
    pub joined_at: DateTime<Utc>,
}

/// How interested a signup is in one service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterestLevel {
    VeryInterested,
    SomewhatInterested,
    NotInterested,
}

impl InterestLevel {
    /// All levels in the order the survey buttons show them
    pub const ALL: [InterestLevel; 3] = [
        InterestLevel::VeryInterested,
        InterestLevel::SomewhatInterested,
        InterestLevel::NotInterested,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            InterestLevel::VeryInterested => "Very interested",
            InterestLevel::SomewhatInterested => "Somewhat interested",
            InterestLevel::NotInterested => "Not interested",
        }
    }
}

/// Body of `POST /api/service-interest/submit`
///
/// `service_interests` only carries services the user actually rated; an
/// absent key means unrated, which is not the same as `not_interested`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitInterestRequest {
    pub beta_user_id: String,
    pub email: String,
    pub role: Role,
    pub service_interests: BTreeMap<String, InterestLevel>,
}

/// Stored service-interest submission as listed by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterestSubmission {
    pub beta_user_id: String,
    pub email: String,
    pub role: Role,
    pub service_interests: BTreeMap<String, InterestLevel>,
    #[serde(default)]
    pub submitted_at: Option<DateTime<Utc>>,
}

/// Response of `GET /api/beta/count`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountResponse {
    pub count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_draft() -> SignupDraft {
        SignupDraft {
            name: "Asha Verma".into(),
            email: "asha@example.com".into(),
            phone: "+91 98765 43210".into(),
            institution: "IIT Indore".into(),
            designation: "B.Tech CSE, 3rd year".into(),
            location: "Indore".into(),
            specific_need: "Mock interviews before campus season".into(),
        }
    }

    #[test]
    fn test_empty_draft_lists_all_fields() {
        let missing = SignupDraft::default().missing_fields();
        assert_eq!(missing.len(), 7);
        assert_eq!(missing[0], "name");
        assert_eq!(missing[6], "specificNeed");
    }

    #[test]
    fn test_whitespace_only_counts_as_missing() {
        let mut draft = filled_draft();
        draft.location = "   ".into();
        assert_eq!(draft.missing_fields(), vec!["location"]);
        assert!(!draft.is_complete());
    }

    #[test]
    fn test_complete_draft_has_no_missing_fields() {
        assert!(filled_draft().is_complete());
    }

    #[test]
    fn test_join_request_wire_names_are_camel_case() {
        let req = JoinBetaRequest::from_draft(&filled_draft(), Role::Student);
        let json = serde_json::to_value(&req).unwrap();
        assert!(json.get("specificNeed").is_some());
        assert!(json.get("specific_need").is_none());
        assert_eq!(json["role"], "Student");
    }

    #[test]
    fn test_interest_request_wire_shape() {
        let mut ratings = BTreeMap::new();
        ratings.insert("mock-interviews".to_string(), InterestLevel::VeryInterested);
        let req = SubmitInterestRequest {
            beta_user_id: "66b2".into(),
            email: "asha@example.com".into(),
            role: Role::Student,
            service_interests: ratings,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert!(json.get("betaUserId").is_some());
        assert_eq!(json["serviceInterests"]["mock-interviews"], "very_interested");
    }

    #[test]
    fn test_beta_user_decodes_server_payload() {
        let payload = r#"{
            "id": "66b2",
            "name": "Asha Verma",
            "email": "asha@example.com",
            "phone": "+91 98765 43210",
            "institution": "IIT Indore",
            "designation": "B.Tech CSE, 3rd year",
            "location": "Indore",
            "specificNeed": "Mock interviews",
            "role": "Student",
            "joinedAt": "2026-08-01T09:30:00Z"
        }"#;
        let user: BetaUser = serde_json::from_str(payload).unwrap();
        assert_eq!(user.id, "66b2");
        assert_eq!(user.role, Role::Student);
    }

    #[test]
    fn test_unrated_service_is_absent_not_negative() {
        let sub = InterestSubmission {
            beta_user_id: "66b2".into(),
            email: "asha@example.com".into(),
            role: Role::Student,
            service_interests: BTreeMap::new(),
            submitted_at: None,
        };
        let json = serde_json::to_value(&sub).unwrap();
        assert_eq!(json["serviceInterests"], serde_json::json!({}));
    }
}
