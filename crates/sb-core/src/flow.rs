//! Lead-capture flow state machine
//!
//! The two-step funnel (beta signup, then service-interest survey) is a
//! finite state machine with typed stage payloads. The UI layer owns the
//! timers for the transient success stages and the actual network calls;
//! this module owns every guard and transition, so an in-flight submission
//! can never coexist with a visible success panel and a failed submission
//! can never lose drafted input.

use crate::model::{BetaUser, InterestLevel, JoinBetaRequest, SignupDraft, SubmitInterestRequest};
use crate::role::Role;
use std::collections::BTreeMap;
use thiserror::Error;

/// How long the signup success panel stays up before the survey appears
pub const SIGNUP_SUCCESS_DELAY_MS: u64 = 2_000;

/// How long the survey success panel stays up before the flow dismisses
pub const INTEREST_SUCCESS_DELAY_MS: u64 = 3_000;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlowError {
    #[error("required fields missing: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("rate at least one service before submitting")]
    NoRatings,

    #[error("a submission is already in flight")]
    SubmissionInFlight,

    #[error("not valid in the current stage")]
    InvalidStage,
}

/// Where the funnel currently is
#[derive(Debug, Clone, PartialEq)]
pub enum FlowStage {
    /// Editing the signup form
    Signup { draft: SignupDraft },
    /// Signup POST in flight; the draft is kept for failure recovery
    SubmittingSignup { draft: SignupDraft },
    /// Transient success panel after the backend acknowledged the signup
    SignupDone { user: BetaUser },
    /// Editing the service-interest survey, bound to the server-assigned
    /// identity from the signup acknowledgement
    Interest {
        beta_user_id: String,
        email: String,
        ratings: BTreeMap<String, InterestLevel>,
    },
    /// Survey POST in flight
    SubmittingInterest {
        beta_user_id: String,
        email: String,
        ratings: BTreeMap<String, InterestLevel>,
    },
    /// Transient success panel after the survey was acknowledged
    InterestDone,
    /// Flow finished; the host view should dismiss itself
    Closed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LeadFlow {
    role: Role,
    stage: FlowStage,
}

impl LeadFlow {
    pub fn new(role: Role) -> LeadFlow {
        LeadFlow {
            role,
            stage: FlowStage::Signup {
                draft: SignupDraft::default(),
            },
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn stage(&self) -> &FlowStage {
        &self.stage
    }

    pub fn is_submitting(&self) -> bool {
        matches!(
            self.stage,
            FlowStage::SubmittingSignup { .. } | FlowStage::SubmittingInterest { .. }
        )
    }

    pub fn is_closed(&self) -> bool {
        matches!(self.stage, FlowStage::Closed)
    }

    /// Mutable access to the signup draft while it is editable
    pub fn draft_mut(&mut self) -> Option<&mut SignupDraft> {
        match &mut self.stage {
            FlowStage::Signup { draft } => Some(draft),
            _ => None,
        }
    }

    pub fn draft(&self) -> Option<&SignupDraft> {
        match &self.stage {
            FlowStage::Signup { draft } | FlowStage::SubmittingSignup { draft } => Some(draft),
            _ => None,
        }
    }

    /// Guard and start the signup submission
    ///
    /// Succeeds only from `Signup` with all seven fields filled; the
    /// returned payload is exactly what the transport must POST. While a
    /// submission is in flight this is a rejected no-op, so double-clicks
    /// cannot double-submit.
    pub fn begin_signup_submit(&mut self) -> Result<JoinBetaRequest, FlowError> {
        match &self.stage {
            FlowStage::Signup { draft } => {
                let missing = draft.missing_fields();
                if !missing.is_empty() {
                    return Err(FlowError::MissingFields(missing));
                }
                let payload = JoinBetaRequest::from_draft(draft, self.role);
                let draft = draft.clone();
                self.stage = FlowStage::SubmittingSignup { draft };
                Ok(payload)
            }
            FlowStage::SubmittingSignup { .. } | FlowStage::SubmittingInterest { .. } => {
                Err(FlowError::SubmissionInFlight)
            }
            _ => Err(FlowError::InvalidStage),
        }
    }

    /// Record the backend acknowledgement of the signup
    pub fn signup_succeeded(&mut self, user: BetaUser) -> Result<(), FlowError> {
        match self.stage {
            FlowStage::SubmittingSignup { .. } => {
                self.stage = FlowStage::SignupDone { user };
                Ok(())
            }
            _ => Err(FlowError::InvalidStage),
        }
    }

    /// Return to editing with the draft intact after a failed signup POST
    pub fn signup_failed(&mut self) -> Result<(), FlowError> {
        match &self.stage {
            FlowStage::SubmittingSignup { draft } => {
                let draft = draft.clone();
                self.stage = FlowStage::Signup { draft };
                Ok(())
            }
            _ => Err(FlowError::InvalidStage),
        }
    }

    /// Move from the transient signup success panel into the survey
    ///
    /// Carries forward the server-assigned id and the stored email from the
    /// acknowledgement, never anything client-derived.
    pub fn advance_to_interest(&mut self) -> Result<(), FlowError> {
        match &self.stage {
            FlowStage::SignupDone { user } => {
                self.stage = FlowStage::Interest {
                    beta_user_id: user.id.clone(),
                    email: user.email.clone(),
                    ratings: BTreeMap::new(),
                };
                Ok(())
            }
            _ => Err(FlowError::InvalidStage),
        }
    }

    /// Current rating for a service, if the user has given one
    pub fn rating(&self, service_id: &str) -> Option<InterestLevel> {
        match &self.stage {
            FlowStage::Interest { ratings, .. } | FlowStage::SubmittingInterest { ratings, .. } => {
                ratings.get(service_id).copied()
            }
            _ => None,
        }
    }

    pub fn rating_count(&self) -> usize {
        match &self.stage {
            FlowStage::Interest { ratings, .. } | FlowStage::SubmittingInterest { ratings, .. } => {
                ratings.len()
            }
            _ => 0,
        }
    }

    /// Set or change the rating for one service
    pub fn rate(&mut self, service_id: &str, level: InterestLevel) -> Result<(), FlowError> {
        match &mut self.stage {
            FlowStage::Interest { ratings, .. } => {
                ratings.insert(service_id.to_string(), level);
                Ok(())
            }
            FlowStage::SubmittingInterest { .. } => Err(FlowError::SubmissionInFlight),
            _ => Err(FlowError::InvalidStage),
        }
    }

    /// Guard and start the survey submission
    pub fn begin_interest_submit(&mut self) -> Result<SubmitInterestRequest, FlowError> {
        match &self.stage {
            FlowStage::Interest {
                beta_user_id,
                email,
                ratings,
            } => {
                if ratings.is_empty() {
                    return Err(FlowError::NoRatings);
                }
                let payload = SubmitInterestRequest {
                    beta_user_id: beta_user_id.clone(),
                    email: email.clone(),
                    role: self.role,
                    service_interests: ratings.clone(),
                };
                self.stage = FlowStage::SubmittingInterest {
                    beta_user_id: beta_user_id.clone(),
                    email: email.clone(),
                    ratings: ratings.clone(),
                };
                Ok(payload)
            }
            FlowStage::SubmittingSignup { .. } | FlowStage::SubmittingInterest { .. } => {
                Err(FlowError::SubmissionInFlight)
            }
            _ => Err(FlowError::InvalidStage),
        }
    }

    pub fn interest_succeeded(&mut self) -> Result<(), FlowError> {
        match self.stage {
            FlowStage::SubmittingInterest { .. } => {
                self.stage = FlowStage::InterestDone;
                Ok(())
            }
            _ => Err(FlowError::InvalidStage),
        }
    }

    /// Return to the survey with all ratings intact after a failed POST
    pub fn interest_failed(&mut self) -> Result<(), FlowError> {
        match &self.stage {
            FlowStage::SubmittingInterest {
                beta_user_id,
                email,
                ratings,
            } => {
                self.stage = FlowStage::Interest {
                    beta_user_id: beta_user_id.clone(),
                    email: email.clone(),
                    ratings: ratings.clone(),
                };
                Ok(())
            }
            _ => Err(FlowError::InvalidStage),
        }
    }

    /// Dismiss the flow once the survey success panel has timed out
    pub fn finish(&mut self) -> Result<(), FlowError> {
        match self.stage {
            FlowStage::InterestDone => {
                self.stage = FlowStage::Closed;
                Ok(())
            }
            _ => Err(FlowError::InvalidStage),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn filled_flow() -> LeadFlow {
        let mut flow = LeadFlow::new(Role::Student);
        let draft = flow.draft_mut().unwrap();
        draft.name = "Asha Verma".into();
        draft.email = "asha@example.com".into();
        draft.phone = "+91 98765 43210".into();
        draft.institution = "IIT Indore".into();
        draft.designation = "B.Tech CSE, 3rd year".into();
        draft.location = "Indore".into();
        draft.specific_need = "Mock interviews".into();
        flow
    }

    fn ack(id: &str, email: &str) -> BetaUser {
        BetaUser {
            id: id.into(),
            name: "Asha Verma".into(),
            email: email.into(),
            phone: "+91 98765 43210".into(),
            institution: "IIT Indore".into(),
            designation: "B.Tech CSE, 3rd year".into(),
            location: "Indore".into(),
            specific_need: "Mock interviews".into(),
            role: Role::Student,
            joined_at: Utc::now(),
        }
    }

    #[test]
    fn test_incomplete_draft_blocks_submission() {
        let mut flow = LeadFlow::new(Role::Student);
        flow.draft_mut().unwrap().name = "Asha".into();
        let before = flow.clone();
        let err = flow.begin_signup_submit().unwrap_err();
        assert!(matches!(err, FlowError::MissingFields(ref f) if f.len() == 6));
        // Still editing, draft untouched.
        assert_eq!(flow, before);
    }

    #[test]
    fn test_submit_while_in_flight_is_rejected() {
        let mut flow = filled_flow();
        flow.begin_signup_submit().unwrap();
        assert!(flow.is_submitting());
        assert_eq!(
            flow.begin_signup_submit().unwrap_err(),
            FlowError::SubmissionInFlight
        );
    }

    #[test]
    fn test_failure_restores_editing_with_draft_intact() {
        let mut flow = filled_flow();
        let payload = flow.begin_signup_submit().unwrap();
        flow.signup_failed().unwrap();
        let draft = flow.draft().unwrap();
        assert_eq!(draft.name, payload.name);
        assert_eq!(draft.specific_need, payload.specific_need);
        assert!(!flow.is_submitting());
    }

    #[test]
    fn test_survey_binds_server_identity_not_client_values() {
        let mut flow = filled_flow();
        flow.begin_signup_submit().unwrap();
        // Backend normalizes the email; the survey must carry the stored
        // value, not what was typed.
        flow.signup_succeeded(ack("srv-42", "asha.verma@example.com"))
            .unwrap();
        flow.advance_to_interest().unwrap();
        flow.rate("mock-interviews", InterestLevel::VeryInterested)
            .unwrap();
        let payload = flow.begin_interest_submit().unwrap();
        assert_eq!(payload.beta_user_id, "srv-42");
        assert_eq!(payload.email, "asha.verma@example.com");
        assert_eq!(payload.role, Role::Student);
    }

    #[test]
    fn test_survey_without_ratings_is_blocked() {
        let mut flow = filled_flow();
        flow.begin_signup_submit().unwrap();
        flow.signup_succeeded(ack("srv-42", "asha@example.com")).unwrap();
        flow.advance_to_interest().unwrap();
        assert_eq!(flow.begin_interest_submit().unwrap_err(), FlowError::NoRatings);
        assert!(!flow.is_submitting());
    }

    #[test]
    fn test_survey_failure_keeps_ratings() {
        let mut flow = filled_flow();
        flow.begin_signup_submit().unwrap();
        flow.signup_succeeded(ack("srv-42", "asha@example.com")).unwrap();
        flow.advance_to_interest().unwrap();
        flow.rate("mock-interviews", InterestLevel::VeryInterested)
            .unwrap();
        flow.rate("resume-studio", InterestLevel::SomewhatInterested)
            .unwrap();
        flow.begin_interest_submit().unwrap();
        flow.interest_failed().unwrap();
        assert_eq!(flow.rating_count(), 2);
        assert_eq!(
            flow.rating("mock-interviews"),
            Some(InterestLevel::VeryInterested)
        );
    }

    #[test]
    fn test_full_walkthrough_ends_closed() {
        let mut flow = filled_flow();
        flow.begin_signup_submit().unwrap();
        flow.signup_succeeded(ack("srv-42", "asha@example.com")).unwrap();
        flow.advance_to_interest().unwrap();
        flow.rate("mock-interviews", InterestLevel::VeryInterested)
            .unwrap();
        flow.begin_interest_submit().unwrap();
        flow.interest_succeeded().unwrap();
        flow.finish().unwrap();
        assert!(flow.is_closed());
    }

    #[test]
    fn test_late_timer_after_close_is_a_rejected_noop() {
        let mut flow = filled_flow();
        flow.begin_signup_submit().unwrap();
        flow.signup_succeeded(ack("srv-42", "asha@example.com")).unwrap();
        // The host dismissed the flow before the 2s panel timer fired.
        flow.stage = FlowStage::Closed;
        assert_eq!(flow.advance_to_interest().unwrap_err(), FlowError::InvalidStage);
        assert!(flow.is_closed());
    }

    #[test]
    fn test_rerating_a_service_overwrites() {
        let mut flow = filled_flow();
        flow.begin_signup_submit().unwrap();
        flow.signup_succeeded(ack("srv-42", "asha@example.com")).unwrap();
        flow.advance_to_interest().unwrap();
        flow.rate("mock-interviews", InterestLevel::NotInterested)
            .unwrap();
        flow.rate("mock-interviews", InterestLevel::VeryInterested)
            .unwrap();
        assert_eq!(flow.rating_count(), 1);
        assert_eq!(
            flow.rating("mock-interviews"),
            Some(InterestLevel::VeryInterested)
        );
    }
}
