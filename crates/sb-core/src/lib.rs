//! SkillBridge Core Domain Logic
//!
//! This crate holds the browser-independent parts of the SkillBridge web
//! client: the role taxonomy, the service catalog, the lead-capture flow
//! state machine, and the dashboard aggregates. Nothing in here performs
//! I/O; the transport lives in `sb-client` and the views in `sb-web`.

pub mod catalog;
pub mod flow;
pub mod model;
pub mod role;
pub mod stats;

pub use catalog::{services_for, FlowStep, ServiceDescriptor};
pub use flow::{FlowError, FlowStage, LeadFlow};
pub use model::{
    BetaUser, CountResponse, InterestLevel, InterestSubmission, JoinBetaRequest, SignupDraft,
    SubmitInterestRequest,
};
pub use role::{FieldLabels, Role};
pub use stats::{DashboardSnapshot, RoleSlice};
