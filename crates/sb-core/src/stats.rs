//! Dashboard snapshot and derived aggregates

use crate::model::{BetaUser, InterestSubmission};
use crate::role::Role;
use serde::{Deserialize, Serialize};

/// Per-role share of the signup base
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoleSlice {
    pub role: Role,
    pub count: usize,
    /// Share of all signups, 0..=100; 0 when there are no signups
    pub percent: f64,
}

/// Everything the dashboard renders from one refresh
///
/// Built wholesale from the three backend reads; a snapshot is replaced,
/// never merged, so a failed refresh leaves the previous one untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    pub users: Vec<BetaUser>,
    pub submissions: Vec<InterestSubmission>,
    /// Server-reported signup count, shown as-is on the count card
    pub total_count: u64,
    /// Role distribution in `Role::ALL` order
    pub role_slices: Vec<RoleSlice>,
    /// Interest submissions per signup, as a rounded percentage
    ///
    /// Completion means "submitted the survey at all"; a submission with a
    /// single rating counts the same as one rating every service.
    pub completion_rate: u32,
}

impl DashboardSnapshot {
    pub fn compute(
        users: Vec<BetaUser>,
        submissions: Vec<InterestSubmission>,
        total_count: u64,
    ) -> DashboardSnapshot {
        let signup_count = users.len();
        let role_slices = Role::ALL
            .iter()
            .map(|&role| {
                let count = users.iter().filter(|u| u.role == role).count();
                let percent = if signup_count == 0 {
                    0.0
                } else {
                    count as f64 / signup_count as f64 * 100.0
                };
                RoleSlice {
                    role,
                    count,
                    percent,
                }
            })
            .collect();

        let completion_rate = if signup_count == 0 {
            0
        } else {
            (submissions.len() as f64 / signup_count as f64 * 100.0).round() as u32
        };

        DashboardSnapshot {
            users,
            submissions,
            total_count,
            role_slices,
            completion_rate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::collections::BTreeMap;

    fn user(id: usize, role: Role) -> BetaUser {
        BetaUser {
            id: format!("u{id}"),
            name: format!("User {id}"),
            email: format!("user{id}@example.com"),
            phone: "+91 90000 00000".into(),
            institution: "Example".into(),
            designation: "Example".into(),
            location: "Pune".into(),
            specific_need: "Help".into(),
            role,
            joined_at: Utc::now(),
        }
    }

    fn submission(id: usize) -> InterestSubmission {
        InterestSubmission {
            beta_user_id: format!("u{id}"),
            email: format!("user{id}@example.com"),
            role: Role::Student,
            service_interests: BTreeMap::new(),
            submitted_at: None,
        }
    }

    #[test]
    fn test_role_distribution_and_completion() {
        let mut users = Vec::new();
        for i in 0..6 {
            users.push(user(i, Role::Student));
        }
        for i in 6..9 {
            users.push(user(i, Role::Institute));
        }
        users.push(user(9, Role::Industry));
        let submissions = (0..4).map(submission).collect();

        let snap = DashboardSnapshot::compute(users, submissions, 10);

        assert_eq!(snap.role_slices.len(), 3);
        assert_eq!(snap.role_slices[0].role, Role::Student);
        assert_eq!(snap.role_slices[0].count, 6);
        assert!((snap.role_slices[0].percent - 60.0).abs() < f64::EPSILON);
        assert_eq!(snap.role_slices[1].count, 3);
        assert!((snap.role_slices[1].percent - 30.0).abs() < f64::EPSILON);
        assert_eq!(snap.role_slices[2].count, 1);
        assert!((snap.role_slices[2].percent - 10.0).abs() < f64::EPSILON);
        assert_eq!(snap.completion_rate, 40);
    }

    #[test]
    fn test_empty_data_yields_zeros_not_division_errors() {
        let snap = DashboardSnapshot::compute(Vec::new(), Vec::new(), 0);
        assert_eq!(snap.completion_rate, 0);
        for slice in &snap.role_slices {
            assert_eq!(slice.count, 0);
            assert_eq!(slice.percent, 0.0);
        }
    }

    #[test]
    fn test_completion_counts_submissions_not_rating_coverage() {
        let users = vec![user(0, Role::Student), user(1, Role::Student)];
        let mut partial = submission(0);
        partial
            .service_interests
            .insert("career-counselling".into(), crate::model::InterestLevel::VeryInterested);
        // One rating out of nine still counts as a completed survey.
        let snap = DashboardSnapshot::compute(users, vec![partial], 2);
        assert_eq!(snap.completion_rate, 50);
    }

    #[test]
    fn test_completion_rounds_to_nearest_percent() {
        let users = (0..3).map(|i| user(i, Role::Student)).collect();
        let snap = DashboardSnapshot::compute(users, vec![submission(0)], 3);
        // 1/3 rounds to 33.
        assert_eq!(snap.completion_rate, 33);
    }
}
