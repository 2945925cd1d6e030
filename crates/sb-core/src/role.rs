//! Role taxonomy and role-keyed form labels

use serde::{Deserialize, Serialize};
use std::fmt;

/// Audience a visitor identifies as
///
/// The selected role drives which service catalog is shown and how the
/// lead-capture form labels its institution/designation/need fields. The
/// wire representation is the bare variant name (`"Student"` etc.), which
/// is also what gets persisted in browser storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Learner looking for career support
    Student,
    /// College or training institute
    Institute,
    /// Hiring company
    Industry,
}

impl Role {
    /// All roles in display order
    pub const ALL: [Role; 3] = [Role::Student, Role::Institute, Role::Industry];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "Student",
            Role::Institute => "Institute",
            Role::Industry => "Industry",
        }
    }

    /// Strict parse of a stored or received role string
    ///
    /// Anything but the three exact variant names is `None`; a stale or
    /// hand-edited storage value must read as "no role selected".
    pub fn parse(value: &str) -> Option<Role> {
        match value {
            "Student" => Some(Role::Student),
            "Institute" => Some(Role::Institute),
            "Industry" => Some(Role::Industry),
            _ => None,
        }
    }

    /// Short pitch line shown on the role-selection cards
    pub fn tagline(&self) -> &'static str {
        match self {
            Role::Student => "Build your career with guidance, skills, and placements",
            Role::Institute => "Lift placement outcomes across your whole campus",
            Role::Industry => "Hire job-ready talent straight from the source",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Human-facing labels for the role-dependent signup fields
///
/// Only the presentation changes per role; the wire field names underneath
/// (`institution`, `designation`, `specificNeed`) stay the same.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldLabels {
    pub institution: &'static str,
    pub institution_placeholder: &'static str,
    pub designation: &'static str,
    pub designation_placeholder: &'static str,
    pub need: &'static str,
    pub need_placeholder: &'static str,
}

impl FieldLabels {
    pub fn for_role(role: Role) -> FieldLabels {
        match role {
            Role::Student => FieldLabels {
                institution: "College / University",
                institution_placeholder: "Where do you study?",
                designation: "Course & Year",
                designation_placeholder: "e.g. B.Tech CSE, 3rd year",
                need: "What career help do you need?",
                need_placeholder: "Tell us what you want to achieve...",
            },
            Role::Institute => FieldLabels {
                institution: "Institute Name",
                institution_placeholder: "Name of your institute",
                designation: "Your Designation",
                designation_placeholder: "e.g. Placement Officer, Dean",
                need: "What placement support does your institute need?",
                need_placeholder: "Tell us about your placement goals...",
            },
            Role::Industry => FieldLabels {
                institution: "Company Name",
                institution_placeholder: "Name of your company",
                designation: "Your Role",
                designation_placeholder: "e.g. HR Manager, Founder",
                need: "What hiring needs does your company have?",
                need_placeholder: "Tell us about the talent you are looking for...",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_exact_names() {
        assert_eq!(Role::parse("Student"), Some(Role::Student));
        assert_eq!(Role::parse("Institute"), Some(Role::Institute));
        assert_eq!(Role::parse("Industry"), Some(Role::Industry));
    }

    #[test]
    fn test_parse_rejects_everything_else() {
        assert_eq!(Role::parse(""), None);
        assert_eq!(Role::parse("student"), None);
        assert_eq!(Role::parse("STUDENT"), None);
        assert_eq!(Role::parse("Mentor"), None);
    }

    #[test]
    fn test_roundtrip_through_str() {
        for role in Role::ALL {
            assert_eq!(Role::parse(role.as_str()), Some(role));
        }
    }

    #[test]
    fn test_labels_differ_per_role() {
        let student = FieldLabels::for_role(Role::Student);
        let institute = FieldLabels::for_role(Role::Institute);
        let industry = FieldLabels::for_role(Role::Industry);
        assert_ne!(student.institution, institute.institution);
        assert_ne!(institute.institution, industry.institution);
        assert_ne!(student.need, industry.need);
    }
}
