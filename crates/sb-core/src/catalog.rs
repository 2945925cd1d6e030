//! Static role-keyed service catalog
//!
//! Reference data only: built once at startup, never mutated. Declaration
//! order is load-bearing because the services page links to per-service
//! anchors in catalog order.

use crate::role::Role;
use once_cell::sync::Lazy;

/// One step in a service's usage flow
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowStep {
    pub number: u8,
    pub title: String,
    pub detail: String,
}

/// Static metadata describing one offered service for a role
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceDescriptor {
    /// Stable id; doubles as the page anchor and the survey key
    pub id: String,
    pub title: String,
    pub description: String,
    pub flow: Vec<FlowStep>,
    pub benefits: Vec<String>,
    pub tags: Vec<String>,
}

fn step(number: u8, title: &str, detail: &str) -> FlowStep {
    FlowStep {
        number,
        title: title.to_string(),
        detail: detail.to_string(),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Services offered to a role, in declaration order
pub fn services_for(role: Role) -> &'static [ServiceDescriptor] {
    match role {
        Role::Student => &STUDENT_SERVICES,
        Role::Institute => &INSTITUTE_SERVICES,
        Role::Industry => &INDUSTRY_SERVICES,
    }
}

pub static STUDENT_SERVICES: Lazy<Vec<ServiceDescriptor>> = Lazy::new(student_services);
pub static INSTITUTE_SERVICES: Lazy<Vec<ServiceDescriptor>> = Lazy::new(institute_services);
pub static INDUSTRY_SERVICES: Lazy<Vec<ServiceDescriptor>> = Lazy::new(industry_services);

fn student_services() -> Vec<ServiceDescriptor> {
    vec![
        ServiceDescriptor {
            id: "career-counselling".to_string(),
            title: "Career Counselling".to_string(),
            description: "One-on-one sessions with counsellors who map your strengths to realistic career paths.".to_string(),
            flow: vec![
                step(1, "Share your profile", "Tell us your course, interests, and where you feel stuck."),
                step(2, "Meet your counsellor", "A 45-minute video session matched to your field."),
                step(3, "Get your roadmap", "A written plan with milestones for the next two semesters."),
            ],
            benefits: strings(&[
                "Clarity on which roles actually fit your profile",
                "A concrete semester-by-semester plan",
                "Follow-up check-ins every month",
            ]),
            tags: strings(&["guidance", "1-on-1", "roadmap"]),
        },
        ServiceDescriptor {
            id: "resume-studio".to_string(),
            title: "Resume Studio".to_string(),
            description: "Build a recruiter-ready resume with templates and line-by-line expert review.".to_string(),
            flow: vec![
                step(1, "Pick a template", "ATS-friendly formats tuned for freshers."),
                step(2, "Draft with prompts", "Guided sections turn projects into impact statements."),
                step(3, "Expert review", "A reviewer marks up every line within 48 hours."),
            ],
            benefits: strings(&[
                "Resumes that pass automated screening",
                "Project descriptions recruiters actually read",
                "Unlimited revisions until shortlisted",
            ]),
            tags: strings(&["resume", "review", "ats"]),
        },
        ServiceDescriptor {
            id: "mock-interviews".to_string(),
            title: "Mock Interviews".to_string(),
            description: "Timed practice interviews with engineers and HR panels, with recorded feedback.".to_string(),
            flow: vec![
                step(1, "Choose a track", "Technical, HR, or case-study rounds."),
                step(2, "Face the panel", "A live session under real interview pressure."),
                step(3, "Review the tape", "Scored rubric plus the recording to study."),
            ],
            benefits: strings(&[
                "Real interview pressure before the real thing",
                "Rubric-based scoring, not vague impressions",
                "Track improvement across attempts",
            ]),
            tags: strings(&["interview", "practice", "feedback"]),
        },
        ServiceDescriptor {
            id: "skill-assessments".to_string(),
            title: "Skill Assessments".to_string(),
            description: "Standardized tests that benchmark your skills against hiring bars, with a shareable score.".to_string(),
            flow: vec![
                step(1, "Take the baseline", "90 minutes across aptitude, domain, and coding."),
                step(2, "See your gaps", "Topic-level breakdown against the roles you want."),
                step(3, "Close and retest", "Curated practice sets, then a fresh attempt."),
            ],
            benefits: strings(&[
                "Know exactly where you stand before applying",
                "A verified score employers can trust",
                "Topic-level gap analysis",
            ]),
            tags: strings(&["assessment", "benchmark", "score"]),
        },
        ServiceDescriptor {
            id: "internship-match".to_string(),
            title: "Internship Matching".to_string(),
            description: "Curated internship openings matched to your skills, with application tracking.".to_string(),
            flow: vec![
                step(1, "Complete your profile", "Skills, projects, availability, and location."),
                step(2, "Get matched", "Openings ranked by fit, refreshed weekly."),
                step(3, "Apply and track", "One-click applications with status updates."),
            ],
            benefits: strings(&[
                "Openings filtered to your actual skill level",
                "No more mass-applying into the void",
                "Status visibility for every application",
            ]),
            tags: strings(&["internship", "matching", "applications"]),
        },
        ServiceDescriptor {
            id: "mentor-connect".to_string(),
            title: "Mentor Connect".to_string(),
            description: "Long-term mentorship from professionals working in the role you want.".to_string(),
            flow: vec![
                step(1, "Browse mentors", "Profiles with role, company, and availability."),
                step(2, "Request a match", "Mentors accept based on your goals note."),
                step(3, "Meet monthly", "Structured sessions with shared action items."),
            ],
            benefits: strings(&[
                "Advice from people doing the job today",
                "Accountability between sessions",
                "A referral-grade professional relationship",
            ]),
            tags: strings(&["mentorship", "network", "long-term"]),
        },
        ServiceDescriptor {
            id: "project-portfolio".to_string(),
            title: "Project Portfolio".to_string(),
            description: "Guided capstone projects that become portfolio pieces recruiters can open and run.".to_string(),
            flow: vec![
                step(1, "Pick a brief", "Industry-written problem statements."),
                step(2, "Build with checkpoints", "Weekly reviews keep the project shippable."),
                step(3, "Publish your page", "A hosted portfolio entry with a live demo link."),
            ],
            benefits: strings(&[
                "Proof of skill beyond the resume",
                "Projects scoped by actual employers",
                "A public page to link in applications",
            ]),
            tags: strings(&["projects", "portfolio", "capstone"]),
        },
        ServiceDescriptor {
            id: "placement-prep".to_string(),
            title: "Placement Prep Bootcamp".to_string(),
            description: "An eight-week sprint covering aptitude, coding rounds, and group discussions before campus season.".to_string(),
            flow: vec![
                step(1, "Join a cohort", "Batches aligned to your campus placement calendar."),
                step(2, "Daily drills", "Aptitude and coding sets with leaderboards."),
                step(3, "Final mocks", "Full placement-day simulation in the last week."),
            ],
            benefits: strings(&[
                "Structured prep instead of last-minute cramming",
                "Cohort pressure keeps you consistent",
                "Placement-day simulation before the real one",
            ]),
            tags: strings(&["placement", "bootcamp", "cohort"]),
        },
        ServiceDescriptor {
            id: "scholarship-finder".to_string(),
            title: "Scholarship Finder".to_string(),
            description: "A matched feed of scholarships and grants you are actually eligible for, with deadline alerts.".to_string(),
            flow: vec![
                step(1, "Set your criteria", "Course, year, income band, and state."),
                step(2, "Review matches", "Only schemes whose criteria you meet."),
                step(3, "Apply on time", "Checklists and alerts for every deadline."),
            ],
            benefits: strings(&[
                "No more scanning hundreds of ineligible schemes",
                "Document checklists per application",
                "Never miss a deadline",
            ]),
            tags: strings(&["scholarship", "funding", "deadlines"]),
        },
    ]
}

fn institute_services() -> Vec<ServiceDescriptor> {
    vec![
        ServiceDescriptor {
            id: "campus-drives".to_string(),
            title: "Campus Placement Drives".to_string(),
            description: "End-to-end organization of placement drives, from employer outreach to offer tracking.".to_string(),
            flow: vec![
                step(1, "Share your calendar", "Batch sizes, branches, and preferred windows."),
                step(2, "We bring employers", "Matched companies confirmed per slot."),
                step(3, "Run the drive", "Scheduling, logistics, and offer tracking handled."),
            ],
            benefits: strings(&[
                "More employers without more placement-cell headcount",
                "Single dashboard for every offer",
                "Drives that fit the academic calendar",
            ]),
            tags: strings(&["placements", "drives", "employers"]),
        },
        ServiceDescriptor {
            id: "student-analytics".to_string(),
            title: "Student Readiness Analytics".to_string(),
            description: "Batch-level dashboards showing which students are placement-ready and who needs intervention.".to_string(),
            flow: vec![
                step(1, "Onboard your batches", "Roster import with branch and semester."),
                step(2, "Assess at scale", "Standardized readiness tests per batch."),
                step(3, "Act on cohorts", "Intervention lists for at-risk students."),
            ],
            benefits: strings(&[
                "Early warning instead of final-year surprises",
                "Evidence for NAAC and NBA reporting",
                "Interventions targeted, not blanket",
            ]),
            tags: strings(&["analytics", "readiness", "reporting"]),
        },
        ServiceDescriptor {
            id: "industry-tieups".to_string(),
            title: "Industry Tie-ups".to_string(),
            description: "Brokered MoUs with companies for internships, guest lectures, and sponsored labs.".to_string(),
            flow: vec![
                step(1, "Define priorities", "Sectors and engagement types you want."),
                step(2, "Meet matched partners", "Introductions with interested companies."),
                step(3, "Sign and launch", "Template MoUs and a launch plan."),
            ],
            benefits: strings(&[
                "Partnerships beyond your alumni network",
                "Ready-made MoU templates",
                "Recurring engagements, not one-off visits",
            ]),
            tags: strings(&["partnerships", "mou", "industry"]),
        },
        ServiceDescriptor {
            id: "curriculum-advisory".to_string(),
            title: "Curriculum Advisory".to_string(),
            description: "Gap analysis between your syllabus and current hiring requirements, with elective recommendations.".to_string(),
            flow: vec![
                step(1, "Share the syllabus", "Current course structure per department."),
                step(2, "Gap report", "Skills employers list that the syllabus misses."),
                step(3, "Adopt modules", "Plug-in elective modules with materials."),
            ],
            benefits: strings(&[
                "Syllabus aligned to what recruiters screen for",
                "Ready-to-teach elective modules",
                "Annual refresh as hiring trends move",
            ]),
            tags: strings(&["curriculum", "skills-gap", "electives"]),
        },
        ServiceDescriptor {
            id: "faculty-development".to_string(),
            title: "Faculty Development".to_string(),
            description: "Certification workshops that bring faculty up to speed on the tools industry actually uses.".to_string(),
            flow: vec![
                step(1, "Pick focus areas", "Tracks from data tooling to modern pedagogy."),
                step(2, "Run the workshop", "On-campus or remote, 2 to 5 days."),
                step(3, "Certify faculty", "Assessment-backed certificates per participant."),
            ],
            benefits: strings(&[
                "Faculty teaching current tools, not legacy ones",
                "Certificates for accreditation files",
                "Workshops scheduled around teaching load",
            ]),
            tags: strings(&["faculty", "training", "certification"]),
        },
        ServiceDescriptor {
            id: "admission-outreach".to_string(),
            title: "Admission Outreach".to_string(),
            description: "Placement-outcome-led marketing that puts your institute in front of prospective students.".to_string(),
            flow: vec![
                step(1, "Verify outcomes", "We audit and package your placement numbers."),
                step(2, "Build the campaign", "Landing pages and creatives per program."),
                step(3, "Track admissions", "Lead-to-enrollment funnel reporting."),
            ],
            benefits: strings(&[
                "Marketing backed by verified outcomes",
                "Program-level campaign targeting",
                "Funnel numbers, not vanity metrics",
            ]),
            tags: strings(&["admissions", "outreach", "marketing"]),
        },
    ]
}

fn industry_services() -> Vec<ServiceDescriptor> {
    vec![
        ServiceDescriptor {
            id: "campus-hiring".to_string(),
            title: "Campus Hiring".to_string(),
            description: "One pipeline into hundreds of campuses with pre-assessed candidates and scheduled drives.".to_string(),
            flow: vec![
                step(1, "Define the role", "Skills bar, locations, and offer band."),
                step(2, "Get shortlists", "Pre-assessed candidates across partner campuses."),
                step(3, "Interview and offer", "Scheduling and offer rollout in one place."),
            ],
            benefits: strings(&[
                "One contract instead of campus-by-campus outreach",
                "Candidates pre-screened against your bar",
                "Drive logistics off your plate",
            ]),
            tags: strings(&["hiring", "campus", "shortlists"]),
        },
        ServiceDescriptor {
            id: "talent-pipeline".to_string(),
            title: "Talent Pipeline".to_string(),
            description: "A standing pool of assessed candidates refreshed every term, ready before headcount opens.".to_string(),
            flow: vec![
                step(1, "Subscribe to profiles", "Roles and skills you hire for repeatedly."),
                step(2, "Watch the pool", "Assessed candidates added each term."),
                step(3, "Engage early", "Reach out before the formal season starts."),
            ],
            benefits: strings(&[
                "Day-one shortlists when a req opens",
                "Early access before placement season",
                "Quality signal from standardized scores",
            ]),
            tags: strings(&["pipeline", "sourcing", "assessments"]),
        },
        ServiceDescriptor {
            id: "internship-programs".to_string(),
            title: "Internship Programs".to_string(),
            description: "Structured internship cohorts with mentoring templates and conversion tracking.".to_string(),
            flow: vec![
                step(1, "Design the program", "Duration, projects, and mentor load."),
                step(2, "Select the cohort", "Matched applicants from partner campuses."),
                step(3, "Convert the best", "Performance data to back conversion offers."),
            ],
            benefits: strings(&[
                "Interns who arrive with verified basics",
                "A program structure interns rate highly",
                "Conversion decisions backed by data",
            ]),
            tags: strings(&["internships", "cohorts", "conversion"]),
        },
        ServiceDescriptor {
            id: "upskilling-workshops".to_string(),
            title: "Upskilling Workshops".to_string(),
            description: "Pre-joining bootcamps that close the gap between campus skills and your stack.".to_string(),
            flow: vec![
                step(1, "Share your stack", "Tools and practices new joiners must know."),
                step(2, "We train the batch", "A bootcamp between offer and joining date."),
                step(3, "Receive ready hires", "Joiners productive in week one."),
            ],
            benefits: strings(&[
                "Shorter ramp-up after joining",
                "Training cost shared across the batch",
                "Curriculum tuned to your codebase's stack",
            ]),
            tags: strings(&["upskilling", "bootcamp", "onboarding"]),
        },
        ServiceDescriptor {
            id: "employer-branding".to_string(),
            title: "Employer Branding".to_string(),
            description: "Campus-facing brand campaigns that make your openings the ones students queue for.".to_string(),
            flow: vec![
                step(1, "Position the brand", "What makes your early-career offer distinct."),
                step(2, "Run campus campaigns", "Tech talks, challenges, and ambassador programs."),
                step(3, "Measure pull", "Application volume and quality per campus."),
            ],
            benefits: strings(&[
                "Stronger applicant pools at the same offer band",
                "Presence on campuses you never visited",
                "Campaign impact measured in applications",
            ]),
            tags: strings(&["branding", "campaigns", "campus"]),
        },
        ServiceDescriptor {
            id: "project-collab".to_string(),
            title: "Project Collaboration".to_string(),
            description: "Sponsor student capstone projects as low-risk trials of future hires.".to_string(),
            flow: vec![
                step(1, "Post a problem", "A scoped brief from your backlog."),
                step(2, "Teams build", "Student teams deliver with faculty oversight."),
                step(3, "Evaluate and hire", "Working output plus a hiring signal."),
            ],
            benefits: strings(&[
                "Real work evaluated before any offer",
                "Fresh approaches to shelved problems",
                "Goodwill with partner institutes",
            ]),
            tags: strings(&["projects", "capstone", "trial"]),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_role_has_services() {
        for role in Role::ALL {
            assert!(!services_for(role).is_empty(), "no services for {role}");
        }
    }

    #[test]
    fn test_student_catalog_has_nine_entries() {
        assert_eq!(services_for(Role::Student).len(), 9);
    }

    #[test]
    fn test_order_is_stable_across_calls() {
        for role in Role::ALL {
            let first: Vec<&str> = services_for(role).iter().map(|s| s.id.as_str()).collect();
            let second: Vec<&str> = services_for(role).iter().map(|s| s.id.as_str()).collect();
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_ids_are_unique_within_a_role() {
        for role in Role::ALL {
            let ids: HashSet<&str> = services_for(role).iter().map(|s| s.id.as_str()).collect();
            assert_eq!(ids.len(), services_for(role).len());
        }
    }

    #[test]
    fn test_flow_steps_are_numbered_from_one() {
        for role in Role::ALL {
            for service in services_for(role) {
                for (idx, step) in service.flow.iter().enumerate() {
                    assert_eq!(step.number as usize, idx + 1, "{}", service.id);
                }
            }
        }
    }

    #[test]
    fn test_every_service_is_fully_described() {
        for role in Role::ALL {
            for service in services_for(role) {
                assert!(!service.description.is_empty());
                assert!(!service.flow.is_empty());
                assert!(!service.benefits.is_empty());
                assert!(!service.tags.is_empty());
            }
        }
    }
}
