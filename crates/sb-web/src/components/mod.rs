//! Reusable components

mod cards;
mod contact_fab;
mod footer;
mod lead_flow;
mod nav;

pub use cards::*;
pub use contact_fab::ContactFab;
pub use footer::Footer;
pub use lead_flow::LeadCaptureModal;
pub use nav::Nav;
