//! Page-level route components.

pub mod dashboard;
pub mod home;
pub mod not_found;
pub mod privacy;
pub mod terms;
