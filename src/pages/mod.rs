//! Pages
//!
//! One top-level component per HTML entry point.

mod admin_dashboard;
mod student_portal;

pub use admin_dashboard::AdminDashboard;
pub use student_portal::StudentPortal;
