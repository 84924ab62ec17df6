mod listing;
mod render;
mod upcoming;

pub use listing::roster_listing;
pub use render::{render_json, ReportError};
pub use upcoming::{upcoming_enrollees, UpcomingEnrollees};
