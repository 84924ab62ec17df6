pub mod domain;
mod import;
pub mod quarter;
pub mod report;
mod seed;

pub use domain::{Employee, NullsLast, PensionPlan, Roster};
pub use import::{RosterImportError, RosterImporter};
pub use quarter::{first_day_of_next_quarter, last_day_of_quarter, QuarterWindow};
pub use report::{
    render_json, roster_listing, upcoming_enrollees, ReportError, UpcomingEnrollees,
};
pub use seed::seed_roster;
