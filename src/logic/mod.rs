//! Tournament business logic: schedule generation and result propagation.

mod bracket;
mod groups;
mod results;
mod schedule;
mod setup;

pub use bracket::build_bracket;
pub use groups::{build_groups, group_label};
pub use results::{apply_result, ResultOutcome};
pub use schedule::{generate_schedule, DEFAULT_GROUP_SIZE};
pub use setup::{generate_matches, record_result};
