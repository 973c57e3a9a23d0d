//! Record models mapping to the `users` and `contests` tables.

mod contest_record;
mod user_record;

pub use contest_record::ContestRecord;
pub use user_record::UserRecord;
