/// Domain types for Acue Accounts
mod ids;
mod user;

pub use ids::UserId;
pub use user::{PublicUser, UserRecord, UserSummary};
