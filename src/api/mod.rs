pub mod attendance;
pub mod late_stay;
pub mod reports;
