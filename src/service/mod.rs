pub mod clock;
pub mod grading;
pub mod notifications;
pub mod password;
