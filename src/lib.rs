pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod mail;
pub mod router;
pub mod service;
pub mod views;

pub use error::QuizError;
pub use router::{QuizState, quiz_router};
