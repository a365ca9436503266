pub mod actions;
pub mod assessments;
pub mod auth;
pub mod avatar;
pub mod catalog;
pub mod chat;
pub mod programs;
pub mod responses;
pub mod results;
pub mod speech;
