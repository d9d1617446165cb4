pub mod course;
pub mod id;
pub mod notification;
pub mod quiz;
pub mod result;
pub mod user;
pub mod validate;
