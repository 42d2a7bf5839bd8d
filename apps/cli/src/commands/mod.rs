pub mod demo;
pub mod score;
pub mod session;
