pub mod preprocess;
pub mod session;
