pub mod errors;
pub mod run;
