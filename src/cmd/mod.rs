//! Command module structure for quizrun CLI

pub mod levels;
pub mod run;
pub mod util;
