pub mod cli;
pub mod execute;
pub mod parse;
pub mod serve;
