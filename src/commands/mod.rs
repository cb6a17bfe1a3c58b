pub mod emit;
pub mod generate;
pub mod init;
pub mod plan;
