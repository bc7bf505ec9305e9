pub mod check;
pub mod config;
pub mod distance;
pub mod init;
pub mod track;
