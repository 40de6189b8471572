pub mod init;
pub mod list;
pub mod manage;
pub mod play;
pub mod report;
pub mod validate;
pub mod whoami;
