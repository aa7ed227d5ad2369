pub mod bootstrap;
pub mod init;
pub mod menu;
pub mod prompt;
