pub mod autostart;
pub mod banner;
pub mod daemon;
pub mod debug;
pub mod doctor;
pub mod init;
pub mod start;
pub mod status;
pub mod stop;
