pub mod install;
pub mod resolve;
pub mod run;
pub mod uninstall;
