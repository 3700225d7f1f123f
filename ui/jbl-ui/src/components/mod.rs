pub mod connection_status;
pub mod home;
pub mod layout;
pub mod profile;
pub mod staking;
pub mod support;
pub mod wallet;
