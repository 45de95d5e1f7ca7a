pub mod handler;
pub mod spawner;
