pub mod behavior;
pub mod collision;
pub mod compute;
pub mod display;
pub mod entities;
pub mod spawner;
pub mod world;
