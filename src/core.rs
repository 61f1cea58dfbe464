pub mod chemistry;
pub mod event;
pub mod health;
pub mod self_discharge;
pub mod view;
