pub mod display;
pub mod load_state;
pub mod reconcile;
pub mod threat;
pub mod trail;
