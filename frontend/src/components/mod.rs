pub mod map_component;
pub mod trail_cards;
