use crate::{config::ServerConfig, trail_store::TrailStore};

pub struct ServerState {
    pub config: ServerConfig,
    pub trails: TrailStore,
}
