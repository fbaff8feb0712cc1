use evaldash_core::{Result, ScoreTable, ServerConfig};

pub struct AppState {
    pub table: ScoreTable,
    pub config: ServerConfig,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Result<Self> {
        Ok(Self {
            table: ScoreTable::builtin()?,
            config,
        })
    }
}
