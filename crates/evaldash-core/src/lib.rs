// Domain modules
pub mod config;
pub mod error;
pub mod metrics;
pub mod model;
pub mod preview;
pub mod simulation;
pub mod view;

pub use config::ServerConfig;
pub use error::{DashboardError, Result};
pub use metrics::{format_percent, ChartData, ChartSeries, Metric, MetricCard, ScoreRow, ScoreTable};
pub use model::ModelName;
pub use preview::{CsvPreview, PREVIEW_ROWS};
pub use simulation::{run_simulation, SimulationStatus, SIMULATION_DELAY};
pub use view::{DashboardView, Selection};
