//! Simulated evaluation run

use std::time::Duration;

use serde::Serialize;
use tokio::time::Instant;

/// Fixed pause before the run reports success.
pub const SIMULATION_DELAY: Duration = Duration::from_secs(2);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "status")]
pub enum SimulationStatus {
    #[default]
    Idle,
    Completed { elapsed_ms: u64 },
}

impl SimulationStatus {
    pub fn is_completed(&self) -> bool {
        matches!(self, SimulationStatus::Completed { .. })
    }
}

/// Wait out the fixed delay. Only the calling request is held up; there is
/// no cancellation and the run always completes.
pub async fn run_simulation() -> SimulationStatus {
    tracing::info!("Simulating evaluation ({}s)", SIMULATION_DELAY.as_secs());
    let start = Instant::now();

    tokio::time::sleep(SIMULATION_DELAY).await;

    let elapsed_ms = start.elapsed().as_millis() as u64;
    tracing::info!("Simulated evaluation complete in {} ms", elapsed_ms);
    SimulationStatus::Completed { elapsed_ms }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_simulation_waits_two_seconds() {
        let start = Instant::now();
        let status = run_simulation().await;
        assert!(status.is_completed());
        assert_eq!(start.elapsed(), SIMULATION_DELAY);
        assert_eq!(status, SimulationStatus::Completed { elapsed_ms: 2000 });
    }

    #[test]
    fn test_default_is_idle() {
        assert!(!SimulationStatus::default().is_completed());
    }
}
