use std::time::{Duration, Instant};

/// Per-process play statistics, kept in memory only
pub struct GameMetrics {
    pub elapsed_time: Duration,
    pub best_score: u32,
    pub games_played: u32,
    /// Play time banked before the last pause
    accumulated: Duration,
    /// Set while the round clock is ticking
    resumed_at: Option<Instant>,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            elapsed_time: Duration::ZERO,
            best_score: 0,
            games_played: 0,
            accumulated: Duration::ZERO,
            resumed_at: None,
        }
    }

    /// Refresh the round clock; frozen while paused and between rounds
    pub fn update(&mut self) {
        if let Some(resumed_at) = self.resumed_at {
            self.elapsed_time = self.accumulated + resumed_at.elapsed();
        }
    }

    pub fn on_game_start(&mut self) {
        self.accumulated = Duration::ZERO;
        self.elapsed_time = Duration::ZERO;
        self.resumed_at = Some(Instant::now());
    }

    pub fn on_pause(&mut self) {
        self.stop_clock();
    }

    pub fn on_resume(&mut self) {
        if self.resumed_at.is_none() {
            self.resumed_at = Some(Instant::now());
        }
    }

    pub fn on_game_over(&mut self, final_score: u32) {
        self.stop_clock();
        self.games_played += 1;
        if final_score > self.best_score {
            self.best_score = final_score;
        }
    }

    fn stop_clock(&mut self) {
        self.update();
        self.accumulated = self.elapsed_time;
        self.resumed_at = None;
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_formatting() {
        let mut metrics = GameMetrics::new();
        metrics.elapsed_time = Duration::from_secs(125);
        assert_eq!(metrics.format_time(), "02:05");

        metrics.elapsed_time = Duration::from_secs(0);
        assert_eq!(metrics.format_time(), "00:00");

        metrics.elapsed_time = Duration::from_secs(3661);
        assert_eq!(metrics.format_time(), "61:01");
    }

    #[test]
    fn test_best_score_tracking() {
        let mut metrics = GameMetrics::new();

        metrics.on_game_over(100);
        assert_eq!(metrics.best_score, 100);
        assert_eq!(metrics.games_played, 1);

        metrics.on_game_over(50);
        assert_eq!(metrics.best_score, 100); // Should not decrease
        assert_eq!(metrics.games_played, 2);

        metrics.on_game_over(150);
        assert_eq!(metrics.best_score, 150);
        assert_eq!(metrics.games_played, 3);
    }

    #[test]
    fn test_game_start_resets_time() {
        let mut metrics = GameMetrics::new();
        metrics.on_game_start();
        std::thread::sleep(Duration::from_millis(50));
        metrics.update();

        assert!(metrics.elapsed_time.as_millis() >= 50);

        metrics.on_game_start();
        metrics.update();
        assert!(metrics.elapsed_time.as_millis() < 50);
    }

    #[test]
    fn test_clock_frozen_after_game_over() {
        let mut metrics = GameMetrics::new();
        metrics.on_game_start();
        metrics.on_game_over(10);
        let frozen = metrics.elapsed_time;

        std::thread::sleep(Duration::from_millis(20));
        metrics.update();
        assert_eq!(metrics.elapsed_time, frozen);
    }

    #[test]
    fn test_clock_stops_while_paused() {
        let mut metrics = GameMetrics::new();
        metrics.on_game_start();
        std::thread::sleep(Duration::from_millis(20));
        metrics.on_pause();
        let at_pause = metrics.elapsed_time;
        assert!(at_pause.as_millis() >= 20);

        std::thread::sleep(Duration::from_millis(200));
        metrics.update();
        assert_eq!(metrics.elapsed_time, at_pause);

        metrics.on_resume();
        std::thread::sleep(Duration::from_millis(20));
        metrics.update();
        assert!(metrics.elapsed_time >= at_pause + Duration::from_millis(20));
        // The paused stretch is not counted
        assert!(metrics.elapsed_time < at_pause + Duration::from_millis(150));
    }

    #[test]
    fn test_game_over_while_paused_keeps_time() {
        let mut metrics = GameMetrics::new();
        metrics.on_game_start();
        std::thread::sleep(Duration::from_millis(10));
        metrics.on_pause();
        let at_pause = metrics.elapsed_time;

        metrics.on_game_over(30);
        assert_eq!(metrics.elapsed_time, at_pause);
        assert_eq!(metrics.best_score, 30);
    }
}
