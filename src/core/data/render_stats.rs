use std::fmt;

/// Derived throughput figures for display. Not authoritative for anything.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct RenderStats {
    pub avg_compute_ms: f64,
    pub compute_fps: f64,
    pub width: i32,
    pub height: i32,
    pub frames_computed_total: u64,
}

impl fmt::Display for RenderStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Compute: {:.1} fps | Avg: {:.2} ms | {}x{}px",
            self.compute_fps, self.avg_compute_ms, self.width, self.height
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_formats_hud_line() {
        let stats = RenderStats {
            avg_compute_ms: 12.5,
            compute_fps: 59.96,
            width: 800,
            height: 600,
            frames_computed_total: 42,
        };

        assert_eq!(
            stats.to_string(),
            "Compute: 60.0 fps | Avg: 12.50 ms | 800x600px"
        );
    }
}
