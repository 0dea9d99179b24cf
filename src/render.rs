//! Plain-text rendering of a `DisplayState`

use crate::engine::Contribution;
use crate::formatter::DisplayState;
use std::fmt::Write;

pub const DEFAULT_GAUGE_WIDTH: usize = 40;
pub const MIN_GAUGE_WIDTH: usize = 10;
pub const MAX_GAUGE_WIDTH: usize = 200;

const MARKER: char = '●';

#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    pub gauge_width: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            gauge_width: DEFAULT_GAUGE_WIDTH,
        }
    }
}

/// Bicolor scale: `=` for the TimescaleDB half, `-` for the ClickHouse half,
/// with the marker at `round(position * (width - 1))`
pub fn gauge_bar(position: f64, width: usize) -> String {
    let width = width.clamp(MIN_GAUGE_WIDTH, MAX_GAUGE_WIDTH);
    let last = width - 1;
    let marker = ((position.clamp(0.0, 1.0) * last as f64).round() as usize).min(last);

    (0..width)
        .map(|i| {
            if i == marker {
                MARKER
            } else if i < width / 2 {
                '='
            } else {
                '-'
            }
        })
        .collect()
}

fn scale_labels(width: usize) -> String {
    let width = width.clamp(MIN_GAUGE_WIDTH, MAX_GAUGE_WIDTH);
    let left = "TimescaleDB";
    let right = "ClickHouse";
    // +2 for the surrounding brackets of the bar
    let gap = (width + 2).saturating_sub(left.len() + right.len()).max(1);
    format!("{left}{}{right}", " ".repeat(gap))
}

/// Render the full result as terminal text
pub fn render_text(state: &DisplayState, options: &RenderOptions) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "✅ Recommended Database: {}", state.headline);
    let _ = writeln!(out);

    if let Some(gauge) = &state.gauge {
        let _ = writeln!(out, "Solution Analysis");
        let _ = writeln!(out, "Database Recommendation Scale");
        let _ = writeln!(
            out,
            "[{}]",
            gauge_bar(gauge.marker_position, options.gauge_width)
        );
        let _ = writeln!(out, "{}", scale_labels(options.gauge_width));
        if let Some(confidence) = &state.confidence {
            let _ = writeln!(
                out,
                "{} ({:.0}%)",
                confidence.tier.banner(),
                confidence.percent
            );
        }
        let _ = writeln!(out);
    }

    let advice = &state.advice;
    let _ = writeln!(out, "### {}", advice.why_heading);
    for point in &advice.rationale {
        let _ = writeln!(out, "  - {}: {}", point.title, point.detail);
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "### Best for:");
    for item in &advice.best_for {
        let _ = writeln!(out, "  - {item}");
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "### Next Steps:");
    for (i, step) in advice.next_steps.iter().enumerate() {
        let _ = writeln!(out, "  {}. {step}", i + 1);
    }

    out
}

/// Per-question score table
pub fn render_breakdown(contributions: &[Contribution]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Score breakdown (TimescaleDB / ClickHouse):");
    let (mut t, mut c) = (0, 0);
    for part in contributions {
        t += part.weight.timescaledb;
        c += part.weight.clickhouse;
        let _ = writeln!(
            out,
            "  {:<24} +{} / +{}  {}",
            part.question.heading(),
            part.weight.timescaledb,
            part.weight.clickhouse,
            part.answer
        );
    }
    let _ = writeln!(out, "  {:<24} {t} / {c}", "Total");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{breakdown, score};
    use crate::formatter::format;
    use crate::types::*;

    #[test]
    fn test_gauge_bar_marker_positions() {
        let left = gauge_bar(0.0, 10);
        assert_eq!(left.chars().count(), 10);
        assert_eq!(left.chars().next(), Some(MARKER));

        let right = gauge_bar(1.0, 10);
        assert_eq!(right.chars().last(), Some(MARKER));

        // 0.5 * 9 = 4.5 rounds to 5
        let mid: Vec<char> = gauge_bar(0.5, 10).chars().collect();
        assert_eq!(mid[5], MARKER);
        assert_eq!(mid[0], '=');
        assert_eq!(mid[9], '-');
    }

    #[test]
    fn test_gauge_width_is_clamped() {
        assert_eq!(gauge_bar(0.3, 2).chars().count(), MIN_GAUGE_WIDTH);
        assert_eq!(gauge_bar(0.3, 1000).chars().count(), MAX_GAUGE_WIDTH);
    }

    #[test]
    fn test_render_text_sections() {
        let state = format(ScorePair::new(0, 12));
        let text = render_text(&state, &RenderOptions::default());
        assert!(text.contains("Recommended Database: ClickHouse"));
        assert!(text.contains("Solution Analysis"));
        assert!(text.contains("High Confidence Recommendation (100%)"));
        assert!(text.contains("### Why ClickHouse?"));
        assert!(text.contains("  - Columnar Storage: Optimized for analytical queries"));
        assert!(text.contains("  3. Configure data partitioning and replication"));
    }

    #[test]
    fn test_render_text_without_gauge() {
        let state = format(ScorePair::new(0, 0));
        let text = render_text(&state, &RenderOptions::default());
        assert!(!text.contains("Solution Analysis"));
        assert!(!text.contains("Confidence"));
        assert!(text.contains("### Why ClickHouse?"));
    }

    #[test]
    fn test_render_breakdown_totals() {
        let answers = Answers::new(
            DataVolume::OneToTenGb,
            QueryPattern::Mixed,
            RealtimeNeed::Important,
            DataRetention::OneToThreeYears,
            TeamExpertise::GeneralSql,
        );
        let scores = score(&answers);
        let text = render_breakdown(&breakdown(&answers));
        assert!(text.contains("Query Patterns"));
        assert!(text.contains(&format!(
            "{} / {}",
            scores.timescaledb_score, scores.clickhouse_score
        )));
    }
}
