//! Match Viz CLI Library
//!
//! Text stand-ins for the frame renderer: one line per frame, and an
//! end-of-match summary with the final leaderboards.

use anyhow::{Context, Result};
use matchviz_core::dataset::{MatchDataset, Roster};
use matchviz_core::display::{ascii_name, period_label, MatchClock};
use matchviz_core::{FrameSink, FrameView, PlaybackError, PlaybackOutcome, VizConfig};
use serde_json::json;
use std::fmt::Write as _;
use std::io::Write;
use std::path::Path;

/// Load the dataset and the optional YAML config.
pub fn load_inputs(dataset: &Path, config: Option<&Path>) -> Result<(MatchDataset, VizConfig)> {
    let dataset = MatchDataset::load(dataset)
        .with_context(|| format!("Failed to load dataset: {}", dataset.display()))?;
    let config = match config {
        Some(path) => VizConfig::load(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => VizConfig::default(),
    };
    Ok((dataset, config))
}

/// One line of text per frame.
pub fn frame_line(frame: &FrameView<'_>, home: &str, away: &str) -> String {
    let period = period_label(frame.period).unwrap_or("Extra Period");
    let clock = MatchClock::from_seconds(frame.event.time);
    let score = frame.stats.score();
    let ball = match frame.ball {
        Some(pos) => {
            let g = pos.round();
            format!("ball ({}, {})", g.x, g.y)
        }
        None => "ball -".to_string(),
    };
    format!(
        "{}  {} | {} {} - {} {} | {} | {}",
        period,
        clock,
        home,
        score.get(home).copied().unwrap_or(0),
        score.get(away).copied().unwrap_or(0),
        away,
        frame.event.kind.label(),
        ball
    )
}

/// Writes every `every`-th frame as a text line.
pub struct TextSink<W: Write> {
    out: W,
    every: usize,
    seen: usize,
    home: String,
    away: String,
}

impl<W: Write> TextSink<W> {
    pub fn new(out: W, every: usize, dataset: &MatchDataset) -> Self {
        Self {
            out,
            every: every.max(1),
            seen: 0,
            home: dataset.teams.home.name.clone(),
            away: dataset.teams.away.name.clone(),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> FrameSink for TextSink<W> {
    fn on_frame(&mut self, frame: &FrameView<'_>) -> Result<(), PlaybackError> {
        self.seen += 1;
        if (self.seen - 1) % self.every != 0 {
            return Ok(());
        }
        let line = frame_line(frame, &self.home, &self.away);
        writeln!(self.out, "{}", line).map_err(|e| PlaybackError::Sink(e.to_string()))
    }
}

/// Sink that only counts frames; used by `summary`.
#[derive(Debug, Default)]
pub struct NullSink {
    pub frames: usize,
}

impl FrameSink for NullSink {
    fn on_frame(&mut self, _frame: &FrameView<'_>) -> Result<(), PlaybackError> {
        self.frames += 1;
        Ok(())
    }
}

/// Human-readable end-of-match report.
pub fn render_summary(dataset: &MatchDataset, outcome: &PlaybackOutcome, roster: &Roster) -> String {
    let stats = &outcome.stats;
    let summary = &outcome.summary;
    let home = &dataset.teams.home.name;
    let away = &dataset.teams.away.name;
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{} {} - {} {}",
        home,
        stats.score.score_of(home),
        stats.score.score_of(away),
        away
    );
    let _ = writeln!(
        out,
        "{} scenes, {} events, {} frames ({} with ball)",
        summary.scenes, summary.events, summary.frames, summary.frames_with_ball
    );

    let _ = writeln!(out, "\nDistance (meters)");
    for (player, dist) in stats.distance_leaderboard() {
        let meters = dataset.unit.to_meters(dist);
        let team = roster.team_of(player).unwrap_or("?");
        let _ = writeln!(out, "{:>6}m {} ({})", meters as i64, ascii_name(player), team);
    }

    let _ = writeln!(out, "\nTouches");
    for (player, touches) in stats.touch_leaderboard() {
        let team = roster.team_of(player).unwrap_or("?");
        let _ = writeln!(out, "{:>6} {} ({})", touches, ascii_name(player), team);
    }
    out
}

/// Machine-readable end-of-match report.
pub fn summary_json(dataset: &MatchDataset, outcome: &PlaybackOutcome) -> serde_json::Value {
    let stats = &outcome.stats;
    let distance_m: serde_json::Map<String, serde_json::Value> = stats
        .distance_leaderboard()
        .into_iter()
        .map(|(p, d)| (p.to_string(), json!(dataset.unit.to_meters(d))))
        .collect();
    json!({
        "score": stats.score(),
        "distance_m": distance_m,
        "touches": stats.touches_by_player(),
        "scenes": outcome.summary.scenes,
        "events": outcome.summary.events,
        "frames": outcome.summary.frames,
        "frames_with_ball": outcome.summary.frames_with_ball,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use matchviz_core::Playback;

    const DATASET: &str = r#"{
        "version": 0, "fps": 10.0, "unit": "METER",
        "stadium": {"field_height": 68.0, "field_width": 105.0},
        "teams": {
            "home": {"name": "Home", "players": {"José": {}}, "sides": ["LEFT", "RIGHT"]},
            "away": {"name": "Away", "players": {"Kim": {}}, "sides": ["RIGHT", "LEFT"]}
        },
        "periods": [
            [[
                {"time": 0.0, "period": 0, "type": "KICKOFF", "touch": "José",
                 "players": {"José": {"x": 0.0, "y": 0.0, "vx": 10.0, "vy": 0.0}}},
                {"time": 61.0, "period": 0, "type": "FRAME",
                 "players": {"José": {"x": 5.0, "y": 0.0, "vx": 10.0, "vy": 0.0}}},
                {"time": 62.0, "period": 0, "type": "GOAL", "location": {"x": 55.0, "y": 0.0}}
            ]],
            [[
                {"time": 0.0, "period": 1, "type": "FRAME",
                 "players": {"Kim": {"x": 1.0, "y": 1.0, "vx": 0.0, "vy": 0.0}}}
            ]]
        ]
    }"#;

    #[test]
    fn test_text_sink_lines() {
        let dataset = MatchDataset::from_json_str(DATASET).unwrap();
        let mut sink = TextSink::new(Vec::new(), 1, &dataset);
        Playback::new(&dataset, VizConfig::default()).run(&mut sink).unwrap();
        let text = String::from_utf8(sink.into_inner()).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "1st Half  0 : 0.00 | Home 0 - 0 Away | KICKOFF | ball (0, 0)");
        assert_eq!(lines[1], "1st Half  1 : 1.00 | Home 0 - 0 Away | FRAME | ball (54, 0)");
        assert_eq!(lines[2], "2nd Half  0 : 0.00 | Home 1 - 0 Away | FRAME | ball -");
    }

    #[test]
    fn test_text_sink_skips_frames() {
        let dataset = MatchDataset::from_json_str(DATASET).unwrap();
        let mut sink = TextSink::new(Vec::new(), 2, &dataset);
        Playback::new(&dataset, VizConfig::default()).run(&mut sink).unwrap();
        let text = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(text.lines().count(), 2);
    }

    #[test]
    fn test_summary_text() {
        let dataset = MatchDataset::from_json_str(DATASET).unwrap();
        let mut sink = NullSink::default();
        let outcome = Playback::new(&dataset, VizConfig::default()).run(&mut sink).unwrap();
        let roster = Roster::from_teams(&dataset.teams, "REFEREE");
        let text = render_summary(&dataset, &outcome, &roster);

        assert!(text.starts_with("Home 1 - 0 Away\n"));
        assert!(text.contains("2m Jose (Home)"), "{}", text);
        assert!(text.contains("1 Jose (Home)"), "{}", text);
        assert_eq!(sink.frames, 3);
    }

    #[test]
    fn test_summary_json() {
        let dataset = MatchDataset::from_json_str(DATASET).unwrap();
        let outcome =
            Playback::new(&dataset, VizConfig::default()).run(&mut NullSink::default()).unwrap();
        let value = summary_json(&dataset, &outcome);
        assert_eq!(value["score"]["Home"], 1);
        assert_eq!(value["touches"]["José"], 1);
        assert_eq!(value["frames_with_ball"], 2);
    }
}
