//! # Playback
//!
//! Walks a dataset in order (periods, then scenes, then events), rebuilds the
//! ball map per scene and updates the running stats once per event. Each
//! event that carries player positions becomes a [`FrameView`] handed to a
//! [`FrameSink`], which is where drawing happens.
//!
//! A [`Playback`] is consumed by [`Playback::run`]: stats are accumulated
//! exactly once per dataset session.

use crate::ball::{reconstruct, BallPositionMap};
use crate::config::VizConfig;
use crate::dataset::{Event, MatchDataset};
use crate::error::PlaybackError;
use crate::geometry::Point;
use crate::stats::StreamingStats;

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, Copy)]
pub struct FrameView<'a> {
    pub period: usize,
    pub scene: usize,
    pub event: &'a Event,
    /// `None` when the ball can't be placed (outside the scene's anchors)
    pub ball: Option<Point>,
    /// Stats including this event
    pub stats: &'a StreamingStats,
}

/// Receives frames in stream order.
pub trait FrameSink {
    fn on_frame(&mut self, frame: &FrameView<'_>) -> Result<(), PlaybackError>;
}

impl<F> FrameSink for F
where
    F: FnMut(&FrameView<'_>) -> Result<(), PlaybackError>,
{
    fn on_frame(&mut self, frame: &FrameView<'_>) -> Result<(), PlaybackError> {
        self(frame)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlaybackSummary {
    pub scenes: usize,
    pub events: usize,
    pub frames: usize,
    pub frames_with_ball: usize,
}

/// Result of a finished playback.
#[derive(Debug, Clone)]
pub struct PlaybackOutcome {
    pub summary: PlaybackSummary,
    pub stats: StreamingStats,
}

pub struct Playback<'d> {
    dataset: &'d MatchDataset,
    config: VizConfig,
    stats: StreamingStats,
}

impl<'d> Playback<'d> {
    pub fn new(dataset: &'d MatchDataset, config: VizConfig) -> Self {
        let stats = StreamingStats::with_goal_threshold(&dataset.teams, config.goal_min_abs_x);
        Self { dataset, config, stats }
    }

    pub fn run<S: FrameSink + ?Sized>(self, sink: &mut S) -> Result<PlaybackOutcome, PlaybackError> {
        let Playback { dataset, config, mut stats } = self;
        dataset.validate()?;
        config.validate()?;
        let fps = config.effective_fps(dataset.fps);
        let mut summary = PlaybackSummary::default();

        for (period, scene_index, scene) in dataset.scenes() {
            let ball_map: BallPositionMap = reconstruct(scene).map_err(|source| {
                PlaybackError::Reconstruct { period, scene: scene_index, source }
            })?;
            summary.scenes += 1;

            for event in scene {
                stats
                    .update(event, fps)
                    .map_err(|source| PlaybackError::Stats { time: event.time, source })?;
                summary.events += 1;

                if !(event.has_players() || config.emit_all_events) {
                    continue;
                }
                let ball = ball_map.get(event.time);
                summary.frames += 1;
                if ball.is_some() {
                    summary.frames_with_ball += 1;
                }
                let view = FrameView { period, scene: scene_index, event, ball, stats: &stats };
                sink.on_frame(&view)?;
            }
        }

        log::info!(
            "Playback finished: {} scenes, {} events, {} frames ({} with ball)",
            summary.scenes,
            summary.events,
            summary.frames,
            summary.frames_with_ball
        );
        Ok(PlaybackOutcome { summary, stats })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::test_support::sample_dataset_json;
    use crate::config::ConfigError;
    use crate::error::{DatasetError, StatsError};
    use serde_json::json;

    fn sample() -> MatchDataset {
        serde_json::from_value(sample_dataset_json()).unwrap()
    }

    fn as_sink<F>(f: F) -> F
    where
        F: FnMut(&FrameView<'_>) -> Result<(), PlaybackError>,
    {
        f
    }

    #[test]
    fn test_runs_whole_dataset() {
        let dataset = sample();
        let mut seen: Vec<(usize, f64, Option<Point>)> = Vec::new();
        let mut sink = as_sink(|frame| {
            seen.push((frame.period, frame.event.time, frame.ball));
            Ok(())
        });

        let outcome = Playback::new(&dataset, VizConfig::default()).run(&mut sink).unwrap();

        assert_eq!(
            outcome.summary,
            PlaybackSummary { scenes: 3, events: 10, frames: 8, frames_with_ball: 7 }
        );
        assert_eq!(seen[0], (0, 0.0, Some(Point::new(0.0, 0.0))));
        assert_eq!(seen[1].2, Some(Point::new(5.0, 0.0)));
        // scene 2 starts with a frame before any anchor
        assert_eq!(seen[4], (0, 10.0, None));
        assert_eq!(seen[7], (1, 1.0, Some(Point::new(30.0, 0.0))));
        assert_eq!(outcome.stats.score.score_of("Reds"), 1);
        assert_eq!(outcome.stats.score.score_of("Blues"), 1);
    }

    #[test]
    fn test_frame_sees_stats_including_its_event() {
        let dataset = sample();
        let mut touches_at_first_frame = None;
        let mut sink = as_sink(|frame| {
            if touches_at_first_frame.is_none() {
                touches_at_first_frame = Some(frame.stats.touches.touches_of("Ana"));
            }
            Ok(())
        });
        Playback::new(&dataset, VizConfig::default()).run(&mut sink).unwrap();
        assert_eq!(touches_at_first_frame, Some(1));
    }

    #[test]
    fn test_emit_all_events() {
        let dataset = sample();
        let mut count = 0usize;
        let mut sink = as_sink(|_| {
            count += 1;
            Ok(())
        });
        let outcome = Playback::new(&dataset, VizConfig::debug()).run(&mut sink).unwrap();
        assert_eq!(count, 10);
        assert_eq!(outcome.summary.frames, 10);
    }

    #[test]
    fn test_sink_error_stops_playback() {
        let dataset = sample();
        let mut calls = 0;
        let mut sink = as_sink(|_| {
            calls += 1;
            if calls == 2 {
                return Err(PlaybackError::Sink("window closed".to_string()));
            }
            Ok(())
        });
        let err = Playback::new(&dataset, VizConfig::default()).run(&mut sink).unwrap_err();
        assert!(matches!(err, PlaybackError::Sink(_)));
        assert_eq!(calls, 2);
    }

    #[test]
    fn test_bad_goal_aborts_with_event_time() {
        let mut raw = sample_dataset_json();
        raw["periods"][0][0][4]["location"] = json!({"x": 10.0, "y": 0.0});
        let dataset: MatchDataset = serde_json::from_value(raw).unwrap();
        let mut sink = as_sink(|_| Ok(()));

        let err = Playback::new(&dataset, VizConfig::default()).run(&mut sink).unwrap_err();
        match err {
            PlaybackError::Stats { time, source: StatsError::InvalidGoalLocation { x, .. } } => {
                assert_eq!(time, 0.4);
                assert_eq!(x, 10.0);
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_unordered_scene_aborts() {
        let mut raw = sample_dataset_json();
        raw["periods"][1][0][1]["time"] = json!(-1.0);
        let dataset: MatchDataset = serde_json::from_value(raw).unwrap();
        let mut sink = as_sink(|_| Ok(()));

        let err = Playback::new(&dataset, VizConfig::default()).run(&mut sink).unwrap_err();
        assert!(matches!(err, PlaybackError::Reconstruct { period: 1, scene: 0, .. }));
    }

    #[test]
    fn test_fps_override_scales_distance() {
        let dataset = sample();
        let config = VizConfig { fps_override: Some(5.0), ..VizConfig::default() };
        let mut sink = as_sink(|_| Ok(()));
        let outcome = Playback::new(&dataset, config).run(&mut sink).unwrap();
        assert!((outcome.stats.running.distance_of("Ana") - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_fps_override_is_rejected() {
        let dataset = sample();
        let config = VizConfig { fps_override: Some(0.0), ..VizConfig::default() };
        let mut frames = 0;
        let mut sink = as_sink(|_| {
            frames += 1;
            Ok(())
        });
        let err = Playback::new(&dataset, config).run(&mut sink).unwrap_err();
        assert!(matches!(err, PlaybackError::Config(ConfigError::Invalid(_))), "{}", err);
        assert_eq!(frames, 0);
    }

    #[test]
    fn test_unvalidated_dataset_is_checked_before_playing() {
        let mut raw = sample_dataset_json();
        raw["fps"] = json!(0.0);
        // plain serde skips the loader's validation
        let dataset: MatchDataset = serde_json::from_value(raw).unwrap();
        let mut sink = as_sink(|_| Ok(()));

        let err = Playback::new(&dataset, VizConfig::default()).run(&mut sink).unwrap_err();
        assert!(matches!(err, PlaybackError::Dataset(DatasetError::InvalidFps(_))), "{}", err);
    }
}
