//! Move pipeline
//!
//! The one shared derivation every consumer calls: detection, span
//! enrichment and statistics over the same `(series, threshold)` pair.

use crux_core::{Analysis, Series, Threshold};
use crux_ports::{ConfigResult, MoveAnalyzer};

use crate::config::DetectionConfig;
use crate::detector::MoveDetector;
use crate::spans::SpanEnricher;
use crate::stats::StatsAggregator;

#[derive(Debug, Clone, Copy)]
pub struct MovePipeline {
    config: DetectionConfig,
    detector: MoveDetector,
    spans: SpanEnricher,
    stats: StatsAggregator,
}

impl MovePipeline {
    /// Build a pipeline after validating `config`
    pub fn new(config: DetectionConfig) -> ConfigResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            detector: MoveDetector::new(config),
            spans: SpanEnricher::new(),
            stats: StatsAggregator::new(),
        })
    }

    pub fn config(&self) -> &DetectionConfig {
        &self.config
    }

    pub fn detector(&self) -> &MoveDetector {
        &self.detector
    }

    pub fn analyze(&self, series: &Series, threshold: Threshold) -> Analysis {
        let moves = self.detector.detect(series, threshold);
        let spans = self.spans.enrich(series, &moves);
        let stats = self.stats.summarize(series, &moves);
        Analysis {
            threshold,
            moves,
            spans,
            stats,
        }
    }
}

impl Default for MovePipeline {
    fn default() -> Self {
        let config = DetectionConfig::default();
        Self {
            config,
            detector: MoveDetector::new(config),
            spans: SpanEnricher::new(),
            stats: StatsAggregator::new(),
        }
    }
}

impl MoveAnalyzer for MovePipeline {
    fn analyze(&self, series: &Series, threshold: Threshold) -> Analysis {
        MovePipeline::analyze(self, series, threshold)
    }

    fn name(&self) -> &str {
        "MovePipeline"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crux_ports::ConfigError;

    #[test]
    fn test_analysis_is_consistent() {
        let series = Series::new(
            vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0],
            vec![9.8, 10.0, 25.0, 9.0, 30.0, 9.0],
        )
        .unwrap();
        let threshold = Threshold::new(15.0).unwrap();
        let analysis = MovePipeline::default().analyze(&series, threshold);

        assert_eq!(analysis.threshold, threshold);
        assert_eq!(analysis.stats.move_count, analysis.moves.len());
        assert_eq!(analysis.spans.len(), analysis.moves.len() - 1);
    }

    #[test]
    fn test_rejects_invalid_config() {
        let config = DetectionConfig::default().with_normalization_divisor(-1.0);
        assert!(matches!(
            MovePipeline::new(config),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_chart_pipeline_differs_only_in_dynamics() {
        let series = Series::new(vec![0.0, 1.0, 2.0], vec![9.0, 15.0, 9.0]).unwrap();
        let viz = MovePipeline::new(DetectionConfig::visualizer()).unwrap();
        let chart = MovePipeline::new(DetectionConfig::chart()).unwrap();

        let a = viz.analyze(&series, Threshold::DEFAULT);
        let b = chart.analyze(&series, Threshold::DEFAULT);

        assert_eq!(a.moves.len(), b.moves.len());
        assert_eq!(a.moves.detected()[0].time, b.moves.detected()[0].time);
        assert_eq!(a.moves.detected()[0].dynamics.value(), 0.75);
        assert_eq!(b.moves.detected()[0].dynamics.value(), 0.5);
        assert_eq!(a.stats, b.stats);
    }

    #[test]
    fn test_usable_as_port() {
        let analyzer: Box<dyn MoveAnalyzer> = Box::new(MovePipeline::default());
        let analysis = analyzer.analyze(&Series::default(), Threshold::DEFAULT);
        assert_eq!(analysis.moves.len(), 1);
        assert_eq!(analyzer.name(), "MovePipeline");
    }
}
