//! Population history and the downsample → smooth pipeline behind the graph.
//!
//! One raw sample per species is recorded each tick. Before drawing, each
//! line is block-averaged into buckets and then run through a trailing
//! moving average, which turns the noisy per-tick counts into readable
//! curves.

use crate::particle::{Population, Species};
use std::collections::VecDeque;

/// Settings for the graph pipeline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GraphConfig {
    /// Raw samples kept per line; the oldest are dropped past this.
    pub history_length: usize,
    /// Raw samples averaged into one graph point.
    pub bucket: usize,
    /// Trailing moving-average window, in graph points.
    pub window: usize,
    /// Largest count any single line can start at.
    pub theoretical_max: usize,
}

impl GraphConfig {
    /// Fewest points the x axis is laid out for.
    pub fn min_points(&self) -> usize {
        self.history_length / self.bucket.max(1)
    }
}

/// Rolling per-species counts.
#[derive(Clone, Debug, Default)]
pub struct PopulationHistory {
    a: VecDeque<f32>,
    b: VecDeque<f32>,
    ab: VecDeque<f32>,
    capacity: usize,
    max_observed: usize,
}

impl PopulationHistory {
    /// Empty history holding at most `capacity` samples per line.
    pub fn new(capacity: usize) -> Self {
        Self {
            a: VecDeque::with_capacity(capacity),
            b: VecDeque::with_capacity(capacity),
            ab: VecDeque::with_capacity(capacity),
            capacity,
            max_observed: 0,
        }
    }

    /// Append one sample to every line.
    pub fn record(&mut self, population: Population) {
        for (line, count) in [
            (&mut self.a, population.a),
            (&mut self.b, population.b),
            (&mut self.ab, population.ab),
        ] {
            if self.capacity > 0 && line.len() == self.capacity {
                line.pop_front();
            }
            line.push_back(count as f32);
        }

        self.max_observed = self
            .max_observed
            .max(population.a)
            .max(population.b)
            .max(population.ab);
    }

    /// Raw samples for one species, oldest first.
    pub fn samples(&self, species: Species) -> &VecDeque<f32> {
        match species {
            Species::A => &self.a,
            Species::B => &self.b,
            Species::AB => &self.ab,
        }
    }

    /// Number of samples per line.
    pub fn len(&self) -> usize {
        self.a.len()
    }

    pub fn is_empty(&self) -> bool {
        self.a.is_empty()
    }

    /// Highest count seen on any line since the last clear, including
    /// samples that have since scrolled out.
    pub fn max_observed(&self) -> usize {
        self.max_observed
    }

    pub fn clear(&mut self) {
        self.a.clear();
        self.b.clear();
        self.ab.clear();
        self.max_observed = 0;
    }

    /// Run the full pipeline for all three lines.
    pub fn graph_series(&self, config: &GraphConfig) -> GraphSeries {
        let line = |samples: &VecDeque<f32>| {
            let (front, back) = samples.as_slices();
            let raw: Vec<f32> = front.iter().chain(back).copied().collect();
            smooth(&downsample(&raw, config.bucket), config.window)
        };

        GraphSeries {
            a: line(&self.a),
            b: line(&self.b),
            ab: line(&self.ab),
            max_value: config.theoretical_max.max(self.max_observed) as f32,
            min_points: config.min_points(),
        }
    }
}

/// Block-average `samples` into chunks of `bucket`. A trailing partial chunk
/// is averaged over its own length.
pub fn downsample(samples: &[f32], bucket: usize) -> Vec<f32> {
    samples
        .chunks(bucket.max(1))
        .map(|chunk| chunk.iter().sum::<f32>() / chunk.len() as f32)
        .collect()
}

/// Trailing moving average over `window` points. The first `window - 1`
/// outputs average everything from the start up to the current point.
pub fn smooth(points: &[f32], window: usize) -> Vec<f32> {
    let window = window.max(1);
    (0..points.len())
        .map(|i| {
            let start = (i + 1).saturating_sub(window);
            let slice = &points[start..=i];
            slice.iter().sum::<f32>() / slice.len() as f32
        })
        .collect()
}

/// Smoothed graph lines ready for drawing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GraphSeries {
    pub a: Vec<f32>,
    pub b: Vec<f32>,
    pub ab: Vec<f32>,
    /// Shared vertical scale: the larger of the theoretical maximum and the
    /// highest count ever recorded.
    pub max_value: f32,
    /// Fewest points the x axis is laid out for.
    pub min_points: usize,
}

impl GraphSeries {
    /// Line for one species.
    pub fn line(&self, species: Species) -> &[f32] {
        match species {
            Species::A => &self.a,
            Species::B => &self.b,
            Species::AB => &self.ab,
        }
    }

    /// Horizontal distance between consecutive points for a plot `width`
    /// wide.
    pub fn spacing(&self, width: f32) -> f32 {
        let points = self.a.len().max(self.b.len()).max(self.ab.len());
        let slots = points.max(self.min_points);
        if slots < 2 {
            return width;
        }
        width / (slots - 1) as f32
    }
}
