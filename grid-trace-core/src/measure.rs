use std::{
    fmt,
    time::{Duration, Instant},
};

/// A step of the word search.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Phase {
    /// Discard and orient the dictionary words.
    Prefilter,
    /// Build the pattern tree.
    BuildTree,
    /// Walk the board.
    FindWords,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Prefilter => "prefilter",
            Self::BuildTree => "build_tree",
            Self::FindWords => "find_words",
        };
        f.write_str(name)
    }
}

/// Receive the time spent in every phase of a search.
pub trait Measure {
    fn record(&mut self, phase: Phase, elapsed: Duration);
}

/// Ignore all measurements.
#[derive(Debug, Copy, Clone, Default)]
pub struct NoMeasure;

impl Measure for NoMeasure {
    fn record(&mut self, _phase: Phase, _elapsed: Duration) {}
}

impl<F: FnMut(Phase, Duration)> Measure for F {
    fn record(&mut self, phase: Phase, elapsed: Duration) {
        self(phase, elapsed)
    }
}

/// Accumulate the time spent per phase, in the order phases were first seen.
#[derive(Debug, Clone, Default)]
pub struct Timings {
    entries: Vec<(Phase, Duration)>,
}

impl Timings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the total time recorded for a phase.
    pub fn get(&self, phase: Phase) -> Option<Duration> {
        self.entries
            .iter()
            .find(|(p, _)| *p == phase)
            .map(|&(_, elapsed)| elapsed)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Phase, Duration)> + '_ {
        self.entries.iter().copied()
    }

    pub fn total(&self) -> Duration {
        self.entries.iter().map(|&(_, elapsed)| elapsed).sum()
    }
}

impl Measure for Timings {
    fn record(&mut self, phase: Phase, elapsed: Duration) {
        match self.entries.iter_mut().find(|(p, _)| *p == phase) {
            Some((_, total)) => *total += elapsed,
            None => self.entries.push((phase, elapsed)),
        }
    }
}

/// One line per phase: `<phase> elapsed time: <ms>ms`.
impl fmt::Display for Timings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (phase, elapsed) in self.iter() {
            writeln!(f, "{} elapsed time: {}ms", phase, elapsed.as_millis())?;
        }
        Ok(())
    }
}

/// Run `f` and record its duration under `phase`.
pub(crate) fn timed<T>(measure: &mut dyn Measure, phase: Phase, f: impl FnOnce() -> T) -> T {
    let start = Instant::now();
    let res = f();
    measure.record(phase, start.elapsed());
    res
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timings_accumulate_per_phase() {
        let mut timings = Timings::new();
        timings.record(Phase::BuildTree, Duration::from_millis(3));
        timings.record(Phase::FindWords, Duration::from_millis(5));
        timings.record(Phase::BuildTree, Duration::from_millis(4));

        assert_eq!(timings.get(Phase::BuildTree), Some(Duration::from_millis(7)));
        assert_eq!(timings.get(Phase::Prefilter), None);
        assert_eq!(timings.total(), Duration::from_millis(12));
        assert_eq!(
            timings.to_string(),
            "build_tree elapsed time: 7ms\nfind_words elapsed time: 5ms\n"
        );
    }

    #[test]
    fn closures_are_measures() {
        let mut phases = Vec::new();
        let mut collect = |phase: Phase, _: Duration| phases.push(phase);
        let value = timed(&mut collect, Phase::Prefilter, || 42);
        assert_eq!(value, 42);
        assert_eq!(phases, vec![Phase::Prefilter]);
    }
}
