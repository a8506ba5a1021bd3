//! Progress reporting for long-running operations.

/// Receives progress updates as a fraction in the range 0 to 1, along with a
/// short description of the current step.
///
pub trait ProgressObserver {
  fn on_progress(&mut self, fraction: f64, message: &str);
}

impl<F: FnMut(f64, &str)> ProgressObserver for F {
  fn on_progress(&mut self, fraction: f64, message: &str) {
    self(fraction, message)
  }
}

/// A progress observer that ignores all updates.
///
#[derive(Clone, Copy, Debug, Default)]
pub struct NoProgress;

impl ProgressObserver for NoProgress {
  fn on_progress(&mut self, _fraction: f64, _message: &str) {}
}

/// Maps progress of one stage onto a sub-range of an overall operation, e.g.
/// anonymization reporting in `[0, 0.5]` when an archive export follows it.
///
pub struct ScaledProgress<'a> {
  inner: &'a mut dyn ProgressObserver,
  start: f64,
  end: f64,
}

impl<'a> ScaledProgress<'a> {
  pub fn new(
    inner: &'a mut dyn ProgressObserver,
    start: f64,
    end: f64,
  ) -> Self {
    Self { inner, start, end }
  }
}

impl ProgressObserver for ScaledProgress<'_> {
  fn on_progress(&mut self, fraction: f64, message: &str) {
    let fraction = fraction.clamp(0.0, 1.0);

    self
      .inner
      .on_progress(self.start + (self.end - self.start) * fraction, message);
  }
}

/// Converts a count of completed units of work into a fraction that never
/// decreases and never exceeds 1.
///
#[derive(Clone, Debug)]
pub(crate) struct ProgressCounter {
  completed: usize,
  total: usize,
  last_fraction: f64,
}

impl ProgressCounter {
  pub fn new(total: usize) -> Self {
    Self {
      completed: 0,
      total,
      last_fraction: 0.0,
    }
  }

  /// Records completed units of work and returns the new fraction.
  ///
  pub fn advance(&mut self, count: usize) -> f64 {
    self.completed = self.completed.saturating_add(count);

    let fraction = if self.total == 0 {
      1.0
    } else {
      (self.completed as f64 / self.total as f64).min(1.0)
    };

    self.last_fraction = self.last_fraction.max(fraction);
    self.last_fraction
  }
}
