//! Band and linear scales used by both rendering surfaces.

/// `[min, max]` of the values, or `None` for an empty input. NaN values are
/// ignored.
pub fn extent<I>(values: I) -> Option<[f64; 2]>
where
    I: IntoIterator<Item = f64>,
{
    values
        .into_iter()
        .filter(|v| !v.is_nan())
        .fold(None, |acc, v| match acc {
            None => Some([v, v]),
            Some([lo, hi]) => Some([lo.min(v), hi.max(v)]),
        })
}

/// Maps an ordered set of discrete values onto contiguous, equal-width bands
/// with no padding. A reversed range (`r0 > r1`) reverses the band order.
#[derive(Debug, Clone, PartialEq)]
pub struct BandScale<T> {
    domain: Vec<T>,
    range: [f64; 2],
}

impl<T: PartialEq> BandScale<T> {
    pub const fn new(domain: Vec<T>, range: [f64; 2]) -> Self {
        Self { domain, range }
    }

    pub fn domain(&self) -> &[T] {
        &self.domain
    }

    pub const fn range(&self) -> [f64; 2] {
        self.range
    }

    pub fn step(&self) -> f64 {
        if self.domain.is_empty() {
            return 0.0;
        }
        (self.range[1] - self.range[0]).abs() / self.domain.len() as f64
    }

    pub fn bandwidth(&self) -> f64 {
        self.step()
    }

    /// Start of the band at `index` in domain order.
    pub fn position_at(&self, index: usize) -> Option<f64> {
        let len = self.domain.len();
        if index >= len {
            return None;
        }
        let start = self.range[0].min(self.range[1]);
        let slot = if self.range[1] < self.range[0] {
            len - 1 - index
        } else {
            index
        };
        Some(self.step().mul_add(slot as f64, start))
    }

    /// Start of the band holding `value`, or `None` if it is not in the domain.
    pub fn position(&self, value: &T) -> Option<f64> {
        self.domain
            .iter()
            .position(|d| d == value)
            .and_then(|index| self.position_at(index))
    }

    /// Center of the band holding `value`, where axis ticks are drawn.
    pub fn center(&self, value: &T) -> Option<f64> {
        self.position(value).map(|p| p + self.bandwidth() / 2.0)
    }
}

/// Affine map from a continuous domain to a continuous range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    pub domain: [f64; 2],
    pub range: [f64; 2],
}

impl LinearScale {
    pub const fn new(domain: [f64; 2], range: [f64; 2]) -> Self {
        Self { domain, range }
    }

    pub fn scale(&self, value: f64) -> f64 {
        let [d0, d1] = self.domain;
        let [r0, r1] = self.range;
        r0 + (value - d0) * (r1 - r0) / (d1 - d0)
    }

    /// Round tick values covering the domain, roughly `count` of them, with
    /// steps of 1, 2 or 5 times a power of ten.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let [d0, d1] = self.domain;
        let (start, stop, reverse) = if d1 < d0 { (d1, d0, true) } else { (d0, d1, false) };
        if !(start.is_finite() && stop.is_finite()) || count == 0 {
            return Vec::new();
        }
        if (stop - start).abs() < f64::EPSILON {
            return vec![start];
        }

        let Some(spec) = TickSpec::new(start, stop, count as f64) else {
            return Vec::new();
        };
        let mut ticks = spec.values();
        if reverse {
            ticks.reverse();
        }
        ticks
    }

    /// Step between consecutive ticks for the same `count`.
    pub fn tick_step(&self, count: usize) -> f64 {
        let [d0, d1] = self.domain;
        let (start, stop) = if d1 < d0 { (d1, d0) } else { (d0, d1) };
        TickSpec::new(start, stop, count as f64).map_or(0.0, |spec| spec.step())
    }
}

/// Label for a tick value at the precision implied by the tick step.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn format_tick(value: f64, step: f64) -> String {
    let decimals = if step > 0.0 && step.is_finite() {
        (-step.log10().floor()).max(0.0) as usize
    } else {
        0
    };
    format!("{value:.decimals$}")
}

#[derive(Debug, Clone, Copy)]
struct TickSpec {
    first: i64,
    last: i64,
    /// Negative values are inverse steps, kept that way to avoid
    /// accumulating rounding error on fractional steps.
    increment: f64,
}

impl TickSpec {
    const E10: f64 = 7.071_067_811_865_476; // sqrt(50)
    const E5: f64 = 3.162_277_660_168_379_5; // sqrt(10)
    const E2: f64 = std::f64::consts::SQRT_2;

    #[allow(clippy::cast_possible_truncation)]
    fn new(start: f64, stop: f64, count: f64) -> Option<Self> {
        let step = (stop - start) / count.max(0.0);
        if !step.is_finite() || step <= 0.0 {
            return None;
        }
        let power = step.log10().floor();
        let error = step / 10f64.powf(power);
        let factor = if error >= Self::E10 {
            10.0
        } else if error >= Self::E5 {
            5.0
        } else if error >= Self::E2 {
            2.0
        } else {
            1.0
        };

        let (first, last, increment) = if power < 0.0 {
            let inc = 10f64.powf(-power) / factor;
            let mut first = (start * inc).round();
            let mut last = (stop * inc).round();
            if first / inc < start {
                first += 1.0;
            }
            if last / inc > stop {
                last -= 1.0;
            }
            (first, last, -inc)
        } else {
            let inc = 10f64.powf(power) * factor;
            let mut first = (start / inc).round();
            let mut last = (stop / inc).round();
            if first * inc < start {
                first += 1.0;
            }
            if last * inc > stop {
                last -= 1.0;
            }
            (first, last, inc)
        };

        if last < first && (0.5..2.0).contains(&count) {
            return Self::new(start, stop, count * 2.0);
        }

        Some(Self {
            first: first as i64,
            last: last as i64,
            increment,
        })
    }

    fn step(self) -> f64 {
        if self.increment < 0.0 {
            -1.0 / self.increment
        } else {
            self.increment
        }
    }

    fn values(self) -> Vec<f64> {
        (self.first..=self.last)
            .map(|i| {
                if self.increment < 0.0 {
                    i as f64 / -self.increment
                } else {
                    i as f64 * self.increment
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        let diff = (actual - expected).abs();
        assert!(
            diff < 1e-9,
            "expected {expected}, got {actual} (diff {diff})"
        );
    }

    #[test]
    fn extent_ignores_nan_and_handles_empty() {
        assert_eq!(extent([3.0, f64::NAN, -1.0, 7.5]), Some([-1.0, 7.5]));
        assert_eq!(extent(Vec::<f64>::new()), None);
    }

    #[test]
    fn band_scale_splits_range_evenly() {
        let scale = BandScale::new(vec![1, 2, 3, 4], [0.0, 100.0]);
        assert_close(scale.bandwidth(), 25.0);
        assert_eq!(scale.position(&1), Some(0.0));
        assert_eq!(scale.position(&3), Some(50.0));
        assert_eq!(scale.center(&4), Some(87.5));
        assert_eq!(scale.position(&9), None);
    }

    #[test]
    fn reversed_band_scale_places_first_value_last() {
        let scale = BandScale::new(vec!["a", "b", "c"], [30.0, 0.0]);
        assert_eq!(scale.position(&"a"), Some(20.0));
        assert_eq!(scale.position(&"c"), Some(0.0));
        assert_close(scale.bandwidth(), 10.0);
    }

    #[test]
    fn empty_band_scale_has_no_positions() {
        let scale: BandScale<i32> = BandScale::new(Vec::new(), [0.0, 10.0]);
        assert_close(scale.bandwidth(), 0.0);
        assert_eq!(scale.position_at(0), None);
    }

    #[test]
    fn linear_scale_maps_affinely() {
        let scale = LinearScale::new([1.0, 14.0], [0.0, 260.0]);
        assert_close(scale.scale(1.0), 0.0);
        assert_close(scale.scale(14.0), 260.0);
        assert_close(scale.scale(7.5), 130.0);
    }

    #[test]
    fn integer_domain_gets_unit_ticks() {
        let scale = LinearScale::new([1.0, 14.0], [0.0, 250.0]);
        let ticks = scale.ticks(10);
        assert_eq!(ticks, (1..=14).map(f64::from).collect::<Vec<_>>());
        assert_close(scale.tick_step(10), 1.0);
    }

    #[test]
    fn wide_domain_gets_coarser_ticks() {
        let scale = LinearScale::new([0.0, 100.0], [0.0, 1.0]);
        assert_eq!(
            scale.ticks(10),
            vec![0.0, 10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0, 90.0, 100.0]
        );
        let scale = LinearScale::new([3.0, 42.0], [0.0, 1.0]);
        assert_eq!(
            scale.ticks(10),
            vec![5.0, 10.0, 15.0, 20.0, 25.0, 30.0, 35.0, 40.0]
        );
    }

    #[test]
    fn fractional_ticks_are_formatted_to_step_precision() {
        let scale = LinearScale::new([0.0, 1.0], [0.0, 1.0]);
        let ticks = scale.ticks(5);
        assert_eq!(ticks, vec![0.0, 0.2, 0.4, 0.6, 0.8, 1.0]);
        let step = scale.tick_step(5);
        assert_eq!(format_tick(ticks[1], step), "0.2");
        assert_eq!(format_tick(12.0, 1.0), "12");
    }
}
