// ---------------------------------------------------------------------------
// Ordinal band scale
// ---------------------------------------------------------------------------

/// Evenly spaced bands over an ordinal domain, mapped onto a pixel range.
#[derive(Debug, Clone)]
pub struct BandScale<T> {
    domain: Vec<T>,
    range: (f32, f32),
}

impl<T: PartialEq> BandScale<T> {
    pub fn new(domain: Vec<T>, range: (f32, f32)) -> Self {
        BandScale { domain, range }
    }

    pub fn domain(&self) -> &[T] {
        &self.domain
    }

    /// Width of one band. Zero for an empty domain.
    pub fn bandwidth(&self) -> f32 {
        if self.domain.is_empty() {
            0.0
        } else {
            (self.range.1 - self.range.0) / self.domain.len() as f32
        }
    }

    /// Left edge of the band for `value`, `None` if outside the domain.
    pub fn position(&self, value: &T) -> Option<f32> {
        let index = self.domain.iter().position(|v| v == value)?;
        Some(self.range.0 + index as f32 * self.bandwidth())
    }
}

// ---------------------------------------------------------------------------
// Linear scale
// ---------------------------------------------------------------------------

/// Linear mapping from a numeric domain onto a pixel range.
#[derive(Debug, Clone)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f32, f32),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f32, f32)) -> Self {
        LinearScale { domain, range }
    }

    /// Map a domain value to pixels. A zero-span domain maps everything to
    /// the range start.
    pub fn scale(&self, value: f64) -> f32 {
        let span = self.domain.1 - self.domain.0;
        if span == 0.0 {
            return self.range.0;
        }
        let t = (value - self.domain.0) / span;
        self.range.0 + t as f32 * (self.range.1 - self.range.0)
    }
}

// ---------------------------------------------------------------------------
// Threshold scale
// ---------------------------------------------------------------------------

/// Piecewise-constant mapping: `cuts.len() + 1` buckets separated by sorted
/// interior cut points. A value equal to a cut falls into the bucket on the
/// right; values outside the domain take the outer buckets.
#[derive(Debug, Clone)]
pub struct ThresholdScale {
    cuts: Vec<f64>,
}

impl ThresholdScale {
    /// Cut `[min, max]` into `count` equal-width buckets: `count - 1`
    /// interior boundaries. Degenerate input (`max <= min` or `count < 2`)
    /// yields no cuts, i.e. a single bucket.
    pub fn uniform(min: f64, max: f64, count: usize) -> Self {
        let mut cuts = Vec::new();
        if count > 1 && max > min {
            let step = (max - min) / count as f64;
            for i in 1..count {
                cuts.push(min + i as f64 * step);
            }
        }
        ThresholdScale { cuts }
    }

    /// Interior cut points, ascending.
    pub fn cuts(&self) -> &[f64] {
        &self.cuts
    }

    /// Bucket index for a value, in `0..=cuts.len()`. Monotonic in `value`.
    pub fn bucket(&self, value: f64) -> usize {
        self.cuts.partition_point(|cut| *cut <= value)
    }

    /// Extent `[lo, hi)` of a bucket; the outer edges are open (`None`).
    pub fn extent(&self, bucket: usize) -> (Option<f64>, Option<f64>) {
        let lo = bucket.checked_sub(1).and_then(|i| self.cuts.get(i)).copied();
        let hi = self.cuts.get(bucket).copied();
        (lo, hi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_scale_positions_and_bandwidth() {
        let scale = BandScale::new(vec![2000, 2001, 2002, 2003], (0.0, 40.0));
        assert_eq!(scale.bandwidth(), 10.0);
        assert_eq!(scale.position(&2000), Some(0.0));
        assert_eq!(scale.position(&2002), Some(20.0));
        assert_eq!(scale.position(&1999), None);
    }

    #[test]
    fn empty_band_scale_is_degenerate() {
        let scale: BandScale<i32> = BandScale::new(Vec::new(), (0.0, 100.0));
        assert_eq!(scale.bandwidth(), 0.0);
        assert_eq!(scale.position(&2000), None);
    }

    #[test]
    fn linear_scale_maps_endpoints_and_midpoint() {
        let scale = LinearScale::new((2.0, 12.0), (0.0, 400.0));
        assert_eq!(scale.scale(2.0), 0.0);
        assert_eq!(scale.scale(12.0), 400.0);
        assert_eq!(scale.scale(7.0), 200.0);
    }

    #[test]
    fn linear_scale_zero_span_maps_to_range_start() {
        let scale = LinearScale::new((5.0, 5.0), (0.0, 400.0));
        assert_eq!(scale.scale(5.0), 0.0);
        assert_eq!(scale.scale(9.0), 0.0);
    }

    #[test]
    fn uniform_thresholds_are_evenly_spaced() {
        let scale = ThresholdScale::uniform(0.0, 11.0, 11);
        assert_eq!(scale.cuts().len(), 10);
        for (i, cut) in scale.cuts().iter().enumerate() {
            assert!((cut - (i + 1) as f64).abs() < 1e-9);
        }
    }

    #[test]
    fn bucket_assignment_is_monotonic() {
        let scale = ThresholdScale::uniform(1.7, 13.9, 11);
        let mut last = 0;
        for i in 0..=200 {
            let v = 1.0 + i as f64 * 0.07;
            let bucket = scale.bucket(v);
            assert!(bucket >= last);
            last = bucket;
        }
        assert_eq!(scale.bucket(0.0), 0);
        assert_eq!(scale.bucket(100.0), 10);
    }

    #[test]
    fn value_on_a_cut_falls_to_the_right() {
        let scale = ThresholdScale::uniform(0.0, 10.0, 2);
        assert_eq!(scale.cuts(), &[5.0]);
        assert_eq!(scale.bucket(4.999), 0);
        assert_eq!(scale.bucket(5.0), 1);
    }

    #[test]
    fn degenerate_domain_has_a_single_bucket() {
        let scale = ThresholdScale::uniform(5.0, 5.0, 11);
        assert!(scale.cuts().is_empty());
        assert_eq!(scale.bucket(-1.0), 0);
        assert_eq!(scale.bucket(99.0), 0);
    }

    #[test]
    fn extents_reconstruct_the_buckets() {
        let scale = ThresholdScale::uniform(0.0, 10.0, 2);
        assert_eq!(scale.extent(0), (None, Some(5.0)));
        assert_eq!(scale.extent(1), (Some(5.0), None));
    }
}
