// File: crates/plot-core/src/ticks.rs
// Summary: Round-valued tick generation and outward domain rounding
// (the 1-2-5 decade scheme linear chart axes conventionally use).

/// Tick count used when callers have no opinion.
pub const DEFAULT_TICK_COUNT: usize = 10;

const E10: f64 = 7.071_067_811_865_475_5; // sqrt(50)
const E5: f64 = 3.162_277_660_168_379_5; // sqrt(10)
const E2: f64 = 1.414_213_562_373_095_1; // sqrt(2)

/// Tick step for roughly `count` ticks across `[start, stop]`, snapped to
/// 1, 2, or 5 times a power of ten. Steps below 1 are returned as the
/// negated inverse (e.g. -10 means a step of 1/10) so integer arithmetic
/// stays exact for sub-unit steps.
pub fn tick_increment(start: f64, stop: f64, count: f64) -> f64 {
    let step = (stop - start) / count.max(0.0);
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };
    if power >= 0.0 {
        factor * 10f64.powf(power)
    } else {
        -(10f64.powf(-power)) / factor
    }
}

/// Round tick values covering `[start, stop]`, ascending. A degenerate
/// span yields the single shared value.
pub fn ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }
    let reverse = stop < start;
    let (lo, hi) = if reverse { (stop, start) } else { (start, stop) };

    let step = tick_increment(lo, hi, count as f64);
    if step == 0.0 || !step.is_finite() {
        return Vec::new();
    }

    let mut out: Vec<f64> = if step > 0.0 {
        let i0 = (lo / step).ceil() as i64;
        let i1 = (hi / step).floor() as i64;
        (i0..=i1).map(|i| i as f64 * step).collect()
    } else {
        let inv = -step;
        let i0 = (lo * inv).ceil() as i64;
        let i1 = (hi * inv).floor() as i64;
        (i0..=i1).map(|i| i as f64 / inv).collect()
    };
    if reverse {
        out.reverse();
    }
    out
}

/// Round `[start, stop]` outward to tick-aligned bounds. Fixed point is
/// reached in a couple of passes; the cap guards pathological inputs.
pub fn nice_domain(mut start: f64, mut stop: f64, count: usize) -> (f64, f64) {
    if count == 0 || !start.is_finite() || !stop.is_finite() || start > stop {
        return (start, stop);
    }
    let mut prestep = 0.0f64;
    for _ in 0..10 {
        let step = tick_increment(start, stop, count as f64);
        if step == prestep || step == 0.0 || !step.is_finite() {
            break;
        }
        if step > 0.0 {
            start = (start / step).floor() * step;
            stop = (stop / step).ceil() * step;
        } else {
            start = (start * step).ceil() / step;
            stop = (stop * step).floor() / step;
        }
        prestep = step;
    }
    (start, stop)
}

/// Decimal places needed to print ticks generated at `step` without noise.
pub fn decimal_places(step: f64) -> usize {
    if !(step > 0.0) || !step.is_finite() {
        return 0;
    }
    (-(step.log10().floor())).max(0.0) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticks_land_on_round_values() {
        assert_eq!(ticks(0.0, 10.0, 10), vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0]);
        assert_eq!(ticks(0.0, 1.0, 5), vec![0.0, 0.2, 0.4, 0.6, 0.8, 1.0]);
    }

    #[test]
    fn ticks_cover_negative_spans() {
        let t = ticks(-6.28, 6.28, 10);
        assert_eq!(*t.first().unwrap(), -6.0);
        assert_eq!(*t.last().unwrap(), 6.0);
        assert!(t.contains(&0.0));
    }

    #[test]
    fn ticks_degenerate_and_empty() {
        assert_eq!(ticks(2.0, 2.0, 10), vec![2.0]);
        assert!(ticks(0.0, 1.0, 0).is_empty());
        assert!(ticks(f64::NAN, 1.0, 10).is_empty());
    }

    #[test]
    fn nice_rounds_outward() {
        assert_eq!(nice_domain(0.1, 9.9, 10), (0.0, 10.0));
        assert_eq!(nice_domain(-0.987, 0.991, 10), (-1.0, 1.0));
        assert_eq!(nice_domain(0.12, 0.87, 10), (0.1, 0.9));
    }

    #[test]
    fn nice_keeps_already_round_bounds() {
        assert_eq!(nice_domain(0.0, 10.0, 10), (0.0, 10.0));
        assert_eq!(nice_domain(-1.0, 1.0, 10), (-1.0, 1.0));
    }

    #[test]
    fn nice_passes_degenerate_through() {
        assert_eq!(nice_domain(2.0, 2.0, 10), (2.0, 2.0));
        let (a, b) = nice_domain(f64::NEG_INFINITY, 1.0, 10);
        assert!(a.is_infinite() && b == 1.0);
    }

    #[test]
    fn decimal_places_follow_step_size() {
        assert_eq!(decimal_places(1.0), 0);
        assert_eq!(decimal_places(2.0), 0);
        assert_eq!(decimal_places(0.5), 1);
        assert_eq!(decimal_places(0.05), 2);
        assert_eq!(decimal_places(0.0), 0);
    }
}
