//! Kernel density estimation and tick generation for the violin plot.

/// Epanechnikov kernel with bandwidth `h`: `0.75 (1 - u²) / h` for `|u| <= 1`.
pub fn epanechnikov(bandwidth: f64, offset: f64) -> f64 {
    let u = offset / bandwidth;
    if u.abs() <= 1.0 {
        0.75 * (1.0 - u * u) / bandwidth
    } else {
        0.0
    }
}

/// Density of `samples` at every point of `at`, as `[x, density]` pairs.
pub fn kde(bandwidth: f64, at: &[f64], samples: &[f64]) -> Vec<[f64; 2]> {
    at.iter()
        .map(|&x| {
            let density = if samples.is_empty() {
                0.0
            } else {
                samples.iter().map(|&v| epanechnikov(bandwidth, x - v)).sum::<f64>()
                    / samples.len() as f64
            };
            [x, density]
        })
        .collect()
}

/// Evenly spaced "nice" values (1, 2 or 5 times a power of ten) covering
/// `[start, stop]`, roughly `count` of them.
pub fn nice_ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }

    let (lo, hi, reversed) = if stop < start {
        (stop, start, true)
    } else {
        (start, stop, false)
    };

    let Some((i1, i2, inc)) = tick_spec(lo, hi, count as f64) else {
        return Vec::new();
    };
    if i2 < i1 {
        return Vec::new();
    }

    let mut ticks: Vec<f64> = (0..=(i2 - i1) as i64)
        .map(|i| {
            let n = i1 + i as f64;
            if inc < 0.0 {
                n / -inc
            } else {
                n * inc
            }
        })
        .collect();

    if reversed {
        ticks.reverse();
    }
    ticks
}

/// Returns the integer tick range and the increment. A negative increment
/// means "divide by its magnitude", which keeps small steps exact.
fn tick_spec(start: f64, stop: f64, count: f64) -> Option<(f64, f64, f64)> {
    let e10 = 50f64.sqrt();
    let e5 = 10f64.sqrt();
    let e2 = 2f64.sqrt();

    let step = (stop - start) / count.max(0.0);
    if !step.is_finite() || step <= 0.0 {
        return None;
    }
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= e10 {
        10.0
    } else if error >= e5 {
        5.0
    } else if error >= e2 {
        2.0
    } else {
        1.0
    };

    let (i1, i2, inc) = if power < 0.0 {
        let scale = 10f64.powf(-power) / factor;
        let mut i1 = (start * scale).round();
        let mut i2 = (stop * scale).round();
        if i1 / scale < start {
            i1 += 1.0;
        }
        if i2 / scale > stop {
            i2 -= 1.0;
        }
        (i1, i2, -scale)
    } else {
        let step = 10f64.powf(power) * factor;
        let mut i1 = (start / step).round();
        let mut i2 = (stop / step).round();
        if i1 * step < start {
            i1 += 1.0;
        }
        if i2 * step > stop {
            i2 -= 1.0;
        }
        (i1, i2, step)
    };

    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }
    Some((i1, i2, inc))
}
