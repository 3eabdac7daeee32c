//! Bilinear upscaling of a coarse grid to full resolution.

/// Upscale a `low_w x low_h` row-major grid to `high_w x high_h`.
///
/// Each target cell maps to fractional source coordinates through the
/// scale factors `(low - 1) / (high - 1)` (zero when the target axis is a
/// single cell), then blends the four enclosing source cells with
/// standard bilinear weights. The upper source index is clamped to
/// `low - 1`, so the last source row and column are reproduced exactly
/// at the target edges.
///
/// # Panics
///
/// Panics if any dimension is zero or `low.len() != low_w * low_h`.
pub fn bilinear_upscale(
    low: &[f32],
    low_w: usize,
    low_h: usize,
    high_w: usize,
    high_h: usize,
) -> Vec<f32> {
    assert!(low_w > 0 && low_h > 0 && high_w > 0 && high_h > 0);
    assert_eq!(low.len(), low_w * low_h, "source length");

    let scale = |low: usize, high: usize| {
        if high > 1 {
            (low - 1) as f64 / (high - 1) as f64
        } else {
            0.0
        }
    };
    let scale_x = scale(low_w, high_w);
    let scale_y = scale(low_h, high_h);

    let mut out = Vec::with_capacity(high_w * high_h);
    for y in 0..high_h {
        let gy = y as f64 * scale_y;
        let gyi = (gy.floor() as usize).min(low_h - 1);
        let wy = gy - gyi as f64;
        let gyi1 = (gyi + 1).min(low_h - 1);

        for x in 0..high_w {
            let gx = x as f64 * scale_x;
            let gxi = (gx.floor() as usize).min(low_w - 1);
            let wx = gx - gxi as f64;
            let gxi1 = (gxi + 1).min(low_w - 1);

            let f00 = f64::from(low[gyi * low_w + gxi]);
            let f10 = f64::from(low[gyi * low_w + gxi1]);
            let f01 = f64::from(low[gyi1 * low_w + gxi]);
            let f11 = f64::from(low[gyi1 * low_w + gxi1]);

            let value = f00 * (1.0 - wx) * (1.0 - wy)
                + f10 * wx * (1.0 - wy)
                + f01 * (1.0 - wx) * wy
                + f11 * wx * wy;
            out.push(value as f32);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_are_preserved() {
        let low = [0.0, 1.0, 0.5, 0.25];
        let out = bilinear_upscale(&low, 2, 2, 5, 4);
        assert_eq!(out.len(), 20);
        assert_eq!(out[0], 0.0);
        assert_eq!(out[4], 1.0);
        assert_eq!(out[15], 0.5);
        assert_eq!(out[19], 0.25);
    }

    #[test]
    fn midpoint_is_the_average() {
        let low = [0.0, 1.0];
        let out = bilinear_upscale(&low, 2, 1, 3, 1);
        assert_eq!(out, vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn constant_source_stays_constant() {
        let low = vec![0.75f32; 9];
        let out = bilinear_upscale(&low, 3, 3, 17, 11);
        assert!(out.iter().all(|&v| (v - 0.75).abs() < 1e-6));
    }

    #[test]
    fn single_cell_source_fills_target() {
        let out = bilinear_upscale(&[1.0], 1, 1, 4, 3);
        assert_eq!(out, vec![1.0; 12]);
    }

    #[test]
    fn single_cell_target_takes_first_source_cell() {
        let out = bilinear_upscale(&[0.3, 0.9, 0.1, 0.2], 2, 2, 1, 1);
        assert_eq!(out, vec![0.3]);
    }

    #[test]
    fn values_stay_within_source_range() {
        let low = [0.0, 1.0, 1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0];
        let out = bilinear_upscale(&low, 3, 3, 32, 32);
        assert!(out.iter().all(|&v| (0.0..=1.0).contains(&v)));
    }
}
