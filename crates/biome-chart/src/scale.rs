//! Continuous linear scales with d3-compatible ticks and tick labels.

const E10: f64 = 7.0710678118654755; // √50
const E5: f64 = 3.1622776601683795; // √10
const E2: f64 = std::f64::consts::SQRT_2;

/// Linear map from a numeric domain interval onto a pixel range interval.
///
/// Values outside the domain extrapolate; nothing is clamped.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LinearScale {
    domain: [f32; 2],
    range: [f32; 2],
}

impl LinearScale {
    pub const fn new(domain: [f32; 2], range: [f32; 2]) -> Self {
        Self { domain, range }
    }

    #[inline]
    pub fn domain(&self) -> [f32; 2] {
        self.domain
    }

    #[inline]
    pub fn range(&self) -> [f32; 2] {
        self.range
    }

    /// Domain value → range value. A zero-width domain maps to the range midpoint.
    pub fn map(&self, value: f32) -> f32 {
        lerp_between(self.domain, self.range, value)
    }

    /// Range value → domain value. A zero-width range maps to the domain midpoint.
    pub fn invert(&self, value: f32) -> f32 {
        lerp_between(self.range, self.domain, value)
    }

    /// Roughly `count` human-friendly values inside the domain.
    pub fn ticks(&self, count: usize) -> Vec<f32> {
        ticks(self.domain[0] as f64, self.domain[1] as f64, count as f64)
            .into_iter()
            .map(|t| t as f32)
            .collect()
    }

    /// Formatter for the values returned by [`ticks`](Self::ticks) with the same `count`.
    pub fn tick_format(&self, count: usize) -> TickFormat {
        let step = tick_step(self.domain[0] as f64, self.domain[1] as f64, count as f64);
        TickFormat::for_step(step)
    }
}

fn lerp_between(from: [f32; 2], to: [f32; 2], value: f32) -> f32 {
    let [a, b] = from;
    let [c, d] = to;
    let span = b - a;
    if span == 0.0 || !span.is_finite() {
        return (c + d) * 0.5;
    }
    c + (value - a) / span * (d - c)
}

/// Integer tick bounds and increment. A negative increment means "divide by
/// `-inc`", which keeps sub-unit steps exact.
fn tick_spec(start: f64, stop: f64, count: f64) -> (f64, f64, f64) {
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

    let (mut i1, mut i2, inc);
    if power < 0.0 {
        let pos = 10f64.powf(-power) / factor;
        i1 = (start * pos).round();
        i2 = (stop * pos).round();
        if i1 / pos < start {
            i1 += 1.0;
        }
        if i2 / pos > stop {
            i2 -= 1.0;
        }
        inc = -pos;
    } else {
        inc = 10f64.powf(power) * factor;
        i1 = (start / inc).round();
        i2 = (stop / inc).round();
        if i1 * inc < start {
            i1 += 1.0;
        }
        if i2 * inc > stop {
            i2 -= 1.0;
        }
    }

    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }
    (i1, i2, inc)
}

fn ticks(start: f64, stop: f64, count: f64) -> Vec<f64> {
    if !(count > 0.0) || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }

    let reverse = stop < start;
    let (i1, i2, inc) = if reverse {
        tick_spec(stop, start, count)
    } else {
        tick_spec(start, stop, count)
    };
    if !(i2 >= i1) {
        return Vec::new();
    }

    let n = (i2 - i1) as usize + 1;
    let value = |i: f64| if inc < 0.0 { i / -inc } else { i * inc };
    (0..n)
        .map(|i| {
            let i = i as f64;
            if reverse { value(i2 - i) } else { value(i1 + i) }
        })
        .collect()
}

fn tick_step(start: f64, stop: f64, count: f64) -> f64 {
    let reverse = stop < start;
    let (_, _, inc) = if reverse {
        tick_spec(stop, start, count)
    } else {
        tick_spec(start, stop, count)
    };
    let step = if inc < 0.0 { 1.0 / -inc } else { inc };
    if reverse { -step } else { step }
}

/// Fixed-precision number format with `,` thousands grouping.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct TickFormat {
    decimals: usize,
}

impl TickFormat {
    pub const fn new(decimals: usize) -> Self {
        Self { decimals }
    }

    /// Just enough decimals to tell apart values `step` apart.
    pub fn for_step(step: f64) -> Self {
        let step = step.abs();
        if step == 0.0 || !step.is_finite() {
            return Self::new(0);
        }
        let exponent = step.log10().floor();
        Self::new((-exponent).max(0.0) as usize)
    }

    pub fn decimals(&self) -> usize {
        self.decimals
    }

    pub fn format(&self, value: f32) -> String {
        let value = value as f64;
        let digits = format!("{:.*}", self.decimals, value.abs());
        let negative = value < 0.0 && digits.bytes().any(|b| b.is_ascii_digit() && b != b'0');

        let (int_part, frac_part) = match digits.split_once('.') {
            Some((i, f)) => (i, Some(f)),
            None => (digits.as_str(), None),
        };

        let mut out = String::with_capacity(digits.len() + int_part.len() / 3 + 1);
        if negative {
            out.push('\u{2212}');
        }
        for (i, ch) in int_part.chars().enumerate() {
            if i > 0 && (int_part.len() - i) % 3 == 0 {
                out.push(',');
            }
            out.push(ch);
        }
        if let Some(frac) = frac_part {
            out.push('.');
            out.push_str(frac);
        }
        out
    }
}
