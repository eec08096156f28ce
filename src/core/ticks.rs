//! Round-number tick generation for linear axes.
//!
//! Steps are powers of ten times 1, 2 or 5, chosen so that roughly `count`
//! ticks cover the requested interval. Tick values are computed from integer
//! multiples of the increment so that `0.3` prints as `0.3` rather than
//! `0.30000000000000004`.

const E10: f64 = 7.071_067_811_865_476; // sqrt(50)
const E5: f64 = 3.162_277_660_168_379_5; // sqrt(10)
const E2: f64 = std::f64::consts::SQRT_2;

/// Hard cap against pathological intervals producing millions of ticks.
const MAX_TICKS: i64 = 10_000;

#[derive(Debug, Clone, Copy, PartialEq)]
struct TickPlan {
    first: i64,
    last: i64,
    /// Positive: tick = index * increment. Negative: tick = index / -increment.
    increment: f64,
}

fn tick_plan(start: f64, stop: f64, count: f64) -> Option<TickPlan> {
    let step = (stop - start) / count.max(0.0);
    if !step.is_finite() || step <= 0.0 {
        return None;
    }
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

    let (first, mut last, increment) = if power < 0.0 {
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

    if !first.is_finite() || !last.is_finite() {
        return None;
    }
    if last < first && (0.5..2.0).contains(&count) {
        return tick_plan(start, stop, count * 2.0);
    }
    if last - first > MAX_TICKS as f64 {
        last = first + MAX_TICKS as f64;
    }

    Some(TickPlan {
        first: first as i64,
        last: last as i64,
        increment,
    })
}

/// Returns round tick values inside `[start, stop]`, ordered like the input.
#[must_use]
pub fn ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }

    let reverse = stop < start;
    let (lo, hi) = if reverse { (stop, start) } else { (start, stop) };
    let Some(plan) = tick_plan(lo, hi, count as f64) else {
        return Vec::new();
    };
    if plan.last < plan.first {
        return Vec::new();
    }

    let value = |index: i64| {
        if plan.increment < 0.0 {
            index as f64 / -plan.increment
        } else {
            index as f64 * plan.increment
        }
    };

    let mut out: Vec<f64> = (plan.first..=plan.last).map(value).collect();
    if reverse {
        out.reverse();
    }
    out
}

/// Signed distance between adjacent ticks for the same arguments as [`ticks`].
///
/// Returns `0.0` when no ticks can be produced.
#[must_use]
pub fn tick_step(start: f64, stop: f64, count: usize) -> f64 {
    if count == 0 || !start.is_finite() || !stop.is_finite() || start == stop {
        return 0.0;
    }
    let reverse = stop < start;
    let (lo, hi) = if reverse { (stop, start) } else { (start, stop) };
    let Some(plan) = tick_plan(lo, hi, count as f64) else {
        return 0.0;
    };
    let magnitude = if plan.increment < 0.0 {
        1.0 / -plan.increment
    } else {
        plan.increment
    };
    if reverse { -magnitude } else { magnitude }
}

/// Formats a tick value with just enough decimals for the given step.
#[must_use]
pub fn format_tick(value: f64, step: f64) -> String {
    let decimals = if step.is_finite() && step > 0.0 && step < 1.0 {
        (-step.log10().floor()) as usize
    } else {
        0
    };
    let text = format!("{value:.decimals$}");
    // "-0" and "-0.0" read badly on an axis.
    if text.trim_start_matches('-').chars().all(|c| c == '0' || c == '.') {
        text.trim_start_matches('-').to_owned()
    } else {
        text
    }
}
