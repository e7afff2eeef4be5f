//! Closed-form projection of the number of wins needed.
//!
//! Every winning trial multiplies the balance by `m = 1 + risk * ratio`, so
//! after `n` wins the balance is `start * m^n`. The smallest `n` with
//! `start * m^n >= target` is `ceil(ln(target / start) / ln(m))`.

use crate::params::SimulationParameters;

/// Wins needed to reach the target ignoring the trial cap.
///
/// Returns `None` when the balance cannot grow (`m <= 1`) or the inputs are
/// not finite. A target at or below the start still needs one trial, since
/// the simulator checks the target only after a trial completes.
pub fn projected_trials(params: &SimulationParameters) -> Option<u32> {
    let multiplier = params.growth_multiplier();
    if !multiplier.is_finite() || multiplier <= 1.0 || params.starting_balance <= 0.0 {
        return None;
    }

    let ratio = params.target_balance / params.starting_balance;
    if !ratio.is_finite() {
        return None;
    }
    if ratio <= 1.0 {
        return Some(1);
    }

    let estimate = (ratio.ln() / multiplier.ln()).ceil().max(1.0);
    if estimate > u32::MAX as f64 {
        return None;
    }

    // The logarithms can land one step off when the target sits on an exact
    // power of the multiplier; settle it against the compounded balance.
    let mut n = estimate as u32;
    if n > 1 && balance_after(params, n - 1) >= params.target_balance {
        n -= 1;
    } else if balance_after(params, n) < params.target_balance {
        n += 1;
    }
    Some(n)
}

/// Whether the trial cap ends the simulation before the target is reached.
pub fn cap_binds(params: &SimulationParameters) -> bool {
    projected_trials(params).map_or(true, |n| n > params.max_trials)
}

fn balance_after(params: &SimulationParameters, trials: u32) -> f64 {
    params.starting_balance * params.growth_multiplier().powf(trials as f64)
}
