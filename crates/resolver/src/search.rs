//! Scenario search.
//!
//! Enumerates admissible (entry, exit) pairs from the observed series,
//! sweeps integer leverage to approximate the requested target percentage,
//! and falls back to the largest-movement pair when nothing lands inside the
//! tolerance window. Enumeration runs in index order and selection sorts
//! stably, so identical inputs always produce the identical scenario.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use scenario_domain::{InvalidInput, PricePoint, ResolveError, ScenarioRequest, ScenarioResult};
use tracing::debug;

use crate::config::SearchConfig;
use crate::settlement::settle;
use crate::strategy::PairRule;

/// An admissible pair that survived the movement floor.
#[derive(Debug, Clone, Copy)]
struct SurvivingPair {
    entry_price: Decimal,
    exit_price: Decimal,
    natural_movement: Decimal,
}

/// One `(pair, leverage)` combination inside the tolerance window.
#[derive(Debug, Clone, Copy)]
struct Candidate {
    pair: SurvivingPair,
    leverage: u32,
    result_magnitude: Decimal,
    target_diff: Decimal,
}

/// Resolves a scenario with the default [`SearchConfig`].
pub fn resolve(
    series: &[PricePoint],
    request: &ScenarioRequest,
) -> Result<ScenarioResult, ResolveError> {
    resolve_with(series, request, &SearchConfig::default())
}

/// Resolves a scenario: finds the (entry, exit, leverage) triple whose
/// leveraged return best approximates `request.target_percent`, and settles
/// it against `request.principal`.
///
/// # Errors
///
/// [`ResolveError::InvalidInput`] when a precondition is violated (series
/// too short or too long, unordered timestamps, non-positive price,
/// principal, or target); [`ResolveError::NotResolvable`] when no pair of
/// observations is consistent with the requested direction and mode.
pub fn resolve_with(
    series: &[PricePoint],
    request: &ScenarioRequest,
    config: &SearchConfig,
) -> Result<ScenarioResult, ResolveError> {
    validate(series, request, config)?;

    let rule = PairRule::for_request(request.direction, request.mode);
    let pairs = enumerate_pairs(series, rule, config);
    if pairs.is_empty() {
        debug!(
            direction = %request.direction,
            mode = %request.mode,
            points = series.len(),
            "no admissible pair at or above the movement floor"
        );
        return Err(ResolveError::NotResolvable {
            direction: request.direction,
            mode: request.mode,
        });
    }

    let candidates = sweep_leverage(&pairs, request.target_percent, config);
    debug!(
        pairs = pairs.len(),
        candidates = candidates.len(),
        target = %request.target_percent,
        "scenario search enumerated"
    );

    let (pair, leverage, result_magnitude) = match select(candidates) {
        Some(chosen) => (chosen.pair, chosen.leverage, chosen.result_magnitude),
        None => {
            let (pair, leverage, magnitude) =
                best_effort_fallback(&pairs, request.target_percent, config);
            debug!(
                movement = %pair.natural_movement,
                leverage,
                magnitude = %magnitude,
                "no candidate within tolerance, using largest-movement fallback"
            );
            (pair, leverage, magnitude)
        }
    };

    let result_percent = rule.signed(result_magnitude);
    let settlement = settle(request.principal, result_percent);

    Ok(ScenarioResult {
        direction: request.direction,
        mode: request.mode,
        entry_price: pair.entry_price,
        exit_price: pair.exit_price,
        leverage,
        natural_movement_percent: pair.natural_movement,
        result_percent,
        profit_amount: settlement.profit_amount,
        final_balance: settlement.final_balance,
        window_start: series[0].timestamp,
        window_end: series[series.len() - 1].timestamp,
        points_considered: series.len(),
    })
}

fn validate(
    series: &[PricePoint],
    request: &ScenarioRequest,
    config: &SearchConfig,
) -> Result<(), InvalidInput> {
    if series.len() < 2 {
        return Err(InvalidInput::SeriesTooShort { len: series.len() });
    }
    if series.len() > config.max_series_len {
        return Err(InvalidInput::SeriesTooLong {
            len: series.len(),
            max: config.max_series_len,
        });
    }
    for (index, point) in series.iter().enumerate() {
        if point.price <= Decimal::ZERO {
            return Err(InvalidInput::NonPositivePrice { index });
        }
        // Two observations at one instant would make entry/exit provenance
        // ambiguous, so "ascending" is enforced strictly.
        if index > 0 && point.timestamp <= series[index - 1].timestamp {
            return Err(InvalidInput::UnorderedSeries { index });
        }
    }
    if request.principal <= Decimal::ZERO {
        return Err(InvalidInput::NonPositivePrincipal);
    }
    if request.target_percent <= Decimal::ZERO {
        return Err(InvalidInput::NonPositiveTarget);
    }
    Ok(())
}

/// Step 1: every `i < j` pair admitted by the rule, with movement at or
/// above the floor, in index order.
fn enumerate_pairs(
    series: &[PricePoint],
    rule: PairRule,
    config: &SearchConfig,
) -> Vec<SurvivingPair> {
    let mut pairs = Vec::new();
    for i in 0..series.len() {
        for j in (i + 1)..series.len() {
            let entry_price = series[i].price;
            let exit_price = series[j].price;
            if !rule.accepts(entry_price, exit_price) {
                continue;
            }
            let natural_movement = rule.natural_movement(entry_price, exit_price);
            if natural_movement < config.min_movement_percent {
                continue;
            }
            pairs.push(SurvivingPair {
                entry_price,
                exit_price,
                natural_movement,
            });
        }
    }
    pairs
}

/// Step 2: every `(pair, leverage)` whose magnitude lands inside the
/// tolerance window around the target.
fn sweep_leverage(
    pairs: &[SurvivingPair],
    target_percent: Decimal,
    config: &SearchConfig,
) -> Vec<Candidate> {
    let mut candidates = Vec::new();
    for &pair in pairs {
        for leverage in 1..=config.max_leverage {
            let result_magnitude = pair.natural_movement * Decimal::from(leverage);
            let target_diff = (result_magnitude - target_percent).abs();
            if target_diff <= config.tolerance {
                candidates.push(Candidate {
                    pair,
                    leverage,
                    result_magnitude,
                    target_diff,
                });
            }
        }
    }
    candidates
}

/// Step 3: closest match wins; ties break toward the lowest leverage. The
/// sort is stable, so remaining ties keep enumeration order.
fn select(mut candidates: Vec<Candidate>) -> Option<Candidate> {
    candidates.sort_by(|a, b| {
        a.target_diff
            .cmp(&b.target_diff)
            .then(a.leverage.cmp(&b.leverage))
    });
    candidates.into_iter().next()
}

/// Step 4: largest-movement pair with just enough leverage to reach the
/// target, clamped to the leverage ceiling. Overshoot is accepted; this is a
/// deliberate relaxation, not an error.
fn best_effort_fallback(
    pairs: &[SurvivingPair],
    target_percent: Decimal,
    config: &SearchConfig,
) -> (SurvivingPair, u32, Decimal) {
    let mut best = pairs[0];
    for &pair in &pairs[1..] {
        if pair.natural_movement > best.natural_movement {
            best = pair;
        }
    }

    let leverage = (target_percent / best.natural_movement)
        .ceil()
        .to_u32()
        .unwrap_or(config.max_leverage)
        .clamp(1, config.max_leverage);
    let magnitude = best.natural_movement * Decimal::from(leverage);
    (best, leverage, magnitude)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use rust_decimal_macros::dec;
    use scenario_domain::{Direction, Mode};

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap()
    }

    fn series(prices: &[Decimal]) -> Vec<PricePoint> {
        prices
            .iter()
            .enumerate()
            .map(|(i, &p)| PricePoint::new(start() + Duration::minutes(i as i64), p))
            .collect()
    }

    fn request(direction: Direction, mode: Mode, target: Decimal, principal: Decimal) -> ScenarioRequest {
        ScenarioRequest::new(direction, mode, target, principal)
    }

    #[test]
    fn test_long_profit_exact_target_beats_nearer_pairs() {
        // Valid Long/Profit pairs: 100->101 (1%), 100->103 (3%),
        // 99->103 (~4.04%), 101->103 (~1.98%). Leveraging 100->101 twice
        // hits 2% exactly and must win over every non-zero diff.
        let s = series(&[dec!(100), dec!(101), dec!(99), dec!(103)]);
        let req = request(Direction::Long, Mode::Profit, dec!(2.0), dec!(1000));

        let result = resolve(&s, &req).unwrap();
        assert_eq!(result.entry_price, dec!(100));
        assert_eq!(result.exit_price, dec!(101));
        assert_eq!(result.leverage, 2);
        assert_eq!(result.natural_movement_percent, dec!(1));
        assert_eq!(result.result_percent, dec!(2.0));
        assert_eq!(result.profit_amount, dec!(20));
        assert_eq!(result.final_balance, dec!(1020));
        assert_eq!(result.window_start, s[0].timestamp);
        assert_eq!(result.window_end, s[3].timestamp);
        assert_eq!(result.points_considered, 4);
    }

    #[test]
    fn test_movement_floor_rejects_hairline_series() {
        // ~0.001% movement is below the 0.01% floor for every pair, so the
        // search has nothing to work with, fallback included.
        let s = series(&[dec!(100), dec!(100.001)]);
        let req = request(Direction::Long, Mode::Profit, dec!(2.0), dec!(1000));

        let err = resolve(&s, &req).unwrap_err();
        assert_eq!(
            err,
            ResolveError::NotResolvable {
                direction: Direction::Long,
                mode: Mode::Profit,
            }
        );
    }

    #[test]
    fn test_movement_at_floor_is_kept() {
        // Exactly 0.01% movement survives; 100x leverage lands on the
        // target inside the sweep itself.
        let s = series(&[dec!(100), dec!(100.01)]);
        let req = request(Direction::Long, Mode::Profit, dec!(1.0), dec!(1000));

        let result = resolve(&s, &req).unwrap();
        assert_eq!(result.leverage, 100);
        assert_eq!(result.natural_movement_percent, dec!(0.01));
        assert_eq!(result.result_percent, dec!(1.00));
    }

    #[test]
    fn test_short_loss_fallback_overshoots_target() {
        // 95 -> 105 moves (105 - 95) / 95 * 100 ~= 10.53%, already past the
        // 5% target at leverage 1, so no candidate is inside the tolerance
        // window and the fallback accepts the overshoot.
        let s = series(&[dec!(95), dec!(105)]);
        let req = request(Direction::Short, Mode::Loss, dec!(5.0), dec!(200));

        let result = resolve(&s, &req).unwrap();
        assert_eq!(result.entry_price, dec!(95));
        assert_eq!(result.exit_price, dec!(105));
        assert_eq!(result.leverage, 1);
        assert!(result.result_percent < dec!(-10.52) && result.result_percent > dec!(-10.53));
        assert!(result.profit_amount < dec!(-21.05) && result.profit_amount > dec!(-21.06));
        assert!(result.final_balance > dec!(178.94) && result.final_balance < dec!(178.95));
    }

    #[test]
    fn test_short_loss_prefers_in_tolerance_pair_over_fallback() {
        // With 100 prepended, the pair 100 -> 105 moves exactly 5% and sits
        // inside the tolerance window at leverage 1, so the fallback never
        // activates.
        let s = series(&[dec!(100), dec!(95), dec!(105)]);
        let req = request(Direction::Short, Mode::Loss, dec!(5.0), dec!(200));

        let result = resolve(&s, &req).unwrap();
        assert_eq!(result.entry_price, dec!(100));
        assert_eq!(result.exit_price, dec!(105));
        assert_eq!(result.leverage, 1);
        assert_eq!(result.result_percent, dec!(-5));
        assert_eq!(result.profit_amount, dec!(-10.00));
        assert_eq!(result.final_balance, dec!(190.00));
    }

    #[test]
    fn test_flat_series_not_resolvable_for_every_axis() {
        let s = series(&[dec!(100), dec!(100), dec!(100), dec!(100)]);
        for direction in [Direction::Long, Direction::Short] {
            for mode in [Mode::Profit, Mode::Loss] {
                let req = request(direction, mode, dec!(2.0), dec!(1000));
                let err = resolve(&s, &req).unwrap_err();
                assert_eq!(err, ResolveError::NotResolvable { direction, mode });
            }
        }
    }

    #[test]
    fn test_sign_invariant_per_mode() {
        let s = series(&[dec!(100), dec!(103), dec!(98), dec!(104)]);
        for direction in [Direction::Long, Direction::Short] {
            for mode in [Mode::Profit, Mode::Loss] {
                let req = request(direction, mode, dec!(3.0), dec!(500));
                let result = resolve(&s, &req).unwrap();
                match mode {
                    Mode::Profit => assert!(result.result_percent >= Decimal::ZERO),
                    Mode::Loss => assert!(result.result_percent <= Decimal::ZERO),
                }
            }
        }
    }

    #[test]
    fn test_settlement_identity_holds_for_returned_results() {
        let s = series(&[dec!(100), dec!(103), dec!(98), dec!(104)]);
        let req = request(Direction::Long, Mode::Loss, dec!(4.0), dec!(750));

        let result = resolve(&s, &req).unwrap();
        assert_eq!(
            result.profit_amount,
            req.principal * result.result_percent / Decimal::ONE_HUNDRED
        );
        assert_eq!(result.final_balance, req.principal + result.profit_amount);
    }

    #[test]
    fn test_leverage_stays_within_bounds() {
        let s = series(&[dec!(100), dec!(101), dec!(99), dec!(103)]);
        for target in [dec!(0.5), dec!(2.0), dec!(50), dec!(400)] {
            let req = request(Direction::Long, Mode::Profit, target, dec!(1000));
            let result = resolve(&s, &req).unwrap();
            assert!((1..=100).contains(&result.leverage), "target {target}");
        }
    }

    #[test]
    fn test_fallback_leverage_clamps_at_ceiling() {
        // 0.02% natural movement against a 500% target wants leverage
        // 25000; the fallback clamps to 100 and accepts the shortfall.
        let s = series(&[dec!(100), dec!(100.02)]);
        let req = request(Direction::Long, Mode::Profit, dec!(500), dec!(1000));

        let result = resolve(&s, &req).unwrap();
        assert_eq!(result.leverage, 100);
        assert_eq!(result.result_percent, dec!(2.00));
    }

    #[test]
    fn test_equal_diff_ties_break_toward_lowest_leverage() {
        // 100 -> 102 at leverage 1 and 100 -> 101 at leverage 2 both hit
        // the 2% target exactly; the lower leverage must win.
        let s = series(&[dec!(100), dec!(101), dec!(102)]);
        let req = request(Direction::Long, Mode::Profit, dec!(2.0), dec!(1000));

        let result = resolve(&s, &req).unwrap();
        assert_eq!(result.leverage, 1);
        assert_eq!(result.entry_price, dec!(100));
        assert_eq!(result.exit_price, dec!(102));
    }

    #[test]
    fn test_determinism_on_identical_input() {
        let s = series(&[dec!(100), dec!(101.7), dec!(99.2), dec!(103.4), dec!(101.1)]);
        let req = request(Direction::Short, Mode::Profit, dec!(2.5), dec!(1234));

        let first = resolve(&s, &req).unwrap();
        let second = resolve(&s, &req).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_series_too_short() {
        let s = series(&[dec!(100)]);
        let req = request(Direction::Long, Mode::Profit, dec!(2.0), dec!(1000));
        let err = resolve(&s, &req).unwrap_err();
        assert_eq!(
            err,
            ResolveError::InvalidInput(InvalidInput::SeriesTooShort { len: 1 })
        );
    }

    #[test]
    fn test_series_over_cap_is_invalid_input() {
        let prices: Vec<Decimal> = (0..5).map(|i| Decimal::from(100 + i)).collect();
        let s = series(&prices);
        let cfg = SearchConfig::default().with_max_series_len(4);
        let req = request(Direction::Long, Mode::Profit, dec!(2.0), dec!(1000));

        let err = resolve_with(&s, &req, &cfg).unwrap_err();
        assert_eq!(
            err,
            ResolveError::InvalidInput(InvalidInput::SeriesTooLong { len: 5, max: 4 })
        );
    }

    #[test]
    fn test_unordered_and_duplicate_timestamps_rejected() {
        let mut s = series(&[dec!(100), dec!(101), dec!(102)]);
        s[2].timestamp = s[1].timestamp;
        let req = request(Direction::Long, Mode::Profit, dec!(2.0), dec!(1000));

        let err = resolve(&s, &req).unwrap_err();
        assert_eq!(
            err,
            ResolveError::InvalidInput(InvalidInput::UnorderedSeries { index: 2 })
        );
    }

    #[test]
    fn test_non_positive_values_rejected() {
        let s = series(&[dec!(100), dec!(0), dec!(102)]);
        let req = request(Direction::Long, Mode::Profit, dec!(2.0), dec!(1000));
        assert_eq!(
            resolve(&s, &req).unwrap_err(),
            ResolveError::InvalidInput(InvalidInput::NonPositivePrice { index: 1 })
        );

        let s = series(&[dec!(100), dec!(101)]);
        let req = request(Direction::Long, Mode::Profit, dec!(2.0), dec!(0));
        assert_eq!(
            resolve(&s, &req).unwrap_err(),
            ResolveError::InvalidInput(InvalidInput::NonPositivePrincipal)
        );

        let req = request(Direction::Long, Mode::Profit, dec!(-1.0), dec!(1000));
        assert_eq!(
            resolve(&s, &req).unwrap_err(),
            ResolveError::InvalidInput(InvalidInput::NonPositiveTarget)
        );
    }

    #[test]
    fn test_prices_are_always_observed_points() {
        let prices = [dec!(100), dec!(101.7), dec!(99.2), dec!(103.4)];
        let s = series(&prices);
        let req = request(Direction::Long, Mode::Profit, dec!(7.0), dec!(1000));

        let result = resolve(&s, &req).unwrap();
        assert!(prices.contains(&result.entry_price));
        assert!(prices.contains(&result.exit_price));
        assert_ne!(result.entry_price, result.exit_price);
    }
}
