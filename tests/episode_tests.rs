//! End-to-end checks of the scheduling environment's episode contract:
//! fixed horizon, commitment semantics, pricing identities, and the terminal
//! observation sentinel.

use household_energy_sim::simulation::{
    EnvironmentError, Observation, SchedulingEnvironment, TariffRates, TariffTable,
    HOURS_PER_DAY,
};
use proptest::prelude::*;
use rstest::rstest;

const EPS: f64 = 1e-9;

fn idle() -> Vec<bool> {
    vec![false, false, false]
}

#[test]
fn episode_is_exactly_twenty_four_steps() {
    let mut env = SchedulingEnvironment::default();
    env.reset();

    for step in 1..=HOURS_PER_DAY {
        let outcome = env.step(&idle()).unwrap();
        assert_eq!(outcome.terminated, step == HOURS_PER_DAY);
        assert_eq!(env.hour(), step);
    }

    assert_eq!(env.history().len(), HOURS_PER_DAY);
}

#[test]
fn reset_discards_all_episode_state() {
    let mut env = SchedulingEnvironment::default();
    env.reset();

    // Dirty the state: commitments, history, clock.
    env.step(&[true, true, true]).unwrap();
    env.step(&idle()).unwrap();

    let first = env.reset();
    let second = env.reset();

    assert_eq!(first, second);
    assert_eq!(env.hour(), 0);
    assert!(env.history().is_empty());

    // A fresh episode prices the washer exactly like the very first one.
    let outcome = env.step(&[true, false, false]).unwrap();
    assert!((outcome.info.cost - 0.6).abs() < EPS);
}

#[test]
fn ev_commitment_survives_to_end_of_day() {
    let mut env = SchedulingEnvironment::default();
    env.reset();

    for _ in 0..20 {
        env.step(&idle()).unwrap();
    }

    // Start the EV at hour 20 and keep spamming start requests; the 4-hour
    // run must cover hours 20-23 at 3.0 kW regardless.
    for hour in 20..24 {
        assert_eq!(env.hour(), hour);
        let outcome = env.step(&[false, false, true]).unwrap();
        assert!((outcome.info.power - 3.2).abs() < EPS);
    }

    let last = env.history().last().unwrap();
    assert!((last.power_kw - 3.2).abs() < EPS);
}

#[test]
fn terminal_observation_is_the_zero_sentinel() {
    let mut env = SchedulingEnvironment::default();
    let initial = env.reset();

    let mut terminal_count = 0;
    for _ in 0..HOURS_PER_DAY {
        let outcome = env.step(&idle()).unwrap();
        if outcome.terminated {
            terminal_count += 1;
            assert_eq!(outcome.observation, Observation::zeros(initial.len()));
        } else {
            // Non-terminal observations stay within the normalized range.
            assert!(outcome
                .observation
                .as_slice()
                .iter()
                .all(|v| (0.0..=1.0).contains(v)));
        }
    }

    assert_eq!(terminal_count, 1);
}

#[test]
fn wrong_action_length_is_a_contract_violation() {
    let mut env = SchedulingEnvironment::default();
    env.reset();

    for bad in [0usize, 1, 2, 4, 16] {
        let action = vec![true; bad];
        let result = env.step(&action);
        assert!(matches!(
            result,
            Err(EnvironmentError::ActionLengthMismatch { expected: 3, actual }) if actual == bad
        ));
    }

    // Rejected calls leave the episode untouched.
    assert_eq!(env.hour(), 0);
    assert!(env.history().is_empty());
}

#[rstest]
#[case(0, 0.5)]
#[case(5, 0.5)]
#[case(6, 1.0)]
#[case(16, 1.0)]
#[case(17, 2.0)]
#[case(21, 2.0)]
#[case(22, 0.5)]
#[case(23, 0.5)]
fn step_prices_follow_the_tariff_bands(#[case] hour: usize, #[case] expected_price: f64) {
    let mut env = SchedulingEnvironment::default();
    env.reset();

    for _ in 0..hour {
        env.step(&idle()).unwrap();
    }

    let outcome = env.step(&idle()).unwrap();
    assert_eq!(outcome.info.price, expected_price);
    assert!((outcome.info.cost - 0.2 * expected_price).abs() < EPS);
}

#[rstest]
#[case(TariffRates { low: 0.5, mid: 1.0, high: 2.0 })]
#[case(TariffRates { low: 0.1, mid: 0.4, high: 0.9 })]
fn observation_price_component_is_min_max_normalized(#[case] rates: TariffRates) {
    let tariff = TariffTable::new(rates);
    let mut env = SchedulingEnvironment::new(Default::default(), tariff.clone());

    let mut obs = env.reset();
    for hour in 0..HOURS_PER_DAY - 1 {
        let price_norm = *obs.as_slice().last().unwrap();
        assert!((price_norm - tariff.normalized(hour)).abs() < EPS);
        obs = env.step(&idle()).unwrap().observation;
    }
}

proptest! {
    /// The per-step identities hold for any 24-hour action sequence:
    /// non-negative cost, reward == -cost, info consistent with history,
    /// and commitment counters never re-armed mid-run.
    #[test]
    fn step_identities_hold_for_arbitrary_actions(
        actions in proptest::collection::vec(
            proptest::collection::vec(any::<bool>(), 3),
            HOURS_PER_DAY,
        )
    ) {
        let mut env = SchedulingEnvironment::default();
        env.reset();
        let mut prev_remaining = vec![0.0_f64; 3];

        for (step, action) in actions.iter().enumerate() {
            let outcome = env.step(action).unwrap();

            prop_assert!(outcome.info.cost >= 0.0);
            prop_assert_eq!(outcome.reward, -outcome.info.cost);
            prop_assert!(outcome.info.power >= 0.2); // base load floor
            prop_assert_eq!(outcome.terminated, step == HOURS_PER_DAY - 1);

            let entry = &env.history()[step];
            prop_assert_eq!(entry.power_kw, outcome.info.power);
            prop_assert_eq!(entry.price, outcome.info.price);
            prop_assert_eq!(&entry.action, action);

            if !outcome.terminated {
                let remaining = &outcome.observation.as_slice()[1..4];
                for (i, fraction) in remaining.iter().enumerate() {
                    prop_assert!((0.0..=1.0).contains(fraction));
                    // A running appliance only ever counts down; a start
                    // request mid-run must not bump the fraction back up.
                    if prev_remaining[i] > 0.0 {
                        prop_assert!(*fraction < prev_remaining[i]);
                    }
                }
                prev_remaining.copy_from_slice(remaining);
            }
        }

        prop_assert_eq!(env.history().len(), HOURS_PER_DAY);
    }
}
