//! Invariants of `Navigator::move_to` over every pair of states

use std::collections::VecDeque;

use jtag_nav::search::{encode, find_path};
use jtag_nav::{JtagState, Navigator};
use proptest::prelude::*;

fn any_state() -> impl Strategy<Value = JtagState> {
    (0..JtagState::ALL.len()).prop_map(|i| JtagState::ALL[i])
}

/// Navigator parked in `state`
fn navigator_at(state: JtagState) -> Navigator {
    let mut nav = Navigator::new();
    nav.move_to(state);
    nav
}

/// Number of TCKs between two states, by plain BFS over the table
fn distance(start: JtagState, goal: JtagState) -> usize {
    let mut dist = [usize::MAX; 16];
    dist[start as usize] = 0;
    let mut queue = VecDeque::from([start]);
    while let Some(s) = queue.pop_front() {
        let (low, high) = s.successors();
        for next in [low, high] {
            if dist[next as usize] == usize::MAX {
                dist[next as usize] = dist[s as usize] + 1;
                queue.push_back(next);
            }
        }
    }
    dist[goal as usize]
}

proptest! {
    #[test]
    fn prop_moves_are_deterministic(start in any_state(), goal in any_state()) {
        let first = navigator_at(start).move_to(goal);
        let second = navigator_at(start).move_to(goal);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_moving_to_current_state_is_noop(state in any_state()) {
        let mut nav = navigator_at(state);
        prop_assert_eq!(nav.move_to(state), None);
        prop_assert_eq!(nav.current_state(), state);
    }

    #[test]
    fn prop_moves_are_shortest(start in any_state(), goal in any_state()) {
        prop_assume!(start != goal);
        let seq = navigator_at(start).move_to(goal).unwrap();
        prop_assert_eq!(seq.count(), distance(start, goal));
    }

    #[test]
    fn prop_replay_lands_on_goal(start in any_state(), goal in any_state()) {
        prop_assume!(start != goal);
        let mut nav = navigator_at(start);
        let seq = nav.move_to(goal).unwrap();
        prop_assert_eq!(seq.replay(start), goal);
        prop_assert_eq!(nav.current_state(), goal);
        prop_assert_eq!(seq.tms().len(), seq.count());
        prop_assert!(u32::from(seq.bits()) < 1 << seq.count());
    }

    #[test]
    fn prop_search_and_encode_agree(start in any_state(), goal in any_state()) {
        prop_assume!(start != goal);
        let path = find_path(start, goal).unwrap();
        let seq = encode(&path).unwrap();
        prop_assert_eq!(seq.count(), path.len() - 1);

        let mut state = start;
        for (tms, expected) in seq.tms().zip(&path[1..]) {
            state = state.next(tms);
            prop_assert_eq!(state, *expected);
        }
    }

    #[test]
    fn prop_names_round_trip(state in any_state()) {
        prop_assert_eq!(state.to_string().parse::<JtagState>(), Ok(state));
    }
}

#[test]
fn moves_from_any_state_to_any_other() {
    for start in JtagState::ALL {
        for goal in JtagState::ALL {
            let mut nav = navigator_at(start);
            let seq = nav.move_to(goal);
            assert_eq!(seq.is_none(), start == goal, "{} -> {}", start, goal);
            assert_eq!(nav.current_state(), goal);
        }
    }
}
