use gridlane_core::rng::RngHandle;
use gridlane_plan::{shuffle_commands, split_into_lanes};
use proptest::prelude::*;

fn command_list(total: usize) -> Vec<String> {
    (1..=total).map(|i| format!("julia {i:03}.jl")).collect()
}

#[test]
fn zero_lane_count_is_rejected() {
    let err = split_into_lanes(command_list(4), 0).expect_err("zero lanes");
    assert_eq!(err.info().code, "lane-count-zero");
}

#[test]
fn fewer_jobs_than_lanes_leaves_trailing_lanes_empty() {
    let lanes = split_into_lanes(command_list(3), 5).expect("split");
    let sizes: Vec<usize> = lanes.iter().map(|lane| lane.len()).collect();
    assert_eq!(sizes, vec![1, 1, 1, 0, 0]);
}

#[test]
fn shuffle_is_deterministic_for_a_fixed_seed() {
    let mut a = command_list(50);
    let mut b = command_list(50);
    shuffle_commands(&mut a, &mut RngHandle::from_seed(99));
    shuffle_commands(&mut b, &mut RngHandle::from_seed(99));
    assert_eq!(a, b);

    let mut c = command_list(50);
    shuffle_commands(&mut c, &mut RngHandle::from_seed(100));
    assert_ne!(a, c, "distinct seeds should permute 50 commands differently");
}

proptest! {
    #[test]
    fn lane_sizes_are_balanced_and_sum_to_total(total in 0usize..200, lanes in 1usize..50) {
        let split = split_into_lanes(command_list(total), lanes).expect("split");
        prop_assert_eq!(split.len(), lanes);
        let sizes: Vec<usize> = split.iter().map(|lane| lane.len()).collect();
        prop_assert_eq!(sizes.iter().sum::<usize>(), total);
        let max = sizes.iter().copied().max().unwrap_or(0);
        let min = sizes.iter().copied().min().unwrap_or(0);
        prop_assert!(max - min <= 1);
        // First r lanes take the extra command, the rest take the quotient.
        let q = total / lanes;
        let r = total % lanes;
        for (idx, size) in sizes.iter().enumerate() {
            prop_assert_eq!(*size, q + usize::from(idx < r));
        }
    }

    #[test]
    fn lanes_partition_the_command_multiset(total in 0usize..150, lanes in 1usize..40, seed in any::<u64>()) {
        let mut commands = command_list(total);
        shuffle_commands(&mut commands, &mut RngHandle::from_seed(seed));
        let split = split_into_lanes(commands, lanes).expect("split");
        let mut recombined: Vec<String> = split
            .iter()
            .flat_map(|lane| lane.commands().iter().cloned())
            .collect();
        recombined.sort();
        let mut expected = command_list(total);
        expected.sort();
        prop_assert_eq!(recombined, expected);
    }

    #[test]
    fn shuffle_is_a_bijection(total in 0usize..150, seed in any::<u64>()) {
        let mut commands = command_list(total);
        shuffle_commands(&mut commands, &mut RngHandle::from_seed(seed));
        let mut sorted = commands.clone();
        sorted.sort();
        prop_assert_eq!(sorted, command_list(total));
    }
}
