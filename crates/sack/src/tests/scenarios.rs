use std::fmt::Debug;

use log::trace;
use utils::{assert_trait, for_each_impl};

use super::{init_logger, TestSack};
use crate::{ArenaSack, LinkedSack, Sack, SackError};

assert_trait!(linked_sack; LinkedSack<u32>; Send, Sync, Clone, Default, Debug);
assert_trait!(arena_sack; ArenaSack<u32>; Send, Sync, Clone, Default, Debug);

fn sorted<S: TestSack>(sack: &S) -> Vec<u32> {
    let mut values = sack.to_vec();
    values.sort_unstable();
    values
}

fn add_remove_dedup<S: TestSack>() {
    init_logger();
    let mut sack = S::default();
    assert!(sack.add(5));
    assert!(sack.add(3));
    assert!(sack.add(5));
    trace!("{sack:?}");

    assert_eq!(sack.len(), 3);
    assert_eq!(sack.frequency_of(&5), 2);
    assert!(sack.contains(&3));
    assert_eq!(sorted(&sack), vec![3, 5, 5]);

    sack.remove_duplicates();
    assert_eq!(sack.len(), 2);
    assert_eq!(sack.frequency_of(&5), 1);
    assert_eq!(sack.frequency_of(&3), 1);

    let removed = sack.remove_any();
    assert!(matches!(removed, Some(3) | Some(5)));
    assert_eq!(sack.len(), 1);
}
for_each_impl!(add_remove_dedup; LinkedSack, ArenaSack);

fn empty_sack_outcomes<S: TestSack>() {
    init_logger();
    let mut sack = S::default();
    assert!(sack.is_empty());
    assert_eq!(sack.remove_any(), None);
    assert!(!sack.remove(&7));
    assert!(!sack.duplicate_all());
    sack.clear();
    assert_eq!(sack.len(), 0);
    assert_eq!(sack.frequency_of(&7), 0);
    assert!(!sack.contains(&7));
    assert!(sack.to_vec().is_empty());
    assert_eq!(sack.iter().next(), None);
}
for_each_impl!(empty_sack_outcomes; LinkedSack, ArenaSack);

fn absent_values_are_rejected<S: TestSack>() {
    init_logger();
    let mut sack = S::default();
    assert!(!sack.add(None::<u32>));
    assert!(sack.is_empty());
    assert!(sack.add(Some(4)));
    assert_eq!(sack.to_vec(), vec![4]);
}
for_each_impl!(absent_values_are_rejected; LinkedSack, ArenaSack);

fn try_variants_report_errors<S: TestSack>() {
    init_logger();
    let mut sack = S::default();
    assert_eq!(sack.try_add(None::<u32>), Err(SackError::Absent));
    assert_eq!(sack.try_remove_any(), Err(SackError::Empty));
    assert_eq!(sack.try_duplicate_all(), Err(SackError::Empty));
    assert_eq!(sack.try_remove(&1), Err(SackError::NotFound));

    assert_eq!(sack.try_add(1), Ok(()));
    assert_eq!(sack.try_duplicate_all(), Ok(()));
    assert_eq!(sack.try_remove(&1), Ok(()));
    assert_eq!(sack.try_remove_any(), Ok(1));
}
for_each_impl!(try_variants_report_errors; LinkedSack, ArenaSack);

fn snapshot_is_detached<S: TestSack>() {
    let mut sack: S = [1, 2].into_iter().collect();
    let snapshot = sack.to_vec();
    sack.clear();
    sack.add(9);
    assert_eq!(snapshot.len(), 2);
    assert!(snapshot.contains(&1) && snapshot.contains(&2));
}
for_each_impl!(snapshot_is_detached; LinkedSack, ArenaSack);

fn iterators_are_independent<S: TestSack>() {
    let sack: S = [1, 2, 3].into_iter().collect();
    let mut a = sack.iter();
    let mut b = sack.iter();
    assert_eq!(a.next(), Some(&3));
    assert_eq!(a.next(), Some(&2));
    assert_eq!(b.next(), Some(&3));
    assert_eq!(a.next(), Some(&1));
    assert_eq!(a.next(), None);
    assert_eq!(b.count(), 2);
}
for_each_impl!(iterators_are_independent; LinkedSack, ArenaSack);

fn frequencies_in_one_pass<S: TestSack>() {
    let sack: S = [4, 1, 4, 4, 2].into_iter().collect();
    let counts = sack.frequencies();
    assert_eq!(counts.len(), 3);
    assert_eq!(counts[&4u32], 3);
    assert_eq!(counts[&1u32], 1);
    assert_eq!(counts[&2u32], 1);
    assert_eq!(counts.get(&3u32), None);
}
for_each_impl!(frequencies_in_one_pass; LinkedSack, ArenaSack);

#[test]
fn equality_across_stores() {
    let linked: LinkedSack<u32> = [1, 2, 2, 3].into_iter().collect();
    let arena: ArenaSack<u32> = [3, 2, 1, 2].into_iter().collect();
    assert!(linked.sack_eq(&arena));
    assert!(arena.sack_eq(&linked));

    let other: ArenaSack<u32> = [3, 1, 1, 2].into_iter().collect();
    assert!(!linked.sack_eq(&other));
}

#[test]
fn strings_need_no_copy() {
    let mut sack: LinkedSack<String> = LinkedSack::new();
    sack.add("pear".to_owned());
    sack.add(String::from("fig"));
    sack.add("pear".to_owned());
    assert_eq!(sack.frequency_of(&"pear".to_owned()), 2);
    assert!(sack.remove(&"fig".to_owned()));
    assert!(sack.duplicate_all());
    assert_eq!(sack.len(), 4);
    sack.remove_duplicates();
    assert_eq!(sack.to_vec(), vec!["pear".to_owned()]);
}
