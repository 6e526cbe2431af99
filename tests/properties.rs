use std::collections::BTreeSet;

use proptest::prelude::*;
use seqkit::collections::*;

fn small_vec() -> impl Strategy<Value = Vec<i8>> {
    proptest::collection::vec(-20i8..20, 0..64)
}

proptest! {
    #[test]
    fn map_preserves_length(s in small_vec()) {
        prop_assert_eq!(map(&s, |e| i32::from(*e) * 3).len(), s.len());
    }

    #[test]
    fn reverse_is_an_involution(s in small_vec()) {
        prop_assert_eq!(reverse(&reverse(&s)), s);
    }

    #[test]
    fn unique_keeps_first_occurrences(s in small_vec(), probe in -25i8..25) {
        let res = unique(&s);

        let distinct: BTreeSet<_> = res.iter().collect();
        prop_assert_eq!(distinct.len(), res.len());

        let mut expected = Vec::new();
        for e in &s {
            if !expected.contains(e) {
                expected.push(*e);
            }
        }
        prop_assert_eq!(&res, &expected);

        prop_assert_eq!(find(&res, &probe).is_some(), s.contains(&probe));
    }

    #[test]
    fn flatten_undoes_chunk(s in small_vec(), k in 1usize..10) {
        let chunks = chunk(&s, k).expect("a positive chunk size is valid");
        if let Some((last, rest)) = chunks.split_last() {
            prop_assert!(rest.iter().all(|c| c.len() == k));
            prop_assert!(!last.is_empty() && last.len() <= k);
        }
        prop_assert_eq!(flatten(&chunks), s);
    }

    #[test]
    fn set_algebra_matches_btree_set(a in small_vec(), b in small_vec()) {
        let (sa, sb) = (Set::from_slice(&a), Set::from_slice(&b));
        let (ba, bb): (BTreeSet<i8>, BTreeSet<i8>) =
            (a.iter().copied().collect(), b.iter().copied().collect());

        let as_btree = |set: &Set<i8>| set.to_vec().into_iter().collect::<BTreeSet<_>>();

        prop_assert_eq!(as_btree(&sa.union(&sb)), &ba | &bb);
        prop_assert_eq!(as_btree(&sa.intersection(&sb)), &ba & &bb);
        prop_assert_eq!(as_btree(&sa.difference(&sb)), &ba - &bb);

        let inter = sa.intersection(&sb);
        prop_assert!(inter.is_subset(&sa) && inter.is_subset(&sb));
        prop_assert!(sa.difference(&sb).intersection(&sb).is_empty());
    }

    #[test]
    fn enum_ids_strictly_increase(names in proptest::collection::btree_set("[A-Z]{1,6}", 1..16)) {
        let mut registry = Enum::new();
        let mut last = registry.id();
        for name in &names {
            prop_assert!(registry.add(name.as_str()));
            let id = registry.get(name).and_then(EnumValue::as_int);
            prop_assert_eq!(id, Some(last + 1));
            last += 1;
        }
        for name in &names {
            prop_assert!(!registry.add(name.as_str()));
        }
        prop_assert_eq!(registry.len(), names.len());
        prop_assert_eq!(registry.id(), last);
    }
}

#[test]
fn chunk_rejects_zero() {
    let err = chunk(&[1, 2, 3], 0).expect_err("zero-sized chunks are invalid");
    assert!(CollectionError::from(err).is_invalid_chunk_size());
}

#[test]
fn errors_convert_into_collection_error() {
    let mut registry = Enum::new();
    registry.add_with_value("ONE", 100);

    let err: CollectionError = registry.variant(300).unwrap_err().into();
    assert!(err.is_variant_not_found());

    let handlers: Handlers<'_, ()> = Handlers::new();
    let err: CollectionError = registry.try_match("ONE", &handlers).unwrap_err().into();
    assert_eq!(err.to_string(), "Following branches are unattended: ONE");
}
