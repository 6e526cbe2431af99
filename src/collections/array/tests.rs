#![cfg(test)]

use super::*;

#[test]
fn test_for_each_order() {
    let input = [1, 2, 3, 4, 5];
    let mut res = Vec::new();
    for_each(&input, |e| res.push(*e));
    assert_eq!(res, input, "Elements should be visited in their original order.");

    let mut concatenated = String::new();
    for_each(&["a", "b", "c"], |e| concatenated.push_str(e));
    assert_eq!(concatenated, "abc");

    let mut calls = 0;
    for_each::<u8, _>(&[], |_| calls += 1);
    assert_eq!(calls, 0, "An empty sequence should never invoke the callback.");
}

#[test]
fn test_for_each_can_keep_references() {
    let input = [String::from("a"), String::from("b")];
    let mut kept: Vec<&String> = Vec::new();
    for_each(&input, |e| kept.push(e));
    assert!(
        std::ptr::eq(kept[1], &input[1]),
        "The callback should receive references into the input itself."
    );
}

#[test]
fn test_find() {
    let input = [1, 2, 3, 4, 5];
    assert_eq!(find(&input, &3), Some(2));
    assert_eq!(find(&input, &7), None, "A missing element should not be found.");
    assert_eq!(find(&["a", "b", "c", "d", "e", "f"], &"e"), Some(4));
    assert_eq!(
        find(&[1, 2, 1], &1),
        Some(0),
        "The index of the first matching element should be returned."
    );
    assert_eq!(find(&[] as &[i32], &1), None);
}

#[test]
fn test_find_by() {
    assert_eq!(find_by(&[1, 3, 4, 6], |e| e % 2 == 0), Some(2));
    assert_eq!(find_by(&[1, 3, 5], |e| e % 2 == 0), None);
}

#[test]
fn test_map() {
    let input = [1, 2, 3, 4, 5];
    let res = map(&input, |e| e * 2);
    assert_eq!(res.len(), input.len(), "Result should have the same length as the input.");
    assert_eq!(res, [2, 4, 6, 8, 10]);

    let lens = map(&["go", "rust"], |e| e.len());
    assert_eq!(lens, [2, 4], "Map should be able to change the element type.");
}

#[test]
fn test_filter() {
    let res = filter(&[-1, 2, -3, 4, -5], |e| *e > 0);
    assert_eq!(res, [2, 4], "Only positive elements should remain, in order.");
    assert!(filter(&[1, 2, 3], |_| false).is_empty());
}

#[test]
fn test_reduce() {
    assert_eq!(reduce(&[1, 2, 3, 4, 5], |acc, e| acc + e, 0), 15);
    assert_eq!(reduce(&[1, 2, 3, 4], |acc, e| acc * e, 1), 24);
    assert_eq!(
        reduce(&["go", "lang", "is", "cool"], |acc, e| acc + "-" + *e, String::from("hey")),
        "hey-go-lang-is-cool",
        "Reduce should fold from left to right."
    );
    assert_eq!(
        reduce(&[] as &[i32], |acc, e| acc + e, 42),
        42,
        "Reducing an empty sequence should return the initial value."
    );
}

#[test]
fn test_reverse() {
    let input = [1, 2, 3, 4, 5];
    assert_eq!(reverse(&input), [5, 4, 3, 2, 1]);
    assert_eq!(input, [1, 2, 3, 4, 5], "The input should not be mutated.");
    assert_eq!(reverse(&["a", "b", "c", "d"]), ["d", "c", "b", "a"]);
    assert!(reverse(&[] as &[u8]).is_empty());
}

#[test]
fn test_unique() {
    assert_eq!(unique(&[1, 2, 2, 2, 3, 4, 4, 4, 4, 5, 5]), [1, 2, 3, 4, 5]);
    assert_eq!(unique(&["a", "a", "a", "b", "c", "c"]), ["a", "b", "c"]);
    assert_eq!(
        unique(&[3, 1, 3, 2, 1]),
        [3, 1, 2],
        "Elements should keep the order of their first appearance."
    );
}

#[test]
fn test_chunk() {
    assert_eq!(
        chunk(&[1, 2, 3, 4, 5], 2),
        Ok(vec![vec![1, 2], vec![3, 4], vec![5]]),
        "The last chunk should hold the remainder."
    );
    assert_eq!(
        chunk(&["a", "a", "a", "b", "c", "c"], 2),
        Ok(vec![vec!["a", "a"], vec!["a", "b"], vec!["c", "c"]])
    );
    assert_eq!(chunk(&[1, 2, 3], 5), Ok(vec![vec![1, 2, 3]]));
    assert_eq!(chunk(&[] as &[i32], 3), Ok(vec![]));
    assert_eq!(
        chunk(&[1, 2, 3], 0),
        Err(InvalidChunkSize { size: 0 }),
        "A chunk size of zero should be rejected, not clamped."
    );
}

#[test]
fn test_flatten() {
    assert_eq!(flatten(&[vec![1, 2], vec![3, 4], vec![5]]), [1, 2, 3, 4, 5]);
    assert_eq!(
        flatten(&[vec!["a", "a"], vec!["a", "b"], vec!["c", "c"]]),
        ["a", "a", "a", "b", "c", "c"]
    );
    assert_eq!(flatten(&[[1, 2], [3, 4]]), [1, 2, 3, 4], "Arrays should flatten too.");

    let empty: [Vec<i32>; 2] = [vec![], vec![]];
    assert!(flatten(&empty).is_empty());
}
