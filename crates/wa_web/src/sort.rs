//! Three-way partition quick sort.

use std::cmp::Ordering;

use serde_json::{Number, Value};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SortError {
    #[error("element {index} is not a number: {value}")]
    NotANumber { index: usize, value: String },
}

pub fn quick_sort<T: Ord + Clone>(items: &[T]) -> Vec<T> {
    quick_sort_by(items, &T::cmp)
}

/// Partitions around the middle element into less / equal / greater and
/// recurses on the outer two. Equal elements keep their input order.
pub fn quick_sort_by<T, F>(items: &[T], compare: &F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T, &T) -> Ordering,
{
    if items.len() <= 1 {
        return items.to_vec();
    }

    let pivot = &items[items.len() / 2];
    let mut left = Vec::new();
    let mut middle = Vec::new();
    let mut right = Vec::new();
    for item in items {
        match compare(item, pivot) {
            Ordering::Less => left.push(item.clone()),
            Ordering::Equal => middle.push(item.clone()),
            Ordering::Greater => right.push(item.clone()),
        }
    }

    let mut sorted = quick_sort_by(&left, compare);
    sorted.append(&mut middle);
    sorted.append(&mut quick_sort_by(&right, compare));
    sorted
}

/// Integers compare exactly; anything involving a float goes through `f64`.
pub fn compare_numbers(a: &Number, b: &Number) -> Ordering {
    if let (Some(x), Some(y)) = (a.as_i64(), b.as_i64()) {
        return x.cmp(&y);
    }
    if let (Some(x), Some(y)) = (a.as_u64(), b.as_u64()) {
        return x.cmp(&y);
    }
    let x = a.as_f64().unwrap_or_default();
    let y = b.as_f64().unwrap_or_default();
    x.total_cmp(&y)
}

/// Sorts JSON numbers, keeping each one's original representation.
pub fn sort_numbers(values: &[Value]) -> Result<Vec<Value>, SortError> {
    let numbers = values
        .iter()
        .enumerate()
        .map(|(index, value)| match value {
            Value::Number(n) => Ok(n.clone()),
            other => Err(SortError::NotANumber {
                index,
                value: other.to_string(),
            }),
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(quick_sort_by(&numbers, &compare_numbers)
        .into_iter()
        .map(Value::Number)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    /// Small deterministic generator so the property checks are repeatable.
    fn pseudo_random(seed: u64, len: usize) -> Vec<i64> {
        let mut state = seed;
        (0..len)
            .map(|_| {
                state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
                ((state >> 33) % 21) as i64 - 10
            })
            .collect()
    }

    fn is_non_decreasing(items: &[i64]) -> bool {
        items.windows(2).all(|w| w[0] <= w[1])
    }

    #[test]
    fn test_small_inputs() {
        assert_eq!(quick_sort::<i64>(&[]), Vec::<i64>::new());
        assert_eq!(quick_sort(&[7]), vec![7]);
        assert_eq!(quick_sort(&[3, 1, 2]), vec![1, 2, 3]);
        assert_eq!(quick_sort(&[2, 2, 1, 2]), vec![1, 2, 2, 2]);
    }

    #[test]
    fn test_sorted_permutation_and_idempotent() {
        for seed in 0..50 {
            let input = pseudo_random(seed, (seed as usize) * 3);
            let output = quick_sort(&input);

            assert!(is_non_decreasing(&output), "seed {}", seed);
            let mut expected = input.clone();
            expected.sort();
            assert_eq!(output, expected, "seed {}", seed);
            assert_eq!(quick_sort(&output), output, "seed {}", seed);
        }
    }

    #[test]
    fn test_equal_elements_keep_input_order() {
        let pairs = vec![(1, 'a'), (0, 'b'), (1, 'c'), (0, 'd')];
        let sorted = quick_sort_by(&pairs, &|a: &(i32, char), b: &(i32, char)| a.0.cmp(&b.0));
        assert_eq!(sorted, vec![(0, 'b'), (0, 'd'), (1, 'a'), (1, 'c')]);
    }

    #[test]
    fn test_sort_numbers_mixed() {
        let input = vec![json!(3), json!(-1.5), json!(2), json!(0), json!(2.0), json!(18446744073709551615u64)];
        let output = sort_numbers(&input).unwrap();
        assert_eq!(
            output,
            vec![json!(-1.5), json!(0), json!(2), json!(2.0), json!(3), json!(18446744073709551615u64)]
        );
    }

    #[test]
    fn test_sort_numbers_rejects_non_numbers() {
        let err = sort_numbers(&[json!(1), json!("x")]).unwrap_err();
        assert_eq!(
            err,
            SortError::NotANumber {
                index: 1,
                value: "\"x\"".to_string()
            }
        );
    }
}
