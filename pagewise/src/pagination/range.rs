/// Build an inclusive sequence of integers from `start` to `stop`
///
/// - With `stop` omitted the sequence runs upward from `0` to `start`, so a
///   negative `start` yields an empty sequence.
/// - A `step` of zero yields an empty sequence.
/// - A positive `step` over descending `start` and `stop` is negated, so the
///   sequence still terminates and runs downward.
/// - A negative `step` over ascending bounds yields an empty sequence.
///
/// The sequence ends early instead of overflowing `i64`.
///
/// # Example
///
/// ```rust
/// use pagewise::pagination::calculate_range;
///
/// assert_eq!(calculate_range(1, Some(5), 1), vec![1, 2, 3, 4, 5]);
/// assert_eq!(calculate_range(5, Some(1), 1), vec![5, 4, 3, 2, 1]);
/// assert_eq!(calculate_range(1, Some(1), 1), vec![1]);
/// assert_eq!(calculate_range(1, Some(5), 0), Vec::<i64>::new());
/// assert_eq!(calculate_range(3, None, 1), vec![0, 1, 2, 3]);
/// assert_eq!(calculate_range(-2, None, 1), Vec::<i64>::new());
/// ```
#[must_use]
pub fn calculate_range(start: i64, stop: Option<i64>, step: i64) -> Vec<i64> {
    if step == 0 {
        return Vec::new();
    }

    let (from, to, step) = match stop {
        Some(stop) if step > 0 && start > stop => (start, stop, -step),
        Some(stop) => (start, stop, step),
        None => (0, start, step),
    };

    let mut values = Vec::new();
    let mut current = Some(from);
    while let Some(value) = current {
        let in_bounds = if step > 0 { value <= to } else { value >= to };
        if !in_bounds {
            break;
        }
        values.push(value);
        current = value.checked_add(step);
    }
    values
}

/// Page numbers `[1 ..= total_pages]`
pub(crate) fn page_numbers(total_pages: u64) -> Vec<u64> {
    let stop = i64::try_from(total_pages).unwrap_or(i64::MAX);
    calculate_range(1, Some(stop), 1)
        .into_iter()
        .map(|page| page as u64)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascending() {
        assert_eq!(calculate_range(1, Some(5), 1), vec![1, 2, 3, 4, 5]);
        assert_eq!(calculate_range(-2, Some(2), 1), vec![-2, -1, 0, 1, 2]);
    }

    #[test]
    fn test_auto_reverse() {
        assert_eq!(calculate_range(5, Some(1), 1), vec![5, 4, 3, 2, 1]);
        assert_eq!(calculate_range(10, Some(0), 5), vec![10, 5, 0]);
    }

    #[test]
    fn test_single_value() {
        assert_eq!(calculate_range(1, Some(1), 1), vec![1]);
        assert_eq!(calculate_range(0, None, 1), vec![0]);
    }

    #[test]
    fn test_zero_step_is_empty() {
        assert!(calculate_range(1, Some(5), 0).is_empty());
        assert!(calculate_range(5, None, 0).is_empty());
    }

    #[test]
    fn test_stop_omitted_counts_from_zero() {
        assert_eq!(calculate_range(4, None, 1), vec![0, 1, 2, 3, 4]);
        assert_eq!(calculate_range(4, None, 2), vec![0, 2, 4]);
    }

    #[test]
    fn test_stop_omitted_never_reverses() {
        assert!(calculate_range(-2, None, 1).is_empty());
        assert!(calculate_range(-5, None, 3).is_empty());
        assert_eq!(calculate_range(-2, None, -1), vec![0, -1, -2]);
    }

    #[test]
    fn test_step_not_dividing_span_stops_before_bound() {
        assert_eq!(calculate_range(1, Some(10), 4), vec![1, 5, 9]);
        assert_eq!(calculate_range(10, Some(1), 4), vec![10, 6, 2]);
    }

    #[test]
    fn test_explicit_negative_step() {
        assert_eq!(calculate_range(5, Some(1), -2), vec![5, 3, 1]);
        assert!(calculate_range(1, Some(5), -1).is_empty());
    }

    #[test]
    fn test_no_overflow_near_bounds() {
        assert_eq!(
            calculate_range(i64::MAX - 1, Some(i64::MAX), 1),
            vec![i64::MAX - 1, i64::MAX]
        );
        assert_eq!(calculate_range(i64::MAX - 1, Some(i64::MAX), 5), vec![i64::MAX - 1]);
        assert_eq!(
            calculate_range(i64::MIN + 1, Some(i64::MIN), 1),
            vec![i64::MIN + 1, i64::MIN]
        );
    }

    #[test]
    fn test_restartable() {
        let first = calculate_range(3, Some(7), 2);
        let second = calculate_range(3, Some(7), 2);
        assert_eq!(first, second);
    }

    #[test]
    fn test_page_numbers() {
        assert_eq!(page_numbers(1), vec![1]);
        assert_eq!(page_numbers(4), vec![1, 2, 3, 4]);
    }
}
