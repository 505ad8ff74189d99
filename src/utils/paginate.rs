/// Slice for 1-based `page`; out-of-range pages are empty.
pub fn paginate<T: Clone>(items: &[T], page: Option<usize>, limit: Option<usize>) -> Vec<T> {
	let limit = limit.unwrap_or(10);
	let offset = (page.unwrap_or(1).max(1) - 1).saturating_mul(limit);

	items.iter().skip(offset).take(limit).cloned().collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn pages_are_one_based() {
		let items: Vec<u32> = (1..=25).collect();
		assert_eq!(paginate(&items, None, None), (1..=10).collect::<Vec<_>>());
		assert_eq!(paginate(&items, Some(3), Some(10)), (21..=25).collect::<Vec<_>>());
		assert_eq!(paginate(&items, Some(0), Some(5)), (1..=5).collect::<Vec<_>>());
		assert!(paginate(&items, Some(9), Some(10)).is_empty());
	}
}
