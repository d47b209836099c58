/// Creates a [`SpillVec`](crate::SpillVec) containing the arguments, in the
/// style of `vec!`. The inline capacity is taken from the expected type.
///
/// ```
/// # use spill_vec::{spill_vec, SpillVec};
/// let empty: SpillVec<u32, 4> = spill_vec![];
/// let fill: SpillVec<u32, 4> = spill_vec![7; 3];
/// let list: SpillVec<u32, 4> = spill_vec![1, 2, 3];
/// assert_eq!(fill, [7, 7, 7]);
/// assert_eq!(list, [1, 2, 3]);
/// ```
#[macro_export]
macro_rules! spill_vec {
    () => (
        $crate::SpillVec::new()
    );
    ($elem:expr; $n:expr) => (
        $crate::vec::from_elem($elem, $n)
    );
    ($($x:expr),+ $(,)?) => (
        $crate::SpillVec::from([$($x),+])
    );
}
