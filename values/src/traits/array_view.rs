use crate::dynamic::Value;
use crate::error::Result;

/// Read access shared by vectors and lists.
///
/// Elements come out as [`Value`]s: a vector of `T` yields scalars of `T`.
/// Probes passed to `contains`/`index_of` go through the same coercion as a
/// write, so a probe the array cannot hold is an error, not a miss.
pub trait ArrayView {
    fn len(&self) -> usize;

    fn get(&self, index: usize) -> Result<Value>;

    fn contains(&self, item: &Value) -> Result<bool>;

    fn index_of(&self, item: &Value) -> Result<Option<usize>>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn to_values(&self) -> Result<Vec<Value>> {
        (0..self.len()).map(|i| self.get(i)).collect()
    }
}

/// Structural mutation shared by vectors and lists.
///
/// Every method validates the index and coerces the item before touching
/// storage; on error the array is unchanged.
pub trait ArrayMut: ArrayView {
    fn set(&mut self, index: usize, item: &Value) -> Result<()>;

    fn push(&mut self, item: &Value) -> Result<()>;

    /// Insert before `index`; `index == len` appends.
    fn insert(&mut self, index: usize, item: &Value) -> Result<()>;

    fn remove_at(&mut self, index: usize) -> Result<Value>;

    /// Remove the first element equal to `item`. `Ok(false)` if none is.
    fn remove(&mut self, item: &Value) -> Result<bool>;

    fn clear(&mut self);
}
