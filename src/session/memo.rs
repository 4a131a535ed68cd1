// ---------------------------------------------------------------------------
// Memo – one derived value tagged with the inputs it was computed from
// ---------------------------------------------------------------------------

/// A single memoized derived value.
///
/// The slot stores the last computed value together with the tuple of input
/// values it depends on. Reading with an unchanged key returns the cached
/// value; reading with a changed key recomputes and replaces the slot. This
/// is the whole recomputation graph of the dashboard: each derived value
/// declares its dependencies by choosing its key type.
#[derive(Debug)]
pub struct Memo<K, V> {
    slot: Option<(K, V)>,
}

impl<K, V> Default for Memo<K, V> {
    fn default() -> Self {
        Memo { slot: None }
    }
}

impl<K: PartialEq, V: Clone> Memo<K, V> {
    /// Return the cached value for `key`, computing it if the key changed
    /// since the last read (or nothing was cached yet).
    pub fn get_or_compute(&mut self, key: K, compute: impl FnOnce() -> V) -> V {
        match &self.slot {
            Some((cached_key, value)) if *cached_key == key => value.clone(),
            _ => {
                let value = compute();
                self.slot = Some((key, value.clone()));
                value
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn computes_once_per_key() {
        let mut memo: Memo<u32, String> = Memo::default();
        let mut calls = 0;

        let a = memo.get_or_compute(1, || {
            calls += 1;
            "one".to_string()
        });
        let b = memo.get_or_compute(1, || {
            calls += 1;
            "one again".to_string()
        });

        assert_eq!(a, "one");
        assert_eq!(b, "one");
        assert_eq!(calls, 1);
    }

    #[test]
    fn key_change_recomputes() {
        let mut memo: Memo<(u32, u32), u32> = Memo::default();
        let mut calls = 0;
        let mut read = |memo: &mut Memo<(u32, u32), u32>, key| {
            memo.get_or_compute(key, || {
                calls += 1;
                calls
            })
        };

        assert_eq!(read(&mut memo, (0, 100)), 1);
        assert_eq!(read(&mut memo, (10, 90)), 2);
        // flipping back to an evicted key recomputes: the memo keeps one slot
        assert_eq!(read(&mut memo, (0, 100)), 3);
    }
}
