//! Cancellable background render tasks keyed by card identity.

use std::{collections::HashMap, future::Future};

use futures::future::{AbortHandle, Abortable};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Generation id distinguishing successive tasks registered under one key.
pub struct RenderTaskId(u64);

#[derive(Debug, Default)]
/// Registry of in-flight render tasks (PDF previews) keyed by card key.
///
/// Registering under an occupied key aborts the previous task. Aborted tasks resolve to
/// `Err(Aborted)` at their next poll and never touch their canvas again.
pub struct RenderTaskRegistry {
    next_id: u64,
    tasks: HashMap<String, (RenderTaskId, AbortHandle)>,
}

impl RenderTaskRegistry {
    /// Wraps `task` so it can be aborted through this registry.
    pub fn register<F: Future>(
        &mut self,
        key: impl Into<String>,
        task: F,
    ) -> (RenderTaskId, Abortable<F>) {
        self.next_id += 1;
        let id = RenderTaskId(self.next_id);
        let (handle, registration) = AbortHandle::new_pair();
        if let Some((_, previous)) = self.tasks.insert(key.into(), (id, handle)) {
            previous.abort();
        }
        (id, Abortable::new(task, registration))
    }

    /// Aborts the task for `key` if it is still generation `id`. Returns whether one was aborted.
    pub fn cancel(&mut self, key: &str, id: RenderTaskId) -> bool {
        match self.tasks.get(key) {
            Some((current, _)) if *current == id => {
                if let Some((_, handle)) = self.tasks.remove(key) {
                    handle.abort();
                }
                true
            }
            _ => false,
        }
    }

    /// Forgets a finished task without aborting anything newer under the same key.
    pub fn complete(&mut self, key: &str, id: RenderTaskId) {
        if matches!(self.tasks.get(key), Some((current, _)) if *current == id) {
            self.tasks.remove(key);
        }
    }

    /// Aborts every task whose key is not in `keys`; returns how many were aborted.
    pub fn retain_keys<'a>(&mut self, keys: impl IntoIterator<Item = &'a str>) -> usize {
        let keep: std::collections::HashSet<&str> = keys.into_iter().collect();
        let stale: Vec<String> = self
            .tasks
            .keys()
            .filter(|key| !keep.contains(key.as_str()))
            .cloned()
            .collect();
        for key in &stale {
            if let Some((_, handle)) = self.tasks.remove(key) {
                handle.abort();
            }
        }
        stale.len()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use futures::{executor::block_on, future::Aborted};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn reregistering_a_key_aborts_the_stale_task() {
        let mut registry = RenderTaskRegistry::default();
        let (first_id, first) = registry.register("maps/a.pdf", async { 1 });
        let (second_id, second) = registry.register("maps/a.pdf", async { 2 });

        assert_ne!(first_id, second_id);
        assert_eq!(block_on(first), Err(Aborted));
        assert_eq!(block_on(second), Ok(2));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn cancel_ignores_outdated_generation() {
        let mut registry = RenderTaskRegistry::default();
        let (old_id, _old) = registry.register("k", async {});
        let (new_id, new) = registry.register("k", async { "drawn" });

        assert!(!registry.cancel("k", old_id));
        assert_eq!(block_on(new), Ok("drawn"));
        registry.complete("k", new_id);
        assert!(registry.is_empty());
    }

    #[test]
    fn retain_keys_aborts_tasks_for_cards_no_longer_shown() {
        let mut registry = RenderTaskRegistry::default();
        let (_, keep) = registry.register("keep.pdf", async { "keep" });
        let (_, drop_a) = registry.register("drop-a.pdf", async { "a" });
        let (_, drop_b) = registry.register("drop-b.pdf", async { "b" });

        assert_eq!(registry.retain_keys(["keep.pdf", "new.pdf"]), 2);
        assert_eq!(block_on(drop_a), Err(Aborted));
        assert_eq!(block_on(drop_b), Err(Aborted));
        assert_eq!(block_on(keep), Ok("keep"));
        assert_eq!(registry.len(), 1);
    }
}
