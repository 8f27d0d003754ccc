use std::collections::VecDeque;

/// FIFO of pending queries. Grows while being drained when recursion is on;
/// access is single-threaded so no synchronisation is needed.
#[derive(Debug, Default, Clone)]
pub struct WorkQueue {
    queries: VecDeque<String>,
}

impl WorkQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, query: impl Into<String>) {
        self.queries.push_back(query.into());
    }

    pub fn pop(&mut self) -> Option<String> {
        self.queries.pop_front()
    }

    pub fn is_empty(&self) -> bool {
        self.queries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.queries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.queries.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for WorkQueue {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            queries: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<S: Into<String>> Extend<S> for WorkQueue {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.queries.extend(iter.into_iter().map(Into::into));
    }
}
