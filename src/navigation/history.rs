//! In-memory navigation history.
//!
//! A stack of entries with a cursor, like a browser session history:
//! `push` truncates anything after the cursor, `replace` rewrites the entry
//! under it, `back`/`forward` move it.

#[derive(Debug, Clone)]
pub struct MemoryHistory {
    entries: Vec<String>,
    cursor: usize,
}

impl MemoryHistory {
    /// History holding only the initial location.
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            entries: vec![initial.into()],
            cursor: 0,
        }
    }

    pub fn location(&self) -> &str {
        &self.entries[self.cursor]
    }

    pub fn push(&mut self, path: impl Into<String>) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(path.into());
        self.cursor = self.entries.len() - 1;
    }

    pub fn replace(&mut self, path: impl Into<String>) {
        self.entries[self.cursor] = path.into();
    }

    /// Step back; returns the new location, or `None` at the start.
    pub fn back(&mut self) -> Option<&str> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(self.location())
    }

    /// Step forward; returns the new location, or `None` at the end.
    pub fn forward(&mut self) -> Option<&str> {
        if self.cursor + 1 >= self.entries.len() {
            return None;
        }
        self.cursor += 1;
        Some(self.location())
    }

    pub fn can_go_back(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_back_forward() {
        let mut history = MemoryHistory::new("/");
        history.push("/manager-product");
        history.push("/manager-user");
        assert_eq!(history.len(), 3);

        assert_eq!(history.back(), Some("/manager-product"));
        assert_eq!(history.back(), Some("/"));
        assert_eq!(history.back(), None);
        assert_eq!(history.forward(), Some("/manager-product"));

        // Push from the middle drops the forward entries.
        history.push("/dashboard");
        assert!(!history.can_go_forward());
        assert_eq!(history.len(), 3);
        assert_eq!(history.location(), "/dashboard");
    }

    #[test]
    fn test_replace() {
        let mut history = MemoryHistory::new("/");
        history.replace("/dashboard");
        assert_eq!(history.len(), 1);
        assert_eq!(history.location(), "/dashboard");
        assert!(!history.can_go_back());
    }
}
