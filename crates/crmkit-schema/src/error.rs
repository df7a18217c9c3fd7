use serde::Serialize;
use std::{collections::BTreeMap, fmt};

///
/// ErrorTree
///
/// Route-keyed aggregation of validation failures. Local failures land in
/// `errors`; failures from nested nodes are grouped under their route key so
/// a report reads `entity.contact: duplicate field key 'email'`.
///

#[derive(Clone, Debug, Default, Serialize)]
pub struct ErrorTree {
    errors: Vec<String>,
    children: BTreeMap<String, ErrorTree>,
}

impl ErrorTree {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failure at the current route.
    pub fn add(&mut self, err: impl ToString) {
        self.errors.push(err.to_string());
    }

    /// Record a failure under a child route.
    pub fn add_at(&mut self, route: impl Into<String>, err: impl ToString) {
        self.children.entry(route.into()).or_default().add(err);
    }

    /// Graft a subtree under a child route, discarding empty subtrees.
    pub fn merge_at(&mut self, route: impl Into<String>, tree: Self) {
        if tree.is_empty() {
            return;
        }

        let entry = self.children.entry(route.into()).or_default();
        entry.errors.extend(tree.errors);
        for (route, child) in tree.children {
            entry.merge_at(route, child);
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty() && self.children.values().all(Self::is_empty)
    }

    /// Total number of failures across all routes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len() + self.children.values().map(Self::len).sum::<usize>()
    }

    pub fn result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }

    // flatten
    // depth-first (route, message) pairs in route order
    fn flatten(&self, prefix: &str, out: &mut Vec<(String, String)>) {
        for err in &self.errors {
            out.push((prefix.to_string(), err.clone()));
        }
        for (route, child) in &self.children {
            let path = if prefix.is_empty() {
                route.clone()
            } else {
                format!("{prefix}.{route}")
            };
            child.flatten(&path, out);
        }
    }
}

impl fmt::Display for ErrorTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut lines = Vec::new();
        self.flatten("", &mut lines);

        for (i, (route, err)) in lines.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            if route.is_empty() {
                write!(f, "{err}")?;
            } else {
                write!(f, "{route}: {err}")?;
            }
        }

        Ok(())
    }
}

impl std::error::Error for ErrorTree {}

///
/// err!
/// Push a formatted failure onto an [`ErrorTree`].
///

#[macro_export]
macro_rules! err {
    ($errs:expr, $($arg:tt)*) => {
        $errs.add(format!($($arg)*))
    };
}

///
/// TESTS
///
