//! Utility-class conflict resolution.
//!
//! The merger hands a [`ClassMerger`] every class token in priority order,
//! already deduplicated. The class merger drops tokens that a later token
//! overrides and returns the survivors in their original relative order.

mod tailwind;

pub use tailwind::TailwindMerger;

/// A pluggable class conflict policy.
///
/// Implementations must be pure: the same input always yields the same
/// output, and any lookup tables are read-only once built.
pub trait ClassMerger: Send + Sync {
    /// Drop overridden tokens from `tokens` (lowest priority first).
    fn resolve(&self, tokens: Vec<String>) -> Vec<String>;
}

/// Keeps every token. Deduplication already happened upstream.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopMerger;

impl ClassMerger for NoopMerger {
    fn resolve(&self, tokens: Vec<String>) -> Vec<String> {
        tokens
    }
}

impl<F> ClassMerger for F
where
    F: Fn(Vec<String>) -> Vec<String> + Send + Sync,
{
    fn resolve(&self, tokens: Vec<String>) -> Vec<String> {
        self(tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(s: &str) -> Vec<String> {
        s.split_whitespace().map(String::from).collect()
    }

    #[test]
    fn test_noop_keeps_everything() {
        assert_eq!(
            NoopMerger.resolve(tokens("bg-red-500 bg-blue-500")),
            tokens("bg-red-500 bg-blue-500")
        );
    }

    #[test]
    fn test_closure_merger() {
        let drop_hidden = |tokens: Vec<String>| -> Vec<String> {
            tokens.into_iter().filter(|t| t != "hidden").collect()
        };
        assert_eq!(drop_hidden.resolve(tokens("flex hidden")), tokens("flex"));
    }
}
