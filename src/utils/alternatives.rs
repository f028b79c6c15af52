//! Ordered "first match wins" dispatch.
//!
//! A [`FirstMatch`] holds a list of strategies that each inspect the same
//! input. A strategy answers in one of three ways:
//!
//! * `Ok(None)` - the input is not in this strategy's format; try the next.
//! * `Ok(Some(value))` - the input was recognised and parsed.
//! * `Err(error)` - the input is in this strategy's format but malformed.
//!   Evaluation stops and the error is returned to the caller.
//!
//! Strategies are tried strictly in insertion order.

use std::fmt;

type Strategy<'a, T, E> = Box<dyn Fn(&str) -> Result<Option<T>, E> + 'a>;

pub struct FirstMatch<'a, T, E> {
    strategies: Vec<(&'static str, Strategy<'a, T, E>)>,
}

impl<'a, T, E> FirstMatch<'a, T, E> {
    pub fn new() -> Self {
        Self {
            strategies: Vec::new(),
        }
    }

    /// Append a named strategy to the end of the chain.
    pub fn or<F>(mut self, name: &'static str, strategy: F) -> Self
    where
        F: Fn(&str) -> Result<Option<T>, E> + 'a,
    {
        self.strategies.push((name, Box::new(strategy)));
        self
    }

    /// Run the chain against `input`.
    pub fn apply(&self, input: &str) -> Result<Option<T>, E> {
        for (name, strategy) in &self.strategies {
            if let Some(value) = strategy(input)? {
                log::trace!("strategy {} matched", name);
                return Ok(Some(value));
            }
        }
        Ok(None)
    }

    /// Names of the strategies in evaluation order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.strategies.iter().map(|(name, _)| *name)
    }
}

impl<T, E> Default for FirstMatch<'_, T, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, E> fmt::Debug for FirstMatch<'_, T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prefixed(prefix: &'static str) -> impl Fn(&str) -> Result<Option<String>, String> {
        move |input: &str| {
            Ok(input
                .strip_prefix(prefix)
                .map(|rest| format!("{}{}", prefix, rest.len())))
        }
    }

    #[test]
    fn test_first_success_wins() {
        let chain = FirstMatch::new()
            .or("a", prefixed("a"))
            .or("ab", prefixed("ab"));
        assert_eq!(chain.apply("abc").unwrap(), Some("a2".to_string()));
    }

    #[test]
    fn test_no_match_is_none() {
        let chain = FirstMatch::new().or("a", prefixed("a"));
        assert_eq!(chain.apply("zzz").unwrap(), None);
    }

    #[test]
    fn test_error_short_circuits() {
        let chain: FirstMatch<String, String> = FirstMatch::new()
            .or("broken", |_: &str| Err("boom".to_string()))
            .or("never", |_: &str| panic!("later strategies must not run"));
        assert_eq!(chain.apply("x"), Err("boom".to_string()));
    }

    #[test]
    fn test_names_keep_order() {
        let chain = FirstMatch::new()
            .or("first", prefixed("1"))
            .or("second", prefixed("2"));
        assert_eq!(chain.names().collect::<Vec<_>>(), vec!["first", "second"]);
    }
}
