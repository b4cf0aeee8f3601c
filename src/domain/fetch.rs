/// State of a collaborator lookup the UI is waiting on.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Fetch<T> {
    /// Not resolved yet. Renders as an empty placeholder.
    #[default]
    Pending,
    Ready(T),
    /// The lookup failed. Display falls back as if no value was returned.
    Failed(String),
}

impl<T> Fetch<T> {
    pub fn from_result(result: Result<T, String>) -> Self {
        match result {
            Ok(value) => Fetch::Ready(value),
            Err(e) => Fetch::Failed(e),
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Fetch::Pending)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Fetch::Failed(_))
    }

    /// The resolved value, if any.
    pub fn ready(&self) -> Option<&T> {
        match self {
            Fetch::Ready(value) => Some(value),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_pending() {
        let fetch: Fetch<u32> = Fetch::default();
        assert!(fetch.is_pending());
        assert_eq!(fetch.ready(), None);
    }

    #[test]
    fn test_from_result() {
        assert_eq!(Fetch::from_result(Ok::<_, String>(7)).ready(), Some(&7));

        let failed: Fetch<u32> = Fetch::from_result(Err("timeout".to_string()));
        assert!(failed.is_failed());
        assert_eq!(failed.ready(), None);
    }
}
