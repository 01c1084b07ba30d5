/// Effective list limit: command flag, then global flag, then config.
#[must_use]
pub fn effective_limit(local: Option<u32>, global: Option<u32>, fallback: u32) -> usize {
    usize::try_from(local.or(global).unwrap_or(fallback)).unwrap_or(usize::MAX)
}

#[cfg(test)]
mod tests {
    use super::effective_limit;

    #[test]
    fn precedence_is_local_global_fallback() {
        assert_eq!(effective_limit(Some(5), Some(10), 20), 5);
        assert_eq!(effective_limit(None, Some(10), 20), 10);
        assert_eq!(effective_limit(None, None, 20), 20);
    }
}
