use crate::base;

pub fn charset_from_config(config: &base::Config) -> base::Charset {
    let mut charset = base::Charset::default();
    if config.use_unicode_symbols {
        charset = charset.with_unicode()
    }
    if config.use_colored_output {
        charset = charset.with_color()
    }
    charset
}

/// Returns true if `s` matches any of the wildcard `patterns`, ignoring case.
pub fn matches_any<T>(s: &str, patterns: &[T]) -> bool
where
    T: AsRef<str>,
{
    let s = s.to_lowercase();
    patterns
        .iter()
        .map(|p| wildmatch::WildMatch::new(&p.as_ref().to_lowercase()))
        .any(|p| p.matches(&s))
}
