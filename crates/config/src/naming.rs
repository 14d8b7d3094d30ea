//! Section names inferred from destination types.

/// Lower-cases the first character of `name` and leaves the rest untouched.
///
/// `"Server"` becomes `"server"`, `"URL"` becomes `"uRL"`.
#[must_use]
pub fn lc_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Infers the section name for `T` from its type name.
///
/// Module path and generic arguments are dropped before folding, so
/// `app::sections::Server` and `app::sections::Server<u8>` both map to
/// `server`.
#[must_use]
pub fn section_name<T: ?Sized>() -> String {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    lc_first(base.rsplit("::").next().unwrap_or(base))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Server;
    struct MongoDB;
    #[allow(clippy::upper_case_acronyms)]
    struct URL;
    struct Wrapper<T>(std::marker::PhantomData<T>);

    #[test]
    fn test_lc_first() {
        assert_eq!(lc_first("Server"), "server");
        assert_eq!(lc_first("MongoDB"), "mongoDB");
        assert_eq!(lc_first("URL"), "uRL");
        assert_eq!(lc_first("a"), "a");
        assert_eq!(lc_first("A"), "a");
        assert_eq!(lc_first(""), "");
    }

    #[test]
    fn test_lc_first_unicode() {
        assert_eq!(lc_first("Ärger"), "ärger");
        assert_eq!(lc_first("ÉTÉ"), "éTÉ");
        assert_eq!(lc_first("日本"), "日本");
    }

    #[test]
    fn test_section_name_from_type() {
        assert_eq!(section_name::<Server>(), "server");
        assert_eq!(section_name::<MongoDB>(), "mongoDB");
        assert_eq!(section_name::<URL>(), "uRL");
    }

    #[test]
    fn test_section_name_strips_generics() {
        assert_eq!(section_name::<Wrapper<Server>>(), "wrapper");
    }
}
