// src/macros.rs
//
// String shorthands used throughout the catalog code, where owned
// `String`s dominate (record fields, extracted text).

/// `s!()` → empty `String`; `s!(expr)` → `String::from(expr)`.
#[macro_export]
macro_rules! s {
    () => {
        ::std::string::String::new()
    };
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

/// Concatenate any number of string-ish expressions into one `String`,
/// e.g. the `name_region` identity key.
#[macro_export]
macro_rules! join {
    ($first:expr $(, $rest:expr)+ $(,)?) => {{
        let mut s = ::std::string::String::from($first);
        $(
            s.push_str($rest);
        )+
        s
    }};
}
