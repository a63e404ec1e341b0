/// Builds a [`Document`](crate::Document) from section and entry literals.
///
/// Use `""` as the section name for the main section.
///
/// ```rust
/// use ini_doc::ini;
///
/// let doc = ini!({
///     "": { "a": "a" },
///     "foo": { "bar": "b", "baz": "ā" }
/// });
/// assert_eq!(doc.to_string(), "a=a\n[foo]\nbar=b\nbaz=ā\n");
/// ```
#[macro_export]
macro_rules! ini {
    // Handle empty document
    ({}) => {
        $crate::Document::new()
    };

    ({ $($section:literal : { $($key:literal : $value:expr),* $(,)? }),* $(,)? }) => {{
        let mut document = $crate::Document::new();
        $(
            #[allow(unused_variables)]
            let section = document.get_or_create_section($section);
            $(
                section.set_value($key, $value);
            )*
        )*
        document
    }};
}
