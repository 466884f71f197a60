//! Literal syntax for arrays and objects.

/// Build an array value from element expressions.
///
/// ```
/// use jsany_core::array;
///
/// let list = array![1, "two", 3.0];
/// assert_eq!(list.to_string(), "[1, two, 3]");
/// ```
#[macro_export]
macro_rules! array {
    () => {
        $crate::Value::Array(::std::vec::Vec::new())
    };
    ($($item:expr),+ $(,)?) => {
        $crate::Value::Array(::std::vec![$($crate::Value::from($item)),+])
    };
}

/// Build an object value from `key => value` pairs. Keys may be strings or
/// integers; integers are stored under their decimal form.
///
/// ```
/// use jsany_core::object;
///
/// let point = object! { "x" => 1, "y" => 2, 7 => "seven" };
/// assert_eq!(point.get("7").unwrap().as_str(), Some("seven"));
/// ```
#[macro_export]
macro_rules! object {
    () => {
        $crate::Value::Object(::std::collections::HashMap::new())
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut fields = ::std::collections::HashMap::new();
        $(
            fields.insert(
                $crate::ObjectKey::into_object_key($key),
                $crate::Value::from($value),
            );
        )+
        $crate::Value::Object(fields)
    }};
}
