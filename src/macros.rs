/// Builds a [`LuaValue`](crate::LuaValue) tree from JSON-like syntax.
///
/// `nil`, `true` and `false` map to the obvious values, `[ .. ]` builds a
/// formatted sequence, `{ "key": value, .. }` builds an untyped object, and
/// any other expression goes through [`to_value`](crate::to_value).
///
/// ```rust
/// use luon::{lua, render_value};
///
/// let value = lua!({
///     "title": "demo",
///     "size": [120, 40],
/// });
/// assert_eq!(
///     render_value(&value).unwrap(),
///     "{\n  title = \"demo\";\n  size = {\n    120,\n    40\n  };\n}"
/// );
/// ```
#[macro_export]
macro_rules! lua {
    // Handle nil
    (nil) => {
        $crate::LuaValue::Nil
    };

    // Handle true
    (true) => {
        $crate::LuaValue::Bool(true)
    };

    // Handle false
    (false) => {
        $crate::LuaValue::Bool(false)
    };

    // Handle empty sequence
    ([]) => {
        $crate::LuaValue::seq(vec![])
    };

    // Handle non-empty sequence
    ([ $($elem:tt),* $(,)? ]) => {
        $crate::LuaValue::seq(vec![$($crate::lua!($elem)),*])
    };

    // Handle empty object
    ({}) => {
        $crate::LuaValue::Object($crate::LuaObject::new())
    };

    // Handle non-empty object
    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::LuaObject::new();
        $(
            object.insert($key.to_string(), $crate::lua!($value));
        )*
        $crate::LuaValue::Object(object)
    }};

    // Fallback for any other expression
    ($s:expr) => {{
        $crate::to_value(&$s).unwrap_or($crate::LuaValue::Nil)
    }};
}

#[cfg(test)]
mod tests {
    use crate::{LuaObject, LuaValue, Number};

    #[test]
    fn test_lua_macro_primitives() {
        assert_eq!(lua!(nil), LuaValue::Nil);
        assert_eq!(lua!(true), LuaValue::Bool(true));
        assert_eq!(lua!(false), LuaValue::Bool(false));
        assert_eq!(lua!(42), LuaValue::Number(Number::Integer(42)));
        assert_eq!(lua!(3.5), LuaValue::Number(Number::Float(3.5)));
        assert_eq!(lua!("hello"), LuaValue::String("hello".to_string()));
    }

    #[test]
    fn test_lua_macro_sequences() {
        assert_eq!(lua!([]), LuaValue::seq(vec![]));

        let seq = lua!([1, 2, 3]);
        match seq {
            LuaValue::Seq { items, formatted } => {
                assert!(formatted);
                assert_eq!(items.len(), 3);
                assert_eq!(items[0], LuaValue::from(1));
                assert_eq!(items[2], LuaValue::from(3));
            }
            _ => panic!("Expected sequence"),
        }
    }

    #[test]
    fn test_lua_macro_objects() {
        assert_eq!(lua!({}), LuaValue::Object(LuaObject::new()));

        let obj = lua!({
            "name": "Alice",
            "age": 30
        });

        match obj {
            LuaValue::Object(obj) => {
                assert_eq!(obj.class, None);
                assert_eq!(obj.props.len(), 2);
                assert_eq!(obj.props.get("name"), Some(&LuaValue::from("Alice")));
                assert_eq!(obj.props.get("age"), Some(&LuaValue::from(30)));
            }
            _ => panic!("Expected object"),
        }
    }

    #[test]
    fn test_lua_macro_nesting() {
        let value = lua!({
            "inner": { "flag": true },
            "items": [nil, "x"],
        });
        let obj = value.as_object().unwrap();
        assert!(obj.props.get("inner").unwrap().is_object());
        assert_eq!(
            obj.props.get("items").unwrap().as_seq().unwrap()[0],
            LuaValue::Nil
        );
    }
}
