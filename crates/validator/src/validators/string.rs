//! String validators

use crate::foundation::Value;

crate::validator! {
    /// Accepts any string, returning an owned copy.
    pub StringValidator expects "string";
    parse(input) -> String {
        match input {
            Value::String(s) => Some(s.clone()),
            _ => None,
        }
    }
    fn string();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Schema;

    #[test]
    fn test_string() {
        assert_eq!(string().parse(&Value::from("dock")), Ok("dock".to_owned()));
        assert_eq!(string().parse(&Value::from("")), Ok(String::new()));
    }

    #[test]
    fn test_string_does_not_coerce() {
        let err = string().parse(&Value::from(42)).unwrap_err();
        assert_eq!(err.to_string(), "expected string, got number");
        assert!(string().parse_absent().is_err());
    }
}
