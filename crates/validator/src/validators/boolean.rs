//! Boolean validators

use crate::foundation::Value;

crate::validator! {
    /// Accepts `true` or `false`.
    pub BooleanValidator expects "boolean";
    parse(input) -> bool {
        match input {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }
    fn boolean();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Schema;

    #[test]
    fn test_boolean() {
        assert_eq!(boolean().parse(&Value::Bool(true)), Ok(true));
        assert_eq!(boolean().parse(&Value::Bool(false)), Ok(false));
    }

    #[test]
    fn test_boolean_rejects_truthy_values() {
        assert!(boolean().parse(&Value::from(1)).is_err());
        assert!(boolean().parse(&Value::from("true")).is_err());
        assert!(boolean().parse(&Value::Null).is_err());
    }
}
