use std::fmt;

use postman_core::Environment;

/// The variable listing printed by the binary.
pub struct Report<'a>(pub &'a Environment);

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let env = self.0;
        writeln!(f, "There are {} env values in {}", env.values.len(), env.name)?;
        for var in &env.values {
            writeln!(f, "Variable: {}, Initial Value: {}", var.key, var.value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_every_variable_in_order() {
        let env: Environment = serde_json::from_str(
            r#"{"id":"e","name":"Prod","owner":"u1","createdAt":"t1","updatedAt":"t2","isPublic":false,
                "values":[
                    {"key":"HOST","value":"example.com","enabled":true},
                    {"key":"PORT","value":443,"enabled":true},
                    {"key":"TOKEN","value":null,"enabled":false}
                ]}"#,
        )
        .unwrap();

        assert_eq!(
            Report(&env).to_string(),
            "There are 3 env values in Prod\n\
             Variable: HOST, Initial Value: example.com\n\
             Variable: PORT, Initial Value: 443\n\
             Variable: TOKEN, Initial Value: null\n"
        );
    }

    #[test]
    fn empty_environment_prints_only_the_header() {
        let env: Environment = serde_json::from_str(
            r#"{"id":"e","name":"Empty","owner":"u1","createdAt":"t1","updatedAt":"t2","isPublic":true,"values":[]}"#,
        )
        .unwrap();
        assert_eq!(Report(&env).to_string(), "There are 0 env values in Empty\n");
    }
}
