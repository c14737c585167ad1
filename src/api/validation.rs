use crate::error::ApiError;
use serde_json::Value;

/// Checks the raw body for required keys in declaration order and reports the
/// first one that is absent (or JSON null). Empty strings pass — presence is
/// what is checked, not content. Runs before the body is converted into its
/// typed request DTO.
pub fn require_fields(body: &Value, names: &[&str]) -> Result<(), ApiError> {
    for name in names {
        match body.get(*name) {
            None | Some(Value::Null) => return Err(ApiError::MissingField((*name).to_string())),
            Some(_) => {}
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn missing_field(result: Result<(), ApiError>) -> String {
        match result {
            Err(ApiError::MissingField(name)) => name,
            other => panic!("expected MissingField, got {:?}", other),
        }
    }

    #[test]
    fn passes_when_all_fields_present() {
        let body = json!({"initDate": "2030-01-01", "endDate": "2030-01-02", "description": "x"});
        assert!(require_fields(&body, &["initDate", "endDate", "description"]).is_ok());
    }

    #[test]
    fn reports_first_missing_field_in_declaration_order() {
        let body = json!({"description": "x"});
        assert_eq!(missing_field(require_fields(&body, &["initDate", "endDate", "description"])), "initDate");

        let body = json!({"initDate": "2030-01-01"});
        assert_eq!(missing_field(require_fields(&body, &["initDate", "endDate", "description"])), "endDate");
    }

    #[test]
    fn null_counts_as_missing_but_empty_string_passes() {
        let body = json!({"accept": null});
        assert_eq!(missing_field(require_fields(&body, &["accept"])), "accept");

        let body = json!({"description": ""});
        assert!(require_fields(&body, &["description"]).is_ok());
    }
}
