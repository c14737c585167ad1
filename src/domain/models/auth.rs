use serde::{Deserialize, Serialize};
use crate::error::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Participant,
    Manager,
    Supervisor,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Participant => "Participant",
            Role::Manager => "Manager",
            Role::Supervisor => "Supervisor",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub role: Role,
    pub iat: usize,
    pub exp: usize,
}

impl Claims {
    /// Role gate: exact membership in the allowed set, 403 otherwise.
    pub fn require(&self, allowed: &[Role]) -> Result<(), ApiError> {
        if allowed.contains(&self.role) {
            Ok(())
        } else {
            Err(ApiError::Forbidden)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gate_admits_listed_role() {
        let claims = Claims { sub: "p1".into(), role: Role::Participant, iat: 0, exp: 0 };
        assert!(claims.require(&[Role::Participant]).is_ok());
        assert!(claims.require(&[Role::Participant, Role::Supervisor]).is_ok());
    }

    #[test]
    fn gate_rejects_role_outside_allowed_set() {
        let claims = Claims { sub: "m1".into(), role: Role::Manager, iat: 0, exp: 0 };
        let err = claims.require(&[Role::Participant]).unwrap_err();
        assert!(matches!(err, ApiError::Forbidden));
    }
}
