use pagewright_api_types::{UserRecord, UserRequest, UserRole};

use super::{FormError, password_too_short};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: UserRole,
    editing: bool,
}

impl UserForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_user(user: &UserRecord) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            password: String::new(),
            role: user.role,
            editing: true,
        }
    }

    pub fn to_payload(&self) -> Result<UserRequest, FormError> {
        if self.name.trim().is_empty() || self.email.trim().is_empty() {
            return Err(FormError::NameAndEmailRequired);
        }
        let blank_password = self.password.trim().is_empty();
        if !self.editing && blank_password {
            return Err(FormError::PasswordRequired);
        }
        if !blank_password && password_too_short(&self.password) {
            return Err(FormError::PasswordTooShort);
        }

        Ok(UserRequest {
            name: self.name.clone(),
            email: self.email.clone(),
            password: (!blank_password).then(|| self.password.clone()),
            role: self.role,
        })
    }
}
