use pagewright_api_types::{ProfileUpdateRequest, SessionUser};

use super::{FormError, password_too_short};

/// The signed-in user's own name and password.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    current_name: String,
}

impl ProfileForm {
    pub fn new(user: &SessionUser) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            current_name: user.name.clone(),
            ..Self::default()
        }
    }

    /// Only the fields that changed; `NoChanges` when nothing did.
    pub fn to_update(&self) -> Result<ProfileUpdateRequest, FormError> {
        if !self.password.is_empty() && password_too_short(&self.password) {
            return Err(FormError::PasswordTooShort);
        }
        if !self.password.is_empty() && self.password != self.confirm_password {
            return Err(FormError::PasswordMismatch);
        }

        let name = self.name.trim();
        let update = ProfileUpdateRequest {
            name: (!name.is_empty() && self.name != self.current_name).then(|| name.to_string()),
            password: Some(self.password.trim())
                .filter(|password| !password.is_empty())
                .map(str::to_string),
        };

        if update == ProfileUpdateRequest::default() {
            return Err(FormError::NoChanges);
        }
        Ok(update)
    }
}

#[cfg(test)]
mod tests {
    use pagewright_api_types::UserRole;
    use uuid::Uuid;

    use super::*;

    fn user() -> SessionUser {
        SessionUser {
            id: Uuid::nil(),
            name: "Ada".into(),
            email: "ada@example.com".into(),
            role: UserRole::Editor,
        }
    }

    #[test]
    fn unchanged_profile_has_nothing_to_save() {
        let form = ProfileForm::new(&user());
        assert!(matches!(form.to_update(), Err(FormError::NoChanges)));
    }

    #[test]
    fn only_changed_fields_are_sent() {
        let mut form = ProfileForm::new(&user());
        form.name = " Ada Lovelace ".into();
        let update = form.to_update().expect("update");
        assert_eq!(update.name.as_deref(), Some("Ada Lovelace"));
        assert!(update.password.is_none());
    }

    #[test]
    fn password_rules() {
        let mut form = ProfileForm::new(&user());
        form.password = "short".into();
        assert!(matches!(form.to_update(), Err(FormError::PasswordTooShort)));

        form.password = "longenough".into();
        form.confirm_password = "different".into();
        assert!(matches!(form.to_update(), Err(FormError::PasswordMismatch)));

        form.confirm_password = "longenough".into();
        let update = form.to_update().expect("update");
        assert_eq!(update.password.as_deref(), Some("longenough"));
        assert!(update.name.is_none());
    }
}
