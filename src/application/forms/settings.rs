use pagewright_api_types::GlobalSettings;

use super::FormError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsField {
    SiteName(String),
    Logo(String),
    Favicon(String),
    ContactEmail(String),
    /// Empty clears the assignment.
    HeaderMenu(String),
    FooterMenu(String),
}

impl SettingsField {
    pub const NAMES: [&'static str; 6] = [
        "site_name",
        "logo",
        "favicon",
        "contact_email",
        "header_menu_id",
        "footer_menu_id",
    ];

    pub fn parse(name: &str, value: impl Into<String>) -> Result<Self, FormError> {
        let value = value.into();
        Ok(match name {
            "site_name" => SettingsField::SiteName(value),
            "logo" => SettingsField::Logo(value),
            "favicon" => SettingsField::Favicon(value),
            "contact_email" => SettingsField::ContactEmail(value),
            "header_menu_id" => SettingsField::HeaderMenu(value),
            "footer_menu_id" => SettingsField::FooterMenu(value),
            _ => {
                return Err(FormError::UnknownSetting {
                    field: name.to_string(),
                });
            }
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsForm {
    settings: GlobalSettings,
}

impl SettingsForm {
    pub fn new(settings: GlobalSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &GlobalSettings {
        &self.settings
    }

    pub fn set(&mut self, field: SettingsField) {
        let settings = &mut self.settings;
        match field {
            SettingsField::SiteName(value) => settings.site_name = value,
            SettingsField::Logo(value) => settings.logo = value,
            SettingsField::Favicon(value) => settings.favicon = value,
            SettingsField::ContactEmail(value) => settings.contact_email = value,
            SettingsField::HeaderMenu(value) => settings.header_menu_id = non_empty(value),
            SettingsField::FooterMenu(value) => settings.footer_menu_id = non_empty(value),
        }
    }

    pub fn to_payload(&self) -> Result<GlobalSettings, FormError> {
        if self.settings.site_name.trim().is_empty() {
            return Err(FormError::SiteNameRequired);
        }
        Ok(self.settings.clone())
    }
}

fn non_empty(value: String) -> Option<String> {
    (!value.trim().is_empty()).then_some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_are_set_by_name() {
        let mut form = SettingsForm::new(GlobalSettings {
            site_name: "Acme".into(),
            header_menu_id: Some("m1".into()),
            ..GlobalSettings::default()
        });
        form.set(SettingsField::parse("contact_email", "hi@acme.test").expect("field"));
        form.set(SettingsField::parse("header_menu_id", "").expect("field"));

        let payload = form.to_payload().expect("payload");
        assert_eq!(payload.contact_email, "hi@acme.test");
        assert!(payload.header_menu_id.is_none());
        assert!(matches!(
            SettingsField::parse("theme", "dark"),
            Err(FormError::UnknownSetting { .. })
        ));
    }

    #[test]
    fn site_name_is_required() {
        let form = SettingsForm::default();
        assert!(matches!(form.to_payload(), Err(FormError::SiteNameRequired)));
    }
}
