use tracing::info;

use crate::validation::{self, LoginErrors, LoginForm, SignupErrors, SignupForm};

/// Signed-in flag for the current session. No credentials are checked: a
/// form that passes validation signs the user in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Session {
    authenticated: bool,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn login(&mut self, form: &LoginForm) -> Result<(), LoginErrors> {
        validation::validate_login(form)?;
        self.authenticated = true;
        info!("signed in");
        Ok(())
    }

    pub fn signup(&mut self, form: &SignupForm, current_year: i32) -> Result<(), SignupErrors> {
        validation::validate_signup(form, current_year)?;
        self.authenticated = true;
        info!(name = %form.name, "account created");
        Ok(())
    }

    pub fn logout(&mut self) {
        self.authenticated = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_login_leaves_session_signed_out() {
        let mut session = Session::default();
        let form = LoginForm {
            email: "not-an-email".to_string(),
            password: "secret1".to_string(),
        };
        assert!(session.login(&form).is_err());
        assert!(!session.is_authenticated());
    }

    #[test]
    fn login_then_logout() {
        let mut session = Session::default();
        let form = LoginForm {
            email: "riya@alumni.edu".to_string(),
            password: "anything".to_string(),
        };
        session.login(&form).unwrap();
        assert!(session.is_authenticated());
        session.logout();
        assert!(!session.is_authenticated());
    }

    #[test]
    fn signup_signs_in() {
        let mut session = Session::default();
        let form = SignupForm {
            name: "Riya Sen".to_string(),
            email: "riya@alumni.edu".to_string(),
            password: "secret1".to_string(),
            confirm_password: "secret1".to_string(),
            graduation_year: Some(2020),
            degree: "MBA".to_string(),
            company: "Initech".to_string(),
        };
        session.signup(&form, 2025).unwrap();
        assert!(session.is_authenticated());
    }
}
