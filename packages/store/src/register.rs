use api::{Action, ApiError, Backend, RegisterRequest, UserRole};

const MIN_NAME_CHARS: usize = 2;
const MIN_PASSWORD_CHARS: usize = 6;

/// Sign-up page state. Fields are edited in place by the view.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub role: Option<UserRole>,
    pub agreed: bool,
    submitting: bool,
    error: Option<String>,
    notice: Option<String>,
}

impl RegisterForm {
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Success message left after the form resets.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// First failing rule, in the order the page lists them.
    pub fn validate(&self) -> Result<UserRole, &'static str> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err("Name is required");
        }
        if name.chars().count() < MIN_NAME_CHARS {
            return Err("Name must be at least 2 characters");
        }
        if self.email.trim().is_empty() {
            return Err("Email is required");
        }
        let Some(role) = self.role else {
            return Err("Please select a user type");
        };
        if !self.agreed {
            return Err("You must accept the terms and conditions");
        }
        if self.password != self.confirm_password {
            return Err("Passwords do not match");
        }
        if self.password.chars().count() < MIN_PASSWORD_CHARS {
            return Err("Password must be at least 6 characters");
        }
        Ok(role)
    }

    pub fn begin_submit(&mut self) -> Option<RegisterRequest> {
        if self.submitting {
            return None;
        }
        self.notice = None;
        let role = match self.validate() {
            Ok(role) => role,
            Err(message) => {
                self.error = Some(message.to_string());
                return None;
            }
        };
        self.submitting = true;
        self.error = None;
        Some(RegisterRequest {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
            confirm_password: self.confirm_password.clone(),
            agreed: self.agreed,
            user_type: role.code(),
        })
    }

    /// Returns `true` on success.
    pub fn finish_submit(&mut self, result: Result<(), ApiError>) -> bool {
        self.submitting = false;
        match result {
            Ok(()) => {
                tracing::info!("registration accepted");
                *self = Self {
                    notice: Some("Registration successful. You can now sign in.".to_string()),
                    ..Self::default()
                };
                true
            }
            Err(err) => {
                tracing::error!(error = %err, "registration failed");
                self.error = Some(err.describe(
                    Action::Register,
                    "account",
                    Some("This email address is already in use."),
                ));
                false
            }
        }
    }

    pub async fn submit(&mut self, backend: &impl Backend) -> bool {
        let Some(request) = self.begin_submit() else {
            return false;
        };
        let result = api::register(backend, &request).await;
        self.finish_submit(result)
    }
}
