// ============================================================================
// LOGIN VIEWMODEL - Formulario de acceso
// ============================================================================

use std::rc::Rc;

use crate::error::AppError;
use crate::models::AuthUser;
use crate::services::AuthService;
use crate::state::{Navigator, Observable, ReactiveState, Route, SubscriptionId};

#[derive(Clone, Debug, PartialEq, Default)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    pub loading: bool,
    pub error: Option<String>,
}

#[derive(Clone)]
pub struct LoginViewModel {
    form: ReactiveState<LoginForm>,
    auth: AuthService,
    navigator: Rc<dyn Navigator>,
}

impl LoginViewModel {
    pub fn new(auth: AuthService, navigator: Rc<dyn Navigator>) -> Self {
        Self {
            form: ReactiveState::new(LoginForm::default()),
            auth,
            navigator,
        }
    }

    pub fn form(&self) -> LoginForm {
        self.form.get()
    }

    pub fn subscribe<F: Fn() + 'static>(&self, callback: F) -> SubscriptionId {
        self.form.subscribe(callback)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.form.unsubscribe(id);
    }

    pub fn set_username(&self, username: impl Into<String>) {
        let username = username.into();
        self.form.update(|form| form.username = username);
    }

    pub fn set_password(&self, password: impl Into<String>) {
        let password = password.into();
        self.form.update(|form| form.password = password);
    }

    /// Valida, autentica y navega al dashboard. El error queda en el
    /// formulario; nunca se navega si falla.
    pub async fn submit(&self) -> Result<AuthUser, AppError> {
        let LoginForm { username, password, loading, .. } = self.form();
        if loading {
            return Err(AppError::Validation("A login request is already in progress".into()));
        }

        let username = username.trim().to_string();
        if username.is_empty() || password.is_empty() {
            let err = AppError::Validation("Username and password are required".into());
            self.form.update(|form| form.error = Some(err.user_message()));
            return Err(err);
        }

        self.form.update(|form| {
            form.loading = true;
            form.error = None;
        });

        let result = self.auth.login(&username, &password).await;

        match &result {
            Ok(_) => {
                self.form.update(|form| {
                    form.loading = false;
                    form.password.clear();
                });
                self.navigator.navigate(Route::Dashboard);
            }
            Err(e) => {
                let message = e.user_message();
                self.form.update(|form| {
                    form.loading = false;
                    form.error = Some(message);
                });
            }
        }
        result
    }
}

impl Observable for LoginViewModel {
    fn observe(&self, callback: Rc<dyn Fn()>) -> SubscriptionId {
        self.form.observe(callback)
    }

    fn unobserve(&self, id: SubscriptionId) {
        self.form.unobserve(id);
    }
}
