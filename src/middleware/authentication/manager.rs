use crate::configuration::AuthSettings;
use crate::middleware::authentication::ManagerMiddleware;
use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error,
};
use std::cell::RefCell;
use std::future::{ready, Ready};
use std::rc::Rc;

/// Gate for every route that needs an authenticated user.
///
/// Rejects the request with 401 unless the session header validates against
/// the configured bot token.
pub struct Manager {
    auth: Rc<AuthSettings>,
}

impl Manager {
    pub fn new(auth: AuthSettings) -> Self {
        Self {
            auth: Rc::new(auth),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for Manager
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = ManagerMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(ManagerMiddleware {
            service: Rc::new(RefCell::new(service)),
            auth: self.auth.clone(),
        }))
    }
}
