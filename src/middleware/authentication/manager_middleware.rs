use crate::configuration::AuthSettings;
use crate::helpers::JsonResponse;
use crate::middleware::authentication::{init_data::AuthError, method};
use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse},
    error::ErrorUnauthorized,
    Error,
};
use futures::{
    future::{FutureExt, LocalBoxFuture},
    task::{Context, Poll},
};
use std::cell::RefCell;
use std::rc::Rc;

pub struct ManagerMiddleware<S> {
    pub service: Rc<RefCell<S>>,
    pub auth: Rc<AuthSettings>,
}

impl<S, B> Service<ServiceRequest> for ManagerMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = S::Error;
    type Future = LocalBoxFuture<'static, Result<ServiceResponse<B>, Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        if let Ok(service) = self.service.try_borrow_mut() {
            service.poll_ready(ctx)
        } else {
            Poll::Pending
        }
    }

    fn call(&self, mut req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let auth = self.auth.clone();
        async move {
            method::try_init_data(&mut req, &auth)?;
            Ok(req)
        }
        .then(|req: Result<ServiceRequest, AuthError>| async move {
            match req {
                Ok(req) => {
                    let fut = service.borrow_mut().call(req);
                    fut.await
                }
                Err(err) => {
                    // the cause stays in the logs, the client only learns it is unauthorized
                    match err {
                        AuthError::Unconfigured => tracing::error!("rejecting session: {}", err),
                        _ => tracing::warn!("rejecting session: {}", err),
                    }
                    Err(ErrorUnauthorized(
                        JsonResponse::build()
                            .set_msg("Unauthorized")
                            .to_string(),
                    ))
                }
            }
        })
        .boxed_local()
    }
}
