//! 세션 미들웨어
//!
//! 모든 요청에서 세션 쿠키를 해석해 현재 사용자를 결정합니다.

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
};
use crate::middlewares::session_inner::SessionMiddlewareService;

/// `App::wrap`으로 전역 등록하는 세션 미들웨어
///
/// `web::Data<AppContext>`가 `app_data`로 등록되어 있어야 합니다.
/// 없으면 모든 요청을 익명으로 처리합니다.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionMiddleware;

impl<S, B> Transform<S, ServiceRequest> for SessionMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = SessionMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(SessionMiddlewareService {
            service: Rc::new(service),
        }))
    }
}
