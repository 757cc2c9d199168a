//! SessionMiddleware 세션 해석 로직
use std::rc::Rc;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::{web, Error, HttpMessage};
use futures_util::future::LocalBoxFuture;
use crate::core::AppContext;
use crate::domain::models::auth::{AuthenticatedUser, SessionContext};
use crate::errors::AppResult;

/// 실제 세션 해석을 수행하는 서비스
pub struct SessionMiddlewareService<S> {
    pub service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for SessionMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();

        Box::pin(async move {
            if let Some(ctx) = req.app_data::<web::Data<AppContext>>().cloned() {
                match resolve_identity(&req, &ctx).await {
                    Ok(Some((session, user))) => {
                        if let Some(user) = user {
                            log::debug!("세션 인증: 사용자 ID {}", user.user_id().unwrap_or_default());
                            req.extensions_mut().insert(user);
                        }
                        req.extensions_mut().insert(session);
                    }
                    Ok(None) => {}
                    Err(e) => {
                        // 저장소 장애 시에도 익명으로 계속 진행합니다.
                        log::warn!("세션 해석 실패, 익명으로 처리: {}", e);
                    }
                }
            }

            service.call(req).await
        })
    }
}

/// 쿠키 → 세션 → 사용자 순서로 해석합니다.
///
/// 세션은 있지만 사용자가 사라졌으면 세션만 반환합니다.
async fn resolve_identity(
    req: &ServiceRequest,
    ctx: &AppContext,
) -> AppResult<Option<(SessionContext, Option<AuthenticatedUser>)>> {
    let Some(cookie) = req.cookie(ctx.sessions.cookie_name()) else {
        return Ok(None);
    };

    let Some(session) = ctx.sessions.resolve(&cookie).await? else {
        return Ok(None);
    };

    let user = match session.data.user_id.as_deref() {
        Some(user_id) => {
            let user = ctx.user_service.find_by_id(user_id).await?;
            if user.is_none() {
                log::debug!("세션의 사용자가 존재하지 않음: {}", user_id);
            }
            user.map(AuthenticatedUser)
        }
        None => None,
    };

    Ok(Some((session, user)))
}
