//! Error normalization at the request boundary
//!
//! [`ErrorNormalizer`] guarantees that every failed request leaves the
//! service with the JSON error envelope, whatever raised the failure:
//! - handler errors that are not [`HttpError`] (extractor rejections,
//!   framework errors) are classified as transport failures
//! - bare 4xx/5xx responses without a body (such as the 405 produced by
//!   a resource with no matching method) get an envelope for their status
//! - errors escaping inner services are reclassified as [`HttpError`], which
//!   actix-web renders through the same envelope

use actix_web::{
    body::{BodySize, EitherBody, MessageBody},
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::{Method, StatusCode},
    Error, HttpRequest, ResponseError,
};
use futures_util::future::LocalBoxFuture;
use std::future::{ready, Ready};
use std::rc::Rc;

use crate::handlers::error::HttpError;
use crate::middleware::request_id::RequestId;

/// Middleware rendering all failures as error envelopes
pub struct ErrorNormalizer;

impl<S, B> Transform<S, ServiceRequest> for ErrorNormalizer
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = ErrorNormalizerService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(ErrorNormalizerService {
            service: Rc::new(service),
        }))
    }
}

pub struct ErrorNormalizerService<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for ErrorNormalizerService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        // Owned copy for logging: the router needs sole ownership of the
        // request while the inner service runs.
        let line = RequestLine::of(req.request());

        Box::pin(async move {
            let res = match service.call(req).await {
                Ok(res) => res,
                Err(err) => {
                    let error = HttpError::from_actix(&err);
                    line.log(&error);
                    return Err(error.into());
                }
            };

            let classified = res
                .response()
                .error()
                .map(|err| (HttpError::from_actix(err), err.as_error::<HttpError>().is_some()));

            if let Some((error, rendered)) = classified {
                line.log(&error);
                if rendered {
                    return Ok(res.map_into_left_body());
                }
                return Ok(replace_response(res, &error));
            }

            if needs_envelope(res.status(), res.response().body().size()) {
                let error = HttpError::transport(res.status(), "");
                line.log(&error);
                return Ok(replace_response(res, &error));
            }

            Ok(res.map_into_left_body())
        })
    }
}

fn needs_envelope(status: StatusCode, size: BodySize) -> bool {
    (status.is_client_error() || status.is_server_error())
        && matches!(size, BodySize::None | BodySize::Sized(0))
}

fn replace_response<B>(res: ServiceResponse<B>, error: &HttpError) -> ServiceResponse<EitherBody<B>> {
    let (req, _) = res.into_parts();
    ServiceResponse::new(req, error.error_response()).map_into_right_body()
}

/// Request id, method and path of the request being served
struct RequestLine {
    request_id: String,
    method: Method,
    path: String,
}

impl RequestLine {
    fn of(req: &HttpRequest) -> Self {
        Self {
            request_id: RequestId::of(req)
                .map(|id| id.to_string())
                .unwrap_or_else(|| "-".to_string()),
            method: req.method().clone(),
            path: req.path().to_string(),
        }
    }

    fn log(&self, error: &HttpError) {
        let status = error.status_code().as_u16();
        if error.status_code().is_server_error() {
            log::error!(
                "[{}] {} {} failed with {}: {}",
                self.request_id, self.method, self.path, status, error
            );
        } else {
            log::warn!(
                "[{}] {} {} rejected with {}: {}",
                self.request_id, self.method, self.path, status, error
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, web, App, HttpResponse};
    use ge_core::errors::ApiError;
    use serde_json::Value;

    async fn ok() -> HttpResponse {
        HttpResponse::Ok().body("fine")
    }

    async fn taken() -> Result<HttpResponse, HttpError> {
        Err(ApiError::conflict("SlugTaken").into())
    }

    #[::std::prelude::v1::test]
    fn test_needs_envelope() {
        assert!(needs_envelope(StatusCode::METHOD_NOT_ALLOWED, BodySize::Sized(0)));
        assert!(needs_envelope(StatusCode::INTERNAL_SERVER_ERROR, BodySize::None));
        assert!(!needs_envelope(StatusCode::NOT_FOUND, BodySize::Sized(12)));
        assert!(!needs_envelope(StatusCode::NO_CONTENT, BodySize::None));
        assert!(!needs_envelope(StatusCode::OK, BodySize::Sized(0)));
    }

    #[actix_web::test]
    async fn test_success_passes_through() {
        let app = test::init_service(
            App::new()
                .wrap(ErrorNormalizer)
                .route("/ok", web::get().to(ok)),
        )
        .await;

        let req = test::TestRequest::get().uri("/ok").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body = test::read_body(resp).await;
        assert_eq!(body, "fine");
    }

    #[actix_web::test]
    async fn test_bare_method_not_allowed_is_rewritten() {
        let app = test::init_service(
            App::new()
                .wrap(ErrorNormalizer)
                .service(web::resource("/ok").route(web::get().to(ok))),
        )
        .await;

        let req = test::TestRequest::delete().uri("/ok").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "METHOD_NOT_ALLOWED");
        assert_eq!(body["error"]["name"], "HttpError");
    }

    #[actix_web::test]
    async fn test_rendered_http_error_is_kept() {
        let app = test::init_service(
            App::new()
                .wrap(ErrorNormalizer)
                .route("/taken", web::get().to(taken)),
        )
        .await;

        let req = test::TestRequest::get().uri("/taken").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::CONFLICT);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "CONFLICT");
        assert_eq!(body["error"]["name"], "SlugTaken");
    }

    #[actix_web::test]
    async fn test_inner_service_error_is_reclassified() {
        let app = test::init_service(
            App::new()
                .wrap_fn(|_req, _srv| async {
                    Err::<ServiceResponse, Error>(actix_web::error::ErrorForbidden("blocked"))
                })
                .wrap(ErrorNormalizer)
                .route("/ok", web::get().to(ok)),
        )
        .await;

        let req = test::TestRequest::get().uri("/ok").to_request();
        let err = match test::try_call_service(&app, req).await {
            Ok(_) => panic!("inner service error was swallowed"),
            Err(err) => err,
        };

        let error = err.as_error::<HttpError>().unwrap();
        assert_eq!(error.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(error.reply().body.error().name, "HttpError");
        assert_eq!(error.reply().body.error().message, "blocked");
    }
}
