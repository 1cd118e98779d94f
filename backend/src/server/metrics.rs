//! Optional Prometheus middleware.
//!
//! Wrapping the app in [`MetricsLayer`] keeps a single concrete app type
//! whether or not a registry was built at start-up.

use std::sync::Arc;

use actix_service::{
    Service, ServiceExt as _, Transform,
    boxed::{self, BoxService},
};
use actix_web::body::{BoxBody, MessageBody};
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::middleware::Compat;
use actix_web_prom::PrometheusMetrics;
use futures_util::future::LocalBoxFuture;

type BoxedResponse = ServiceResponse<BoxBody>;

#[derive(Clone)]
pub(crate) struct MetricsLayer(Option<Arc<PrometheusMetrics>>);

impl MetricsLayer {
    #[must_use]
    pub(crate) fn new(metrics: Option<PrometheusMetrics>) -> Self {
        Self(metrics.map(Arc::new))
    }
}

impl<S, B> Transform<S, ServiceRequest> for MetricsLayer
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error> + 'static,
    B: MessageBody + 'static,
{
    type Response = BoxedResponse;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = BoxService<ServiceRequest, BoxedResponse, actix_web::Error>;
    type Future = LocalBoxFuture<'static, Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        let Some(metrics) = self.0.clone() else {
            let passthrough = service.map(|res: ServiceResponse<B>| res.map_into_boxed_body());
            return Box::pin(async move { Ok(boxed::service(passthrough)) });
        };
        let transform = Compat::new(PrometheusMetrics::clone(&metrics)).new_transform(service);
        Box::pin(async move { Ok(boxed::service(transform.await?)) })
    }
}
