//! HTTP handler for the calculation endpoint
//!
//! Serves `POST /api/NPVCalculation/calculate` behind a Lambda Function URL.
//! Validation failures become 400 responses carrying the validation message;
//! anything else becomes a 500 with a generic message and the detail goes to
//! the log only.

use std::sync::Arc;

use lambda_http::http::{Method, StatusCode};
use lambda_http::{Body, Error, Request, Response};
use log::{error, info, warn};
use serde::Serialize;

use super::envelope::{
    ApiResponse, INTERNAL_ERROR, INTERNAL_ERROR_MESSAGE, INVALID_REQUEST, NOT_FOUND,
    SUCCESS_MESSAGE,
};
use crate::config::ServiceConfig;
use crate::service::{CalculationService, NpvCalculationRequest, NpvCalculationService};

pub const CALCULATE_PATH: &str = "/api/NPVCalculation/calculate";

/// Request router holding the calculation service and configuration
#[derive(Clone)]
pub struct NpvApi {
    service: Arc<dyn CalculationService>,
    config: ServiceConfig,
}

impl NpvApi {
    pub fn new(service: Arc<dyn CalculationService>, config: ServiceConfig) -> Self {
        Self { service, config }
    }

    /// Standard engine, configuration from the environment
    pub fn from_env() -> Self {
        let config = ServiceConfig::from_env();
        let service = NpvCalculationService::with_engine(&config);
        Self::new(Arc::new(service), config)
    }

    pub async fn handle(&self, event: Request) -> Result<Response<Body>, Error> {
        if *event.method() == Method::OPTIONS {
            return self.preflight();
        }

        let path = event.uri().path().trim_end_matches('/');
        if *event.method() == Method::POST && path.eq_ignore_ascii_case(CALCULATE_PATH) {
            return self.calculate(event).await;
        }

        self.json_response(
            StatusCode::NOT_FOUND,
            &ApiResponse::<()>::failure(
                NOT_FOUND,
                format!("No route for {} {}", event.method(), event.uri().path()),
            ),
        )
    }

    async fn calculate(&self, event: Request) -> Result<Response<Body>, Error> {
        let request: NpvCalculationRequest = match parse_body(event.body()) {
            Ok(r) => r,
            Err(message) => {
                warn!("Rejected NPV calculation request: {}", message);
                return self.bad_request(message);
            }
        };

        info!(
            "Received NPV calculation request with {} cash flows",
            request.cash_flow_amounts().len()
        );

        // CPU-bound; keep it off the runtime threads
        let service = Arc::clone(&self.service);
        let outcome =
            tokio::task::spawn_blocking(move || service.calculate_npv_range(&request)).await;

        match outcome {
            Ok(Ok(result)) => {
                info!(
                    "NPV calculation completed with {} results",
                    result.metadata.calculation_count
                );
                self.json_response(StatusCode::OK, &ApiResponse::success(result, SUCCESS_MESSAGE))
            }
            Ok(Err(e)) if e.is_client_error() => {
                warn!("Invalid argument in NPV calculation request: {}", e);
                self.bad_request(e.to_string())
            }
            Ok(Err(e)) => {
                error!("Unexpected error during NPV calculation: {}", e);
                self.internal_error()
            }
            Err(e) => {
                error!("NPV calculation task failed: {}", e);
                self.internal_error()
            }
        }
    }

    fn preflight(&self) -> Result<Response<Body>, Error> {
        Ok(Response::builder()
            .status(StatusCode::OK)
            .header("Access-Control-Allow-Origin", &self.config.allowed_origin)
            .header("Access-Control-Allow-Methods", "POST, OPTIONS")
            .header("Access-Control-Allow-Headers", "Content-Type")
            .body(Body::Empty)?)
    }

    fn bad_request(&self, message: impl Into<String>) -> Result<Response<Body>, Error> {
        self.json_response(
            StatusCode::BAD_REQUEST,
            &ApiResponse::<()>::failure(INVALID_REQUEST, message),
        )
    }

    fn internal_error(&self) -> Result<Response<Body>, Error> {
        self.json_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            &ApiResponse::<()>::failure(INTERNAL_ERROR, INTERNAL_ERROR_MESSAGE),
        )
    }

    fn json_response<T: Serialize>(
        &self,
        status: StatusCode,
        body: &T,
    ) -> Result<Response<Body>, Error> {
        Ok(Response::builder()
            .status(status)
            .header("Content-Type", "application/json")
            .header("Access-Control-Allow-Origin", &self.config.allowed_origin)
            .header("Access-Control-Allow-Methods", "POST, OPTIONS")
            .header("Access-Control-Allow-Headers", "Content-Type")
            .body(Body::Text(serde_json::to_string(body)?))?)
    }
}

fn parse_body(body: &Body) -> Result<NpvCalculationRequest, String> {
    let bytes: &[u8] = match body {
        Body::Text(s) => s.as_bytes(),
        Body::Binary(b) => b.as_slice(),
        Body::Empty => return Err("Request body is required".to_string()),
    };

    serde_json::from_slice(bytes).map_err(|e| format!("Invalid JSON: {}", e))
}
