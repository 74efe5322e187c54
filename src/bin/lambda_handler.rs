//! AWS Lambda handler for ranged NPV calculations
//!
//! Accepts `POST /api/NPVCalculation/calculate` with a JSON body of cash flows,
//! rate bounds and increment, and returns the NPV at each rate.
//!
//! Supports Lambda Function URLs for direct HTTP access.

use lambda_http::{run, service_fn, Error, Request};
use log::info;

use npv_calculator::NpvApi;

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();

    let api = NpvApi::from_env();
    info!("NPV calculation handler starting");

    let api = &api;
    run(service_fn(move |event: Request| async move { api.handle(event).await })).await
}
