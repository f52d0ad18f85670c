#![forbid(unsafe_code)]

pub mod app_services;
pub mod error;
pub mod gateway;
pub mod runner;

pub use learner_core::Clock;

pub use app_services::AppServices;
pub use error::{AppServicesError, GatewayError};
pub use gateway::{ExecutionGateway, LlmClient, LlmConfig, LlmGateway};
pub use runner::{CodeRunner, MIN_RUN_LATENCY, apply_outcome};
