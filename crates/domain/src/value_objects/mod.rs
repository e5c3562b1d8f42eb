pub mod price_point;
pub mod scenario_request;
pub mod scenario_result;
pub mod settlement;

pub use price_point::PricePoint;
pub use scenario_request::ScenarioRequest;
pub use scenario_result::ScenarioResult;
pub use settlement::Settlement;
