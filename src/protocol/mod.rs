pub mod input;
pub mod output;

pub use input::WebhookEvent;
pub use output::RouteOutput;
