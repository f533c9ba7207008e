mod repository_remote;
mod service_http;
mod view_model_cards;

pub use repository_remote::*;
pub use service_http::*;
pub use view_model_cards::*;
