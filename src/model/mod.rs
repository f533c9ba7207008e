mod entities;
mod error;
mod request;
mod response;
mod view_state;

pub use entities::*;
pub use error::*;
pub use request::*;
pub use response::*;
pub use view_state::*;
