pub mod accessor;
pub mod config;
pub mod decode;
pub mod error;
pub mod event;
pub mod session;

pub use accessor::*;
pub use config::*;
pub use error::*;
pub use event::*;
pub use session::*;
