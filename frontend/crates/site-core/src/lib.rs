pub mod error;
pub mod identity;
pub mod view;

pub use error::{CoreError, Result};
pub use identity::Identity;
pub use view::View;
