pub mod constants;
pub mod error;
pub mod hand;
pub mod interaction;
pub mod markers;
pub mod pinch;
pub mod planets;
pub mod pose;
pub mod proximity;
pub mod render;
pub mod scene;
pub mod session;
pub mod slider;
pub mod sync;

pub use error::*;
pub use hand::*;
pub use interaction::*;
pub use markers::*;
pub use pinch::*;
pub use planets::*;
pub use pose::*;
pub use proximity::*;
pub use render::*;
pub use scene::*;
pub use session::*;
pub use slider::*;
pub use sync::*;
