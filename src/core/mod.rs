pub mod accent;
pub mod color;
pub mod constants;
pub mod ease;
pub mod field;
pub mod handoff;
pub mod menu;
pub mod pointer;
pub mod ticker;
pub mod timeline;
pub mod trail;

pub use accent::*;
pub use color::*;
pub use ease::*;
pub use field::*;
pub use handoff::*;
pub use menu::*;
pub use pointer::*;
pub use ticker::*;
pub use timeline::*;
pub use trail::*;
