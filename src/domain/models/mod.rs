mod action;
mod author;
mod backend;
mod bubble;
mod draft_email;
mod event;
mod loading;
mod message;
mod profile;
mod query;
mod textarea;

pub use action::*;
pub use author::*;
pub use backend::*;
pub use bubble::*;
pub use draft_email::*;
pub use event::*;
pub use loading::*;
pub use message::*;
pub use profile::*;
pub use query::*;
pub use textarea::*;
