pub mod actions;
mod app_state;
mod assistant;
mod bubble_list;
mod chat_session;
pub mod clipboard;
pub mod events;
#[cfg(test)]
pub mod fakes;
mod profile_view;
mod profiles;
mod prompts;
mod scroll;

pub use app_state::*;
pub use assistant::*;
pub use bubble_list::*;
pub use chat_session::*;
pub use profile_view::*;
pub use profiles::*;
pub use prompts::*;
pub use scroll::*;
