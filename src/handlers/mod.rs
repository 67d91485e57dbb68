pub mod admin;
pub mod default;
pub mod global_404;
pub mod ping;
pub mod vote;

pub use admin::admin_action_handler;

pub use default::default_route_handler;

pub use global_404::global_404_handler;

pub use ping::ping_handler;

pub use vote::vote_action_handler;
