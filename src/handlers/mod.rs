pub mod healthz;
pub mod not_found;
pub mod status;

pub use healthz::healthz_handler;
pub use not_found::not_found_handler;
pub use status::status_handler;
