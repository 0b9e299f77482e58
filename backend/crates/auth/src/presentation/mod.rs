pub mod dto;
pub mod gate;
pub mod handlers;
pub mod router;
