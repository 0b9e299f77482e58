pub mod change_password;
pub mod config;
pub mod sign_in;
pub mod token;

pub use change_password::{ChangePasswordInput, ChangePasswordUseCase};
pub use sign_in::{SignInInput, SignInOutput, SignInUseCase};
