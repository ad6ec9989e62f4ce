pub mod errors;
pub mod models;
pub mod ports;
pub mod service;

pub use errors::AccountError;
pub use models::Account;
pub use models::AccountId;
pub use models::AuthenticatedAccount;
pub use models::Login;
pub use models::Password;
pub use ports::AccountRepository;
pub use ports::AccountServicePort;
pub use service::AccountService;
