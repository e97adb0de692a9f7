mod session;

pub use session::Session;
pub use session::SessionError;
pub use session::SessionManager;
