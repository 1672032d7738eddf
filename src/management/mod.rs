mod auth;
mod export;

pub use auth::TokenManager;
pub use export::AuthProvider;
pub use export::ExportError;
pub use export::PlaylistExport;
pub use export::PlaylistSource;
pub use export::export;
