mod getheader;
pub mod init_data;
mod manager;
mod manager_middleware;
pub mod method;

pub use getheader::*;
pub use init_data::{AuthError, InitData};
pub use manager::*;
pub use manager_middleware::*;
pub use method::INIT_DATA_HEADER;
