mod error;
mod route_base;
mod route_codec;

pub use error::RouteError;
pub use route_base::RouteBase;
pub use route_codec::{decode_route, encode_route};
