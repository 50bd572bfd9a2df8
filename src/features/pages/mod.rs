//! Page shells for the browser front end. Presentation glue only; all data
//! comes from the JSON API.

pub mod handlers;
pub mod routes;
