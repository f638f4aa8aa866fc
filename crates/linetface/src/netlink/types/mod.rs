//! Fixed-size kernel headers and attribute ids for rtnetlink messages.

pub mod addr;
pub mod link;
