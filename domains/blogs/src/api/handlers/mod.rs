//! HTTP handlers for the Blogs domain

pub mod blogs;
