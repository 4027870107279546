//! User aggregate: registered accounts that own contact aliases.

pub mod entity;
pub mod repository;
