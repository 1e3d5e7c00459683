pub mod health;
pub mod judge;
pub mod language;
pub mod snippet;
pub mod web;
