mod config;
mod registry;
mod search_service;
mod support;
