#![allow(dead_code)]

pub mod factories;
pub mod scripted_client;
pub mod stub_server;
