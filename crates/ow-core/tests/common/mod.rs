#![allow(dead_code)]

pub mod dav_server;
